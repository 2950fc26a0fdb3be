use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_category(pool: &SqlitePool, kind: &str) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO categories (type) VALUES (?1)
        "#,
    )
    .bind(kind)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> sqlx::Result<()> {
    for category in categories {
        sqlx::query(
            r#"
            INSERT INTO categories (id, type) VALUES (?1, ?2)
            "#,
        )
        .bind(category.id)
        .bind(&category.kind)
        .execute(pool)
        .await?;
    }
    Ok(())
}
