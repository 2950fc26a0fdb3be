use std::collections::HashMap;

use axum::{extract::State, routing::get, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::server::app::AppState;
use crate::server::extract::Json;
use crate::trivia::category_index;

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesResponse {
    categories: HashMap<String, String>,
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesResponse>> {
    let categories = get_all_categories(&pool).await?;
    Ok(Json(CategoriesResponse {
        categories: category_index(&categories),
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .with_state(state)
}
