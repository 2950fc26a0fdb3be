use std::collections::HashMap;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::db::queries::questions::{
    self, get_all_questions, get_question_by_id, get_questions_for_category, search_questions,
};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::{Json, Path, Query};
use crate::trivia::{category_index, paginate};

use super::ApiResponse;

#[derive(Deserialize)]
struct PageQuery {
    page: Option<i64>,
}

#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    questions: Vec<Question>,
    total_questions: usize,
    categories: HashMap<String, String>,
}

#[derive(Serialize)]
struct CreatedQuestion {
    success: bool,
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
}

#[derive(Serialize)]
struct SearchResults {
    questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    total_questions: usize,
    #[serde(rename = "currentCategory")]
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct CategoryQuestions {
    questions: Vec<Question>,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let questions = get_all_questions(&pool).await?;
    let page_questions = paginate(&questions, page.unwrap_or(1)).to_vec();
    // An empty slice is the only 404 trigger here, whether the page is past
    // the end or there are no questions at all.
    if page_questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool).await?;
    Ok(Json(QuestionsPage {
        total_questions: questions.len(),
        questions: page_questions,
        categories: category_index(&categories),
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Json(body): Json<NewQuestion>,
) -> ApiResponse<Json<CreatedQuestion>> {
    questions::create_question(
        &pool,
        body.question.as_deref(),
        body.answer.as_deref(),
        body.difficulty,
        body.category,
    )
    .await?;
    // The public contract echoes the submitted fields and does not expose the
    // newly assigned id.
    Ok(Json(CreatedQuestion {
        success: true,
        question: body.question,
        answer: body.answer,
        difficulty: body.difficulty,
        category: body.category,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<Deleted>> {
    let Some(question) = get_question_by_id(&pool, id).await? else {
        return Err(ApiError::NotFound);
    };
    questions::delete_question(&pool, question.id).await?;
    tracing::info!("Deleted question {id}");
    Ok(Json(Deleted { success: true }))
}

async fn search(
    State(pool): State<SqlitePool>,
    Json(body): Json<SearchBody>,
) -> ApiResponse<Json<SearchResults>> {
    let term = match body.search_term.as_deref() {
        Some(term) if !term.is_empty() => term,
        _ => return Err(ApiError::Unprocessable),
    };
    let results = search_questions(&pool, term).await?;
    Ok(Json(SearchResults {
        total_questions: results.len(),
        questions: results,
        current_category: None,
    }))
}

async fn questions_by_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<Json<CategoryQuestions>> {
    // No existence check on the category; an unknown id is just an empty
    // list, not a 404.
    let questions = get_questions_for_category(&pool, category_id).await?;
    Ok(Json(CategoryQuestions {
        questions: paginate(&questions, page.unwrap_or(1)).to_vec(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search))
        .route(
            "/categories/{category_id}/questions",
            get(questions_by_category),
        )
        .with_state(state)
}
