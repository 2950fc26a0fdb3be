use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::questions::{get_all_questions, get_questions_for_category};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::extract::Json;
use crate::telemetry::QUIZ_QUESTION_CNTR;
use crate::trivia::pick_quiz_question;

use super::ApiResponse;

/// A missing or null `id` means "play across all categories"; any concrete id
/// narrows the pool to that category.
#[derive(Deserialize)]
struct QuizCategory {
    id: Option<i64>,
}

#[derive(Deserialize)]
struct QuizRequest {
    quiz_category: Option<QuizCategory>,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

/// `question: null` signals that every question in the pool has been played.
#[derive(Serialize)]
struct QuizResponse {
    question: Option<Question>,
}

async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuizRequest>,
) -> ApiResponse<Json<QuizResponse>> {
    let candidates = match body.quiz_category.and_then(|c| c.id) {
        Some(category) => get_questions_for_category(&pool, category).await?,
        None => get_all_questions(&pool).await?,
    };
    let question = pick_quiz_question(&candidates, &body.previous_questions).cloned();
    if let Some(ref q) = question {
        let category = q.category.to_string();
        QUIZ_QUESTION_CNTR.with_label_values(&[&category]).inc();
    }
    Ok(Json(QuizResponse { question }))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_quiz_question))
        .with_state(state)
}
