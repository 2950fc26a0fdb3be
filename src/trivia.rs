//! Pagination, category indexing and quiz-question selection. Everything here
//! is pure; the route handlers fetch rows and feed them through.

use std::collections::HashMap;

use crate::db::{Category, Question};

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page `page` (1-based) of `items`, ten per page. Non-positive and
/// past-the-end pages come back empty; whether that is an error is the
/// caller's call.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }
    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// Map from the string form of each category id to its label, as the frontend
/// expects categories keyed by id.
pub fn category_index(categories: &[Category]) -> HashMap<String, String> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), c.kind.clone()))
        .collect()
}

/// First pool question the player has not seen yet, in retrieval order.
/// `None` means the pool is exhausted and the quiz is over.
pub fn pick_quiz_question<'a>(pool: &'a [Question], previous: &[i64]) -> Option<&'a Question> {
    pool.iter().find(|q| !previous.contains(&q.id))
}
