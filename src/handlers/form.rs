use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{FormSession, FormState};
use crate::services::form;
use crate::state::AppState;

static FORM_HTML: &str = include_str!("../web/form.html");

pub async fn form_page() -> Html<&'static str> {
    Html(FORM_HTML)
}

fn session_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("form session {id}"))
}

// POST /api/form
#[derive(Serialize)]
pub struct NewFormResponse {
    pub id: String,
    pub state: FormState,
}

pub async fn create_form(State(state): State<Arc<AppState>>) -> Json<NewFormResponse> {
    let id = uuid::Uuid::new_v4().to_string();
    let session = FormSession::new();
    let snapshot = session.state.clone();

    state.sessions.lock().unwrap().insert(id.clone(), session);
    tracing::info!(session = %id, "new form session");

    Json(NewFormResponse {
        id,
        state: snapshot,
    })
}

// GET /api/form/:id
pub async fn get_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FormState>, AppError> {
    let sessions = state.sessions.lock().unwrap();
    let sess = sessions.get(&id).ok_or_else(|| session_not_found(&id))?;
    Ok(Json(sess.state.clone()))
}

// POST /api/form/:id/email
#[derive(Deserialize)]
pub struct EmailChange {
    pub email: String,
}

pub async fn update_email(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<EmailChange>,
) -> Result<Json<FormState>, AppError> {
    form::email_changed(&state, &id, body.email)
        .map(Json)
        .ok_or_else(|| session_not_found(&id))
}

// POST /api/form/:id/rating
#[derive(Deserialize)]
pub struct RatingChange {
    pub item_id: u32,
    pub rating: u8,
}

pub async fn set_rating(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<RatingChange>,
) -> Result<Json<FormState>, AppError> {
    if !(1..=5).contains(&body.rating) {
        return Err(AppError::InvalidRating(body.rating));
    }

    form::rate(&state, &id, body.item_id, body.rating)
        .map(Json)
        .ok_or_else(|| session_not_found(&id))
}

// POST /api/form/:id/comment
#[derive(Deserialize)]
pub struct CommentChange {
    pub comment: String,
}

pub async fn set_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<CommentChange>,
) -> Result<Json<FormState>, AppError> {
    form::set_comment(&state, &id, body.comment)
        .map(Json)
        .ok_or_else(|| session_not_found(&id))
}

// POST /api/form/:id/name
#[derive(Deserialize)]
pub struct NameChange {
    pub name: String,
}

pub async fn set_name(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<NameChange>,
) -> Result<Json<FormState>, AppError> {
    form::set_name(&state, &id, body.name)
        .map(Json)
        .ok_or_else(|| session_not_found(&id))
}

// POST /api/form/:id/submit
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FormState>, AppError> {
    form::submit(&state, &id)
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(&id))
}
