use crate::{
    application::submit_contact::{dto::ContactRequest, use_case::SubmitContactUseCase},
    domain::notice::entity::Notice,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Json, extract::State, http::StatusCode};

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<(StatusCode, Json<Notice>), AppError> {
    let notice = SubmitContactUseCase::new(state.notices.clone()).execute(payload)?;
    Ok((StatusCode::ACCEPTED, Json(notice)))
}
