use crate::{
    application::locate_user::{
        dto::{GeolocationReport, LocateResponse},
        use_case::LocateUserUseCase,
    },
    presentation::http::state::AppState,
};
use axum::{Json, extract::State};

/// Always 200: a failed fix is answered with a notice, not an HTTP error.
pub async fn locate_user(
    State(state): State<AppState>,
    Json(report): Json<GeolocationReport>,
) -> Json<LocateResponse> {
    Json(LocateUserUseCase::new(state.notices.clone()).execute(report))
}
