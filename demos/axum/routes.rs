use axum::extract::State;
use axum::http::StatusCode;

use crate::gate::AppState;

pub async fn home() -> &'static str {
    "Welcome to the gatekeeper demo!"
}

pub async fn posts() -> &'static str {
    r#"[{"id":1,"title":"Hello"}]"#
}

/// Stands in for the admin form: the body is the newline separated allow-list.
pub async fn replace_allow_list(State(state): State<AppState>, body: String) -> (StatusCode, String) {
    let accepted = state.store.replace(&body);
    (StatusCode::OK, accepted.join("\n"))
}
