use axum::{Json, Router, response::IntoResponse, routing::get};
use axum_extra::extract::cookie::CookieJar;

use crate::axum_http::flash::take_flash;

pub fn routes() -> Router {
    Router::new().route("/", get(consume_flash))
}

/// Hands the pending flash message to the frontend exactly once.
pub async fn consume_flash(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = take_flash(jar);
    (jar, Json(flash))
}
