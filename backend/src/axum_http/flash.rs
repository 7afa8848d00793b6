//! One-shot flash messages carried in a cookie between a redirect and the
//! page that renders it.

use anyhow::Result;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use domain::value_objects::access_decisions::FlashMessage;

pub const FLASH_COOKIE: &str = "rashmati_flash";

pub fn encode_flash(flash: &FlashMessage) -> Result<String> {
    let json = serde_json::to_vec(flash)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode_flash(raw: &str) -> Option<FlashMessage> {
    let json = URL_SAFE_NO_PAD.decode(raw).ok()?;
    serde_json::from_slice(&json).ok()
}

pub fn with_flash(jar: CookieJar, flash: &FlashMessage) -> Result<CookieJar> {
    let cookie = Cookie::build((FLASH_COOKIE, encode_flash(flash)?))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok(jar.add(cookie))
}

/// Reads the pending flash message and clears it.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<FlashMessage>) {
    let Some(raw) = jar.get(FLASH_COOKIE).map(|cookie| cookie.value().to_string()) else {
        return (jar, None);
    };

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, decode_flash(&raw))
}
