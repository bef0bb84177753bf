//! Cookie headers used by the admin panel.
//!
//! Both cookies are `HttpOnly` and scoped to the whole site. The session
//! cookie is `SameSite=Strict` so links from other sites never carry it; the
//! flash cookie is `SameSite=Lax`.

use crate::Flash;

use axum::http::{HeaderMap, header::COOKIE};

pub const SESSION_COOKIE: &str = "folio_session";
pub const FLASH_COOKIE: &str = "folio_flash";

/// Value of a request cookie, if sent
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    with_secure(
        format!(
            "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age_secs}"
        ),
        secure,
    )
}

pub fn expired_session_cookie(secure: bool) -> String {
    with_secure(
        format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0"),
        secure,
    )
}

pub fn flash_cookie(flash: &Flash) -> String {
    format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        flash.encode()
    )
}

pub fn expired_flash_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

fn with_secure(cookie: String, secure: bool) -> String {
    if secure {
        format!("{cookie}; Secure")
    } else {
        cookie
    }
}
