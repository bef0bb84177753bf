#![allow(dead_code)]

//! Test infrastructure for folio-server handler tests

use folio_auth::{SessionTokens, hash_password};
use folio_core::ProfileDetails;
use folio_db::ProfileRepository;
use folio_server::{AppState, Flash, ImageStore, SiteSettings, Templates};

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const OWNER_PASSWORD: &str = "correct horse battery";
pub const SESSION_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes-long";
pub const MULTIPART_BOUNDARY: &str = "folio-test-boundary";

/// Everything a test needs; the temp dir lives as long as the harness
pub struct TestApp {
    pub state: AppState,
    pub assets: TempDir,
}

impl TestApp {
    pub fn pool(&self) -> &SqlitePool {
        &self.state.pool
    }

    /// Stored password hash of the provisioned owner
    pub async fn owner_hash(&self) -> String {
        ProfileRepository::new(self.pool().clone())
            .find()
            .await
            .unwrap()
            .expect("owner profile must be provisioned")
            .password_hash
    }

    /// `Cookie` header value carrying a valid owner session
    pub async fn session_cookie(&self) -> String {
        let hash = self.owner_hash().await;
        let token = self.state.sessions.issue(1, &hash).unwrap();
        format!("folio_session={}", token)
    }
}

/// App state over an in-memory database and a temporary asset root,
/// with the owner profile provisioned
pub async fn create_test_app() -> TestApp {
    let app = create_unprovisioned_app().await;
    create_test_profile(app.pool()).await;
    app
}

/// App state with an empty profile table
pub async fn create_unprovisioned_app() -> TestApp {
    let pool = folio_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    let assets = TempDir::new().expect("Failed to create asset dir");
    let images = ImageStore::new(assets.path());
    images.ensure_dirs().await.expect("Failed to create slot dirs");

    let state = AppState {
        pool,
        sessions: Arc::new(SessionTokens::with_hs256(SESSION_SECRET, 3600)),
        templates: Arc::new(Templates::new().expect("Templates must compile")),
        images: Arc::new(images),
        settings: Arc::new(SiteSettings {
            public_url: "/login".to_string(),
            secure_cookie: false,
            max_upload_bytes: 1024 * 1024,
        }),
    };

    TestApp { state, assets }
}

pub async fn create_test_profile(pool: &SqlitePool) {
    let details = ProfileDetails::parse("Ada Lovelace", "London", "1815-12-10", "36", "")
        .expect("valid profile details");
    let hash = hash_password(OWNER_PASSWORD).expect("hash owner password");

    ProfileRepository::new(pool.clone())
        .create(&details, &hash)
        .await
        .expect("Failed to create test profile");
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// `application/x-www-form-urlencoded` POST
pub fn post_form(uri: &str, cookie: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

/// `multipart/form-data` POST with text fields and `(field, filename, bytes)` files
pub fn post_multipart(
    uri: &str,
    cookie: Option<&str>,
    fields: &[(&str, &str)],
    files: &[(&str, &str, &[u8])],
) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, filename, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

/// Minimal percent-encoding for form bodies
fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

/// Every `Set-Cookie` header of the response
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

/// The flash a redirect hands to the next page
pub fn flash(response: &Response<Body>) -> Option<Flash> {
    set_cookies(response).iter().find_map(|cookie| {
        cookie
            .strip_prefix("folio_flash=")
            .and_then(|rest| rest.split(';').next())
            .and_then(Flash::decode)
    })
}

/// Value of the session cookie set by the response, if any
pub fn new_session(response: &Response<Body>) -> Option<String> {
    set_cookies(response).iter().find_map(|cookie| {
        cookie
            .strip_prefix("folio_session=")
            .and_then(|rest| rest.split(';').next())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}

/// Sorted file names in an asset directory
pub fn stored_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

pub const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F'];
