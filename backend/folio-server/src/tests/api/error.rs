use crate::api::cookies::FLASH_COOKIE;
use crate::{ApiError, AssetError, Flash};

use folio_auth::AuthError;
use folio_core::CoreError;

use std::panic::Location;

use axum::{http::header, response::IntoResponse};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn flash_of(response: &axum::response::Response) -> Option<Flash> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.strip_prefix(&format!("{FLASH_COOKIE}=")))
        .filter_map(|rest| rest.split(';').next())
        .find_map(Flash::decode)
}

#[tokio::test]
async fn test_not_found_returns_404_with_text_body() {
    let response = ApiError::not_found("Experience 9 not found").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Experience 9 not found");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let response = ApiError::bad_request("Missing required field 'name'").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let response = ApiError::conflict("This skill already exists").into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_internal_error_hides_message() {
    let response = ApiError::internal("connection pool exhausted").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Internal server error");
}

#[test]
fn test_unauthorized_redirects_to_login_with_warning() {
    let response = ApiError::unauthorized("no session").into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    assert_eq!(
        flash_of(&response),
        Some(Flash::warning("Please log in to access this page"))
    );
}

#[test]
fn test_recover_validation_becomes_warning_redirect() {
    let error = ApiError::Validation {
        message: "Scale must be between 1 and 100".into(),
        field: Some("scale".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let redirect = error.recover("/resume/skills").unwrap();
    assert_eq!(redirect.location(), "/resume/skills");

    let response = redirect.into_response();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        flash_of(&response),
        Some(Flash::warning("Scale must be between 1 and 100"))
    );
}

#[test]
fn test_recover_invalid_file_becomes_warning_redirect() {
    let error = ApiError::InvalidFile {
        message: "'notes.txt' is not an accepted image".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let response = error.recover("/profile").unwrap().into_response();

    assert_eq!(
        flash_of(&response),
        Some(Flash::warning("'notes.txt' is not an accepted image"))
    );
}

#[test]
fn test_recover_conflict_becomes_danger_redirect() {
    let response = ApiError::conflict("This contact already exists")
        .recover("/contacts")
        .unwrap()
        .into_response();

    assert_eq!(
        flash_of(&response),
        Some(Flash::danger("This contact already exists"))
    );
}

#[test]
fn test_recover_leaves_not_found_alone() {
    let result = ApiError::not_found("gone").recover("/contacts");

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[test]
fn test_recover_leaves_internal_alone() {
    let result = ApiError::internal("boom").recover("/profile");

    assert!(matches!(result, Err(ApiError::Internal { .. })));
}

#[test]
fn test_core_validation_converts_to_validation() {
    let api_error: ApiError = CoreError::validation("age", "Age must be a whole number").into();

    match api_error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("age"));
            assert_eq!(message, "Age must be a whole number");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_unknown_kind_converts_to_not_found() {
    let core_error = "hobby".parse::<folio_core::AbilityKind>().unwrap_err();
    let api_error: ApiError = core_error.into();

    assert!(matches!(api_error, ApiError::NotFound { .. }));
}

#[test]
fn test_weak_password_converts_to_validation_on_new_password() {
    let auth_error = folio_auth::validate_new_password("short").unwrap_err();
    assert!(matches!(auth_error, AuthError::WeakPassword { .. }));

    let api_error: ApiError = auth_error.into();

    match api_error {
        ApiError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("new_password"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_sentinel_asset_error_converts_to_validation() {
    let asset_error = AssetError::SentinelImage {
        slot: "thumbnail",
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = asset_error.into();

    match api_error {
        ApiError::Validation { message, .. } => {
            assert_eq!(message, "You can't remove the default thumbnail image");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_asset_io_error_converts_to_internal() {
    let asset_error = AssetError::Io {
        path: "static/images/bg".into(),
        source: std::io::Error::other("disk full"),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = asset_error.into();

    assert!(matches!(api_error, ApiError::Internal { .. }));
}
