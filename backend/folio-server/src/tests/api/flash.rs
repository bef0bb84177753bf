use crate::{Flash, FlashLevel, IncomingFlash};

use axum::{
    extract::FromRequestParts,
    http::{Request, header::COOKIE},
};
use googletest::prelude::*;
use proptest::prelude::*;

async fn extract(cookie: Option<&str>) -> IncomingFlash {
    let mut builder = Request::builder().uri("/profile");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();

    IncomingFlash::from_request_parts(&mut parts, &())
        .await
        .unwrap()
}

#[test]
fn given_constructors_when_building_then_levels_match() {
    assert_that!(Flash::success("a").level, eq(FlashLevel::Success));
    assert_that!(Flash::info("a").level, eq(FlashLevel::Info));
    assert_that!(Flash::warning("a").level, eq(FlashLevel::Warning));
    assert_that!(Flash::danger("a").level, eq(FlashLevel::Danger));
}

#[test]
fn given_encoded_flash_when_inspected_then_is_cookie_safe() {
    let encoded = Flash::warning("Ça va? \"quoted\"; semi=colon").encode();

    assert!(
        encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[test]
fn given_garbage_when_decoding_then_none() {
    assert!(Flash::decode("not base64 !!").is_none());
    // valid base64 of `{}`
    assert!(Flash::decode("e30").is_none());
}

#[test]
fn given_level_when_serialized_then_is_bootstrap_class() {
    let json = serde_json::to_string(&FlashLevel::Danger).unwrap();

    assert_that!(json.as_str(), eq("\"danger\""));
}

#[tokio::test]
async fn given_flash_cookie_when_extracting_then_flash_and_cookie_flag_set() {
    let flash = Flash::info("You already logged in");
    let cookie = format!("folio_flash={}", flash.encode());

    let incoming = extract(Some(&cookie)).await;

    assert_eq!(incoming.flash, Some(flash));
    assert!(incoming.from_cookie);
}

#[tokio::test]
async fn given_tampered_flash_cookie_when_extracting_then_no_flash_but_cookie_flagged() {
    let incoming = extract(Some("folio_flash=%%%")).await;

    assert!(incoming.flash.is_none());
    assert!(incoming.from_cookie);
}

#[tokio::test]
async fn given_empty_flash_cookie_when_extracting_then_nothing_to_clear() {
    let incoming = extract(Some("folio_flash=")).await;

    assert!(incoming.flash.is_none());
    assert!(!incoming.from_cookie);
}

#[tokio::test]
async fn given_no_cookie_when_extracting_then_default() {
    let incoming = extract(None).await;

    assert!(incoming.flash.is_none());
    assert!(!incoming.from_cookie);
}

#[test]
fn given_cookie_flash_when_replaced_then_keeps_cookie_flag() {
    let incoming = IncomingFlash {
        flash: Some(Flash::info("old")),
        from_cookie: true,
    };

    let replaced = incoming.replace(Flash::danger("Incorrect Password"));

    assert_eq!(replaced.flash, Some(Flash::danger("Incorrect Password")));
    assert!(replaced.from_cookie);
}

proptest! {
    #[test]
    fn prop_any_message_survives_cookie_encoding(message in ".*") {
        let flash = Flash::success(message);
        prop_assert_eq!(Flash::decode(&flash.encode()), Some(flash));
    }
}
