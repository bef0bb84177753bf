use crate::{AssetError, ImageStore, UploadedFile};

use folio_core::ImageSlot;

use googletest::prelude::*;
use tempfile::TempDir;

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F'];
const GIF: &[u8] = b"GIF89a\x01\x00\x01\x00";
const WEBP: &[u8] = b"RIFF\x24\x00\x00\x00WEBPVP8 ";

fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

async fn store_in_tempdir() -> (TempDir, ImageStore) {
    let dir = TempDir::new().unwrap();
    let store = ImageStore::new(dir.path());
    store.ensure_dirs().await.unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_fresh_root_when_ensuring_dirs_then_slot_directories_exist() {
    let (dir, _store) = store_in_tempdir().await;

    assert!(dir.path().join("thumbnail").is_dir());
    assert!(dir.path().join("bg").is_dir());
    assert!(dir.path().join("logo").is_dir());
}

#[tokio::test]
async fn given_fresh_root_when_ensuring_dirs_then_default_images_installed() {
    let (dir, store) = store_in_tempdir().await;

    let thumbnail = std::fs::read(store.path_of(ImageSlot::Thumbnail, "thumbnail-img.jpg"));
    let background = std::fs::read(store.path_of(ImageSlot::Background, "background-img.jpg"));

    assert!(thumbnail.unwrap().starts_with(&[0xFF, 0xD8, 0xFF]));
    assert!(background.unwrap().starts_with(&[0xFF, 0xD8, 0xFF]));
    assert!(file_names(&dir.path().join("logo")).is_empty());
}

#[tokio::test]
async fn given_existing_default_when_ensuring_dirs_again_then_left_alone() {
    let (_dir, store) = store_in_tempdir().await;
    let thumbnail = store.path_of(ImageSlot::Thumbnail, "thumbnail-img.jpg");
    std::fs::write(&thumbnail, JPEG).unwrap();

    store.ensure_dirs().await.unwrap();

    assert_eq!(std::fs::read(&thumbnail).unwrap(), JPEG);
}

#[test]
fn given_each_allowed_format_when_checking_then_extension_returned() {
    let store = ImageStore::new("unused");

    for (name, bytes, ext) in [
        ("a.png", PNG, "png"),
        ("b.JPG", JPEG, "jpg"),
        ("c.jpeg", JPEG, "jpeg"),
        ("d.gif", GIF, "gif"),
        ("e.webp", WEBP, "webp"),
    ] {
        let checked = store.check(&UploadedFile::new(name, bytes)).unwrap();
        assert_eq!(checked, ext, "{name}");
    }
}

#[test]
fn given_disallowed_extension_when_checking_then_invalid_file() {
    let store = ImageStore::new("unused");

    let result = store.check(&UploadedFile::new("notes.txt", PNG));

    assert!(matches!(result, Err(AssetError::InvalidFile { .. })));
}

#[test]
fn given_svg_when_checking_then_invalid_file() {
    let store = ImageStore::new("unused");

    let result = store.check(&UploadedFile::new("logo.svg", b"<svg/>".to_vec()));

    assert!(matches!(result, Err(AssetError::InvalidFile { .. })));
}

#[test]
fn given_empty_file_when_checking_then_invalid_file() {
    let store = ImageStore::new("unused");

    let result = store.check(&UploadedFile::new("empty.png", Vec::new()));

    match result {
        Err(AssetError::InvalidFile { message, .. }) => {
            assert_that!(message.as_str(), contains_substring("empty"));
        }
        other => panic!("expected InvalidFile, got {other:?}"),
    }
}

#[test]
fn given_content_of_other_format_when_checking_then_invalid_file() {
    let store = ImageStore::new("unused");

    let result = store.check(&UploadedFile::new("photo.png", JPEG));

    match result {
        Err(AssetError::InvalidFile { message, .. }) => {
            assert_that!(message.as_str(), contains_substring("does not match"));
        }
        other => panic!("expected InvalidFile, got {other:?}"),
    }
}

#[test]
fn given_renamed_script_when_checking_then_invalid_file() {
    let store = ImageStore::new("unused");

    let result = store.check(&UploadedFile::new("shell.gif", b"#!/bin/sh\n".to_vec()));

    assert!(matches!(result, Err(AssetError::InvalidFile { .. })));
}

#[tokio::test]
async fn given_valid_upload_when_storing_then_written_under_generated_name() {
    let (_dir, store) = store_in_tempdir().await;

    let stored = store
        .store(ImageSlot::Thumbnail, &UploadedFile::new("../../me.png", PNG))
        .await
        .unwrap();

    assert_that!(stored.as_str(), ends_with(".png"));
    assert_that!(stored.as_str(), not(contains_substring("me")));
    assert_that!(stored.as_str(), not(contains_substring("/")));

    let written = std::fs::read(store.path_of(ImageSlot::Thumbnail, &stored)).unwrap();
    assert_eq!(written, PNG);
}

#[tokio::test]
async fn given_same_upload_twice_when_storing_then_names_differ() {
    let (_dir, store) = store_in_tempdir().await;
    let file = UploadedFile::new("logo.gif", GIF);

    let first = store.store(ImageSlot::Logo, &file).await.unwrap();
    let second = store.store(ImageSlot::Logo, &file).await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn given_invalid_upload_when_storing_then_nothing_written() {
    let (dir, store) = store_in_tempdir().await;

    let result = store
        .store(ImageSlot::Background, &UploadedFile::new("bg.png", GIF))
        .await;

    assert!(result.is_err());
    assert_eq!(file_names(&dir.path().join("bg")), vec!["background-img.jpg"]);
}

#[tokio::test]
async fn given_stored_file_when_deleting_then_removed() {
    let (_dir, store) = store_in_tempdir().await;
    let stored = store
        .store(ImageSlot::Background, &UploadedFile::new("bg.webp", WEBP))
        .await
        .unwrap();

    store.delete(ImageSlot::Background, &stored).await.unwrap();

    assert!(!store.path_of(ImageSlot::Background, &stored).exists());
}

#[tokio::test]
async fn given_sentinel_when_deleting_then_refused_and_file_kept() {
    let (_dir, store) = store_in_tempdir().await;
    let sentinel = store.path_of(ImageSlot::Thumbnail, "thumbnail-img.jpg");
    std::fs::write(&sentinel, JPEG).unwrap();

    let result = store.delete(ImageSlot::Thumbnail, "thumbnail-img.jpg").await;

    assert!(matches!(result, Err(AssetError::SentinelImage { .. })));
    assert!(sentinel.exists());
}

#[tokio::test]
async fn given_missing_file_when_deleting_then_ok() {
    let (_dir, store) = store_in_tempdir().await;

    let result = store.delete(ImageSlot::Logo, "already-gone.png").await;

    assert_that!(result, ok(anything()));
}

#[tokio::test]
async fn given_sentinel_when_discarding_then_kept() {
    let (_dir, store) = store_in_tempdir().await;
    let sentinel = store.path_of(ImageSlot::Background, "background-img.jpg");
    std::fs::write(&sentinel, JPEG).unwrap();

    store.discard(ImageSlot::Background, "background-img.jpg").await;

    assert!(sentinel.exists());
}

#[tokio::test]
async fn given_custom_file_when_discarding_then_removed() {
    let (_dir, store) = store_in_tempdir().await;
    let stored = store
        .store(ImageSlot::Thumbnail, &UploadedFile::new("me.jpeg", JPEG))
        .await
        .unwrap();

    store.discard(ImageSlot::Thumbnail, &stored).await;

    assert!(!store.path_of(ImageSlot::Thumbnail, &stored).exists());
}
