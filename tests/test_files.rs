mod common;

use common::TempDir;
use staticd::http::files::{allocate, serve};
use staticd::http::response::{Response, StatusCode};

#[tokio::test]
async fn test_serves_existing_file() {
    let dir = TempDir::new();
    let file = dir.write("index.html", b"<p>hi</p>");

    let response = serve(&file).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "text/html");
    assert_eq!(response.body, b"<p>hi</p>");
}

#[tokio::test]
async fn test_binary_file_is_byte_identical() {
    let dir = TempDir::new();
    let contents: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    let file = dir.write("img.png", &contents);

    let response = serve(&file).await;

    assert_eq!(response.content_type, "image/png");
    assert_eq!(response.content_length(), contents.len());
    assert_eq!(response.body, contents);
}

#[tokio::test]
async fn test_empty_file() {
    let dir = TempDir::new();
    let file = dir.write("empty.txt", b"");

    let response = serve(&file).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "text/plain");
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = TempDir::new();

    let response = serve(&dir.path().join("missing.txt")).await;

    assert_eq!(response, Response::not_found());
}

#[tokio::test]
async fn test_directory_is_not_found() {
    let dir = TempDir::new();
    dir.write("sub/a.txt", b"a");

    let response = serve(&dir.path().join("sub")).await;

    assert_eq!(response, Response::not_found());
}

#[test]
fn test_allocate_exact_capacity() {
    let buf = allocate(4096).unwrap();

    assert!(buf.is_empty());
    assert!(buf.capacity() >= 4096);
}

#[test]
fn test_allocate_impossible_size_fails() {
    assert!(allocate(u64::MAX).is_none());
}
