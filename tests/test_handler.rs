use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use staticd::config::Config;
use staticd::http::handler::dispatch;
use staticd::http::response::StatusCode;
use staticd::http::writer::serialize_response;

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Builds a scratch document root and a Config pointing at it.
fn scratch_config(name: &str) -> Config {
    let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
    let scratch = std::env::temp_dir().join(format!(
        "staticd-handler-{}-{}-{}",
        name,
        std::process::id(),
        id
    ));
    let www = scratch.join("www");

    fs::create_dir_all(www.join("subdir")).unwrap();
    fs::write(scratch.join("secret.txt"), "top secret").unwrap();
    fs::write(www.join("index.html"), "<html>home</html>").unwrap();
    fs::write(www.join("style.css"), "body {}").unwrap();
    fs::write(www.join("hello world.txt"), "hi").unwrap();
    fs::write(www.join("subdir").join("index.html"), "<html>sub</html>").unwrap();

    Config {
        document_root: PathBuf::from(www),
        ..Config::load()
    }
}

#[tokio::test]
async fn test_get_root_serves_index_html() {
    let cfg = scratch_config("root");

    let response = dispatch(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n", &cfg).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"<html>home</html>".to_vec());
    assert_eq!(response.headers.get("Content-Type"), Some("text/html"));
}

#[tokio::test]
async fn test_get_guesses_content_type_from_extension() {
    let cfg = scratch_config("css");

    let response = dispatch(b"GET /style.css HTTP/1.1\r\n\r\n", &cfg).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.headers.get("Content-Type"), Some("text/css"));
    assert_eq!(response.body, b"body {}".to_vec());
}

#[tokio::test]
async fn test_get_percent_encoded_target() {
    let cfg = scratch_config("encoded");

    let response = dispatch(b"GET /hello%20world.txt HTTP/1.1\r\n\r\n", &cfg).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"hi".to_vec());
    assert_eq!(response.headers.get("Content-Type"), Some("text/plain"));
}

#[tokio::test]
async fn test_traversal_is_answered_with_404() {
    let cfg = scratch_config("traversal");

    // secret.txt exists next to the root; the out-of-root decision is
    // deliberately indistinguishable from a missing file.
    let response = dispatch(b"GET /../secret.txt HTTP/1.1\r\n\r\n", &cfg).await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"<h1>404 Not Found</h1>".to_vec());
}

#[tokio::test]
async fn test_missing_file_is_404_with_synthetic_body() {
    let cfg = scratch_config("missing");

    let response = dispatch(b"GET /missing.txt HTTP/1.1\r\n\r\n", &cfg).await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"<h1>404 Not Found</h1>".to_vec());
}

#[tokio::test]
async fn test_directory_without_slash_redirects() {
    let cfg = scratch_config("redirect");

    let response = dispatch(b"GET /subdir HTTP/1.1\r\n\r\n", &cfg).await;

    assert_eq!(response.status, StatusCode::MovedPermanently);
    assert_eq!(response.headers.get("Location"), Some("/subdir/"));
}

#[tokio::test]
async fn test_directory_with_slash_serves_index() {
    let cfg = scratch_config("dir-index");

    let response = dispatch(b"GET /subdir/ HTTP/1.1\r\n\r\n", &cfg).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"<html>sub</html>".to_vec());
}

#[tokio::test]
async fn test_post_is_method_not_allowed() {
    let cfg = scratch_config("post");

    let response = dispatch(
        b"POST /anything HTTP/1.1\r\nContent-Length: 0\r\n\r\n",
        &cfg,
    )
    .await;

    assert_eq!(response.status, StatusCode::MethodNotAllowed);
    assert_eq!(response.body, b"<h1>405 Method Not Allowed</h1>".to_vec());
    // Known deviation: no Allow header is sent.
    assert_eq!(response.headers.get("Allow"), None);
}

#[tokio::test]
async fn test_unrecognized_method_is_method_not_allowed() {
    let cfg = scratch_config("brew");

    let response = dispatch(b"BREW /coffee HTTP/1.1\r\n\r\n", &cfg).await;

    assert_eq!(response.status, StatusCode::MethodNotAllowed);
}

#[tokio::test]
async fn test_malformed_request_line_is_bad_request() {
    let cfg = scratch_config("malformed");

    let response = dispatch(b"GET\r\n\r\n", &cfg).await;

    assert_eq!(response.status, StatusCode::BadRequest);
    assert_eq!(response.body, b"<h1>400 Bad Request</h1>".to_vec());
}

#[tokio::test]
async fn test_every_response_carries_connection_close() {
    let cfg = scratch_config("close");

    let requests: Vec<&[u8]> = vec![
        b"GET / HTTP/1.1\r\n\r\n",
        b"GET /missing HTTP/1.1\r\n\r\n",
        b"POST / HTTP/1.1\r\n\r\n",
        b"GET\r\n\r\n",
    ];

    for raw in requests {
        let response = dispatch(raw, &cfg).await;
        assert_eq!(response.headers.get("Connection"), Some("close"));
        assert!(response.headers.get("Date").is_some());
        assert!(!response.body.is_empty());
    }
}

#[tokio::test]
async fn test_repeated_requests_identical_except_date() {
    let cfg = scratch_config("idempotent");
    let raw = b"GET /style.css HTTP/1.1\r\nHost: localhost\r\n\r\n";

    let first = serialize_response(&dispatch(raw, &cfg).await);
    let second = serialize_response(&dispatch(raw, &cfg).await);

    let strip_date = |bytes: &[u8]| -> Vec<String> {
        String::from_utf8_lossy(bytes)
            .split("\r\n")
            .filter(|line| !line.starts_with("Date: "))
            .map(str::to_string)
            .collect()
    };

    assert_eq!(strip_date(&first), strip_date(&second));
}

#[tokio::test]
async fn test_missing_document_root_is_404() {
    let cfg = Config {
        document_root: std::env::temp_dir().join("staticd-no-such-root"),
        ..Config::load()
    };

    let response = dispatch(b"GET / HTTP/1.1\r\n\r\n", &cfg).await;

    assert_eq!(response.status, StatusCode::NotFound);
}
