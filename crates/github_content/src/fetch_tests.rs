use super::*;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

fn file_payload(name: &str, file_path: &str, content: &str) -> serde_json::Value {
    json!({
        "name": name,
        "path": file_path,
        "type": "file",
        "content": encode(content)
    })
}

async fn client_for(server: &MockServer) -> ContentClient {
    ContentClient::with_base_url(server.uri()).unwrap()
}

#[tokio::test]
async fn test_fetch_single_file_decodes_content() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/contents/src/main.rs"))
        .and(header("accept", "application/vnd.github.v3+json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(file_payload("main.rs", "src/main.rs", "fn main() {}\n")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let reference = GithubReference {
        owner: "owner".to_string(),
        repo: "repo".to_string(),
        path: "src/main.rs".to_string(),
    };

    let content = client.fetch(&reference).await.unwrap();

    match content {
        FetchedContent::File(file) => {
            assert_eq!(file.name, "main.rs");
            assert_eq!(file.path, "src/main.rs");
            assert_eq!(file.content, "fn main() {}\n");
        }
        FetchedContent::Directory(_) => panic!("expected a single file"),
    }
}

#[tokio::test]
async fn test_fetch_decodes_newline_wrapped_base64() {
    // GitHub inserts a line break every 60 base64 characters.
    let text = "a".repeat(200);
    let mut wrapped = String::new();
    for chunk in encode(&text).into_bytes().chunks(60) {
        wrapped.push_str(std::str::from_utf8(chunk).unwrap());
        wrapped.push('\n');
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/o/r/contents/big.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "big.txt",
            "path": "big.txt",
            "type": "file",
            "content": wrapped
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let code = client
        .fetch_code("https://github.com/o/r/blob/main/big.txt")
        .await
        .unwrap();

    assert_eq!(code, text);
}

#[tokio::test]
async fn test_base64_transport_encoding_is_lossless() {
    let original = "fn main() {\n    println!(\"héllo\");\n}\n";
    let encoded = encode(original);

    let decoded = STANDARD.decode(encoded.as_bytes()).unwrap();
    let text = String::from_utf8(decoded).unwrap();

    assert_eq!(text, original);
    assert_eq!(encode(&text), encoded);
}

#[tokio::test]
async fn test_fetch_directory_preserves_listing_order_and_skips_non_files() {
    let server = MockServer::start().await;

    let listing = json!([
        {
            "name": "z_first.rs",
            "path": "src/z_first.rs",
            "type": "file",
            "url": format!("{}/file/z_first", server.uri())
        },
        {
            "name": "nested",
            "path": "src/nested",
            "type": "dir",
            "url": format!("{}/file/nested", server.uri())
        },
        {
            "name": "link",
            "path": "src/link",
            "type": "symlink",
            "url": format!("{}/file/link", server.uri())
        },
        {
            "name": "a_second.rs",
            "path": "src/a_second.rs",
            "type": "file",
            "url": format!("{}/file/a_second", server.uri())
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/repos/o/r/contents/src"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/file/z_first"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(file_payload("z_first.rs", "src/z_first.rs", "// z")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/file/a_second"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(file_payload("a_second.rs", "src/a_second.rs", "// a")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let reference = GithubReference {
        owner: "o".to_string(),
        repo: "r".to_string(),
        path: "src".to_string(),
    };

    let content = client.fetch(&reference).await.unwrap();

    match content {
        FetchedContent::Directory(files) => {
            assert_eq!(files.len(), 2, "dir and symlink entries must be skipped");
            assert_eq!(files[0].path, "src/z_first.rs");
            assert_eq!(files[1].path, "src/a_second.rs");
        }
        FetchedContent::File(_) => panic!("expected a directory"),
    }
}

#[tokio::test]
async fn test_fetch_404_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client
        .fetch_code("https://github.com/nobody/missing")
        .await
        .unwrap_err();

    assert!(matches!(error, Error::NotFound));
}

#[tokio::test]
async fn test_fetch_403_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client
        .fetch_code("https://github.com/busy/repo")
        .await
        .unwrap_err();

    assert!(matches!(error, Error::RateLimited));
}

#[tokio::test]
async fn test_fetch_other_status_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client
        .fetch_code("https://github.com/o/r")
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Status(502)));
}

#[tokio::test]
async fn test_fetch_directory_aborts_on_first_sub_request_failure() {
    let server = MockServer::start().await;

    let listing = json!([
        {
            "name": "good.rs",
            "path": "good.rs",
            "type": "file",
            "url": format!("{}/file/good", server.uri())
        },
        {
            "name": "bad.rs",
            "path": "bad.rs",
            "type": "file",
            "url": format!("{}/file/bad", server.uri())
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/repos/o/r/contents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/file/good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_payload(
            "good.rs", "good.rs", "// ok",
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/file/bad"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let reference = GithubReference {
        owner: "o".to_string(),
        repo: "r".to_string(),
        path: "".to_string(),
    };

    let error = client.fetch(&reference).await.unwrap_err();

    // No partial directory is ever returned.
    assert!(matches!(error, Error::NotFound));
}

#[tokio::test]
async fn test_fetch_invalid_base64_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/o/r/contents/bad.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "bad.bin",
            "path": "bad.bin",
            "type": "file",
            "content": "!!! not base64 !!!"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client
        .fetch_code("https://github.com/o/r/blob/main/bad.bin")
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Decode(_)));
}

#[tokio::test]
async fn test_fetch_code_rejects_invalid_url_without_network() {
    // No mock server: parsing must fail before any request is issued.
    let client = ContentClient::with_base_url("http://127.0.0.1:9").unwrap();

    let error = client
        .fetch_code("https://example.com/not/github")
        .await
        .unwrap_err();

    assert!(matches!(error, Error::InvalidUrl));
}

#[tokio::test]
async fn test_fetch_code_flattens_directories() {
    let server = MockServer::start().await;

    let listing = json!([
        {
            "name": "a.rs",
            "path": "a.rs",
            "type": "file",
            "url": format!("{}/file/a", server.uri())
        },
        {
            "name": "b.rs",
            "path": "b.rs",
            "type": "file",
            "url": format!("{}/file/b", server.uri())
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/repos/o/r/contents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/file/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_payload("a.rs", "a.rs", "// a")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/file/b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_payload("b.rs", "b.rs", "// b")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let code = client
        .fetch_code("https://github.com/o/r")
        .await
        .unwrap();

    assert_eq!(
        code,
        "// File: a.rs\n// a\n\n// ========================\n\n// File: b.rs\n// b"
    );
}
