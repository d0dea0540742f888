//! Tests for miscellaneous actions and availability probing.

mod common;

use common::{mock_action, mock_anki_response, setup_mock_server};
use mranki::AnkiClient;

#[tokio::test]
async fn test_version() {
    let server = setup_mock_server().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    mock_action(&server, "version", mock_anki_response(6)).await;

    let version = client.misc().version().await.unwrap();
    assert_eq!(version, 6);
}

#[tokio::test]
async fn test_sync() {
    let server = setup_mock_server().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    // Sync returns null on success
    mock_action(
        &server,
        "sync",
        wiremock::ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": null,
            "error": null
        })),
    )
    .await;

    assert!(client.misc().sync().await.is_ok());
}

#[tokio::test]
async fn test_model_names() {
    let server = setup_mock_server().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    mock_action(
        &server,
        "modelNames",
        mock_anki_response(vec!["Basic", "Basic (and reversed card)", "Cloze"]),
    )
    .await;

    let models = client.models().names().await.unwrap();
    assert!(models.contains(&"Cloze".to_string()));
}

#[tokio::test]
async fn test_is_available() {
    let server = setup_mock_server().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    mock_action(&server, "version", mock_anki_response(6)).await;

    assert!(client.is_available().await);
}

#[tokio::test]
async fn test_is_available_swallows_connection_errors() {
    // Point at a closed port; the probe must collapse the failure to false
    let client = AnkiClient::builder().url("http://127.0.0.1:9").build();

    assert!(!client.is_available().await);
}
