//! Tests for media actions.

mod common;

use common::{mock_action, mock_anki_response, setup_mock_server};
use mranki::{AnkiClient, StoreMediaParams};

#[tokio::test]
async fn test_store_media_from_base64() {
    let server = setup_mock_server().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    mock_action(
        &server,
        "storeMediaFile",
        mock_anki_response("mrcpsych_pathways.png"),
    )
    .await;

    let params = StoreMediaParams::from_base64("mrcpsych_pathways.png", "SGVsbG8gV29ybGQ=")
        .delete_existing(true);
    let result = client.media().store(params).await.unwrap();
    assert_eq!(result, "mrcpsych_pathways.png");
}

#[tokio::test]
async fn test_store_media_from_path() {
    let server = setup_mock_server().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    mock_action(
        &server,
        "storeMediaFile",
        mock_anki_response("mrcpsych_brain.png"),
    )
    .await;

    let params = StoreMediaParams::from_path("mrcpsych_brain.png", "/tmp/brain.png");
    let result = client.media().store(params).await.unwrap();
    assert_eq!(result, "mrcpsych_brain.png");
}

#[tokio::test]
async fn test_store_media_from_url() {
    let server = setup_mock_server().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    mock_action(&server, "storeMediaFile", mock_anki_response("image.png")).await;

    let params = StoreMediaParams::from_url("image.png", "https://example.com/image.png");
    let result = client.media().store(params).await.unwrap();
    assert_eq!(result, "image.png");
}
