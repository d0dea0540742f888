//! Tests for deck actions.

mod common;

use common::{mock_action, mock_anki_response, setup_mock_server};
use mranki::AnkiClient;

#[tokio::test]
async fn test_deck_names() {
    let server = setup_mock_server().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    mock_action(
        &server,
        "deckNames",
        mock_anki_response(vec!["Default", "MRCPsych", "MRCPsych::Paper A"]),
    )
    .await;

    let names = client.decks().names().await.unwrap();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"MRCPsych::Paper A".to_string()));
}

#[tokio::test]
async fn test_create_deck() {
    let server = setup_mock_server().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    mock_action(&server, "createDeck", mock_anki_response(1519323742721_i64)).await;

    let id = client
        .decks()
        .create("MRCPsych::Paper B::Old Age")
        .await
        .unwrap();
    assert_eq!(id, 1519323742721);
}

#[tokio::test]
async fn test_deck_stats() {
    let server = setup_mock_server().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    mock_action(
        &server,
        "getDeckStats",
        mock_anki_response(serde_json::json!({
            "1651445861967": {
                "deck_id": 1651445861967_i64,
                "name": "MRCPsych::Paper A::Pharmacology",
                "new_count": 20,
                "learn_count": 5,
                "review_count": 12,
                "total_in_deck": 312
            }
        })),
    )
    .await;

    let stats = client
        .decks()
        .stats(&["MRCPsych::Paper A::Pharmacology"])
        .await
        .unwrap();
    let deck = stats.values().next().unwrap();
    assert_eq!(deck.name, "MRCPsych::Paper A::Pharmacology");
    assert_eq!(deck.review_count, 12);
    assert_eq!(deck.total_in_deck, 312);
}
