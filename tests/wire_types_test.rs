//! Integration tests for backend payload shapes

use player_scout::{
    api::types::{CreateListResponse, ToggleFavoriteResponse},
    comments::CommentReply,
    ListId, PlayerId, PlayerStore, ScoutError,
};
use serde_json::json;

#[test]
fn test_roster_payload_with_mixed_shapes() {
    let mut store = PlayerStore::new();
    store
        .load_json(json!([
            {"id": 28003, "name": "Lionel Messi", "percentile": 88.6,
             "comments": "Still has it", "age": "38", "height": null},
            {"id": "418560", "name": "Erling Haaland", "percentile": 99,
             "comments": [{"text": "Aerial threat", "timestamp": "2025-01-12 20:15:00"}]}
        ]))
        .unwrap();

    let messi = store.find_by_id(&PlayerId::new("28003")).unwrap();
    assert_eq!(messi.percentile, 89);
    assert_eq!(messi.age, Some(38));
    assert_eq!(messi.height, None);
    assert_eq!(messi.comments.len(), 1);
    assert_eq!(messi.comments[0].text, "Still has it");

    let haaland = store.find_by_id(&PlayerId::new("418560")).unwrap();
    assert_eq!(haaland.comments[0].timestamp, "2025-01-12 20:15:00");
}

#[test]
fn test_roster_entry_without_id_is_rejected() {
    let mut store = PlayerStore::new();
    let err = store
        .load_json(json!([{"id": "1", "name": "A"}, {"name": "B"}]))
        .unwrap_err();
    match err {
        ScoutError::Load { message } => assert!(message.contains("index 1")),
        other => panic!("Expected Load error, got {other:?}"),
    }
    assert!(store.is_empty());
}

#[test]
fn test_toggle_reply_with_members() {
    let reply: ToggleFavoriteResponse = serde_json::from_value(json!({
        "success": true,
        "favorite": true,
        "players": ["1", 2]
    }))
    .unwrap();
    assert_eq!(
        reply.players,
        Some(vec![PlayerId::new("1"), PlayerId::new("2")])
    );
}

#[test]
fn test_create_reply_without_list() {
    let reply: CreateListResponse =
        serde_json::from_value(json!({"success": true, "list_id": "0c9d8e7f"})).unwrap();
    assert_eq!(reply.list_id, ListId::new("0c9d8e7f"));
    assert!(reply.list.is_none());
}

#[test]
fn test_legacy_comment_reply() {
    let reply: CommentReply =
        serde_json::from_value(json!({"success": true, "comment": "Quick feet"})).unwrap();
    assert!(matches!(reply, CommentReply::Single { .. }));
}
