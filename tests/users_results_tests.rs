// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile and results endpoints.

use axum::http::StatusCode;
use debate_arena::error::AppError;
use debate_arena::time_utils::now_millis;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_health() {
    let (app, _) = common::create_test_app();

    let (status, body) = common::send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["persistent"], false);
}

#[tokio::test]
async fn test_user_upsert_and_get() {
    let (app, _) = common::create_test_app();

    let (status, _) = common::send(&app, "GET", "/users/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, created) = common::send(
        &app,
        "PUT",
        "/users/42",
        Some(json!({
            "username": "alice",
            "displayName": "Alice",
            "avatar": "https://example.com/alice.png"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["fid"], 42);
    assert_eq!(created["totalDebates"], 0);

    let (_, merged) = common::send(
        &app,
        "PUT",
        "/users/42",
        Some(json!({"username": "alice", "totalVotes": 7, "winRate": 50.0})),
    )
    .await;
    assert_eq!(merged["displayName"], "Alice");
    assert_eq!(merged["totalVotes"], 7);
    assert_eq!(merged["winRate"], 50.0);

    let (status, fetched) = common::send(&app, "GET", "/users/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, merged);
}

#[tokio::test]
async fn test_user_upsert_rejects_bad_avatar() {
    let (app, _) = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "PUT",
        "/users/42",
        Some(json!({"username": "alice", "avatar": "not a url"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing or invalid fields: avatar");
}

#[tokio::test]
async fn test_results_summary() {
    let (app, state) = common::create_test_app();
    let live = common::create_debate(&app, "alice").await;
    let live_uri = format!("/debates/{}", live["id"].as_str().unwrap());
    for voter in ["v1", "v2"] {
        common::send(
            &app,
            "POST",
            &live_uri,
            Some(json!({"voterId": voter, "option": "Y"})),
        )
        .await;
    }

    // A debate that has already run its course
    let mut ended = serde_json::from_value::<debate_arena::models::Debate>(live.clone()).unwrap();
    ended.id = "debate_ended".to_string();
    ended.created_by = "bob".to_string();
    ended.ends_at = now_millis() - 1;
    ended.votes.record("v1", "X");
    state
        .store
        .write(|records| {
            records.insert_debate(ended);
            Ok::<_, AppError>(())
        })
        .await
        .unwrap();

    let (status, summary) = common::send(&app, "GET", "/results", None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        summary["stats"],
        json!({"totalDebates": 1, "totalVotes": 1, "totalParticipants": 1})
    );
    assert_eq!(summary["debates"][0]["id"], "debate_ended");
    assert_eq!(summary["debates"][0]["status"], "ended");
    assert_eq!(
        summary["debates"][0]["outcome"],
        json!({"result": "winner", "option": "X"})
    );
    assert_eq!(summary["debates"][0]["options"][0]["percentage"], 100);

    assert_eq!(summary["popular"][0]["id"], live["id"]);
    assert_eq!(
        summary["popular"][0]["outcome"],
        json!({"result": "winner", "option": "Y"})
    );
}
