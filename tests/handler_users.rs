mod common;

use axum::http::StatusCode;
use serde_json::Value;

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_seed_users() {
    let server = common::make_server();

    let users = common::list_users(&server).await;

    assert_eq!(common::ids(&users), [common::SALLY_ID, common::JOHN_ID]);
    assert_eq!(users[0]["username"], "sallyStudent");
    assert_eq!(users[0]["favoriteClub"], "Cache Valley Stone Society");
    assert_eq!(users[0]["newsLetter"], true);
    assert_eq!(users[1]["username"], "johnBlocton");
    assert_eq!(users[1]["newsLetter"], false);
}

#[tokio::test]
async fn test_list_structure() {
    let server = common::make_server();

    let response = server.get("/user").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert!(json.is_array());

    let first = &json[0];
    for field in ["id", "username", "password", "favoriteClub", "newsLetter"] {
        assert!(first.get(field).is_some(), "missing {field}");
    }
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let server = common::make_server();

    let mut created = Vec::new();
    for name in ["memberOne", "memberTwo", "memberThree"] {
        let mut payload = common::valid_payload();
        payload["username"] = Value::from(name);
        let response = server.post("/register").json(&payload).await;
        response.assert_status(StatusCode::CREATED);
        created.push(response.json::<Value>()["id"].as_str().unwrap().to_string());
    }

    let ids = common::ids(&common::list_users(&server).await);

    assert_eq!(ids.len(), 5);
    assert_eq!(&ids[2..], created.as_slice());
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_seed_user() {
    let server = common::make_server();

    let response = server.delete(&format!("/user/{}", common::SALLY_ID)).await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let users = common::list_users(&server).await;
    assert_eq!(common::ids(&users), [common::JOHN_ID]);
}

#[tokio::test]
async fn test_delete_not_found() {
    let server = common::make_server();

    let response = server.delete("/user/nonexistent").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "User not found");
    assert_eq!(common::list_users(&server).await.len(), 2);
}

#[tokio::test]
async fn test_delete_twice() {
    let server = common::make_server();
    let path = format!("/user/{}", common::JOHN_ID);

    server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // Second delete returns 404 because the user is already gone.
    server.delete(&path).await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_registered_user() {
    let server = common::make_server();

    let created = server
        .post("/register")
        .json(&common::valid_payload())
        .await
        .json::<Value>();
    let id = created["id"].as_str().unwrap();

    server
        .delete(&format!("/user/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let ids = common::ids(&common::list_users(&server).await);
    assert!(!ids.contains(&id.to_string()));
    assert_eq!(ids, [common::SALLY_ID, common::JOHN_ID]);
}
