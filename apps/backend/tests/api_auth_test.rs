mod common;
mod support;

use std::sync::Arc;

use actix_web::test;
use backend::infra::state::build_state;
use backend::state::security_config::SecurityConfig;
use backend_test_support::unique_helpers::unique_username;
use serde_json::json;
use support::{create_test_app, MemStore};

fn test_security() -> SecurityConfig {
    SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
}

#[actix_web::test]
async fn test_auth_registers_then_verifies_same_user() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let store = Arc::new(MemStore::default());
    let state = build_state()
        .with_store(store.clone())
        .with_security(security.clone())
        .build()
        .await?;
    let app = create_test_app(state).await;

    let username = unique_username("bob");

    // First call with an unknown username creates the user
    let req = test::TestRequest::post()
        .uri("/api/auth")
        .set_json(json!({ "username": username, "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token should be a string");
    let uid = backend::verify(token, backend::unix_now(), &security).expect("token should verify");
    assert_eq!(store.user_count(), 1);

    // Second call with the same credentials verifies instead of registering
    let req2 = test::TestRequest::post()
        .uri("/api/auth")
        .set_json(json!({ "username": username, "password": "secret" }))
        .to_request();
    let resp2 = test::call_service(&app, req2).await;
    assert_eq!(resp2.status().as_u16(), 200);

    let body2: serde_json::Value = test::read_body_json(resp2).await;
    let token2 = body2["token"].as_str().unwrap();
    let uid2 = backend::verify(token2, backend::unix_now(), &security).unwrap();

    assert_eq!(uid2, uid);
    assert_eq!(store.user_count(), 1);

    Ok(())
}

#[actix_web::test]
async fn test_auth_rejects_bad_password() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemStore::default());
    let state = build_state()
        .with_store(store)
        .with_security(test_security())
        .build()
        .await?;
    let app = create_test_app(state).await;

    let username = unique_username("alice");

    let register = test::TestRequest::post()
        .uri("/api/auth")
        .set_json(json!({ "username": username, "password": "right-one" }))
        .to_request();
    assert_eq!(test::call_service(&app, register).await.status().as_u16(), 200);

    let login = test::TestRequest::post()
        .uri("/api/auth")
        .set_json(json!({ "username": username, "password": "wrong-one" }))
        .to_request();
    let resp = test::call_service(&app, login).await;
    assert_eq!(resp.status().as_u16(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "bad password" }));

    Ok(())
}

#[actix_web::test]
async fn test_auth_validates_input_lengths() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state()
        .with_store(Arc::new(MemStore::default()))
        .with_security(test_security())
        .build()
        .await?;
    let app = create_test_app(state).await;

    for payload in [
        json!({ "username": "ab", "password": "secret" }),
        json!({ "username": "bob", "password": "xy" }),
        json!({ "username": "", "password": "" }),
        json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth")
            .set_json(payload.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "payload: {payload}");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "invalid input" }));
    }

    Ok(())
}

#[actix_web::test]
async fn test_auth_treats_malformed_json_as_invalid_input() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_state()
        .with_store(Arc::new(MemStore::default()))
        .with_security(test_security())
        .build()
        .await?;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/api/auth")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json at all")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "invalid input" }));

    Ok(())
}
