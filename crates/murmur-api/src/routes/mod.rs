pub mod accounts;
pub mod messages;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the HTTP surface. Layers (CORS, tracing) are added by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route(
            "/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route(
            "/messages/{id}",
            get(messages::get_message)
                .delete(messages::delete_message)
                .patch(messages::update_message),
        )
        .route("/accounts/{id}/messages", get(messages::list_account_messages))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use murmur_db::Database;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::state::AppStateInner;

    struct TestApp {
        state: AppState,
        app: Router,
    }

    impl TestApp {
        fn new() -> Self {
            let state = AppStateInner::new(Database::open_in_memory().unwrap());
            let app = router(state.clone());
            Self { state, app }
        }

        async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
            let builder = Request::builder().method(method).uri(uri);
            let request = match body {
                Some(body) => builder
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.app.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            (status, String::from_utf8(bytes.to_vec()).unwrap())
        }

        async fn register(&self, username: &str, password: &str) -> Value {
            let (status, body) = self
                .send(
                    "POST",
                    "/register",
                    Some(json!({ "username": username, "password": password })),
                )
                .await;
            assert_eq!(status, StatusCode::OK, "{body}");
            serde_json::from_str(&body).unwrap()
        }

        async fn post_message(&self, posted_by: i64, text: &str) -> Value {
            let (status, body) = self
                .send(
                    "POST",
                    "/messages",
                    Some(json!({
                        "postedBy": posted_by,
                        "messageText": text,
                        "timePostedEpoch": 1669947792
                    })),
                )
                .await;
            assert_eq!(status, StatusCode::OK, "{body}");
            serde_json::from_str(&body).unwrap()
        }
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = TestApp::new();
        let (status, body) = app.send("GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn register_then_conflict() {
        let app = TestApp::new();
        let account = app.register("alice", "secret1").await;
        assert!(account["accountId"].as_i64().unwrap() > 0);
        assert_eq!(account["username"], "alice");

        let (status, body) = app
            .send(
                "POST",
                "/register",
                Some(json!({ "username": "alice", "password": "other-pass" })),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, "Account already exists. Enter another account.");
    }

    #[tokio::test]
    async fn register_short_password_is_400() {
        let app = TestApp::new();
        let (status, _) = app
            .send(
                "POST",
                "/register",
                Some(json!({ "username": "bob", "password": "1234" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let app = TestApp::new();
        let (status, body) = app
            .send("POST", "/register", Some(json!({ "username": "bob" })))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.is_empty());

        let response = app
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/messages")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_scenario() {
        let app = TestApp::new();
        let alice = app.register("alice", "secret1").await;

        let (status, body) = app
            .send(
                "POST",
                "/login",
                Some(json!({ "username": "alice", "password": "wrong" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            "Credentials don't match. Try again with different username/password."
        );

        let (status, body) = app
            .send(
                "POST",
                "/login",
                Some(json!({ "username": "alice", "password": "secret1" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), alice);

        let (status, _) = app
            .send(
                "POST",
                "/login",
                Some(json!({ "username": "nobody", "password": "secret1" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn message_lifecycle() {
        let app = TestApp::new();
        let alice = app.register("alice", "secret1").await["accountId"]
            .as_i64()
            .unwrap();

        let (status, body) = app.send("GET", "/messages", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");

        let created = app.post_message(alice, "hi").await;
        let id = created["messageId"].as_i64().unwrap();
        assert_eq!(created["postedBy"], alice);
        assert_eq!(created["messageText"], "hi");

        let (status, body) = app.send("GET", &format!("/messages/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), created);

        let (status, body) = app
            .send("GET", &format!("/accounts/{alice}/messages"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!([created]));

        let (status, body) = app
            .send(
                "PATCH",
                &format!("/messages/{id}"),
                Some(json!({ "messageText": "edited" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "1");

        let (status, body) = app.send("DELETE", &format!("/messages/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "1");

        let (status, body) = app.send("DELETE", &format!("/messages/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");

        let (status, body) = app.send("GET", &format!("/messages/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn create_message_rejections_are_400() {
        let app = TestApp::new();
        let alice = app.register("alice", "secret1").await["accountId"]
            .as_i64()
            .unwrap();

        for body in [
            json!({ "postedBy": alice, "messageText": "" }),
            json!({ "postedBy": alice, "messageText": "x".repeat(255) }),
            json!({ "postedBy": alice + 1, "messageText": "hi" }),
        ] {
            let (status, _) = app.send("POST", "/messages", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }

        let (_, body) = app.send("GET", "/messages", None).await;
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn empty_patch_leaves_text() {
        let app = TestApp::new();
        let alice = app.register("alice", "secret1").await["accountId"]
            .as_i64()
            .unwrap();
        let id = app.post_message(alice, "hi").await["messageId"]
            .as_i64()
            .unwrap();

        let (status, body) = app
            .send(
                "PATCH",
                &format!("/messages/{id}"),
                Some(json!({ "messageText": "" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "");

        let stored = app.state.db.get_message(id).unwrap().unwrap();
        assert_eq!(stored.message_text, "hi");
    }

    #[tokio::test]
    async fn patch_missing_message_is_400() {
        let app = TestApp::new();
        let (status, _) = app
            .send("PATCH", "/messages/77", Some(json!({ "messageText": "hello" })))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_account_has_no_messages() {
        let app = TestApp::new();
        let (status, body) = app.send("GET", "/accounts/12/messages", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn non_numeric_id_is_400() {
        let app = TestApp::new();
        let (status, body) = app.send("GET", "/messages/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid id: abc");
    }
}
