//! HTTP routes and the administrator guard

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{TEST_PASSWORD, UserFactory, memory_state};
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use identity_admin::server::AppState;
    use identity_admin::server::routes;
    use serde_json::{Value, json};

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .app_data(routes::json_config())
                    .configure(routes::configure),
            )
            .await
        };
    }

    async fn login_token(state: &AppState, email: &str) -> String {
        state
            .accounts
            .sign_in(email, TEST_PASSWORD)
            .await
            .expect("sign-in succeeds")
            .access_token
    }

    async fn admin_token(state: &AppState) -> String {
        UserFactory::create(state, "root@example.com", &["Admin"]).await;
        login_token(state, "root@example.com").await
    }

    fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token))
    }

    #[actix_web::test]
    async fn test_health_reports_store() {
        let app = app!(memory_state().await);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["store"], "memory");
    }

    #[actix_web::test]
    async fn test_login_over_http() {
        let state = memory_state().await;
        UserFactory::create(&state, "alice@example.com", &[]).await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/account/login")
            .set_json(json!({ "email": "alice@example.com", "password": TEST_PASSWORD }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["token_type"], "Bearer");
        assert!(body["data"]["access_token"].as_str().is_some());
        assert!(body["data"]["user"].get("password_hash").is_none());

        let req = test::TestRequest::post()
            .uri("/account/login")
            .set_json(json!({ "email": "alice@example.com", "password": "wrong-one" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "AUTH_ERROR");
    }

    #[actix_web::test]
    async fn test_admin_routes_require_bearer_token() {
        let app = app!(memory_state().await);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/admin/roles").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/admin/users")
            .insert_header(bearer("not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_admin_routes_require_admin_role() {
        let state = memory_state().await;
        UserFactory::create(&state, "plain@example.com", &[]).await;
        let token = login_token(&state, "plain@example.com").await;
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/admin/roles")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "FORBIDDEN");
    }

    #[actix_web::test]
    async fn test_role_lifecycle_over_http() {
        let state = memory_state().await;
        let token = admin_token(&state).await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/admin/roles")
            .insert_header(bearer(&token))
            .set_json(json!({ "name": "Editor" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let editor_id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/admin/roles")
            .insert_header(bearer(&token))
            .set_json(json!({ "name": "editor" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri(&format!("/admin/roles/{}", editor_id))
            .insert_header(bearer(&token))
            .set_json(json!({ "name": "Author" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri("/admin/roles")
            .insert_header(bearer(&token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let roles = body["data"].as_array().unwrap();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0]["name"], "Admin");
        assert_eq!(roles[0]["member_count"], 1);
        assert_eq!(roles[1]["name"], "Author");
        assert_eq!(roles[1]["member_count"], 0);

        let req = test::TestRequest::delete()
            .uri(&format!("/admin/roles/{}", editor_id))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete()
            .uri(&format!("/admin/roles/{}", editor_id))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_deleting_role_in_use_conflicts() {
        let state = memory_state().await;
        let token = admin_token(&state).await;
        let admin_role = state.rbac.list_roles().await.unwrap()[0].role.id.clone();
        let app = app!(state);

        let req = test::TestRequest::delete()
            .uri(&format!("/admin/roles/{}", admin_role))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "CONFLICT");
    }

    #[actix_web::test]
    async fn test_user_administration_over_http() {
        let state = memory_state().await;
        let token = admin_token(&state).await;
        state.rbac.create_role("Editor").await.unwrap();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/admin/users")
            .insert_header(bearer(&token))
            .set_json(json!({
                "email": "new@example.com",
                "password": TEST_PASSWORD,
                "confirm_password": "something-else"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/admin/users")
            .insert_header(bearer(&token))
            .set_json(json!({
                "email": "New@Example.com",
                "first_name": " Nora ",
                "password": TEST_PASSWORD,
                "confirm_password": TEST_PASSWORD,
                "role": "Editor"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let user_id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/admin/users/{}/roles", user_id))
            .insert_header(bearer(&token))
            .set_json(json!({ "roles": ["Admin", "Editor", "Nonexistent"] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], json!(["Admin", "Editor"]));

        let req = test::TestRequest::get()
            .uri(&format!("/admin/users/{}/roles", user_id))
            .insert_header(bearer(&token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let selected: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|r| r["selected"] == true)
            .map(|r| r["role_name"].as_str().unwrap())
            .collect();
        assert_eq!(selected, vec!["Admin", "Editor"]);

        let req = test::TestRequest::put()
            .uri(&format!("/admin/users/{}", user_id))
            .insert_header(bearer(&token))
            .set_json(json!({ "email": "nora@example.com", "last_name": "Lee" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "nora@example.com");
        assert_eq!(body["data"]["first_name"], Value::Null);
        assert_eq!(body["data"]["last_name"], "Lee");

        let req = test::TestRequest::get()
            .uri("/admin/users")
            .insert_header(bearer(&token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let emails: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["email"].as_str().unwrap())
            .collect();
        assert_eq!(emails, vec!["nora@example.com", "root@example.com"]);

        let req = test::TestRequest::delete()
            .uri(&format!("/admin/users/{}", user_id))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/admin/users/{}/roles", user_id))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_a_validation_error() {
        let state = memory_state().await;
        let token = admin_token(&state).await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/admin/roles")
            .insert_header(bearer(&token))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"nom\": 1}")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_password_reset_over_http() {
        let state = memory_state().await;
        UserFactory::create(&state, "reset@example.com", &[]).await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/account/forgot-password")
            .set_json(json!({ "email": "reset@example.com" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let link = body["data"]["reset_link"].as_str().unwrap().to_string();
        let token = url::Url::parse(&link)
            .unwrap()
            .query_pairs()
            .find(|(k, _)| k == "token")
            .map(|(_, v)| v.into_owned())
            .unwrap();

        let req = test::TestRequest::post()
            .uri("/account/forgot-password")
            .set_json(json!({ "email": "nobody@example.com" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert!(body["data"].get("reset_link").is_none());

        let req = test::TestRequest::post()
            .uri("/account/reset-password")
            .set_json(json!({
                "email": "reset@example.com",
                "token": token,
                "password": "Fresh-pass1",
                "confirm_password": "Fresh-pass1"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/account/login")
            .set_json(json!({ "email": "reset@example.com", "password": "Fresh-pass1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
