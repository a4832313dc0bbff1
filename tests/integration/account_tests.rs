//! Sign-in and password reset flows over SQLite

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{TEST_PASSWORD, UserFactory, state_with_store};
    use crate::common::{TestDatabase, test_config};
    use crate::{assert_err, assert_ok};
    use identity_admin::auth::ResetPasswordRequest;
    use identity_admin::config::MEMORY_STORE_URL;
    use identity_admin::server::AppState;
    use identity_admin::utils::error::AdminError;

    const NEW_PASSWORD: &str = "N3w-passw0rd";

    fn token_from_link(link: &str) -> String {
        let url = url::Url::parse(link).expect("reset link is a URL");
        url.query_pairs()
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.into_owned())
            .expect("reset link carries a token")
    }

    fn reset_request(email: &str, token: &str, password: &str, confirm: &str) -> ResetPasswordRequest {
        ResetPasswordRequest {
            email: email.to_string(),
            token: token.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_issues_token_with_roles() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        let id = UserFactory::create(&state, "alice@example.com", &["Admin"]).await;

        let signed_in = assert_ok!(state.accounts.sign_in("Alice@Example.com", TEST_PASSWORD).await);
        assert_eq!(signed_in.user.id, id);
        assert_eq!(signed_in.roles, vec!["Admin".to_string()]);
        assert_eq!(signed_in.token_type, "Bearer");

        let claims = assert_ok!(state.jwt.verify_token(&signed_in.access_token));
        assert_eq!(claims.sub, id);
        assert_eq!(claims.email, "alice@example.com");
        assert!(claims.has_any_role(&state.config.auth().admin_roles));
    }

    #[tokio::test]
    async fn test_sign_in_failures_are_indistinguishable() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        UserFactory::create(&state, "bob@example.com", &[]).await;

        let wrong_password = assert_err!(state.accounts.sign_in("bob@example.com", "nope-nope").await);
        let unknown_email = assert_err!(state.accounts.sign_in("nobody@example.com", TEST_PASSWORD).await);

        assert!(matches!(wrong_password, AdminError::Auth(_)));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_password_reset_round_trip() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        UserFactory::create(&state, "carol@example.com", &[]).await;

        let link = assert_ok!(state.accounts.forgot_password("carol@example.com").await)
            .expect("known email yields a link");
        assert!(link.starts_with("https://admin.example.com/account/reset?"));
        assert!(link.contains("email=carol%40example.com"));
        let token = token_from_link(&link);

        assert_ok!(
            state
                .accounts
                .reset_password(&reset_request("carol@example.com", &token, NEW_PASSWORD, NEW_PASSWORD))
                .await
        );

        assert_err!(state.accounts.sign_in("carol@example.com", TEST_PASSWORD).await);
        assert_ok!(state.accounts.sign_in("carol@example.com", NEW_PASSWORD).await);

        // tokens are single use
        let err = assert_err!(
            state
                .accounts
                .reset_password(&reset_request("carol@example.com", &token, NEW_PASSWORD, NEW_PASSWORD))
                .await
        );
        assert!(matches!(err, AdminError::Auth(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_forgot_password_for_unknown_email() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;

        let link = assert_ok!(state.accounts.forgot_password("ghost@example.com").await);
        assert!(link.is_none());
    }

    #[tokio::test]
    async fn test_new_token_replaces_outstanding_one() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        UserFactory::create(&state, "dave@example.com", &[]).await;

        let first = token_from_link(&assert_ok!(state.accounts.forgot_password("dave@example.com").await).unwrap());
        let second = token_from_link(&assert_ok!(state.accounts.forgot_password("dave@example.com").await).unwrap());
        assert_ne!(first, second);

        let err = assert_err!(
            state
                .accounts
                .reset_password(&reset_request("dave@example.com", &first, NEW_PASSWORD, NEW_PASSWORD))
                .await
        );
        assert!(matches!(err, AdminError::Auth(_)));

        assert_ok!(
            state
                .accounts
                .reset_password(&reset_request("dave@example.com", &second, NEW_PASSWORD, NEW_PASSWORD))
                .await
        );
    }

    #[tokio::test]
    async fn test_reset_checks_confirmation_and_policy_first() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        UserFactory::create(&state, "erin@example.com", &[]).await;
        let link = assert_ok!(state.accounts.forgot_password("erin@example.com").await).unwrap();
        let token = token_from_link(&link);

        let mismatch = assert_err!(
            state
                .accounts
                .reset_password(&reset_request("erin@example.com", &token, NEW_PASSWORD, "different1"))
                .await
        );
        assert!(matches!(mismatch, AdminError::Validation(_)), "got {:?}", mismatch);

        let too_short = assert_err!(
            state
                .accounts
                .reset_password(&reset_request("erin@example.com", &token, "abc", "abc"))
                .await
        );
        assert!(matches!(too_short, AdminError::Validation(_)), "got {:?}", too_short);

        // validation failures did not burn the token
        assert_ok!(
            state
                .accounts
                .reset_password(&reset_request("erin@example.com", &token, NEW_PASSWORD, NEW_PASSWORD))
                .await
        );
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let db = TestDatabase::new().await;
        let mut config = test_config(MEMORY_STORE_URL);
        config.service.auth.reset_token_ttl = 0;
        let state = AppState::new(config, db.store());
        UserFactory::create(&state, "frank@example.com", &[]).await;

        let link = assert_ok!(state.accounts.forgot_password("frank@example.com").await).unwrap();
        let err = assert_err!(
            state
                .accounts
                .reset_password(&reset_request(
                    "frank@example.com",
                    &token_from_link(&link),
                    NEW_PASSWORD,
                    NEW_PASSWORD
                ))
                .await
        );
        assert!(matches!(err, AdminError::Auth(_)), "got {:?}", err);
    }
}
