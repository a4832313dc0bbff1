//! Role administration against a migrated SQLite store

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{TEST_PASSWORD, UserFactory, state_with_store};
    use crate::common::{TestDatabase, test_config};
    use crate::{assert_err, assert_ok};
    use identity_admin::auth::CredentialService;
    use identity_admin::config::{MEMORY_STORE_URL, UnknownRolePolicy};
    use identity_admin::core::rbac::RbacManager;
    use identity_admin::utils::error::AdminError;
    use std::sync::Arc;

    async fn rejecting_manager(db: &TestDatabase) -> RbacManager {
        let config = test_config(MEMORY_STORE_URL);
        let credentials = Arc::new(CredentialService::new(db.store(), config.auth()));
        RbacManager::new(
            db.store(),
            credentials,
            config.auth().password_policy.clone(),
            UnknownRolePolicy::Reject,
        )
    }

    fn names(roles: &[identity_admin::RoleWithCount]) -> Vec<String> {
        roles.iter().map(|r| r.role.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_bootstrap_creates_admin_role_once() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;

        let created_again = assert_ok!(state.bootstrap().await);
        assert!(created_again.is_empty());

        let roles = assert_ok!(state.rbac.list_roles().await);
        assert_eq!(names(&roles), vec!["Admin".to_string()]);
    }

    #[tokio::test]
    async fn test_role_names_unique_ignoring_case() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;

        assert_ok!(state.rbac.create_role("Editor").await);
        let err = assert_err!(state.rbac.create_role("EDITOR").await);
        assert!(matches!(err, AdminError::Validation(_)), "got {:?}", err);

        let viewer = assert_ok!(state.rbac.create_role("Viewer").await);
        let err = assert_err!(state.rbac.rename_role(&viewer, "editor").await);
        assert!(matches!(err, AdminError::Validation(_)), "got {:?}", err);

        let roles = assert_ok!(state.rbac.list_roles().await);
        assert_eq!(
            names(&roles),
            vec!["Admin".to_string(), "Editor".to_string(), "Viewer".to_string()]
        );
    }

    #[tokio::test]
    async fn test_replace_roles_and_counts() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        assert_ok!(state.rbac.create_role("Editor").await);
        assert_ok!(state.rbac.create_role("Viewer").await);

        let alice = UserFactory::create(&state, "alice@example.com", &["Editor"]).await;
        let bob = UserFactory::create(&state, "bob@example.com", &["Editor", "Viewer"]).await;

        let applied = assert_ok!(
            state
                .rbac
                .replace_user_roles(&alice, &["Admin".to_string(), "Viewer".to_string()])
                .await
        );
        assert_eq!(applied, vec!["Admin".to_string(), "Viewer".to_string()]);

        let counts: Vec<(String, u64)> = assert_ok!(state.rbac.list_roles().await)
            .into_iter()
            .map(|r| (r.role.name, r.member_count))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("Admin".to_string(), 1),
                ("Editor".to_string(), 1),
                ("Viewer".to_string(), 2),
            ]
        );

        let assignable = assert_ok!(state.rbac.assignable_roles_for_user(&bob).await);
        let selected: Vec<&str> = assignable
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.role_name.as_str())
            .collect();
        assert_eq!(selected, vec!["Editor", "Viewer"]);
        assert_eq!(assignable.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_role_guarded_until_unassigned() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        let editor = assert_ok!(state.rbac.create_role("Editor").await);
        let user = UserFactory::create(&state, "carol@example.com", &["Editor"]).await;

        let err = assert_err!(state.rbac.delete_role(&editor).await);
        assert!(matches!(err, AdminError::Conflict(_)), "got {:?}", err);

        assert_ok!(state.rbac.replace_user_roles(&user, &[]).await);
        assert_ok!(state.rbac.delete_role(&editor).await);

        let err = assert_err!(state.rbac.delete_role(&editor).await);
        assert!(matches!(err, AdminError::NotFound(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_delete_user_drops_memberships() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        let admin_role = assert_ok!(state.rbac.list_roles().await)[0].role.id.clone();
        let user = UserFactory::create(&state, "dave@example.com", &["Admin"]).await;

        assert_ok!(state.rbac.delete_user(&user).await);

        let roles = assert_ok!(state.rbac.list_roles().await);
        assert_eq!(roles[0].member_count, 0);
        // nothing references the role any more
        assert_ok!(state.rbac.delete_role(&admin_role).await);

        let err = assert_err!(state.rbac.delete_user(&user).await);
        assert!(matches!(err, AdminError::NotFound(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_unknown_role_rejection_leaves_memberships_unchanged() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        let user = UserFactory::create(&state, "erin@example.com", &["Admin"]).await;
        let manager = rejecting_manager(&db).await;

        let err = assert_err!(
            manager
                .replace_user_roles(&user, &["Ghost".to_string()])
                .await
        );
        assert!(matches!(err, AdminError::Validation(_)), "got {:?}", err);

        let users = assert_ok!(state.rbac.list_users_with_roles().await);
        assert_eq!(users[0].roles, vec!["Admin".to_string()]);
    }

    #[tokio::test]
    async fn test_duplicate_email_ignores_case() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        UserFactory::create(&state, "frank@example.com", &[]).await;

        let err = assert_err!(
            state
                .rbac
                .create_user(UserFactory::profile("Frank@Example.COM"), TEST_PASSWORD, None)
                .await
        );
        assert!(matches!(err, AdminError::Validation(_)), "got {:?}", err);

        let users = assert_ok!(state.rbac.list_users_with_roles().await);
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_users_listed_by_email_with_role_names() {
        let db = TestDatabase::new().await;
        let state = state_with_store(db.store()).await;
        UserFactory::create(&state, "zoe@example.com", &[]).await;
        UserFactory::create(&state, "amy@example.com", &["Admin"]).await;

        let users = assert_ok!(state.rbac.list_users_with_roles().await);
        let emails: Vec<&str> = users.iter().map(|u| u.user.email.as_str()).collect();
        assert_eq!(emails, vec!["amy@example.com", "zoe@example.com"]);
        assert_eq!(users[0].roles, vec!["Admin".to_string()]);
        assert!(users[1].roles.is_empty());
    }
}
