//! Constraint violations on the SQL store surface as typed errors

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::{assert_err, assert_ok};
    use identity_admin::core::models::{Role, User, UserProfile};
    use identity_admin::utils::error::AdminError;

    fn user(email: &str) -> User {
        User::new(UserProfile::new(email), "hash".to_string())
    }

    #[tokio::test]
    async fn test_deleting_role_with_members_is_a_conflict() {
        let db = TestDatabase::new().await;
        let store = db.store();
        let mut txn = assert_ok!(store.begin().await);

        let alice = user("alice@example.com");
        let admin = Role::new("Admin");
        assert_ok!(txn.insert_user(&alice).await);
        assert_ok!(txn.insert_role(&admin).await);
        assert_ok!(txn.insert_edge(&alice.id, &admin.id).await);

        let err = assert_err!(txn.delete_role(&admin.id).await);
        assert!(matches!(err, AdminError::Conflict(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_duplicate_role_name_is_a_validation_error() {
        let db = TestDatabase::new().await;
        let store = db.store();
        let mut txn = assert_ok!(store.begin().await);

        assert_ok!(txn.insert_role(&Role::new("Admin")).await);
        let err = assert_err!(txn.insert_role(&Role::new("admin")).await);
        assert!(matches!(err, AdminError::Validation(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_validation_error() {
        let db = TestDatabase::new().await;
        let store = db.store();
        let mut txn = assert_ok!(store.begin().await);

        assert_ok!(txn.insert_user(&user("alice@example.com")).await);
        let err = assert_err!(txn.insert_user(&user("alice@example.com")).await);
        assert!(matches!(err, AdminError::Validation(_)), "got {:?}", err);
    }
}
