//! Configuration loading and server assembly

#[cfg(test)]
mod tests {
    use crate::common::fixtures::TEST_JWT_SECRET;
    use crate::common::test_config;
    use crate::{assert_err, assert_ok};
    use identity_admin::config::{Config, MEMORY_STORE_URL, UnknownRolePolicy};
    use identity_admin::server::ServerBuilder;
    use identity_admin::utils::error::AdminError;
    use std::path::PathBuf;

    fn example_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/identity-admin.yaml.example")
    }

    #[tokio::test]
    async fn test_example_config_requires_a_real_secret() {
        let err = assert_err!(Config::from_file(example_path()).await);
        assert!(matches!(err, AdminError::Config(_)), "got {:?}", err);
        assert!(err.to_string().contains("placeholder"));
    }

    #[tokio::test]
    async fn test_example_config_with_secret_is_valid() {
        let content = tokio::fs::read_to_string(example_path()).await.unwrap();
        let content = content.replace(
            "replace-with-a-long-random-string-of-your-own-0001",
            TEST_JWT_SECRET,
        );

        let config = assert_ok!(Config::from_yaml(&content));
        assert_eq!(config.server().port, 8080);
        assert_eq!(config.auth().admin_roles, vec!["Admin".to_string()]);
        assert_eq!(config.rbac().unknown_role_policy, UnknownRolePolicy::Ignore);
        assert!(!config.auth().expose_reset_link);
    }

    #[test]
    fn test_fixture_config_is_valid() {
        assert_ok!(test_config(MEMORY_STORE_URL).validate());
    }

    #[test]
    fn test_zero_reset_ttl_is_rejected() {
        let mut config = test_config(MEMORY_STORE_URL);
        config.service.auth.reset_token_ttl = 0;
        assert_err!(config.validate());
    }

    #[tokio::test]
    async fn test_builder_requires_config() {
        let err = assert_err!(ServerBuilder::new().build().await.map(|_| ()));
        assert!(matches!(err, AdminError::Config(_)));
    }

    #[tokio::test]
    async fn test_server_bootstraps_roles_on_memory_store() {
        let mut config = test_config(MEMORY_STORE_URL);
        config.service.rbac.bootstrap_roles = vec!["Admin".to_string(), "Auditor".to_string()];

        let server = assert_ok!(ServerBuilder::new().with_config(config).build().await);
        assert_eq!(server.config().port, 8080);

        let roles = assert_ok!(server.state().rbac.list_roles().await);
        let names: Vec<&str> = roles.iter().map(|r| r.role.name.as_str()).collect();
        assert_eq!(names, vec!["Admin", "Auditor"]);
    }

    #[tokio::test]
    async fn test_server_on_sqlite_memory() {
        let config = test_config("sqlite::memory:");

        let server = assert_ok!(ServerBuilder::new().with_config(config).build().await);
        assert_eq!(server.state().store.backend_name(), "sqlite");
        assert_ok!(server.state().store.health_check().await);
    }
}
