use super::*;
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    // SAFETY: tests touching the environment are serialized.
    unsafe {
        env::remove_var(API_KEY_VAR);
        env::remove_var(BASE_URL_VAR);
        env::remove_var(ATTACHMENT_ROOT_VAR);
    }
}

#[test]
fn test_new_rejects_empty_api_key() {
    let err = Config::new("   ", None).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey));
    assert_eq!(
        err.to_string(),
        "TWENTY_API_KEY environment variable is required"
    );
}

#[test]
fn test_new_defaults_base_url() {
    let config = Config::new("key", None).unwrap();
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.graphql_endpoint(), "https://api.twenty.com/graphql");
    assert!(config.attachment_root().is_none());
}

#[test]
fn test_new_trims_trailing_slash() {
    let config = Config::new("key", Some("https://crm.example.com/".to_string())).unwrap();
    assert_eq!(config.graphql_endpoint(), "https://crm.example.com/graphql");
}

#[test]
fn test_attachment_root_must_be_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new("key", None)
        .unwrap()
        .with_attachment_root(Some(temp_dir.path().to_path_buf()));
    assert_eq!(config.attachment_root(), Some(temp_dir.path()));

    let missing = Config::new("key", None)
        .unwrap()
        .with_attachment_root(Some(temp_dir.path().join("missing")));
    assert!(missing.attachment_root().is_none());
}

#[test]
#[serial]
fn test_from_env_requires_api_key() {
    clear_env();
    let result = Config::from_env(None, None);
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    unsafe {
        env::set_var(API_KEY_VAR, "secret");
        env::set_var(BASE_URL_VAR, "https://self-hosted.example");
        env::set_var(ATTACHMENT_ROOT_VAR, temp_dir.path());
    }

    let config = Config::from_env(None, None).unwrap();
    assert_eq!(config.api_key(), "secret");
    assert_eq!(config.base_url(), "https://self-hosted.example");
    assert_eq!(config.attachment_root(), Some(temp_dir.path()));

    clear_env();
}

#[test]
#[serial]
fn test_explicit_overrides_win_over_env() {
    clear_env();
    unsafe {
        env::set_var(API_KEY_VAR, "secret");
        env::set_var(BASE_URL_VAR, "https://from-env.example");
    }

    let config = Config::from_env(Some("https://explicit.example".to_string()), None).unwrap();
    assert_eq!(config.base_url(), "https://explicit.example");

    clear_env();
}
