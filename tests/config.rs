use std::path::PathBuf;
use localfiles::cli::Args;
use localfiles::config::{Config, FileConfig, DEFAULT_ROOT};

fn make_args(root: Option<PathBuf>, port: Option<u16>, name: Option<String>) -> Args {
    Args {
        root,
        port,
        name,
        config: None,
        localhost: false,
    }
}

#[test]
fn test_defaults_when_nothing_set() {
    let args = make_args(None, None, None);
    let config = Config::resolve(None, &args);
    assert_eq!(config.port, 7000);
    assert_eq!(config.root, PathBuf::from(DEFAULT_ROOT));
    assert_eq!(config.name, "Local Files With Catalog Support");
    assert!(!config.localhost);
}

#[test]
fn test_cli_flag_overrides_default() {
    let args = make_args(Some(PathBuf::from("/media")), Some(9000), None);
    let config = Config::resolve(None, &args);
    assert_eq!(config.port, 9000);
    assert_eq!(config.root, PathBuf::from("/media"));
}

#[test]
fn test_toml_overrides_default() {
    let file = FileConfig {
        root: Some(PathBuf::from("/srv/library")),
        port: Some(7777),
        name: Some("Den".to_string()),
        localhost: Some(true),
    };
    let config = Config::resolve(Some(file), &make_args(None, None, None));
    assert_eq!(config.port, 7777);
    assert_eq!(config.root, PathBuf::from("/srv/library"));
    assert_eq!(config.name, "Den");
    assert!(config.localhost);
}

#[test]
fn test_cli_overrides_toml() {
    let file = FileConfig {
        root: Some(PathBuf::from("/srv/library")),
        port: Some(7777),
        name: Some("Den".to_string()),
        localhost: None,
    };
    let args = make_args(Some(PathBuf::from("/media")), Some(9000), Some("Attic".to_string()));
    let config = Config::resolve(Some(file), &args);
    assert_eq!(config.port, 9000); // CLI wins
    assert_eq!(config.root, PathBuf::from("/media"));
    assert_eq!(config.name, "Attic");
}

#[test]
fn test_toml_parse() {
    let toml_str = "root = \"/home/Library/Movies And Series\"\nport = 9000\nname = \"Living Room\"\n";
    let parsed: FileConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(parsed.root, Some(PathBuf::from("/home/Library/Movies And Series")));
    assert_eq!(parsed.port, Some(9000));
    assert_eq!(parsed.name.as_deref(), Some("Living Room"));
}

#[test]
fn test_toml_unknown_fields_ignored() {
    let toml_str = "port = 9000\nunknown_future_key = true\n";
    let parsed: Result<FileConfig, _> = toml::from_str(toml_str);
    assert!(parsed.is_ok());
}

#[test]
fn test_load_config_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("localfiles.toml");
    std::fs::write(&path, "port = \"not a number\"\n").unwrap();
    let err = localfiles::config::load_config(&path).unwrap_err();
    assert!(matches!(err, localfiles::config::ConfigError::Parse(_)));
}

#[test]
fn test_find_config_file_prefers_explicit_path() {
    let explicit = PathBuf::from("/etc/localfiles/custom.toml");
    assert_eq!(
        localfiles::config::find_config_file(Some(explicit.as_path())),
        Some(explicit.clone())
    );
}

#[test]
fn test_explicit_config_file_is_found_and_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "root = \"/srv/library\"\nport = 7100\nlocalhost = true\n").unwrap();

    let found = localfiles::config::find_config_file(Some(path.as_path())).unwrap();
    assert_eq!(found, path);

    let file = localfiles::config::load_config(&found).unwrap();
    let config = Config::resolve(Some(file), &make_args(None, None, None));
    assert_eq!(config.root, PathBuf::from("/srv/library"));
    assert_eq!(config.port, 7100);
    assert!(config.localhost);
}

#[test]
fn test_explicit_config_file_missing_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let found = localfiles::config::find_config_file(Some(path.as_path())).unwrap();
    let err = localfiles::config::load_config(&found).unwrap_err();
    assert!(matches!(err, localfiles::config::ConfigError::Io(_)));
}
