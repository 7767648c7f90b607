//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::overrides::Overrides;
use crate::config::schema::InspectorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<InspectorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<InspectorConfig, ConfigError> {
    let config: InspectorConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Startup configuration: the file when given (defaults otherwise), with
/// overrides applied on top, validated as a whole.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: Overrides,
) -> Result<InspectorConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml::from_str::<InspectorConfig>(&fs::read_to_string(path)?)?,
        None => InspectorConfig::default(),
    };

    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [listener.tls]
            cert_path = "/etc/inspector/cert.pem"
            key_path = "/etc/inspector/key.pem"
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        let tls = config.listener.tls.unwrap();
        assert_eq!(tls.cert_path, "/etc/inspector/cert.pem");
    }

    #[test]
    fn overrides_fix_an_invalid_file_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener]\nbind_address = \"not-an-address\"").unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Validation(_))
        ));

        let config = resolve_config(
            Some(file.path()),
            Overrides {
                bind: Some("127.0.0.1:7000".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:7000");
    }

    #[test]
    fn example_file_matches_defaults() {
        let config = parse_config(include_str!("../../request-inspector.example.toml")).unwrap();
        let defaults = InspectorConfig::default();
        assert_eq!(config.listener.bind_address, defaults.listener.bind_address);
        assert!(config.listener.tls.is_none());
        assert_eq!(config.security.max_body_size, defaults.security.max_body_size);
        assert_eq!(config.observability.log_format, defaults.observability.log_format);
    }

    #[test]
    fn no_file_means_defaults() {
        let config = resolve_config(None, Overrides::default()).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let err = parse_config("[listener\nbind_address = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn semantic_problems_are_joined() {
        let err = parse_config(
            r#"
            [timeouts]
            request_secs = 0
            [security]
            max_body_size = 0
            "#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("request_secs"));
        assert!(message.contains("max_body_size"));
    }
}
