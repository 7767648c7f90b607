//! Command-line and environment overrides applied on top of the file.

use crate::config::schema::InspectorConfig;

/// Values given at startup that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Full bind address, e.g. `127.0.0.1:9000`.
    pub bind: Option<String>,
    /// Port only; applied after `bind`.
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl Overrides {
    pub fn apply(self, config: &mut InspectorConfig) {
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(port) = self.port {
            config.listener.set_port(port);
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_applies_after_bind() {
        let mut config = InspectorConfig::default();
        Overrides {
            bind: Some("127.0.0.1:1234".into()),
            port: Some(8443),
            log_level: Some("debug".into()),
        }
        .apply(&mut config);
        assert_eq!(config.listener.bind_address, "127.0.0.1:8443");
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = InspectorConfig::default();
        Overrides::default().apply(&mut config);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
    }
}
