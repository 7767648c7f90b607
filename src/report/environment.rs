//! Process environment snapshot and collection.
//!
//! The environment is captured once at startup and handed to the builder,
//! so reports never read ambient process state directly.

use super::masking::{is_sensitive_env_name, mask};
use super::Section;

/// Variable surfaced verbatim in `serverInfo`.
pub const SERVER_SOFTWARE: &str = "SERVER_SOFTWARE";

/// An immutable copy of `NAME=value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: Vec<(String, String)>,
}

impl EnvSnapshot {
    /// Capture the current process environment. Names or values that are not
    /// valid UTF-8 are converted lossily.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect();
        Self { vars }
    }

    /// Build from already-split pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Build from `NAME=value` entries, splitting on the first `=` only.
    /// Entries without any `=` are skipped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vars = entries
            .into_iter()
            .filter_map(|entry| {
                entry
                    .as_ref()
                    .split_once('=')
                    .map(|(k, v)| (k.to_string(), v.to_string()))
            })
            .collect();
        Self { vars }
    }

    /// Value of `name`, or an empty string when unset.
    pub fn get(&self, name: &str) -> &str {
        self.vars
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Every variable, with values of sensitive-looking names masked.
pub fn collect_environment(env: &EnvSnapshot) -> Section {
    env.iter()
        .map(|(name, value)| {
            let value = if is_sensitive_env_name(name) {
                mask(value)
            } else {
                value.to_string()
            };
            (name.to_string(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_sensitive_values_only() {
        let env = EnvSnapshot::from_pairs([
            ("API_TOKEN", "sk_live_12345"),
            ("HOME", "/root"),
            ("EMPTY_SECRET", ""),
        ]);

        let collected = collect_environment(&env);
        assert_eq!(collected["API_TOKEN"], "XXXXXXXXXXXXX");
        assert_eq!(collected["API_TOKEN"].len(), "sk_live_12345".len());
        assert_eq!(collected["HOME"], "/root");
        assert_eq!(collected["EMPTY_SECRET"], "");
    }

    #[test]
    fn entries_split_on_first_equals() {
        let env = EnvSnapshot::from_entries([
            "DATABASE_URL=postgres://u@h/db?sslmode=require",
            "NOEQUALS",
            "BLANK=",
        ]);
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("DATABASE_URL"), "postgres://u@h/db?sslmode=require");
        assert_eq!(env.get("BLANK"), "");
    }

    #[test]
    fn get_missing_is_empty() {
        assert_eq!(EnvSnapshot::default().get(SERVER_SOFTWARE), "");
    }

    #[test]
    fn capture_sees_process_environment() {
        let snapshot = EnvSnapshot::capture();
        assert_eq!(snapshot.len(), std::env::vars_os().count());
    }
}
