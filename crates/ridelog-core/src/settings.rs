//! Connection settings from a `key=value` file.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

const DEFAULTS: [(&str, &str); 4] = [
    ("host", "localhost"),
    ("user", "yourusername"),
    ("password", "yourpassword"),
    ("db", ""),
];

/// Immutable settings map, seeded with defaults and overridden by the file.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            values: DEFAULTS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Settings {
    /// Parse settings text over the defaults.
    ///
    /// Lines that do not split into exactly one key and one value on `=` are
    /// skipped, as are blank lines and `#` comments.
    pub fn parse(text: &str) -> Self {
        let mut settings = Self::default();
        for (number, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = trimmed.split('=').collect();
            match parts.as_slice() {
                [key, value] if !key.trim().is_empty() => {
                    settings
                        .values
                        .insert(key.trim().to_string(), value.trim().to_string());
                }
                _ => tracing::warn!(line = number + 1, "skipping malformed settings line"),
            }
        }
        settings
    }

    /// Load settings from `path`, falling back to the defaults when the file
    /// is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "settings loaded");
                Self::parse(&text)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "settings unavailable, using defaults");
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn host(&self) -> &str {
        self.get("host").unwrap_or_default()
    }

    pub fn user(&self) -> &str {
        self.get("user").unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.get("password").unwrap_or_default()
    }

    pub fn db(&self) -> &str {
        self.get("db").unwrap_or_default()
    }

    /// `host`, or `host/db` when a database is named.
    pub fn connection_target(&self) -> String {
        if self.db().is_empty() {
            self.host().to_string()
        } else {
            format!("{}/{}", self.host(), self.db())
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.values {
            if key == "password" {
                map.entry(key, &"<redacted>");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}
