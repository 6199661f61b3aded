//! Process environment snapshot.
//!
//! The environment is captured once at startup and handed to validation and
//! assembly as an explicit value, so both stay pure functions of
//! (provider, snapshot) and tests never have to mutate the real environment.

use std::collections::HashMap;

/// Immutable name-to-value mapping taken from the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment. Entries with non-UTF-8
    /// names are skipped (they can never match a required variable) and
    /// non-UTF-8 values are converted lossily, so an odd environment entry
    /// cannot abort capture before validation runs.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(name, value)| {
                    let name = name.into_string().ok()?;
                    Some((name, value.to_string_lossy().into_owned()))
                })
                .collect(),
        }
    }

    /// Look up a variable. An unset variable reads as the empty string,
    /// which validation treats the same as an explicitly empty one.
    pub fn value(&self, name: &str) -> &str {
        self.vars.get(name).map(String::as_str).unwrap_or("")
    }

    /// Return every name from `required` whose value is unset or empty,
    /// in the order given.
    pub fn missing(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| self.value(name).is_empty())
            .map(|name| name.to_string())
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
