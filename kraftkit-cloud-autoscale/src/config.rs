//! Environment-backed settings.
//!
//! Settings resolve through an ordered chain: an explicit (flag) value first,
//! then the process environment. Empty values count as unset at every step.

use std::env;

/// Metro used when `--metro` is not given.
pub const KRAFTCLOUD_METRO: &str = "KRAFTCLOUD_METRO";
/// KraftCloud access token.
pub const KRAFTCLOUD_TOKEN: &str = "KRAFTCLOUD_TOKEN";
/// Optional user paired with [`KRAFTCLOUD_TOKEN`].
pub const KRAFTCLOUD_USER: &str = "KRAFTCLOUD_USER";
/// Overrides the directory holding `auth.json`.
pub const KRAFTKIT_CONFIG_DIR: &str = "KRAFTKIT_CONFIG_DIR";

/// Resolve a setting from an explicit value, falling back to `env_key`.
pub fn resolve_setting(explicit: Option<&str>, env_key: &str) -> Option<String> {
    explicit
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| env_value(env_key))
}

/// Non-empty value of an environment variable.
pub fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
