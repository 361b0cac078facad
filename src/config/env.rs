//! # Environment Variable Utilities
//!
//! Helpers for reading environment variables with type conversion and fallback
//! defaults. Each reader has a `*_from` twin taking a provider closure, so the
//! parsing rules can be tested without touching the process environment.
//!
//! # Examples
//! ```rust,no_run
//! use image_scaler::config::env::{read_flag, read_u32};
//!
//! let credentials = read_flag("CORS_CREDENTIALS", false);
//! let port = read_u32("PORT", 8080);
//! ```

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Reads a boolean flag from an environment variable.
///
/// Returns `true` for `"1"`, `"true"`, `"yes"` or `"on"` (case-insensitive,
/// surrounding quotes ignored), `false` for any other value.
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(process_env, name, default)
}

/// [`read_flag`] with a custom provider.
///
/// # Example
/// ```rust
/// use image_scaler::config::env::read_flag_from;
///
/// assert!(read_flag_from(|_| Some("'on'".into()), "X", false));
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => matches!(
            unquote(&v).to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}

/// Reads a `u32`, falling back to `default` when unset or unparsable.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(process_env, name, default)
}

pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| unquote(&s).parse::<u32>().ok())
        .unwrap_or(default)
}

/// Reads a `u64`, falling back to `default` when unset or unparsable.
pub fn read_u64(name: &str, default: u64) -> u64 {
    read_u64_from(process_env, name, default)
}

pub fn read_u64_from<F>(provider: F, name: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| unquote(&s).parse::<u64>().ok())
        .unwrap_or(default)
}

/// Reads a trimmed string; unset or blank values yield `default`.
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(process_env, name, default)
}

pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|s| unquote(&s).to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn unquote(v: &str) -> &str {
    v.trim().trim_matches(|c| c == '"' || c == '\'')
}
