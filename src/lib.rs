//! Memberdesk: a Zellij plugin for administering a remote member list.
//!
//! Memberdesk fetches a JSON list of members once at startup and shows it as
//! a paginated table inside a Zellij pane:
//! - Case-insensitive substring search across id, name, email and role
//! - Ten rows per page with first/previous/next/last and direct page jumps
//! - Inline editing of name, email and role
//! - Row and bulk deletion behind a confirmation prompt
//! - Per-row checkbox selection with a select-page toggle
//!
//! Changes only live in memory; nothing is written back to the source.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, input modes                      │
//! │  - Search, pagination, selection, editing           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Infrastructure│
//! │ (ui/)         │                     │ (infra/)      │
//! │ - Rendering   │                     │ - Member fetch│
//! │ - Theming     │                     │ - Host paths  │
//! └───────────────┘                     └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Record, RecordId, Role, errors   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry spans to a rotating OTLP file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/memberdesk.wasm" {
//!         source_url "https://example.com/members.json"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. `load`: parse [`Config`], start tracing, build [`AppState`], request
//!    the `WebAccess` permission
//! 2. Permission granted: the handler emits [`Action::FetchMembers`]
//! 3. Web request result: the payload is decoded into records and shown
//! 4. Keys drive [`handle_event`]; every change re-renders the table
//!
//! # Example
//!
//! ```
//! use memberdesk::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let body = br#"[{"id":"1","name":"Ann","email":"ann@example.com","role":"member"}]"#;
//! handle_event(&mut state, &Event::MembersFetched { status: 200, body: body.to_vec() })?;
//! handle_event(&mut state, &Event::ToggleSelection)?;
//!
//! assert_eq!(state.compute_viewmodel().status.selection, "1 of 1 row(s) selected");
//! # Ok::<(), memberdesk::MemberdeskError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, LoadStatus};
pub use domain::{MemberdeskError, Record, RecordId, Result, Role};
pub use ui::Theme;

use infrastructure::{expand_tilde, DEFAULT_SOURCE_URL};
use std::collections::BTreeMap;

/// Default tracing directive.
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address of the member list. Must be an `http` or `https` URL.
    pub source_url: String,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to the `/host` mount.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans, e.g. `debug` or
    /// `memberdesk=trace`.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing or blank values fall back to their defaults. An invalid
    /// `source_url` is logged and replaced by the default source.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use memberdesk::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let source_url = value("source_url").map_or_else(
            || DEFAULT_SOURCE_URL.to_string(),
            |url| {
                parse_source_url(&url).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "using default member source");
                    DEFAULT_SOURCE_URL.to_string()
                })
            },
        );

        Self {
            source_url,
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level").unwrap_or_else(|| DEFAULT_TRACE_LEVEL.to_string()),
        }
    }

    /// Resolves the configured theme: file first, then name, then default.
    ///
    /// Load failures are logged and fall back to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                }
            }
        } else if let Some(theme_name) = &self.theme_name {
            match Theme::from_name(theme_name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme_name = %theme_name, "unknown theme, using default"),
            }
        }
        Theme::default()
    }
}

/// Checks that `url` is an absolute `http` or `https` URL.
///
/// # Errors
///
/// Returns [`MemberdeskError::Config`] for any other scheme or a missing host.
pub fn parse_source_url(url: &str) -> Result<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| MemberdeskError::Config(format!("source_url must be http(s): {url}")))?;

    if rest.split('/').next().map_or(true, str::is_empty) {
        return Err(MemberdeskError::Config(format!("source_url has no host: {url}")));
    }
    Ok(url.to_string())
}

/// Initializes the plugin with configuration.
///
/// Resolves the theme and returns an idle [`AppState`]; the member list is
/// requested once the host grants web access.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(source_url = %config.source_url, "initializing memberdesk plugin");

    AppState::new(config.theme(), config.source_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(Config::default().source_url, DEFAULT_SOURCE_URL);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", "")]));
        assert_eq!(config.theme_name, None);
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn custom_source_url_is_kept() {
        let config = Config::from_zellij(&map(&[("source_url", " http://localhost:8080/members.json ")]));
        assert_eq!(config.source_url, "http://localhost:8080/members.json");
    }

    #[test]
    fn invalid_source_url_falls_back() {
        let config = Config::from_zellij(&map(&[("source_url", "ftp://example.com/members.json")]));
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
    }

    #[test]
    fn source_url_needs_scheme_and_host() {
        assert!(parse_source_url("https://example.com").is_ok());
        assert!(matches!(parse_source_url("example.com"), Err(MemberdeskError::Config(_))));
        assert!(matches!(parse_source_url("https:///members.json"), Err(MemberdeskError::Config(_))));
    }

    #[test]
    fn theme_name_selects_builtin() {
        let config = Config::from_zellij(&map(&[("theme", "catppuccin-latte")]));
        assert_eq!(config.theme().name, "catppuccin-latte");

        let unknown = Config::from_zellij(&map(&[("theme", "neon")]));
        assert_eq!(unknown.theme().name, "catppuccin-mocha");
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "from-file".to_string();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let config = Config::from_zellij(&map(&[("theme", "catppuccin-latte"), ("theme_file", &path)]));
        assert_eq!(config.theme().name, "from-file");
    }

    #[test]
    fn missing_theme_file_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("theme_file", "/nowhere/theme.toml")]));
        assert_eq!(config.theme().name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_starts_idle() {
        let state = initialize(&Config::default());
        assert_eq!(state.load_status, LoadStatus::Idle);
        assert!(state.displayed.is_empty());
        assert_eq!(state.source_url, DEFAULT_SOURCE_URL);
    }
}
