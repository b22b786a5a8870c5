//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! normally points at the directory Zellij was started from (usually `$HOME`).

use std::path::PathBuf;

/// Returns the directory Memberdesk writes its trace files to.
///
/// Resolves to `/host/.local/share/zellij/memberdesk`, i.e.
/// `~/.local/share/zellij/memberdesk` on the host when Zellij runs from `$HOME`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("memberdesk")
}

/// Maps `~`-relative paths onto the `/host` mount.
///
/// ```
/// use memberdesk::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
