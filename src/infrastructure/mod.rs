//! Infrastructure layer for host and network interactions.
//!
//! - [`paths`]: sandbox path handling (`/host` mount, data directory)
//! - [`source`]: member source URL and response decoding

pub mod paths;
pub mod source;

pub use paths::{expand_tilde, get_data_dir};
pub use source::{parse_members, DEFAULT_SOURCE_URL};
