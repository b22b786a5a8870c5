//! Domain layer for the Memberdesk plugin.
//!
//! Core types independent of Zellij APIs: the member [`Record`] model and the
//! crate-wide error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Member record, id and role types
//!
//! # Examples
//!
//! ```
//! use memberdesk::domain::{Record, Role};
//!
//! let record = Record::new("1", "Aaron Miles", "aaron@mailinator.com", Role::Member);
//! assert!(record.matches("aaron"));
//! ```

pub mod error;
pub mod record;

pub use error::{MemberdeskError, Result};
pub use record::{Record, RecordId, Role};
