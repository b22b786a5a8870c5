//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/infrastructure layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key / Host Event → Event → Event Handler → State Mutations → Actions → Side Effects
//!                                                                 ↓
//!                     MembersFetched ←──────── web request result ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`editor`]: Draft state of an inline row edit
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`pagination`]: Fixed-size pages and the pager control
//! - [`search`]: Substring filtering and match highlighting
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod editor;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod search;
pub mod state;

pub use actions::Action;
pub use editor::{EditField, RowEdit};
pub use handler::{handle_event, Event};
pub use modes::{DeleteTarget, InputMode};
pub use pagination::{PagerItem, Pagination, PAGE_SIZE};
pub use state::{AppState, LoadStatus};
