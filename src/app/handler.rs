//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and host events, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, permissions, web responses)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Every event is only honoured in the input modes where it makes sense; in
//! any other mode it is dropped without a render.
//!
//! # Event Types
//!
//! - **Loading**: `PermissionsResult`, `MembersFetched`
//! - **Navigation**: `CursorDown`, `CursorUp`, `FirstPage`, `PreviousPage`,
//!   `NextPage`, `LastPage`, `GoToPage`
//! - **Selection**: `ToggleSelection`, `TogglePageSelection`
//! - **Row actions**: `EditRow`, `DeleteRow`, `DeleteSelected`
//! - **Text input**: `Char`, `Backspace`, `Submit`, `Escape`, `NextField`,
//!   `ToggleRole`
//! - **Confirmation**: `Confirm`, `Decline`
//!
//! # Example
//!
//! ```
//! use memberdesk::app::{handle_event, AppState, Event};
//! use memberdesk::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), "https://example.com/members.json");
//! let body = br#"[{"id":"1","name":"Ann","email":"ann@example.com","role":"admin"}]"#;
//! let (render, actions) = handle_event(
//!     &mut state,
//!     &Event::MembersFetched { status: 200, body: body.to_vec() },
//! )?;
//! assert!(render);
//! assert!(actions.is_empty());
//! assert_eq!(state.displayed.len(), 1);
//! # Ok::<(), memberdesk::domain::MemberdeskError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::{MemberdeskError, Result};
use crate::infrastructure::parse_members;
use zellij_tile::prelude::PermissionType;

/// Events triggered by user input or by the host.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the row cursor down by one row (wraps to top of page).
    CursorDown,
    /// Moves the row cursor up by one row (wraps to bottom of page).
    CursorUp,
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    /// Jumps to the given 1-based page, clamped.
    GoToPage(usize),

    /// Flips the checkbox of the cursor row.
    ToggleSelection,
    /// Selects or clears every row on the current page.
    TogglePageSelection,

    /// Opens the search box.
    SearchMode,
    /// Starts editing the cursor row.
    EditRow,
    /// Asks to delete the cursor row.
    DeleteRow,
    /// Asks to delete every selected row.
    DeleteSelected,

    /// Types a character into the search box or the focused edit field.
    Char(char),
    /// Removes the last character of the search box or focused edit field.
    Backspace,
    /// Enter: commits the search, saves the edit, or confirms a delete.
    Submit,
    /// Esc: leaves search, cancels the edit, or declines a delete.
    Escape,
    /// Moves edit focus to the next column.
    NextField,
    /// Flips the draft role while the role column is focused.
    ToggleRole,

    /// Accepts the pending delete.
    Confirm,
    /// Rejects the pending delete.
    Decline,

    /// Closes the plugin pane.
    CloseFocus,

    /// Reports the permissions granted after the startup request.
    ///
    /// The member list is fetched once web access is granted.
    PermissionsResult {
        /// Permissions granted by the user. Empty when the request was denied.
        granted: Vec<PermissionType>,
    },

    /// Response to the member list request.
    MembersFetched {
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag tells the runtime whether the UI needs to be redrawn.
///
/// # Errors
///
/// Currently never fails: fetch and decode problems are recorded in the load
/// status instead of aborting event processing. The `Result` keeps the
/// runtime's error path in place for host-facing handlers.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::PermissionsResult { granted } => {
            if !granted.contains(&PermissionType::WebAccess) {
                state.load_failed(&MemberdeskError::PermissionDenied);
                return Ok((true, vec![]));
            }

            if !matches!(state.load_status, super::state::LoadStatus::Idle) {
                tracing::debug!("members already requested, ignoring repeated grant");
                return Ok((false, vec![]));
            }

            tracing::info!(url = %state.source_url, "fetching members");
            state.begin_loading();
            Ok((true, vec![Action::FetchMembers {
                url: state.source_url.clone(),
            }]))
        }
        Event::MembersFetched { status, body } => {
            tracing::debug!(status = status, body_len = body.len(), "member response received");

            match parse_members(*status, body) {
                Ok(records) => state.load_succeeded(records),
                Err(err) => state.load_failed(&err),
            }
            Ok((true, vec![]))
        }

        Event::Char(c) => match &mut state.input_mode {
            InputMode::Search => {
                state.search_draft.push(*c);
                tracing::trace!(query = %state.search_draft, char = %c, "search draft updated");
                Ok((true, vec![]))
            }
            InputMode::Editing(edit) => {
                edit.insert_char(*c);
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Backspace => match &mut state.input_mode {
            InputMode::Search => {
                state.search_draft.pop();
                Ok((true, vec![]))
            }
            InputMode::Editing(edit) => {
                edit.backspace();
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Submit => match &state.input_mode {
            InputMode::Search => {
                state.commit_search();
                Ok((true, vec![]))
            }
            InputMode::Editing(_) => {
                state.save_edit();
                Ok((true, vec![]))
            }
            InputMode::Confirm(_) => {
                state.confirm_delete();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => match &state.input_mode {
            InputMode::Search => {
                tracing::debug!("leaving search without committing");
                state.leave_search();
                Ok((true, vec![]))
            }
            InputMode::Editing(_) => {
                state.cancel_edit();
                Ok((true, vec![]))
            }
            InputMode::Confirm(_) => {
                state.decline_delete();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::NextField => match state.editing_mut() {
            Some(edit) => {
                edit.next_field();
                Ok((true, vec![]))
            }
            None => Ok((false, vec![])),
        },
        Event::ToggleRole => match state.editing_mut() {
            Some(edit) => {
                edit.toggle_role();
                Ok((true, vec![]))
            }
            None => Ok((false, vec![])),
        },

        Event::Confirm => {
            if !matches!(state.input_mode, InputMode::Confirm(_)) {
                return Ok((false, vec![]));
            }
            let removed = state.confirm_delete();
            tracing::debug!(removed = removed, "delete confirmed");
            Ok((true, vec![]))
        }
        Event::Decline => {
            if !matches!(state.input_mode, InputMode::Confirm(_)) {
                return Ok((false, vec![]));
            }
            state.decline_delete();
            Ok((true, vec![]))
        }

        _ if !state.input_mode.is_normal() => {
            tracing::trace!("event ignored outside normal mode");
            Ok((false, vec![]))
        }

        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::FirstPage => {
            state.first_page();
            Ok((true, vec![]))
        }
        Event::PreviousPage => {
            state.previous_page();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            state.next_page();
            Ok((true, vec![]))
        }
        Event::LastPage => {
            state.last_page();
            Ok((true, vec![]))
        }
        Event::GoToPage(page) => {
            state.go_to_page(*page);
            Ok((true, vec![]))
        }
        Event::ToggleSelection => {
            state.toggle_cursor_selection();
            Ok((true, vec![]))
        }
        Event::TogglePageSelection => {
            state.toggle_page_selection();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.enter_search();
            Ok((true, vec![]))
        }
        Event::EditRow => Ok((state.begin_edit(), vec![])),
        Event::DeleteRow => Ok((state.request_delete_row(), vec![])),
        Event::DeleteSelected => {
            if !state.request_delete_selected() {
                tracing::debug!("no rows selected, nothing to delete");
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
    }
}

/// Short event label for spans, without payload bodies.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::CursorDown => "CursorDown",
        Event::CursorUp => "CursorUp",
        Event::FirstPage => "FirstPage",
        Event::PreviousPage => "PreviousPage",
        Event::NextPage => "NextPage",
        Event::LastPage => "LastPage",
        Event::GoToPage(_) => "GoToPage",
        Event::ToggleSelection => "ToggleSelection",
        Event::TogglePageSelection => "TogglePageSelection",
        Event::SearchMode => "SearchMode",
        Event::EditRow => "EditRow",
        Event::DeleteRow => "DeleteRow",
        Event::DeleteSelected => "DeleteSelected",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Submit => "Submit",
        Event::Escape => "Escape",
        Event::NextField => "NextField",
        Event::ToggleRole => "ToggleRole",
        Event::Confirm => "Confirm",
        Event::Decline => "Decline",
        Event::CloseFocus => "CloseFocus",
        Event::PermissionsResult { .. } => "PermissionsResult",
        Event::MembersFetched { .. } => "MembersFetched",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::DeleteTarget;
    use crate::app::state::LoadStatus;
    use crate::domain::{Record, RecordId, Role};
    use crate::ui::theme::Theme;

    const PAYLOAD: &[u8] = br#"[
        {"id": "1", "name": "Alice", "email": "alice@example.com", "role": "admin"},
        {"id": "2", "name": "Bob", "email": "bob@example.com", "role": "member"}
    ]"#;

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    fn loaded() -> AppState {
        let mut state = AppState::new(Theme::default(), "http://localhost/members.json");
        send(&mut state, &[Event::MembersFetched {
            status: 200,
            body: PAYLOAD.to_vec(),
        }]);
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn ids(state: &AppState) -> Vec<&str> {
        state.displayed.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn granted_web_access_fetches_once() {
        let mut state = AppState::new(Theme::default(), "http://localhost/members.json");
        let granted = Event::PermissionsResult {
            granted: vec![PermissionType::WebAccess],
        };

        let (render, actions) = handle_event(&mut state, &granted).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::FetchMembers {
            url: "http://localhost/members.json".to_string()
        }]);
        assert_eq!(state.load_status, LoadStatus::Loading);

        let (_, actions) = handle_event(&mut state, &granted).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn denied_web_access_fails_the_load() {
        let mut state = AppState::new(Theme::default(), "http://localhost/members.json");
        let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: vec![] }).unwrap();

        assert!(actions.is_empty());
        assert!(matches!(state.load_status, LoadStatus::Failed(_)));
    }

    #[test]
    fn only_web_access_unlocks_the_fetch() {
        let mut state = AppState::new(Theme::default(), "http://localhost/members.json");
        let granted = Event::PermissionsResult {
            granted: vec![PermissionType::ReadApplicationState],
        };

        let (_, actions) = handle_event(&mut state, &granted).unwrap();
        assert!(actions.is_empty());
        assert_eq!(
            state.load_status,
            LoadStatus::Failed("web access permission was denied".to_string())
        );
    }

    #[test]
    fn bad_payload_is_reported_not_propagated() {
        let mut state = AppState::new(Theme::default(), "http://localhost/members.json");
        let result = handle_event(&mut state, &Event::MembersFetched {
            status: 200,
            body: b"<html>".to_vec(),
        });

        assert!(result.is_ok());
        assert!(state.dataset.is_empty());
        assert!(matches!(state.load_status, LoadStatus::Failed(ref msg) if msg.starts_with("malformed member payload")));
    }

    #[test]
    fn typed_search_applies_only_on_submit() {
        let mut state = loaded();
        send(&mut state, &[Event::SearchMode]);
        type_text(&mut state, "bob");
        assert_eq!(ids(&state), vec!["1", "2"]);

        send(&mut state, &[Event::Submit]);
        assert_eq!(ids(&state), vec!["2"]);
        assert_eq!(state.current_page(), 1);
        assert!(state.input_mode.is_normal());
    }

    #[test]
    fn escape_leaves_search_without_applying() {
        let mut state = loaded();
        send(&mut state, &[Event::SearchMode]);
        type_text(&mut state, "bob");
        send(&mut state, &[Event::Escape]);

        assert_eq!(ids(&state), vec!["1", "2"]);
        assert!(state.input_mode.is_normal());
    }

    #[test]
    fn navigation_keys_are_ignored_while_searching() {
        let mut state = loaded();
        send(&mut state, &[Event::SearchMode]);

        let (render, _) = handle_event(&mut state, &Event::DeleteRow).unwrap();
        assert!(!render);
        assert!(state.input_mode.is_search());
    }

    #[test]
    fn characters_are_ignored_in_normal_mode() {
        let mut state = loaded();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.search_draft.is_empty());
    }

    #[test]
    fn edit_save_flow() {
        let mut state = loaded();
        send(&mut state, &[Event::EditRow]);
        for _ in 0.."Alice".len() {
            send(&mut state, &[Event::Backspace]);
        }
        type_text(&mut state, "Alicia");
        send(&mut state, &[Event::NextField, Event::NextField, Event::ToggleRole, Event::Submit]);

        assert_eq!(state.displayed[0], Record::new("1", "Alicia", "alice@example.com", Role::Member));
        assert!(state.input_mode.is_normal());
    }

    #[test]
    fn edit_cancel_flow() {
        let mut state = loaded();
        let before = state.displayed.clone();
        send(&mut state, &[Event::EditRow]);
        type_text(&mut state, "zzz");
        send(&mut state, &[Event::Escape]);

        assert_eq!(state.displayed, before);
        assert!(state.input_mode.is_normal());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = loaded();
        send(&mut state, &[Event::CursorDown, Event::DeleteRow]);
        assert_eq!(state.input_mode, InputMode::Confirm(DeleteTarget::Row(RecordId::from("2"))));
        assert_eq!(state.displayed.len(), 2);

        send(&mut state, &[Event::Confirm]);
        assert_eq!(ids(&state), vec!["1"]);
    }

    #[test]
    fn declined_delete_keeps_rows() {
        let mut state = loaded();
        send(&mut state, &[Event::DeleteRow, Event::Decline]);
        assert_eq!(ids(&state), vec!["1", "2"]);

        send(&mut state, &[Event::DeleteRow, Event::Escape]);
        assert_eq!(ids(&state), vec!["1", "2"]);
        assert!(state.input_mode.is_normal());
    }

    #[test]
    fn bulk_delete_of_selected_rows() {
        let mut state = loaded();
        send(&mut state, &[Event::ToggleSelection, Event::DeleteSelected, Event::Submit]);
        assert_eq!(ids(&state), vec!["2"]);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn bulk_delete_with_empty_selection_is_ignored() {
        let mut state = loaded();
        let (render, actions) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.input_mode.is_normal());
    }

    #[test]
    fn confirm_without_pending_delete_does_nothing() {
        let mut state = loaded();
        let (render, _) = handle_event(&mut state, &Event::Confirm).unwrap();
        assert!(!render);
        assert_eq!(state.displayed.len(), 2);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = loaded();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
