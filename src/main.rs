//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Memberdesk library
//! and the Zellij plugin system. It translates host events into library
//! [`Event`]s, executes the returned [`Action`]s through host calls, and
//! delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult` and
//!    `PermissionRequestResult` events
//! 3. **Grant**: Once web access is granted the member list is requested
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move row cursor
//! - `h`/`Left`/`PageUp`, `l`/`Right`/`PageDown`: Previous / next page
//! - `g`/`Home`, `G`/`End`: First / last page
//! - `1`-`9`: Jump to page
//! - `Space`: Toggle row selection, `a`: toggle page selection
//! - `e`: Edit row, `d`: delete row, `D`: delete selected rows
//! - `/`: Search, `q`: close
//!
//! Search mode: type the query, `Enter` applies it, `Esc` leaves.
//!
//! Edit mode: type into the focused field, `Tab` moves to the next field,
//! `Space`/`Left`/`Right` toggle the role, `Enter` saves, `Esc` cancels.
//!
//! Confirmation: `y`/`Enter` deletes, `n`/`Esc` keeps the rows.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use memberdesk::infrastructure::source::{MEMBERS_REQUEST, REQUEST_CONTEXT_KEY};
use memberdesk::{handle_event, Action, AppState, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: memberdesk::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes application state, requests
    /// permissions and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        memberdesk::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(source_url = %config.source_url, theme = ?config.theme_name, "parsed configuration");
        self.app = memberdesk::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a host event, runs it through the handler and executes the
    /// resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Self::map_permission_result(status)
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        memberdesk::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key.bare_key),
            InputMode::Search => Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Editing(_) => Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::Escape,
                BareKey::Tab => Event::NextField,
                BareKey::Left | BareKey::Right => Event::ToggleRole,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Confirm(_) => Some(match key.bare_key {
                BareKey::Char('y' | 'Y') | BareKey::Enter => Event::Confirm,
                BareKey::Char('n' | 'N') | BareKey::Esc => Event::Decline,
                _ => return None,
            }),
        }
    }

    fn map_normal_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Left | BareKey::PageUp | BareKey::Char('h') => Event::PreviousPage,
            BareKey::Right | BareKey::PageDown | BareKey::Char('l') => Event::NextPage,
            BareKey::Home | BareKey::Char('g') => Event::FirstPage,
            BareKey::End | BareKey::Char('G') => Event::LastPage,
            BareKey::Char(c @ '1'..='9') => Event::GoToPage(c.to_digit(10)? as usize),
            BareKey::Char(' ') => Event::ToggleSelection,
            BareKey::Char('a') => Event::TogglePageSelection,
            BareKey::Char('e') => Event::EditRow,
            BareKey::Char('d') => Event::DeleteRow,
            BareKey::Char('D') => Event::DeleteSelected,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_permission_result(status: PermissionStatus) -> Event {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                Event::PermissionsResult {
                    granted: vec![PermissionType::WebAccess],
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - members cannot be loaded");
                Event::PermissionsResult { granted: vec![] }
            }
        }
    }

    /// Maps the member list response. Responses to other requests are ignored.
    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        if context.get(REQUEST_CONTEXT_KEY).map(String::as_str) != Some(MEMBERS_REQUEST) {
            tracing::debug!(?context, "ignoring unrelated web request result");
            return None;
        }
        Some(Event::MembersFetched { status, body })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchMembers { url } => {
                tracing::debug!(url = %url, "requesting member list");
                let context = BTreeMap::from([(
                    REQUEST_CONTEXT_KEY.to_string(),
                    MEMBERS_REQUEST.to_string(),
                )]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
        }
    }
}
