//! Application state and its transitions.
//!
//! [`AppState`] is the single owner of everything the table screen shows: the
//! dataset as loaded, the displayed (searched) working set, pagination, row
//! cursor, checkbox selection, the input mode and the load status. It is only
//! changed through the named transition methods below, each of which keeps
//! the state invariants intact:
//!
//! - the current page stays within `[1, max(1, total_pages)]`
//! - the row cursor stays within the current page
//! - selected ids, the edited row and a pending row delete all refer to
//!   records present in the displayed set
//! - selected ids all belong to the current page
//!
//! Edits and deletes are written to both the dataset and the displayed set,
//! so a later search reflects edited values and never brings deleted rows
//! back.
//!
//! # Example
//!
//! ```
//! use memberdesk::app::AppState;
//! use memberdesk::domain::{Record, Role};
//! use memberdesk::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), "https://example.com/members.json");
//! state.load_succeeded(vec![
//!     Record::new("1", "Alice", "alice@example.com", Role::Admin),
//!     Record::new("2", "Bob", "bob@example.com", Role::Member),
//! ]);
//!
//! state.search_draft = "bob".to_string();
//! state.commit_search();
//! assert_eq!(state.displayed.len(), 1);
//! assert_eq!(state.current_page(), 1);
//! ```

use super::editor::{EditField, RowEdit};
use super::modes::{DeleteTarget, InputMode};
use super::pagination::{self, Pagination};
use super::search;
use crate::domain::{MemberdeskError, Record, RecordId};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CellItem, ConfirmInfo, EmptyState, FooterInfo, HeaderInfo, RowItem, SearchBarInfo, StatusInfo,
    UIViewModel,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Progress of the one-shot member fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Waiting for host permissions; nothing requested yet.
    #[default]
    Idle,
    /// Request issued, no response yet.
    Loading,
    /// Dataset loaded.
    Loaded {
        /// Number of records received.
        count: usize,
        /// When the response was processed.
        at: DateTime<Utc>,
    },
    /// The request or its payload failed. The dataset stays empty.
    Failed(String),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Records as loaded, minus deletes and with saved edits applied.
    pub dataset: Vec<Record>,

    /// Working set shown in the table: `dataset` filtered by the committed
    /// search term.
    pub displayed: Vec<Record>,

    pub pagination: Pagination,

    /// Highlighted row, as an index into the current page.
    pub cursor: usize,

    /// Ids of checkbox-selected rows.
    pub selection: BTreeSet<RecordId>,

    pub input_mode: InputMode,

    /// Query being typed in the search box.
    pub search_draft: String,

    /// Lowercased term the displayed set was last filtered with.
    pub search_term: String,

    pub load_status: LoadStatus,

    /// URL of the member list.
    pub source_url: String,

    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state that will load members from `source_url`.
    #[must_use]
    pub fn new(theme: Theme, source_url: impl Into<String>) -> Self {
        Self {
            dataset: Vec::new(),
            displayed: Vec::new(),
            pagination: Pagination::new(),
            cursor: 0,
            selection: BTreeSet::new(),
            input_mode: InputMode::Normal,
            search_draft: String::new(),
            search_term: String::new(),
            load_status: LoadStatus::Idle,
            source_url: source_url.into(),
            theme,
        }
    }

    // ---- loading -------------------------------------------------------

    pub fn begin_loading(&mut self) {
        self.load_status = LoadStatus::Loading;
    }

    /// Installs a freshly loaded dataset and shows all of it.
    pub fn load_succeeded(&mut self, records: Vec<Record>) {
        tracing::debug!(record_count = records.len(), "member dataset loaded");

        self.load_status = LoadStatus::Loaded {
            count: records.len(),
            at: Utc::now(),
        };
        self.dataset = records;
        self.refilter();
    }

    /// Records a failed load. The dataset and displayed set are left empty.
    pub fn load_failed(&mut self, error: &MemberdeskError) {
        tracing::warn!(error = %error, url = %self.source_url, "failed to load members");

        self.dataset.clear();
        self.displayed.clear();
        self.pagination.reset();
        self.cursor = 0;
        self.prune_stale();
        self.load_status = LoadStatus::Failed(error.to_string());
    }

    // ---- search --------------------------------------------------------

    /// Opens the search box, pre-filled with the committed term.
    pub fn enter_search(&mut self) {
        self.search_draft.clone_from(&self.search_term);
        self.input_mode = InputMode::Search;
    }

    /// Closes the search box without applying the draft.
    pub fn leave_search(&mut self) {
        self.search_draft.clone_from(&self.search_term);
        self.input_mode = InputMode::Normal;
    }

    /// Applies the draft query: re-filters the dataset and returns to page 1.
    pub fn commit_search(&mut self) {
        self.search_term = self.search_draft.to_lowercase();
        tracing::debug!(term = %self.search_term, "search committed");

        self.refilter();
        if self.input_mode.is_search() {
            self.input_mode = InputMode::Normal;
        }
    }

    fn refilter(&mut self) {
        self.displayed = search::filter_records(&self.dataset, &self.search_term);
        self.pagination.reset();
        self.cursor = 0;
        self.prune_stale();
    }

    // ---- pagination & cursor ------------------------------------------

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.displayed.len())
    }

    /// Records on the current page.
    #[must_use]
    pub fn page_records(&self) -> &[Record] {
        &self.displayed[self.pagination.page_range(self.displayed.len())]
    }

    /// Record under the row cursor.
    #[must_use]
    pub fn cursor_record(&self) -> Option<&Record> {
        self.page_records().get(self.cursor)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page, self.displayed.len());
        self.after_page_change();
    }

    pub fn first_page(&mut self) {
        self.pagination.first();
        self.after_page_change();
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous(self.displayed.len());
        self.after_page_change();
    }

    pub fn next_page(&mut self) {
        self.pagination.next(self.displayed.len());
        self.after_page_change();
    }

    pub fn last_page(&mut self) {
        self.pagination.last(self.displayed.len());
        self.after_page_change();
    }

    /// Selection is per page: ids from other pages are dropped.
    fn after_page_change(&mut self) {
        self.cursor = 0;
        let on_page: BTreeSet<RecordId> = self.page_records().iter().map(|r| r.id.clone()).collect();
        self.selection.retain(|id| on_page.contains(id));
        tracing::debug!(page = self.current_page(), total = self.total_pages(), "page changed");
    }

    /// Moves the row cursor down, wrapping to the top of the page.
    pub fn move_cursor_down(&mut self) {
        let rows = self.page_records().len();
        if rows == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % rows;
    }

    /// Moves the row cursor up, wrapping to the bottom of the page.
    pub fn move_cursor_up(&mut self) {
        let rows = self.page_records().len();
        if rows == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { rows - 1 } else { self.cursor - 1 };
    }

    // ---- selection -----------------------------------------------------

    /// Flips the checkbox of the cursor row.
    pub fn toggle_cursor_selection(&mut self) {
        let Some(id) = self.cursor_record().map(|r| r.id.clone()) else {
            return;
        };
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Selects every row on the page, or clears them if all are selected.
    pub fn toggle_page_selection(&mut self) {
        let ids: Vec<RecordId> = self.page_records().iter().map(|r| r.id.clone()).collect();
        if ids.is_empty() {
            return;
        }

        if ids.iter().all(|id| self.selection.contains(id)) {
            for id in &ids {
                self.selection.remove(id);
            }
        } else {
            self.selection.extend(ids);
        }
    }

    // ---- editing -------------------------------------------------------

    /// Puts the cursor row into edit mode. Returns `false` if there is no row.
    pub fn begin_edit(&mut self) -> bool {
        let Some(record) = self.cursor_record() else {
            return false;
        };
        let edit = RowEdit::begin(record);
        tracing::debug!(record_id = %edit.id, "editing row");
        self.input_mode = InputMode::Editing(edit);
        true
    }

    /// Mutable access to the in-progress edit.
    pub fn editing_mut(&mut self) -> Option<&mut RowEdit> {
        match &mut self.input_mode {
            InputMode::Editing(edit) => Some(edit),
            _ => None,
        }
    }

    /// Writes the draft to the edited record and leaves edit mode.
    ///
    /// Returns the id of the saved record, or `None` when nothing was being
    /// edited.
    pub fn save_edit(&mut self) -> Option<RecordId> {
        let InputMode::Editing(edit) = std::mem::take(&mut self.input_mode) else {
            return None;
        };

        for record in self
            .displayed
            .iter_mut()
            .chain(self.dataset.iter_mut())
            .filter(|record| record.id == edit.id)
        {
            edit.apply_to(record);
        }

        tracing::debug!(record_id = %edit.id, "row saved");
        Some(edit.id)
    }

    /// Leaves edit mode, discarding the draft.
    pub fn cancel_edit(&mut self) {
        if let InputMode::Editing(edit) = std::mem::take(&mut self.input_mode) {
            tracing::debug!(record_id = %edit.id, "edit cancelled");
        }
    }

    // ---- deleting ------------------------------------------------------

    /// Asks for confirmation before deleting the cursor row.
    pub fn request_delete_row(&mut self) -> bool {
        let Some(id) = self.cursor_record().map(|r| r.id.clone()) else {
            return false;
        };
        self.input_mode = InputMode::Confirm(DeleteTarget::Row(id));
        true
    }

    /// Asks for confirmation before deleting the selected rows.
    ///
    /// Does nothing when no row is selected.
    pub fn request_delete_selected(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.input_mode = InputMode::Confirm(DeleteTarget::Selected);
        true
    }

    /// Performs the pending delete. Returns the number of rows removed.
    pub fn confirm_delete(&mut self) -> usize {
        match std::mem::take(&mut self.input_mode) {
            InputMode::Confirm(DeleteTarget::Row(id)) => usize::from(self.delete_row(&id)),
            InputMode::Confirm(DeleteTarget::Selected) => self.delete_selected(),
            other => {
                self.input_mode = other;
                0
            }
        }
    }

    /// Drops the pending delete without changing any rows.
    pub fn decline_delete(&mut self) {
        if matches!(self.input_mode, InputMode::Confirm(_)) {
            self.input_mode = InputMode::Normal;
        }
    }

    /// Removes the record with `id`. Returns `false` if it was not displayed.
    pub fn delete_row(&mut self, id: &RecordId) -> bool {
        let before = self.displayed.len();
        self.displayed.retain(|record| &record.id != id);
        if self.displayed.len() == before {
            return false;
        }
        self.dataset.retain(|record| &record.id != id);

        tracing::debug!(record_id = %id, "row deleted");
        self.after_removal();
        true
    }

    /// Removes every selected record. Returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let selection = std::mem::take(&mut self.selection);
        let before = self.displayed.len();

        self.displayed.retain(|record| !selection.contains(&record.id));
        self.dataset.retain(|record| !selection.contains(&record.id));

        let removed = before - self.displayed.len();
        tracing::debug!(removed, "selected rows deleted");
        self.after_removal();
        removed
    }

    fn after_removal(&mut self) {
        self.pagination.clamp(self.displayed.len());
        let rows = self.page_records().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
        self.prune_stale();
    }

    /// Drops selection entries, the edit and a pending row delete that refer
    /// to records no longer displayed.
    fn prune_stale(&mut self) {
        let displayed: BTreeSet<&RecordId> = self.displayed.iter().map(|r| &r.id).collect();

        self.selection.retain(|id| displayed.contains(id));

        let stale_mode = match &self.input_mode {
            InputMode::Editing(edit) => !displayed.contains(&edit.id),
            InputMode::Confirm(DeleteTarget::Row(id)) => !displayed.contains(id),
            _ => false,
        };
        if stale_mode {
            tracing::debug!("dropping edit or confirmation for a removed row");
            self.input_mode = InputMode::Normal;
        }
    }

    // ---- view model ----------------------------------------------------

    /// Computes the renderable view of the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let rows: Vec<RowItem> = self
            .page_records()
            .iter()
            .enumerate()
            .map(|(index, record)| self.compute_row(index, record))
            .collect();

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            empty_state: if rows.is_empty() { Some(self.compute_empty_state()) } else { None },
            rows,
            confirm: self.compute_confirm(),
            status: self.compute_status(),
            footer: self.compute_footer(),
        }
    }

    fn compute_row(&self, index: usize, record: &Record) -> RowItem {
        let edit = self.input_mode.editing().filter(|edit| edit.id == record.id);

        let cell = |text: &str, field: Option<EditField>| {
            let is_focused = edit.is_some_and(|e| Some(e.field) == field);
            let highlight_ranges = if edit.is_none() {
                search::match_ranges(text, &self.search_term)
            } else {
                Vec::new()
            };
            CellItem {
                text: text.to_string(),
                highlight_ranges,
                is_focused,
            }
        };

        let (name, email, role) = edit.map_or(
            (record.name.as_str(), record.email.as_str(), record.role.as_str()),
            |e| (e.draft.name.as_str(), e.draft.email.as_str(), e.draft.role.as_str()),
        );

        RowItem {
            id: cell(record.id.as_str(), None),
            name: cell(name, Some(EditField::Name)),
            email: cell(email, Some(EditField::Email)),
            role: cell(role, Some(EditField::Role)),
            is_cursor: index == self.cursor,
            is_checked: self.selection.contains(&record.id),
            is_editing: edit.is_some(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.search_term.is_empty() {
            format!(" Members ({}) ", self.displayed.len())
        } else {
            format!(
                " Members ({} of {}) matching \"{}\" ",
                self.displayed.len(),
                self.dataset.len(),
                self.search_term
            )
        };
        let loaded = match &self.load_status {
            LoadStatus::Loaded { count, at } => Some(format!("{count} loaded at {} UTC", at.format("%H:%M"))),
            _ => None,
        };
        HeaderInfo { title, loaded }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        self.input_mode.is_search().then(|| SearchBarInfo {
            query: self.search_draft.clone(),
        })
    }

    fn compute_empty_state(&self) -> EmptyState {
        let (message, subtitle, is_error) = match &self.load_status {
            LoadStatus::Idle => (
                "Waiting for permissions".to_string(),
                "Grant web access to load the member list".to_string(),
                false,
            ),
            LoadStatus::Loading => (
                "Loading members...".to_string(),
                self.source_url.clone(),
                false,
            ),
            LoadStatus::Failed(reason) => ("Could not load members".to_string(), reason.clone(), true),
            LoadStatus::Loaded { .. } if !self.search_term.is_empty() => (
                format!("No members match \"{}\"", self.search_term),
                "Press / and submit an empty search to show everyone".to_string(),
                false,
            ),
            LoadStatus::Loaded { .. } => (
                "No members".to_string(),
                "The member list is empty".to_string(),
                false,
            ),
        };

        EmptyState {
            message,
            subtitle,
            is_error,
        }
    }

    fn compute_confirm(&self) -> Option<ConfirmInfo> {
        let InputMode::Confirm(target) = &self.input_mode else {
            return None;
        };

        let prompt = match target {
            DeleteTarget::Row(id) => {
                let name = self
                    .displayed
                    .iter()
                    .find(|r| &r.id == id)
                    .map_or("", |r| r.name.as_str());
                format!("Are you sure you want to delete row {id} ({name})? [y/n]")
            }
            DeleteTarget::Selected => format!(
                "Are you sure you want to delete {} selected row(s)? [y/n]",
                self.selection.len()
            ),
        };
        Some(ConfirmInfo { prompt })
    }

    fn compute_status(&self) -> StatusInfo {
        let total_pages = self.total_pages();
        StatusInfo {
            selection: format!(
                "{} of {} row(s) selected",
                self.selection.len(),
                self.page_records().len()
            ),
            page_label: format!("Page {} of {}", self.current_page(), total_pages),
            pager: pagination::pager_items(self.current_page(), total_pages),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match &self.input_mode {
            InputMode::Normal => {
                "j/k: row  h/l: page  g/G: first/last  space: select  a: select page  e: edit  d: delete  D: delete selected  /: search  q: quit"
            }
            InputMode::Search => "Type to edit query  Enter: search  ESC: cancel",
            InputMode::Editing(_) => "Tab: next field  space/←/→: toggle role  Enter: save  ESC: cancel",
            InputMode::Confirm(_) => "y/Enter: delete  n/ESC: keep",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn member(n: usize) -> Record {
        Record::new(
            n.to_string(),
            format!("Member {n}"),
            format!("member{n}@example.com"),
            if n % 5 == 0 { Role::Admin } else { Role::Member },
        )
    }

    fn loaded(count: usize) -> AppState {
        let mut state = AppState::new(Theme::default(), "http://localhost/members.json");
        state.load_succeeded((1..=count).map(member).collect());
        state
    }

    fn two_rows() -> AppState {
        let mut state = AppState::new(Theme::default(), "http://localhost/members.json");
        state.load_succeeded(vec![
            Record::new("1", "Alice", "alice@example.com", Role::Admin),
            Record::new("2", "Bob", "bob@example.com", Role::Member),
        ]);
        state
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn search(state: &mut AppState, term: &str) {
        state.enter_search();
        state.search_draft = term.to_string();
        state.commit_search();
    }

    #[test]
    fn load_shows_everything_on_page_one() {
        let state = loaded(25);
        assert_eq!(state.displayed, state.dataset);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 3);
        assert!(matches!(state.load_status, LoadStatus::Loaded { count: 25, .. }));
    }

    #[test]
    fn failed_load_leaves_dataset_empty_and_reports() {
        let mut state = AppState::new(Theme::default(), "http://localhost/members.json");
        state.begin_loading();
        state.load_failed(&MemberdeskError::Http { status: 503 });

        assert!(state.dataset.is_empty());
        assert!(state.displayed.is_empty());
        assert_eq!(state.load_status, LoadStatus::Failed("member source returned HTTP 503".to_string()));

        let vm = state.compute_viewmodel();
        let empty = vm.empty_state.unwrap();
        assert!(empty.is_error);
        assert_eq!(empty.subtitle, "member source returned HTTP 503");
    }

    #[test]
    fn search_for_bob_scenario() {
        let mut state = two_rows();
        search(&mut state, "bob");

        assert_eq!(ids(&state.displayed), vec!["2"]);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 1);
        assert!(state.input_mode.is_normal());
    }

    #[test]
    fn search_resets_page_and_recomputes_total() {
        let mut state = loaded(25);
        state.last_page();
        assert_eq!(state.current_page(), 3);

        search(&mut state, "member1");
        // member1, member10..member19
        assert_eq!(state.displayed.len(), 11);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 2);

        search(&mut state, "");
        assert_eq!(state.displayed.len(), 25);
    }

    #[test]
    fn leaving_search_keeps_committed_results() {
        let mut state = two_rows();
        search(&mut state, "alice");

        state.enter_search();
        assert_eq!(state.search_draft, "alice");
        state.search_draft = "bob".to_string();
        state.leave_search();

        assert_eq!(ids(&state.displayed), vec!["1"]);
        assert_eq!(state.search_draft, "alice");
    }

    #[test]
    fn page_three_of_25_has_five_rows() {
        let mut state = loaded(25);
        state.go_to_page(3);
        assert_eq!(ids(state.page_records()), vec!["21", "22", "23", "24", "25"]);

        state.go_to_page(7);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn cursor_wraps_within_page() {
        let mut state = loaded(12);
        state.next_page();
        assert_eq!(state.page_records().len(), 2);

        state.move_cursor_up();
        assert_eq!(state.cursor_record().map(|r| r.id.as_str()), Some("12"));
        state.move_cursor_down();
        assert_eq!(state.cursor_record().map(|r| r.id.as_str()), Some("11"));
    }

    #[test]
    fn delete_row_scenario() {
        let mut state = two_rows();
        state.move_cursor_down();
        assert!(state.request_delete_row());
        assert_eq!(state.input_mode, InputMode::Confirm(DeleteTarget::Row(RecordId::from("2"))));

        assert_eq!(state.confirm_delete(), 1);
        assert_eq!(ids(&state.displayed), vec!["1"]);
        assert!(state.input_mode.is_normal());
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let mut state = two_rows();
        let before = state.displayed.clone();

        state.request_delete_row();
        state.decline_delete();

        assert_eq!(state.displayed, before);
        assert!(state.input_mode.is_normal());
    }

    #[test]
    fn delete_row_preserves_order_of_others() {
        let mut state = loaded(6);
        assert!(state.delete_row(&RecordId::from("3")));
        assert_eq!(ids(&state.displayed), vec!["1", "2", "4", "5", "6"]);
        assert!(!state.delete_row(&RecordId::from("3")));
    }

    #[test]
    fn bulk_delete_removes_exactly_the_selection() {
        let mut state = loaded(25);
        state.go_to_page(2);
        state.toggle_cursor_selection();
        state.move_cursor_down();
        state.move_cursor_down();
        state.toggle_cursor_selection();
        state.move_cursor_down();
        state.toggle_cursor_selection();
        assert_eq!(state.selection.len(), 3);

        assert!(state.request_delete_selected());
        assert_eq!(state.confirm_delete(), 3);

        assert_eq!(
            ids(state.page_records()),
            vec!["12", "15", "16", "17", "18", "19", "20", "21", "22", "23"]
        );
        assert_eq!(state.displayed.len(), 22);
        assert!(state.selection.is_empty());
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn selection_does_not_follow_page_changes() {
        let mut state = loaded(25);
        state.toggle_page_selection();
        assert_eq!(state.compute_viewmodel().status.selection, "10 of 10 row(s) selected");

        state.last_page();
        assert!(state.selection.is_empty());
        assert_eq!(state.compute_viewmodel().status.selection, "0 of 5 row(s) selected");
        assert!(!state.request_delete_selected());

        state.toggle_cursor_selection();
        assert!(state.request_delete_selected());
        assert_eq!(state.confirm_delete(), 1);
        assert_eq!(state.displayed.len(), 24);
        assert_eq!(ids(&state.displayed[..3]), vec!["1", "2", "3"]);
    }

    #[test]
    fn staying_on_the_same_page_keeps_selection() {
        let mut state = loaded(25);
        state.toggle_cursor_selection();
        state.first_page();
        state.previous_page();
        assert_eq!(state.selection.len(), 1);
    }

    #[test]
    fn bulk_delete_without_selection_does_not_prompt() {
        let mut state = two_rows();
        assert!(!state.request_delete_selected());
        assert!(state.input_mode.is_normal());
    }

    #[test]
    fn page_selection_toggles_off_when_all_selected() {
        let mut state = loaded(15);
        state.toggle_page_selection();
        assert_eq!(state.selection.len(), 10);
        state.toggle_page_selection();
        assert!(state.selection.is_empty());
    }

    #[test]
    fn deletes_are_not_resurrected_by_search() {
        let mut state = two_rows();
        state.delete_row(&RecordId::from("2"));
        search(&mut state, "");
        assert_eq!(ids(&state.displayed), vec!["1"]);
    }

    #[test]
    fn save_replaces_editable_fields_and_is_searchable() {
        let mut state = two_rows();
        assert!(state.begin_edit());
        {
            let edit = state.editing_mut().unwrap();
            edit.draft.name = "Alicia".to_string();
            edit.draft.email = "alicia@example.com".to_string();
            edit.draft.role = Role::Member;
        }

        assert_eq!(state.save_edit(), Some(RecordId::from("1")));
        let expected = Record::new("1", "Alicia", "alicia@example.com", Role::Member);
        assert_eq!(state.displayed[0], expected);
        assert_eq!(state.dataset[0], expected);
        assert_eq!(state.displayed[1], Record::new("2", "Bob", "bob@example.com", Role::Member));

        search(&mut state, "alicia");
        assert_eq!(ids(&state.displayed), vec!["1"]);
    }

    #[test]
    fn cancel_leaves_rows_identical() {
        let mut state = two_rows();
        let before = state.displayed.clone();

        state.begin_edit();
        state.editing_mut().unwrap().draft.name = "Mallory".to_string();
        state.cancel_edit();

        assert_eq!(state.displayed, before);
        assert!(state.input_mode.is_normal());
        assert_eq!(state.save_edit(), None);
    }

    #[test]
    fn selection_is_pruned_when_search_hides_rows() {
        let mut state = two_rows();
        state.toggle_page_selection();
        search(&mut state, "bob");
        assert_eq!(state.selection.iter().map(RecordId::as_str).collect::<Vec<_>>(), vec!["2"]);
    }

    #[test]
    fn viewmodel_marks_cursor_checked_and_matches() {
        let mut state = two_rows();
        search(&mut state, "b");
        state.toggle_cursor_selection();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.rows.len(), 1);
        let row = &vm.rows[0];
        assert!(row.is_cursor);
        assert!(row.is_checked);
        assert_eq!(row.name.highlight_ranges, vec![(0, 1), (2, 3)]);
        assert_eq!(vm.status.selection, "1 of 1 row(s) selected");
        assert_eq!(vm.status.page_label, "Page 1 of 1");
        assert!(vm.header.title.contains("matching \"b\""));
    }

    #[test]
    fn viewmodel_shows_draft_for_edited_row() {
        let mut state = two_rows();
        state.begin_edit();
        state.editing_mut().unwrap().draft.name = "Al".to_string();

        let vm = state.compute_viewmodel();
        assert!(vm.rows[0].is_editing);
        assert_eq!(vm.rows[0].name.text, "Al");
        assert!(vm.rows[0].name.is_focused);
        assert!(!vm.rows[1].is_editing);
        assert_eq!(vm.rows[1].name.text, "Bob");
    }

    #[test]
    fn header_shows_load_time() {
        use chrono::TimeZone;

        let mut state = two_rows();
        assert_eq!(
            state.compute_viewmodel().header.loaded.map(|l| l.ends_with(" UTC")),
            Some(true)
        );

        state.load_status = LoadStatus::Loaded {
            count: 2,
            at: Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap(),
        };
        assert_eq!(
            state.compute_viewmodel().header.loaded.as_deref(),
            Some("2 loaded at 07:05 UTC")
        );

        state.load_failed(&MemberdeskError::PermissionDenied);
        assert_eq!(state.compute_viewmodel().header.loaded, None);
    }

    #[test]
    fn confirm_prompt_names_the_row() {
        let mut state = two_rows();
        state.request_delete_row();
        let vm = state.compute_viewmodel();
        assert_eq!(
            vm.confirm.unwrap().prompt,
            "Are you sure you want to delete row 1 (Alice)? [y/n]"
        );
    }
}
