//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler only mutates [`AppState`](crate::app::AppState); anything
//! that has to reach the Zellij host is returned as an [`Action`] and executed
//! by `main.rs` in order.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,

    /// Issues the one-shot GET for the member list.
    ///
    /// The host answers asynchronously with a web request result that is fed
    /// back into the handler as [`Event::MembersFetched`](crate::app::Event::MembersFetched).
    FetchMembers {
        /// Address of the member source.
        url: String,
    },
}
