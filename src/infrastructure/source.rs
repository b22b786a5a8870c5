//! Member source: where the dataset comes from and how its payload is decoded.
//!
//! The plugin issues exactly one `GET` for the member list at startup. The
//! host hands back a status code and the raw body; [`parse_members`] turns
//! that pair into records or a [`MemberdeskError`].

use crate::domain::{MemberdeskError, Record, Result};

/// Default location of the member list.
pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Context key attached to the web request so the response can be recognised.
pub const REQUEST_CONTEXT_KEY: &str = "memberdesk_request";

/// Context value for the startup member fetch.
pub const MEMBERS_REQUEST: &str = "members";

/// Decodes a member-list response.
///
/// # Errors
///
/// - [`MemberdeskError::Http`] when `status` is outside `200..300`
/// - [`MemberdeskError::Payload`] when the body is not a JSON array of records
pub fn parse_members(status: u16, body: &[u8]) -> Result<Vec<Record>> {
    if !(200..300).contains(&status) {
        return Err(MemberdeskError::Http { status });
    }

    let records: Vec<Record> = serde_json::from_slice(body)?;
    tracing::debug!(record_count = records.len(), "decoded member payload");
    Ok(records)
}
