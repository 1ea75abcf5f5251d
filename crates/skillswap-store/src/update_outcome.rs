use serde::Serialize;

/// What `DirectoryStore::update_user` did with the user list.
///
/// The session pointer is overwritten in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// A record with the same id was replaced in place
    Replaced,
    /// No record had that id; only the session pointer changed
    SessionOnly,
}

