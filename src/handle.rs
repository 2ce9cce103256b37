//! Demo-directory username validation.
//!
//! The demo build ships a fixed directory of profiles. Validation is a
//! field-level concern: errors are returned as values for the input form to
//! display, and the input stays editable.

/// Usernames present in the demo directory.
pub const DEMO_HANDLES: [&str; 5] = ["alice", "bob", "charlie", "diana", "eve"];

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum HandleError {
    #[error("username cannot be empty")]
    Empty,

    #[error("username must be one of: {}", DEMO_HANDLES.join(", "))]
    Unknown(String),
}

/// Trim, lowercase, and check the input against the demo directory.
pub fn normalize_handle(input: &str) -> Result<String, HandleError> {
    let handle = input.trim().to_ascii_lowercase();
    if handle.is_empty() {
        return Err(HandleError::Empty);
    }
    if !DEMO_HANDLES.contains(&handle.as_str()) {
        return Err(HandleError::Unknown(handle));
    }
    Ok(handle)
}
