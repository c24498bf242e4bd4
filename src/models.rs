//! Frontend Models
//!
//! Data shown by the board widget that does not come from the server.

/// A dismissible error message rendered above the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
}
