//! Live table sessions.
//!
//! Each browser tab owns one session holding its page cache and selection.
//! Sessions live in memory only and are dropped after a period of inactivity.

mod manager;

pub use manager::SessionManager;
