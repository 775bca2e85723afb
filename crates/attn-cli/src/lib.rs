//! Shared pieces of the Attendance Studio CLI.
//!
//! The binary lives in `main.rs`; the logging setup is exposed as a
//! library so embedding applications can reuse it.

pub mod logging;
