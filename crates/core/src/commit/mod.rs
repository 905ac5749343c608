//! Weekend-matrix bulk commit
//!
//! A spreadsheet-style import produces every event for one talent and year.
//! The batch is forwarded in one authenticated call to the remote
//! reconciliation function, which owns the merge/replace semantics.

pub mod ports;
pub mod service;

pub use service::WeekendMatrixCommitService;
