//! Pure analyses over an in-memory issue list
//!
//! Every function here is total and deterministic: time-sensitive ones take
//! `now` explicitly, and none of them perform I/O.

pub mod assignee;
pub mod priority;
pub mod similarity;
pub mod staleness;

pub use assignee::{match_assignees, resolve_assignee, unique_assignees, AssigneeMatch};
pub use priority::{rank_by_due_date, PriorityRow};
pub use similarity::{find_duplicates, similarity, SimilarityPair, DUPLICATE_THRESHOLD};
pub use staleness::{is_stale, stale_issues, StaleIssue, STALE_WINDOW_MS};
