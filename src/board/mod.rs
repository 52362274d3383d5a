// ABOUTME: Job board module: fetch and filter pipeline plus dropdown state
// ABOUTME: Re-exports the board state machine and filter types

pub mod dropdown;
pub mod filters;
pub mod state;

pub use dropdown::FilterDropdown;
pub use filters::{filter_jobs, FilterCategory, Filters};
pub use state::{ActiveTab, FetchOutcome, FetchTicket, JobBoard};
