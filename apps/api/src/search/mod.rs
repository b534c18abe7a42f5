// Search over stored documents.
// Implements: free-text relevance ranking and structured job filters.
// Both run in-process over the collection snapshot returned by the store.

pub mod filter;
pub mod queries;
pub mod ranker;

pub use filter::JobFilterParams;
pub use queries::{filter_jobs, search_jobs, search_resumes};
