// Candidate matching.
// Implements: job-to-résumé match scoring on top of the relevance ranker.

pub mod handlers;
pub mod scorer;

pub use scorer::{match_resumes_to_job, MatchResult};
