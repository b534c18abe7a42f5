// Job postings: thin CRUD plus search entry points.

pub mod handlers;
