// Résumé ingestion and retrieval.
// Upload flow: file-type gate → text extraction → object storage → profile extraction → store.

pub mod handlers;
pub mod ingest;
