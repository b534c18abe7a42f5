// Résumé feature extraction.
// Implements: skill vocabulary, contact/skill extraction, document-to-text collaborator.

pub mod profile;
pub mod text;
pub mod vocabulary;

pub use profile::{ExtractedProfile, FeatureExtractor, ProfileFallback};
pub use text::{PdfTextExtractor, TextExtractor};
pub use vocabulary::SkillVocabulary;
