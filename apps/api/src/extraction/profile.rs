//! Feature Extractor: turns raw résumé text into an `ExtractedProfile`.
//!
//! Pure and deterministic: output depends only on the text, the fallbacks and
//! the injected vocabulary.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extraction::vocabulary::SkillVocabulary;

/// `local-part@domain.tld`: local part of ASCII letters, digits, `.`, `_`, `-`;
/// domain of letters, digits, `.`, `-`; top-level segment of 2–6 letters.
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}";

/// Optional `+` and 1–3 digit country code, optionally parenthesised area
/// code, then 3-3-4 digits with optional space or hyphen separators.
const PHONE_PATTERN: &str = r"(\+[0-9]{1,3}[-\s]?)?\(?[0-9]{3}\)?[-\s]?[0-9]{3}[-\s]?[0-9]{4}";

/// Structured signals pulled out of one uploaded document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
}

/// User-supplied values used when the document yields nothing.
/// Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct ProfileFallback {
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub struct FeatureExtractor {
    vocabulary: SkillVocabulary,
    email: Regex,
    phone: Regex,
}

impl FeatureExtractor {
    pub fn new(vocabulary: SkillVocabulary) -> Result<Self, regex::Error> {
        Ok(FeatureExtractor {
            vocabulary,
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn extract(&self, text: &str, fallback: &ProfileFallback) -> ExtractedProfile {
        ExtractedProfile {
            email: first_match(&self.email, text, fallback.email.as_deref()),
            phone: first_match(&self.phone, text, fallback.phone.as_deref()),
            skills: self.vocabulary.detect(text),
        }
    }
}

fn first_match(pattern: &Regex, text: &str, fallback: Option<&str>) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str())
        .or_else(|| fallback.map(str::trim).filter(|f| !f.is_empty()))
        .unwrap_or_default()
        .to_string()
}
