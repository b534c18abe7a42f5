/// Skills recognised when no `SKILL_VOCABULARY` override is configured.
pub const DEFAULT_SKILLS: &[&str] = &[
    "JavaScript",
    "React",
    "Node.js",
    "MongoDB",
    "Express",
    "HTML",
    "CSS",
    "Python",
    "Java",
];

/// Fixed, ordered set of known skill keywords.
///
/// Built once from configuration and handed to the extractor. Membership is
/// case-insensitive; the first spelling of a keyword wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    keywords: Vec<String>,
}

impl SkillVocabulary {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.into().trim().to_string();
            let folded = fold(&keyword);
            if keyword.is_empty() || unique.iter().any(|k| fold(k) == folded) {
                continue;
            }
            unique.push(keyword);
        }
        SkillVocabulary { keywords: unique }
    }

    /// Parses a comma-separated keyword list, e.g. `"Go, Rust, SQL"`.
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns every keyword that occurs anywhere in `text`, in vocabulary order.
    ///
    /// Plain case-insensitive substring containment: no stemming and no word
    /// boundaries, so "Java" is also found inside "JavaScript" and synonyms
    /// outside the vocabulary are never found.
    pub fn detect(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let haystack = fold(text);
        self.keywords
            .iter()
            .filter(|k| haystack.contains(&fold(k)))
            .cloned()
            .collect()
    }
}

/// The single case-folding rule for keyword identity and matching.
fn fold(text: &str) -> String {
    text.to_lowercase()
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}
