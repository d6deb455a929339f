//! Hallucination indicator pattern library.
//!
//! A fixed, named table of textual cues heuristically associated with
//! unsupported or overconfident model claims. Pure data; the validator
//! consumes it. Patterns are case-insensitive whole-word matches.

use std::sync::OnceLock;

use regex::Regex;

/// One named category of indicator patterns.
pub struct PatternCategory {
    pub name: &'static str,
    /// Literal phrases, matched case-insensitively on word boundaries.
    pub phrases: &'static [&'static str],
}

/// The fixed category table, in detection order.
pub const CATEGORIES: &[PatternCategory] = &[
    PatternCategory {
        name: "absolute_claims",
        phrases: &["always", "never", "impossible"],
    },
    PatternCategory {
        name: "invented_facts",
        phrases: &["I invented", "I created", "I developed"],
    },
    PatternCategory {
        name: "future_claims",
        phrases: &["will definitely", "will certainly"],
    },
    PatternCategory {
        name: "unqualified_statements",
        phrases: &["proven", "undeniable"],
    },
];

struct CompiledCategory {
    name: &'static str,
    patterns: Vec<Regex>,
}

/// Compiled pattern library, built once per process.
pub struct PatternLibrary {
    categories: Vec<CompiledCategory>,
}

impl PatternLibrary {
    fn compile() -> Self {
        let categories = CATEGORIES
            .iter()
            .map(|category| CompiledCategory {
                name: category.name,
                patterns: category
                    .phrases
                    .iter()
                    .map(|phrase| {
                        Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))
                            .expect("static pattern must compile")
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// The process-wide library instance.
    pub fn global() -> &'static PatternLibrary {
        static LIBRARY: OnceLock<PatternLibrary> = OnceLock::new();
        LIBRARY.get_or_init(PatternLibrary::compile)
    }

    /// The category name of every individual pattern that matches `text`,
    /// in table order. A pattern counts once no matter how often it occurs;
    /// distinct patterns in the same category each count separately.
    pub fn matching_categories(&self, text: &str) -> Vec<&'static str> {
        let mut matched = Vec::new();
        for category in &self.categories {
            for pattern in &category.patterns {
                if pattern.is_match(text) {
                    matched.push(category.name);
                }
            }
        }
        matched
    }
}
