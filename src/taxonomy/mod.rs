pub mod keywords;

use regex::Regex;

pub use keywords::{ENTRY_LEVEL_KEYWORDS, ROLE_KEYWORDS};

/// Technology terms recognized in free-text job descriptions, in match order.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "python",
    "java",
    "javascript",
    // Web and runtimes
    "react",
    "node",
    "sql",
    // Infrastructure
    "aws",
    "docker",
    "kubernetes",
    "git",
    "linux",
    "c++",
    "c#",
    "typescript",
    "angular",
    // Data and ML
    "machine learning",
    "data science",
    "tensorflow",
    "pytorch",
    "pandas",
    // Backend
    "django",
    "flask",
    "mongodb",
    "postgresql",
    "redis",
    "rest api",
];

pub const MAX_EXTRACTED_SKILLS: usize = 10;

pub struct SkillExtractor {
    patterns: Vec<(String, Regex)>,
}

impl SkillExtractor {
    pub fn new() -> Self {
        Self::with_vocabulary(SKILL_VOCABULARY)
    }

    pub fn with_vocabulary(terms: &[&str]) -> Self {
        let patterns = terms
            .iter()
            .filter_map(|term| {
                let lower = term.to_lowercase();
                // `\b` misbehaves next to symbols like `+` and `#`, so the
                // boundary is spelled out as "no word character adjacent".
                let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(&lower));
                match Regex::new(&pattern) {
                    Ok(re) => Some((title_case(&lower), re)),
                    Err(e) => {
                        tracing::warn!("Skipping skill term {:?}: {}", term, e);
                        None
                    }
                }
            })
            .collect();

        Self { patterns }
    }

    /// Skills mentioned in `text`, title-cased, in vocabulary order, at most
    /// [`MAX_EXTRACTED_SKILLS`].
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(&lower))
            .map(|(name, _)| name.clone())
            .take(MAX_EXTRACTED_SKILLS)
            .collect()
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("c#"), "C#");
        assert_eq!(title_case("rest api"), "Rest Api");
    }

    #[test]
    fn test_extract_whole_words_in_vocabulary_order() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("We use Docker, PYTHON and <b>React</b> on AWS.");
        assert_eq!(skills, vec!["Python", "React", "Aws", "Docker"]);
    }

    #[test]
    fn test_extract_rejects_partial_words() {
        let extractor = SkillExtractor::new();
        // "javascript" must not also count as "java"; "github" is not "git".
        let skills = extractor.extract("Strong javascript skills, github profile");
        assert_eq!(skills, vec!["Javascript"]);
    }

    #[test]
    fn test_extract_symbol_terms() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("Experience with C++ or C# required.");
        assert_eq!(skills, vec!["C++", "C#"]);
    }

    #[test]
    fn test_extract_multi_word_terms() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("Machine learning and a REST API background");
        assert_eq!(skills, vec!["Machine Learning", "Rest Api"]);
    }

    #[test]
    fn test_extract_is_bounded_and_idempotent() {
        let extractor = SkillExtractor::new();
        let text = SKILL_VOCABULARY.join(" ");
        let first = extractor.extract(&text);
        let second = extractor.extract(&text);
        assert_eq!(first.len(), MAX_EXTRACTED_SKILLS);
        assert_eq!(first, second);
        assert_eq!(first[0], "Python");
        assert_eq!(first[9], "Git");
    }

    #[test]
    fn test_extract_empty_text() {
        assert!(SkillExtractor::new().extract("").is_empty());
    }
}
