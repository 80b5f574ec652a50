pub mod config;
pub mod context;
pub mod embedding;
pub mod error;
pub mod logging;
pub mod matching;
pub mod ner;
pub mod normalize;
pub mod report;
pub mod skill_extractor;
pub mod stopwords;

use serde::{Deserialize, Serialize};

use crate::error::NerError;
use crate::ner::EntityRecognizer;

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub text: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ResumeRecord {
    /// Free text plus declared skills, in the shape the signals consume.
    pub fn matching_text(&self) -> String {
        format!("{} {}", self.text, self.skills.join(" "))
    }

    /// Supplement the declared skill list with everything the resume-path
    /// extractor finds in the free text (vocabulary, patterns, entities,
    /// heuristic tokens). Used by ingestion callers that only have raw text.
    pub fn with_extracted_skills(
        mut self,
        recognizer: Option<&dyn EntityRecognizer>,
    ) -> Result<Self, NerError> {
        let extracted = skill_extractor::extract_from_resume(&self.text, recognizer)?;
        let known = skill_extractor::normalize_skill_set(&self.skills);
        for skill in extracted {
            if !known.contains(&skill) {
                self.skills.push(skill);
            }
        }
        Ok(self)
    }
}

impl JobRecord {
    /// Title, description and declared skills concatenated for scoring.
    pub fn matching_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.skills.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_text_appends_declared_skills() {
        let resume = ResumeRecord {
            text: "Backend engineer".into(),
            skills: vec!["rust".into(), "aws".into()],
            ..Default::default()
        };
        assert_eq!(resume.matching_text(), "Backend engineer rust aws");

        let job = JobRecord {
            id: "j1".into(),
            title: "Platform Engineer".into(),
            description: "Own the deploy pipeline".into(),
            skills: vec!["docker".into()],
        };
        assert_eq!(
            job.matching_text(),
            "Platform Engineer Own the deploy pipeline docker"
        );
    }

    #[test]
    fn with_extracted_skills_keeps_explicit_entries_first() {
        let resume = ResumeRecord {
            text: "Shipped services in Python and Django on AWS".into(),
            skills: vec!["python".into()],
            ..Default::default()
        };

        let enriched = resume.with_extracted_skills(None).unwrap();

        assert_eq!(enriched.skills[0], "python");
        assert!(enriched.skills.iter().any(|s| s == "django"));
        assert!(enriched.skills.iter().any(|s| s == "aws"));
        // no duplicate of the explicit entry
        assert_eq!(enriched.skills.iter().filter(|s| *s == "python").count(), 1);
    }
}
