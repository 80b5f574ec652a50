use strum::{AsRefStr, Display, EnumString};

use crate::error::NerError;

/// Entity classes the skill extractor cares about. Anything else a
/// recognizer emits is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum EntityLabel {
    Organization,
    Product,
    CreativeWork,
    Person,
    Location,
    Other,
}

impl EntityLabel {
    /// Labels whose surface text is worth treating as a skill candidate.
    pub fn is_skill_candidate(self) -> bool {
        matches!(
            self,
            EntityLabel::Organization | EntityLabel::Product | EntityLabel::CreativeWork
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Optional named-entity-recognition capability.
///
/// The extractor receives this as `Option<&dyn EntityRecognizer>`: absent
/// capability means the entity scan is skipped silently (degraded but
/// functional), while a present-but-failing recognizer is a real error that
/// excludes the affected job from a batch.
///
/// `name()`/`version()` identify the backing model in logs.
pub trait EntityRecognizer: Send + Sync {
    fn name(&self) -> &'static str;

    fn version(&self) -> &str;

    /// Run recognition over original-case text.
    fn extract(&self, text: &str) -> Result<Vec<Entity>, NerError>;
}
