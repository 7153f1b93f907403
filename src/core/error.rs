use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Skill not found: {0}")]
    SkillNotFound(String),

    #[error("Ability not found: {0}")]
    AbilityNotFound(String),

    #[error("Character not found: {0:?}")]
    CharacterNotFound(crate::core::types::CharacterId),

    #[error("Version conflict on character {id:?}: expected {expected}, found {found}")]
    VersionConflict {
        id: crate::core::types::CharacterId,
        expected: u64,
        found: u64,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RulesError>;
