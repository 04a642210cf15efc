use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NomenclatureError {
    #[error("margin out of range: {0} (expected 0..=99)")]
    MarginOutOfRange(u32),
    #[error("dose out of range: {0} (expected 0..=90000)")]
    DoseOutOfRange(u32),
    #[error("instance index out of range: {0} (expected 1..=9)")]
    InstanceOutOfRange(u32),
    #[error("not a whole number: {0:?}")]
    InvalidNumber(String),
    #[error("unknown laterality option: {0:?}")]
    UnknownLaterality(String),
}

pub type Result<T> = std::result::Result<T, NomenclatureError>;
