use thiserror::Error;

use crate::RowId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("row id {0} appears more than once")]
    DuplicateRowId(RowId),
    #[error("option values must not be blank")]
    BlankOption,
    #[error("option '{0}' appears more than once")]
    DuplicateOption(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
