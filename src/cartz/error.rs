use crate::model::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartzError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Name cannot be blank")]
    BlankName,

    #[error("Invalid quantity {0:?}: expected a whole number of 0 or more")]
    InvalidQuantity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CartzError {
    /// True for errors a user can fix by retyping their input. A UI
    /// should re-prompt on these instead of bailing out; not-found means
    /// the target row is gone, which retyping cannot fix.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CartzError::BlankName | CartzError::InvalidQuantity(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CartzError>;
