use crate::contact::ContactId;
use crate::validation::ValidationError;
use thiserror::Error;

/// Recoverable failures of store operations. The store is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{existing} is already in contacts.")]
    DuplicateName { existing: String },

    #[error("Contact id {id} is already in use")]
    DuplicateId { id: ContactId },
}

impl StoreError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateName { .. })
    }
}
