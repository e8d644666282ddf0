//! Actions that drive phonebook state transitions

use crate::contact::ContactId;

/// Every change the phonebook state can undergo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhonebookAction {
    /// Draft name field edited
    SetDraftName(String),

    /// Draft number field edited
    SetDraftNumber(String),

    /// Filter text edited
    SetFilter(String),

    /// Add a contact with an id chosen up front so the transition stays pure
    AddContact {
        id: ContactId,
        name: String,
        number: String,
    },

    /// Remove the contact with this id, if any
    DeleteContact(ContactId),
}

impl PhonebookAction {
    /// Build an add action with a freshly generated id
    pub fn add(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self::AddContact {
            id: ContactId::generate(),
            name: name.into(),
            number: number.into(),
        }
    }

    /// Short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetDraftName(_) => "set_draft_name",
            Self::SetDraftNumber(_) => "set_draft_number",
            Self::SetFilter(_) => "set_filter",
            Self::AddContact { .. } => "add_contact",
            Self::DeleteContact(_) => "delete_contact",
        }
    }
}
