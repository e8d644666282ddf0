//! Phonebook state and its transitions
//!
//! `PhonebookState` is a plain owned value. Every change goes through
//! [`reducer::reduce`], which returns a new state and never touches the
//! old one, so a rejected action leaves the caller's state as it was.

pub mod events;
pub mod reducer;

use crate::contact::{sample_contacts, Contact, ContactId};
use crate::error::StoreError;
use std::collections::HashSet;

pub use events::PhonebookAction;
pub use reducer::reduce;

/// Unsaved values of the add-contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub number: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.number.is_empty()
    }
}

/// Contact ids are unique within `contacts`; only `reduce` and the
/// checked constructors build the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhonebookState {
    contacts: Vec<Contact>,
    pub draft: Draft,
    pub filter: String,
}

impl PhonebookState {
    /// State holding `contacts`, rejected if any id appears twice
    pub fn new(contacts: Vec<Contact>) -> Result<Self, StoreError> {
        let repeated = {
            let mut seen = HashSet::with_capacity(contacts.len());
            contacts
                .iter()
                .find(|c| !seen.insert(&c.id))
                .map(|c| c.id.clone())
        };
        if let Some(id) = repeated {
            return Err(StoreError::DuplicateId { id });
        }
        Ok(Self {
            contacts,
            ..Default::default()
        })
    }

    /// State seeded with the sample contacts
    pub fn with_samples() -> Self {
        Self {
            contacts: sample_contacts(),
            ..Default::default()
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.has_name(name))
    }

    pub fn find_by_id(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    /// Contacts whose name contains the filter text, ignoring case, in list order
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        filter_contacts(&self.contacts, &self.filter)
    }
}

pub fn filter_contacts<'a>(contacts: &'a [Contact], filter: &str) -> Vec<&'a Contact> {
    let needle = filter.to_lowercase();
    contacts
        .iter()
        .filter(|c| c.name_contains(&needle))
        .collect()
}
