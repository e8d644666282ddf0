use crate::contact::{Contact, ContactId};
use crate::error::StoreError;
use crate::state::{reduce, Draft, PhonebookAction, PhonebookState};
use tracing::{debug, info, warn};

/// Owner of the phonebook state, the API consumed by the TUI and the
/// classic prompt.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    state: PhonebookState,
}

impl ContactStore {
    /// Store holding `contacts`. Fails if two of them share an id.
    pub fn new(contacts: Vec<Contact>) -> Result<Self, StoreError> {
        Ok(Self {
            state: PhonebookState::new(contacts)?,
        })
    }

    pub fn with_samples() -> Self {
        Self {
            state: PhonebookState::with_samples(),
        }
    }

    pub fn state(&self) -> &PhonebookState {
        &self.state
    }

    pub fn contacts(&self) -> &[Contact] {
        self.state.contacts()
    }

    pub fn len(&self) -> usize {
        self.state.contacts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.contacts().is_empty()
    }

    pub fn draft(&self) -> &Draft {
        &self.state.draft
    }

    pub fn filter(&self) -> &str {
        &self.state.filter
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.state.find_by_id(id)
    }

    /// Apply an action, replacing the state only when it succeeds
    pub fn dispatch(&mut self, action: PhonebookAction) -> Result<(), StoreError> {
        self.state = reduce(&self.state, action)?;
        Ok(())
    }

    /// Add a validated contact and return a copy of it.
    ///
    /// Draft fields are cleared on success regardless of whether they were
    /// the source of `name` and `number`.
    pub fn add_contact(&mut self, name: &str, number: &str) -> Result<Contact, StoreError> {
        let contact = Contact::new(ContactId::generate(), name, number);
        let action = PhonebookAction::AddContact {
            id: contact.id.clone(),
            name: contact.name.clone(),
            number: contact.number.clone(),
        };
        match self.dispatch(action) {
            Ok(()) => {
                info!(target: "store", "Added contact '{}' ({} total)", name, self.len());
                Ok(contact)
            }
            Err(e) => {
                warn!(target: "store", "Rejected contact '{}': {}", name, e);
                Err(e)
            }
        }
    }

    /// Submit the current draft fields as a new contact
    pub fn submit_draft(&mut self) -> Result<Contact, StoreError> {
        let Draft { name, number } = self.state.draft.clone();
        self.add_contact(&name, &number)
    }

    /// Remove a contact by id. Unknown ids are ignored.
    pub fn delete_contact(&mut self, id: &ContactId) -> Option<Contact> {
        let removed = self.state.find_by_id(id).cloned();
        match &removed {
            Some(contact) => {
                info!(target: "store", "Deleted contact '{}' [{}]", contact.name, id);
                self.apply_infallible(PhonebookAction::DeleteContact(id.clone()));
            }
            None => debug!(target: "store", "Delete of unknown id {} ignored", id),
        }
        removed
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.apply_infallible(PhonebookAction::SetFilter(text.into()));
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.apply_infallible(PhonebookAction::SetDraftName(name.into()));
    }

    pub fn set_draft_number(&mut self, number: impl Into<String>) {
        self.apply_infallible(PhonebookAction::SetDraftNumber(number.into()));
    }

    pub fn visible_contacts(&self) -> Vec<&Contact> {
        self.state.visible_contacts()
    }

    fn apply_infallible(&mut self, action: PhonebookAction) {
        if let Err(e) = self.dispatch(action) {
            warn!(target: "store", "Unexpected failure applying action: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;

    #[test]
    fn test_add_returns_new_contact() {
        let mut store = ContactStore::default();
        let added = store.add_contact("Dan Brown", "123-45-67").unwrap();
        assert_eq!(added.name, "Dan Brown");
        assert_eq!(added.number, "123-45-67");
        assert_eq!(store.get(&added.id), Some(&added));
    }

    #[test]
    fn test_failed_add_keeps_draft() {
        let mut store = ContactStore::with_samples();
        store.set_draft_name("X");
        store.set_draft_number("123-45-67");
        let err = store.submit_draft().unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref e) if e.field == Field::Name));
        assert_eq!(store.draft().name, "X");
        assert_eq!(store.draft().number, "123-45-67");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_submit_draft_clears_fields() {
        let mut store = ContactStore::with_samples();
        store.set_draft_name("Dan Brown");
        store.set_draft_number("123-45-67");
        store.set_filter("an");
        store.submit_draft().unwrap();
        assert!(store.draft().is_empty());
        assert_eq!(store.filter(), "an");
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_dispatch_rejects_reused_id() {
        let mut store = ContactStore::with_samples();
        let err = store
            .dispatch(PhonebookAction::AddContact {
                id: "id-2".into(),
                name: "Dan Brown".to_string(),
                number: "123-45-67".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId { id: "id-2".into() });
        assert_eq!(store.len(), 4);

        assert_eq!(store.delete_contact(&"id-2".into()).unwrap().name, "Hermione Kline");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_new_rejects_repeated_ids() {
        let contacts = vec![
            Contact::new("id-1", "Rosie Simpson", "459-12-56"),
            Contact::new("id-1", "Dan Brown", "123-45-67"),
        ];
        assert!(matches!(
            ContactStore::new(contacts),
            Err(StoreError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_delete_returns_removed() {
        let mut store = ContactStore::with_samples();
        let removed = store.delete_contact(&"id-3".into()).unwrap();
        assert_eq!(removed.name, "Eden Clements");
        assert!(store.delete_contact(&"id-3".into()).is_none());
        assert_eq!(store.len(), 3);
    }
}
