use crate::contact::Contact;
use crate::error::StoreError;
use crate::state::{Draft, PhonebookAction, PhonebookState};
use crate::validation::validate_contact;
use tracing::debug;

/// Apply an action to a state, producing the next state.
///
/// Add is the only action that can fail; on failure no new state is built.
pub fn reduce(state: &PhonebookState, action: PhonebookAction) -> Result<PhonebookState, StoreError> {
    debug!(target: "store", "reduce {}", action.kind());

    let next = match action {
        PhonebookAction::SetDraftName(name) => PhonebookState {
            draft: Draft {
                name,
                ..state.draft.clone()
            },
            ..state.clone()
        },
        PhonebookAction::SetDraftNumber(number) => PhonebookState {
            draft: Draft {
                number,
                ..state.draft.clone()
            },
            ..state.clone()
        },
        PhonebookAction::SetFilter(filter) => PhonebookState {
            filter,
            ..state.clone()
        },
        PhonebookAction::AddContact { id, name, number } => {
            validate_contact(&name, &number)?;

            if state.find_by_id(&id).is_some() {
                return Err(StoreError::DuplicateId { id });
            }

            if let Some(existing) = state.find_by_name(&name) {
                return Err(StoreError::DuplicateName {
                    existing: existing.name.clone(),
                });
            }

            let mut contacts = state.contacts.clone();
            contacts.push(Contact { id, name, number });
            PhonebookState {
                contacts,
                draft: Draft::default(),
                filter: state.filter.clone(),
            }
        }
        PhonebookAction::DeleteContact(id) => PhonebookState {
            contacts: state
                .contacts
                .iter()
                .filter(|c| c.id != id)
                .cloned()
                .collect(),
            ..state.clone()
        },
    };

    Ok(next)
}
