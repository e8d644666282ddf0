use phonebook::contact::Contact;
use phonebook::state::{reduce, PhonebookAction, PhonebookState};
use phonebook::{ContactStore, Field, StoreError, ValidationKind};

fn names(contacts: &[&Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.name.clone()).collect()
}

#[test]
fn test_worked_example() {
    let mut store = ContactStore::new(vec![Contact::new("id-1", "Rosie Simpson", "459-12-56")]).unwrap();

    let dan = store.add_contact("Dan Brown", "123-45-67").unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.contacts()[1], dan);

    let err = store.add_contact("rosie simpson", "000-00-00").unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(store.len(), 2);

    assert_eq!(store.delete_contact(&dan.id), Some(dan));
    assert_eq!(store.len(), 1);
    assert_eq!(store.contacts()[0].name, "Rosie Simpson");

    store.set_filter("ros");
    assert_eq!(names(&store.visible_contacts()), vec!["Rosie Simpson"]);
}

#[test]
fn test_valid_add_grows_by_one_with_input_fields() {
    let mut store = ContactStore::with_samples();
    let before = store.contacts().to_vec();

    let added = store.add_contact("Jacob Mercer", "+380671234").unwrap();

    assert_eq!(store.len(), before.len() + 1);
    assert_eq!(&store.contacts()[..before.len()], &before[..]);
    let last = store.contacts().last().unwrap();
    assert_eq!(last, &added);
    assert_eq!(last.name, "Jacob Mercer");
    assert_eq!(last.number, "+380671234");
}

#[test]
fn test_duplicate_in_any_case_is_rejected() {
    for name in ["Annie Copeland", "annie copeland", "ANNIE COPELAND", "aNNiE CoPeLaNd"] {
        let mut store = ContactStore::with_samples();
        let before = store.contacts().to_vec();
        let err = store.add_contact(name, "111-22-33").unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateName {
                existing: "Annie Copeland".to_string()
            }
        );
        assert_eq!(store.contacts(), &before[..]);
    }
}

#[test]
fn test_length_violations_leave_list_unchanged() {
    let cases = [
        ("A", "123-45-67", Field::Name, ValidationKind::TooShort { min: 2 }),
        ("Dan Brown", "12345", Field::Number, ValidationKind::TooShort { min: 6 }),
        (
            "Dan Brown",
            "123-456-7890",
            Field::Number,
            ValidationKind::TooLong { max: 10 },
        ),
        ("", "123-45-67", Field::Name, ValidationKind::Required),
        ("Dan Brown", "", Field::Number, ValidationKind::Required),
    ];

    for (name, number, field, kind) in cases {
        let mut store = ContactStore::with_samples();
        let before = store.contacts().to_vec();
        match store.add_contact(name, number) {
            Err(StoreError::Validation(e)) => {
                assert_eq!(e.field, field, "{name:?} / {number:?}");
                assert_eq!(e.kind, kind, "{name:?} / {number:?}");
            }
            other => panic!("expected validation error for {name:?} / {number:?}, got {other:?}"),
        }
        assert_eq!(store.contacts(), &before[..]);
    }
}

#[test]
fn test_delete_preserves_order_and_ignores_unknown() {
    let mut store = ContactStore::with_samples();
    store.delete_contact(&"id-1".into());
    assert_eq!(
        names(&store.visible_contacts()),
        vec!["Hermione Kline", "Eden Clements", "Annie Copeland"]
    );

    let before = store.contacts().to_vec();
    assert!(store.delete_contact(&"id-1".into()).is_none());
    assert!(store.delete_contact(&"does-not-exist".into()).is_none());
    assert_eq!(store.contacts(), &before[..]);
}

#[test]
fn test_filter_matches_manual_subset() {
    let mut store = ContactStore::with_samples();
    store.add_contact("Анна Каренина", "123-45-67").unwrap();
    store.add_contact("José Müller", "765-43-21").unwrap();

    for filter in ["", "e", "E", "an", "AN", "müller", "МÜ", "анна", "xyz", " "] {
        store.set_filter(filter);
        let needle = filter.to_lowercase();
        let expected: Vec<String> = store
            .contacts()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names(&store.visible_contacts()), expected, "filter {filter:?}");
    }

    store.set_filter("");
    assert_eq!(store.visible_contacts().len(), store.len());
}

#[test]
fn test_filter_does_not_mutate_list() {
    let mut store = ContactStore::with_samples();
    let before = store.contacts().to_vec();
    store.set_filter("zzz");
    assert!(store.visible_contacts().is_empty());
    assert_eq!(store.contacts(), &before[..]);
}

#[test]
fn test_generated_ids_are_unique() {
    let mut store = ContactStore::default();
    let a = store.add_contact("Dan Brown", "123-45-67").unwrap();
    store.delete_contact(&a.id);
    let b = store.add_contact("Dan Brown", "123-45-67").unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_reducer_leaves_input_state_untouched_on_error() {
    let state = PhonebookState::with_samples();
    let snapshot = state.clone();
    assert!(reduce(&state, PhonebookAction::add("Eden Clements", "123-45-67")).is_err());
    assert!(reduce(&state, PhonebookAction::add("E", "123-45-67")).is_err());
    assert_eq!(state, snapshot);
}

#[test]
fn test_ids_stay_unique_through_any_entry_point() {
    let mut store = ContactStore::with_samples();
    for id in ["id-1", "id-2", "id-3", "id-4"] {
        let result = store.dispatch(PhonebookAction::AddContact {
            id: id.into(),
            name: "Dan Brown".to_string(),
            number: "123-45-67".to_string(),
        });
        assert_eq!(result, Err(StoreError::DuplicateId { id: id.into() }));
    }
    store.add_contact("Dan Brown", "123-45-67").unwrap();

    let mut ids: Vec<_> = store.contacts().iter().map(|c| c.id.clone()).collect();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids.dedup();
    assert_eq!(ids.len(), store.len());

    // Removing one id removes exactly one contact
    let before = store.len();
    assert!(store.delete_contact(&"id-2".into()).is_some());
    assert_eq!(store.len(), before - 1);
}
