use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque contact identifier. Generated ids are v4 UUIDs; the sample
/// contacts keep their short `id-N` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(String);

impl ContactId {
    /// Generate a fresh id that is never handed out twice
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ContactId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }

    /// Case-insensitive name comparison used for duplicate detection
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring match used by the filter
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.number)
    }
}

/// The contacts every fresh phonebook starts with
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("id-1", "Rosie Simpson", "459-12-56"),
        Contact::new("id-2", "Hermione Kline", "443-89-12"),
        Contact::new("id-3", "Eden Clements", "645-17-79"),
        Contact::new("id-4", "Annie Copeland", "227-91-26"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = ContactId::generate();
        let b = ContactId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_has_name_ignores_case() {
        let contact = Contact::new("id-1", "Rosie Simpson", "459-12-56");
        assert!(contact.has_name("rosie simpson"));
        assert!(contact.has_name("ROSIE SIMPSON"));
        assert!(!contact.has_name("Rosie"));
    }

    #[test]
    fn test_sample_contacts_have_unique_ids() {
        let samples = sample_contacts();
        assert_eq!(samples.len(), 4);
        for (i, a) in samples.iter().enumerate() {
            for b in samples.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
                assert!(!a.has_name(&b.name));
            }
        }
    }

    #[test]
    fn test_display_joins_name_and_number() {
        let contact = Contact::new("id-9", "Dan Brown", "123-45-67");
        assert_eq!(contact.to_string(), "Dan Brown 123-45-67");
    }
}
