use crate::error::{PhonebookError, PhonebookResult};
use crate::model::{Contact, ContactId};
use crate::validation::replacement;

/// In-memory contact catalog. Insertion order is the listing order and is
/// what save/load preserve.
#[derive(Debug, Default)]
pub struct PhoneBook {
    contacts: Vec<Contact>,
    // Highest id ever assigned or loaded. Deleting the current maximum must
    // not make its id available again.
    last_id: u32,
}

impl PhoneBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book around an already-validated set of contacts, as loaded
    /// from a file. Id assignment resumes above the highest id present.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        let last_id = contacts.iter().map(|c| c.id.value()).max().unwrap_or(0);
        Self { contacts, last_id }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends a new contact under a fresh id, starting from 1 in an empty
    /// book. Duplicate names, phones, or comments are allowed; fields may
    /// even be empty.
    pub fn add(&mut self, name: &str, phone: &str, comment: &str) {
        let current_max = self.contacts.iter().map(|c| c.id.value()).max().unwrap_or(0);
        let id = self.last_id.max(current_max) + 1;
        self.last_id = id;
        self.contacts.push(Contact {
            id: ContactId::new(id),
            name: name.to_string(),
            phone: phone.to_string(),
            comment: comment.to_string(),
        });
    }

    /// Exact-match search: every contact whose id (as text), name, phone, or
    /// comment equals `query`, in original relative order. Zero matches is an
    /// error rather than an empty list, so callers have to take a branch.
    pub fn find(&self, query: &str) -> PhonebookResult<Vec<Contact>> {
        let results: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| {
                query == c.id.to_string()
                    || query == c.name
                    || query == c.phone
                    || query == c.comment
            })
            .cloned()
            .collect();

        if results.is_empty() {
            return Err(PhonebookError::NoMatches);
        }
        Ok(results)
    }

    /// Replaces the fields for which a non-empty value was supplied; `None`
    /// and `""` keep the existing value.
    ///
    /// Because the empty string means "keep", a field can never be blanked
    /// out through this operation. Whitespace-only values are stored as-is.
    pub fn update(
        &mut self,
        id: ContactId,
        name: Option<&str>,
        phone: Option<&str>,
        comment: Option<&str>,
    ) -> PhonebookResult<()> {
        let contact = self.contact_mut(id)?;
        if let Some(name) = replacement(name) {
            contact.name = name.to_string();
        }
        if let Some(phone) = replacement(phone) {
            contact.phone = phone.to_string();
        }
        if let Some(comment) = replacement(comment) {
            contact.comment = comment.to_string();
        }
        Ok(())
    }

    /// Removes the contact with the given id. The id is never handed out
    /// again afterwards.
    pub fn delete(&mut self, id: ContactId) -> PhonebookResult<()> {
        let position = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(PhonebookError::ContactNotFound { id })?;
        self.contacts.remove(position);
        Ok(())
    }

    fn contact_mut(&mut self, id: ContactId) -> PhonebookResult<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(PhonebookError::ContactNotFound { id })
    }
}
