use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{PhonebookError, PhonebookResult};
use crate::model::Contact;
use crate::store::PhoneBook;

/// Reads a whole book from `path`. This is full-replace: the caller swaps
/// the returned book in; there is no merge.
///
/// The file must be a JSON array of objects carrying exactly the four
/// record fields. Invalid JSON, a missing/extra/mistyped field, a zero id,
/// or a duplicate id all count as a malformed file.
pub fn load(path: &Path) -> PhonebookResult<PhoneBook> {
    if !path.exists() {
        return Err(PhonebookError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let data = fs::read_to_string(path).map_err(|source| PhonebookError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;

    let contacts: Vec<Contact> =
        serde_json::from_str(&data).map_err(|err| malformed(path, err.to_string()))?;
    check_ids(path, &contacts)?;

    Ok(PhoneBook::from_contacts(contacts))
}

/// Writes the whole book to `path` as an indented JSON array, in current
/// order, overwriting any previous content. No atomic-rename protection: a
/// failure mid-write can leave a partial file behind.
pub fn save(book: &PhoneBook, path: &Path) -> PhonebookResult<()> {
    let json =
        serde_json::to_string_pretty(book.contacts()).map_err(|err| PhonebookError::SaveFailed {
            path: path.display().to_string(),
            source: err.into(),
        })?;

    fs::write(path, json).map_err(|source| PhonebookError::SaveFailed {
        path: path.display().to_string(),
        source,
    })
}

fn check_ids(path: &Path, contacts: &[Contact]) -> PhonebookResult<()> {
    let mut seen = HashSet::new();
    for contact in contacts {
        if contact.id.value() == 0 {
            return Err(malformed(path, "contact ids must be positive".to_string()));
        }
        if !seen.insert(contact.id) {
            return Err(malformed(path, format!("duplicate contact id {}", contact.id)));
        }
    }
    Ok(())
}

fn malformed(path: &Path, reason: String) -> PhonebookError {
    PhonebookError::MalformedFile {
        path: path.display().to_string(),
        reason,
    }
}
