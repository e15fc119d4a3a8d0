use std::io::{self, BufRead, Write};

use crate::cli::session::Session;
use crate::error::PhonebookError;
use crate::model::ContactId;
use crate::store::file;

pub fn open_file<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    match file::load(&session.file_path) {
        Ok(book) => {
            session.book = book;
            session.show("File loaded successfully.")
        }
        Err(err) => session.show_error(&err),
    }
}

pub fn save_file<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    match file::save(&session.book, &session.file_path) {
        Ok(()) => session.show("File saved successfully."),
        Err(err) => session.show_error(&err),
    }
}

pub fn list<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    if session.book.is_empty() {
        return session.show("No contacts to display.");
    }
    let contacts = session.book.contacts().to_vec();
    session.show_contacts(&contacts)
}

pub fn add<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    let (name, phone, comment) = match contact_details(session)? {
        Some(details) => details,
        None => return Ok(()),
    };
    session.book.add(&name, &phone, &comment);
    session.show("Contact added successfully.")
}

pub fn find<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    let query = match session.prompt("Enter ID, name, phone, or comment to search: ")? {
        Some(q) => q,
        None => return Ok(()),
    };
    match session.book.find(&query) {
        Ok(results) => session.show_contacts(&results),
        Err(err) => session.show_error(&err),
    }
}

pub fn update<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    let id = match read_id(session, "Enter ID of the contact to change: ")? {
        Some(id) => id,
        None => return Ok(()),
    };
    let (name, phone, comment) = match contact_details(session)? {
        Some(details) => details,
        None => return Ok(()),
    };
    match session
        .book
        .update(id, Some(name.as_str()), Some(phone.as_str()), Some(comment.as_str()))
    {
        Ok(()) => session.show("Contact updated successfully."),
        Err(err) => session.show_error(&err),
    }
}

pub fn delete<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    let id = match read_id(session, "Enter ID of the contact to delete: ")? {
        Some(id) => id,
        None => return Ok(()),
    };
    match session.book.delete(id) {
        Ok(()) => session.show("Contact deleted successfully."),
        Err(err) => session.show_error(&err),
    }
}

/// Prompts for the three free-text fields. `None` on EOF mid-way.
fn contact_details<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> io::Result<Option<(String, String, String)>> {
    let name = match session.prompt("Enter name: ")? {
        Some(s) => s,
        None => return Ok(None),
    };
    let phone = match session.prompt("Enter phone: ")? {
        Some(s) => s,
        None => return Ok(None),
    };
    let comment = match session.prompt("Enter comment: ")? {
        Some(s) => s,
        None => return Ok(None),
    };
    Ok(Some((name, phone, comment)))
}

/// Prompts for a numeric id. A value that does not parse renders the
/// invalid-input message and yields `None`, leaving the store untouched.
fn read_id<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    prompt: &str,
) -> io::Result<Option<ContactId>> {
    let raw = match session.prompt(prompt)? {
        Some(s) => s,
        None => return Ok(None),
    };
    match raw.trim().parse::<ContactId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            session.show_error(&PhonebookError::InvalidInput)?;
            Ok(None)
        }
    }
}
