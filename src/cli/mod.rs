pub mod session;
pub mod contact_commands;

use std::io::{self, BufRead, Write};

pub use session::Session;

const MENU: &str = "
Phone Book Menu
Choose an option (1-8):
1. Open file: Load contacts from a JSON file.
2. Save file: Save the current contacts to a JSON file.
3. Show all contacts: Display all saved contacts.
4. Add contact: Add a new contact with name, phone, and comment.
5. Find contact: Search for a contact by ID, name, phone, or comment.
6. Change contact: Update the details of an existing contact by ID.
7. Delete contact: Remove a contact from the phone book by ID.
8. Exit: Exit the program.
";

/// Runs the menu loop until the exit choice or EOF. Store errors are
/// rendered and swallowed inside the command handlers; an io error on the
/// session's own reader/writer is fatal and propagates to the caller.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    loop {
        session.show(MENU)?;
        let choice = match session.prompt("Choose an option (1-8): ")? {
            Some(c) => c,
            None => break,
        };

        match choice.trim() {
            "1" => contact_commands::open_file(session)?,
            "2" => contact_commands::save_file(session)?,
            "3" => contact_commands::list(session)?,
            "4" => contact_commands::add(session)?,
            "5" => contact_commands::find(session)?,
            "6" => contact_commands::update(session)?,
            "7" => contact_commands::delete(session)?,
            "8" => {
                session.show("Exiting the program.")?;
                break;
            }
            _ => session.show("Invalid choice. Please try again.")?,
        }
    }
    Ok(())
}
