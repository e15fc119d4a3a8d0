use std::io;
use std::path::PathBuf;

use phonebook::cli::{self, Session};
use phonebook::store::PhoneBook;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut file_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                file_path = args.next().map(PathBuf::from);
                if file_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Phone Book");
                println!();
                println!("Usage: phonebook [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Contacts file path (default: contacts.json)");
                println!("  -h, --help          Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let file_path = file_path.unwrap_or_else(|| PathBuf::from("contacts.json"));

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut session = Session::new(PhoneBook::new(), file_path, stdin, stdout);
    if let Err(err) = cli::run(&mut session) {
        eprintln!("Terminal error: {}", err);
        std::process::exit(1);
    }
}
