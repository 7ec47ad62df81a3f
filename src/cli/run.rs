use crate::{
    cli::{
        command::{
            Cli, Commands, MENU, MenuOption, PHONE_TYPE_PROMPT, parse_command_from_menu,
        },
        terminal::Terminal,
    },
    domain::{
        book::AddressBook,
        contact::{Person, PhoneNumber, PhoneType},
    },
    errors::AppError,
    store::{self, ContactStore, storage_port::export_contacts},
};
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    EndOfInput,
}

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let storage = store::parse_storage_type(cli.storage, &cli.db_path)?;
    debug!(
        medium = storage.get_medium(),
        path = %cli.db_path,
        "storage selected"
    );

    match cli.command {
        Some(Commands::Export { format, des }) => {
            let book = storage.load()?;
            let (path, total) = export_contacts(&book, format, des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
        None => {
            let mut terminal = Terminal::stdio();
            run_session(storage.as_ref(), &mut terminal)
        }
    }
}

/// Runs the menu loop until the user quits or input ends.
///
/// Only loading at startup and saving on quit can fail the session; every
/// operation error is printed and the loop carries on.
pub fn run_session<R: BufRead, W: Write>(
    storage: &dyn ContactStore,
    terminal: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    let mut book = storage.load()?;

    terminal.println("Welcome to Address Book!")?;

    loop {
        terminal.print(MENU)?;

        match read_next_option(&mut book, terminal)? {
            Flow::Continue => continue,
            Flow::Quit => {
                storage.save(&book)?;
                info!(people = book.len(), "address book saved");

                terminal.println("Goodbye!")?;
                return Ok(());
            }
            Flow::EndOfInput => {
                warn!(
                    people = book.len(),
                    "input closed before quit, changes since load were not saved"
                );
                return Ok(());
            }
        }
    }
}

pub fn read_next_option<R: BufRead, W: Write>(
    book: &mut AddressBook,
    terminal: &mut Terminal<R, W>,
) -> Result<Flow, AppError> {
    let Some(input) = terminal.read_line()? else {
        return Ok(Flow::EndOfInput);
    };

    match parse_command_from_menu(&input) {
        Ok(option) => handle_next_option(book, terminal, option),
        Err(e) => {
            match &e {
                AppError::ParseCommand(input) => debug!(%input, "menu selection is not a number"),
                AppError::UnknownOption(option) => debug!(option, "menu selection out of range"),
                _ => {}
            }
            terminal.println(&e.to_string())?;
            Ok(Flow::Continue)
        }
    }
}

pub fn handle_next_option<R: BufRead, W: Write>(
    book: &mut AddressBook,
    terminal: &mut Terminal<R, W>,
    option: MenuOption,
) -> Result<Flow, AppError> {
    let result = match option {
        MenuOption::CreatePerson => create_person(book, terminal),
        MenuOption::ShowPerson => show_person(book, terminal),
        MenuOption::UpdatePerson => update_person(book, terminal),
        MenuOption::DeletePerson => delete_person(book, terminal),
        MenuOption::ListAllPeople => list_all_people(book, terminal),
        MenuOption::Quit => return Ok(Flow::Quit),
    };

    if let Err(e) = result {
        debug!(?option, error = %e, "operation failed");
        terminal.println(&e.to_string())?;
    }
    Ok(Flow::Continue)
}

pub fn create_person<R: BufRead, W: Write>(
    book: &mut AddressBook,
    terminal: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    let name = terminal.get_input("Name: ")?;
    let email = terminal.get_input("E-mail: ")?;
    let number = terminal.get_input("Phone #: ")?;

    let input = terminal.get_input(&format!("{PHONE_TYPE_PROMPT}: "))?;
    let kind = PhoneType::parse(&input, "can't create person")?;

    if !kind.is_recognized() {
        warn!(code = kind.code(), "storing unrecognized phone type");
    }

    let id = book.append(Person::new(name, email, PhoneNumber::new(number, kind)));
    info!(id, "person created");

    terminal.println(&format!("Contact added with ID #{id}"))?;
    Ok(())
}

pub fn show_person<R: BufRead, W: Write>(
    book: &AddressBook,
    terminal: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    let id = search_by_id(book, terminal)?;
    let person = book.get(id)?;

    print_person(terminal, id, person)
}

pub fn update_person<R: BufRead, W: Write>(
    book: &mut AddressBook,
    terminal: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    let id = search_by_id(book, terminal)?;
    let current = book.get(id)?.clone();

    let Some(phone) = current.primary_phone() else {
        return Err(AppError::Validation(format!(
            "person with contact ID {id} has no phone number to update"
        )));
    };

    // Collect every answer first so a bad phone type leaves the person untouched.
    let name = non_blank(terminal.get_input(&format!("Name ({}): ", current.name))?);
    let email = non_blank(terminal.get_input(&format!("E-mail ({}): ", current.email))?);
    let number = non_blank(terminal.get_input(&format!("Phone # ({}): ", phone.number))?);
    let kind = match non_blank(
        terminal.get_input(&format!("{PHONE_TYPE_PROMPT} ({}): ", phone.kind))?,
    ) {
        Some(input) => Some(PhoneType::parse(&input, "can't update person")?),
        None => None,
    };

    book.update(id, |person| {
        if let Some(name) = name {
            person.name = name;
        }
        if let Some(email) = email {
            person.email = email;
        }
        if let Some(phone) = person.primary_phone_mut() {
            if let Some(number) = number {
                phone.number = number;
            }
            if let Some(kind) = kind {
                phone.kind = kind;
            }
        }
    })?;

    debug!(id, "person updated");
    Ok(())
}

pub fn delete_person<R: BufRead, W: Write>(
    book: &mut AddressBook,
    terminal: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    let input = terminal.get_input("Contact ID #: ")?;
    let id = input.trim().parse::<i64>().map_err(|e| {
        AppError::parse_int(format!("couldn't delete person with contact ID {input}"), e)
    })?;

    let id = resolve_contact_id(book, id, &input)?;
    let removed = book.delete(id)?;
    info!(id, name = %removed.name, "person deleted");

    terminal.println(&format!("{id} has been deleted"))?;
    Ok(())
}

pub fn list_all_people<R: BufRead, W: Write>(
    book: &AddressBook,
    terminal: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    terminal.println("Contact Listing:")?;

    if book.is_empty() {
        terminal.println("No contact yet")?;
        return Ok(());
    }

    for (id, person) in book.list() {
        print_person(terminal, id, person)?;
    }
    Ok(())
}

fn search_by_id<R: BufRead, W: Write>(
    book: &AddressBook,
    terminal: &mut Terminal<R, W>,
) -> Result<usize, AppError> {
    let input = terminal.get_input("Contact ID #: ")?;
    let id = input
        .trim()
        .parse::<i64>()
        .map_err(|e| AppError::parse_int(format!("unknown contact ID {input}"), e))?;

    resolve_contact_id(book, id, &input)
}

/// Maps a typed contact ID onto a position, rejecting negatives and ids past the end.
fn resolve_contact_id(book: &AddressBook, id: i64, input: &str) -> Result<usize, AppError> {
    usize::try_from(id)
        .ok()
        .filter(|&id| id < book.len())
        .ok_or_else(|| AppError::NotFound(input.trim().to_string()))
}

fn print_person<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    id: usize,
    person: &Person,
) -> Result<(), AppError> {
    terminal.println(&format!("{id} - {person}"))
}

fn non_blank(input: String) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input)
    }
}
