pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::confirm::Confirmation;
use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Filter,
    AddContact,
    DeleteContact,
    ListContacts,
    Exit,
}

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out)?;
    writeln!(out, "1. Filter contacts")?;
    writeln!(out, "2. Add contact")?;
    writeln!(out, "3. Delete contact")?;
    writeln!(out, "4. List contacts")?;
    writeln!(out, "5. Exit")?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

pub fn parse_menu_command(action: &str) -> Result<MenuCommand, AppError> {
    match action.trim() {
        "1" => Ok(MenuCommand::Filter),
        "2" => Ok(MenuCommand::AddContact),
        "3" => Ok(MenuCommand::DeleteContact),
        "4" => Ok(MenuCommand::ListContacts),
        "5" => Ok(MenuCommand::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}

pub fn display_contact(index: usize, contact: &Contact) -> String {
    format!("{index:>3}. {:<25} {:<15} [{}]", contact.name, contact.number, contact.id)
}

// INPUT FUNCTIONS
/// One trimmed line, or `None` once input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn prompt<R: BufRead, W: Write>(
    label: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>, AppError> {
    write!(out, "{label}: ")?;
    out.flush()?;
    get_input(input)
}

/// Shows `question` and reads a y/n answer. Running out of input declines.
pub fn confirm_action<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Confirmation, AppError> {
    writeln!(out, "\n{question} (y/n)")?;
    write!(out, "> ")?;
    out.flush()?;

    Ok(get_input(input)?
        .map(|answer| Confirmation::from_answer(&answer))
        .unwrap_or(Confirmation::Declined))
}
