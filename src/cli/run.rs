use super::{
    MenuCommand, confirm_action, display_contact, get_input, parse_menu_command, prompt,
    show_menu,
};
use crate::prelude::{
    AppError, Confirmation, ContactId, ContactManager, Resolution, StorageMediums, Submission,
    command::{Cli, Commands},
    parse_storage_type,
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut err = io::stderr();

    run(cli, &mut input, &mut out, &mut err)
}

/// Runs one invocation reading answers from `input`. Info goes to `out`,
/// errors to `err`. Service failures are shown to the user and do not make
/// the invocation fail; only configuration errors do.
pub fn run<R: BufRead, W: Write, E: Write>(
    cli: Cli,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<(), AppError> {
    let medium = StorageMediums::from(&cli.storage_choice)?;
    let storage = parse_storage_type(medium, &cli.url, Duration::from_secs(cli.timeout_secs))?;
    debug!(medium = medium.is_which(), url = %cli.url, "storage selected");

    let mut manager = ContactManager::new(storage);
    let loaded = manager.load();
    let loaded = report(&mut manager, loaded, out, err)?.is_some();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell(&mut manager, input, out, err),
        _ if !loaded => Ok(()),
        Commands::List { filter } => {
            manager.set_search(filter.as_deref().unwrap_or_default());
            list_contacts(&manager, out)
        }
        Commands::Add { name, number, yes } => {
            add_contact(&mut manager, &name, &number, yes, input, out, err)
        }
        Commands::Delete { name, id, yes } => {
            let target = match (name, id) {
                (Some(name), _) => DeleteTarget::Name(name),
                (None, Some(id)) => DeleteTarget::Id(ContactId::parse(&id)),
                (None, None) => {
                    return Err(AppError::Validation("Provide a name or an id".to_string()));
                }
            };
            delete_contact(&mut manager, target, yes, input, out, err)
        }
    }
}

enum DeleteTarget {
    Name(String),
    Id(ContactId),
}

fn shell<R: BufRead, W: Write, E: Write>(
    manager: &mut ContactManager,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<(), AppError> {
    writeln!(out, "\n--- Phonebook ({}) ---", manager.storage.get_medium())?;

    'outerloop: loop {
        show_menu(out)?;

        let Some(action) = get_input(input)? else {
            break 'outerloop;
        };

        let command = match parse_menu_command(&action) {
            Ok(command) => command,
            Err(e) => {
                writeln!(err, "{e}")?;
                continue 'outerloop;
            }
        };

        match command {
            MenuCommand::Filter => {
                let Some(search) = prompt("filter shown with", input, out)? else {
                    break 'outerloop;
                };
                manager.set_search(&search);
                list_contacts(manager, out)?;
            }
            MenuCommand::AddContact => {
                let Some(name) = prompt("name", input, out)? else {
                    break 'outerloop;
                };
                let Some(number) = prompt("number", input, out)? else {
                    break 'outerloop;
                };
                add_contact(manager, &name, &number, false, input, out, err)?;
            }
            MenuCommand::DeleteContact => {
                let Some(name) = prompt("name to delete", input, out)? else {
                    break 'outerloop;
                };
                delete_contact(manager, DeleteTarget::Name(name), false, input, out, err)?;
            }
            MenuCommand::ListContacts => list_contacts(manager, out)?,
            MenuCommand::Exit => break 'outerloop,
        }
    }

    writeln!(out, "\nBye!")?;
    Ok(())
}

fn list_contacts<W: Write>(manager: &ContactManager, out: &mut W) -> Result<(), AppError> {
    if manager.list().is_empty() {
        writeln!(out, "No contact yet")?;
        return Ok(());
    }

    let visible = manager.visible();
    if visible.is_empty() {
        writeln!(
            out,
            "Found no contact whose first name starts with '{}'",
            manager.search
        )?;
        return Ok(());
    }

    for (i, contact) in visible.iter().enumerate() {
        writeln!(out, "{}", display_contact(i + 1, contact))?;
    }
    Ok(())
}

fn add_contact<R: BufRead, W: Write, E: Write>(
    manager: &mut ContactManager,
    name: &str,
    number: &str,
    yes: bool,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<(), AppError> {
    manager.set_name(name);
    manager.set_number(number);

    let submitted = manager.submit();
    let Some(Submission::Pending(pending)) = report(manager, submitted, out, err)? else {
        return Ok(());
    };

    let answer = if yes {
        Confirmation::Accepted
    } else {
        confirm_action(&pending.prompt(), input, out)?
    };
    settle(manager, answer, out, err)
}

fn delete_contact<R: BufRead, W: Write, E: Write>(
    manager: &mut ContactManager,
    target: DeleteTarget,
    yes: bool,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<(), AppError> {
    let requested = match &target {
        DeleteTarget::Name(name) => manager.request_delete_by_name(name),
        DeleteTarget::Id(id) => manager.request_delete(id),
    };
    let Some(pending) = report(manager, requested, out, err)? else {
        return Ok(());
    };

    let answer = if yes {
        Confirmation::Accepted
    } else {
        confirm_action(&pending.prompt(), input, out)?
    };
    settle(manager, answer, out, err)
}

fn settle<W: Write, E: Write>(
    manager: &mut ContactManager,
    answer: Confirmation,
    out: &mut W,
    err: &mut E,
) -> Result<(), AppError> {
    let resolved = manager.resolve(answer);
    if let Some(Resolution::Declined) = report(manager, resolved, out, err)? {
        writeln!(out, "Nothing changed")?;
    }
    Ok(())
}

/// Shows queued notifications, info on `out` and errors on `err`, and turns
/// a failed step into `None`. Errors the manager did not already announce are
/// printed as they are.
fn report<T, W: Write, E: Write>(
    manager: &mut ContactManager,
    result: Result<T, AppError>,
    out: &mut W,
    err: &mut E,
) -> Result<Option<T>, AppError> {
    let announced = manager.notifications().iter().any(|n| n.is_error());

    for notification in manager.drain_notifications() {
        if notification.is_error() {
            writeln!(err, "{}", notification.message)?;
        } else {
            writeln!(out, "{}", notification.message)?;
        }
    }

    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            if !announced {
                writeln!(err, "{e}")?;
            }
            Ok(None)
        }
    }
}
