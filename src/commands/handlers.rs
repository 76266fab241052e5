//! Command handlers.
//!
//! Each handler turns a [`Command`] into calls on the contact service and
//! returns what should be shown to the user.

use super::parser::Command;
use crate::book::Paginator;
use crate::error::CommandResult;
use crate::models::Record;
use crate::services::ContactService;
use std::fmt;

/// Greeting and command reference printed at start-up and on `help`.
pub const HELP_TEXT: &str = "\
What can this bot do?
    1. Save a contact (name, phone number and birthday).
       The number must be exactly 12 digits. Birthday format: YYYY-MM-DD.
       Use command: add [name] [number] [birthday]
    2. Change a phone number of a saved contact.
       Use command: change [name] [old_number] [new_number]
    3. Show all saved contacts with their phones and birthdays.
       Use command: show all
    4. Show the contacts a page at a time, pressing Enter for the next page.
       Use command: show in parts
    5. Remove a contact.
       Use command: remove [name]
    6. Find contacts by any part of their name, phone or birthday (case-insensitive).
       Use command: find [text]
    7. Search contacts by part of their name or phone (case-sensitive).
       Use command: search [text]
    8. Save and quit.
       Use command: exit, close or good bye";

/// What the prompt loop should do with a handled command.
pub enum Response<'a> {
    /// Print the text
    Text(String),

    /// Show pages one at a time
    Pages(Paginator<'a>),

    /// Print the farewell, save, and stop
    Exit(String),
}

impl fmt::Debug for Response<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Pages(pager) => f
                .debug_struct("Pages")
                .field("page_size", &pager.page_size())
                .finish(),
            Self::Exit(text) => f.debug_tuple("Exit").field(text).finish(),
        }
    }
}

/// Run `command` against `service`.
///
/// # Errors
///
/// `CommandError::Field` when a name, phone, or birthday argument is invalid.
pub fn handle(service: &mut ContactService, command: Command) -> CommandResult<Response<'_>> {
    let response = match command {
        Command::Hello => Response::Text("How can I help you?".to_string()),
        Command::Help => Response::Text(HELP_TEXT.to_string()),
        Command::Add {
            name,
            phone,
            birthday,
        } => Response::Text(service.add_contact(&name, &phone, birthday.as_deref())?),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => {
            let text = if service.change_phone(&name, &old_phone, &new_phone)? {
                "Phone number was changed.".to_string()
            } else if service.book().contains(&name) {
                format!("Contact {} has no phone number {}.", name, old_phone)
            } else {
                no_contact(&name)
            };
            Response::Text(text)
        }
        Command::ShowAll => Response::Text(service.render_all()),
        Command::ShowInParts => {
            if service.book().is_empty() {
                Response::Text(service.render_all())
            } else {
                Response::Pages(service.pages())
            }
        }
        Command::Remove { name } => {
            let text = if service.remove_contact(&name) {
                format!("Contact {} has been removed.", name)
            } else {
                no_contact(&name)
            };
            Response::Text(text)
        }
        Command::Find { query } => Response::Text(service.find(query.trim())),
        Command::Search { query } => Response::Text(render_search(service, &query)),
        Command::Exit => Response::Exit("Good bye!".to_string()),
    };
    Ok(response)
}

fn no_contact(name: &str) -> String {
    format!("There is no contact with name \"{}\".", name)
}

fn render_search(service: &ContactService, query: &str) -> String {
    let found = service.search(query);
    if found.is_empty() {
        return format!("No contacts found for \"{}\"", query);
    }
    found
        .into_iter()
        .map(|(_, record)| search_line(record))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `name: phones birthday (N days until birthday)`.
fn search_line(record: &Record) -> String {
    let mut line = record.summary_line();
    if let Some(birthday) = record.birthday() {
        line.push_str(&format!(" {}", birthday));
    }
    if let Some(days) = record.days_to_birthday() {
        line.push_str(&format!(" ({} days until birthday)", days));
    }
    line
}
