use super::*;

use crate::storage::ContactGateway;
use super::confirm::{Confirmation, PendingAction, Ticket};
use super::contact::NewContact;
use super::form::{Form, Notification};
use super::search::filter_by_first_name;
use super::store::ContactList;
use tracing::{error, info, warn};

const ADD_FAILED: &str = "An error occurred while adding the person";
const UPDATE_FAILED: &str = "An error occurred while updating the person";
const DELETE_FAILED: &str = "An error occurred while deleting the person";
const LOAD_FAILED: &str = "Could not load the phonebook";
const STALE: &str =
    "The phonebook changed while a request was in flight, reload to see the latest entries";

/// What a submit of the form led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Created(Contact),
    /// The name is taken. Nothing was sent; answer with `resolve`.
    Pending(PendingAction),
}

/// What answering a pending confirmation led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Updated(Contact),
    Deleted(Contact),
    Declined,
}

/// A confirmed answer from the phonebook service, ready to be folded into
/// the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Loaded(Vec<Contact>),
    Created(Contact),
    Updated { id: ContactId, contact: Contact },
    Removed(ContactId),
}

/// Phonebook controller: owns the contact list, the form, the search text and
/// the notification queue, and talks to the service through a gateway.
///
/// The list only changes once the service has confirmed a request.
pub struct ContactManager {
    list: ContactList,
    pub form: Form,
    pub search: String,
    pub storage: Box<dyn ContactGateway>,
    pending: Option<PendingAction>,
    notifications: Vec<Notification>,
    next_seq: u64,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactGateway>) -> Self {
        Self {
            list: ContactList::new(),
            form: Form::default(),
            search: String::new(),
            storage,
            pending: None,
            notifications: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn list(&self) -> &ContactList {
        &self.list
    }

    pub fn contact_list(&self) -> &[Contact] {
        self.list.contacts()
    }

    /// Contacts shown under the current search text.
    pub fn visible(&self) -> Vec<&Contact> {
        filter_by_first_name(&self.list, &self.search)
    }

    pub fn set_name(&mut self, name: &str) {
        self.form.name = name.to_string();
    }

    pub fn set_number(&mut self, number: &str) {
        self.form.number = number.to_string();
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Replaces the list with whatever the service currently holds.
    pub fn load(&mut self) -> Result<(), AppError> {
        let ticket = self.issue_ticket();

        match self.storage.get_all() {
            Ok(contacts) => self.complete(ticket, Completion::Loaded(contacts)),
            Err(e) => Err(self.fail(LOAD_FAILED, e)),
        }
    }

    /// Submits the form.
    ///
    /// A name not yet in the list (ignoring case) is created straight away.
    /// A taken name yields a pending update that must be resolved before
    /// anything else can be submitted.
    pub fn submit(&mut self) -> Result<Submission, AppError> {
        self.ensure_idle()?;

        let candidate = NewContact::new(&self.form.name, &self.form.number);
        if let Err(e) = candidate.validate() {
            self.notify(Notification::error(e.to_string()));
            return Err(e);
        }

        if let Some(existing) = self.list.find_by_name(&candidate.name) {
            let pending = PendingAction::Update {
                id: existing.id.clone(),
                entered_name: candidate.name.clone(),
                updated: existing.with_number(&candidate.number),
                version: self.list.version(),
            };
            self.pending = Some(pending.clone());
            return Ok(Submission::Pending(pending));
        }

        let ticket = self.issue_ticket();
        match self.storage.create(&candidate) {
            Ok(created) => {
                self.complete(ticket, Completion::Created(created.clone()))?;
                info!(id = %created.id, name = %created.name, "contact added");
                self.notify(Notification::info(format!("Added {}", created.name)));
                self.form.clear();
                Ok(Submission::Created(created))
            }
            Err(e) => Err(self.fail(ADD_FAILED, e)),
        }
    }

    /// Asks to delete the contact carrying `id`. Nothing is sent until the
    /// returned action is accepted.
    pub fn request_delete(&mut self, id: &ContactId) -> Result<PendingAction, AppError> {
        self.ensure_idle()?;

        let contact = self
            .list
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Contact {id}")))?;

        let pending = PendingAction::Delete {
            id: contact.id.clone(),
            name: contact.name.clone(),
            version: self.list.version(),
        };
        self.pending = Some(pending.clone());
        Ok(pending)
    }

    /// Same as `request_delete`, looking the contact up by name ignoring case.
    pub fn request_delete_by_name(&mut self, name: &str) -> Result<PendingAction, AppError> {
        let id = self
            .list
            .find_by_name(name)
            .map(|c| c.id.clone())
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name.trim())))?;

        self.request_delete(&id)
    }

    /// Answers the pending confirmation.
    pub fn resolve(&mut self, answer: Confirmation) -> Result<Resolution, AppError> {
        let pending = self.pending.take().ok_or(AppError::NoPendingConfirmation)?;

        if answer == Confirmation::Declined {
            info!(id = %pending.id(), "confirmation declined");
            return Ok(Resolution::Declined);
        }

        if pending.version() != self.list.version() {
            warn!(
                id = %pending.id(),
                asked_at = pending.version(),
                now = self.list.version(),
                "confirmation answered against an outdated phonebook"
            );
            self.notify(Notification::error(STALE));
            return Err(AppError::StaleResponse);
        }

        match pending {
            PendingAction::Update { id, updated, .. } => {
                let ticket = self.issue_ticket();
                match self.storage.update(&id, &updated) {
                    Ok(returned) => {
                        self.complete(
                            ticket,
                            Completion::Updated {
                                id,
                                contact: returned.clone(),
                            },
                        )?;
                        info!(id = %returned.id, name = %returned.name, "contact updated");
                        self.notify(Notification::info(format!(
                            "Updated {}",
                            returned.name
                        )));
                        self.form.clear();
                        Ok(Resolution::Updated(returned))
                    }
                    Err(e) => Err(self.fail(UPDATE_FAILED, e)),
                }
            }
            PendingAction::Delete { id, name, .. } => {
                let ticket = self.issue_ticket();
                match self.storage.remove(&id) {
                    Ok(()) => {
                        let removed = self.list.get(&id).cloned();
                        self.complete(ticket, Completion::Removed(id.clone()))?;
                        info!(%id, %name, "contact deleted");
                        self.notify(Notification::info(format!("Deleted {name}")));
                        removed
                            .map(Resolution::Deleted)
                            .ok_or_else(|| AppError::NotFound(format!("Contact {id}")))
                    }
                    Err(e) => Err(self.fail(DELETE_FAILED, e)),
                }
            }
        }
    }

    /// Tags a request about to be sent with the current list version.
    pub fn issue_ticket(&mut self) -> Ticket {
        self.next_seq += 1;
        Ticket {
            seq: self.next_seq,
            version: self.list.version(),
        }
    }

    /// Folds a service answer into the list, unless the list has moved on
    /// since the request behind `ticket` was issued.
    pub fn complete(&mut self, ticket: Ticket, completion: Completion) -> Result<(), AppError> {
        if ticket.version != self.list.version() {
            warn!(
                seq = ticket.seq,
                issued_at = ticket.version,
                now = self.list.version(),
                "discarding stale completion"
            );
            self.notify(Notification::error(STALE));
            return Err(AppError::StaleResponse);
        }

        match completion {
            Completion::Loaded(contacts) => self.list.replace_all(contacts),
            Completion::Created(contact) => self.list.append(contact),
            Completion::Updated { id, contact } => self.list.replace(&id, contact)?,
            Completion::Removed(id) => {
                self.list.remove(&id)?;
            }
        }
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), AppError> {
        if self.pending.is_some() {
            return Err(AppError::ConfirmationPending);
        }
        Ok(())
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn fail(&mut self, message: &str, err: AppError) -> AppError {
        error!(medium = self.storage.get_medium(), error = %err, "{message}");
        self.notify(Notification::error(message));
        err
    }
}
