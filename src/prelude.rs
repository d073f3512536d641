pub use crate::cli::{command, run_app};
pub use crate::domain::{
    confirm::{Confirmation, PendingAction, Ticket},
    contact::{self, Contact, ContactId, NewContact},
    form::{Form, NoticeKind, Notification},
    manager::{Completion, ContactManager, Resolution, Submission},
    search::filter_by_first_name,
    store::ContactList,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactGateway, StorageMediums, memory::MemStorage, parse_storage_type,
    remote::RemoteStorage,
};
