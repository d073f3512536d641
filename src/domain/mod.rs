pub mod confirm;
pub mod contact;
pub mod form;
pub mod manager;
pub mod search;
pub mod store;

use crate::errors::AppError;
use contact::{Contact, ContactId};
