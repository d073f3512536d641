//! Phonebook client: keeps a local copy of a REST contact collection,
//! filters it by first name and reconciles new entries against existing
//! names before anything is sent to the service.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod storage;
