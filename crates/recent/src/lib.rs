//! Recent-files model for an editor side panel.
//!
//! Editors keep no durable record of which files the user touched last;
//! the side panel needs one that survives a session restart. This crate
//! owns that record: a bounded, deduplicated most-recently-used list of
//! file entries, loaded from and written back to an injected key-value
//! store after every mutation.

mod document;
mod entry;
mod list;
mod uri;

pub use document::*;
pub use entry::*;
pub use list::*;
pub use uri::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("encode error, {0}")]
    EncodeError(#[from] serde_json::Error),
    #[error("store error")]
    StoreError(#[from] store::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
