//! Persistent dictionary of accepted words

pub mod store;

pub use store::{DEFAULT_FILE_NAME, DictionaryStore, StoreError, capitalize};
