//! Record store (in-memory, optionally mirrored to JSON files).

pub mod json_file;
pub mod store;

pub use json_file::JsonFiles;
pub use store::{RecordStore, Records};

/// File names used by the file-backed store.
pub mod files {
    pub const DEBATES: &str = "debates.json";
    pub const USERS: &str = "users.json";
}

/// Errors raised by the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Serde {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate {kind} id {id} in {path}")]
    DuplicateId {
        kind: &'static str,
        id: String,
        path: String,
    },
}
