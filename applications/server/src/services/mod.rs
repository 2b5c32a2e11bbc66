/// Server services
pub mod file_storage;
pub mod upload;

pub use file_storage::FileStorage;
pub use upload::{UploadOutcome, UploadService, UploadedFile};
