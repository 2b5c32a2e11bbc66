/// Request middleware and extractors
mod user;

pub use user::{UploaderId, USER_ID_HEADER};
