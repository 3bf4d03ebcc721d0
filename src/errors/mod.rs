pub mod types;

pub use types::{message_from_body, AppError, AppResult, ClientError, WebError};
