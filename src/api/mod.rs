mod error;
mod handler;
mod router;

pub use error::{ApiError, ApiErrorCode, ApiRejection, recover_error};
pub use router::{app, routes};
