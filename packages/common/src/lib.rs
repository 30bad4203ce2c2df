pub mod notification;
pub mod response;
pub mod submission;

pub use notification::ContactNotification;
pub use response::{ErrorBody, SendEmailResponse};
pub use submission::{ContactSubmission, ValidationError};
