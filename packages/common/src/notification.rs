use crate::submission::ContactSubmission;

/// The email sent to the site owner for one contact submission.
///
/// Sender and recipient are both the owner's account: the visitor's address
/// only ever appears in the body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactNotification {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ContactNotification {
    pub fn compose(submission: &ContactSubmission, account: &str) -> Self {
        Self {
            from: account.to_string(),
            to: account.to_string(),
            subject: subject_for(&submission.name),
            body: format!(
                "New Contact Form Submission\n\nName: {}\nEmail: {}\nMessage: {}\n",
                submission.name, submission.email, submission.message
            ),
        }
    }
}

fn subject_for(name: &str) -> String {
    format!("New Contact Form Message from {name}")
}
