//! Application status classification

use crate::config::Rules;
use crate::types::ApplicationStatus;

/// Classify by keyword precedence: any rejection keyword wins, then any
/// original-application keyword in the subject or full text.
#[must_use]
pub fn classify_status(
    normalized_text: &str,
    normalized_subject: &str,
    rules: &Rules,
) -> ApplicationStatus {
    if rules.has_rejection_keyword(normalized_text) {
        ApplicationStatus::RejectionReply
    } else if rules.has_application_keyword(normalized_subject)
        || rules.has_application_keyword(normalized_text)
    {
        ApplicationStatus::OriginalApplication
    } else {
        ApplicationStatus::Other
    }
}
