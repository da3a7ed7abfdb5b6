//! Per-email classification and batch ordering

use crate::company::resolve_company_name;
use crate::config::{PatternConfig, Rules};
use crate::direct::is_direct_company;
use crate::normalize::{normalize_text, parse_timestamp};
use crate::status::classify_status;
use crate::title::resolve_job_title;
use crate::types::{ClassifiedRecord, RawEmail, SenderAddress};
use tracing::debug;

/// Classifies raw emails against one compiled rule set.
///
/// Holds no per-email state; one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Rules,
}

impl Classifier {
    #[must_use]
    pub fn new(config: &PatternConfig) -> Self {
        Self::from_rules(Rules::from(config))
    }

    #[must_use]
    pub const fn from_rules(rules: Rules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Classify one email. Never fails: unresolved fields fall back to
    /// [`UNKNOWN`](crate::UNKNOWN), `false` and [`Other`](crate::ApplicationStatus::Other).
    #[must_use]
    pub fn classify(&self, email: RawEmail) -> ClassifiedRecord {
        let parsed_timestamp = parse_timestamp(&email.timestamp);
        let normalized_text = normalize_text(&email.subject, &email.body);
        let normalized_subject = email.subject.to_lowercase();
        let sender = SenderAddress::parse(&email.from);

        // Title and direct-company detection both depend on the company
        let company_name = resolve_company_name(
            &email.subject,
            &email.body,
            &normalized_text,
            sender.as_ref(),
            &self.rules,
        );
        let job_title = resolve_job_title(&email.subject, &email.body, &company_name, &self.rules);
        let is_direct_company =
            is_direct_company(sender.as_ref(), &company_name, &normalized_text, &self.rules);
        let application_status =
            classify_status(&normalized_text, &normalized_subject, &self.rules);

        debug!(
            "Classified email: {} -> {} / {} ({})",
            email.subject, company_name, job_title, application_status
        );

        ClassifiedRecord {
            timestamp: email.timestamp,
            from: email.from,
            subject: email.subject,
            body: email.body,
            link: email.link,
            company_name,
            is_direct_company,
            job_title,
            application_status,
            parsed_timestamp,
            normalized_text,
        }
    }

    /// Classify every email, then order by parsed timestamp ascending.
    ///
    /// The sort is stable: emails with equal timestamps (including every
    /// unparsable one) keep their input order.
    #[must_use]
    pub fn classify_batch(
        &self,
        emails: impl IntoIterator<Item = RawEmail>,
    ) -> Vec<ClassifiedRecord> {
        let mut records: Vec<ClassifiedRecord> =
            emails.into_iter().map(|email| self.classify(email)).collect();
        records.sort_by_key(|record| record.parsed_timestamp);

        debug!("Classified {} emails", records.len());
        records
    }
}

/// Compile `config` and classify a whole batch in one call.
#[must_use]
pub fn classify_emails(
    config: &PatternConfig,
    emails: impl IntoIterator<Item = RawEmail>,
) -> Vec<ClassifiedRecord> {
    Classifier::new(config).classify_batch(emails)
}
