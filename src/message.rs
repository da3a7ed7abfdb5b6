//! Conversion of fetched RFC 5322 messages into [`RawEmail`]

use crate::error::{ClassifyError, Result};
use crate::types::RawEmail;
use chrono::DateTime;
use mailparse::{MailHeaderMap, ParsedMail};
use tracing::debug;

impl RawEmail {
    /// Build a [`RawEmail`] from raw message bytes.
    ///
    /// The `Date` header is re-rendered as RFC 3339 keeping its offset, or
    /// left empty when missing or invalid. The body is the first `text/plain`
    /// part, else the first leaf part as-is; markup is not converted.
    pub fn from_rfc822(raw: &[u8], link: impl Into<String>) -> Result<Self> {
        let parsed =
            mailparse::parse_mail(raw).map_err(|e| ClassifyError::Structure(e.to_string()))?;

        let from = parsed
            .headers
            .get_first_value("From")
            .ok_or_else(|| ClassifyError::MissingHeader("From".into()))?;
        let subject = parsed.headers.get_first_value("Subject").unwrap_or_default();
        let timestamp = parsed
            .headers
            .get_first_value("Date")
            .and_then(|d| DateTime::parse_from_rfc2822(d.trim()).ok())
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default();
        let body = extract_body(&parsed);

        debug!("Read message: {} from {}", subject, from);

        Ok(Self {
            timestamp,
            from,
            subject,
            body,
            link: link.into(),
        })
    }
}

fn extract_body(parsed: &ParsedMail) -> String {
    find_leaf(parsed, &|part: &ParsedMail| {
        part.ctype.mimetype.eq_ignore_ascii_case("text/plain")
    })
    .or_else(|| find_leaf(parsed, &|_: &ParsedMail| true))
    .and_then(|part| part.get_body().ok())
    .unwrap_or_default()
}

fn find_leaf<'a>(
    parsed: &'a ParsedMail<'a>,
    accept: &dyn Fn(&ParsedMail) -> bool,
) -> Option<&'a ParsedMail<'a>> {
    if parsed.subparts.is_empty() {
        return accept(parsed).then_some(parsed);
    }
    parsed
        .subparts
        .iter()
        .find_map(|part| find_leaf(part, accept))
}
