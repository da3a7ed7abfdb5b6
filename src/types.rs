//! Core types for raw and classified emails

use chrono::{DateTime, Utc};
use mailparse::MailAddr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used when a company name or job title cannot be resolved
pub const UNKNOWN: &str = "Unknown";

/// Serialized column order of a [`ClassifiedRecord`]
pub const RECORD_FIELDS: [&str; 9] = [
    "DateTime",
    "From",
    "Subject",
    "Body",
    "EmailLink",
    "CompanyName",
    "IsDirectCompany",
    "JobTitle",
    "ApplicationStatus",
];

/// One fetched message, as handed over by the mail source
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawEmail {
    /// Send date, ISO-8601 with offset (may be malformed or empty)
    pub timestamp: String,

    /// Sender, display name plus address
    pub from: String,

    pub subject: String,

    /// Plain-text body, already stripped of markup
    pub body: String,

    /// Deep link back to the message in the mailbox
    pub link: String,
}

impl RawEmail {
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        from: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            from: from.into(),
            subject: subject.into(),
            body: body.into(),
            link: link.into(),
        }
    }
}

/// Where an email sits in the application lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    #[serde(rename = "Rejection Reply")]
    RejectionReply,
    #[serde(rename = "Original Application")]
    OriginalApplication,
    Other,
}

impl ApplicationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RejectionReply => "Rejection Reply",
            Self::OriginalApplication => "Original Application",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw email plus the four extracted fields
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClassifiedRecord {
    #[serde(rename = "DateTime")]
    pub timestamp: String,

    #[serde(rename = "From")]
    pub from: String,

    #[serde(rename = "Subject")]
    pub subject: String,

    #[serde(rename = "Body")]
    pub body: String,

    #[serde(rename = "EmailLink")]
    pub link: String,

    /// Hiring company, never empty ([`UNKNOWN`] when unresolved)
    #[serde(rename = "CompanyName")]
    pub company_name: String,

    /// Sender is the employer itself rather than an ATS or job board
    #[serde(rename = "IsDirectCompany")]
    pub is_direct_company: bool,

    /// Job title, never empty ([`UNKNOWN`] when unresolved)
    #[serde(rename = "JobTitle")]
    pub job_title: String,

    #[serde(rename = "ApplicationStatus")]
    pub application_status: ApplicationStatus,

    /// Sort key; the earliest representable instant when the date did not parse
    #[serde(skip)]
    pub parsed_timestamp: DateTime<Utc>,

    /// Lowercased subject and body used for keyword search
    #[serde(skip)]
    pub normalized_text: String,
}

/// Parsed sender mailbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderAddress {
    /// Display name (e.g., "Acme Recruiting"), if any
    pub name: Option<String>,

    /// Bare address (e.g., "jobs@acme.com")
    pub address: String,

    /// Local part (before @)
    pub local_part: String,

    /// Lowercased domain; `None` when the address has no @
    pub domain: Option<String>,
}

impl SenderAddress {
    /// Parse the first mailbox of an RFC 5322 address list.
    ///
    /// Groups contribute their first member. Headers the strict parser
    /// rejects, such as an unquoted comma in the display name, fall back to
    /// a `Name <address>` or bare-address scan. Returns `None` when the
    /// input holds no mailbox at all.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::parse_strict(s).or_else(|| Self::parse_lenient(s))
    }

    fn parse_strict(s: &str) -> Option<Self> {
        let list = mailparse::addrparse(s).ok()?;
        let info = list.iter().find_map(|addr| match addr {
            MailAddr::Single(info) => Some(info),
            MailAddr::Group(group) => group.addrs.first(),
        })?;

        // A stray comma splits "Acme, Inc <jobs@acme.com>" into a bare "Acme"
        if !info.addr.contains('@') {
            return None;
        }
        Self::from_parts(info.display_name.as_deref(), &info.addr)
    }

    fn parse_lenient(s: &str) -> Option<Self> {
        // "Name <email@domain.com>" format
        if let Some(start) = s.find('<')
            && let Some(len) = s[start..].find('>')
        {
            let address = &s[start + 1..start + len];
            if address.contains('@') {
                return Self::from_parts(Some(&s[..start]), address);
            }
        }

        // Plain email address
        if s.contains('@') && !s.contains(char::is_whitespace) {
            return Self::from_parts(None, s);
        }

        None
    }

    fn from_parts(name: Option<&str>, address: &str) -> Option<Self> {
        let address = address.trim().to_string();
        if address.is_empty() {
            return None;
        }

        let (local_part, domain) = match address.rsplit_once('@') {
            Some((local, domain)) if !domain.is_empty() => {
                (local.to_string(), Some(domain.to_lowercase()))
            }
            _ => (address.clone(), None),
        };

        let name = name
            .map(|n| n.trim().trim_matches('"').trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Some(Self {
            name,
            address,
            local_part,
            domain,
        })
    }
}

impl fmt::Display for SenderAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}
