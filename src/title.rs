//! Job-title resolution

use crate::company::is_likely_company_name;
use crate::config::Rules;
use crate::types::UNKNOWN;
use regex::Regex;
use std::borrow::Cow;
use tracing::trace;

// Requisition or ticket codes such as "R-10423 " ahead of the title
static TICKET_PREFIX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[A-Z0-9-]+\s+([A-Za-z])").unwrap());

static LOCATION_SUFFIX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)\s*\(?(?:Remote|USA|US|Hybrid|Open|Target|Req ID.*)\)?$").unwrap()
});

static ROLE_SUFFIX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)(?:\s+role|\s+position|\s+opening|\s+job|\s+opportunity)$").unwrap()
});

static BRACKET_TAG: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\s*\[\w+\]$").unwrap());

static AT_CLAUSE: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)\s+at\s+[\w\s.&,'-]+$").unwrap());

static SENIOR_ABBREVIATION: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)\bSr\b\.?").unwrap());

static BOILERPLATE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:thank you|application|resume|we have received|your interest|for the|opening for|details for|the role of the)\b",
    )
    .unwrap()
});

static TWO_WORD_CHARS: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\w.*\w").unwrap());

const EDGE_PUNCTUATION: [char; 11] = [
    ' ', ',', '-', '–', '(', ')', '\u{2018}', '\u{2019}', '"', '\'', ':',
];

/// Resolve a job title from the subject, then the body.
///
/// Title patterns are tried in order against each non-empty source; the
/// first candidate surviving cleanup and plausibility checks wins. Returns
/// [`UNKNOWN`] otherwise.
#[must_use]
pub fn resolve_job_title(
    subject: &str,
    body: &str,
    company_name: &str,
    rules: &Rules,
) -> String {
    // Company-specific regexes are built once per email
    let patterns: Vec<Cow<'_, Regex>> = rules
        .title_patterns()
        .iter()
        .filter_map(|pattern| pattern.for_company(company_name))
        .collect();
    let at_company = at_company_clause(company_name);

    [subject, body]
        .into_iter()
        .filter(|source| !source.is_empty())
        .flat_map(|source| patterns.iter().map(move |re| (source, &**re)))
        .find_map(|(source, re)| {
            title_from_pattern(source, re, company_name, at_company.as_ref())
        })
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn title_from_pattern(
    source: &str,
    re: &Regex,
    company_name: &str,
    at_company: Option<&Regex>,
) -> Option<String> {
    let captured = re.captures(source)?.get(1).map_or("", |m| m.as_str());

    let candidate = clean_title(captured, at_company);
    if BOILERPLATE.is_match(&candidate) || !is_plausible_title(&candidate, company_name) {
        return None;
    }

    trace!(title = %candidate, pattern = re.as_str(), "Job title resolved");
    Some(candidate)
}

/// Strip codes, location and role noise, trailing "at ..." clauses and edge
/// punctuation from a captured title.
#[must_use]
pub fn clean_job_title(raw: &str, company_name: &str) -> String {
    clean_title(raw, at_company_clause(company_name).as_ref())
}

fn clean_title(raw: &str, at_company: Option<&Regex>) -> String {
    let title = TICKET_PREFIX.replace(raw.trim(), "${1}").trim().to_string();
    let title = LOCATION_SUFFIX.replace(&title, "").trim().to_string();
    let title = ROLE_SUFFIX.replace(&title, "").trim().to_string();
    let title = BRACKET_TAG.replace(&title, "").trim().to_string();

    let title = match at_company {
        Some(re) => re.replace(&title, "").trim().to_string(),
        None => title,
    };
    let title = AT_CLAUSE.replace(&title, "").trim().to_string();
    let title = SENIOR_ABBREVIATION.replace_all(&title, "Senior");

    title.trim_matches(EDGE_PUNCTUATION).to_string()
}

// " at <company>" through end of text, for a resolved company only
fn at_company_clause(company_name: &str) -> Option<Regex> {
    if company_name == UNKNOWN || company_name.trim().is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\s+at\s+{}\b.*$", regex::escape(company_name))).ok()
}

/// Whether a cleaned candidate reads like a job title rather than a
/// company name or fragment.
#[must_use]
pub fn is_plausible_title(candidate: &str, company_name: &str) -> bool {
    let length = candidate.chars().count();

    length > 3
        && length < 120
        && candidate.to_lowercase() != company_name.to_lowercase()
        && !is_likely_company_name(candidate)
        && TWO_WORD_CHARS.is_match(candidate)
        && candidate.split(' ').count() <= 10
}
