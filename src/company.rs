//! Company-name resolution
//!
//! The name is resolved by an ordered cascade of strategies, the first one
//! producing a value wins:
//!
//! 1. configured patterns against the subject
//! 2. configured patterns against the body, filtered for plausibility
//! 3. literal company keywords in the normalized text
//! 4. the sender's display name
//! 5. the second-to-last label of the sender's domain, unless the sender is
//!    an ATS or job board

use crate::config::Rules;
use crate::types::{SenderAddress, UNKNOWN};
use regex::Regex;
use tracing::trace;

static CORPORATE_SUFFIX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r"(?i)\s+(?:Inc\.?|LLC|L\.P\.?|Ltd\.?|Corp\.?|Corporation|Group|Labs|Solutions|Systems|Company|Careers)$",
    )
    .unwrap()
});

static CAREERS: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)careers").unwrap());

static ALL_DIGITS: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

static COMPANY_CHARSET: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s.'&/–-]+$").unwrap());

/// Greetings, sign-offs and mailbox roles that are never a company
const NOISE_NAMES: [&str; 17] = [
    "team",
    "sincerely",
    "regards",
    "best",
    "thank",
    "thanks",
    "cheers",
    "talent acquisition",
    "recruiting team",
    "hiring team",
    "auto-reply",
    "notification",
    "support",
    "system",
    "do-not-reply",
    "noreply",
    "no-reply",
];

/// Heuristic check that a string could be an employer's name.
///
/// Rejects greetings, sign-offs, addresses, bare numbers and anything longer
/// than five words; accepts letters, digits, whitespace and `.'&/–-`.
#[must_use]
pub fn is_likely_company_name(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }

    let lower = name.to_lowercase();
    if lower.contains("dear") || lower.contains("hello") || lower.contains("hi ") {
        return false;
    }

    if name.chars().count() < 2
        || name.contains(['@', '<', '>'])
        || NOISE_NAMES.contains(&lower.as_str())
        || ALL_DIGITS.is_match(name)
        || name.split_whitespace().count() > 5
    {
        return false;
    }

    COMPANY_CHARSET.is_match(name)
}

/// Normalize a captured company name, or return [`UNKNOWN`] if nothing
/// meaningful is left.
#[must_use]
pub fn clean_company_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return UNKNOWN.to_string();
    }

    let without_suffix = CORPORATE_SUFFIX.replace(trimmed, "");
    let without_quotes = without_suffix.replace('"', "");
    let without_careers = CAREERS.replace_all(&without_quotes, "");

    let mut cleaned = without_careers.trim();
    if let Some(prefix) = cleaned.get(..4)
        && prefix.eq_ignore_ascii_case("the ")
    {
        cleaned = &cleaned[4..];
    }
    let cleaned = cleaned.trim_end_matches(['.', ',', '!', '?', ':', ';', ' ']);

    if cleaned.trim().is_empty() || cleaned.chars().count() < 2 {
        UNKNOWN.to_string()
    } else {
        cleaned.to_string()
    }
}

struct CompanyInputs<'a> {
    subject: &'a str,
    body: &'a str,
    normalized_text: &'a str,
    sender: Option<&'a SenderAddress>,
}

type Strategy = fn(&CompanyInputs<'_>, &Rules) -> Option<String>;

const CASCADE: [(&str, Strategy); 5] = [
    ("subject_pattern", from_subject_patterns),
    ("body_pattern", from_body_patterns),
    ("company_keyword", from_company_keywords),
    ("display_name", from_display_name),
    ("sender_domain", from_sender_domain),
];

/// Resolve the hiring company's name. Never empty; [`UNKNOWN`] when every
/// strategy comes up empty.
#[must_use]
pub fn resolve_company_name(
    subject: &str,
    body: &str,
    normalized_text: &str,
    sender: Option<&SenderAddress>,
    rules: &Rules,
) -> String {
    let input = CompanyInputs {
        subject,
        body,
        normalized_text,
        sender,
    };

    CASCADE
        .iter()
        .find_map(|(step, strategy)| {
            let name = strategy(&input, rules)?;
            trace!(step = *step, company = %name, "Company name resolved");
            Some(name)
        })
        .unwrap_or_else(|| UNKNOWN.to_string())
}

// The first matching subject pattern decides, even if cleanup leaves nothing.
fn from_subject_patterns(input: &CompanyInputs<'_>, rules: &Rules) -> Option<String> {
    rules
        .company_subject_patterns()
        .iter()
        .find_map(|re| re.captures(input.subject))
        .map(|caps| clean_company_name(caps.get(1).map_or("", |m| m.as_str())))
}

fn from_body_patterns(input: &CompanyInputs<'_>, rules: &Rules) -> Option<String> {
    rules.company_body_patterns().iter().find_map(|re| {
        let captured = re.captures(input.body)?.get(1)?.as_str();
        (!captured.is_empty() && is_likely_company_name(captured))
            .then(|| clean_company_name(captured))
    })
}

fn from_company_keywords(input: &CompanyInputs<'_>, rules: &Rules) -> Option<String> {
    rules
        .company_keyword_in(input.normalized_text)
        .map(str::to_string)
}

fn from_display_name(input: &CompanyInputs<'_>, _rules: &Rules) -> Option<String> {
    let name = input.sender?.name.as_deref()?;
    (!name.contains('@') && is_likely_company_name(name)).then(|| clean_company_name(name))
}

fn from_sender_domain(input: &CompanyInputs<'_>, rules: &Rules) -> Option<String> {
    let sender = input.sender?;
    // Second-to-last label, in the address's own case
    let (_, domain) = sender.address.rsplit_once('@')?;
    let candidate = domain.rsplit('.').nth(1)?;
    let address = sender.address.to_lowercase();

    (is_likely_company_name(candidate)
        && !rules.mentions_ats_domain(&address)
        && !rules.mentions_job_board_domain(&address))
    .then(|| clean_company_name(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatternConfig;

    fn rules() -> Rules {
        Rules::compile(&PatternConfig {
            company_name_patterns: vec![
                r"application to (.+)".into(),
                r"^Sincerely,\s*\n(.+)$".into(),
            ],
            known_ats_domains: vec!["greenhouse.io".into()],
            known_job_board_domains: vec!["linkedin.com".into()],
            specific_company_keywords: vec!["Initech".into()],
            ..PatternConfig::default()
        })
    }

    fn inputs<'a>(
        subject: &'a str,
        body: &'a str,
        normalized_text: &'a str,
        sender: Option<&'a SenderAddress>,
    ) -> CompanyInputs<'a> {
        CompanyInputs {
            subject,
            body,
            normalized_text,
            sender,
        }
    }

    #[test]
    fn test_subject_strategy_cleans_capture() {
        let input = inputs("Update on your application to Acme Corp", "", "", None);
        assert_eq!(
            from_subject_patterns(&input, &rules()).as_deref(),
            Some("Acme")
        );
    }

    #[test]
    fn test_body_strategy_uses_multiline_anchors() {
        let input = inputs("", "Thanks again.\nSincerely,\nGlobex\n", "", None);
        assert_eq!(from_body_patterns(&input, &rules()).as_deref(), Some("Globex"));
    }

    #[test]
    fn test_body_strategy_rejects_implausible_capture() {
        let input = inputs("", "Sincerely,\nThe Hiring Team <jobs@x.com>\n", "", None);
        assert_eq!(from_body_patterns(&input, &rules()), None);
    }

    #[test]
    fn test_keyword_strategy_returns_verbatim() {
        let input = inputs("", "", "your initech application", None);
        assert_eq!(
            from_company_keywords(&input, &rules()).as_deref(),
            Some("Initech")
        );
    }

    #[test]
    fn test_display_name_strategy() {
        let sender = SenderAddress::parse("Umbrella Careers <jobs@umbrella.com>").unwrap();
        let input = inputs("", "", "", Some(&sender));
        assert_eq!(
            from_display_name(&input, &rules()).as_deref(),
            Some("Umbrella")
        );
    }

    #[test]
    fn test_domain_strategy_skips_ats_senders() {
        let ats = SenderAddress::parse("no-reply@us.greenhouse.io").unwrap();
        assert_eq!(from_sender_domain(&inputs("", "", "", Some(&ats)), &rules()), None);

        let direct = SenderAddress::parse("recruiting@mail.hooli.com").unwrap();
        assert_eq!(
            from_sender_domain(&inputs("", "", "", Some(&direct)), &rules()).as_deref(),
            Some("hooli")
        );
    }
}
