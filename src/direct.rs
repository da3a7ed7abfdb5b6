//! Direct-employer detection

use crate::config::Rules;
use crate::types::{SenderAddress, UNKNOWN};
use regex::Regex;

static DOMAIN_SUFFIX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"\s+(?:inc|llc|ltd|corp|group|labs|solutions|systems|corporation)$").unwrap()
});

/// First word of a company name, lowercased with corporate suffix and
/// `.`/`,` removed, for matching against a sender domain.
#[must_use]
pub fn domain_token(company_name: &str) -> String {
    let lower = company_name.to_lowercase();
    let stripped = DOMAIN_SUFFIX.replace(&lower, "").replace(['.', ','], "");
    stripped.split(' ').next().unwrap_or_default().to_string()
}

/// Decide whether the email was sent by the employer itself.
///
/// Always `false` for an unresolved company or a sender without a domain.
/// When no signal fires either way the answer is `true`, which can
/// overcount unfamiliar intermediaries as direct employers.
#[must_use]
pub fn is_direct_company(
    sender: Option<&SenderAddress>,
    company_name: &str,
    normalized_text: &str,
    rules: &Rules,
) -> bool {
    if company_name == UNKNOWN {
        return false;
    }
    let Some(domain) = sender.and_then(|s| s.domain.as_deref()) else {
        return false;
    };

    if domain.contains(domain_token(company_name).as_str()) && !rules.is_generic_domain(domain) {
        return true;
    }

    // Applicant tracking systems send on the employer's behalf
    if rules.mentions_ats_domain(domain) {
        return true;
    }

    let company = company_name.to_lowercase();
    let team_signatures = [
        format!("{company} talent acquisition"),
        format!("{company} recruiting team"),
        format!("{company} hiring team"),
        format!("the {company} team"),
    ];
    if team_signatures
        .iter()
        .any(|signature| normalized_text.contains(signature.as_str()))
        && rules.is_generic_domain(domain)
    {
        return true;
    }

    if rules.mentions_job_board_domain(domain) {
        return domain.contains("linkedin.com")
            && normalized_text.contains("application for")
            && normalized_text.contains(company.as_str());
    }

    true
}
