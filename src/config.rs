//! Pattern configuration and its compiled rule set

use crate::error::{ClassifyError, Result};
use crate::types::UNKNOWN;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Placeholder in title patterns replaced by the escaped company name
pub const COMPANY_PLACEHOLDER: &str = "#{companyName}";

/// Caller-supplied patterns and keyword/domain lists.
///
/// Every option group is required when deserializing; lists may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatternConfig {
    /// Regexes with one capture group yielding the company name
    pub company_name_patterns: Vec<String>,

    /// Regexes with one capture group yielding the job title; may contain
    /// [`COMPANY_PLACEHOLDER`]
    pub job_title_patterns: Vec<String>,

    pub known_ats_domains: Vec<String>,

    pub known_job_board_domains: Vec<String>,

    /// Free-mail and other non-company sending domains
    pub generic_domains: Vec<String>,

    /// Literal company names searched for in the email text
    pub specific_company_keywords: Vec<String>,

    pub rejection_keywords: Vec<String>,

    pub original_application_keywords: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    extraction_patterns: ExtractionPatterns,
    domain_lists: DomainLists,
    keyword_lists: KeywordLists,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionPatterns {
    company_name_patterns: Vec<String>,
    job_title_patterns: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DomainLists {
    known_ats_domains: Vec<String>,
    known_job_board_domains: Vec<String>,
    generic_domains: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeywordLists {
    specific_company_keywords: Vec<String>,
    rejection_keywords: Vec<String>,
    original_application_keywords: Vec<String>,
}

impl From<AppSettings> for PatternConfig {
    fn from(settings: AppSettings) -> Self {
        Self {
            company_name_patterns: settings.extraction_patterns.company_name_patterns,
            job_title_patterns: settings.extraction_patterns.job_title_patterns,
            known_ats_domains: settings.domain_lists.known_ats_domains,
            known_job_board_domains: settings.domain_lists.known_job_board_domains,
            generic_domains: settings.domain_lists.generic_domains,
            specific_company_keywords: settings.keyword_lists.specific_company_keywords,
            rejection_keywords: settings.keyword_lists.rejection_keywords,
            original_application_keywords: settings.keyword_lists.original_application_keywords,
        }
    }
}

impl PatternConfig {
    /// Load the flat layout, one key per option group.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the nested application-settings layout.
    ///
    /// Reads `extractionPatterns`, `domainLists` and `keywordLists`; any other
    /// section (mailbox credentials, output settings) is ignored.
    pub fn from_app_settings(json: &str) -> Result<Self> {
        let settings: AppSettings = serde_json::from_str(json)?;
        Ok(settings.into())
    }

    /// Compile every pattern and report the first one that fails.
    ///
    /// Classification tolerates bad patterns (they never match), so this is
    /// only for callers that want to fail fast at startup.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.company_name_patterns {
            build_regex(pattern, true).map_err(|e| invalid_pattern(pattern, &e))?;
        }
        for pattern in &self.job_title_patterns {
            let concrete = pattern.replace(COMPANY_PLACEHOLDER, &regex::escape("Example Co"));
            build_regex(&concrete, false).map_err(|e| invalid_pattern(pattern, &e))?;
        }
        Ok(())
    }
}

fn invalid_pattern(pattern: &str, error: &regex::Error) -> ClassifyError {
    ClassifyError::InvalidPattern {
        pattern: pattern.to_string(),
        details: error.to_string(),
    }
}

fn build_regex(pattern: &str, multi_line: bool) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(multi_line)
        .build()
}

fn compile_all(patterns: &[String], multi_line: bool) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match build_regex(pattern, multi_line) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Skipping pattern {:?}: {}", pattern, e);
                None
            }
        })
        .collect()
}

fn lowercase_entries(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// A job-title pattern, compiled once or kept as a per-company template
#[derive(Debug, Clone)]
pub enum TitlePattern {
    Static(Regex),
    Template(String),
}

impl TitlePattern {
    fn compile(pattern: &str) -> Option<Self> {
        if pattern.contains(COMPANY_PLACEHOLDER) {
            return Some(Self::Template(pattern.to_string()));
        }
        match build_regex(pattern, false) {
            Ok(re) => Some(Self::Static(re)),
            Err(e) => {
                warn!("Skipping title pattern {:?}: {}", pattern, e);
                None
            }
        }
    }

    /// The regex to run for an email whose company resolved to `company_name`.
    ///
    /// Templates yield `None` while the company is unknown, or when the
    /// substituted pattern does not compile.
    #[must_use]
    pub fn for_company(&self, company_name: &str) -> Option<Cow<'_, Regex>> {
        match self {
            Self::Static(re) => Some(Cow::Borrowed(re)),
            Self::Template(template) => {
                if company_name == UNKNOWN || company_name.trim().is_empty() {
                    return None;
                }
                let concrete =
                    template.replace(COMPANY_PLACEHOLDER, &regex::escape(company_name));
                match build_regex(&concrete, false) {
                    Ok(re) => Some(Cow::Owned(re)),
                    Err(e) => {
                        debug!("Title template failed for {}: {}", company_name, e);
                        None
                    }
                }
            }
        }
    }
}

/// Immutable, compiled view of a [`PatternConfig`] shared by all resolvers.
///
/// Domain and keyword entries are lowercased and blank ones dropped, so
/// every lookup here is case-insensitive.
#[derive(Debug, Clone)]
pub struct Rules {
    company_subject_patterns: Vec<Regex>,
    company_body_patterns: Vec<Regex>,
    title_patterns: Vec<TitlePattern>,
    ats_domains: Vec<String>,
    job_board_domains: Vec<String>,
    generic_domains: HashSet<String>,
    company_keywords: Vec<(String, String)>,
    rejection_keywords: Vec<String>,
    application_keywords: Vec<String>,
}

impl Rules {
    /// Compile a configuration. Patterns that fail to compile are logged and
    /// dropped.
    #[must_use]
    pub fn compile(config: &PatternConfig) -> Self {
        let company_keywords = config
            .specific_company_keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .map(|k| (k.clone(), k.to_lowercase()))
            .collect();

        Self {
            company_subject_patterns: compile_all(&config.company_name_patterns, false),
            company_body_patterns: compile_all(&config.company_name_patterns, true),
            title_patterns: config
                .job_title_patterns
                .iter()
                .filter_map(|p| TitlePattern::compile(p))
                .collect(),
            ats_domains: lowercase_entries(&config.known_ats_domains),
            job_board_domains: lowercase_entries(&config.known_job_board_domains),
            generic_domains: lowercase_entries(&config.generic_domains)
                .into_iter()
                .collect(),
            company_keywords,
            rejection_keywords: lowercase_entries(&config.rejection_keywords),
            application_keywords: lowercase_entries(&config.original_application_keywords),
        }
    }

    /// Company patterns for subject lines (case-insensitive)
    #[must_use]
    pub const fn company_subject_patterns(&self) -> &[Regex] {
        self.company_subject_patterns.as_slice()
    }

    /// Company patterns for bodies (case-insensitive, multi-line)
    #[must_use]
    pub const fn company_body_patterns(&self) -> &[Regex] {
        self.company_body_patterns.as_slice()
    }

    #[must_use]
    pub const fn title_patterns(&self) -> &[TitlePattern] {
        self.title_patterns.as_slice()
    }

    /// First configured company keyword found in `normalized_text`, verbatim.
    #[must_use]
    pub fn company_keyword_in(&self, normalized_text: &str) -> Option<&str> {
        self.company_keywords
            .iter()
            .find(|(_, lowered)| normalized_text.contains(lowered.as_str()))
            .map(|(verbatim, _)| verbatim.as_str())
    }

    /// Whether `haystack` contains any known ATS domain
    #[must_use]
    pub fn mentions_ats_domain(&self, haystack: &str) -> bool {
        contains_any(haystack, &self.ats_domains)
    }

    /// Whether `haystack` contains any known job-board domain
    #[must_use]
    pub fn mentions_job_board_domain(&self, haystack: &str) -> bool {
        contains_any(haystack, &self.job_board_domains)
    }

    /// Exact, case-insensitive membership. An empty domain counts as generic.
    #[must_use]
    pub fn is_generic_domain(&self, domain: &str) -> bool {
        domain.is_empty() || self.generic_domains.contains(&domain.to_lowercase())
    }

    #[must_use]
    pub fn has_rejection_keyword(&self, normalized_text: &str) -> bool {
        contains_any(normalized_text, &self.rejection_keywords)
    }

    #[must_use]
    pub fn has_application_keyword(&self, normalized_text: &str) -> bool {
        contains_any(normalized_text, &self.application_keywords)
    }
}

impl From<&PatternConfig> for Rules {
    fn from(config: &PatternConfig) -> Self {
        Self::compile(config)
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}
