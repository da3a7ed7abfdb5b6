// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Job-application email classifier
//!
//! Turns recruiting email into structured application records using an
//! ordered cascade of caller-configured patterns and heuristics.
//!
//! # Features
//!
//! - Company name from subject/body patterns, keywords, or the sender
//! - Job title with requisition, location and boilerplate cleanup
//! - Direct employer vs. ATS / job board detection
//! - Rejection / original application / other status
//! - Deterministic, timestamp-ordered batch output
//!
//! # Example
//!
//! ```rust
//! use application_extract::{ApplicationStatus, Classifier, PatternConfig, RawEmail};
//!
//! let config = PatternConfig {
//!     company_name_patterns: vec![r"application to (.+)".into()],
//!     rejection_keywords: vec!["unfortunately".into()],
//!     ..PatternConfig::default()
//! };
//! let classifier = Classifier::new(&config);
//!
//! let record = classifier.classify(RawEmail::new(
//!     "2024-05-02T09:15:00+00:00",
//!     "Acme Recruiting <jobs@acme.com>",
//!     "Update on your application to Acme Corp",
//!     "Unfortunately we will not be moving forward.",
//!     "https://mail.example.com/1",
//! ));
//!
//! assert_eq!(record.company_name, "Acme");
//! assert!(record.is_direct_company);
//! assert_eq!(record.application_status, ApplicationStatus::RejectionReply);
//! ```

mod company;
mod config;
mod direct;
mod error;
mod message;
mod normalize;
mod pipeline;
mod status;
mod title;
mod types;

pub use company::{clean_company_name, is_likely_company_name, resolve_company_name};
pub use config::{COMPANY_PLACEHOLDER, PatternConfig, Rules, TitlePattern};
pub use direct::{domain_token, is_direct_company};
pub use error::{ClassifyError, Result};
pub use normalize::{EARLIEST_INSTANT, normalize_text, parse_timestamp};
pub use pipeline::{Classifier, classify_emails};
pub use status::classify_status;
pub use title::{clean_job_title, is_plausible_title, resolve_job_title};
pub use types::*;
