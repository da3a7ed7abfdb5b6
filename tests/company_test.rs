use application_extract::*;

fn rules() -> Rules {
    Rules::compile(&PatternConfig {
        company_name_patterns: vec![
            r"application to (.+)".into(),
            r"^Best,\s*\n(.+)$".into(),
        ],
        known_ats_domains: vec!["greenhouse.io".into(), "lever.co".into()],
        known_job_board_domains: vec!["linkedin.com".into()],
        generic_domains: vec!["gmail.com".into()],
        specific_company_keywords: vec!["Initech".into()],
        ..PatternConfig::default()
    })
}

fn resolve(from: &str, subject: &str, body: &str) -> String {
    let sender = SenderAddress::parse(from);
    let normalized = normalize_text(subject, body);
    resolve_company_name(subject, body, &normalized, sender.as_ref(), &rules())
}

// --- Cascade ---

#[test]
fn test_subject_pattern_strips_suffix() {
    let company = resolve("", "Update on your application to Acme Corp", "");
    assert_eq!(company, "Acme");
}

#[test]
fn test_subject_pattern_wins_over_keyword_and_sender() {
    let company = resolve(
        "Hooli <jobs@hooli.com>",
        "Your application to Globex",
        "Initech is mentioned here too",
    );
    assert_eq!(company, "Globex");
}

#[test]
fn test_subject_match_decides_even_when_cleaned_away() {
    let company = resolve("Hooli <jobs@hooli.com>", "Your application to Careers", "");
    assert_eq!(company, UNKNOWN);
}

#[test]
fn test_body_pattern_requires_plausible_capture() {
    let company = resolve("", "Next steps", "Talk soon.\nBest,\nVandelay Industries\n");
    assert_eq!(company, "Vandelay Industries");

    let company = resolve("", "Next steps", "Talk soon.\nBest,\nThanks\n");
    assert_eq!(company, UNKNOWN);
}

#[test]
fn test_keyword_is_returned_verbatim() {
    let company = resolve("", "Interview invitation", "The INITECH careers page lists it.");
    assert_eq!(company, "Initech");
}

#[test]
fn test_display_name_fallback() {
    let company = resolve("\"The Umbrella Group\" <hr@umbrella.example>", "Hello", "");
    assert_eq!(company, "Umbrella");
}

#[test]
fn test_display_name_with_at_sign_is_skipped() {
    let company = resolve("\"jobs@hooli.com\" <jobs@hooli.com>", "Hello", "");
    assert_eq!(company, "hooli");
}

#[test]
fn test_sender_domain_fallback() {
    assert_eq!(resolve("recruiting@mail.pied-piper.com", "Hello", ""), "pied-piper");
}

#[test]
fn test_sender_domain_keeps_address_case() {
    assert_eq!(resolve("jobs@Hooli.com", "", ""), "Hooli");
}

#[test]
fn test_unquoted_comma_name_falls_back_to_domain() {
    assert_eq!(resolve("Acme, Inc <jobs@acme.com>", "Next steps", "Hi there"), "acme");
}

#[test]
fn test_ats_sender_without_name_is_unknown() {
    assert_eq!(resolve("jane@greenhouse.io", "Hello", ""), UNKNOWN);
    assert_eq!(resolve("<no-reply@hire.lever.co>", "Hello", ""), UNKNOWN);
}

#[test]
fn test_ats_sender_with_person_name_uses_name() {
    // A person's name passes the plausibility filter
    assert_eq!(resolve("Jane Doe <jane@greenhouse.io>", "Hello", ""), "Jane Doe");
}

#[test]
fn test_job_board_sender_is_unknown() {
    assert_eq!(resolve("jobs-noreply@linkedin.com", "Hello", ""), UNKNOWN);
}

#[test]
fn test_unparsable_sender_is_unknown() {
    assert_eq!(resolve("", "Hello", "Nothing to see"), UNKNOWN);
}

// --- is_likely_company_name ---

#[test]
fn test_likely_company_names() {
    for name in ["Acme", "Procter & Gamble", "O'Reilly Media", "Acme – Labs", "AT/T", "3M"] {
        assert!(is_likely_company_name(name), "{name} should be plausible");
    }
}

#[test]
fn test_unlikely_company_names() {
    let cases = [
        "",
        "   ",
        "A",
        "Dear Candidate",
        "Hello there",
        "Hi Sam",
        "Regards",
        "THANKS",
        "Talent Acquisition",
        "no-reply",
        "12345",
        "jobs@acme.com",
        "<Acme>",
        "One Two Three Four Five Six",
        "Acme, Inc",
        "Acme!",
    ];
    for name in &cases {
        assert!(!is_likely_company_name(name), "{name:?} should be rejected");
    }
}

// --- clean_company_name ---

#[test]
fn test_clean_company_name() {
    let cases = [
        ("Acme Corp", "Acme"),
        ("  Stripe Inc.  ", "Stripe"),
        ("Globex Corporation", "Globex"),
        ("Hooli LLC", "Hooli"),
        ("Vandelay L.P.", "Vandelay"),
        ("The Walt Disney Company", "Walt Disney"),
        ("Umbrella Careers", "Umbrella"),
        ("\"Initech\"", "Initech"),
        ("Massive Dynamic!!", "Massive Dynamic"),
        ("Soylent;", "Soylent"),
        ("Careers", UNKNOWN),
        ("X", UNKNOWN),
        ("   ", UNKNOWN),
    ];
    for (raw, expected) in cases {
        assert_eq!(clean_company_name(raw), expected, "cleaning {raw:?}");
    }
}

#[test]
fn test_clean_strips_single_suffix_only() {
    assert_eq!(clean_company_name("Acme Labs Group"), "Acme Labs");
}
