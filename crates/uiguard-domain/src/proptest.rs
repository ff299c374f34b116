//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Scan determinism and tier membership
//! - The fragment-length boundary
//! - Topic classification and fallback
//! - Extraction and assembly limits

use crate::advice::advise;
use crate::engine::scan;
use crate::extract::extract_points;
use crate::policy::{AdvicePolicy, ScanPolicy};
use crate::test_support::{bullets, codes, corpus};
use crate::topics::{Topic, classify};
use proptest::prelude::*;
use uiguard_types::{AdviceEntry, Severity, ids};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Fragments of SwiftUI-ish source, mixed with arbitrary noise.
fn arb_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(r#"Image("photo")"#.to_string()),
        Just(r#".accessibilityLabel("Photo")"#.to_string()),
        Just(r#"Button("Go") { go() }"#.to_string()),
        Just(r#"Text("Hello")"#.to_string()),
        Just(r#"Label("Inbox", systemImage: "tray")"#.to_string()),
        Just(".onTapGesture { open() }".to_string()),
        Just(".accessibilityAction { open() }".to_string()),
        Just(".foregroundColor(.red)".to_string()),
        Just("Circle()".to_string()),
        Just("VStack { Spacer() }".to_string()),
        "[ -~]{0,40}",
    ]
}

fn arb_source() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_fragment(), 0..12).prop_map(|parts| parts.join("\n"))
}

/// Text over an alphabet that cannot spell any topic keyword.
fn arb_keyword_free() -> impl Strategy<Value = String> {
    prop::string::string_regex("[XYZxyz0-9 {}().\n]{0,80}").unwrap()
}

/// A document of arbitrary lines, some of which are advisory.
fn arb_document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("- bullet".to_string()),
            Just("* star".to_string()),
            Just("• dot".to_string()),
            Just("1. numbered".to_string()),
            Just("# Heading".to_string()),
            "[a-z ]{0,20}",
        ],
        0..20,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn scan_is_idempotent(text in arb_source()) {
        let policy = ScanPolicy::default();
        prop_assert_eq!(scan(&text, &policy), scan(&text, &policy));
    }

    #[test]
    fn every_finding_sits_in_its_own_tier(text in arb_source()) {
        let report = scan(&text, &ScanPolicy::default());
        prop_assert!(report.issues.iter().all(|f| f.severity == Severity::Issue));
        prop_assert!(report.warnings.iter().all(|f| f.severity == Severity::Warning));
        prop_assert!(report.issues.len() <= 2);
        prop_assert!(report.warnings.len() <= 3);
    }

    #[test]
    fn image_without_label_yields_exactly_one_image_issue(
        prefix in "[a-z ]{0,40}",
        suffix in "[a-z ]{0,40}",
    ) {
        let text = format!(r#"{prefix}Image("x"){suffix}"#);
        let report = scan(&text, &ScanPolicy::default());
        let image_issues = codes(&report.issues)
            .into_iter()
            .filter(|c| *c == ids::CODE_IMAGE_MISSING_LABEL)
            .count();
        prop_assert_eq!(image_issues, 1);

        let labeled = format!(r#"{text} .accessibilityLabel("x")"#);
        let report = scan(&labeled, &ScanPolicy::default());
        prop_assert!(!codes(&report.issues).contains(&ids::CODE_IMAGE_MISSING_LABEL));
    }

    #[test]
    fn short_text_never_lacks_text_content(text in "[a-z {}()]{0,100}") {
        let report = scan(&text, &ScanPolicy::default());
        prop_assert!(!codes(&report.issues).contains(&ids::CODE_VIEW_WITHOUT_TEXT));
    }

    #[test]
    fn longer_text_without_text_elements_is_flagged(text in "[a-z {}()]{101,200}") {
        let report = scan(&text, &ScanPolicy::default());
        prop_assert!(codes(&report.issues).contains(&ids::CODE_VIEW_WITHOUT_TEXT));
    }

    #[test]
    fn button_without_navigation_keywords_is_exactly_actions(
        prefix in arb_keyword_free(),
        suffix in arb_keyword_free(),
    ) {
        let m = classify(&format!("{prefix}BUTTON{suffix}"));
        prop_assert_eq!(m.topics(), &[Topic::Actions]);
        prop_assert!(!m.is_general());
    }

    #[test]
    fn keyword_free_text_selects_every_topic_with_notice(text in arb_keyword_free()) {
        let m = classify(&text);
        prop_assert!(m.is_general());
        prop_assert_eq!(m.topics(), &Topic::ALL);

        let advice = advise(&text, &corpus(2, 2), &AdvicePolicy::default());
        prop_assert_eq!(advice.entries.first(), Some(&AdviceEntry::GeneralNotice));
    }

    #[test]
    fn extraction_never_exceeds_cap(doc in arb_document(), max in 0usize..6) {
        prop_assert!(extract_points(&doc, max).len() <= max);
    }

    #[test]
    fn assembly_respects_both_caps(
        text in arb_source(),
        nav in 0usize..8,
        act in 0usize..8,
    ) {
        let policy = AdvicePolicy::default();
        let advice = advise(&text, &corpus(nav, act), &policy);
        prop_assert!(advice.entries.len() <= policy.max_recommendations);

        for guide in ["navigation", "actions"] {
            let points = advice
                .entries
                .iter()
                .filter(|e| matches!(e, AdviceEntry::Point { guide: g, .. } if g == guide))
                .count();
            prop_assert!(points <= policy.max_points_per_guide);
        }
    }
}

#[test]
fn bullets_helper_produces_advisory_lines() {
    assert_eq!(extract_points(&bullets(4, "x"), 10).len(), 4);
}
