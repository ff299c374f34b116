//! The accessibility rule table.
//!
//! Each rule is data: a trigger signal, the signals that suppress it, a tier,
//! and its advisory text. Adding or removing a check means editing [`RULES`].

use crate::policy::ScanPolicy;
use crate::predicates::{Construct, Signal};
use uiguard_types::{Finding, Severity, ids};

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub check_id: &'static str,
    pub code: &'static str,
    pub severity: Severity,
    pub when: Signal,
    /// Any of these holding suppresses the rule.
    pub unless: &'static [Signal],
    pub message: &'static str,
    pub help: &'static str,
}

impl Rule {
    pub fn fires(&self, text: &str, policy: &ScanPolicy) -> bool {
        self.when.holds(text, policy) && !self.unless.iter().any(|s| s.holds(text, policy))
    }

    pub fn finding(&self) -> Finding {
        Finding {
            severity: self.severity,
            check_id: self.check_id.to_string(),
            code: self.code.to_string(),
            message: self.message.to_string(),
            help: Some(self.help.to_string()),
            url: Some(ids::URL_APPLE_ACCESSIBILITY.to_string()),
        }
    }
}

/// Evaluation order is output order.
pub const RULES: &[Rule] = &[
    Rule {
        check_id: ids::CHECK_A11Y_UNLABELED_IMAGES,
        code: ids::CODE_IMAGE_MISSING_LABEL,
        severity: Severity::Issue,
        when: Signal::Present(Construct::ImageInstantiation),
        unless: &[Signal::Present(Construct::AccessibilityLabel)],
        message: "Images detected without .accessibilityLabel()",
        help: "Add descriptive labels for screen readers",
    },
    Rule {
        check_id: ids::CHECK_A11Y_UNLABELED_CONTROLS,
        code: ids::CODE_BUTTON_MISSING_ACCESSIBILITY,
        severity: Severity::Warning,
        when: Signal::Present(Construct::ButtonInstantiation),
        unless: &[Signal::MentionsAccessibility],
        message: "Buttons detected without accessibility modifiers",
        help: "Consider adding .accessibilityLabel() or .accessibilityHint()",
    },
    Rule {
        check_id: ids::CHECK_A11Y_NO_TEXT_CONTENT,
        code: ids::CODE_VIEW_WITHOUT_TEXT,
        severity: Severity::Issue,
        when: Signal::ExceedsFragmentLength,
        unless: &[
            Signal::Present(Construct::TextElement),
            Signal::Present(Construct::LabelElement),
        ],
        message: "No Text() elements found in view",
        help: "Screen readers may have no content to announce",
    },
    Rule {
        check_id: ids::CHECK_A11Y_INACCESSIBLE_GESTURES,
        code: ids::CODE_GESTURE_MISSING_ACTION,
        severity: Severity::Warning,
        when: Signal::Present(Construct::CustomGesture),
        unless: &[Signal::Present(Construct::AccessibilityAction)],
        message: "Custom gestures detected without .accessibilityAction()",
        help: "Make gestures accessible via VoiceOver",
    },
    Rule {
        check_id: ids::CHECK_A11Y_COLOR_ONLY_INFORMATION,
        code: ids::CODE_COLOR_WITHOUT_INDICATOR,
        severity: Severity::Warning,
        when: Signal::UsesColor,
        unless: &[Signal::Present(Construct::ShapeOrIcon)],
        message: "Color usage detected",
        help: "Ensure information is not conveyed by color alone",
    },
];

pub fn run_all(text: &str, policy: &ScanPolicy, out: &mut Vec<Finding>) {
    for rule in RULES {
        if rule.fires(text, policy) {
            out.push(rule.finding());
        }
    }
}
