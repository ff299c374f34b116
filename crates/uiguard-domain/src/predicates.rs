//! Named textual predicates over view source.
//!
//! A [`Construct`] answers "does this text contain something that looks like
//! X?" with a single regular expression over the whole input. It knows
//! nothing about nesting or which modifier belongs to which element.
//! A [`Signal`] is anything a rule can test: a construct, a substring
//! heuristic, or the length gate.

use crate::policy::ScanPolicy;
use regex::Regex;
use std::sync::LazyLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `Image(`; also matches `UIImage(` and friends.
    ImageInstantiation,
    /// `.accessibilityLabel(` or `.accessibility(label:`.
    AccessibilityLabel,
    ButtonInstantiation,
    TextElement,
    LabelElement,
    /// `.onTapGesture` or `.gesture(`.
    CustomGesture,
    AccessibilityAction,
    /// A shape or icon token that can carry meaning besides color.
    ShapeOrIcon,
}

impl Construct {
    /// Every construct, in discriminant order.
    pub const ALL: [Construct; 8] = [
        Construct::ImageInstantiation,
        Construct::AccessibilityLabel,
        Construct::ButtonInstantiation,
        Construct::TextElement,
        Construct::LabelElement,
        Construct::CustomGesture,
        Construct::AccessibilityAction,
        Construct::ShapeOrIcon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Construct::ImageInstantiation => "image_instantiation",
            Construct::AccessibilityLabel => "accessibility_label",
            Construct::ButtonInstantiation => "button_instantiation",
            Construct::TextElement => "text_element",
            Construct::LabelElement => "label_element",
            Construct::CustomGesture => "custom_gesture",
            Construct::AccessibilityAction => "accessibility_action",
            Construct::ShapeOrIcon => "shape_or_icon",
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            Construct::ImageInstantiation => r"Image\s*\(",
            Construct::AccessibilityLabel => {
                r"\.accessibilityLabel\s*\(|\.accessibility\s*\(\s*label:"
            }
            Construct::ButtonInstantiation => r"Button\s*\(",
            Construct::TextElement => r"\bText\s*\(",
            Construct::LabelElement => r"\bLabel\s*\(",
            Construct::CustomGesture => r"\.onTapGesture|\.gesture\(",
            Construct::AccessibilityAction => r"\.accessibilityAction\(",
            Construct::ShapeOrIcon => r"\b(?:Image|SF|Symbol|Circle|Rectangle|shape)\b",
        }
    }

    pub fn is_present(self, text: &str) -> bool {
        COMPILED[self as usize].is_match(text)
    }
}

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Construct::ALL
        .iter()
        .map(|c| Regex::new(c.pattern()).expect("construct patterns are valid regex"))
        .collect()
});

/// Literal substrings that indicate color is being used to style content.
pub const COLOR_INDICATORS: &[&str] = &["color:", "foregroundColor", "background(Color"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Present(Construct),
    /// The word "accessibility" in any case, anywhere in the text.
    MentionsAccessibility,
    /// Any of [`COLOR_INDICATORS`] appears verbatim.
    UsesColor,
    /// More than `ScanPolicy::min_view_chars` characters.
    ExceedsFragmentLength,
}

impl Signal {
    pub fn holds(self, text: &str, policy: &ScanPolicy) -> bool {
        match self {
            Signal::Present(construct) => construct.is_present(text),
            Signal::MentionsAccessibility => text.to_lowercase().contains("accessibility"),
            Signal::UsesColor => COLOR_INDICATORS.iter().any(|needle| text.contains(needle)),
            Signal::ExceedsFragmentLength => text.chars().count() > policy.min_view_chars,
        }
    }
}
