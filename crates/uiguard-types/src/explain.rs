//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check looks for and why it matters.
    pub description: &'static str,
    /// How to fix findings.
    pub remediation: &'static str,
    /// Before/after SwiftUI examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a finding.
    pub before: &'static str,
    /// Code that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_A11Y_UNLABELED_IMAGES => Some(explain_unlabeled_images()),
        ids::CHECK_A11Y_UNLABELED_CONTROLS => Some(explain_unlabeled_controls()),
        ids::CHECK_A11Y_NO_TEXT_CONTENT => Some(explain_no_text_content()),
        ids::CHECK_A11Y_INACCESSIBLE_GESTURES => Some(explain_inaccessible_gestures()),
        ids::CHECK_A11Y_COLOR_ONLY_INFORMATION => Some(explain_color_only_information()),

        // Codes
        ids::CODE_IMAGE_MISSING_LABEL => Some(explain_image_missing_label()),
        ids::CODE_BUTTON_MISSING_ACCESSIBILITY => Some(explain_unlabeled_controls()),
        ids::CODE_VIEW_WITHOUT_TEXT => Some(explain_no_text_content()),
        ids::CODE_GESTURE_MISSING_ACTION => Some(explain_inaccessible_gestures()),
        ids::CODE_COLOR_WITHOUT_INDICATOR => Some(explain_color_only_information()),

        _ => None,
    }
}

/// List all known check IDs, in evaluation order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_A11Y_UNLABELED_IMAGES,
        ids::CHECK_A11Y_UNLABELED_CONTROLS,
        ids::CHECK_A11Y_NO_TEXT_CONTENT,
        ids::CHECK_A11Y_INACCESSIBLE_GESTURES,
        ids::CHECK_A11Y_COLOR_ONLY_INFORMATION,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_IMAGE_MISSING_LABEL,
        ids::CODE_BUTTON_MISSING_ACCESSIBILITY,
        ids::CODE_VIEW_WITHOUT_TEXT,
        ids::CODE_GESTURE_MISSING_ACTION,
        ids::CODE_COLOR_WITHOUT_INDICATOR,
    ]
}

// --- Check-level explanations ---

fn explain_unlabeled_images() -> Explanation {
    Explanation {
        title: "Unlabeled Images",
        description: "\
Detects views that instantiate an `Image(...)` while no accessibility label is
attached anywhere in the same source text.

VoiceOver reads an unlabeled image as its asset name, or skips it entirely.
Either way the user loses whatever the image was meant to convey.

The check is a textual co-occurrence heuristic: a single `.accessibilityLabel(`
anywhere in the file satisfies it, even if it belongs to a different view.",
        remediation: "\
Attach a short, descriptive label to every meaningful image:

    Image(\"chart\").accessibilityLabel(\"Sales grew 12% this quarter\")

Purely decorative images should be hidden instead:

    Image(decorative: \"divider\")
    Image(\"divider\").accessibilityHidden(true)",
        examples: ExamplePair {
            before: r#"Image("profile-photo")
    .resizable()
    .frame(width: 48, height: 48)"#,
            after: r#"Image("profile-photo")
    .resizable()
    .frame(width: 48, height: 48)
    .accessibilityLabel("Profile photo of Jordan")"#,
        },
    }
}

fn explain_unlabeled_controls() -> Explanation {
    Explanation {
        title: "Buttons Without Accessibility Context",
        description: "\
Detects `Button(...)` instantiations in source text that never mentions
accessibility at all.

Buttons built from icons or custom views often have no spoken name. The check is
deliberately coarse: any occurrence of the word \"accessibility\" (any case)
anywhere in the text suppresses it.",
        remediation: "\
Give icon-only and custom buttons a label, and a hint where the outcome is not
obvious:

    Button(action: share) { Image(systemName: \"square.and.arrow.up\") }
        .accessibilityLabel(\"Share\")
        .accessibilityHint(\"Opens the share sheet\")",
        examples: ExamplePair {
            before: r#"Button(action: toggleFavorite) {
    Image(systemName: "star")
}"#,
            after: r#"Button(action: toggleFavorite) {
    Image(systemName: "star")
}
.accessibilityLabel("Favorite")"#,
        },
    }
}

fn explain_no_text_content() -> Explanation {
    Explanation {
        title: "No Textual Content",
        description: "\
Detects view source longer than 100 characters that contains neither a
`Text(...)` nor a `Label(...)` element.

A view without any text may give screen readers nothing to announce. Short
fragments are exempt because they are usually partial snippets rather than
whole views.",
        remediation: "\
Make sure the view exposes readable content, either as visible `Text`/`Label`
elements or through accessibility labels on the container:

    VStack { ... }
        .accessibilityElement(children: .combine)
        .accessibilityLabel(\"Battery at 80 percent\")",
        examples: ExamplePair {
            before: r#"HStack {
    Circle().fill(Color.green).frame(width: 12, height: 12)
    Rectangle().frame(width: 80, height: 4)
}"#,
            after: r#"HStack {
    Circle().fill(Color.green).frame(width: 12, height: 12)
    Text("Online")
}"#,
        },
    }
}

fn explain_inaccessible_gestures() -> Explanation {
    Explanation {
        title: "Inaccessible Custom Gestures",
        description: "\
Detects `.onTapGesture` or `.gesture(...)` modifiers when no
`.accessibilityAction(...)` is attached anywhere in the source text.

Custom gestures are invisible to VoiceOver and Switch Control unless the same
behaviour is exposed as an accessibility action.",
        remediation: "\
Expose the gesture's effect as an accessibility action, or prefer a `Button`
which is accessible by default:

    card
        .onTapGesture { open() }
        .accessibilityAction { open() }",
        examples: ExamplePair {
            before: r#"CardView(item: item)
    .onTapGesture { open(item) }"#,
            after: r#"CardView(item: item)
    .onTapGesture { open(item) }
    .accessibilityAction { open(item) }"#,
        },
    }
}

fn explain_color_only_information() -> Explanation {
    Explanation {
        title: "Color-Only Information",
        description: "\
Detects color usage (`color:`, `foregroundColor`, `background(Color`) in source
text that contains no shape or icon indicator (`Image`, `SF`, `Symbol`,
`Circle`, `Rectangle`, `shape`).

Users with color vision deficiencies cannot rely on hue alone to tell states
apart.",
        remediation: "\
Pair color with a second cue: an SF Symbol, a shape, or text.

    HStack {
        Image(systemName: \"exclamationmark.triangle.fill\")
        Text(\"Overdue\")
    }
    .foregroundColor(.red)",
        examples: ExamplePair {
            before: r#"Text(item.title)
    .foregroundColor(item.isOverdue ? .red : .primary)"#,
            after: r#"HStack {
    if item.isOverdue { Image(systemName: "exclamationmark.circle") }
    Text(item.title)
}
.foregroundColor(item.isOverdue ? .red : .primary)"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_image_missing_label() -> Explanation {
    let mut exp = explain_unlabeled_images();
    exp.title = "Image Missing Accessibility Label";
    exp
}
