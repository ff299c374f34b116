//! The `explain` use case: remediation guidance for an accessibility check.

use uiguard_types::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier, with every identifier that would have resolved.
    NotFound {
        identifier: String,
        check_ids: &'static [&'static str],
        codes: &'static [&'static str],
    },
}

/// Resolve a check ID or finding code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let identifier = identifier.trim();
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            check_ids: explain::all_check_ids(),
            codes: explain::all_codes(),
        },
    }
}

pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    push_heading(&mut out, exp.title, '=');
    out.push_str(exp.description.trim_end());
    out.push_str("\n\n");

    push_heading(&mut out, "How to fix", '-');
    out.push_str(exp.remediation.trim_end());
    out.push_str("\n\n");

    push_heading(&mut out, "Example", '-');
    push_swift_block(&mut out, "Flagged:", exp.examples.before);
    out.push('\n');
    push_swift_block(&mut out, "Passes:", exp.examples.after);

    out
}

pub fn format_not_found(identifier: &str, check_ids: &[&str], codes: &[&str]) -> String {
    let mut out = format!("Unknown check_id or code: {}\n", identifier);
    for (label, names) in [("check_ids", check_ids), ("codes", codes)] {
        out.push_str(&format!("\nAvailable {}:\n", label));
        for name in names {
            out.push_str(&format!("  - {}\n", name));
        }
    }
    out
}

fn push_heading(out: &mut String, title: &str, rule: char) {
    out.push_str(title);
    out.push('\n');
    out.extend(std::iter::repeat_n(rule, title.chars().count()));
    out.push_str("\n\n");
}

fn push_swift_block(out: &mut String, label: &str, code: &str) {
    out.push_str(label);
    out.push_str("\n```swift\n");
    out.push_str(code.trim_end());
    out.push_str("\n```\n");
}
