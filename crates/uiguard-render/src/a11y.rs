use crate::SEPARATOR;
use uiguard_types::{A11yReport, Finding, Severity, ids};

const MANUAL_CHECKS: [&str; 3] = [
    "Test with VoiceOver",
    "Verify Dynamic Type support",
    "Check color contrast ratios",
];

pub fn render_a11y_text(report: &A11yReport) -> String {
    let mut out = String::new();

    out.push_str("♿ A11y Quick Scan\n");
    out.push_str(SEPARATOR);
    out.push('\n');

    if report.issues.is_empty() && report.warnings.is_empty() {
        out.push_str("✅ No obvious accessibility issues detected!\n");
        out.push_str("\n💡 Manual checks still recommended:\n");
        for check in MANUAL_CHECKS {
            out.push_str(&format!("   • {}\n", check));
        }
        return out;
    }

    if !report.issues.is_empty() {
        out.push_str("\n🔴 ISSUES (high priority):\n");
        for f in &report.issues {
            push_finding(&mut out, f);
        }
    }

    if !report.warnings.is_empty() {
        out.push_str("\n🟡 WARNINGS (should review):\n");
        for f in &report.warnings {
            push_finding(&mut out, f);
        }
    }

    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!("📖 Learn more: {}\n", ids::URL_APPLE_ACCESSIBILITY));

    out
}

fn push_finding(out: &mut String, f: &Finding) {
    let glyph = match f.severity {
        Severity::Issue => "🚨",
        // The warning sign is narrow in most terminals; pad it.
        Severity::Warning => "⚠️ ",
    };
    out.push_str(&format!("\n{} {}\n", glyph, f.message));
    if let Some(help) = &f.help {
        out.push_str(&format!("   → {}\n", help));
    }
}
