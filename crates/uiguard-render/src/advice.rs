use crate::SEPARATOR;
use uiguard_types::{AdviceEntry, AdviceReport};

const GENERAL_NOTICE: &str =
    "🔍 No specific keywords detected. Providing general HIG recommendations:";

pub fn render_advice_text(report: &AdviceReport) -> String {
    let mut out = String::new();

    out.push_str("🎨 HIG Advisor Analysis\n");
    out.push_str(SEPARATOR);
    out.push('\n');

    if report.recommendations.is_empty() {
        out.push_str("✅ No specific recommendations. Code looks good!\n");
    } else {
        for entry in &report.recommendations {
            match entry {
                AdviceEntry::GeneralNotice => out.push_str(GENERAL_NOTICE),
                AdviceEntry::GuideHeader { guide } => {
                    out.push_str(&format!("\n📘 From {}.md:", guide));
                }
                AdviceEntry::Point { text, .. } => out.push_str(&format!("  {}", text)),
            }
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!(
        "📚 Loaded guides: {}\n",
        report.loaded_guides.join(", ")
    ));

    out
}
