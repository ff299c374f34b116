//! `a11y-check`: quick heuristic accessibility scan of SwiftUI source.

use camino::Utf8PathBuf;
use clap::Parser;
use uiguard_app::{
    ExplainOutput, format_explanation, format_not_found, render_scan, run_explain, run_scan,
};
use uiguard_cli::{FormatArg, init_logging, read_source_or_exit};

#[derive(Parser, Debug)]
#[command(
    name = "a11y-check",
    version,
    about = "Quick accessibility scan for SwiftUI code"
)]
struct Cli {
    /// File to check (reads standard input when omitted).
    #[arg(long)]
    file: Option<Utf8PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Explain a check_id (e.g. "a11y.unlabeled_images") or code (e.g. "image_missing_label")
    /// instead of scanning.
    #[arg(long, value_name = "ID")]
    explain: Option<String>,

    /// Log debug diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(identifier) = cli.explain.as_deref() {
        return cmd_explain(identifier);
    }

    let text = read_source_or_exit(cli.file.as_deref());

    let report = run_scan(&text);
    print!("{}", render_scan(&report, cli.format.into())?);
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            check_ids,
            codes,
        } => {
            eprint!("{}", format_not_found(&identifier, check_ids, codes));
            std::process::exit(1);
        }
    }
}
