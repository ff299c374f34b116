//! `hig-advisor`: match SwiftUI source against local Human Interface Guidelines notes.

use camino::Utf8PathBuf;
use clap::Parser;
use uiguard_app::{render_advice, run_advise};
use uiguard_cli::{FormatArg, init_logging, read_source_or_exit};
use uiguard_guides::{CorpusError, DEFAULT_GUIDES_ROOT, load_corpus};

#[derive(Parser, Debug)]
#[command(
    name = "hig-advisor",
    version,
    about = "Suggest Human Interface Guidelines for SwiftUI code"
)]
struct Cli {
    /// Directory holding the guide documents (`*.md`).
    #[arg(long, default_value = DEFAULT_GUIDES_ROOT)]
    root: Utf8PathBuf,

    /// File to analyze (reads standard input when omitted).
    #[arg(long)]
    file: Option<Utf8PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Log debug diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // The corpus is loaded first so a bad root fails before stdin is consumed.
    let loaded = match load_corpus(&cli.root) {
        Ok(loaded) => loaded,
        Err(err @ CorpusError::DirectoryNotFound(_)) => {
            eprintln!("❌ Error: {}", err);
            std::process::exit(1);
        }
        Err(err @ CorpusError::Empty(_)) => {
            eprintln!("⚠️  Warning: {}", err);
            std::process::exit(1);
        }
    };

    let text = read_source_or_exit(cli.file.as_deref());

    let report = run_advise(&text, &loaded);
    print!("{}", render_advice(&report, cli.format.into())?);
    Ok(())
}
