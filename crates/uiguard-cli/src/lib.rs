//! Pieces shared by the `a11y-check` and `hig-advisor` binaries.
//!
//! Each binary is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `uiguard-app` crate.

#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::ValueEnum;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use uiguard_app::{OutputFormat, read_source};

/// Crates whose events are raised to `debug` by `--verbose`.
const UIGUARD_TARGETS: [&str; 3] = ["uiguard_app", "uiguard_guides", "uiguard_cli"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `verbose` when set.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read the input for a scan, or print the read failure and exit 1.
pub fn read_source_or_exit(file: Option<&Utf8Path>) -> String {
    match read_source(file) {
        Ok(text) => {
            debug!(
                "read {} bytes from {}",
                text.len(),
                file.map_or("stdin", Utf8Path::as_str)
            );
            text
        }
        Err(err) => {
            eprintln!("❌ {}", err);
            std::process::exit(1);
        }
    }
}

fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    let mut directives = String::from("warn");
    for target in UIGUARD_TARGETS {
        directives.push_str(&format!(",{}={}", target, level));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_directives_keep_everything_at_warn() {
        assert_eq!(
            default_directives(false),
            "warn,uiguard_app=warn,uiguard_guides=warn,uiguard_cli=warn"
        );
    }

    #[test]
    fn verbose_directives_raise_uiguard_crates() {
        let directives = default_directives(true);
        assert!(directives.starts_with("warn,"));
        for target in UIGUARD_TARGETS {
            assert!(directives.contains(&format!("{}=debug", target)));
        }
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn format_arg_maps_to_output_format() {
        assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
    }
}
