use clap::builder::{NonEmptyStringValueParser, TypedValueParser};
use clap::{Parser, Subcommand};
use docs_nav::generate::{self, Mode, Options};
use docs_nav::{labels, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docs-nav")]
#[command(version, about = "Generate docs.json navigation from the content tree")]
#[command(long_about = "\
Generate docs.json navigation from the content tree

Folder depth decides the navigation structure:

  <content-root>/
  ├── docs.json
  ├── docs-nav.toml                # Label overrides (optional, see gen-labels)
  └── en/                          # Language
      └── ai/                      # Product          → \"AI\"
          └── guides/              # Tab              → \"Guides\"
              ├── setup.md         # Default group    → \"Default\"
              └── basics/          # Named group      → \"Basics\"
                  ├── index.md     # Listed first
                  └── deep/more.md # Nested pages join the group

Languages processed (first match wins):
  --languages list → navigation.languages in docs.json → content-root dirs

Only navigation.languages (and navbar, if missing) are written; every other
field of docs.json is kept as-is.")]
struct Cli {
    /// Path to the configuration document
    #[arg(long, default_value = "docs.json", value_parser = non_empty_path())]
    docs: PathBuf,

    /// Content root whose subdirectories are languages
    #[arg(long, default_value = ".", value_parser = non_empty_path())]
    content_root: PathBuf,

    /// Comma-separated languages to process, e.g. "en,zh-Hans"
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    languages: Option<String>,

    /// Print the generated language nodes instead of writing docs.json
    #[arg(long)]
    dry_run: bool,

    /// Label overrides file (default: <content-root>/docs-nav.toml if present)
    #[arg(long, value_parser = non_empty_path())]
    labels: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Path argument that rejects an empty value, like `--languages`.
fn non_empty_path() -> impl TypedValueParser<Value = PathBuf> {
    NonEmptyStringValueParser::new().map(PathBuf::from)
}

#[derive(Subcommand)]
enum Command {
    /// Print the stock label tables as a documented docs-nav.toml
    GenLabels,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Command::GenLabels) = cli.command {
        print!("{}", labels::stock_labels_toml()?);
        return Ok(());
    }

    let mode = if cli.dry_run {
        Mode::Preview
    } else {
        Mode::Commit
    };
    let options = Options {
        docs_path: cli.docs,
        content_root: cli.content_root,
        languages: cli.languages,
        labels_path: cli.labels,
        mode,
    };

    let outcome = generate::run(&options)?;
    match mode {
        Mode::Preview => print!("{}", outcome.preview.unwrap_or_default()),
        Mode::Commit => {
            output::print_commit_output(&options.docs_path, &outcome.nodes, outcome.added_navbar)
        }
    }

    Ok(())
}

/// Logs go to stderr so `--dry-run` output on stdout stays valid JSON.
///
/// `--verbose` forces debug; otherwise `RUST_LOG` decides, defaulting to warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
