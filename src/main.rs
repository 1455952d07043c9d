use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use fretboard::{chord_types, to_html, to_text, visualize, FretboardError, Selection, NOTE_NAMES};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fretboard")]
#[command(about = "Show the notes of a chord on a guitar fretboard")]
#[command(version)]
struct Cli {
    /// Root note (C, C#, D, ... B)
    #[arg(required_unless_present_any = ["config", "list"])]
    root: Option<String>,

    /// Chord type (maj, m, 7, m7, maj7, ...)
    #[arg(required_unless_present_any = ["config", "list"])]
    chord_type: Option<String>,

    /// Read the selection from a YAML file instead
    #[arg(short, long, conflicts_with_all = ["root", "chord_type"])]
    config: Option<PathBuf>,

    /// Number of frets to show, at most 23 (overrides the config file)
    #[arg(long)]
    frets: Option<u8>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the rendered board to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List note names and chord types, then exit
    #[arg(long)]
    list: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), FretboardError> {
    if cli.list {
        println!("Notes: {}", NOTE_NAMES.join(", "));
        println!("Chord types: {}", chord_types().collect::<Vec<_>>().join(", "));
        return Ok(());
    }

    let mut selection = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading selection");
            Selection::from_yaml(&fs::read_to_string(path)?)?
        }
        None => Selection::new(
            cli.root.unwrap_or_default(),
            cli.chord_type.unwrap_or_default(),
        ),
    };
    if let Some(frets) = cli.frets {
        selection.frets = Some(frets);
    }

    let view = visualize(&selection)?;

    let rendered = match cli.format {
        Format::Text => to_text(&view.board),
        Format::Html => to_html(&view.board),
        Format::Json => serde_json::to_string_pretty(&view)? + "\n",
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, &rendered)?;
            println!("{}", view.summary);
            eprintln!("Wrote fretboard to {}", path.display());
        }
        None => {
            if !matches!(cli.format, Format::Json) {
                println!("{}", view.summary);
            }
            print!("{}", rendered);
        }
    }

    Ok(())
}
