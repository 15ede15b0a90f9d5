//! mdforge - generate a Markdown report from tabular data

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use mdforge::config::DocumentOptions;
use mdforge::document::{Document, Section};
use mdforge::ingest::ReaderFactory;

/// Generate a Markdown report from a CSV or JSON data file
#[derive(Parser, Debug)]
#[command(name = "mdforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data file to render (CSV or JSON)
    input: PathBuf,

    /// Document title
    #[arg(short, long, default_value = "Report")]
    title: String,

    /// Section title for the generated table
    #[arg(short, long, default_value = "Data")]
    section: String,

    /// Heading rendered above the table
    #[arg(long)]
    table_title: Option<String>,

    /// Column to sort the table by (comma-separated; first name wins)
    #[arg(long)]
    sort_by: Option<String>,

    /// Sort in reverse order
    #[arg(long)]
    reverse: bool,

    /// Add a table of contents
    #[arg(long)]
    toc: bool,

    /// Write the document to this path instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    force: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_error(error: &anyhow::Error) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "error:");
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {:#}", error);
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let factory = ReaderFactory::new();
    let mut table = factory
        .read(&cli.input)
        .with_context(|| format!("Failed to read data file: {}", cli.input.display()))?;

    table.options.title = cli.table_title;
    table.options.sort_key = cli.sort_by;
    table.options.sort_reverse = cli.reverse;

    // stdout mode never touches the destination, so the existence check
    // only applies when --output is given
    let to_file = cli.output.is_some();
    let path = cli.output.unwrap_or_else(|| PathBuf::from("report.md"));
    let options = DocumentOptions::new()
        .with_overwrite(cli.force || !to_file)
        .with_table_of_contents(cli.toc);

    let mut document = Document::new(cli.title.as_str(), path, options)?;
    let mut section = Section::new(cli.section.as_str());
    section
        .add_table(&mut table)
        .context("Failed to render table")?;
    document.add_section(section);

    if to_file {
        document
            .save()
            .with_context(|| format!("Failed to write {}", document.path.display()))?;
    } else {
        print!("{}", document);
    }

    Ok(())
}
