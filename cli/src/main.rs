//! mdpane CLI - fetch a Markdown document and render it as HTML

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdpane::{
    CommonMarkOptions, DocumentLoader, DocumentSource, FileSurface, LoadReport, Mdpane,
    MemorySurface, OutputSurface,
};

#[derive(Parser)]
#[command(name = "mdpane")]
#[command(version)]
#[command(about = "Fetch a Markdown document and render it as HTML", long_about = None)]
struct Cli {
    /// Document source: URL or file path
    #[arg(value_name = "SOURCE")]
    source: String,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Treat non-2xx HTTP responses as failures
    #[arg(long)]
    strict_status: bool,

    /// Plain CommonMark, no extensions (tables, strikethrough, ...)
    #[arg(long)]
    no_extensions: bool,

    /// Print the fetched text without conversion
    #[arg(long)]
    raw: bool,

    /// Print a JSON load report after rendering
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run(cli)) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = DocumentSource::parse(&cli.source)?;
    let loader = build_loader(&cli);

    if cli.raw {
        let text = loader.fetch(&source).await?;
        return write_output(cli.output.as_deref(), &text);
    }

    match cli.output {
        Some(ref path) => {
            let pb = ProgressBar::new(2);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );

            pb.set_message(format!("Loading {}...", source));
            let mut surface = FileSurface::new(path);
            let report = loader.load(&source, &mut surface).await?;
            pb.inc(1);

            pb.set_message("Writing output...");
            pb.inc(1);
            pb.finish_with_message("Done!");

            println!("{} {}", "Saved to".green(), path.display());
            if cli.json {
                print_report(&report)?;
            }
        }
        None => {
            let mut surface = MemorySurface::new();
            let report = loader.load(&source, &mut surface).await?;
            println!("{}", surface.contents());
            if cli.json {
                // Keep stdout clean for the rendered HTML
                eprintln!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
    }

    Ok(())
}

fn build_loader(cli: &Cli) -> DocumentLoader {
    let mut builder = Mdpane::new();

    if cli.strict_status {
        builder = builder.strict_status();
    }
    if cli.no_extensions {
        builder = builder.with_converter_options(CommonMarkOptions::plain());
    }

    let loader = builder.build();
    log::debug!(
        "loader configured: converter={}, strict_status={}",
        loader.converter_name(),
        cli.strict_status
    );
    loader
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        let mut surface = FileSurface::new(path);
        surface.replace(content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn print_report(report: &LoadReport) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
