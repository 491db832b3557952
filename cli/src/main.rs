//! notepress CLI - render lightweight-markup notes into paginated PDFs
//!
//! A command-line tool wrapping the notepress rendering library.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use notepress::{classify_lines, naming, Document, ImageAsset, Notepress, RenderOptions};
use std::path::PathBuf;

/// Render lightweight-markup notes into paginated PDF documents
#[derive(Parser)]
#[command(
    name = "notepress",
    author = "iyulab",
    version,
    about = "Render lightweight-markup notes into paginated PDFs",
    long_about = "notepress - note-to-PDF rendering tool.\n\n\
                  Takes a text file using a small markup subset (# headings,\n\
                  ## subheadings, - bullets, paragraphs) plus an optional image\n\
                  and produces a paginated PDF.\n\n\
                  Usage:\n  \
                  notepress render notes.txt                Render with derived output name\n  \
                  notepress render notes.txt -o out.pdf     Render to a specific path\n  \
                  notepress blocks notes.txt --json         Dump line classification"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a notes file to a PDF
    Render {
        /// Input text file
        input: PathBuf,

        /// Topic string (fallback title and output naming; default: file stem)
        #[arg(short, long)]
        topic: Option<String>,

        /// Optional illustrative image
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Output file path (default: notes_<topic>.pdf in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory containing the DejaVu Sans TrueType family
        #[arg(long)]
        font_dir: Option<PathBuf>,

        /// Base font size in points
        #[arg(long, default_value = "12")]
        font_size: f32,
    },

    /// Show how each input line is classified
    Blocks {
        /// Input text file
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Render {
            input,
            topic,
            image,
            output,
            font_dir,
            font_size,
        } => {
            let topic = topic.unwrap_or_else(|| {
                input
                    .file_stem()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string()
            });

            let mut document = Document::from_file(&topic, &input)?;

            if let Some(image_path) = image {
                match ImageAsset::open(&image_path) {
                    Ok(asset) => document = document.with_image(asset),
                    Err(e) => {
                        // Same degradation as the engine: note it, keep going.
                        eprintln!(
                            "{} skipping image {}: {}",
                            "!".yellow().bold(),
                            image_path.display(),
                            e
                        );
                    }
                }
            }

            let output = output.unwrap_or_else(|| PathBuf::from(naming::output_filename(&topic)));

            let mut options = RenderOptions::default().with_base_font_size(font_size);
            if let Some(dir) = font_dir {
                options = options.with_font_dir(dir);
            }

            let pb = create_spinner("Rendering document...");
            let summary = Notepress::new()
                .with_options(options)
                .render_to_file(&document, &output)?;
            pb.finish_and_clear();

            println!("{}", "Render Complete".green().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "Output".bold(), output.display());
            println!("{}: {}", "Title".bold(), document.title());
            println!("{}: {}", "Pages".bold(), summary.page_count);
            println!("{}: {}", "Blocks".bold(), summary.block_counts.total());
            println!(
                "{}: {}",
                "Image".bold(),
                if summary.image_placed { "placed" } else { "none" }
            );
            println!("{}: {:?}", "Font".bold(), summary.font_family);
        }

        Commands::Blocks { input, json } => {
            let body = std::fs::read_to_string(&input)?;
            let blocks = classify_lines(&body);

            if json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else {
                for (i, block) in blocks.iter().enumerate() {
                    println!(
                        "{:>4}  {:<10} {}",
                        i + 1,
                        block.kind_name().cyan(),
                        block.text().unwrap_or("")
                    );
                }
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!(
        "{} {}",
        "notepress".green().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Note-to-PDF rendering for a small markup subset");
    println!();
    println!("Repository: https://github.com/iyulab/notepress");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
