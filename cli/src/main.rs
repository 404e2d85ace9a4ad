//! mdcv CLI - resume markdown conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdcv::{assets, render, JsonFormat, ParseOptions, RenderOptions};

#[derive(Parser)]
#[command(name = "mdcv")]
#[command(version)]
#[command(about = "Convert resume markdown to text, JSON, and renderer layout", long_about = None)]
struct Cli {
    /// Discard link targets, keeping labels only
    #[arg(long, global = true)]
    plain_links: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a resume to all formats (text, JSON, layout)
    Convert {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert a resume to plain text
    Text {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Exclude the header band
        #[arg(long)]
        no_header: bool,
    },

    /// Convert a resume to model JSON
    Json {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Emit the styled-element layout consumed by a document renderer
    Layout {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Exclude the header band
        #[arg(long)]
        no_header: bool,
    },

    /// Show document and asset information
    Info {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Check that a file looks like resume markdown
    Check {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let parse_options = if cli.plain_links {
        ParseOptions::new().plain_links()
    } else {
        ParseOptions::new()
    };

    let result = match cli.command {
        Commands::Convert { input, output } => {
            cmd_convert(&input, output.as_deref(), parse_options)
        }
        Commands::Text {
            input,
            output,
            no_header,
        } => cmd_text(&input, output.as_deref(), no_header, parse_options),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact, parse_options),
        Commands::Layout {
            input,
            output,
            compact,
            no_header,
        } => cmd_layout(&input, output.as_deref(), compact, no_header, parse_options),
        Commands::Info { input } => cmd_info(&input, parse_options),
        Commands::Check { input } => cmd_check(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    parse_options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing markdown...");
    let doc = mdcv::parse_file_with_options(input, parse_options)?;
    pb.inc(1);

    let render_options = RenderOptions::default();

    pb.set_message("Generating text...");
    let text = render::to_text(&doc, &render_options)?;
    fs::write(output_dir.join("resume.txt"), &text)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = render::to_json(&doc, JsonFormat::Pretty)?;
    fs::write(output_dir.join("resume.json"), &json)?;
    pb.inc(1);

    pb.set_message("Generating layout...");
    let elements = render::to_layout(&doc, &render_options);
    let layout = render::to_layout_string(&elements, JsonFormat::Pretty)?;
    fs::write(output_dir.join("layout.json"), &layout)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} resume.txt", "├─".dimmed());
    println!("  {} resume.json", "├─".dimmed());
    println!("  {} layout.json", "└─".dimmed());

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    no_header: bool,
    parse_options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = mdcv::parse_file_with_options(input, parse_options)?;
    let render_options = RenderOptions::new().with_header(!no_header);
    let text = render::to_text(&doc, &render_options)?;
    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    parse_options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = mdcv::parse_file_with_options(input, parse_options)?;
    let json = render::to_json(&doc, json_format(compact))?;
    write_or_print(output, &json)
}

fn cmd_layout(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    no_header: bool,
    parse_options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = mdcv::parse_file_with_options(input, parse_options)?;
    let render_options = RenderOptions::new().with_header(!no_header);
    let elements = render::to_layout(&doc, &render_options);
    let json = render::to_layout_string(&elements, json_format(compact))?;
    write_or_print(output, &json)
}

fn cmd_info(input: &Path, parse_options: ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(input)?;
    let shape = mdcv::inspect(&source);
    let doc = mdcv::parse_str_with_options(&source, parse_options)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}",
        "Shape".bold(),
        if shape.is_resume() {
            "resume markdown"
        } else {
            "unrecognized"
        }
    );
    if let Some(ref header) = doc.header {
        println!("{}: {}", "Name".bold(), header.name);
    }
    println!("{}: {}", "Sections".bold(), doc.section_count());
    println!("{}: {}", "Blocks".bold(), doc.block_count());
    for section in &doc.sections {
        println!(
            "  {} {} ({} blocks)",
            "├─".dimmed(),
            section.title,
            section.blocks.len()
        );
    }

    println!();
    println!("{}", "Renderer Assets".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let fonts = assets::discover_fonts(&assets::default_font_dirs());
    println!(
        "{}: {} / {} / {}",
        "Fonts".bold(),
        fonts.regular,
        fonts.bold,
        fonts.italic
    );
    let base = input.parent().unwrap_or_else(|| Path::new("."));
    match assets::find_profile_image(base) {
        Some(image) => println!("{}: {}", "Profile image".bold(), image.display()),
        None => println!("{}: none", "Profile image".bold()),
    }

    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(input)?;
    let shape = mdcv::inspect(&source);

    if shape.is_resume() {
        println!(
            "{} {} ({} sections expected)",
            "OK".green().bold(),
            input.display(),
            shape.heading_count
        );
        Ok(())
    } else {
        eprintln!(
            "{} {} has {} delimiters and {} section headings",
            "Not a resume:".yellow().bold(),
            input.display(),
            shape.delimiter_count,
            shape.heading_count
        );
        std::process::exit(1);
    }
}
