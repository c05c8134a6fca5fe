//! Command-line interface definitions for menu-export

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// PDF 1.7
    Pdf,
    /// Simplified InDesign package XML
    Idml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Idml => "idml",
        }
    }
}

/// Languages to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Languages {
    /// English only
    En,
    /// Spanish only
    Es,
    /// English with Spanish below
    Both,
}

/// Lay out a saved menu and export it for print
#[derive(Parser, Debug)]
#[command(name = "menu-export")]
#[command(version)]
#[command(about = "Export a bilingual restaurant menu to PDF or IDML", long_about = None)]
pub struct Cli {
    /// Menu JSON as saved by the editor
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (defaults to <Title>_menu.<format> next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Override the menu's display languages
    #[arg(short, long, value_enum)]
    pub languages: Option<Languages>,

    /// Override the menu's column count (1-3)
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// TOML file with type sizes and spacing
    #[arg(long, value_name = "FILE")]
    pub style: Option<PathBuf>,

    /// Measure and draw text with this TrueType font (embedded in PDF output)
    #[arg(long, value_name = "FILE.ttf")]
    pub font: Option<PathBuf>,

    /// Leave PDF content streams uncompressed
    #[arg(long)]
    pub no_compress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
