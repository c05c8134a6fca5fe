//! menu-export - lay out a saved menu and write it as PDF or IDML.

mod cli;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Languages, OutputFormat};
use menu_core::{
    BuiltinMetrics, DisplayLanguageSet, DocumentAssembler, Emitter, IdmlEmitter, LayoutStyle,
    MenuDocument, PdfEmitter, TextMeasurer, TrueTypeFont,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let json = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let mut doc = MenuDocument::from_json(&json)
        .with_context(|| format!("Failed to parse menu {}", cli.input.display()))?;
    apply_overrides(&mut doc, &cli);

    let style = load_style(cli.style.as_deref())?;
    let font = load_font(cli.font.as_deref())?;
    let builtin = BuiltinMetrics::new();
    // Text is drawn in the face that measured it.
    let measurer: &dyn TextMeasurer = match &font {
        Some(font) => font,
        None => &builtin,
    };

    let format = resolve_format(cli.format, cli.output.as_deref());
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input, &doc, format));

    // Lay out before touching the output file so a failed run leaves
    // nothing behind.
    let layout = DocumentAssembler::new(measurer)
        .with_style(style)
        .assemble(&doc)
        .with_context(|| format!("Failed to lay out {}", cli.input.display()))?;

    let file = File::create(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let writer = BufWriter::new(file);
    match format {
        OutputFormat::Pdf => {
            let mut emitter = PdfEmitter::new(writer).with_compression(!cli.no_compress);
            if let Some(font) = font {
                emitter = emitter.with_truetype(font);
            }
            emitter
                .emit(&layout)
                .with_context(|| format!("Failed to write PDF to {}", output.display()))?;
        }
        OutputFormat::Idml => {
            let mut emitter = IdmlEmitter::new(writer);
            if let Some(font) = &font {
                emitter = emitter.with_font_family(font.family());
            }
            emitter
                .emit(&layout)
                .with_context(|| format!("Failed to write IDML to {}", output.display()))?;
        }
    }

    for warning in &layout.warnings {
        eprintln!("Warning: {}", warning);
    }
    println!(
        "Wrote {} page(s) to {}",
        layout.page_count(),
        output.display()
    );
    Ok(())
}

/// Command-line settings win over the ones saved with the menu.
fn apply_overrides(doc: &mut MenuDocument, cli: &Cli) {
    if let Some(languages) = cli.languages {
        doc.display_languages = match languages {
            Languages::En => DisplayLanguageSet::english_only(),
            Languages::Es => DisplayLanguageSet::spanish_only(),
            Languages::Both => DisplayLanguageSet::bilingual(),
        };
    }
    // Out-of-range counts are rejected by the layout, not here.
    if let Some(columns) = cli.columns {
        doc.layout.columns = columns;
    }
}

fn load_style(path: Option<&Path>) -> Result<LayoutStyle> {
    let Some(path) = path else {
        return Ok(LayoutStyle::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read style file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse style file {}", path.display()))
}

fn load_font(path: Option<&Path>) -> Result<Option<TrueTypeFont>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let data = fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
    let font = TrueTypeFont::from_bytes(data)
        .with_context(|| format!("Failed to load font {}", path.display()))?;
    log::info!("Setting text in {}", font.family());
    Ok(Some(font))
}

fn resolve_format(format: Option<OutputFormat>, output: Option<&Path>) -> OutputFormat {
    if let Some(format) = format {
        return format;
    }
    match output.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("idml") => OutputFormat::Idml,
        _ => OutputFormat::Pdf,
    }
}

/// `<English title>_menu.<ext>` beside the input, spaces replaced by
/// underscores.
fn default_output(input: &Path, doc: &MenuDocument, format: OutputFormat) -> PathBuf {
    let title = doc.title.en.split_whitespace().collect::<Vec<_>>().join("_");
    let stem = if title.is_empty() {
        "menu".to_string()
    } else {
        format!("{}_menu", title)
    };
    input.with_file_name(format!("{}.{}", stem, format.extension()))
}
