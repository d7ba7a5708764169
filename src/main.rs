//! Handmark CLI
//!
//! Usage:
//!   handmark [OPTIONS] [FILE]
//!
//! Reads a Markdown-subset file (or stdin) and writes a handwritten-style
//! SVG to a file or stdout.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use handmark::{convert_with_config, LayoutConfig, Preset, PresetError, RenderConfig};

#[derive(Parser)]
#[command(name = "handmark")]
#[command(about = "Markdown to handwritten-style SVG with auto-fit table columns")]
struct Cli {
    /// Input Markdown file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output SVG file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Ratio of glyph width to font size
    #[arg(long, default_value_t = 0.6)]
    ratio: f64,

    /// Max characters per cell line (enables cell wrapping)
    #[arg(long)]
    max_chars: Option<usize>,

    /// Do not draw table borders
    #[arg(short = 'B', long)]
    no_borders: bool,

    /// Gap after each table column
    #[arg(long, default_value_t = 0.0)]
    col_gap: f64,

    /// Paper preset to use (none, sundaram)
    #[arg(short, long)]
    preset: Option<String>,

    /// Paper preset file (TOML); takes precedence over --preset
    #[arg(long)]
    paper: Option<PathBuf>,

    /// Debug mode: dump primitive positions to stderr
    #[arg(short, long)]
    debug: bool,
}

fn resolve_preset(cli: &Cli) -> Result<Preset, PresetError> {
    if let Some(path) = &cli.paper {
        Preset::from_file(path)
    } else if let Some(name) = &cli.preset {
        Preset::named(name)
    } else {
        Ok(Preset::default())
    }
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Resolve the preset before any conversion work
    let preset = match resolve_preset(&cli) {
        Ok(preset) => preset,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let layout = preset.apply(
        LayoutConfig::default()
            .with_width_ratio(cli.ratio)
            .with_max_chars(cli.max_chars)
            .with_borders(!cli.no_borders)
            .with_col_gap(cli.col_gap),
    );
    let config = RenderConfig::new().with_layout(layout).with_debug(cli.debug);

    let svg = match convert_with_config(source.trim(), config) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // The document is complete at this point; the write is all-or-nothing.
    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &svg) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg),
    }
}

fn print_intro() {
    println!(
        r#"Handmark - Markdown to handwritten-style SVG

USAGE:
    handmark [OPTIONS] [FILE]
    echo 'a|b' | handmark

OPTIONS:
    -o, --output <FILE>   Output SVG file (stdout if omitted)
        --ratio <N>       Glyph width as a fraction of font size
        --max-chars <N>   Wrap table cells at N characters
    -B, --no-borders      Do not draw table borders
        --col-gap <N>     Extra gap after each table column
    -p, --preset <NAME>   Paper preset (none, sundaram)
        --paper <FILE>    Paper preset file (TOML)
    -d, --debug           Dump primitive positions to stderr
    -h, --help            Print help

QUICK START:
    printf 'Shopping\n\nitem|qty\nmilk|2\n' | handmark > notes.svg

Plain lines render as handwriting; contiguous lines containing '|' render
as a bordered table with auto-sized columns."#
    );
}
