//! rulebook-import - rulebook HTML to Foundry VTT items

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug};

use rulebook_import::export::{ExportShape, JsonConfig, JsonExporter};
use rulebook_import::record::SeededStamps;
use rulebook_import::{
    ConvertConfig, Converter, Error, ExportRecord, ItemKind, PlatformConfig, Result, decode_text,
    extract_meta_charset,
};

#[derive(Parser)]
#[command(name = "rulebook-import")]
#[command(version, about = "Convert rulebook talents and spells to Foundry VTT items", long_about = None)]
#[command(after_help = "EXAMPLES:
    rulebook-import talentos.html -o talentos.json     Convert talents
    rulebook-import --spells magias.html               Convert spells to stdout
    pbpaste | rulebook-import --spells                 Read from stdin")]
struct Cli {
    /// Input file with HTML or plain text ("-" for stdin)
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// Convert spells instead of talents
    #[arg(short, long)]
    spells: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Always write a JSON array, even for a single item
    #[arg(long)]
    list: bool,

    /// Write compact JSON instead of indented
    #[arg(long)]
    compact: bool,

    /// Seed for item ids, for reproducible output
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Fixed creation time in epoch milliseconds (used with --seed)
    #[arg(long, value_name = "MS", requires = "seed")]
    timestamp: Option<i64>,

    /// Element that starts each item
    #[arg(long, value_name = "TAG", default_value = "h3")]
    heading: String,

    /// Foundry world id recorded as the export source
    #[arg(long, value_name = "ID")]
    world: Option<String>,

    /// Foundry core version stamped into each item
    #[arg(long, value_name = "VERSION")]
    core_version: Option<String>,

    /// forbidden-lands system version stamped into each item
    #[arg(long, value_name = "VERSION")]
    system_version: Option<String>,

    /// Suppress status messages
    #[arg(short, long)]
    quiet: bool,

    /// Log parsing details (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(count) => {
            if !cli.quiet {
                eprintln!("{}", success_message(count, kind(&cli)));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn kind(cli: &Cli) -> ItemKind {
    if cli.spells {
        ItemKind::Spell
    } else {
        ItemKind::Talent
    }
}

fn success_message(count: usize, kind: ItemKind) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Converted {count} {kind}{plural}")
}

fn run(cli: &Cli) -> Result<usize> {
    let input = read_input(&cli.input)?;
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let kind = kind(cli);
    let records = convert(cli, &input, kind);
    if records.is_empty() {
        return Err(Error::NothingFound { kind });
    }

    let exporter = JsonExporter::with_config(JsonConfig {
        shape: if cli.list {
            ExportShape::List
        } else {
            ExportShape::Auto
        },
        pretty: !cli.compact,
    });

    match &cli.output {
        Some(path) => {
            debug!("writing {} record(s) to {}", records.len(), path.display());
            exporter.export_to_file(&records, path)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            exporter.export(&records, &mut out)?;
            writeln!(out)?;
        }
    }

    Ok(records.len())
}

fn convert(cli: &Cli, input: &str, kind: ItemKind) -> Vec<ExportRecord> {
    let mut platform = PlatformConfig::default();
    if let Some(world) = &cli.world {
        platform = platform.with_world_id(world);
    }
    if let Some(version) = &cli.core_version {
        platform = platform.with_core_version(version);
    }
    if let Some(version) = &cli.system_version {
        platform = platform.with_system_version(version);
    }

    let config = ConvertConfig::new()
        .with_heading_tag(&cli.heading)
        .with_platform(platform);
    let mut converter = Converter::with_config(config);

    match cli.seed {
        Some(seed) => {
            let time = cli.timestamp.unwrap_or(0);
            converter
                .with_stamps(SeededStamps::new(seed, time))
                .convert(input, kind)
        }
        None => converter.convert(input, kind),
    }
}

/// Read the input file (or stdin), decoding legacy encodings.
fn read_input(path: &str) -> Result<String> {
    let bytes = if path == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(path)?
    };

    let hint = extract_meta_charset(&bytes);
    Ok(decode_text(&bytes, hint).into_owned())
}
