//! Gmail Dot Forge - generate dot-variant Gmail addresses
//!
//! Every address printed here delivers to the same Gmail inbox.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use gmail_dot_forge::{
    address::{self, AddressValidator},
    export,
    types::{AppConfig, GenerationReport, GenerationRequest},
    DotForgeError, PreferenceStore, Theme,
};
use tracing_subscriber::EnvFilter;

/// Parsed command line
#[derive(Debug, Default)]
struct CliArgs {
    address: Option<String>,
    count: Option<String>,
    export: Option<PathBuf>,
    json: Option<PathBuf>,
}

fn main() {
    if let Err(e) = gmail_dot_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    init_logging();

    if let Err(e) = run() {
        match e.downcast_ref::<DotForgeError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = AppConfig::from_env()?;

    match args.first().map(String::as_str) {
        Some("--help") | Some("-h") => {
            print_help(&config);
            Ok(())
        }
        Some("--version") | Some("-V") => {
            println!("gmail-dot-forge {}", gmail_dot_forge::VERSION);
            Ok(())
        }
        Some("theme") => run_theme(&config, &args[1..]),
        _ => {
            let cli = parse_args(&args, &config)?;
            run_generate(&config, cli)
        }
    }
}

fn parse_args(args: &[String], config: &AppConfig) -> Result<CliArgs, DotForgeError> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--export" | "-o" => {
                let path = iter
                    .next_if(|value| is_export_path(value))
                    .map(PathBuf::from)
                    .unwrap_or_else(|| config.export_path.clone());
                cli.export = Some(path);
            }
            "--json" => {
                let value = iter
                    .next()
                    .ok_or_else(|| DotForgeError::cli("--json requires a file path"))?;
                cli.json = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') && other.parse::<i64>().is_err() => {
                return Err(DotForgeError::cli(format!("Unknown option '{}'", other)));
            }
            other if cli.address.is_none() => cli.address = Some(other.to_string()),
            other if cli.count.is_none() => cli.count = Some(other.to_string()),
            other => {
                return Err(DotForgeError::cli(format!("Unexpected argument '{}'", other)));
            }
        }
    }

    Ok(cli)
}

/// Whether the token after `--export` names the output file.
///
/// Flags, addresses and counts are left for the positional arguments.
fn is_export_path(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.contains('@')
        && value.trim().parse::<i64>().is_err()
}

/// Validate, generate, render, and optionally export
fn run_generate(config: &AppConfig, cli: CliArgs) -> anyhow::Result<()> {
    let raw_address = match cli.address {
        Some(address) => address,
        None => inquire::Text::new("Gmail address:")
            .with_placeholder("username@gmail.com")
            .prompt()
            .map_err(DotForgeError::from)?,
    };

    let raw_count = match cli.count {
        Some(count) => count,
        None if cli.export.is_some() || cli.json.is_some() => config.max_variations.to_string(),
        None => inquire::Text::new("How many variants?")
            .with_default("10")
            .prompt()
            .map_err(DotForgeError::from)?,
    };

    let validator = AddressValidator::new().with_domains(config.domains.clone());
    let validated = validator.validate(&raw_address)?;
    let requested_count = address::clamp_count(&raw_count, config.max_variations);

    let request = GenerationRequest::new(validated.username.clone(), requested_count);
    let patterns = request.generate();
    let addresses = address::compose(&patterns, &validated.domain);

    if addresses.is_empty() {
        return Err(DotForgeError::validation(format!(
            "No addresses could be generated for '{}'",
            validated.username
        ))
        .into());
    }

    let theme = PreferenceStore::open(&config.prefs_path)
        .ok()
        .and_then(|store| store.theme())
        .unwrap_or_default();
    display_addresses(&addresses, theme);

    println!();
    println!(
        "✅ Generated {} address(es) for {}",
        addresses.len(),
        validated.full_address()
    );

    if let Some(path) = &cli.export {
        export::write_plaintext(path, &addresses)
            .with_context(|| format!("exporting to {}", path.display()))?;
        println!("📄 Exported to {}", path.display());
    }

    if let Some(path) = &cli.json {
        let report = GenerationReport::new(
            validated.full_address(),
            validated.domain.clone(),
            requested_count,
            addresses,
        );
        export::write_json(path, &report)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("📄 Report written to {}", path.display());
    }

    Ok(())
}

fn run_theme(config: &AppConfig, args: &[String]) -> anyhow::Result<()> {
    let store = PreferenceStore::open(&config.prefs_path)?;

    match args.first().map(String::as_str) {
        None => {
            let theme = store.theme().unwrap_or_default();
            println!("🎨 Current theme: {}", theme);
        }
        Some("toggle") => {
            let theme = store.toggle_theme()?;
            println!("🎨 Theme switched to {}", theme);
        }
        Some(other) => {
            return Err(DotForgeError::cli(format!("Unknown theme command '{}'", other)).into());
        }
    }

    Ok(())
}

/// Print the numbered address list
fn display_addresses(addresses: &[String], theme: Theme) {
    let (rule, bullet) = match theme {
        Theme::Light => ("───────────────────", "•"),
        Theme::Dark => ("═══════════════════", "▸"),
    };

    println!("📬 Addresses ({}):", addresses.len());
    println!("{}", rule);
    for (i, address) in addresses.iter().enumerate() {
        println!("{:4}. {} {}", i + 1, bullet, address);
    }
}

/// Print help information
fn print_help(config: &AppConfig) {
    println!("📬 Gmail Dot Forge - dot-variant Gmail addresses");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    gmail-dot-forge [EMAIL] [COUNT] [--export|-o [PATH]] [--json PATH]");
    println!("    gmail-dot-forge theme [toggle]");
    println!();
    println!("EXAMPLES:");
    println!("    gmail-dot-forge                          # Prompt for address and count");
    println!("    gmail-dot-forge john@gmail.com 20        # Print 20 variants");
    println!("    gmail-dot-forge john@gmail.com --export  # Save all variants to a file");
    println!("    gmail-dot-forge john@gmail.com 50 -o out # Save 50 variants to ./out");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    DOT_FORGE_MAX_VARIATIONS  Upper bound on COUNT (current: {})", config.max_variations);
    println!("    DOT_FORGE_EXPORT_PATH     Default export file (current: {})", config.export_path.display());
    println!("    DOT_FORGE_PREFS_PATH      Preferences file (current: {})", config.prefs_path.display());
    println!("    DOT_FORGE_DOMAINS         Accepted domains, comma separated");
    println!("    RUST_LOG                  Log filter (default: warn)");
}
