use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tripcard::export::{ChromePrinter, ExportWriter};
use tripcard::i18n::{self, Translations};
use tripcard::model::ShareFormat;
use tripcard::pipeline::{self, ShareDeps};
use tripcard::share::{NoShare, ShareSheet, SystemShare};
use tripcard::store::{JsonStore, TripRepository};
use tripcard::{assemble, config, output};

#[derive(Parser)]
#[command(name = "tripcard")]
#[command(about = "Share travel journals as text, cards, or PDF guides")]
#[command(long_about = "\
Share travel journals as text, cards, or PDF guides

A trip is a JSON store of cities and entries. Pick a trip (or one of its
cities) and a format, and tripcard renders it, writes the artifact, and
hands it to the system share sheet.

Formats:

  text    Plain-text recap, grouped by city in date order
  image   Postcard-sized (400x600) card, printed to a single-page PDF
  pdf     Full multi-page travel guide with one section per city

The store is a single JSON file:

  {
    \"trips\":   [{ \"id\": \"t1\", \"title\": \"Japan 2024\", ... }],
    \"cities\":  [{ \"id\": \"c1\", \"trip_id\": \"t1\", \"name\": \"Tokyo\", ... }],
    \"entries\": [{ \"id\": \"e1\", \"trip_id\": \"t1\", \"city_id\": \"c1\", ... }]
  }

Run 'tripcard gen-config' to generate a documented tripcard.toml.")]
#[command(version)]
struct Cli {
    /// Path to the JSON entry store
    #[arg(long, default_value = "tripcard.json", global = true)]
    store: PathBuf,

    /// Share format: text, image, or pdf
    #[arg(long, default_value = "text", global = true)]
    format: ShareFormat,

    /// Locale for export strings (overrides config)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Directory artifacts are written to (overrides config; default is
    /// the per-user cache directory)
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    /// Directory containing tripcard.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Write the artifact but skip the system share sheet
    #[arg(long, global = true)]
    no_share: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Share a whole trip
    Trip {
        /// Trip id in the store
        trip_id: String,
    },
    /// Share one city of a trip
    City {
        /// Trip id in the store
        trip_id: String,
        /// City id in the store
        city_id: String,
    },
    /// List the available share formats and locales
    Formats,
    /// Print a stock tripcard.toml with all options documented
    GenConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Trip { ref trip_id } => {
            let cfg = config::load_config(&cli.config_dir)?;
            let store = JsonStore::load(&cli.store)?;
            let data = assemble::trip_share_data(&store, &store, &store, trip_id).await?;
            output::print_trip_overview(&data);

            let deps = build_deps(&cli, &cfg)?;
            let report = pipeline::share_trip(
                &data,
                cli.format,
                &ShareDeps {
                    translations: &deps.translations,
                    app_name: &cfg.app_name,
                    writer: &deps.writer,
                    printer: &ChromePrinter,
                    sheet: deps.sheet.as_ref(),
                },
            )?;
            output::print_share_report(&report);
        }
        Command::City {
            ref trip_id,
            ref city_id,
        } => {
            let cfg = config::load_config(&cli.config_dir)?;
            let store = JsonStore::load(&cli.store)?;
            let trip = store
                .by_id(trip_id)
                .await?
                .ok_or_else(|| assemble::AssembleError::TripNotFound(trip_id.clone()))?;
            let data = assemble::city_share_data(&store, &store, trip, city_id).await?;
            output::print_city_overview(&data);

            let deps = build_deps(&cli, &cfg)?;
            let report = pipeline::share_city(
                &data,
                cli.format,
                &ShareDeps {
                    translations: &deps.translations,
                    app_name: &cfg.app_name,
                    writer: &deps.writer,
                    printer: &ChromePrinter,
                    sheet: deps.sheet.as_ref(),
                },
            )?;
            output::print_share_report(&report);
        }
        Command::Formats => {
            println!("Formats:");
            for format in ShareFormat::ALL {
                println!("    {}", format.name());
            }
            println!("Locales:");
            for locale in i18n::available_locales() {
                println!("    {}", locale);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Effectful pipeline dependencies resolved from flags and config.
/// CLI flags win over config values.
struct ResolvedDeps {
    translations: Translations,
    writer: ExportWriter,
    sheet: Box<dyn ShareSheet>,
}

fn build_deps(cli: &Cli, cfg: &config::ShareConfig) -> Result<ResolvedDeps, Box<dyn std::error::Error>> {
    let locale = cli.locale.as_deref().unwrap_or(&cfg.locale);
    let translations = Translations::for_locale(locale);

    let writer = match cli.out_dir.as_ref().or(cfg.output_dir.as_ref()) {
        Some(dir) => ExportWriter::new(dir),
        None => ExportWriter::in_cache_dir()?,
    };

    let sheet: Box<dyn ShareSheet> = if cli.no_share {
        Box::new(NoShare)
    } else {
        Box::new(SystemShare)
    };

    Ok(ResolvedDeps {
        translations,
        writer,
        sheet,
    })
}
