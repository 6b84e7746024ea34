use clap::{Parser, Subcommand};
use showcase_portfolio::collect::{self, CollectError};
use showcase_portfolio::config::{self, PortfolioConfig};
use showcase_portfolio::gallery::{Gallery, Medium, Work};
use showcase_portfolio::output;
use showcase_portfolio::render::{self, OutputFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "showcase-portfolio")]
#[command(about = "Portfolio aggregation engine for the ORGAN creative system")]
#[command(long_about = "\
Portfolio aggregation engine for the ORGAN creative system

Works are read from a curated works file (default: data/works.json, or
`works_path` in showcase.toml, relative to --config-dir) or, with
--registry, from a repository registry. The resulting gallery can be rendered or queried:

  generate     Render the gallery as markdown, html or json
  summary      Counts by medium and organ
  search       Case-insensitive keyword search over titles, descriptions, tags
  featured     Featured works only
  list         Works filtered by --medium and/or --organ

Logging goes to stderr; set SHOWCASE_LOG (e.g. SHOWCASE_LOG=debug) or pass
--verbose to see it.")]
#[command(version)]
struct Cli {
    /// Curated works file (overrides `works_path` from showcase.toml)
    #[arg(long, global = true, conflicts_with = "registry")]
    works: Option<PathBuf>,

    /// Collect from a repository registry file instead of a works file
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Directory containing showcase.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate portfolio output
    Generate {
        /// Output format (default: `output.format` from showcase.toml)
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
        /// Output file path (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print portfolio statistics
    Summary,
    /// Search works by keyword
    Search {
        /// Search query
        query: String,
    },
    /// List featured works
    Featured,
    /// List works filtered by medium and/or organ
    List {
        /// Medium identifier, e.g. generative-art
        #[arg(long)]
        medium: Option<String>,
        /// Organ identifier (exact match)
        #[arg(long)]
        organ: Option<String>,
    },
    /// Print a stock showcase.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        works,
        registry,
        config_dir,
        command,
        ..
    } = cli;
    let load = || -> Result<(PortfolioConfig, Gallery), Box<dyn std::error::Error>> {
        let config = config::load_config(&config_dir)?;
        let gallery =
            load_gallery(registry.as_deref(), works.as_deref(), &config, &config_dir)?;
        Ok((config, gallery))
    };

    match command {
        Command::Generate { format, output } => {
            let (config, gallery) = load()?;
            let format = format.unwrap_or(config.output.format);
            let document = render::render(&gallery, format, &config.colors)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, document)?;
                    tracing::info!(path = %path.display(), ?format, "wrote portfolio");
                    println!("Portfolio written to {}", path.display());
                }
                None => println!("{}", document),
            }
        }
        Command::Summary => {
            let (_, gallery) = load()?;
            let summary = render::render_summary(&gallery);
            output::print_lines(&output::format_summary(&gallery.name, &summary));
        }
        Command::Search { query } => {
            let (config, gallery) = load()?;
            let results = gallery.search(&query);
            output::print_lines(&output::format_search_results(
                &query,
                &results,
                config.display.search_preview,
            ));
        }
        Command::Featured => {
            let (config, gallery) = load()?;
            output::print_lines(&output::format_featured(
                &gallery.featured_works(),
                config.display.featured_preview,
            ));
        }
        Command::List { medium, organ } => {
            let medium = medium.as_deref().map(str::parse::<Medium>).transpose()?;
            let (_, gallery) = load()?;
            let works: Vec<&Work> = match (medium, organ.as_deref()) {
                (Some(m), Some(o)) => gallery
                    .by_medium(m)
                    .into_iter()
                    .filter(|w| w.organ == o)
                    .collect(),
                (Some(m), None) => gallery.by_medium(m),
                (None, Some(o)) => gallery.by_organ(o),
                (None, None) => gallery.works().iter().collect(),
            };
            output::print_lines(&output::format_listing(&works));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Collect the gallery from `--registry`, `--works`, or the configured works path.
///
/// Command-line paths are taken as given; the configured `works_path` is
/// relative to the config directory.
fn load_gallery(
    registry: Option<&Path>,
    works: Option<&Path>,
    config: &PortfolioConfig,
    config_dir: &Path,
) -> Result<Gallery, CollectError> {
    match (registry, works) {
        (Some(registry), _) => collect::collect_from_registry(registry),
        (None, Some(works)) => collect::collect_from_works_file(works),
        (None, None) => collect::collect_from_works_file(&config.works_file(config_dir)),
    }
}

/// Install the stderr subscriber.
///
/// `SHOWCASE_LOG` wins when set; otherwise `--verbose` selects debug and the
/// default is warn.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("SHOWCASE_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
