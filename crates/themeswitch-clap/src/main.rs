//! `themeswitch`: inspect and flip the persisted light/dark preference.
//!
//! Each invocation behaves like one page load against a preferences file:
//! the initial theme is resolved first, then the requested action runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use themeswitch::{
    ColorMode, ColorSchemeQuery, FileStore, FixedColorScheme, InitialTheme, MemoryDocument,
    SystemColorScheme, ThemeConfig, ThemeController,
};

#[derive(Debug, Parser)]
#[command(name = "themeswitch", version, about = "Light/dark theme preference")]
struct Cli {
    /// Preferences file (JSON object of strings)
    #[arg(long, default_value = "themeswitch.json")]
    store: PathBuf,

    /// Theme config file (.json, .yaml or .yml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the OS dark-mode preference comes from
    #[arg(long, value_enum, default_value_t = Scheme::Auto)]
    scheme: Scheme,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scheme {
    /// Ask the operating system
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the theme a fresh page load would pick
    Init,
    /// Flip between light and dark and remember the result
    Toggle,
    /// Remember a theme verbatim
    Set { theme: String },
    /// Forget the remembered theme
    Clear,
    /// Print the effective theme config as YAML
    Config,
}

enum SchemeSource {
    System(SystemColorScheme),
    Fixed(FixedColorScheme),
}

impl ColorSchemeQuery for SchemeSource {
    fn prefers_dark(&self) -> bool {
        match self {
            SchemeSource::System(system) => system.prefers_dark(),
            SchemeSource::Fixed(fixed) => fixed.prefers_dark(),
        }
    }
}

impl From<Scheme> for SchemeSource {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Auto => SchemeSource::System(SystemColorScheme::new()),
            Scheme::Light => SchemeSource::Fixed(FixedColorScheme(ColorMode::Light)),
            Scheme::Dark => SchemeSource::Fixed(FixedColorScheme(ColorMode::Dark)),
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ThemeConfig> {
    let Some(path) = path else {
        return Ok(ThemeConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    let config = if is_yaml {
        ThemeConfig::from_yaml_str(&source)
    } else {
        ThemeConfig::from_json_str(&source)
    };
    config.with_context(|| format!("invalid config {}", path.display()))
}

fn describe(initial: &InitialTheme) -> String {
    match initial {
        InitialTheme::Stored(theme) => format!("{} (remembered)", style(theme).bold()),
        InitialTheme::System => format!("{} (from OS preference)", style("dark").bold()),
        InitialTheme::Default => format!("{} (host default)", style("unset").dim()),
    }
}

type Page = ThemeController<MemoryDocument, FileStore, SchemeSource>;

fn print_state(controller: &Page) {
    let config = controller.config();
    let theme = controller.current_theme();
    let label = controller
        .document()
        .element_text(&config.toggle_id)
        .unwrap_or_default();
    match theme {
        Some(theme) => println!("{}={} {}", config.attribute, style(theme).bold(), label),
        None => println!("{} is unset", config.attribute),
    }
}

/// Opens the preferences file and runs the page-load initialization.
fn load_page(
    store_path: &Path,
    scheme: Scheme,
    config: ThemeConfig,
) -> Result<(Page, InitialTheme)> {
    let store = FileStore::open(store_path)
        .with_context(|| format!("cannot use preferences file {}", store_path.display()))?;
    let document = MemoryDocument::new().with_element(&config.toggle_id);
    let mut controller =
        ThemeController::with_config(document, store, SchemeSource::from(scheme), config);

    let initial = controller.initialize();
    tracing::info!(store = %store_path.display(), ?initial, "page loaded");
    Ok((controller, initial))
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Init => {
            let (controller, initial) = load_page(&cli.store, cli.scheme, config)?;
            println!("initial theme: {}", describe(&initial));
            print_state(&controller);
        }
        Command::Toggle => {
            let (mut controller, _) = load_page(&cli.store, cli.scheme, config)?;
            let mode = controller.toggle_theme();
            println!("switched to {}", style(mode).bold());
            print_state(&controller);
        }
        Command::Set { theme } => {
            let (mut controller, _) = load_page(&cli.store, cli.scheme, config)?;
            controller.set_theme(&theme);
            print_state(&controller);
        }
        Command::Clear => {
            let key = config.storage_key.clone();
            let (controller, _) = load_page(&cli.store, cli.scheme, config)?;
            let (_, mut store, _) = controller.into_parts();
            match store.remove(&key) {
                Some(previous) => {
                    store.save()?;
                    println!("forgot {}", style(previous).bold());
                }
                None => println!("nothing remembered"),
            }
        }
        Command::Config => print!("{}", config.to_yaml_string()?),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    run(Cli::parse())
}
