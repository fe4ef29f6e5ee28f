//! Marquee CLI
//!
//! Render promotional overlays from config files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marquee_core::Identifier;
use marquee_overlay::{
    render_document, resolve_overlay, Mode, OverlayCallbacks, OverlayInstance,
};
use marquee_theme::{resolve_theme, ThemeId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod policy;

use config::{load_overlay, MarqueeToml};
use policy::SchemePolicy;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about = "Marquee promotional overlay engine", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to ./marquee.toml when present)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an overlay config to HTML
    Render {
        /// Overlay config (.json or .toml)
        config: PathBuf,

        /// Rendering mode (live, preview)
        #[arg(short, long, default_value = "live")]
        mode: String,

        /// Seed for decorative particle placement
        #[arg(long)]
        seed: Option<u64>,

        /// Emit only the overlay markup instead of a full page
        #[arg(long)]
        fragment: bool,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the resolved theme, sizing, style and media as JSON
    Resolve {
        /// Overlay config (.json or .toml)
        config: PathBuf,

        /// Rendering mode (live, preview)
        #[arg(short, long, default_value = "live")]
        mode: String,
    },

    /// List the built-in themes
    Themes,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            config,
            mode,
            seed,
            fragment,
            out,
        } => cmd_render(&config, &mode, seed, fragment, out.as_deref(), cli.settings.as_deref()),
        Commands::Resolve { config, mode } => cmd_resolve(&config, &mode, cli.settings.as_deref()),
        Commands::Themes => cmd_themes(),
    }
}

fn cmd_render(
    config_path: &Path,
    mode: &str,
    seed: Option<u64>,
    fragment: bool,
    out: Option<&Path>,
    settings_path: Option<&Path>,
) -> Result<()> {
    let settings = MarqueeToml::load(settings_path)?;
    let config = load_overlay(config_path)?;
    let mode = Mode::parse_or_default(mode);
    let policy = SchemePolicy::from_config(&settings.policy);

    info!("Rendering {} ({mode})", config_path.display());

    let title = config.title.clone();
    let callbacks = OverlayCallbacks::new();
    let mut instance = match seed {
        Some(seed) => OverlayInstance::mount_with_seed(config, mode, policy, settings.engine, callbacks, seed),
        None => OverlayInstance::mount(config, mode, policy, settings.engine, callbacks),
    };
    let tree = instance.render();
    let html = if fragment {
        tree.to_html()
    } else {
        render_document(&title, &instance.resolved(), &tree)
    };
    instance.unmount();

    match out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn cmd_resolve(config_path: &Path, mode: &str, settings_path: Option<&Path>) -> Result<()> {
    let settings = MarqueeToml::load(settings_path)?;
    let config = load_overlay(config_path)?;
    let policy = SchemePolicy::from_config(&settings.policy);

    let resolved = resolve_overlay(&config, Mode::parse_or_default(mode), &policy, &settings.engine);
    let json = serde_json::to_string_pretty(&resolved).context("Failed to serialize resolved overlay")?;
    println!("{json}");
    Ok(())
}

fn cmd_themes() -> Result<()> {
    println!("{:<22} {:<22} {:<14} {:<14} MEDIA", "ID", "NAME", "LAYOUT", "EFFECT");
    for id in ThemeId::all() {
        let theme = resolve_theme(*id);
        println!(
            "{:<22} {:<22} {:<14} {:<14} {}",
            id.id(),
            id.display_name(),
            theme.layout.id(),
            theme.special_effect.id(),
            if theme.has_media_slot { "yes" } else { "no" }
        );
    }
    Ok(())
}
