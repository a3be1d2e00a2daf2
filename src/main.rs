#![allow(non_snake_case)]

mod app;
mod gallery;
pub mod context;
mod theme;
mod upload;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use imagegrid_core::GridConfig;
use tracing_subscriber::EnvFilter;

use crate::context::DemoSettings;

/// Image Upload Grid - desktop gallery
#[derive(Parser, Debug)]
#[command(name = "imagegrid-desktop")]
#[command(about = "Pick local images into an upload grid and preview them")]
struct Args {
    /// JSON grid config (class prefix, fallback texts)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Accept more than one image
    #[arg(short, long)]
    multiple: bool,

    /// Maximum number of images with --multiple (0 = unbounded)
    #[arg(long)]
    max: Option<usize>,

    /// Start with the grid disabled
    #[arg(long)]
    disabled: bool,

    /// Prompt shown on the add tile
    #[arg(short, long)]
    placeholder: Option<String>,

    /// Hide the upload progress state
    #[arg(long)]
    no_progress: bool,
}

/// Default config location: `<config_dir>/imagegrid/config.json`
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("imagegrid").join("config.json"))
}

/// Explicit `--config` must load; the default path is used only if present.
fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<GridConfig> {
    if let Some(path) = explicit {
        return GridConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.exists() => match GridConfig::load(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {:?}: {}", path, e);
                Ok(GridConfig::default())
            }
        },
        _ => Ok(GridConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config)?;

    tracing::info!(
        multiple = args.multiple,
        max = ?args.max,
        prefix = %config.class_prefix,
        "Starting image grid gallery"
    );

    context::init_settings(DemoSettings {
        config,
        multiple: args.multiple,
        max: args.max,
        disabled: args.disabled,
        placeholder: args.placeholder,
        show_upload_progress: !args.no_progress,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Image Upload Grid")
            .with_inner_size(dioxus::desktop::LogicalSize::new(760.0, 620.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
