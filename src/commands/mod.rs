//! Command handlers for the `growth` binary

pub mod charts;
pub mod interactive;
pub mod project;
pub mod version;

use std::path::Path;

use anyhow::{Context, Result};

use growth_projector::config::{Config, LoadedConfig};
use growth_projector::presentation::{ColorWhen, InputArgs};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Resolved config plus terminal context, shared by every command
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
}

impl Session {
    pub fn open(
        config_path: Option<&Path>,
        json: bool,
        verbose: u8,
        color: Option<ColorWhen>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let loaded: LoadedConfig =
            Config::load_layered(config_path, &cwd).with_context(|| match config_path {
                Some(path) => format!("failed to load config {}", path.display()),
                None => "failed to load config".to_string(),
            })?;

        let ui = UiContext::new(json, verbose, color, &loaded.config);
        if !json {
            print_config_warnings(&loaded, ui.unicode);
        }

        Ok(Self {
            config: loaded.config,
            ui,
        })
    }

    /// Config with per-invocation flags applied
    pub fn config_for(&self, input: &InputArgs) -> Config {
        let mut config = self.config.clone();
        if input.reduced_motion {
            config.output.reduced_motion = true;
        }
        config
    }
}
