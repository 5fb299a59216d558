//! Configuration file loading.
//!
//! ```yaml
//! casings: [camelCase, pascalCase, snakeCase]
//! unknown_markers: empty
//! clipboard:
//!   copy: "wl-copy"
//!   paste: "wl-paste -n"
//!   timeout_secs: 5
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use smappet_core::EngineConfig;
use smappet_io::SystemClipboard;
use tracing::debug;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "SMAPPET_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub engine: EngineConfig,
    pub clipboard: ClipboardConfig,
}

/// Overrides for the platform clipboard commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Command that reads new clipboard contents from stdin.
    pub copy: Option<String>,
    /// Command that prints the clipboard to stdout.
    pub paste: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).context("invalid configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration {}", path.display()))?;
        Self::from_yaml(&source).with_context(|| format!("in {}", path.display()))
    }

    /// Load from `explicit`, else from `$SMAPPET_CONFIG`, else defaults.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match resolve_path(explicit) {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// The system clipboard with any configured overrides applied.
    pub fn system_clipboard(&self) -> SystemClipboard {
        let mut clipboard = SystemClipboard::new();
        if let Some(command) = &self.clipboard.copy {
            clipboard = clipboard.copy_command(command);
        }
        if let Some(command) = &self.clipboard.paste {
            clipboard = clipboard.paste_command(command);
        }
        if let Some(secs) = self.clipboard.timeout_secs {
            clipboard = clipboard.timeout(Duration::from_secs(secs));
        }
        clipboard
    }
}

fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
