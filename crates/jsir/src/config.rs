//! Configuration for jsir.
//!
//! Loads config from:
//! 1. Global: ~/.config/jsir/config.toml (or $XDG_CONFIG_HOME/jsir/config.toml)
//! 2. Per-project: .jsir/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [compiler]
//! max_depth = 256
//!
//! [input]
//! format = "estree"
//!
//! [output]
//! dump = true
//! ```
//!
//! Command-line flags override both files.

use clap::ValueEnum;
use jsir_compiler::CompileOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// How to interpret the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Pick a reader from the file extension.
    #[default]
    Auto,
    /// JavaScript source text.
    Javascript,
    /// Babel/ESTree JSON (`@babel/parser` output).
    Estree,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CompilerConfig {
    /// Deepest statement/expression nesting to accept.
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub format: Option<InputFormat>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the compiled AST as JSON on stdout.
    pub dump: Option<bool>,
}

/// Root configuration structure.
///
/// Unset keys stay `None` so that a project file only overrides what it names.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct JsirConfig {
    pub compiler: CompilerConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl JsirConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global) = Self::global_config_path().and_then(|path| Self::load_file(&path)) {
            config = config.merge(global);
        }

        let project_path = root.join(".jsir").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("jsir").join("config.toml"))
    }

    /// Missing files are skipped silently; malformed ones with a warning.
    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config");
                None
            }
        }
    }

    /// Merge another config into this one; keys set in `other` win.
    fn merge(self, other: Self) -> Self {
        Self {
            compiler: CompilerConfig {
                max_depth: other.compiler.max_depth.or(self.compiler.max_depth),
            },
            input: InputConfig {
                format: other.input.format.or(self.input.format),
            },
            output: OutputConfig {
                dump: other.output.dump.or(self.output.dump),
            },
        }
    }

    pub fn max_depth(&self) -> usize {
        self.compiler
            .max_depth
            .unwrap_or_else(|| CompileOptions::default().max_depth)
    }

    pub fn format(&self) -> InputFormat {
        self.input.format.unwrap_or_default()
    }

    pub fn dump(&self) -> bool {
        self.output.dump.unwrap_or(false)
    }
}
