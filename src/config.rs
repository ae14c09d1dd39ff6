//! Configuration to acknowledge project preferences as well as set defaults.
//!
//! Specifically, we try to find a gridsmith.toml, and if present we load settings from there.
//! This provides default grid dimensions and the paths of the documents to patch.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from gridsmith.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 16)]
    /// Columns generated when `-x/--columns` is not given.
    pub columns: u32,
    #[facet(default = 8)]
    /// Rows generated when `-y/--rows` is not given.
    pub rows: u32,
    #[facet(default = "src/components.js".to_string())]
    /// Components document to patch, relative to the working directory.
    pub components_path: String,
    #[facet(default = "src/pages.js".to_string())]
    /// Pages/routing document to patch, relative to the working directory.
    pub pages_path: String,
    #[facet(default = "https://github.com/symbo-ls/starter-kit.git".to_string())]
    /// Template repository cloned by `gridsmith init`.
    pub template_repo: String,
}

impl Config {
    #[must_use]
    /// Load configuration from gridsmith.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("gridsmith.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
