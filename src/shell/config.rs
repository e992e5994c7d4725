//! Shell configuration

use crate::catalog::{default_catalog, parse_catalog};
use crate::model::VideoLibrary;
use crate::player::VideoPlayer;
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for an interactive session
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Catalog file to load (None = bundled catalog)
    pub catalog_path: Option<PathBuf>,

    /// Text shown before each command is read
    pub prompt: String,

    /// Print each command line after the prompt (for piped scripts)
    pub echo: bool,

    /// Seed for random playback; None seeds from the OS
    pub seed: Option<u64>,
}

impl ShellConfig {
    /// Create a configuration using the bundled catalog
    pub fn new() -> Self {
        Self {
            catalog_path: None,
            prompt: "> ".to_string(),
            echo: false,
            seed: None,
        }
    }

    /// Load the catalog from a file; `~` is expanded
    pub fn with_catalog(mut self, path: &str) -> Self {
        let expanded = shellexpand::tilde(path);
        self.catalog_path = Some(PathBuf::from(expanded.as_ref()));
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Make random playback reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load the configured catalog
    pub fn load_catalog(&self) -> Result<VideoLibrary> {
        match &self.catalog_path {
            Some(path) => parse_catalog(path),
            None => {
                log::info!("Using bundled video catalog");
                Ok(default_catalog())
            }
        }
    }

    /// Load the catalog and build a player over it
    pub fn build_player(&self) -> Result<VideoPlayer> {
        let library = self.load_catalog()?;
        Ok(match self.seed {
            Some(seed) => VideoPlayer::with_seed(library, seed),
            None => VideoPlayer::new(library),
        })
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.prompt, "> ");
        assert!(!config.echo);
        assert_eq!(config.load_catalog().unwrap().video_count(), 5);
    }

    #[test]
    fn test_catalog_path() {
        let config = ShellConfig::new().with_catalog("/srv/videos.txt");
        assert_eq!(config.catalog_path.unwrap(), PathBuf::from("/srv/videos.txt"));

        let config = ShellConfig::new().with_catalog("~/videos.txt");
        assert!(config.catalog_path.unwrap().ends_with("videos.txt"));
    }

    #[test]
    fn test_build_player_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Only One | only_id | #solo").unwrap();

        let config = ShellConfig::new()
            .with_catalog(&file.path().to_string_lossy())
            .with_seed(1);
        let mut player = config.build_player().unwrap();

        let mut out: Vec<String> = Vec::new();
        player.play_random_video(&mut out);
        assert_eq!(out, vec!["Playing video: Only One"]);
    }
}
