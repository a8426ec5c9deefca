use std::path::{Path, PathBuf};

use crate::cli::Cli;

pub const DEFAULT_ROOMS_DIR: &str = "rooms";
pub const DEFAULT_OUTPUT: &str = "room_data.json";

/// Everything the pipeline needs to know about where to read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// GMX project root.
    pub root: PathBuf,
    /// Room documents directory, relative to `root` unless absolute.
    pub rooms_dir: PathBuf,
    /// Explicit manifest; discovered under `root` when `None`.
    pub project_file: Option<PathBuf>,
    pub output: PathBuf,
    pub pretty: bool,
    pub summary: bool,
}

impl ExtractConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            rooms_dir: PathBuf::from(DEFAULT_ROOMS_DIR),
            project_file: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            pretty: true,
            summary: true,
        }
    }

    pub fn rooms_path(&self) -> PathBuf {
        self.resolve(&self.rooms_dir)
    }

    pub fn project_path(&self) -> Option<PathBuf> {
        self.project_file.as_deref().map(|p| self.resolve(p))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl From<Cli> for ExtractConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.input,
            rooms_dir: cli.rooms_dir,
            project_file: cli.project,
            output: cli.output,
            pretty: !cli.compact,
            summary: !cli.quiet,
        }
    }
}
