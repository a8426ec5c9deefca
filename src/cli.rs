use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_OUTPUT, DEFAULT_ROOMS_DIR};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// GMX project directory
    pub input: PathBuf,
    /// Output .json file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Room documents directory, relative to the project directory
    #[arg(long, default_value = DEFAULT_ROOMS_DIR)]
    pub rooms_dir: PathBuf,
    /// Project manifest (default: the *.project.gmx in the project directory)
    #[arg(long)]
    pub project: Option<PathBuf>,
    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,
    /// Do not print the room summary
    #[arg(short, long)]
    pub quiet: bool,
}
