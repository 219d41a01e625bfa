// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Flags override the paths and settings from the configuration file.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shear")]
#[command(about = "Remove container images that are not on the allow-list")]
#[command(version)]
pub struct Cli {
    /// Configuration file [default: /etc/shear/config.yml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Allow-list file, one image name per line
    #[arg(short, long)]
    pub allowlist: Option<PathBuf>,

    /// Log file to append to
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Report images that would be removed without removing them
    #[arg(long)]
    pub dry_run: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
