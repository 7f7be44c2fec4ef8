//! Assets Config

use std::path::PathBuf;

use clap::Args;

/// Where uploaded item images are written and served from.
#[derive(Debug, Args)]
pub struct AssetsConfig {
    /// Directory holding uploaded item images, served under `/assets`
    #[arg(long, env = "ASSETS_DIR", default_value = "assets")]
    pub assets_dir: PathBuf,
}
