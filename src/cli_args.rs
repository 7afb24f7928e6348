use clap::Parser;
use std::path::PathBuf;
use url::Url;

#[derive(Parser)]
pub struct CliArgs {
    #[arg(long)]
    pub endpoint: Option<Url>,

    #[arg(long = "config")]
    pub config_filepath: Option<PathBuf>,

    #[arg(long = "logs")]
    pub log_filepath: Option<PathBuf>,

    pub query: Option<String>,
}
