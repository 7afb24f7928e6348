mod cli_args;
mod client;
mod config;
mod error;
mod keymap;
mod searcher;
mod utils;
mod view;

use crate::{cli_args::CliArgs, client::Client, error::Error, utils::any::Any};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Error> {
    Client::run(CliArgs::parse()).await?;

    ().ok()
}
