//! Command-line and environment configuration.
//!
//! Every flag can also be set through the environment, and a `.env` file in the working
//! directory is loaded first.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "restaurant-orders", version, about = "Menu, kitchen queue and order history over HTTP")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "RESTAURANT_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Directory for the menu and order snapshots; state is kept in memory when unset
    #[arg(long, env = "RESTAURANT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding index.html and kitchen.html
    #[arg(long, env = "RESTAURANT_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Do not add the starter dishes to an empty menu
    #[arg(long)]
    pub no_seed: bool,
}

impl Config {
    /// Loads `.env` if present, then parses arguments and environment.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }
}
