//! Interactive vacancy search
//!
//! Asks for a keyword and a platform, downloads matching vacancies, saves
//! them to `<keyword>.json` and then answers queries against that file.

use std::io;

use aggregator::{aggregate, select_boards, Config, Session};
use anyhow::Result;
use common::JsonStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting vacancy aggregator v{}", env!("CARGO_PKG_VERSION"));

    let mut session = Session::new(io::stdin().lock(), io::stdout());

    let Some(keyword) = session.ask_keyword()? else {
        return Ok(());
    };
    let Some(platform) = session.ask_platform()? else {
        return Ok(());
    };

    let client = config.http_client()?;
    let mut boards = select_boards(platform, &config, &client, &keyword)?;
    let postings = aggregate(&mut boards)?;

    let store = JsonStore::for_keyword(&config.data_dir, &keyword);
    store.create(&postings)?;
    println!("💾 Saved {} vacancies to {:?}\n", postings.len(), store.path());

    session.query_loop(&store)
}
