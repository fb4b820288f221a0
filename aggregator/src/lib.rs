//! Vacancy aggregator
//!
//! Pulls vacancies for a keyword from hh.ru and superjob.ru, keeps the ones
//! paid in roubles and normalizes them into [`common::PostingRecord`].

pub mod boards;
pub mod config;
mod error;
pub mod session;
pub mod text;

pub use boards::JobBoard;
pub use config::Config;
pub use error::FetchError;
pub use session::{Action, Platform, Session};

use anyhow::Result;
use boards::{HeadHunter, SuperJob};
use common::PostingRecord;
use reqwest::blocking::Client;

/// Boards for `platform`, hh.ru first. Fails if superjob.ru is wanted but no
/// key is configured.
pub fn select_boards(
    platform: Platform,
    config: &Config,
    client: &Client,
    keyword: &str,
) -> Result<Vec<Box<dyn JobBoard>>> {
    let hh = || -> Box<dyn JobBoard> {
        Box::new(HeadHunter::new(client.clone(), &config.hh_api_url, keyword))
    };
    let superjob = || -> Result<Box<dyn JobBoard>> {
        Ok(Box::new(SuperJob::new(
            client.clone(),
            &config.superjob_api_url,
            config.superjob_api_key()?,
            keyword,
        )))
    };

    Ok(match platform {
        Platform::HeadHunter => vec![hh()],
        Platform::SuperJob => vec![superjob()?],
        Platform::Both => vec![hh(), superjob()?],
    })
}

/// Fetches every board in turn, then concatenates their normalized postings
/// in board order.
pub fn aggregate(boards: &mut [Box<dyn JobBoard>]) -> Result<Vec<PostingRecord>, FetchError> {
    for board in boards.iter_mut() {
        let fetched = board.fetch()?;
        println!("📡 {}: fetched {} vacancies", board.name(), fetched);
    }

    let mut postings = Vec::new();
    for board in boards.iter() {
        let normalized = board.normalize();
        println!("📋 {}: {} vacancies with a salary in roubles", board.name(), normalized.len());
        postings.extend(normalized);
    }
    Ok(postings)
}
