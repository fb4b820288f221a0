//! Job board adapters.
//!
//! Each board downloads raw vacancies for one keyword and maps them onto
//! [`PostingRecord`]. Boards keep their own raw items and share nothing.

mod hh;
mod superjob;

pub use hh::{HeadHunter, DEFAULT_ENDPOINT as HH_ENDPOINT};
pub use superjob::{SuperJob, DEFAULT_ENDPOINT as SUPERJOB_ENDPOINT};

use common::PostingRecord;
use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::FetchError;

/// Pages requested per fetch. Every page is requested even after an empty
/// one comes back.
pub const PAGE_COUNT: u32 = 10;

/// Vacancies asked for per page.
pub const PAGE_SIZE: u32 = 100;

pub trait JobBoard {
    fn name(&self) -> &'static str;

    /// Downloads [`PAGE_COUNT`] pages and appends their vacancies to the
    /// ones already held. Returns how many raw vacancies are held now.
    fn fetch(&mut self) -> Result<usize, FetchError>;

    /// Rouble-salaried vacancies mapped onto the common record, in the
    /// order they were fetched.
    fn normalize(&self) -> Vec<PostingRecord>;
}

/// Sends `request(page)` for every page index in order and decodes each body
/// as `P`. The first failure aborts the whole sequence.
fn fetch_pages<P, F>(board: &'static str, mut request: F) -> Result<Vec<P>, FetchError>
where
    P: DeserializeOwned,
    F: FnMut(u32) -> RequestBuilder,
{
    let mut pages = Vec::with_capacity(PAGE_COUNT as usize);

    for page in 0..PAGE_COUNT {
        debug!(board, page, "requesting page");

        let body = request(page)
            .send()
            .and_then(Response::error_for_status)
            .and_then(Response::text)
            .map_err(|source| FetchError::Http {
                board,
                page,
                source,
            })?;

        let parsed = serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            board,
            page,
            source,
        })?;
        pages.push(parsed);
    }

    Ok(pages)
}
