use common::PostingRecord;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;

use super::{fetch_pages, JobBoard, PAGE_SIZE};
use crate::text::plain_text;
use crate::FetchError;

pub const DEFAULT_ENDPOINT: &str = "https://api.superjob.ru/2.0/vacancies/";

const BOARD: &str = "superjob.ru";
const RUBLES: &str = "rub";
const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct Page {
    objects: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    profession: String,
    town: Town,
    payment_from: Option<i64>,
    payment_to: Option<i64>,
    currency: Option<String>,
    link: String,
    firm_name: String,
    candidat: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Town {
    title: String,
}

/// superjob.ru API. Every request carries the application key header.
pub struct SuperJob {
    client: Client,
    endpoint: String,
    api_key: String,
    keyword: String,
    vacancies: Vec<Vacancy>,
}

impl SuperJob {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        keyword: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            keyword: keyword.into(),
            vacancies: Vec::new(),
        }
    }
}

impl JobBoard for SuperJob {
    fn name(&self) -> &'static str {
        BOARD
    }

    fn fetch(&mut self) -> Result<usize, FetchError> {
        let count = PAGE_SIZE.to_string();
        let pages: Vec<Page> = fetch_pages(BOARD, |page| {
            let page = page.to_string();
            self.client
                .get(&self.endpoint)
                .header(API_KEY_HEADER, &self.api_key)
                .query(&[
                    ("keyword", self.keyword.as_str()),
                    ("page", page.as_str()),
                    ("count", count.as_str()),
                    ("archive", "false"),
                ])
        })?;

        for page in pages {
            self.vacancies.extend(page.objects);
        }
        info!(board = BOARD, keyword = %self.keyword, count = self.vacancies.len(), "vacancies fetched");
        Ok(self.vacancies.len())
    }

    // superjob.ru always reports a currency; unset bounds arrive as 0 or null.
    fn normalize(&self) -> Vec<PostingRecord> {
        self.vacancies
            .iter()
            .filter(|vacancy| vacancy.currency.as_deref() == Some(RUBLES))
            .map(|vacancy| {
                PostingRecord::new(
                    &vacancy.profession,
                    &vacancy.town.title,
                    vacancy.payment_from,
                    vacancy.payment_to,
                    &vacancy.link,
                    &vacancy.firm_name,
                    vacancy.candidat.as_deref().map(plain_text),
                )
            })
            .collect()
    }
}
