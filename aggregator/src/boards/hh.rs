use common::PostingRecord;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;

use super::{fetch_pages, JobBoard, PAGE_SIZE};
use crate::text::plain_text;
use crate::FetchError;

pub const DEFAULT_ENDPOINT: &str = "https://api.hh.ru/vacancies";

const BOARD: &str = "hh.ru";
const RUBLES: &str = "RUR";

#[derive(Debug, Deserialize)]
struct Page {
    items: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    name: String,
    area: Named,
    salary: Option<Salary>,
    alternate_url: String,
    employer: Named,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<i64>,
    to: Option<i64>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    requirement: Option<String>,
}

/// hh.ru search API. Needs no credentials.
pub struct HeadHunter {
    client: Client,
    endpoint: String,
    keyword: String,
    vacancies: Vec<Vacancy>,
}

impl HeadHunter {
    pub fn new(client: Client, endpoint: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            keyword: keyword.into(),
            vacancies: Vec::new(),
        }
    }
}

impl JobBoard for HeadHunter {
    fn name(&self) -> &'static str {
        BOARD
    }

    fn fetch(&mut self) -> Result<usize, FetchError> {
        let per_page = PAGE_SIZE.to_string();
        let pages: Vec<Page> = fetch_pages(BOARD, |page| {
            let page = page.to_string();
            self.client.get(&self.endpoint).query(&[
                ("text", self.keyword.as_str()),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
                ("archive", "false"),
            ])
        })?;

        for page in pages {
            self.vacancies.extend(page.items);
        }
        info!(board = BOARD, keyword = %self.keyword, count = self.vacancies.len(), "vacancies fetched");
        Ok(self.vacancies.len())
    }

    fn normalize(&self) -> Vec<PostingRecord> {
        self.vacancies
            .iter()
            .filter_map(|vacancy| {
                let salary = vacancy.salary.as_ref()?;
                if salary.currency.as_deref() != Some(RUBLES) {
                    return None;
                }
                Some(PostingRecord::new(
                    &vacancy.name,
                    &vacancy.area.name,
                    salary.from,
                    salary.to,
                    &vacancy.alternate_url,
                    &vacancy.employer.name,
                    vacancy.snippet.requirement.as_deref().map(plain_text),
                ))
            })
            .collect()
    }
}
