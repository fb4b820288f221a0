use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{board}: request for page {page} failed: {source}")]
    Http {
        board: &'static str,
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("{board}: page {page} has an unexpected shape: {source}")]
    Decode {
        board: &'static str,
        page: u32,
        #[source]
        source: serde_json::Error,
    },
}
