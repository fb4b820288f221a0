//! Cleanup for free-form requirement text coming from the boards.

use std::sync::OnceLock;

use regex::Regex;
use scraper::Html;

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Drops markup such as hh.ru's `<highlighttext>` tags, decodes entities and
/// collapses runs of whitespace into single spaces.
pub fn plain_text(fragment: &str) -> String {
    let document = Html::parse_fragment(fragment);
    let text: String = document.root_element().text().collect();
    whitespace().replace_all(text.trim(), " ").into_owned()
}
