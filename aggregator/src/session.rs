//! Line-oriented prompts for one search run.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use common::{JsonStore, PostingRecord};

const PLATFORM_PROMPT: &str = "Choose a platform to search:\n1. hh.ru\n2. superjob.ru\n3. Both";
const ACTION_PROMPT: &str = "1. Show all\n2. Sort by salary (ascending)\n3. Show top 10 by minimum salary\nType \"exit\" to quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    HeadHunter,
    SuperJob,
    Both,
}

impl Platform {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Platform::HeadHunter),
            "2" => Some(Platform::SuperJob),
            "3" => Some(Platform::Both),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowAll,
    SortedBySalary,
    TopTen,
    Exit,
}

impl Action {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Action::ShowAll),
            "2" => Some(Action::SortedBySalary),
            "3" => Some(Action::TopTen),
            "exit" => Some(Action::Exit),
            _ => None,
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// `None` once the input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn ask_keyword(&mut self) -> io::Result<Option<String>> {
        self.prompt("Enter a search query:")
    }

    /// Re-asks until one of the listed platforms is picked.
    pub fn ask_platform(&mut self) -> io::Result<Option<Platform>> {
        while let Some(line) = self.prompt(PLATFORM_PROMPT)? {
            if let Some(platform) = Platform::parse(&line) {
                return Ok(Some(platform));
            }
        }
        Ok(None)
    }

    /// Runs queries against `store` until `exit` or end of input. Unknown
    /// input just shows the menu again.
    pub fn query_loop(&mut self, store: &JsonStore) -> Result<()> {
        while let Some(line) = self.prompt(ACTION_PROMPT)? {
            let records = match Action::parse(&line) {
                Some(Action::ShowAll) => store.select_all()?,
                Some(Action::SortedBySalary) => store.sorted_by_salary()?,
                Some(Action::TopTen) => store.top_ten()?,
                Some(Action::Exit) => break,
                None => continue,
            };
            self.show(&records)?;
        }
        Ok(())
    }

    fn show(&mut self, records: &[PostingRecord]) -> io::Result<()> {
        for record in records {
            writeln!(self.output, "\n{record}\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.output).unwrap()
    }

    fn store(dir: &TempDir) -> JsonStore {
        let store = JsonStore::for_keyword(dir.path(), "rust");
        let record = |name: &str, salary: i64| {
            PostingRecord::new(name, "Moscow", Some(salary), None, "u", "e", None)
        };
        store
            .create(&[record("mid", 1000), record("low", 500), record("high", 1500)])
            .unwrap();
        store
    }

    fn names_in_order(text: &str) -> Vec<&str> {
        text.lines()
            .filter_map(|line| line.strip_suffix(", Moscow"))
            .collect()
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!(Platform::parse("1"), Some(Platform::HeadHunter));
        assert_eq!(Platform::parse("2\n"), Some(Platform::SuperJob));
        assert_eq!(Platform::parse(" 3 "), Some(Platform::Both));
        assert_eq!(Platform::parse("4"), None);
        assert_eq!(Platform::parse(""), None);
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(Action::parse("1"), Some(Action::ShowAll));
        assert_eq!(Action::parse("2"), Some(Action::SortedBySalary));
        assert_eq!(Action::parse("3"), Some(Action::TopTen));
        assert_eq!(Action::parse("exit"), Some(Action::Exit));
        assert_eq!(Action::parse("EXIT"), None);
    }

    #[test]
    fn test_keyword_keeps_inner_spaces() {
        let mut s = session("rust developer\n");
        assert_eq!(s.ask_keyword().unwrap().as_deref(), Some("rust developer"));
    }

    #[test]
    fn test_platform_reprompts_until_valid() {
        let mut s = session("9\nhh\n2\n");
        assert_eq!(s.ask_platform().unwrap(), Some(Platform::SuperJob));
        assert_eq!(output(s).matches("Choose a platform").count(), 3);
    }

    #[test]
    fn test_platform_end_of_input() {
        let mut s = session("9\n");
        assert_eq!(s.ask_platform().unwrap(), None);
    }

    #[test]
    fn test_query_loop_views() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let mut s = session("1\n");
        s.query_loop(&store).unwrap();
        assert_eq!(names_in_order(&output(s)), vec!["mid", "low", "high"]);

        let mut s = session("2\n");
        s.query_loop(&store).unwrap();
        assert_eq!(names_in_order(&output(s)), vec!["low", "mid", "high"]);

        let mut s = session("3\nexit\n");
        s.query_loop(&store).unwrap();
        assert_eq!(names_in_order(&output(s)), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_query_loop_stops_at_exit() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let mut s = session("bogus\nexit\n1\n");
        s.query_loop(&store).unwrap();
        let text = output(s);
        assert_eq!(text.matches("Type \"exit\" to quit").count(), 2);
        assert!(names_in_order(&text).is_empty());
    }

    #[test]
    fn test_query_loop_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::for_keyword(dir.path(), "absent");

        let mut s = session("1\n");
        assert!(s.query_loop(&store).is_err());
    }
}
