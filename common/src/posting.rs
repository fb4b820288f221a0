use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A job posting normalized from any of the supported boards.
///
/// Every key is required when deserializing, but `salary_from`, `salary_to`
/// and `requirement` accept `null`: salaries become 0 and the requirement
/// becomes an empty string. An absent salary bound therefore reads the same
/// as an advertised zero.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PostingRecord {
    pub name: String,
    pub area: String,
    #[serde(deserialize_with = "zero_if_null")]
    pub salary_from: i64,
    #[serde(deserialize_with = "zero_if_null")]
    pub salary_to: i64,
    pub url: String,
    pub employer: String,
    #[serde(deserialize_with = "empty_if_null")]
    pub requirement: String,
}

fn zero_if_null<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PostingRecord {
    pub fn new(
        name: impl Into<String>,
        area: impl Into<String>,
        salary_from: Option<i64>,
        salary_to: Option<i64>,
        url: impl Into<String>,
        employer: impl Into<String>,
        requirement: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            area: area.into(),
            salary_from: salary_from.unwrap_or(0),
            salary_to: salary_to.unwrap_or(0),
            url: url.into(),
            employer: employer.into(),
            requirement: requirement.unwrap_or_default(),
        }
    }

    /// Ascending order by the lower salary bound. Only `salary_from` takes
    /// part, so records with equal lower bounds compare equal here even when
    /// they differ otherwise.
    pub fn cmp_by_salary(&self, other: &Self) -> Ordering {
        self.salary_from.cmp(&other.salary_from)
    }

    pub fn is_paid_more_than(&self, other: &Self) -> bool {
        self.cmp_by_salary(other) == Ordering::Greater
    }
}

impl TryFrom<serde_json::Value> for PostingRecord {
    type Error = crate::Error;

    fn try_from(value: serde_json::Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl fmt::Display for PostingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {}", self.name, self.area)?;
        writeln!(
            f,
            "Salary from {} to {} RUB",
            self.salary_from, self.salary_to
        )?;
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping() -> serde_json::Value {
        json!({
            "name": "Rust developer",
            "area": "Moscow",
            "salary_from": 150000,
            "salary_to": 250000,
            "url": "https://hh.ru/vacancy/1",
            "employer": "Acme",
            "requirement": "Ownership and borrowing"
        })
    }

    #[test]
    fn test_try_from_full_mapping() {
        let record = PostingRecord::try_from(mapping()).unwrap();
        assert_eq!(record.name, "Rust developer");
        assert_eq!(record.area, "Moscow");
        assert_eq!(record.salary_from, 150000);
        assert_eq!(record.salary_to, 250000);
        assert_eq!(record.employer, "Acme");
    }

    #[test]
    fn test_null_salaries_become_zero() {
        let mut value = mapping();
        value["salary_from"] = serde_json::Value::Null;
        value["salary_to"] = serde_json::Value::Null;

        let record = PostingRecord::try_from(value).unwrap();
        assert_eq!(record.salary_from, 0);
        assert_eq!(record.salary_to, 0);
    }

    #[test]
    fn test_null_requirement_becomes_empty() {
        let mut value = mapping();
        value["requirement"] = serde_json::Value::Null;

        let record = PostingRecord::try_from(value).unwrap();
        assert_eq!(record.requirement, "");
    }

    #[test]
    fn test_missing_key_is_rejected() {
        for key in [
            "name",
            "area",
            "salary_from",
            "salary_to",
            "url",
            "employer",
            "requirement",
        ] {
            let mut value = mapping();
            value.as_object_mut().unwrap().remove(key);
            let err = PostingRecord::try_from(value).unwrap_err();
            assert!(
                err.to_string().contains(key),
                "error for missing `{key}` was: {err}"
            );
        }
    }

    #[test]
    fn test_new_coerces_absent_values() {
        let record = PostingRecord::new("Tester", "Kazan", None, Some(90000), "u", "e", None);
        assert_eq!(record.salary_from, 0);
        assert_eq!(record.salary_to, 90000);
        assert_eq!(record.requirement, "");
    }

    #[test]
    fn test_salary_comparison() {
        let low = PostingRecord::new("a", "x", Some(1000), None, "u", "e", None);
        let high = PostingRecord::new("b", "x", Some(2000), None, "u", "e", None);
        let same = PostingRecord::new("c", "y", Some(1000), Some(5000), "u", "e", None);

        assert!(high.is_paid_more_than(&low));
        assert!(!low.is_paid_more_than(&high));
        assert!(!low.is_paid_more_than(&same));
        assert_eq!(low.cmp_by_salary(&high), Ordering::Less);
        assert_eq!(low.cmp_by_salary(&same), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        let record = PostingRecord::try_from(mapping()).unwrap();
        assert_eq!(
            record.to_string(),
            "Rust developer, Moscow\nSalary from 150000 to 250000 RUB\nhttps://hh.ru/vacancy/1"
        );
    }
}
