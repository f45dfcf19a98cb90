pub mod neis_data_types;

use chrono::{Datelike, Local, NaiveDate};
use neis_data_types::MealRecord;
use thiserror::Error;

use crate::constants::{BREAKFAST_LABEL, DINNER_LABEL, LUNCH_LABEL};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn from_label(label: &str) -> Option<MealType> {
        match label {
            BREAKFAST_LABEL => Some(MealType::Breakfast),
            LUNCH_LABEL => Some(MealType::Lunch),
            DINNER_LABEL => Some(MealType::Dinner),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => BREAKFAST_LABEL,
            MealType::Lunch => LUNCH_LABEL,
            MealType::Dinner => DINNER_LABEL,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            MealType::Breakfast => 0,
            MealType::Lunch => 1,
            MealType::Dinner => 2,
        }
    }
}

/// Raw value of the date field, expected as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateSelection(String);

impl DateSelection {
    pub fn new(value: impl Into<String>) -> Self {
        DateSelection(value.into())
    }

    pub fn today() -> Self {
        let today = Local::now().date_naive();
        DateSelection(format!(
            "{:04}-{:02}-{:02}",
            today.year(),
            today.month(),
            today.day()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `YYYY-MM-DD` -> `YYYYMMDD`
    pub fn compact(&self) -> String {
        self.0.replace('-', "")
    }

    pub fn to_naive_date(&self) -> Result<NaiveDate, LookupError> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d")
            .map_err(|_| LookupError::InvalidDate(self.0.clone()))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    Upstream,
    Relay,
    OfflineSample,
}

#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub records: Vec<MealRecord>,
    pub origin: DataOrigin,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("날짜가 선택되지 않았습니다")]
    NoDateSelected,
    #[error("날짜를 읽을 수 없습니다: '{0}'")]
    InvalidDate(String),
    #[error("응답한 데이터 소스가 없습니다")]
    NoSourceSucceeded,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("relay response carried no 'contents' payload")]
    RelayPayloadMissing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_labels_resolve() {
        assert_eq!(MealType::from_label("조식"), Some(MealType::Breakfast));
        assert_eq!(MealType::from_label("중식"), Some(MealType::Lunch));
        assert_eq!(MealType::from_label("석식"), Some(MealType::Dinner));
        assert_eq!(MealType::from_label("간식"), None);
        for meal_type in MealType::ALL {
            assert_eq!(MealType::from_label(meal_type.label()), Some(meal_type));
        }
    }

    #[test]
    fn compact_date_drops_dashes() {
        assert_eq!(DateSelection::new("2024-03-15").compact(), "20240315");
    }

    #[test]
    fn today_is_iso_formatted() {
        let today = DateSelection::today();
        let expected = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(today.as_str(), expected);
        assert!(today.to_naive_date().is_ok());
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert_eq!(
            DateSelection::new("2024-13-40").to_naive_date(),
            Err(LookupError::InvalidDate("2024-13-40".to_string()))
        );
    }
}
