use chrono::{Datelike, NaiveDate};

pub mod menu_parser;
pub mod neis_fetcher;

pub const EMOJIS: [&str; 7] = ["🍚", "🥢", "🍱", "🥣", "🍙", "🌤️", "🥬"];

/// ko-KR long form, e.g. `2024년 3월 15일 금요일`
pub fn korean_date_fmt(date: NaiveDate) -> String {
    let week_days = [
        "월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일",
    ];

    format!(
        "{}년 {}월 {}일 {}",
        date.year(),
        date.month(),
        date.day(),
        week_days[date.weekday().num_days_from_monday() as usize],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_date_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(korean_date_fmt(date), "2024년 3월 15일 금요일");
    }

    #[test]
    fn korean_date_sunday() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(korean_date_fmt(date), "2025년 1월 5일 일요일");
    }
}
