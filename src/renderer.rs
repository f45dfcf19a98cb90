use crate::constants::{ERROR_MSG, HEADING_SUFFIX, LOADING_MSG, NO_MEAL_MSG, OFFLINE_NOTICE_MSG};
use crate::data_backend::{korean_date_fmt, menu_parser::parse_menu_items, EMOJIS};
use crate::data_types::neis_data_types::MealRecord;
use crate::data_types::{DataOrigin, DateSelection, FetchOutcome, LookupError, MealType};
use crate::view::{Panel, ViewHandles};

use rand::Rng;

/// Hides every panel and card. Leaves the lists and the date field alone.
pub fn reset_all(view: &mut ViewHandles) {
    for panel in Panel::ALL {
        view.set_visible(panel, false);
    }
    for meal_type in MealType::ALL {
        view.card_mut(meal_type).visible = false;
    }
    view.offline_notice = false;
}

pub fn show_loading(view: &mut ViewHandles) {
    reset_all(view);
    view.set_visible(Panel::Loading, true);
}

pub fn show_error(view: &mut ViewHandles) {
    reset_all(view);
    view.set_visible(Panel::Error, true);
}

pub fn render_result(
    view: &mut ViewHandles,
    records: &[MealRecord],
    date: &DateSelection,
) -> Result<(), LookupError> {
    reset_all(view);

    if records.is_empty() {
        view.set_visible(Panel::NoMeal, true);
        return Ok(());
    }

    let heading = korean_date_fmt(date.to_naive_date()?);
    view.date_heading = format!("{}{}", heading, HEADING_SUFFIX);

    for record in records {
        if record.meal_type.is_empty() || record.raw_dish_text.is_empty() {
            continue;
        }
        let Some(meal_type) = MealType::from_label(&record.meal_type) else {
            log::debug!("ignoring unknown meal type '{}'", record.meal_type);
            continue;
        };

        let card = view.card_mut(meal_type);
        card.items = parse_menu_items(&record.raw_dish_text);
        card.visible = true;
    }

    view.set_visible(Panel::MealInfo, true);
    Ok(())
}

/// Like [`render_result`], but labels sample data as such.
pub fn render_outcome(
    view: &mut ViewHandles,
    outcome: &FetchOutcome,
    date: &DateSelection,
) -> Result<(), LookupError> {
    render_result(view, &outcome.records, date)?;
    view.offline_notice = outcome.origin == DataOrigin::OfflineSample;
    Ok(())
}

/// Text of everything currently visible, for the terminal.
pub fn render_plain(view: &ViewHandles) -> String {
    let mut msg = String::new();

    if view.is_visible(Panel::Loading) {
        msg += &format!("{}\n", LOADING_MSG);
    }
    if view.is_visible(Panel::Error) {
        msg += &format!("{}\n", ERROR_MSG);
    }
    if view.is_visible(Panel::NoMeal) {
        msg += &format!("{}\n", NO_MEAL_MSG);
    }

    if view.is_visible(Panel::MealInfo) {
        let rand_emoji = EMOJIS[rand::thread_rng().gen_range(0..EMOJIS.len())];
        msg += &format!("{} {} {}\n", rand_emoji, view.date_heading, rand_emoji);

        if view.offline_notice {
            msg += &format!("      {}\n", OFFLINE_NOTICE_MSG);
        }

        for meal_type in view.visible_cards() {
            msg += &format!("\n[{}]\n", meal_type.label());
            for item in &view.card(meal_type).items {
                msg += &format!(" • {}\n", item);
            }
        }
    }

    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_backend::neis_fetcher::classify_response;

    fn date() -> DateSelection {
        DateSelection::new("2024-03-15")
    }

    fn all_hidden(view: &ViewHandles) -> bool {
        view.visible_panels().is_empty() && view.visible_cards().is_empty()
    }

    #[test]
    fn reset_twice_keeps_everything_hidden() {
        let mut view = ViewHandles::new();
        render_result(
            &mut view,
            &[MealRecord::new("조식", "쌀밥")],
            &date(),
        )
        .unwrap();
        view.set_visible(Panel::Error, true);

        reset_all(&mut view);
        assert!(all_hidden(&view));
        reset_all(&mut view);
        assert!(all_hidden(&view));
    }

    #[test]
    fn loading_is_exclusive() {
        let mut view = ViewHandles::new();
        view.set_visible(Panel::NoMeal, true);
        view.card_mut(MealType::Lunch).visible = true;

        show_loading(&mut view);
        assert_eq!(view.visible_panels(), vec![Panel::Loading]);
        assert!(view.visible_cards().is_empty());
    }

    #[test]
    fn error_is_exclusive() {
        let mut view = ViewHandles::new();
        show_loading(&mut view);
        view.card_mut(MealType::Dinner).visible = true;

        show_error(&mut view);
        assert_eq!(view.visible_panels(), vec![Panel::Error]);
        assert!(view.visible_cards().is_empty());
    }

    #[test]
    fn empty_records_show_no_meal_panel() {
        let mut view = ViewHandles::new();
        show_loading(&mut view);

        render_result(&mut view, &[], &date()).unwrap();
        assert_eq!(view.visible_panels(), vec![Panel::NoMeal]);
        assert!(view.visible_cards().is_empty());
    }

    #[test]
    fn no_data_response_renders_no_meal_panel() {
        let data = serde_json::json!({
            "RESULT": {"CODE": "INFO-000", "MESSAGE": "해당하는 데이터가 없습니다."}
        });
        let mut view = ViewHandles::new();
        show_loading(&mut view);

        render_result(&mut view, &classify_response(&data), &date()).unwrap();
        assert_eq!(view.visible_panels(), vec![Panel::NoMeal]);
        assert!(view.visible_cards().is_empty());
    }

    #[test]
    fn breakfast_and_lunch_leave_dinner_hidden() {
        let mut view = ViewHandles::new();
        let records = [
            MealRecord::new("조식", "쌀밥<br/>미역국5.6.9.18."),
            MealRecord::new("중식", "현미밥<br/>치킨까스1.2.5.6.13.15."),
        ];

        render_result(&mut view, &records, &date()).unwrap();

        assert_eq!(view.visible_panels(), vec![Panel::MealInfo]);
        assert_eq!(view.visible_cards(), vec![MealType::Breakfast, MealType::Lunch]);
        assert_eq!(view.card(MealType::Breakfast).items, vec!["쌀밥", "미역국"]);
        assert_eq!(view.card(MealType::Lunch).items, vec!["현미밥", "치킨까스"]);
        assert!(!view.card(MealType::Dinner).visible);
        assert_eq!(view.date_heading, "2024년 3월 15일 금요일 급식 정보");
    }

    #[test]
    fn previous_items_are_replaced() {
        let mut view = ViewHandles::new();
        render_result(&mut view, &[MealRecord::new("석식", "잡곡밥5.<br/>김치9.13.")], &date())
            .unwrap();
        render_result(&mut view, &[MealRecord::new("석식", "된장찌개5.6.")], &date()).unwrap();

        assert_eq!(view.card(MealType::Dinner).items, vec!["된장찌개"]);
    }

    #[test]
    fn unknown_or_incomplete_records_are_skipped() {
        let mut view = ViewHandles::new();
        let records = [
            MealRecord::new("간식", "떡"),
            MealRecord::new("중식", ""),
            MealRecord::new("", "쌀밥"),
        ];

        render_result(&mut view, &records, &date()).unwrap();
        assert_eq!(view.visible_panels(), vec![Panel::MealInfo]);
        assert!(view.visible_cards().is_empty());
    }

    #[test]
    fn malformed_date_fails_rendering() {
        let mut view = ViewHandles::new();
        let result = render_result(
            &mut view,
            &[MealRecord::new("중식", "현미밥")],
            &DateSelection::new("15.03.2024"),
        );
        assert_eq!(result, Err(LookupError::InvalidDate("15.03.2024".to_string())));
    }

    #[test]
    fn offline_sample_is_labeled() {
        let mut view = ViewHandles::new();
        let outcome = FetchOutcome {
            records: vec![MealRecord::new("조식", "쌀밥")],
            origin: DataOrigin::OfflineSample,
        };

        render_outcome(&mut view, &outcome, &date()).unwrap();
        assert!(view.offline_notice);
        assert!(render_plain(&view).contains(OFFLINE_NOTICE_MSG));

        reset_all(&mut view);
        assert!(!view.offline_notice);
    }

    #[test]
    fn plain_text_lists_visible_cards_only() {
        let mut view = ViewHandles::new();
        render_result(
            &mut view,
            &[MealRecord::new("석식", "잡곡밥5.<br/>요구르트2.")],
            &date(),
        )
        .unwrap();

        let text = render_plain(&view);
        assert!(text.contains("2024년 3월 15일 금요일 급식 정보"));
        assert!(text.contains("[석식]\n • 잡곡밥\n • 요구르트\n"));
        assert!(!text.contains("[조식]"));
        assert!(!text.contains(OFFLINE_NOTICE_MSG));
    }
}
