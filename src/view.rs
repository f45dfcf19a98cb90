use crate::data_types::{DateSelection, MealType};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Panel {
    Loading,
    MealInfo,
    Error,
    NoMeal,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Loading, Panel::MealInfo, Panel::Error, Panel::NoMeal];

    fn index(&self) -> usize {
        match self {
            Panel::Loading => 0,
            Panel::MealInfo => 1,
            Panel::Error => 2,
            Panel::NoMeal => 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealCard {
    pub visible: bool,
    pub items: Vec<String>,
}

/// Every display region a lookup touches. Passed explicitly to the renderer,
/// so a headless copy works the same as the terminal one.
#[derive(Debug, Clone, Default)]
pub struct ViewHandles {
    panels: [bool; 4],
    cards: [MealCard; 3],
    pub date_field: DateSelection,
    pub date_heading: String,
    pub offline_notice: bool,
    pub alerts: Vec<String>,
}

impl ViewHandles {
    pub fn new() -> Self {
        ViewHandles::default()
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.panels[panel.index()]
    }

    pub fn set_visible(&mut self, panel: Panel, visible: bool) {
        self.panels[panel.index()] = visible;
    }

    pub fn card(&self, meal_type: MealType) -> &MealCard {
        &self.cards[meal_type.index()]
    }

    pub fn card_mut(&mut self, meal_type: MealType) -> &mut MealCard {
        &mut self.cards[meal_type.index()]
    }

    pub fn visible_panels(&self) -> Vec<Panel> {
        Panel::ALL
            .into_iter()
            .filter(|panel| self.is_visible(*panel))
            .collect()
    }

    pub fn visible_cards(&self) -> Vec<MealType> {
        MealType::ALL
            .into_iter()
            .filter(|meal_type| self.card(*meal_type).visible)
            .collect()
    }

    /// Stands in for a blocking browser alert.
    pub fn alert(&mut self, msg: &str) {
        log::warn!("{}", msg);
        self.alerts.push(msg.to_string());
    }
}
