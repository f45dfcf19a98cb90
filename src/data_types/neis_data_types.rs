use serde::{Deserialize, Serialize};

/// One row of `mealServiceDietInfo[1].row`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MealRecord {
    #[serde(rename = "MMEAL_SC_NM", default)]
    pub meal_type: String,
    #[serde(rename = "DDISH_NM", default)]
    pub raw_dish_text: String,
    // MLSV_YMD, CAL_INFO, NTR_INFO, ORPLC_INFO, ... are ignored
}

impl MealRecord {
    pub fn new(meal_type: &str, raw_dish_text: &str) -> Self {
        MealRecord {
            meal_type: meal_type.to_string(),
            raw_dish_text: raw_dish_text.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct NeisResult {
    #[serde(rename = "CODE", default)]
    pub code: String,
    #[serde(rename = "MESSAGE", default)]
    pub message: String,
}

/// Rows stay raw so one malformed entry doesn't take the others with it.
#[derive(Serialize, Deserialize, Debug)]
pub struct MealRows {
    pub row: Vec<serde_json::Value>,
}

/// allorigins `/get` wraps the proxied body as a string
#[derive(Serialize, Deserialize, Debug)]
pub struct RelayEnvelope {
    pub contents: Option<String>,
}
