pub const API_URL: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";
pub const RELAY_URL: &str = "https://api.allorigins.win/get";

// 경기도교육청 / 산본고등학교
pub const ATPT_OFCDC_SC_CODE: &str = "J10";
pub const SD_SCHUL_CODE: &str = "7530079";

pub const NO_DATA_CODE: &str = "INFO-000";
pub const DISH_SEPARATOR: &str = "<br/>";

pub const BREAKFAST_LABEL: &str = "조식";
pub const LUNCH_LABEL: &str = "중식";
pub const DINNER_LABEL: &str = "석식";

pub const HEADING_SUFFIX: &str = " 급식 정보";
pub const NO_DATE_MSG: &str = "날짜를 선택해주세요.";
pub const NO_MEAL_MSG: &str = "해당 날짜의 급식 정보가 없습니다.";
pub const ERROR_MSG: &str = "급식 정보를 불러오는 중 오류가 발생했습니다.";
pub const LOADING_MSG: &str = "급식 정보를 불러오는 중...";
pub const OFFLINE_NOTICE_MSG: &str = "(오프라인 샘플 데이터입니다. 실제 급식과 다를 수 있습니다.)";
