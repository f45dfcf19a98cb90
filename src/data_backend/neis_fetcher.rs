use crate::constants::{
    ATPT_OFCDC_SC_CODE, BREAKFAST_LABEL, DINNER_LABEL, LUNCH_LABEL, NO_DATA_CODE, SD_SCHUL_CODE,
};
use crate::data_types::neis_data_types::{MealRecord, MealRows, NeisResult, RelayEnvelope};
use crate::data_types::{DataOrigin, DateSelection, FetchError, FetchOutcome, LookupError};

use async_trait::async_trait;
use serde_json::Value;
use std::time::Instant;

/// One way of getting the meal rows for a date. Tried in order by [`FallbackChain`].
#[async_trait]
pub trait MealSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self, date: &DateSelection) -> Result<FetchOutcome, FetchError>;
}

pub fn build_meal_request(
    client: &reqwest::Client,
    api_url: &str,
    date: &DateSelection,
) -> Result<reqwest::Request, FetchError> {
    let compact_date = date.compact();
    let request = client
        .get(api_url)
        .query(&[
            ("ATPT_OFCDC_SC_CODE", ATPT_OFCDC_SC_CODE),
            ("SD_SCHUL_CODE", SD_SCHUL_CODE),
            ("MLSV_YMD", compact_date.as_str()),
            ("Type", "json"),
        ])
        .build()?;

    Ok(request)
}

/// Explicit no-data code and any unexpected shape both end up as an empty list.
pub fn classify_response(data: &Value) -> Vec<MealRecord> {
    if let Some(result) = data.get("RESULT") {
        if let Ok(result) = serde_json::from_value::<NeisResult>(result.clone()) {
            if result.code == NO_DATA_CODE {
                log::debug!("NEIS reports no data: {}", result.message);
                return Vec::new();
            }
        }
    }

    match data
        .get("mealServiceDietInfo")
        .and_then(|info| info.get(1))
        .map(|rows| serde_json::from_value::<MealRows>(rows.clone()))
    {
        Some(Ok(rows)) => rows
            .row
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<MealRecord>(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::debug!("skipping undecodable row: {}", e);
                    None
                }
            })
            .collect(),
        Some(Err(e)) => {
            log::debug!("unexpected row shape: {}", e);
            Vec::new()
        }
        None => Vec::new(),
    }
}

pub struct NeisApi {
    client: reqwest::Client,
    api_url: String,
}

impl NeisApi {
    pub fn new(client: reqwest::Client, api_url: &str) -> Self {
        NeisApi {
            client,
            api_url: api_url.to_string(),
        }
    }
}

#[async_trait]
impl MealSource for NeisApi {
    fn name(&self) -> &str {
        "NEIS"
    }

    async fn fetch(&self, date: &DateSelection) -> Result<FetchOutcome, FetchError> {
        let request = build_meal_request(&self.client, &self.api_url, date)?;
        log::debug!("GET {}", request.url());

        let data = self.client.execute(request).await?.json::<Value>().await?;

        Ok(FetchOutcome {
            records: classify_response(&data),
            origin: DataOrigin::Upstream,
        })
    }
}

/// Re-requests the NEIS url through a pass-through relay (allorigins `/get`).
pub struct CorsRelay {
    client: reqwest::Client,
    api_url: String,
    relay_url: String,
}

impl CorsRelay {
    pub fn new(client: reqwest::Client, api_url: &str, relay_url: &str) -> Self {
        CorsRelay {
            client,
            api_url: api_url.to_string(),
            relay_url: relay_url.to_string(),
        }
    }
}

#[async_trait]
impl MealSource for CorsRelay {
    fn name(&self) -> &str {
        "relay"
    }

    async fn fetch(&self, date: &DateSelection) -> Result<FetchOutcome, FetchError> {
        let upstream = build_meal_request(&self.client, &self.api_url, date)?;

        let envelope = self
            .client
            .get(&self.relay_url)
            .query(&[("url", upstream.url().as_str())])
            .send()
            .await?
            .json::<RelayEnvelope>()
            .await?;

        let contents = envelope.contents.ok_or(FetchError::RelayPayloadMissing)?;
        let data: Value = serde_json::from_str(&contents)?;

        Ok(FetchOutcome {
            records: classify_response(&data),
            origin: DataOrigin::Relay,
        })
    }
}

/// Fixed three-meal dataset for offline/dev use. Never fails.
pub struct OfflineSample;

impl OfflineSample {
    pub fn records() -> Vec<MealRecord> {
        vec![
            MealRecord::new(
                BREAKFAST_LABEL,
                "쌀밥<br/>미역국5.6.9.18.<br/>돼지불고기5.6.10.13.<br/>시금치나물무침5.6.<br/>김치9.13.<br/>우유2.",
            ),
            MealRecord::new(
                LUNCH_LABEL,
                "현미밥<br/>콩나물국5.6.9.18.<br/>치킨까스1.2.5.6.13.15.<br/>브로콜리무침5.6.<br/>배추김치9.13.<br/>딸기우유2.",
            ),
            MealRecord::new(
                DINNER_LABEL,
                "잡곡밥5.<br/>된장찌개5.6.9.18.<br/>제육볶음5.6.10.13.<br/>콩나물무침5.6.<br/>김치9.13.<br/>요구르트2.",
            ),
        ]
    }
}

#[async_trait]
impl MealSource for OfflineSample {
    fn name(&self) -> &str {
        "offline sample"
    }

    async fn fetch(&self, date: &DateSelection) -> Result<FetchOutcome, FetchError> {
        log::warn!(
            "All network sources failed for {}, using offline sample data",
            date.as_str()
        );

        Ok(FetchOutcome {
            records: OfflineSample::records(),
            origin: DataOrigin::OfflineSample,
        })
    }
}

pub struct FallbackChain {
    sources: Vec<Box<dyn MealSource>>,
}

impl FallbackChain {
    pub fn new(sources: Vec<Box<dyn MealSource>>) -> Self {
        FallbackChain { sources }
    }

    /// NEIS -> relay -> (optionally) offline sample
    pub fn standard(
        client: reqwest::Client,
        api_url: &str,
        relay_url: &str,
        offline_sample: bool,
    ) -> Self {
        let mut sources: Vec<Box<dyn MealSource>> = vec![
            Box::new(NeisApi::new(client.clone(), api_url)),
            Box::new(CorsRelay::new(client, api_url, relay_url)),
        ];
        if offline_sample {
            sources.push(Box::new(OfflineSample));
        }

        FallbackChain::new(sources)
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Each source is asked at most once; the first success wins.
    pub async fn fetch(&self, date: &DateSelection) -> Result<FetchOutcome, LookupError> {
        for source in &self.sources {
            let now = Instant::now();
            match source.fetch(date).await {
                Ok(outcome) => {
                    log::debug!("{} response: {:.2?}", source.name(), now.elapsed());
                    return Ok(outcome);
                }
                Err(e) => {
                    log::warn!(
                        "{} request failed after {:.2?}: {}",
                        source.name(),
                        now.elapsed(),
                        e
                    );
                }
            }
        }

        Err(LookupError::NoSourceSucceeded)
    }
}
