use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Instant;

use tokio::sync::RwLock;

use crate::constants::NO_DATE_MSG;
use crate::data_backend::neis_fetcher::FallbackChain;
use crate::data_types::{DataOrigin, DateSelection, LookupError};
use crate::renderer::{render_outcome, show_error, show_loading};
use crate::view::ViewHandles;

/// Terminal state of one search.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupStatus {
    Rendered(DataOrigin),
    NoMeal,
    Failed(LookupError),
    /// A newer search was started before this one finished; its result was dropped.
    Superseded,
}

/// Date field + search trigger. Clones share the view and the generation counter.
#[derive(Clone)]
pub struct MealLookup {
    view: Arc<RwLock<ViewHandles>>,
    chain: Arc<FallbackChain>,
    generation: Arc<AtomicU64>,
}

impl MealLookup {
    pub fn new(chain: FallbackChain) -> Self {
        MealLookup::with_view(Arc::new(RwLock::new(ViewHandles::new())), chain)
    }

    pub fn with_view(view: Arc<RwLock<ViewHandles>>, chain: FallbackChain) -> Self {
        MealLookup {
            view,
            chain: Arc::new(chain),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn view(&self) -> Arc<RwLock<ViewHandles>> {
        self.view.clone()
    }

    pub async fn init(&self) {
        self.view.write().await.date_field = DateSelection::today();
    }

    pub async fn set_date(&self, value: &str) {
        self.view.write().await.date_field = DateSelection::new(value);
    }

    pub async fn on_load(&self) -> Result<LookupStatus, LookupError> {
        self.init().await;
        self.search().await
    }

    /// Only fails on a missing date; every other outcome leaves a terminal panel visible.
    pub async fn search(&self) -> Result<LookupStatus, LookupError> {
        let date = self.view.read().await.date_field.clone();
        if date.is_empty() {
            self.view.write().await.alert(NO_DATE_MSG);
            return Err(LookupError::NoDateSelected);
        }

        let token = {
            let mut view = self.view.write().await;
            let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            show_loading(&mut view);
            token
        };

        let now = Instant::now();
        let fetched = self.chain.fetch(&date).await;
        log::debug!("lookup #{} for {}: {:.2?}", token, date.as_str(), now.elapsed());

        let mut view = self.view.write().await;
        if self.generation.load(Ordering::SeqCst) != token {
            log::debug!("lookup #{} superseded, dropping result", token);
            return Ok(LookupStatus::Superseded);
        }

        let rendered = fetched.and_then(|outcome| {
            render_outcome(&mut view, &outcome, &date)?;
            Ok(outcome)
        });

        match rendered {
            Ok(outcome) if outcome.records.is_empty() => Ok(LookupStatus::NoMeal),
            Ok(outcome) => {
                log::info!(
                    "Rendered {} meal(s) for {} ({:?})",
                    outcome.records.len(),
                    date.as_str(),
                    outcome.origin
                );
                Ok(LookupStatus::Rendered(outcome.origin))
            }
            Err(e) => {
                log::error!("급식 정보 조회 실패: {}", e);
                show_error(&mut view);
                Ok(LookupStatus::Failed(e))
            }
        }
    }
}
