//! Store locator: API key input, store list selection and the map.
//! Search results are cached per API key until refreshed.

use outfit_core::AppError;
use outfit_places::{
    select_store, store_labels, MapView, Place, PlaceClient, SearchCache, SearchRequest,
};

use super::DashboardError;
use crate::error_mapping::IntoAppError;
use crate::notice::Notice;

/// User actions on the store locator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    /// API key entered or changed
    Load { api_key: String },
    /// Store picked from the list (zero-based)
    Select(usize),
    /// Drop the cached results for the current key and search again
    Refresh,
}

/// Everything the store locator shows after a command
#[derive(Debug, Clone, Default)]
pub struct StoreView {
    pub notices: Vec<Notice>,
    pub labels: Vec<String>,
    pub stores: Vec<Place>,
    pub selected: Option<Place>,
    pub map: Option<MapView>,
}

impl StoreView {
    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(Notice::is_error)
    }
}

pub struct StoreLocator {
    client: PlaceClient,
    cache: SearchCache,
    request: SearchRequest,
    zoom: u8,
    api_key: Option<String>,
    /// `None` when the last search failed, as opposed to an empty result
    stores: Option<Vec<Place>>,
    selected: usize,
}

impl StoreLocator {
    pub fn new(client: PlaceClient, request: SearchRequest, zoom: u8) -> Self {
        Self {
            client,
            cache: SearchCache::new(),
            request,
            zoom,
            api_key: None,
            stores: None,
            selected: 0,
        }
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    pub async fn handle(&mut self, command: StoreCommand) -> StoreView {
        let mut notices = Vec::new();

        match command {
            StoreCommand::Load { api_key } => {
                let api_key = api_key.trim().to_string();
                if api_key.is_empty() {
                    self.api_key = None;
                    self.stores = None;
                } else {
                    let previous = match self.api_key.as_deref() {
                        Some(current) if current == api_key => self.selected_id(),
                        _ => None,
                    };
                    self.stores = self.load(&api_key, &mut notices).await;
                    self.api_key = Some(api_key);
                    self.reselect(previous.as_deref());
                }
            }
            StoreCommand::Select(index) => {
                if let Err(e) = self.select(index) {
                    let app_err = AppError::from(e);
                    tracing::warn!("{}", app_err);
                    notices.push(Notice::warning(app_err.user_message()));
                }
            }
            StoreCommand::Refresh => {
                if let Some(api_key) = self.api_key.clone() {
                    if self.cache.invalidate(&api_key) {
                        tracing::info!("Invalidated cached store search");
                    }
                    let previous = self.selected_id();
                    self.stores = self.load(&api_key, &mut notices).await;
                    self.reselect(previous.as_deref());
                }
            }
        }

        self.render(notices)
    }

    fn select(&mut self, index: usize) -> Result<(), DashboardError> {
        let stores = self.stores.as_deref().unwrap_or_default();
        select_store(stores, index).ok_or(DashboardError::NoSuchStore(index))?;
        self.selected = index;
        Ok(())
    }

    fn selected_id(&self) -> Option<String> {
        let stores = self.stores.as_deref()?;
        select_store(stores, self.selected).map(|store| store.id.clone())
    }

    /// Point the selection at `id` in the current results, or the first store
    fn reselect(&mut self, id: Option<&str>) {
        let position = match (id, self.stores.as_deref()) {
            (Some(id), Some(stores)) => stores.iter().position(|store| store.id == id),
            _ => None,
        };
        self.selected = position.unwrap_or(0);
    }

    async fn load(&self, api_key: &str, notices: &mut Vec<Notice>) -> Option<Vec<Place>> {
        if let Some(stores) = self.cache.get(api_key) {
            tracing::info!("Using cached store search ({} places)", stores.len());
            return Some(stores);
        }

        match self.client.search(api_key, &self.request).await {
            Ok(stores) => {
                self.cache.insert(api_key, stores.clone());
                Some(stores)
            }
            Err(e) => {
                tracing::error!("Store search failed: {}", e);
                notices.push(Notice::error(format!("API 호출 중 오류 발생: {}", e)));
                notices.push(Notice::error(e.into_app_error().user_message()));
                None
            }
        }
    }

    fn render(&self, mut notices: Vec<Notice>) -> StoreView {
        if self.api_key.is_none() {
            notices.push(Notice::warning(
                AppError::from(DashboardError::MissingApiKey).user_message(),
            ));
            return StoreView {
                notices,
                ..StoreView::default()
            };
        }

        let stores = match &self.stores {
            None => {
                notices.push(Notice::error("옷가게 정보를 불러오는 데 실패했습니다."));
                return StoreView {
                    notices,
                    ..StoreView::default()
                };
            }
            Some(stores) if stores.is_empty() => {
                notices.push(Notice::info("검색 반경 내에 옷가게 정보가 없습니다."));
                return StoreView {
                    notices,
                    ..StoreView::default()
                };
            }
            Some(stores) => stores,
        };

        notices.push(Notice::info(format!("🔍 검색된 옷가게 ({}개)", stores.len())));

        let selected = select_store(stores, self.selected).or_else(|| stores.first());
        let map = selected.and_then(|store| {
            match MapView::for_selection(stores, store, self.zoom) {
                Ok(map) => Some(map),
                Err(e) => {
                    tracing::warn!("Cannot place map: {}", e);
                    notices.push(Notice::warning(e.into_app_error().user_message()));
                    None
                }
            }
        });

        StoreView {
            notices,
            labels: store_labels(stores),
            stores: stores.clone(),
            selected: selected.cloned(),
            map,
        }
    }
}
