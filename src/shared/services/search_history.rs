//! Load sequence behind the past searches screen
//!
//! Storage read, token decode and fetch run strictly in that order; every
//! path ends in a `LoadOutcome` so the view can settle unconditionally.

use super::api_service::{ApiService, HttpClient, PlatformHttpClient};
use crate::config::AppConfig;
use crate::domain::models::{LoadOutcome, SearchRecord};
use crate::shared::errors::HistoryError;
use crate::shared::logging;
use crate::shared::storage::{CredentialStore, PlatformCredentialStore};
use crate::shared::token::decode_identity;

pub struct SearchHistoryLoader<S: CredentialStore, C: HttpClient> {
    store: S,
    api: ApiService<C>,
    credential_key: String,
}

impl<S: CredentialStore, C: HttpClient> SearchHistoryLoader<S, C> {
    pub fn new(store: S, api: ApiService<C>, credential_key: impl Into<String>) -> Self {
        Self {
            store,
            api,
            credential_key: credential_key.into(),
        }
    }

    pub async fn load(&self) -> LoadOutcome {
        match self.try_load().await {
            Ok(Some(records)) => LoadOutcome::Loaded(records),
            Ok(None) => {
                logging::log_no_credential(&self.credential_key);
                LoadOutcome::NoCredential
            }
            Err(err) => {
                logging::log_load_error(&err);
                LoadOutcome::Failed(err)
            }
        }
    }

    async fn try_load(&self) -> Result<Option<Vec<SearchRecord>>, HistoryError> {
        let Some(token) = self.store.read(&self.credential_key).await? else {
            return Ok(None);
        };

        let identity = decode_identity(&token)?;
        logging::log_identity_decoded(&identity.user_id);

        let records = self.api.get_past_searches(&identity.user_id).await?;
        Ok(Some(records))
    }
}

impl SearchHistoryLoader<PlatformCredentialStore, PlatformHttpClient> {
    /// Loader wired to the running platform's storage and HTTP client
    pub fn for_platform(config: &AppConfig) -> Self {
        #[cfg(target_arch = "wasm32")]
        let store = PlatformCredentialStore::default();
        #[cfg(not(target_arch = "wasm32"))]
        let store = config
            .credential_dir
            .clone()
            .map(PlatformCredentialStore::new)
            .unwrap_or_default();

        let api = ApiService::new(config.api_base_url.clone(), PlatformHttpClient::default());
        Self::new(store, api, config.credential_key.clone())
    }
}
