use crate::config::AppConfig;
use crate::domain::models::ViewState;
use crate::shared::hooks::use_mount_scope;
use crate::shared::logging;
use crate::shared::services::{HttpClient, SearchHistoryLoader};
use crate::shared::storage::CredentialStore;
use dioxus::prelude::*;

/// Load the signed-in user's past searches once per mount
///
/// There is no refresh: leaving and re-entering the screen is the only retry.
pub fn use_search_history() -> Signal<ViewState> {
    let config = use_context::<AppConfig>();
    use_search_history_with(move || SearchHistoryLoader::for_platform(&config))
}

/// Same as [`use_search_history`] with the loader built by the caller
///
/// `make_loader` runs inside the spawned task, after the state is reset.
pub fn use_search_history_with<S, C, F>(make_loader: F) -> Signal<ViewState>
where
    S: CredentialStore + 'static,
    C: HttpClient + 'static,
    F: FnOnce() -> SearchHistoryLoader<S, C> + 'static,
{
    let scope = use_mount_scope();
    let mut state = use_signal(ViewState::default);

    use_hook(move || {
        spawn(async move {
            state.write().begin();

            let loader = make_loader();
            let outcome = loader.load().await;

            if !scope.run_if_active(|| state.write().settle(outcome)) {
                logging::log_result_discarded();
            }
        })
    });

    state
}
