use crate::app::components::{EmptyState, ErrorMessage, HistoryTable, LoadingText};
use crate::app::layouts::Navbar;
use crate::domain::models::layout::{EMPTY_MESSAGE, LOADING_CAPTION, SCREEN_TITLE};
use crate::domain::models::{HistoryContent, ViewState};
use crate::shared::hooks::use_search_history;
use dioxus::prelude::*;

/// Past searches screen: fetches on mount, then renders the settled state
#[component]
pub fn PastSearches() -> Element {
    let state = use_search_history();

    rsx! {
        PastSearchesView { state: state() }
    }
}

/// Pure rendering of a `ViewState`
#[component]
pub fn PastSearchesView(state: ViewState) -> Element {
    let layout = state.layout();

    if layout.content == HistoryContent::Loading {
        return rsx! {
            div { class: "c-past-searches c-past-searches--loading",
                LoadingText { message: LOADING_CAPTION.to_string() }
            }
        };
    }

    let body = match layout.content {
        HistoryContent::Table(rows) => rsx! {
            HistoryTable { rows }
        },
        _ => rsx! {
            EmptyState { description: EMPTY_MESSAGE.to_string() }
        },
    };

    rsx! {
        div { class: "c-past-searches",
            Navbar {}
            div { class: "c-past-searches__container",
                h1 { class: "c-past-searches__title", "{SCREEN_TITLE}" }
                div { class: "c-past-searches__content",
                    {body}
                    // Shown below the table or the empty state alike
                    if let Some(message) = layout.error {
                        ErrorMessage { message }
                    }
                }
            }
        }
    }
}
