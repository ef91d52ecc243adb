use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error",
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Reusable Empty State Component (BEM: c-empty-state)
#[component]
pub fn EmptyState(description: String) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div {
                class: "c-empty-state__illustration",
                "aria-hidden": "true",
                SearchIllustration {}
            }
            p { class: "c-empty-state__text", "{description}" }
        }
    }
}

// House outline under a magnifying glass, tinted through CSS
#[component]
fn SearchIllustration() -> Element {
    rsx! {
        svg {
            class: "c-empty-state__svg",
            xmlns: "http://www.w3.org/2000/svg",
            width: "160",
            height: "160",
            view_box: "0 0 160 160",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "4",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { class: "c-empty-state__backdrop", cx: "80", cy: "80", r: "72", stroke: "none" }
            polyline { points: "38 78 70 50 102 78" }
            path { d: "M46 72v38h48V72" }
            path { d: "M62 110V90h16v20" }
            circle { class: "c-empty-state__lens", cx: "104", cy: "96", r: "20" }
            line { x1: "118", y1: "110", x2: "134", y2: "126", stroke_width: "8" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_renders_illustration_and_text() {
        let html = dioxus_ssr::render_element(rsx! {
            EmptyState { description: "Nothing here yet".to_string() }
        });

        assert!(html.contains("c-empty-state__illustration"));
        assert!(html.contains("<svg"));
        assert!(html.contains("c-empty-state__lens"));
        assert!(html.contains("Nothing here yet"));
    }

    #[test]
    fn test_error_message_text() {
        let html = dioxus_ssr::render_element(rsx! {
            ErrorMessage { message: "Failed to load search history".to_string() }
        });
        assert!(html.contains(r#"class="c-error__text""#));
        assert!(html.contains("Failed to load search history"));
    }
}
