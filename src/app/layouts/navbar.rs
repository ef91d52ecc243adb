use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__logo", "🏠 Property Finder" }
        }
    }
}
