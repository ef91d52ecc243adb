use crate::app::pages::PastSearches;
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[redirect("/", || Route::PastSearches {})]
    #[route("/user/past-searches")]
    PastSearches {},
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Bundled by build.rs from assets/css/main.css
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        main { class: "c-layout__main",
            Outlet::<Route> {}
        }
    }
}
