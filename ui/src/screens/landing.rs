//=============================================================================
// File: src/screens/landing.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Grid;
use crate::hooks::use_refresher::use_refresher;
use dioxus::prelude::*;
use greenscore_types::Session;

#[allow(non_snake_case)]
#[component]
pub fn LandingScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let refresher = use_refresher();

    rsx! {
        section {
            class: "landing",
            hgroup {
                h1 { "🛡 GreenScore" }
                p { "Transparent corporate ESG data, anchored on chain." }
            }
            Grid {
                article {
                    class: "entry-card",
                    onclick: move |_| refresher.enter_as_investor(),
                    h2 { "Look up a profile" }
                    p { "For investors: verify ESG scores straight from the smart contract." }
                    strong { "Open now →" }
                }
                article {
                    class: "entry-card entry-card-business",
                    onclick: move |_| app_state_mut.apply(Session::go_to_register),
                    h2 { "Register a business" }
                    p { "Submit reports, get an AI evaluation and a Green Passport certificate." }
                    strong { "Create profile →" }
                }
            }
        }
    }
}
