use crate::hooks::use_refresher::use_refresher;
use dioxus::prelude::*;

/// Header badge: verifying spinner, verified tick, or an "Unverified" button
/// that starts a refresh. The unverified state doubles as the failed state.
#[component]
pub fn VerificationBadge(is_loading: bool, is_verified: bool) -> Element {
    let refresher = use_refresher();

    rsx! {
        if is_loading {
            span { class: "badge badge-pending", "aria-busy": "true", "Verifying..." }
        } else if is_verified {
            span { class: "badge badge-verified", "✔ Verified by Blockchain" }
        } else {
            button {
                class: "badge badge-unverified",
                title: "Read the latest report from the chain",
                onclick: move |_| refresher.refresh(),
                "Unverified"
            }
        }
    }
}
