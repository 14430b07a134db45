//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::{Button, ButtonType};
use crate::components::verification_badge::VerificationBadge;
use crate::screens::analysis::AnalysisScreen;
use crate::screens::history::HistoryScreen;
use crate::screens::overview::OverviewScreen;
use dioxus::prelude::*;
use greenscore_types::{Role, Session, SubView, Tab};

/// The sidebar: one entry per tab the role may see, plus logout.
#[component]
fn Sidebar(role: Role, active_tab: Tab, is_open: Signal<bool>) -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let mut is_open = is_open;
    let role_caption = match role {
        Role::Guest => "Investor (guest)",
        Role::Business => "Business",
    };

    rsx! {
        aside {
            class: if is_open() { "sidebar open" } else { "sidebar" },
            hgroup {
                h3 { "🛡 GreenScore" }
                p { "{role_caption}" }
            }
            nav {
                ul {
                    for tab in Tab::visible_to(role) {
                        li {
                            key: "{tab}",
                            a {
                                href: "#",
                                class: if tab == active_tab { "active-tab" } else { "" },
                                "aria-current": if tab == active_tab { "page" } else { "false" },
                                onclick: move |event| {
                                    event.prevent_default();
                                    app_state_mut.apply(move |s| s.select_tab(tab));
                                    is_open.set(false);
                                },
                                "{tab.label()}"
                            }
                        }
                    }
                }
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| app_state_mut.apply(Session::logout),
                "Log out"
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn DashboardScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    // layout only, not part of the session
    let mut sidebar_open = use_signal(|| false);

    let session = app_state_mut.session.read();
    let nav = *session.navigation();
    let record = session.record();
    let name = record.name().to_string();
    let ticker = record.ticker().to_string();
    let is_verified = record.is_verified();
    let is_loading = session.is_loading();
    let last_error = session.last_error().map(|e| e.to_string());
    drop(session);

    rsx! {
        div {
            class: "dashboard",
            Sidebar { role: nav.role(), active_tab: nav.active_tab(), is_open: sidebar_open }
            if sidebar_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| sidebar_open.set(false),
                }
            }
            div {
                class: "content",
                header {
                    nav {
                        ul {
                            li {
                                Button {
                                    button_type: ButtonType::Secondary,
                                    outline: true,
                                    on_click: move |_| sidebar_open.toggle(),
                                    "≡"
                                }
                            }
                            li {
                                hgroup {
                                    h2 { "{name}" }
                                    p { class: "mono", "{ticker}" }
                                }
                            }
                        }
                        ul {
                            li {
                                VerificationBadge { is_loading, is_verified }
                            }
                        }
                    }
                    if let Some(message) = last_error {
                        p { class: "fetch-error", role: "alert", "Verification failed: {message}" }
                    }
                }
                match nav.sub_view() {
                    SubView::Overview => rsx! { OverviewScreen {} },
                    SubView::Analysis => rsx! { AnalysisScreen {} },
                    SubView::History => rsx! { HistoryScreen {} },
                }
            }
        }
    }
}
