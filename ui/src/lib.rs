// The client-side Dioxus application logic.

use dioxus::prelude::*;
use futures::StreamExt;

mod app_state;
mod app_state_mut;
mod compat;
mod components;
pub mod hooks;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use greenscore_types::{PendingRefresh, Session, View};
use screens::dashboard::DashboardScreen;
use screens::landing::LandingScreen;
use screens::register::RegisterScreen;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    .mono { font-family: var(--pico-font-family-monospace); }

    /* --- LANDING --- */
    .landing { padding-top: 4rem; text-align: center; }
    .entry-card { cursor: pointer; text-align: left; transition: transform 0.15s; }
    .entry-card:hover { transform: translateY(-4px); }
    .entry-card-business { border-top: 4px solid #10b981; }

    /* --- DASHBOARD FRAME --- */
    .dashboard { display: flex; min-height: 100vh; }
    .sidebar {
        width: 16rem;
        flex-shrink: 0;
        padding: 1rem;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        border-right: 1px solid var(--pico-muted-border-color);
    }
    .sidebar a.active-tab { color: var(--pico-primary); font-weight: bold; }
    .dashboard .content { flex: 1; padding: 0 1rem; min-width: 0; }
    .menu-backdrop { position: fixed; inset: 0; z-index: 10; }

    @media (max-width: 768px) {
        .sidebar { position: fixed; top: 0; bottom: 0; left: -17rem; z-index: 20; background: var(--pico-background-color); transition: left 0.2s; }
        .sidebar.open { left: 0; }
    }
    @media (min-width: 769px) {
        .dashboard header nav ul:first-child li:first-child { display: none; }
    }

    /* --- BADGES --- */
    .badge { padding: 0.25rem 0.75rem; border-radius: 1rem; font-size: 0.8rem; margin: 0; }
    .badge-verified { background: #d1fae5; color: #047857; }
    .badge-pending { background: #fef3c7; color: #b45309; }
    .badge-unverified { background: #fee2e2; color: #b91c1c; border: none; width: auto; }
    .fetch-error { color: #b91c1c; }

    /* --- OVERVIEW --- */
    .score { font-size: 3.5rem; font-weight: bold; margin: 0; }
    .document-card.verified { border: 1px solid #10b981; }
    .hash-row { display: flex; gap: 0.5rem; align-items: center; }
    .copy-button { width: auto; padding: 0.25rem 0.75rem; margin: 0; font-size: 0.8rem; }
    .metric-value { font-size: 2rem; font-weight: bold; margin: 0; }
    .metric-emerald progress { accent-color: #10b981; }
    .metric-blue progress { accent-color: #3b82f6; }
    .metric-purple progress { accent-color: #8b5cf6; }

    /* --- EMPTY STATE --- */
    .empty-state { text-align: center; padding: 3rem 1rem; color: var(--pico-muted-color); border: 2px dashed var(--pico-card-border-color); border-radius: var(--pico-border-radius); }
    .empty-state-icon { font-size: 3rem; }
    .flags { color: #b45309; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let prefs_future = use_server_future(move || async move { api::get_user_prefs().await })?;

    let body = match &*prefs_future.read() {
        Some(Ok(prefs)) => {
            dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
            rsx! {
                LoadedApp {
                    app_state: AppState::new(prefs),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let session = use_signal(Session::new);
    let store = use_context_provider(|| AppStateMut { session });

    // Resolves every started refresh. Lives as long as the app, so a fetch
    // outlives the screen that started it.
    use_coroutine(move |mut rx: UnboundedReceiver<PendingRefresh>| {
        let app_state = app_state.clone();
        async move {
            while let Some(pending) = rx.next().await {
                let app_state = app_state.clone();
                spawn(async move {
                    let seq = pending.ticket().seq();
                    let outcome = pending.resolve(&store, &app_state.oracle).await;
                    dioxus_logger::tracing::info!("refresh #{} finished: {:?}", seq, outcome);
                });
            }
        }
    });

    let view = session.read().navigation().view();

    rsx! {
        Container {
            match view {
                View::Landing => rsx! { LandingScreen {} },
                View::Register => rsx! { RegisterScreen {} },
                View::Dashboard => rsx! { DashboardScreen {} },
            }
        }
    }
}
