//=============================================================================
// File: src/screens/history.rs
//=============================================================================
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::components::pico::{Button, ButtonType, Card};
use crate::hooks::use_refresher::use_refresher;
use dioxus::prelude::*;
use greenscore_types::DocumentStore;
use greenscore_types::VerificationEvent;

/// A self-contained component for rendering a single row in the history table.
#[component]
fn HistoryRow(event: VerificationEvent) -> Element {
    let documents = use_context::<AppState>().documents.clone();

    match event {
        VerificationEvent::Applied {
            seq,
            score,
            rank,
            content_hash,
        } => {
            let url = documents.resolve(&content_hash);
            let short = content_hash.abbreviated(12);
            rsx! {
                tr {
                    td { "#{seq}" }
                    td { "Verified" }
                    td { "{score} / {rank}" }
                    td { a { href: "{url}", target: "_blank", rel: "noopener", class: "mono", "{short}" } }
                }
            }
        }
        VerificationEvent::Failed { seq, reason } => rsx! {
            tr {
                td { "#{seq}" }
                td { "Failed" }
                td { colspan: "2", "{reason}" }
            }
        },
    }
}

#[allow(non_snake_case)]
#[component]
pub fn HistoryScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let refresher = use_refresher();
    let is_loading = app_state_mut.session.read().is_loading();
    let history = app_state_mut.session.read().history().to_vec();

    if history.is_empty() {
        return rsx! {
            EmptyState {
                icon: Some("⛓".to_string()),
                title: "No chain reads yet".to_string(),
                description: Some("Verification results of this session will appear here.".to_string()),
                primary_action: Some(rsx! {
                    Button {
                        button_type: ButtonType::Primary,
                        outline: true,
                        busy: is_loading,
                        on_click: move |_| refresher.refresh(),
                        "Read from chain"
                    }
                }),
            }
        };
    }

    rsx! {
        Card {
            h3 { "Chain history" }
            table {
                thead { tr {
                    th { "Read" }
                    th { "Outcome" }
                    th { "Score / rank" }
                    th { "Document" }
                }}
                tbody {
                    for event in history.into_iter().rev() {
                        HistoryRow { key: "{event.seq()}", event }
                    }
                }
            }
        }
    }
}
