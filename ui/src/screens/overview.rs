//=============================================================================
// File: src/screens/overview.rs
//=============================================================================
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::metric_card::MetricCard;
use crate::components::pico::{Busy, Card, CopyButton, Grid};
use dioxus::prelude::*;
use greenscore_types::{ContentHash, DocumentStore};

/// What the document card shows for a stored hash.
#[derive(Debug, PartialEq)]
struct DocumentLink {
    short: String,
    /// Copied to the clipboard; never abbreviated.
    full: String,
    url: String,
}

fn document_link(hash: &ContentHash, documents: &impl DocumentStore) -> DocumentLink {
    DocumentLink {
        short: hash.abbreviated(20),
        full: hash.as_str().to_string(),
        url: documents.resolve(hash),
    }
}

/// Score, rank, source document and the three pillar cards.
#[allow(non_snake_case)]
#[component]
pub fn OverviewScreen() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let session = app_state_mut.session.read().clone();
    let record = session.record();

    if session.is_loading() {
        return rsx! {
            Card {
                Busy {
                    caption: "Calling getLatestReport()...".to_string(),
                    detail: "Contract: 0x8f3...a12".to_string(),
                }
            }
        };
    }

    let rank_badge = if record.is_rank_pending() { "--" } else { "Top 10" };
    let document_class = if record.is_verified() {
        "document-card verified"
    } else {
        "document-card"
    };
    let document = record
        .content_hash()
        .map(|hash| document_link(hash, &app_state.documents));

    rsx! {
        Grid {
            Card {
                class: "score-card".to_string(),
                small { "TOTAL ESG SCORE (ON-CHAIN)" }
                p { class: "score", "{record.score()}" small { "/100" } }
                p { "Rank: " strong { "{record.rank()}" } }
                p { class: "rank-badge", "{rank_badge}" }
                small { "Network: {record.network()}" }
            }
            Card {
                class: document_class.to_string(),
                small { "SOURCE DATA" }
                h3 { "Report stored on IPFS" }
                match document {
                    Some(DocumentLink { short, full, url }) => rsx! {
                        p {
                            class: "hash-row",
                            span { class: "mono", title: "{full}", "Hash: {short}" }
                            CopyButton { text_to_copy: full.clone() }
                        }
                        a {
                            role: "button",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener",
                            "⬇ Download from IPFS"
                        }
                    },
                    None => rsx! {
                        p { "No data yet." }
                        button { disabled: true, "Not available" }
                    },
                }
            }
        }
        Grid {
            for metric in record.metrics().iter().copied() {
                MetricCard { key: "{metric.id()}", metric }
            }
        }
    }
}
