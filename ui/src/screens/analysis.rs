//=============================================================================
// File: src/screens/analysis.rs
//=============================================================================
use crate::components::pico::{Card, Grid};
use dioxus::prelude::*;
use greenscore_types::scoring::{self, Industry, MetricSpec};
use greenscore_types::Pillar;
use itertools::Itertools;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Parses a metric input. Blank or unparsable input clears the metric.
fn parse_metric_value(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 100.0))
}

/// Metric values for scoring, from the text typed so far. Fields that do not
/// parse yet are left out.
fn parse_metric_inputs(raw: &BTreeMap<String, String>) -> BTreeMap<String, f64> {
    raw.iter()
        .filter_map(|(code, text)| parse_metric_value(text).map(|v| (code.clone(), v)))
        .collect()
}

#[component]
fn MetricInput(spec: &'static MetricSpec, inputs: Signal<BTreeMap<String, String>>) -> Element {
    let mut inputs = inputs;
    // the raw text, so partial input like "42." survives re-renders
    let current = inputs.read().get(spec.code).cloned().unwrap_or_default();
    let caption = if spec.mandatory {
        format!("{} {} *", spec.code, spec.name)
    } else {
        format!("{} {}", spec.code, spec.name)
    };

    rsx! {
        label {
            "{caption}"
            input {
                r#type: "text",
                inputmode: "decimal",
                value: "{current}",
                oninput: move |evt| {
                    inputs.write().insert(spec.code.to_string(), evt.value());
                },
            }
        }
    }
}

/// Business-only: enter metric scores from a report and preview the rating.
#[allow(non_snake_case)]
#[component]
pub fn AnalysisScreen() -> Element {
    let inputs = use_signal(BTreeMap::<String, String>::new);
    let mut industry = use_signal(Industry::default);
    let evaluation = use_memo(move || scoring::evaluate(&parse_metric_inputs(&inputs.read())));
    let comparison = use_memo(move || {
        scoring::compare_with_benchmark(evaluation.read().pillar_scores, industry())
    });

    let eval = evaluation.read();
    let pillar_cells: Vec<String> = eval
        .pillar_scores
        .iter()
        .map(|score| format!("{score:.2}"))
        .collect();
    let total = format!("{:.2}", eval.total);
    let rank = eval.rank.to_string();
    let flags = eval.flags.iter().join("; ");

    let cmp = comparison.read();
    let benchmark_rows: Vec<(char, String, String, String)> = Pillar::ALL
        .iter()
        .map(|pillar| {
            let i = pillar.index();
            (
                pillar.code(),
                format!("{:.0}", cmp.benchmark_scores[i]),
                format!("{:+.2}", cmp.differences[i]),
                cmp.performance[i].to_string(),
            )
        })
        .collect();
    let totals = format!(
        "{:.2} vs {:.2} ({:+.2})",
        cmp.company_total, cmp.benchmark_total, cmp.total_difference
    );
    let recommendations = cmp.recommendations.clone();

    rsx! {
        Card {
            header {
                h3 { "Report analysis" }
                p { "Enter the metric scores (0-100) extracted from the annual report. * marks mandatory metrics." }
            }
            Grid {
                for pillar in Pillar::ALL {
                    fieldset {
                        key: "{pillar.code()}",
                        legend { {format!("{} ({:.0}%)", pillar.label(), pillar.weight() * 100.0)} }
                        for spec in scoring::metrics_of(pillar) {
                            MetricInput { key: "{spec.code}", spec, inputs }
                        }
                    }
                }
            }
        }
        Card {
            header { h3 { "Evaluation" } }
            table {
                thead { tr {
                    for pillar in Pillar::ALL {
                        th { "{pillar.label()}" }
                    }
                    th { "Total" }
                    th { "Rank" }
                }}
                tbody { tr {
                    for cell in pillar_cells.iter() {
                        td { "{cell}" }
                    }
                    td { strong { "{total}" } }
                    td { strong { "{rank}" } }
                }}
            }
            if !flags.is_empty() {
                p { class: "flags", "⚠ {flags}" }
            }
        }
        Card {
            header {
                h3 { "Industry benchmark" }
                label {
                    "Industry"
                    select {
                        onchange: move |evt| industry.set(Industry::from_name(&evt.value())),
                        for choice in Industry::iter() {
                            option {
                                key: "{choice}",
                                value: "{choice}",
                                selected: choice == industry(),
                                "{choice}"
                            }
                        }
                    }
                }
            }
            table {
                thead { tr {
                    th { "Pillar" }
                    th { "Average" }
                    th { "Difference" }
                    th { "Performance" }
                }}
                tbody {
                    for (code, average, difference, performance) in benchmark_rows {
                        tr {
                            key: "{code}",
                            td { "{code}" }
                            td { "{average}" }
                            td { "{difference}" }
                            td { "{performance}" }
                        }
                    }
                }
            }
            p { "Equal-share total: " strong { "{totals}" } }
            ul {
                for line in recommendations {
                    li { "{line}" }
                }
            }
        }
    }
}
