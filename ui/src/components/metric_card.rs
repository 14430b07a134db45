use crate::components::pico::Card;
use dioxus::prelude::*;
use greenscore_types::PillarMetric;

/// One pillar's value with a progress bar.
#[component]
pub fn MetricCard(metric: PillarMetric) -> Element {
    let value = metric.value();
    let tag = metric.color_tag();

    rsx! {
        Card {
            class: format!("metric metric-{tag}"),
            header { strong { "{metric.label()}" } }
            p { class: "metric-value", "{value}" small { " PTS" } }
            progress { value: "{value.percent()}", max: "100" }
        }
    }
}
