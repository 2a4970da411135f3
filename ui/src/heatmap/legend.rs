use dioxus::prelude::*;

use crate::core::{format, legend::Legend, legend::LegendSelection};
use crate::heatmap::use_lang_marker;
use crate::t;

/// Color key. Each swatch is a toggle: active swatches highlight their cells
/// and fade everything else.
#[component]
pub fn HeatmapLegend(legend: Legend, selection: Signal<LegendSelection>) -> Element {
    let _lang = use_lang_marker();
    let mut selection = selection;
    let current = selection();

    let upper_label = legend
        .bins
        .last()
        .map(|bin| format::format_threshold(bin.temperature_to))
        .unwrap_or_default();

    rsx! {
        section { id: "legend", class: "legend",
            div { class: "legend__header",
                h3 { class: "legend__title", {t!("legend-title")} }
                if !current.is_empty() {
                    button {
                        r#type: "button",
                        class: "button button--ghost legend__clear",
                        onclick: move |_| selection.with_mut(|s| s.clear()),
                        {t!("legend-clear")}
                    }
                }
            }
            p { class: "legend__hint", {t!("legend-hint")} }

            ol { class: "legend__bins",
                for bin in legend.bins.iter() {
                    {
                        let index = bin.index;
                        let active = current.is_active(index);
                        let from = format::format_threshold(bin.temperature_from);
                        let to = format::format_threshold(bin.temperature_to);
                        rsx! {
                            li {
                                key: "bin-{index}",
                                class: if active { "legend__bin legend__bin--active" } else { "legend__bin" },
                                button {
                                    r#type: "button",
                                    class: "legend__swatch",
                                    style: "background-color: {bin.color};",
                                    title: "{from} – {to}℃",
                                    aria_pressed: "{active}",
                                    onclick: move |_| {
                                        selection.with_mut(|s| {
                                            s.toggle(index);
                                        });
                                    },
                                }
                                span { class: "legend__label", "{from}" }
                            }
                        }
                    }
                }
                li { class: "legend__bin legend__bin--cap",
                    span { class: "legend__label", "{upper_label}" }
                }
            }
        }
    }
}
