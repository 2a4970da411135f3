use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{dataset::Heatmap, format};
use crate::heatmap::use_lang_marker;
use crate::t;

/// Title plus the "first – last: base temperature" description line.
#[component]
pub fn HeatmapHeader(heatmap: Rc<Heatmap>) -> Element {
    let _lang = use_lang_marker();

    let (first, last) = heatmap.year_extent();
    let from = first.to_string();
    let to = last.to_string();
    let base = format::format_temperature(heatmap.base_temperature);

    rsx! {
        header { class: "heatmap__header",
            h1 { id: "title", class: "heatmap__title", {t!("chart-title")} }
            p {
                id: "description",
                class: "heatmap__subtitle",
                {t!("chart-subtitle", from = from, to = to, base = base)}
            }
        }
    }
}
