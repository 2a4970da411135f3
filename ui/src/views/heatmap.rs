use dioxus::prelude::*;

use crate::core::platform::Platform;
use crate::heatmap::HeatmapChart;

#[cfg(debug_assertions)]
fn log_page_render(lang: &str) {
    tracing::debug!(lang, "heatmap page render");
}

/// The single page of the app: the chart plus a short footnote on the data.
#[component]
pub fn Heatmap() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_page_render(&lang_current);
    }

    let modifier = Platform::current().css_modifier();

    rsx! {
        main {
            class: "page page-heatmap {modifier}",
            lang: "{lang_current}",
            HeatmapChart {}
            p { class: "page-heatmap__source", {crate::t!("page-source-note")} }
        }
    }
}
