use dioxus::prelude::*;

use crate::core::{
    config::HeatmapConfig,
    fetch::{self, LoadState},
    legend::LegendSelection,
    platform,
    tooltip::TooltipState,
};
use crate::heatmap::{
    use_lang_marker, HeatmapAxes, HeatmapGrid, HeatmapHeader, HeatmapHoverOutline, HeatmapLegend,
    HeatmapScene, HeatmapTooltip,
};
use crate::t;

/// Fetches the dataset, measures its container and renders the full chart.
#[component]
pub fn HeatmapChart() -> Element {
    let _lang = use_lang_marker();
    let config = try_use_context::<HeatmapConfig>().unwrap_or_default();

    let mut load_state = use_signal(|| LoadState::Loading);
    let mut canvas_size = use_signal(|| Option::<(f64, f64)>::None);
    let tooltip = use_signal(TooltipState::default);
    let selection = use_signal(LegendSelection::default);

    let data_url = config.data_url.clone();
    use_effect(move || {
        let data_url = data_url.clone();
        spawn(async move {
            let state = fetch::setup(&data_url).await;
            load_state.set(state);
        });
    });

    let scene_config = config.clone();
    let scene = use_memo(move || {
        let state = load_state.read();
        let heatmap = state.heatmap()?;
        let (width, height) = canvas_size()?;
        Some(
            HeatmapScene::build(heatmap, width, height, &scene_config)
                .map_err(|err| err.to_string()),
        )
    });

    // Layout failures belong to the same one-alert setup path as fetch errors.
    use_effect(move || {
        if let Some(Err(message)) = scene() {
            if !load_state.peek().is_failed() {
                load_state.set(fetch::fail_setup(&message, platform::alert));
            }
        }
    });

    let state = load_state();
    let ready_scene = match scene() {
        Some(Ok(scene)) => Some(scene),
        _ => None,
    };

    rsx! {
        article { class: "heatmap",
            if let LoadState::Ready(heatmap) = &state {
                HeatmapHeader { heatmap: heatmap.clone() }
            }

            div {
                class: "heatmap__canvas",
                onmounted: move |evt| {
                    let mounted = evt.data().clone();
                    spawn(async move {
                        match mounted.get_client_rect().await {
                            Ok(rect) => canvas_size.set(Some((rect.width(), rect.height()))),
                            Err(err) => tracing::error!(error = ?err, "unable to measure heatmap container"),
                        }
                    });
                },

                match (&state, ready_scene) {
                    (LoadState::Loading, _) => rsx! {
                        p { class: "heatmap__status", {t!("chart-loading")} }
                    },
                    (LoadState::Failed(message), _) => rsx! {
                        div { class: "heatmap__error", role: "alert",
                            strong { {t!("chart-error-title")} }
                            p { {t!("alert-setup-failed")} }
                            p { class: "heatmap__error-detail", "{message}" }
                        }
                    },
                    (LoadState::Ready(heatmap), Some(scene)) => rsx! {
                        svg {
                            class: "heatmap__svg",
                            width: "{scene.layout.width}",
                            height: "{scene.layout.height}",
                            HeatmapAxes { layout: scene.layout.clone() }
                            HeatmapGrid {
                                scene: scene.clone(),
                                tooltip,
                                selection,
                                fade_ms: config.tooltip_fade_ms,
                            }
                            HeatmapHoverOutline { scene: scene.clone(), tooltip }
                        }
                        HeatmapTooltip {
                            heatmap: heatmap.clone(),
                            scene: scene.clone(),
                            tooltip,
                        }
                    },
                    (LoadState::Ready(_), None) => rsx! {
                        p { class: "heatmap__status", {t!("chart-measuring")} }
                    },
                }
            }

            if let Some(scene) = scene().and_then(|s| s.ok()) {
                HeatmapLegend { legend: scene.legend.clone(), selection }
            }
        }
    }
}
