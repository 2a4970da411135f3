use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::config::HeatmapConfig;
use ui::views::Heatmap;

fn main() {
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppHeader writes it, every localized
    // component reads it.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(HeatmapConfig::default);

    use_hook(|| tracing::info!(version = env!("CARGO_PKG_VERSION"), "tempgrid web starting"));

    rsx! {
        AppHeader {}
        Heatmap {}
    }
}
