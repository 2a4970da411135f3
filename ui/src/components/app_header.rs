use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

// Shared theme. The desktop launcher inlines the same file itself.
const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Application header: brand, tagline and the locale switcher.
///
/// The switcher writes the selected tag into the global `Signal<String>`
/// context when the platform provides one; every heatmap component reads
/// that signal, so a switch re-renders month names and labels in place
/// without refetching the dataset.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang = use_signal(|| {
        lang_code_ctx
            .map(|code| code.peek().clone())
            .unwrap_or_else(|| "en-US".to_string())
    });
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::info!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(lang = %val, error = %err, "language switch failed"),
        }
    };

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        header {
            id: "app-header",
            class: "app-header",
            // Hidden marker keeps the header subscribed to the language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__spark", aria_hidden: "true" }
                    span { class: "app-header__mark", {t!("app-brand")} }
                    span { class: "app-header__tagline", "{tagline}" }
                }

                if show_switcher {
                    div { class: "app-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
