//! Internationalization (i18n) support for `tempgrid-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/tempgrid-ui.ftl   (fallback/reference)
//!   es-ES/tempgrid-ui.ftl
//!   fr-FR/tempgrid-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("chart-title");
//! ```
//!
//! Month names are looked up through [`month_name`] / [`month_short`] so the
//! tooltip, the axis and the header all agree on the active locale.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use time::Month;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("chart-title")
///     t!("chart-subtitle", from = 1753, to = 2015)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "tempgrid-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(error = %err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

pub fn month_name(month: Month) -> String {
    match month {
        Month::January => crate::t!("month-january"),
        Month::February => crate::t!("month-february"),
        Month::March => crate::t!("month-march"),
        Month::April => crate::t!("month-april"),
        Month::May => crate::t!("month-may"),
        Month::June => crate::t!("month-june"),
        Month::July => crate::t!("month-july"),
        Month::August => crate::t!("month-august"),
        Month::September => crate::t!("month-september"),
        Month::October => crate::t!("month-october"),
        Month::November => crate::t!("month-november"),
        Month::December => crate::t!("month-december"),
    }
}

/// Abbreviated month name for axis ticks.
pub fn month_short(month: Month) -> String {
    match month {
        Month::January => crate::t!("month-short-january"),
        Month::February => crate::t!("month-short-february"),
        Month::March => crate::t!("month-short-march"),
        Month::April => crate::t!("month-short-april"),
        Month::May => crate::t!("month-short-may"),
        Month::June => crate::t!("month-short-june"),
        Month::July => crate::t!("month-short-july"),
        Month::August => crate::t!("month-short-august"),
        Month::September => crate::t!("month-short-september"),
        Month::October => crate::t!("month-short-october"),
        Month::November => crate::t!("month-short-november"),
        Month::December => crate::t!("month-short-december"),
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
