//! Platform glue: alerts and fire-and-forget futures.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            Self::Web => "app--web",
            Self::Desktop => "app--desktop",
        }
    }
}

/// Blocking user-facing alert. Natively there is no browser dialog, so the
/// message is logged and the caller renders its own error panel.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    tracing::error!(message, "window.alert failed");
                }
            }
            None => tracing::error!(message, "no window available for alert"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::error!(message, "setup failed");
    }
}

/// Spawns `future` on the current Dioxus runtime without awaiting it.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}
