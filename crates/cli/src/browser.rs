//! Terminal stand-in for the browser window.

use recommend_client::dom::{Browser, Location};

/// Logs navigations and alerts instead of acting on them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBrowser;

impl Browser for LoggingBrowser {
    fn navigate(&mut self, location: &Location) {
        tracing::info!(location = %location, "Navigated");
    }

    fn alert(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}
