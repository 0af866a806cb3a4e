//! Browser window abstraction.

/// Where the browser goes after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A fixed path on the backend origin.
    Path(String),
    /// Reload the current page.
    Reload,
}

impl Location {
    /// Navigate to `path`.
    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Value assigned to `window.location.href`; empty for a reload.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Reload => "",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => f.write_str(path),
            Self::Reload => f.write_str("(reload)"),
        }
    }
}

/// The browser window the actions report back to.
pub trait Browser {
    /// Point the window at `location`.
    fn navigate(&mut self, location: &Location);

    /// Show a blocking alert.
    fn alert(&mut self, message: &str);
}

/// Something a [`RecordingBrowser`] was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// `navigate` was called with this location.
    Navigated(Location),
    /// `alert` was called with this message.
    Alerted(String),
}

/// Browser that only records what it is told.
#[derive(Debug, Clone, Default)]
pub struct RecordingBrowser {
    events: Vec<BrowserEvent>,
}

impl RecordingBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[BrowserEvent] {
        &self.events
    }

    /// Recorded navigations, oldest first.
    pub fn navigations(&self) -> impl Iterator<Item = &Location> {
        self.events.iter().filter_map(|event| match event {
            BrowserEvent::Navigated(location) => Some(location),
            BrowserEvent::Alerted(_) => None,
        })
    }

    /// Recorded alert messages, oldest first.
    pub fn alerts(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            BrowserEvent::Alerted(message) => Some(message.as_str()),
            BrowserEvent::Navigated(_) => None,
        })
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Browser for RecordingBrowser {
    fn navigate(&mut self, location: &Location) {
        self.events.push(BrowserEvent::Navigated(location.clone()));
    }

    fn alert(&mut self, message: &str) {
        self.events.push(BrowserEvent::Alerted(message.to_string()));
    }
}

impl<B: Browser + ?Sized> Browser for &mut B {
    fn navigate(&mut self, location: &Location) {
        (**self).navigate(location);
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_href_is_empty() {
        assert_eq!(Location::Reload.href(), "");
        assert_eq!(Location::path("/me/").href(), "/me/");
    }

    #[test]
    fn test_recording_browser_splits_events() {
        let mut browser = RecordingBrowser::new();
        browser.alert("Passwords do not match");
        browser.navigate(&Location::path("/session/new"));

        assert_eq!(browser.events().len(), 2);
        assert_eq!(browser.alerts().collect::<Vec<_>>(), ["Passwords do not match"]);
        assert_eq!(
            browser.navigations().collect::<Vec<_>>(),
            [&Location::path("/session/new")]
        );

        browser.clear();
        assert!(browser.events().is_empty());
    }
}
