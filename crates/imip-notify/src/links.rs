//! Response link construction.

/// Builds absolute URLs for token-driven invitation responses.
pub trait ResponseLinks {
    /// URL that records an acceptance for `token`.
    fn accept_url(&self, token: &str) -> String;
    /// URL that records a decline for `token`.
    fn decline_url(&self, token: &str) -> String;
    /// URL of the interactive response page for `token`.
    fn options_url(&self, token: &str) -> String;
}

const INVITATION_PATH: &str = "/invitation";
const ACCEPT_PATH: &str = const_str::concat!(INVITATION_PATH, "/accept/");
const DECLINE_PATH: &str = const_str::concat!(INVITATION_PATH, "/decline/");
const OPTIONS_PATH: &str = const_str::concat!(INVITATION_PATH, "/respond/");

/// Link builder rooted at a fixed base URL.
#[derive(Debug, Clone)]
pub struct BaseUrlLinks {
    base: String,
}

impl BaseUrlLinks {
    /// Creates a builder; a trailing slash on `base` is dropped.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }
}

impl ResponseLinks for BaseUrlLinks {
    fn accept_url(&self, token: &str) -> String {
        format!("{}{ACCEPT_PATH}{token}", self.base)
    }

    fn decline_url(&self, token: &str) -> String {
        format!("{}{DECLINE_PATH}{token}", self.base)
    }

    fn options_url(&self, token: &str) -> String {
        format!("{}{OPTIONS_PATH}{token}", self.base)
    }
}
