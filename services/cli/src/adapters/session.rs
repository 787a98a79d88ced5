//! services/cli/src/adapters/session.rs
//!
//! Adapters implementing the `SessionProvider` port: one reads the
//! `LEETCODE_SESSION` cookie out of a local browser's cookie store, the other
//! hands out a token supplied through configuration.

use crate::config::Browser;
use leetcode_archive_core::domain::SessionToken;
use leetcode_archive_core::ports::{PortError, PortResult, SessionProvider};
use tracing::{debug, info};

pub const SESSION_COOKIE: &str = "LEETCODE_SESSION";
const COOKIE_DOMAIN: &str = "leetcode.com";

/// Name and value of one cookie read from a browser store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
}

/// Reads the cookies for `domains` from the given browser's store.
///
/// Each browser maps to exactly one reader; there is no registry to mutate.
pub fn read_cookies(browser: Browser, domains: Vec<String>) -> PortResult<Vec<StoredCookie>> {
    let domains = Some(domains);
    let cookies = match browser {
        Browser::Chrome => rookie::chrome(domains),
        Browser::Chromium => rookie::chromium(domains),
        Browser::Brave => rookie::brave(domains),
        Browser::Edge => rookie::edge(domains),
        Browser::Firefox => rookie::firefox(domains),
        Browser::Opera => rookie::opera(domains),
        Browser::Vivaldi => rookie::vivaldi(domains),
        Browser::Librewolf => rookie::librewolf(domains),
    }
    .map_err(|e| {
        PortError::SessionNotFound(format!("could not read cookies from {:?}: {}", browser, e))
    })?;

    Ok(cookies
        .into_iter()
        .map(|c| StoredCookie {
            name: c.name,
            value: c.value,
        })
        .collect())
}

/// Picks the session cookie out of a browser's cookies.
pub fn find_session_cookie(cookies: &[StoredCookie]) -> Option<SessionToken> {
    cookies
        .iter()
        .find(|c| c.name == SESSION_COOKIE && !c.value.is_empty())
        .map(|c| SessionToken::new(c.value.clone()))
}

//=========================================================================================
// Browser Cookie Adapter
//=========================================================================================

#[derive(Debug, Clone, Copy)]
pub struct BrowserCookieAdapter {
    browser: Browser,
}

impl BrowserCookieAdapter {
    pub fn new(browser: Browser) -> Self {
        Self { browser }
    }
}

impl SessionProvider for BrowserCookieAdapter {
    fn session_token(&self) -> PortResult<SessionToken> {
        let cookies = read_cookies(self.browser, vec![COOKIE_DOMAIN.to_string()])?;
        debug!(browser = ?self.browser, count = cookies.len(), "Read browser cookies");
        let token = find_session_cookie(&cookies).ok_or_else(|| {
            PortError::SessionNotFound(format!(
                "no {} cookie in {:?}; log into LeetCode in that browser first",
                SESSION_COOKIE, self.browser
            ))
        })?;
        info!(browser = ?self.browser, "Using LeetCode session from browser");
        Ok(token)
    }
}

//=========================================================================================
// Static Token Adapter
//=========================================================================================

/// A session supplied directly, e.g. through the `LEETCODE_SESSION` variable.
#[derive(Debug, Clone)]
pub struct StaticTokenAdapter {
    token: SessionToken,
}

impl StaticTokenAdapter {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SessionToken::new(token),
        }
    }
}

impl SessionProvider for StaticTokenAdapter {
    fn session_token(&self) -> PortResult<SessionToken> {
        Ok(self.token.clone())
    }
}
