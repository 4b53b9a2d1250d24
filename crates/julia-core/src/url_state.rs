//! Locked seed <-> shareable URL fragment (`"re,im"`).

use crate::coords::PlaneCoordinate;
use thiserror::Error;

/// Why a fragment was not accepted as a seed. Never shown to the user.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FragmentError {
    #[error("fragment is empty")]
    Empty,
    #[error("expected 2 comma-separated components, found {0}")]
    ComponentCount(usize),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("component is not finite")]
    NonFinite,
}

/// Format a seed as a fragment. `f64` display is the shortest string that
/// parses back to the same value.
pub fn lock_to_fragment(coord: PlaneCoordinate) -> String {
    format!("{},{}", coord.re, coord.im)
}

/// Parse a fragment (leading `#` optional) into a seed.
pub fn parse_fragment(fragment: &str) -> Result<PlaneCoordinate, FragmentError> {
    let body = fragment.trim();
    let body = body.strip_prefix('#').unwrap_or(body).trim();
    if body.is_empty() {
        return Err(FragmentError::Empty);
    }
    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != 2 {
        return Err(FragmentError::ComponentCount(parts.len()));
    }
    let re = parse_component(parts[0])?;
    let im = parse_component(parts[1])?;
    Ok(PlaneCoordinate::new(re, im))
}

fn parse_component(raw: &str) -> Result<f64, FragmentError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FragmentError::InvalidNumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(FragmentError::NonFinite);
    }
    Ok(value)
}

/// `None` for empty, malformed or non-finite fragments.
#[inline]
pub fn fragment_to_coord(fragment: &str) -> Option<PlaneCoordinate> {
    parse_fragment(fragment).ok()
}

/// Tracks which fragment the session currently reflects, so the echo of our
/// own write does not come back in as a navigation.
#[derive(Clone, Debug, Default)]
pub struct UrlStateSync {
    current: Option<String>,
}

impl UrlStateSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lock and return the fragment the host must write.
    pub fn record_lock(&mut self, coord: PlaneCoordinate) -> String {
        let fragment = lock_to_fragment(coord);
        self.current = Some(fragment.clone());
        fragment
    }

    /// Record an unlock and return the (empty) fragment the host must write.
    pub fn record_unlock(&mut self) -> String {
        self.current = None;
        String::new()
    }

    /// The fragment last written or accepted, if locked via the URL.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Decide whether a navigation should drive a lock.
    ///
    /// Returns the seed only for a valid fragment that differs from the one
    /// this session last wrote or accepted.
    pub fn accept_navigation(&mut self, fragment: &str) -> Option<PlaneCoordinate> {
        let body = strip_hash(fragment);
        if self.current.as_deref() == Some(body) {
            log::debug!("[url] ignoring echo of own fragment `{}`", body);
            return None;
        }
        match parse_fragment(body) {
            Ok(coord) => {
                self.current = Some(body.to_string());
                Some(coord)
            }
            Err(e) => {
                log::debug!("[url] ignoring fragment `{}`: {}", body, e);
                None
            }
        }
    }
}

#[inline]
fn strip_hash(fragment: &str) -> &str {
    let trimmed = fragment.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed)
}
