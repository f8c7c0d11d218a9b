//! Maps a format string to the single token each component uses.

use crate::common::ComponentKind;
use tracing::debug;

/// Returns the first of `candidates` that occurs anywhere in `format`.
///
/// Matching is by substring, so `candidates` must list longer tokens before
/// any shorter token they contain. An empty format always resolves to `""`,
/// even when a fallback is given.
pub fn resolve<'a>(candidates: &[&'a str], format: &str, fallback: Option<&'a str>) -> &'a str {
    if format.is_empty() {
        return "";
    }
    candidates
        .iter()
        .copied()
        .find(|token| format.contains(token))
        .or(fallback)
        .unwrap_or("")
}

/// The resolved token for every component of one format string.
///
/// An empty token means the component is not offered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTokens {
    hour: &'static str,
    minute: &'static str,
    second: &'static str,
    meridiem: &'static str,
}

impl ResolvedTokens {
    /// Resolves every component of `format`.
    pub fn from_format(format: &str) -> Self {
        let of = |kind: ComponentKind| resolve(kind.candidates(), format, kind.fallback());
        let resolved = Self {
            hour: of(ComponentKind::Hour),
            minute: of(ComponentKind::Minute),
            second: of(ComponentKind::Second),
            meridiem: of(ComponentKind::Meridiem),
        };
        debug!(format, ?resolved, "resolved format tokens");
        resolved
    }

    /// The token for `kind`, or `""` when absent.
    pub fn get(&self, kind: ComponentKind) -> &'static str {
        match kind {
            ComponentKind::Hour => self.hour,
            ComponentKind::Minute => self.minute,
            ComponentKind::Second => self.second,
            ComponentKind::Meridiem => self.meridiem,
        }
    }

    pub fn is_present(&self, kind: ComponentKind) -> bool {
        !self.get(kind).is_empty()
    }

    /// True for the `h`/`hh` hour tokens. `k`/`kk` count from 1 but are 24-hour.
    pub fn is_twelve_hour(&self) -> bool {
        matches!(self.hour, "h" | "hh")
    }

    /// Present components with their tokens, in substitution order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, &'static str)> + '_ {
        ComponentKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, token)| !token.is_empty())
    }
}
