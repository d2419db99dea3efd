//! Whitespace policy applied to query segments.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How whitespace around query segments is handled while parsing.
///
/// With [`TrimPolicy::Trim`] the query `"Nice/Location, attack"` yields the
/// values `Nice` and `attack`. With [`TrimPolicy::Verbatim`] the second value
/// is `" attack"` and only matches a lemma carrying the leading space.
///
/// # Examples
///
/// ```
/// use annotext_query::TrimPolicy;
///
/// assert_eq!(TrimPolicy::default(), TrimPolicy::Trim);
/// assert_eq!(TrimPolicy::Trim.apply("  attack "), "attack");
/// assert_eq!(TrimPolicy::Verbatim.apply("  attack "), "  attack ");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrimPolicy {
    /// Trim each segment and both sides of the `/` separator.
    #[default]
    Trim,
    /// Keep segments exactly as written.
    Verbatim,
}

impl TrimPolicy {
    /// Apply the policy to a fragment of query text.
    #[must_use]
    pub fn apply(self, text: &str) -> &str {
        match self {
            Self::Trim => text.trim(),
            Self::Verbatim => text,
        }
    }

    /// Return the policy name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trim => "trim",
            Self::Verbatim => "verbatim",
        }
    }
}

impl fmt::Display for TrimPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`TrimPolicy`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid trim policy: {0} (expected `trim` or `verbatim`)")]
pub struct TrimPolicyParseError(pub String);

impl FromStr for TrimPolicy {
    type Err = TrimPolicyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("trim") {
            Ok(Self::Trim)
        } else if trimmed.eq_ignore_ascii_case("verbatim") {
            Ok(Self::Verbatim)
        } else {
            Err(TrimPolicyParseError(trimmed.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trim", TrimPolicy::Trim)]
    #[case(" TRIM ", TrimPolicy::Trim)]
    #[case("verbatim", TrimPolicy::Verbatim)]
    #[case("Verbatim", TrimPolicy::Verbatim)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: TrimPolicy) {
        assert_eq!(input.parse::<TrimPolicy>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = "squash".parse::<TrimPolicy>();
        assert_eq!(err, Err(TrimPolicyParseError("squash".into())));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for policy in [TrimPolicy::Trim, TrimPolicy::Verbatim] {
            assert_eq!(policy.to_string().parse::<TrimPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn verbatim_keeps_interior_and_edge_whitespace() {
        assert_eq!(TrimPolicy::Verbatim.apply(" a b "), " a b ");
        assert_eq!(TrimPolicy::Trim.apply(" a b "), "a b");
    }
}
