//! Runtime configuration for annotext.
//!
//! The module exposes the process-wide default [`TrimPolicy`] used by
//! [`AnnotatedText::filter`](crate::AnnotatedText::filter). The policy is
//! resolved from an in-process override, then the `ANNOTEXT_TRIM_TERMS`
//! environment variable, then the built-in default of trimming.

use std::sync::atomic::{AtomicU8, Ordering};

use annotext_query::TrimPolicy;

/// Environment variable toggling whitespace trimming of query segments.
///
/// Accepts boolean spellings (`1`, `true`, `off`, ...) or a policy name
/// (`trim`, `verbatim`).
pub const TRIM_TERMS_ENV: &str = "ANNOTEXT_TRIM_TERMS";

const OVERRIDE_UNSET: u8 = 0;
const OVERRIDE_TRIM: u8 = 1;
const OVERRIDE_VERBATIM: u8 = 2;

static TRIM_POLICY_OVERRIDE: AtomicU8 = AtomicU8::new(OVERRIDE_UNSET);

const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];
const FALSY: [&str; 4] = ["0", "false", "no", "off"];

/// Interpret an `ANNOTEXT_TRIM_TERMS` value.
///
/// Boolean spellings select trimming on or off; the policy names accepted by
/// [`TrimPolicy`]'s `FromStr` impl select a policy directly. Matching ignores
/// ASCII case and surrounding whitespace.
fn policy_from_env_value(raw: &str) -> Option<TrimPolicy> {
    let value = raw.trim();
    if TRUTHY.iter().any(|word| value.eq_ignore_ascii_case(word)) {
        Some(TrimPolicy::Trim)
    } else if FALSY.iter().any(|word| value.eq_ignore_ascii_case(word)) {
        Some(TrimPolicy::Verbatim)
    } else {
        value.parse().ok()
    }
}

fn env_trim_policy() -> Option<TrimPolicy> {
    let raw = std::env::var(TRIM_TERMS_ENV).ok()?;
    let parsed = policy_from_env_value(&raw);
    if parsed.is_none() {
        log::warn!("ignoring unrecognised {TRIM_TERMS_ENV} value {raw:?}");
    }
    parsed
}

fn override_state() -> Option<TrimPolicy> {
    match TRIM_POLICY_OVERRIDE.load(Ordering::Relaxed) {
        OVERRIDE_TRIM => Some(TrimPolicy::Trim),
        OVERRIDE_VERBATIM => Some(TrimPolicy::Verbatim),
        _ => None,
    }
}

/// Determine the trimming policy applied by [`AnnotatedText::filter`](crate::AnnotatedText::filter).
#[must_use]
pub fn trim_policy() -> TrimPolicy {
    override_state()
        .or_else(env_trim_policy)
        .unwrap_or_default()
}

/// Override the trimming policy for the current process.
///
/// Tests may call [`clear_trim_policy_override`] to restore environment
/// driven behaviour after toggling the override.
pub fn set_trim_policy(policy: TrimPolicy) {
    let value = match policy {
        TrimPolicy::Trim => OVERRIDE_TRIM,
        TrimPolicy::Verbatim => OVERRIDE_VERBATIM,
    };
    TRIM_POLICY_OVERRIDE.store(value, Ordering::Relaxed);
}

/// Remove any in-process override for the trimming policy.
pub fn clear_trim_policy_override() {
    TRIM_POLICY_OVERRIDE.store(OVERRIDE_UNSET, Ordering::Relaxed);
}
