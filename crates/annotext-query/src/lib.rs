//! Filter-query grammar and tag matching for annotext.
//!
//! A filter query is a comma-separated list of terms, each written as `VALUE`
//! or `VALUE/ENTITY`, for example `"Nice/Location, attack"`. Parsing builds a
//! [`FilterQuery`] index keyed by the lowercased value, and evaluation tests
//! whether any [`TaggedToken`] satisfies one of its terms.
//!
//! The default parser is permissive: malformed segments never raise an error
//! and simply yield terms no tag happens to satisfy. [`FilterQuery::parse_strict`]
//! is available for callers that want malformed input reported.

mod errors;
mod policy;
mod query;
mod term;
mod token;

pub use errors::{QueryError, SegmentErrorInfo};
pub use policy::{TrimPolicy, TrimPolicyParseError};
pub use query::FilterQuery;
pub use term::FilterTerm;
pub use token::TaggedToken;
