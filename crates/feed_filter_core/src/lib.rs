//! Feed filter core: count parsing, card decisions and pass scheduling.
//!
//! Everything here is pure; the document and its side effects live in
//! `feed_filter_engine`.
mod cache;
mod config;
mod count;
mod effect;
mod msg;
mod page;
mod shorts;
mod state;
mod update;
mod verdict;

pub use cache::ScanCache;
pub use config::FilterConfig;
pub use count::{is_no_views_phrase, parse_count, ParsedCount};
pub use effect::Effect;
pub use msg::{Msg, TriggerSource, NAVIGATION_DELAY_MS};
pub use page::{path_of, PageKind};
pub use shorts::is_bad_short;
pub use state::ScanState;
pub use update::update;
pub use verdict::{
    assess, classify, AmbiguityPolicy, Decision, Evidence, Reason, Verdict, DEFAULT_THRESHOLD,
};
