//! Feed filter engine: the host document, card location and scan passes.
mod decode;
mod feed;
mod host;
mod inspect;
mod layout;
mod locate;
mod persist;
mod scanner;
mod session;
mod types;

pub use decode::{decode_snapshot, DecodeError, DecodedSnapshot};
pub use feed::HtmlFeed;
pub use host::{CardId, FeedDocument, HostError};
pub use inspect::{is_restricted, read_card, reel_label, CardReading};
pub use layout::{CardLayout, Removal, CARD_LAYOUTS};
pub use locate::{element_text, locate_label, LabelStrategy, LocatedLabel, LABEL_STRATEGIES};
pub use persist::{write_atomically, PersistError};
pub use scanner::FeedScanner;
pub use session::ScanSession;
pub use types::{CardOutcome, PassReport};
