//! Location tags for cards.
//!
//! Cards never leave the deck's storage. A card "moves" when its `Zone`
//! tag changes, and every other collection (hands, discard pile) is a
//! filter over the deck by tag.
//!
//! ## Key Types
//!
//! - `Zone`: where a card currently is (deck, a player's hand, discard, ...)

pub mod zone;

pub use zone::Zone;
