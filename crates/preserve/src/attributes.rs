//! # Overview
//!
//! Copy jobs decide which filesystem metadata travels with a file by consulting
//! a set of preserve preferences. This module exposes that set as a typed
//! bitfield so callers can ask about individual attributes without
//! manipulating integers directly.
//!
//! # Design
//!
//! [`PreserveAttributes`] wraps a `u32` where bit *i* belongs to the
//! [`PreserveAttribute`] with ordinal *i*. Every attribute carries a
//! single-character mnemonic token; the bitfield converts to and from a string
//! of those tokens. Rendering emits tokens in declaration order. Parsing is
//! total: unrecognised characters and repeated tokens are ignored so existing
//! configuration strings keep working.
//!
//! | Attribute | Bit | Token |
//! |-----------|-----|-------|
//! | [`PreserveAttribute::Replication`] | 0 | `r` |
//! | [`PreserveAttribute::BlockSize`] | 1 | `b` |
//! | [`PreserveAttribute::Owner`] | 2 | `u` |
//! | [`PreserveAttribute::Group`] | 3 | `g` |
//! | [`PreserveAttribute::Permission`] | 4 | `p` |
//!
//! # Examples
//!
//! ```
//! use preserve::{PreserveAttribute, PreserveAttributes};
//!
//! let attributes = PreserveAttributes::OWNER | PreserveAttributes::PERMISSION;
//! assert_eq!(attributes.to_mnemonic_string(), "up");
//! assert_eq!(PreserveAttributes::from_mnemonic("up"), attributes);
//!
//! let set: Vec<_> = attributes.iter().collect();
//! assert_eq!(set, [PreserveAttribute::Owner, PreserveAttribute::Permission]);
//! ```

mod flags;
mod iter;
mod known;
mod mnemonic;

pub use flags::PreserveAttributes;
pub use iter::PreserveAttributesIter;
pub use known::PreserveAttribute;

#[cfg(test)]
mod tests;
