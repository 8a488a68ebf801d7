#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Attribute preservation preferences for copy jobs.
//!
//! A copy job decides, per filesystem attribute, whether the value observed on
//! the source should be carried over to the destination. The decisions are
//! stored as a compact bitmask and exchanged with configuration sources using a
//! short mnemonic string such as `"ugp"` (owner, group and permissions).
//!
//! The crate exposes [`PreserveAttribute`], the fixed set of attributes that can
//! be preserved, and [`PreserveAttributes`], the immutable set of selected
//! attributes. Job configuration is read through [`JobProperties`], which stores
//! the mnemonic under [`PRESERVED_ATTRIBUTES_KEY`].
//!
//! # Examples
//!
//! ```
//! use preserve::{PreserveAttribute, PreserveAttributes};
//!
//! let attributes = PreserveAttributes::from_mnemonic("gpr");
//! assert!(attributes.preserve(PreserveAttribute::Replication));
//! assert!(!attributes.preserve(PreserveAttribute::Owner));
//! assert_eq!(attributes.to_mnemonic_string(), "rgp");
//! ```
//!
//! Unknown characters never cause a failure:
//!
//! ```
//! use preserve::PreserveAttributes;
//!
//! assert!(PreserveAttributes::from_mnemonic("xyz").is_empty());
//! ```

mod attributes;
mod config;
mod error;
mod trace;

pub use attributes::{PreserveAttribute, PreserveAttributes, PreserveAttributesIter};
pub use config::{JobProperties, PRESERVED_ATTRIBUTES_KEY};
pub use error::ConfigError;
