//! Structured logging hooks for mnemonic decoding and property loading.
//!
//! Events are emitted through `tracing` when the `tracing` feature is enabled
//! and compile to no-ops otherwise.

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::PreserveAttributes;

/// Trace the result of decoding a mnemonic string.
#[cfg(feature = "tracing")]
#[inline]
pub fn mnemonic_decoded(input: &str, attributes: PreserveAttributes) {
    trace!(
        target: "preserve::mnemonic",
        input = input,
        bits = attributes.bits(),
        mnemonic = %attributes,
        "decoded preserve mnemonic {:?} as {:?}",
        input,
        attributes.to_mnemonic_string()
    );
}

/// Trace the result of decoding a mnemonic string - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn mnemonic_decoded(_input: &str, _attributes: PreserveAttributes) {}

/// Trace a job-properties document being loaded.
///
/// # Arguments
///
/// * `origin` - Path of the document, or `"<memory>"` for in-memory JSON
/// * `entries` - Number of properties read
#[cfg(feature = "tracing")]
#[inline]
pub fn properties_loaded(origin: &str, entries: usize) {
    debug!(
        target: "preserve::config",
        origin = origin,
        entries = entries,
        "loaded {} job properties from {}",
        entries,
        origin
    );
}

/// Trace a job-properties document being loaded - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn properties_loaded(_origin: &str, _entries: usize) {}
