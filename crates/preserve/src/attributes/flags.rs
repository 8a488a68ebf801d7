use std::fmt;
use std::iter::{Extend, FromIterator};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::iter::PreserveAttributesIter;
use super::known::PreserveAttribute;

/// Immutable set of attributes a copy job should preserve.
///
/// The set is stored as a bitmask where bit *i* corresponds to the
/// [`PreserveAttribute`] with ordinal *i*. Two values are equal exactly when
/// their masks are equal. Values are `Copy`; every combinator returns a new
/// set rather than mutating the receiver.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct PreserveAttributes {
    bits: u32,
}

impl PreserveAttributes {
    const fn new(bits: u32) -> Self {
        Self { bits }
    }

    /// Preserve nothing.
    pub const EMPTY: Self = Self::new(0);
    /// Preserve the replication factor (`r`).
    pub const REPLICATION: Self = Self::new(1 << 0);
    /// Preserve the block size (`b`).
    pub const BLOCK_SIZE: Self = Self::new(1 << 1);
    /// Preserve the owning user (`u`).
    pub const OWNER: Self = Self::new(1 << 2);
    /// Preserve the owning group (`g`).
    pub const GROUP: Self = Self::new(1 << 3);
    /// Preserve permission bits (`p`).
    pub const PERMISSION: Self = Self::new(1 << 4);

    /// Every attribute recognised by this crate.
    pub const ALL: Self = Self::new(Self::KNOWN_MASK);

    pub(super) const KNOWN_MASK: u32 = Self::REPLICATION.bits
        | Self::BLOCK_SIZE.bits
        | Self::OWNER.bits
        | Self::GROUP.bits
        | Self::PERMISSION.bits;

    /// Returns a set constructed from the raw `bits` without masking.
    ///
    /// The mask is stored verbatim. Bits above the defined attributes are kept
    /// for equality but are never reported by [`Self::preserve`], rendered by
    /// [`Self::to_mnemonic_string`], or yielded by [`Self::iter`].
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Reports whether `attribute` should be preserved.
    #[must_use]
    pub const fn preserve(self, attribute: PreserveAttribute) -> bool {
        self.bits & (1 << attribute.ordinal()) != 0
    }

    /// Returns `true` when no attribute is preserved.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Reports the subset of bits that do not map to a [`PreserveAttribute`].
    #[must_use]
    pub const fn unknown_bits(self) -> u32 {
        self.bits & !Self::KNOWN_MASK
    }

    /// Checks whether all attributes in `other` are preserved by `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Returns a new set containing the union of both operands.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::new(self.bits | other.bits)
    }

    /// Returns a new set containing only the attributes common to both operands.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::new(self.bits & other.bits)
    }

    /// Returns a new set containing the attributes in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::new(self.bits & !other.bits)
    }

    /// Returns a copy of the set with `attribute` added.
    #[must_use]
    pub const fn with(self, attribute: PreserveAttribute) -> Self {
        self.union(attribute.as_flag())
    }

    /// Returns a copy of the set with `attribute` removed.
    #[must_use]
    pub const fn without(self, attribute: PreserveAttribute) -> Self {
        self.difference(attribute.as_flag())
    }

    /// Returns an iterator over the preserved attributes in declaration order.
    #[must_use]
    pub fn iter(self) -> PreserveAttributesIter {
        PreserveAttributesIter::new(self)
    }
}

impl fmt::Debug for PreserveAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreserveAttributes")
            .field("bits", &format_args!("0x{:x}", self.bits))
            .field("mnemonic", &self.to_mnemonic_string())
            .finish()
    }
}

impl IntoIterator for PreserveAttributes {
    type Item = PreserveAttribute;
    type IntoIter = PreserveAttributesIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<PreserveAttribute> for PreserveAttributes {
    fn from_iter<I: IntoIterator<Item = PreserveAttribute>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl Extend<PreserveAttribute> for PreserveAttributes {
    fn extend<I: IntoIterator<Item = PreserveAttribute>>(&mut self, iter: I) {
        for attribute in iter {
            *self |= attribute.as_flag();
        }
    }
}

impl Not for PreserveAttributes {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(!self.bits & Self::KNOWN_MASK)
    }
}

impl BitOr for PreserveAttributes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for PreserveAttributes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for PreserveAttributes {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAndAssign for PreserveAttributes {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitXor for PreserveAttributes {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::new(self.bits ^ rhs.bits)
    }
}

impl BitXorAssign for PreserveAttributes {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.bits ^= rhs.bits;
    }
}

impl BitOr<PreserveAttribute> for PreserveAttributes {
    type Output = Self;

    fn bitor(self, rhs: PreserveAttribute) -> Self::Output {
        self.with(rhs)
    }
}

impl From<PreserveAttributes> for u32 {
    fn from(attributes: PreserveAttributes) -> Self {
        attributes.bits
    }
}

impl From<u32> for PreserveAttributes {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}
