use std::fmt;

use super::flags::PreserveAttributes;

/// Filesystem attributes a copy job can carry from source to destination.
///
/// Declaration order is significant: the ordinal of each variant selects its
/// bit in [`PreserveAttributes`] and fixes the order in which mnemonic tokens
/// are rendered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum PreserveAttribute {
    /// Replication factor of the file (`r`).
    #[doc(alias = "r")]
    Replication,
    /// Block size of the file (`b`).
    #[doc(alias = "b")]
    BlockSize,
    /// Owning user (`u`).
    #[doc(alias = "u")]
    Owner,
    /// Owning group (`g`).
    #[doc(alias = "g")]
    Group,
    /// Permission bits (`p`).
    #[doc(alias = "p")]
    Permission,
}

impl PreserveAttribute {
    /// Every attribute in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Replication,
        Self::BlockSize,
        Self::Owner,
        Self::Group,
        Self::Permission,
    ];

    /// Returns the zero-based position of the attribute, which is also its bit index.
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Returns the single-character mnemonic token for the attribute.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Replication => 'r',
            Self::BlockSize => 'b',
            Self::Owner => 'u',
            Self::Group => 'g',
            Self::Permission => 'p',
        }
    }

    /// Returns the lowercase name used in diagnostics and rendered reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Replication => "replication",
            Self::BlockSize => "block-size",
            Self::Owner => "owner",
            Self::Group => "group",
            Self::Permission => "permission",
        }
    }

    /// Looks up the attribute identified by a mnemonic token.
    ///
    /// Tokens are case-sensitive; any character outside `rbugp` yields `None`.
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'r' => Some(Self::Replication),
            'b' => Some(Self::BlockSize),
            'u' => Some(Self::Owner),
            'g' => Some(Self::Group),
            'p' => Some(Self::Permission),
            _ => None,
        }
    }

    /// Returns the [`PreserveAttributes`] bit corresponding to the variant.
    #[must_use]
    pub const fn as_flag(self) -> PreserveAttributes {
        PreserveAttributes::from_bits(1 << self.ordinal())
    }
}

impl From<PreserveAttribute> for PreserveAttributes {
    fn from(attribute: PreserveAttribute) -> Self {
        attribute.as_flag()
    }
}

impl fmt::Display for PreserveAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
