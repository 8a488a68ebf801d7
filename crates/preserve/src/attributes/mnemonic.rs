use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::flags::PreserveAttributes;
use super::known::PreserveAttribute;
use crate::trace;

impl PreserveAttributes {
    /// Renders the set as a mnemonic string.
    ///
    /// The token of every preserved attribute is emitted in declaration order
    /// (`r`, `b`, `u`, `g`, `p`), independent of how the set was built. The
    /// result parses back into an equal value with [`Self::from_mnemonic`].
    #[must_use]
    pub fn to_mnemonic_string(self) -> String {
        self.iter().map(PreserveAttribute::token).collect()
    }

    /// Parses a mnemonic string of the form `[rbugp]*`.
    ///
    /// Each attribute whose token appears anywhere in `text` is preserved.
    /// Position and repetition do not matter, and characters outside the token
    /// set are ignored. An empty string preserves nothing. Parsing never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use preserve::PreserveAttributes;
    ///
    /// let attributes = PreserveAttributes::from_mnemonic("p-u-p");
    /// assert_eq!(attributes, PreserveAttributes::OWNER | PreserveAttributes::PERMISSION);
    /// assert_eq!(PreserveAttributes::from_mnemonic("rrrr"), PreserveAttributes::from_mnemonic("r"));
    /// ```
    #[must_use]
    pub fn from_mnemonic(text: &str) -> Self {
        let attributes: Self = PreserveAttribute::ALL
            .into_iter()
            .filter(|attribute| text.contains(attribute.token()))
            .collect();
        trace::mnemonic_decoded(text, attributes);
        attributes
    }

    /// Parses an optional mnemonic string.
    ///
    /// An absent value preserves nothing, matching an empty string.
    #[must_use]
    pub fn from_optional_mnemonic(text: Option<&str>) -> Self {
        text.map_or(Self::EMPTY, Self::from_mnemonic)
    }
}

impl fmt::Display for PreserveAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_mnemonic_string())
    }
}

impl FromStr for PreserveAttributes {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_mnemonic(s))
    }
}

impl Serialize for PreserveAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_mnemonic_string())
    }
}

impl<'de> Deserialize<'de> for PreserveAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_optional_mnemonic(text.as_deref()))
    }
}
