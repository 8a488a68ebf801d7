use std::iter::FusedIterator;

use super::flags::PreserveAttributes;
use super::known::PreserveAttribute;

/// Iterator over the attributes preserved by a [`PreserveAttributes`] value.
///
/// The iterator walks [`PreserveAttribute::ALL`] as a window and yields every
/// attribute the set preserves, so the order is the one used by
/// [`PreserveAttributes::to_mnemonic_string`]. Mask bits outside the defined
/// attributes are never visited.
#[derive(Clone, Debug)]
pub struct PreserveAttributesIter {
    attributes: PreserveAttributes,
    position: usize,
    end: usize,
}

impl PreserveAttributesIter {
    pub(super) const fn new(attributes: PreserveAttributes) -> Self {
        Self {
            attributes,
            position: 0,
            end: PreserveAttribute::ALL.len(),
        }
    }

    fn window(&self) -> &'static [PreserveAttribute] {
        &PreserveAttribute::ALL[self.position..self.end]
    }
}

impl Iterator for PreserveAttributesIter {
    type Item = PreserveAttribute;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.end {
            let attribute = PreserveAttribute::ALL[self.position];
            self.position += 1;
            if self.attributes.preserve(attribute) {
                return Some(attribute);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PreserveAttributesIter {
    fn len(&self) -> usize {
        self.window()
            .iter()
            .filter(|attribute| self.attributes.preserve(**attribute))
            .count()
    }
}

impl FusedIterator for PreserveAttributesIter {}

impl DoubleEndedIterator for PreserveAttributesIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.end > self.position {
            self.end -= 1;
            let attribute = PreserveAttribute::ALL[self.end];
            if self.attributes.preserve(attribute) {
                return Some(attribute);
            }
        }
        None
    }
}
