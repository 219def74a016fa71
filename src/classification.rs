const CLASS_INDEX_MASK: u8 = 0b0001_1111;
const SYNTHETIC_BIT: u8 = 5;
const KEY_POINT_BIT: u8 = 6;
const WITHHELD_BIT: u8 = 7;

/// Classification byte of a point.
///
/// Bits 0-4 hold an index into the classification lookup table
/// and bits 5-7 the synthetic, key-point and withheld flags.
/// Every byte value is a legal classification, the meaning of the
/// index is up to the consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification(u8);

impl Classification {
    /// Largest index into the classification lookup table.
    pub const MAX_CLASS_INDEX: u8 = CLASS_INDEX_MASK;

    /// Creates a classification from a raw byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Creates a classification from a bit pattern.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw classification byte.
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Lookup table index stored in bits 0-4.
    pub const fn class_index(&self) -> u8 {
        self.0 & CLASS_INDEX_MASK
    }

    /// Replaces the lookup table index. Values above 31 are truncated.
    pub fn set_class_index(&mut self, index: u8) {
        self.0 = (self.0 & !CLASS_INDEX_MASK) | (index & CLASS_INDEX_MASK);
    }

    /// Point was created by a technique other than LIDAR collection.
    pub const fn is_synthetic(&self) -> bool {
        self.bit(SYNTHETIC_BIT)
    }

    pub fn set_synthetic(&mut self, value: bool) {
        self.set_bit(SYNTHETIC_BIT, value);
    }

    /// Point is considered a model key-point.
    pub const fn is_key_point(&self) -> bool {
        self.bit(KEY_POINT_BIT)
    }

    pub fn set_key_point(&mut self, value: bool) {
        self.set_bit(KEY_POINT_BIT, value);
    }

    /// Point should not be included in processing.
    pub const fn is_withheld(&self) -> bool {
        self.bit(WITHHELD_BIT)
    }

    pub fn set_withheld(&mut self, value: bool) {
        self.set_bit(WITHHELD_BIT, value);
    }

    const fn bit(&self, bit: u8) -> bool {
        self.0 & (1 << bit) != 0
    }

    fn set_bit(&mut self, bit: u8, value: bool) {
        if value {
            self.0 |= 1 << bit;
        } else {
            self.0 &= !(1 << bit);
        }
    }
}

impl From<u8> for Classification {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Classification> for u8 {
    fn from(value: Classification) -> Self {
        value.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_paths_are_equivalent() {
        let raw = Classification::new(0b1010_0010);
        let bits = Classification::from_bits(0b1010_0010);
        let from: Classification = 0b1010_0010_u8.into();
        let copy = raw;
        assert_eq!(raw, bits);
        assert_eq!(raw, from);
        assert_eq!(raw, copy);
        assert_eq!(u8::from(raw), 0b1010_0010);
    }

    #[test]
    fn every_byte_is_legal() {
        for value in 0..=u8::MAX {
            assert_eq!(Classification::new(value).bits(), value);
        }
    }

    #[test]
    fn bit_views() {
        let cls = Classification::new(0b1010_0010);
        assert_eq!(cls.class_index(), 2);
        assert!(cls.is_synthetic());
        assert!(!cls.is_key_point());
        assert!(cls.is_withheld());
    }

    #[test]
    fn bit_setters() {
        let mut cls = Classification::default();
        cls.set_class_index(6);
        cls.set_key_point(true);
        assert_eq!(cls.bits(), 0b0100_0110);

        cls.set_class_index(0xFF);
        assert_eq!(cls.class_index(), Classification::MAX_CLASS_INDEX);
        assert!(cls.is_key_point());

        cls.set_key_point(false);
        cls.set_synthetic(true);
        cls.set_withheld(true);
        assert_eq!(cls.bits(), 0b1011_1111);
        cls.set_synthetic(false);
        assert_eq!(cls.bits(), 0b1001_1111);
    }
}
