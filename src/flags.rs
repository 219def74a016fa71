//! Codec for the return/scan flags byte of a LAS point record.
//!
//! The byte packs four sub-fields:
//!
//! | Bits | Sub-field         |
//! |------|-------------------|
//! | 0-2  | Return number     |
//! | 3-5  | Number of returns |
//! | 6    | Scan direction    |
//! | 7    | Flight-line edge  |
//!
//! Setters clear only the bits of their own sub-field.
//! Input wider than the sub-field is truncated, never rejected.

use crate::validation::{self, Violations};

const RETURN_NUMBER_SHIFT: u8 = 0;
const RETURN_NUMBER_MASK: u8 = 0b0000_0111;
const NUMBER_OF_RETURNS_SHIFT: u8 = 3;
const NUMBER_OF_RETURNS_MASK: u8 = 0b0011_1000;
const SCAN_DIRECTION_SHIFT: u8 = 6;
const SCAN_DIRECTION_MASK: u8 = 0b0100_0000;
const FLIGHT_LINE_EDGE_SHIFT: u8 = 7;
const FLIGHT_LINE_EDGE_MASK: u8 = 0b1000_0000;

fn get(flags: u8, mask: u8, shift: u8) -> u8 {
    (flags & mask) >> shift
}

fn set(flags: u8, mask: u8, shift: u8, value: u8, name: &str) -> u8 {
    let width_mask = mask >> shift;
    if value & !width_mask != 0 {
        log::trace!(
            "Truncating {name} {value} to {} bits: stored {}",
            width_mask.count_ones(),
            value & width_mask
        );
    }
    (flags & !mask) | ((value << shift) & mask)
}

/// Extracts the return number from bits 0-2.
pub fn return_number(flags: u8) -> u8 {
    get(flags, RETURN_NUMBER_MASK, RETURN_NUMBER_SHIFT)
}

/// Returns a copy of the flags with the return number replaced.
pub fn with_return_number(flags: u8, value: u8) -> u8 {
    set(
        flags,
        RETURN_NUMBER_MASK,
        RETURN_NUMBER_SHIFT,
        value,
        "return number",
    )
}

/// Extracts the number of returns from bits 3-5.
pub fn number_of_returns(flags: u8) -> u8 {
    get(flags, NUMBER_OF_RETURNS_MASK, NUMBER_OF_RETURNS_SHIFT)
}

/// Returns a copy of the flags with the number of returns replaced.
pub fn with_number_of_returns(flags: u8, value: u8) -> u8 {
    set(
        flags,
        NUMBER_OF_RETURNS_MASK,
        NUMBER_OF_RETURNS_SHIFT,
        value,
        "number of returns",
    )
}

/// Extracts the scan direction from bit 6.
pub fn scan_direction(flags: u8) -> u8 {
    get(flags, SCAN_DIRECTION_MASK, SCAN_DIRECTION_SHIFT)
}

/// Returns a copy of the flags with the scan direction replaced.
pub fn with_scan_direction(flags: u8, value: u8) -> u8 {
    set(
        flags,
        SCAN_DIRECTION_MASK,
        SCAN_DIRECTION_SHIFT,
        value,
        "scan direction",
    )
}

/// Extracts the flight-line edge flag from bit 7.
pub fn flight_line_edge(flags: u8) -> u8 {
    get(flags, FLIGHT_LINE_EDGE_MASK, FLIGHT_LINE_EDGE_SHIFT)
}

/// Returns a copy of the flags with the flight-line edge flag replaced.
pub fn with_flight_line_edge(flags: u8, value: u8) -> u8 {
    set(
        flags,
        FLIGHT_LINE_EDGE_MASK,
        FLIGHT_LINE_EDGE_SHIFT,
        value,
        "flight-line edge",
    )
}

/// The four sub-fields of the flags byte in decoded form.
///
/// Values are kept as given and only truncated when packed with [`ScanFlags::to_byte`].
/// This allows checking values from an external source before they are stored in a point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanFlags {
    /// Index of this return for the emitted pulse, starting at 1.
    pub return_number: u8,
    /// Total number of returns of the emitted pulse.
    pub number_of_returns: u8,
    /// Direction of the scanner mirror when the pulse was emitted.
    pub scan_direction: u8,
    /// Set when the point is the last one of a scan line before the direction changes.
    pub flight_line_edge: u8,
}

impl ScanFlags {
    /// Decodes all four sub-fields from a flags byte.
    pub fn from_byte(flags: u8) -> Self {
        Self {
            return_number: return_number(flags),
            number_of_returns: number_of_returns(flags),
            scan_direction: scan_direction(flags),
            flight_line_edge: flight_line_edge(flags),
        }
    }

    /// Packs all four sub-fields into a flags byte, truncating oversized values.
    pub fn to_byte(&self) -> u8 {
        let flags = with_return_number(0, self.return_number);
        let flags = with_number_of_returns(flags, self.number_of_returns);
        let flags = with_scan_direction(flags, self.scan_direction);
        with_flight_line_edge(flags, self.flight_line_edge)
    }

    /// Checks the range rules of the four sub-fields.
    /// The scan angle rule is never set in the result.
    pub fn violations(&self) -> Violations {
        validation::flag_violations(self)
    }
}

impl From<u8> for ScanFlags {
    fn from(flags: u8) -> Self {
        Self::from_byte(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_return_number() {
        for v in 0..=7 {
            let flags = with_return_number(0xFF, v);
            assert_eq!(return_number(flags), v);
            assert_eq!(number_of_returns(flags), 7);
            assert_eq!(scan_direction(flags), 1);
            assert_eq!(flight_line_edge(flags), 1);
        }
    }

    #[test]
    fn round_trip_number_of_returns() {
        for v in 0..=7 {
            let flags = with_number_of_returns(0xFF, v);
            assert_eq!(number_of_returns(flags), v);
            assert_eq!(return_number(flags), 7);
            assert_eq!(scan_direction(flags), 1);
            assert_eq!(flight_line_edge(flags), 1);

            let flags = with_number_of_returns(0, v);
            assert_eq!(number_of_returns(flags), v);
            assert_eq!(return_number(flags), 0);
        }
    }

    #[test]
    fn round_trip_single_bits() {
        for v in 0..=1 {
            let flags = with_scan_direction(0b1011_1111, v);
            assert_eq!(scan_direction(flags), v);
            assert_eq!(flags & !SCAN_DIRECTION_MASK, 0b1011_1111);

            let flags = with_flight_line_edge(0b0111_1111, v);
            assert_eq!(flight_line_edge(flags), v);
            assert_eq!(flags & !FLIGHT_LINE_EDGE_MASK, 0b0111_1111);
        }
    }

    #[test]
    fn truncates_oversized_values() {
        assert_eq!(return_number(with_return_number(0, 9)), 1);
        assert_eq!(number_of_returns(with_number_of_returns(0, 0b1111)), 0b111);
        assert_eq!(scan_direction(with_scan_direction(0, 2)), 0);
        assert_eq!(flight_line_edge(with_flight_line_edge(0, 3)), 1);
    }

    #[test]
    fn truncation_does_not_leak_into_neighbours() {
        let flags = with_return_number(0, 0xFF);
        assert_eq!(flags, 0b0000_0111);
        let flags = with_number_of_returns(0, 0xFF);
        assert_eq!(flags, 0b0011_1000);
        let flags = with_scan_direction(0, 0xFF);
        assert_eq!(flags, 0b0100_0000);
    }

    #[test]
    fn bit_layout() {
        let flags = ScanFlags {
            return_number: 2,
            number_of_returns: 3,
            scan_direction: 1,
            flight_line_edge: 0,
        };
        assert_eq!(flags.to_byte(), 0b0101_1010);
        assert_eq!(ScanFlags::from_byte(0b0101_1010), flags);
        assert_eq!(ScanFlags::from(0b1000_0000).flight_line_edge, 1);
    }

    #[test]
    fn decoded_flags_keep_oversized_values() {
        let flags = ScanFlags {
            return_number: 8,
            ..Default::default()
        };
        assert_eq!(flags.return_number, 8);
        assert_eq!(ScanFlags::from_byte(flags.to_byte()).return_number, 0);
        assert_eq!(flags.violations(), Violations::RETURN_NUMBER);
    }
}
