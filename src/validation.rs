use crate::ScanFlags;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{BitOr, BitOrAssign};

/// Smallest scan angle rank allowed by the LAS format, in degrees.
pub const SCAN_ANGLE_RANK_MIN: i8 = -90;

/// Largest scan angle rank allowed by the LAS format, in degrees.
pub const SCAN_ANGLE_RANK_MAX: i8 = 90;

const MAX_RETURN_NUMBER: u8 = 0x07;
const MAX_NUMBER_OF_RETURNS: u8 = 0x07;
const MAX_SCAN_DIRECTION: u8 = 0x01;
const MAX_FLIGHT_LINE_EDGE: u8 = 0x01;

/// Bitmask of the range rules a point violates, one bit per rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violations(u32);

impl Violations {
    /// Return number is larger than 7.
    pub const RETURN_NUMBER: Violations = Violations(1 << 0);
    /// Number of returns is larger than 7.
    pub const NUMBER_OF_RETURNS: Violations = Violations(1 << 1);
    /// Scan direction is larger than 1.
    pub const SCAN_DIRECTION: Violations = Violations(1 << 2);
    /// Flight-line edge is larger than 1.
    pub const FLIGHT_LINE_EDGE: Violations = Violations(1 << 3);
    /// Scan angle rank is outside of [`SCAN_ANGLE_RANK_MIN`] and [`SCAN_ANGLE_RANK_MAX`].
    pub const SCAN_ANGLE_RANK: Violations = Violations(1 << 4);

    const NAMED: [(Violations, &'static str); 5] = [
        (Self::RETURN_NUMBER, "return number"),
        (Self::NUMBER_OF_RETURNS, "number of returns"),
        (Self::SCAN_DIRECTION, "scan direction"),
        (Self::FLIGHT_LINE_EDGE, "flight-line edge"),
        (Self::SCAN_ANGLE_RANK, "scan angle rank"),
    ];

    /// No rule violated.
    pub const fn empty() -> Self {
        Violations(0)
    }

    /// Creates a bitmask from raw bits. Unknown bits are dropped.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Violations(bits & 0b1_1111)
    }

    /// Raw bits of the mask.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True if all rules of `other` are also set in `self`.
    pub const fn contains(&self, other: Violations) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Violations) {
        self.0 |= other.0;
    }

    /// Human readable names of all violated rules.
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(rule, _)| self.contains(*rule))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for Violations {
    type Output = Violations;

    fn bitor(self, rhs: Violations) -> Violations {
        Violations(self.0 | rhs.0)
    }
}

impl BitOrAssign for Violations {
    fn bitor_assign(&mut self, rhs: Violations) {
        self.insert(rhs);
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if self.is_empty() {
            write!(f, "no violations")
        } else {
            write!(f, "{}", self.names().join(", "))
        }
    }
}

/// Checks the four sub-fields of the flags byte.
pub(crate) fn flag_violations(flags: &ScanFlags) -> Violations {
    let mut violations = Violations::empty();
    if flags.return_number > MAX_RETURN_NUMBER {
        violations |= Violations::RETURN_NUMBER;
    }
    if flags.number_of_returns > MAX_NUMBER_OF_RETURNS {
        violations |= Violations::NUMBER_OF_RETURNS;
    }
    if flags.scan_direction > MAX_SCAN_DIRECTION {
        violations |= Violations::SCAN_DIRECTION;
    }
    if flags.flight_line_edge > MAX_FLIGHT_LINE_EDGE {
        violations |= Violations::FLIGHT_LINE_EDGE;
    }
    violations
}

/// Evaluates all five rules and returns every violated one.
pub(crate) fn violations(flags: &ScanFlags, scan_angle_rank: i8) -> Violations {
    let mut violations = flag_violations(flags);
    if !(SCAN_ANGLE_RANK_MIN..=SCAN_ANGLE_RANK_MAX).contains(&scan_angle_rank) {
        violations |= Violations::SCAN_ANGLE_RANK;
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_defaults() {
        let result = violations(&ScanFlags::default(), 0);
        assert!(result.is_empty());
        assert_eq!(result.bits(), 0);
        assert_eq!(result.to_string(), "no violations");
    }

    #[test]
    fn rule_bits() {
        assert_eq!(Violations::RETURN_NUMBER.bits(), 1);
        assert_eq!(Violations::NUMBER_OF_RETURNS.bits(), 2);
        assert_eq!(Violations::SCAN_DIRECTION.bits(), 4);
        assert_eq!(Violations::FLIGHT_LINE_EDGE.bits(), 8);
        assert_eq!(Violations::SCAN_ANGLE_RANK.bits(), 16);
    }

    #[test]
    fn collects_all_violations() {
        let flags = ScanFlags {
            return_number: 8,
            number_of_returns: 9,
            scan_direction: 2,
            flight_line_edge: 2,
        };
        let result = violations(&flags, 91);
        assert_eq!(result.bits(), 0b1_1111);
        assert_eq!(
            result.to_string(),
            "return number, number of returns, scan direction, flight-line edge, scan angle rank"
        );
    }

    #[test]
    fn upper_flag_bounds_are_valid() {
        let flags = ScanFlags {
            return_number: 7,
            number_of_returns: 7,
            scan_direction: 1,
            flight_line_edge: 1,
        };
        assert!(violations(&flags, 0).is_empty());
    }

    #[test]
    fn scan_angle_bounds() {
        let flags = ScanFlags::default();
        assert!(violations(&flags, SCAN_ANGLE_RANK_MIN).is_empty());
        assert!(violations(&flags, SCAN_ANGLE_RANK_MAX).is_empty());
        assert_eq!(
            violations(&flags, SCAN_ANGLE_RANK_MIN - 1),
            Violations::SCAN_ANGLE_RANK
        );
        assert_eq!(
            violations(&flags, SCAN_ANGLE_RANK_MAX + 1),
            Violations::SCAN_ANGLE_RANK
        );
        assert_eq!(violations(&flags, i8::MIN), Violations::SCAN_ANGLE_RANK);
    }

    #[test]
    fn mask_operations() {
        let mut mask = Violations::empty();
        mask.insert(Violations::SCAN_DIRECTION);
        assert!(mask.contains(Violations::SCAN_DIRECTION));
        assert!(!mask.contains(Violations::SCAN_DIRECTION | Violations::RETURN_NUMBER));
        assert_eq!(Violations::from_bits_truncate(0xFF).bits(), 0b1_1111);
        assert_eq!(mask.names(), vec!["scan direction"]);
    }
}
