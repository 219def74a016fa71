use crate::flags::{self, ScanFlags};
use crate::header::{scale, ScaleOffset};
use crate::validation::{self, Violations};
use crate::{Classification, Error, Result};

/// Absolute tolerance used by [`Point::equal`] for each coordinate axis.
pub const COORDINATE_TOLERANCE: f64 = 0.00001;

/// RGB point colors with 16 bit per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl Color {
    pub fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }
}

/// Represents a single LAS point record with all its different attributes.
///
/// Coordinates are kept in stored space, meaning scale and offset of the
/// header are already applied. Cloning a point copies the extra and format
/// specific byte buffers, so the clone never shares them with the original.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coords: [f64; 3],
    intensity: u16,
    flags: u8,
    classification: Classification,
    scan_angle_rank: i8,
    user_data: u8,
    point_source_id: u16,
    gps_time: f64,
    color: Color,
    extra_data: Vec<u8>,
    format_data: Vec<u8>,
}

impl Point {
    /// Creates a point with zeroed coordinates and attributes and empty byte buffers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    pub fn z(&self) -> f64 {
        self.coords[2]
    }

    /// Stored X, Y and Z coordinates.
    pub fn coordinates(&self) -> [f64; 3] {
        self.coords
    }

    pub fn set_x(&mut self, value: f64) {
        self.coords[0] = value;
    }

    pub fn set_y(&mut self, value: f64) {
        self.coords[1] = value;
    }

    pub fn set_z(&mut self, value: f64) {
        self.coords[2] = value;
    }

    /// Stores coordinates that are already in stored space.
    pub fn set_coordinates(&mut self, x: f64, y: f64, z: f64) {
        self.coords = [x, y, z];
    }

    /// Applies scale and offset of the header to the given coordinates and stores the result.
    ///
    /// Each axis is computed as `value * scale + offset`.
    /// No rounding happens here, integer encoding is done by the writer.
    pub fn set_scaled_coordinates(
        &mut self,
        header: &impl ScaleOffset,
        x: f64,
        y: f64,
        z: f64,
    ) {
        let cx = scale(x, header.scale_x(), header.offset_x());
        let cy = scale(y, header.scale_y(), header.offset_y());
        let cz = scale(z, header.scale_z(), header.offset_z());
        self.set_coordinates(cx, cy, cz);
    }

    pub fn intensity(&self) -> u16 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: u16) {
        self.intensity = intensity;
    }

    /// Raw flags byte with return number, number of returns, scan direction and flight-line edge.
    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn set_flags(&mut self, flags: u8) {
        self.flags = flags;
    }

    pub fn return_number(&self) -> u8 {
        flags::return_number(self.flags)
    }

    /// Sets the return number. Only the lowest three bits are stored.
    pub fn set_return_number(&mut self, value: u8) {
        self.flags = flags::with_return_number(self.flags, value);
    }

    pub fn number_of_returns(&self) -> u8 {
        flags::number_of_returns(self.flags)
    }

    /// Sets the number of returns. Only the lowest three bits are stored.
    pub fn set_number_of_returns(&mut self, value: u8) {
        self.flags = flags::with_number_of_returns(self.flags, value);
    }

    pub fn scan_direction(&self) -> u8 {
        flags::scan_direction(self.flags)
    }

    /// Sets the scan direction. Only the lowest bit is stored.
    pub fn set_scan_direction(&mut self, value: u8) {
        self.flags = flags::with_scan_direction(self.flags, value);
    }

    pub fn flight_line_edge(&self) -> u8 {
        flags::flight_line_edge(self.flags)
    }

    /// Sets the flight-line edge flag. Only the lowest bit is stored.
    pub fn set_flight_line_edge(&mut self, value: u8) {
        self.flags = flags::with_flight_line_edge(self.flags, value);
    }

    /// All four flag sub-fields in decoded form.
    pub fn scan_flags(&self) -> ScanFlags {
        ScanFlags::from_byte(self.flags)
    }

    /// Replaces all four flag sub-fields, truncating oversized values.
    pub fn set_scan_flags(&mut self, scan_flags: ScanFlags) {
        self.flags = scan_flags.to_byte();
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Replaces the classification with a new value, a raw byte or bit pattern.
    pub fn set_classification(&mut self, classification: impl Into<Classification>) {
        self.classification = classification.into();
    }

    pub fn scan_angle_rank(&self) -> i8 {
        self.scan_angle_rank
    }

    /// Sets the scan angle rank. Values outside of -90 to 90 are stored
    /// as given and reported by [`Point::validate`].
    pub fn set_scan_angle_rank(&mut self, rank: i8) {
        self.scan_angle_rank = rank;
    }

    pub fn user_data(&self) -> u8 {
        self.user_data
    }

    pub fn set_user_data(&mut self, data: u8) {
        self.user_data = data;
    }

    pub fn point_source_id(&self) -> u16 {
        self.point_source_id
    }

    pub fn set_point_source_id(&mut self, id: u16) {
        self.point_source_id = id;
    }

    pub fn gps_time(&self) -> f64 {
        self.gps_time
    }

    pub fn set_gps_time(&mut self, time: f64) {
        self.gps_time = time;
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Extra bytes attached to the point record, opaque to this crate.
    pub fn extra_data(&self) -> &[u8] {
        &self.extra_data
    }

    pub fn extra_data_mut(&mut self) -> &mut Vec<u8> {
        &mut self.extra_data
    }

    pub fn set_extra_data(&mut self, data: Vec<u8>) {
        self.extra_data = data;
    }

    /// Bytes specific to the point data format, opaque to this crate.
    pub fn format_data(&self) -> &[u8] {
        &self.format_data
    }

    pub fn format_data_mut(&mut self) -> &mut Vec<u8> {
        &mut self.format_data
    }

    pub fn set_format_data(&mut self, data: Vec<u8>) {
        self.format_data = data;
    }

    /// Evaluates all range rules and returns the violated ones.
    pub fn violations(&self) -> Violations {
        validation::violations(&self.scan_flags(), self.scan_angle_rank)
    }

    /// Checks all fields against the ranges allowed by the LAS format.
    ///
    /// Returns an [`Error::InvalidPointData`] with the bitmask of all violated rules.
    /// The point itself stays untouched and usable.
    pub fn validate(&self) -> Result<()> {
        let violations = self.violations();
        if !violations.is_empty() {
            log::debug!(
                "Point validation failed with mask {:#07b}: {violations}",
                violations.bits()
            );
            Error::invalid_point_data("point data members out of range", violations)?
        }
        Ok(())
    }

    /// Same checks as [`Point::validate`] without telling which rule failed.
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Compares only the coordinates, each axis within [`COORDINATE_TOLERANCE`].
    ///
    /// All other attributes like classification, intensity or flags are ignored.
    pub fn equal(&self, other: &Point) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| (a - b).abs() <= COORDINATE_TOLERANCE)
    }
}
