/// Read access to the per-axis scale and offset values of a LAS header.
///
/// Implement this for whatever header type the reader or writer pipeline uses
/// to make it usable with [`crate::Point::set_scaled_coordinates`].
pub trait ScaleOffset {
    fn scale_x(&self) -> f64;
    fn scale_y(&self) -> f64;
    fn scale_z(&self) -> f64;
    fn offset_x(&self) -> f64;
    fn offset_y(&self) -> f64;
    fn offset_z(&self) -> f64;
}

/// Scale and offset part of a LAS file header.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Scale factors for X, Y and Z.
    pub scale: [f64; 3],
    /// Offsets for X, Y and Z.
    pub offset: [f64; 3],
}

impl Header {
    /// Initialize and return a new header with the given scale and offset values.
    pub fn new(scale: [f64; 3], offset: [f64; 3]) -> Self {
        Self { scale, offset }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            scale: [0.01; 3],
            offset: [0.0; 3],
        }
    }
}

impl ScaleOffset for Header {
    fn scale_x(&self) -> f64 {
        self.scale[0]
    }

    fn scale_y(&self) -> f64 {
        self.scale[1]
    }

    fn scale_z(&self) -> f64 {
        self.scale[2]
    }

    fn offset_x(&self) -> f64 {
        self.offset[0]
    }

    fn offset_y(&self) -> f64 {
        self.offset[1]
    }

    fn offset_z(&self) -> f64 {
        self.offset[2]
    }
}

/// Applies scale and offset to a single axis value.
pub fn scale(value: f64, scale: f64, offset: f64) -> f64 {
    value * scale + offset
}

/// Reverts [`scale`] for a single axis value.
/// Stays in floating point, rounding to integers is left to the writer.
pub fn descale(value: f64, scale: f64, offset: f64) -> f64 {
    (value - offset) / scale
}
