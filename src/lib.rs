//! Point records of the ASPRS LAS format.
//!
//! A [`Point`] holds one sample of a LIDAR point cloud: coordinates in stored space,
//! intensity, the bit-packed return and scan flags, classification and further metadata.
//! Reading and writing LAS files is not part of this crate, the records are meant
//! to be filled by a reader and handed over to a writer.
//!
//! ```
//! use laspoint::{Header, Point};
//!
//! let header = Header::new([0.01; 3], [100.0, 200.0, 300.0]);
//! let mut point = Point::new();
//! point.set_scaled_coordinates(&header, 1.0, 2.0, 3.0);
//! point.set_return_number(1);
//! point.set_number_of_returns(2);
//! point.set_classification(2_u8);
//! assert!(point.validate().is_ok());
//! ```

#![forbid(unsafe_code)]

mod classification;
mod error;
pub mod flags;
mod header;
mod point;
mod validation;

pub use self::classification::Classification;
pub use self::error::Error;
pub use self::error::Result;
pub use self::flags::ScanFlags;
pub use self::header::{descale, scale, Header, ScaleOffset};
pub use self::point::{Color, Point, COORDINATE_TOLERANCE};
pub use self::validation::{Violations, SCAN_ANGLE_RANK_MAX, SCAN_ANGLE_RANK_MIN};
