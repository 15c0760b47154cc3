//! `Display` for [`Angle`]: whole degrees, rounded to nearest.
//!
//! ```
//! use orient_core::Angle;
//!
//! assert_eq!(Angle::from_degrees(90).to_string(), "90°");
//! assert_eq!(Angle::from_degrees(-44.6).to_string(), "-45°");
//! ```

use super::Angle;
use std::fmt;

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.whole_degrees())
    }
}
