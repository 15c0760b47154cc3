//! Angle value type.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Angle`] | radian newtype with epsilon-tolerant equality and ordering |
//! | [`reduce_two_pi`], [`wrap_pm_pi`] | floor-based reduction |
//! | [`rad`], [`deg`] | short constructors |
//!
//! Arithmetic lives in `ops`, `Display` in `format`, and the optional serde
//! impls (bare radian number) in `serde_`.

mod core;
mod format;
mod normalize;
mod ops;
#[cfg(feature = "serde")]
mod serde_;

pub use self::core::{deg, rad, Angle};
pub use normalize::{reduce_two_pi, wrap_pm_pi};
