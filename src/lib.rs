//! Duotone color grading, one pixel at a time.
//!
//! Each pixel's Rec. 601 luma picks a point between a dark and a light tone.
//! The tone is shaded by that luma and blended over the source by `strength`.
//! Pixels are independent: share one [`ToneConfig`] by reference and call
//! [`apply`] from as many threads as the host likes.
//!
//! ```
//! use duotone::{apply, Color4, ToneConfig};
//! use image::Rgba;
//!
//! let cfg = ToneConfig::new(Color4(0.0, 0.0, 0.0, 255.0), Color4(255.0, 255.0, 255.0, 255.0), 1.0);
//! assert_eq!(apply(Rgba([128, 128, 128, 255]), &cfg), Rgba([64, 64, 64, 128]));
//! ```

pub mod algebra;
pub mod color;
pub mod config;
pub mod error;
pub mod gpu;
pub mod tonemap;

pub use algebra::Color4;
pub use error::{DuotoneError, Result};
pub use tonemap::{apply, ToneConfig};
