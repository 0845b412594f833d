//! Output shape and arithmetic cost of a single 2D convolution layer.
//!
//! ```
//! use conv_ops::{ConvolutionDescription, Shape};
//!
//! let desc = ConvolutionDescription::new(3.0, Shape::new(32.0, 32.0), 16.0, Shape::new(3.0, 3.0), 1.0, 1.0);
//! let ops = desc.ops().unwrap();
//!
//! assert_eq!(ops.output_shape, Shape::new(32.0, 32.0));
//! assert_eq!(ops.adds, 442_368.0);
//! ```

mod conv;
mod error;
pub mod logger;
mod shape;

pub use conv::{ConvolutionDescription, ConvolutionOps, INPUT_NAMES, OUTPUT_NAMES};
pub use error::ConvError;
pub use shape::Shape;
