use crate::{ConvError, Shape};

/// Names of the parameters in the order they are given.
pub const INPUT_NAMES: [&str; 8] = ["c_in", "h_in", "w_in", "n_filt", "h_filt", "w_filt", "s", "p"];

/// Names of the results as they are printed, in order.
pub const OUTPUT_NAMES: [&str; 6] = ["c_out", "h_out", "w_out", "adds", "muls", "divs"];

/// A single 2D convolution layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvolutionDescription {
    pub input_channels: f64,
    pub input_shape: Shape,
    pub filters: f64,
    pub filter_shape: Shape,
    pub stride: f64,
    /// Applied to every side of the input.
    pub padding: f64,
}

/// Output extent and arithmetic cost of a [`ConvolutionDescription`].
///
/// Sizes are kept exactly as computed, fractional when the stride does not
/// divide the padded input evenly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvolutionOps {
    pub output_channels: f64,
    pub output_shape: Shape,
    pub adds: f64,
    pub muls: f64,
    pub divs: f64,
}

impl ConvolutionDescription {
    pub fn new(
        input_channels: f64,
        input_shape: Shape,
        filters: f64,
        filter_shape: Shape,
        stride: f64,
        padding: f64,
    ) -> Self {
        Self { input_channels, input_shape, filters, filter_shape, stride, padding }
    }

    /// Builds from `c_in h_in w_in n_filt h_filt w_filt s p`.
    pub fn from_args(args: [f64; 8]) -> Self {
        let [c_in, h_in, w_in, n_filt, h_filt, w_filt, s, p] = args;
        Self::new(c_in, Shape::new(h_in, w_in), n_filt, Shape::new(h_filt, w_filt), s, p)
    }

    pub fn output_shape(&self) -> Result<Shape, ConvError> {
        if self.stride == 0.0 {
            return Err(ConvError::ZeroStride);
        }

        let hout = (self.input_shape.height() + 2.0 * self.padding - self.filter_shape.height()) / self.stride + 1.0;
        let wout = (self.input_shape.width() + 2.0 * self.padding - self.filter_shape.width()) / self.stride + 1.0;

        Ok(Shape::new(hout, wout))
    }

    pub fn ops(&self) -> Result<ConvolutionOps, ConvError> {
        let output_shape = self.output_shape()?;

        let adds = self.filters
            * output_shape.height()
            * output_shape.width()
            * self.input_channels
            * self.filter_shape.height()
            * self.filter_shape.width();

        log::trace!("{} -> {output_shape} with {} filters of {}", self.input_shape, self.filters, self.filter_shape);

        Ok(ConvolutionOps { output_channels: self.input_channels, output_shape, adds, muls: adds, divs: 0.0 })
    }
}

impl ConvolutionOps {
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.output_channels,
            self.output_shape.height(),
            self.output_shape.width(),
            self.adds,
            self.muls,
            self.divs,
        ]
    }

    /// Every result truncated toward zero, one integer per line.
    ///
    /// Fails without producing any line if a single result is not finite.
    pub fn to_lines(&self) -> Result<[String; 6], ConvError> {
        let values = self.as_array();
        let mut lines: [String; 6] = Default::default();

        for ((line, value), name) in lines.iter_mut().zip(values).zip(OUTPUT_NAMES) {
            *line = truncate(name, value)?;
        }

        Ok(lines)
    }
}

fn truncate(name: &'static str, value: f64) -> Result<String, ConvError> {
    if !value.is_finite() {
        return Err(ConvError::NonFinite { name, value });
    }

    // adding zero drops the sign of -0.0
    let int = value.trunc() + 0.0;
    Ok(format!("{int:.0}"))
}
