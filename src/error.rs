use std::{error::Error, fmt};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConvError {
    /// Output sizes divide by the stride.
    ZeroStride,
    /// A result has no integer representation.
    NonFinite { name: &'static str, value: f64 },
}

impl fmt::Display for ConvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStride => write!(f, "stride must be nonzero"),
            Self::NonFinite { name, value } => write!(f, "{name} is not finite ({value})"),
        }
    }
}

impl Error for ConvError {}
