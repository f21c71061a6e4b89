//! Operation and pipeline configuration
//!
//! An [`Operation`] names one transform and its parameters. The text form is
//! `name` or `name:param`, case-insensitive:
//!
//! | Text | Operation |
//! |---|---|
//! | `weighted-grayscale` | [`rgbkit_color::weighted_grayscale`] |
//! | `grayscale` | [`rgbkit_color::grayscale`] |
//! | `solarize[:T]` | [`rgbkit_color::solarize`], default T = 128 |
//! | `three-band` | [`rgbkit_color::three_band_grayscale`] |
//! | `extreme-contrast` | [`rgbkit_color::extreme_contrast`] |
//! | `sepia` | [`rgbkit_color::sepia_tint`] |
//! | `negative` | [`rgbkit_color::negative`] |
//! | `blur` | [`rgbkit_filter::blur`] |
//! | `edges[:T]` | [`rgbkit_filter::detect_edges`], default T = 10 |
//!
//! A [`Pipeline`] is a comma-separated list applied left to right.

use rgbkit_core::Grid;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Default solarize threshold
pub const DEFAULT_SOLARIZE_THRESHOLD: u16 = 128;
/// Default edge detection threshold
pub const DEFAULT_EDGE_THRESHOLD: f64 = 10.0;

/// Errors from parsing operation text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseOperationError {
    /// Unknown operation name
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// Parameter given to an operation that takes none
    #[error("operation '{0}' takes no parameter")]
    UnexpectedParameter(String),

    /// Parameter could not be parsed
    #[error("invalid parameter '{value}' for '{operation}': {reason}")]
    InvalidParameter {
        operation: String,
        value: String,
        reason: String,
    },

    /// Empty pipeline entry
    #[error("empty operation")]
    Empty,
}

/// A single configured transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    WeightedGrayscale,
    Grayscale,
    Solarize { threshold: u16 },
    ThreeBand,
    ExtremeContrast,
    Sepia,
    Negative,
    Blur,
    DetectEdges { threshold: f64 },
}

impl Operation {
    /// Canonical names of every operation, in table order.
    pub const NAMES: [&'static str; 9] = [
        "weighted-grayscale",
        "grayscale",
        "solarize",
        "three-band",
        "extreme-contrast",
        "sepia",
        "negative",
        "blur",
        "edges",
    ];

    /// Canonical name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WeightedGrayscale => "weighted-grayscale",
            Self::Grayscale => "grayscale",
            Self::Solarize { .. } => "solarize",
            Self::ThreeBand => "three-band",
            Self::ExtremeContrast => "extreme-contrast",
            Self::Sepia => "sepia",
            Self::Negative => "negative",
            Self::Blur => "blur",
            Self::DetectEdges { .. } => "edges",
        }
    }

    /// Apply the operation, consuming the grid and returning the result.
    ///
    /// Point transforms and edge detection rewrite the grid in place;
    /// blur returns a new grid and drops the input.
    pub fn apply(&self, mut grid: Grid) -> Grid {
        debug!(operation = %self, width = grid.width(), height = grid.height(), "Applying operation");
        match *self {
            Self::WeightedGrayscale => rgbkit_color::weighted_grayscale(&mut grid),
            Self::Grayscale => rgbkit_color::grayscale(&mut grid),
            Self::Solarize { threshold } => rgbkit_color::solarize(&mut grid, threshold),
            Self::ThreeBand => rgbkit_color::three_band_grayscale(&mut grid),
            Self::ExtremeContrast => rgbkit_color::extreme_contrast(&mut grid),
            Self::Sepia => rgbkit_color::sepia_tint(&mut grid),
            Self::Negative => rgbkit_color::negative(&mut grid),
            Self::Blur => return rgbkit_filter::blur(&grid),
            Self::DetectEdges { threshold } => rgbkit_filter::detect_edges(&mut grid, threshold),
        }
        grid
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solarize { threshold } => write!(f, "solarize:{threshold}"),
            Self::DetectEdges { threshold } => write!(f, "edges:{threshold}"),
            other => f.write_str(other.name()),
        }
    }
}

fn parse_param<T: FromStr>(operation: &str, value: &str) -> Result<T, ParseOperationError>
where
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ParseOperationError::InvalidParameter {
            operation: operation.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseOperationError::Empty);
        }
        let (name, param) = match s.split_once(':') {
            Some((name, param)) => (name.trim().to_lowercase(), Some(param)),
            None => (s.to_lowercase(), None),
        };

        let no_param = |op: Operation| match param {
            Some(_) => Err(ParseOperationError::UnexpectedParameter(name.clone())),
            None => Ok(op),
        };

        match name.as_str() {
            "weighted-grayscale" => no_param(Self::WeightedGrayscale),
            "grayscale" => no_param(Self::Grayscale),
            "three-band" => no_param(Self::ThreeBand),
            "extreme-contrast" => no_param(Self::ExtremeContrast),
            "sepia" => no_param(Self::Sepia),
            "negative" => no_param(Self::Negative),
            "blur" => no_param(Self::Blur),
            "solarize" => {
                let threshold = match param {
                    Some(p) => parse_param(&name, p)?,
                    None => DEFAULT_SOLARIZE_THRESHOLD,
                };
                Ok(Self::Solarize { threshold })
            }
            "edges" => {
                let threshold = match param {
                    Some(p) => parse_param(&name, p)?,
                    None => DEFAULT_EDGE_THRESHOLD,
                };
                Ok(Self::DetectEdges { threshold })
            }
            _ => Err(ParseOperationError::UnknownOperation(name.clone())),
        }
    }
}

/// An ordered list of operations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pipeline {
    ops: Vec<Operation>,
}

impl Pipeline {
    /// Create a pipeline from operations.
    pub fn new(ops: Vec<Operation>) -> Self {
        Self { ops }
    }

    /// Append an operation.
    pub fn push(&mut self, op: Operation) {
        self.ops.push(op);
    }

    /// The operations in application order.
    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    /// Apply every operation in order.
    pub fn apply(&self, grid: Grid) -> Grid {
        self.ops.iter().fold(grid, |grid, op| op.apply(grid))
    }
}

impl FromStr for Pipeline {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let ops = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<Operation>, _>>()?;
        Ok(Self { ops })
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}
