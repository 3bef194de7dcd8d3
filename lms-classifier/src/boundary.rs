use crate::error::{LmsError, Result};

/// Score threshold between the two target encodings.
pub const THRESHOLD: f64 = 0.5;

/// The line `w0*x0 + w1*x1 + w2 = 0.5` of a 2-D linear classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionBoundary {
    w0: f64,
    w1: f64,
    bias: f64,
}

impl DecisionBoundary {
    /// Expects `[w0, w1, bias]`.
    pub fn from_weights(weights: &[f64]) -> Result<Self> {
        match *weights {
            [w0, w1, bias] => Ok(Self { w0, w1, bias }),
            _ => Err(LmsError::mismatch("boundary weights", 3, weights.len())),
        }
    }

    /// `x1` on the boundary at `x0`. Non-finite when the line is vertical.
    pub fn x1_at(&self, x0: f64) -> f64 {
        (THRESHOLD - self.w0 * x0 - self.bias) / self.w1
    }

    /// Slope `dx1/dx0` of a non-vertical boundary.
    pub fn slope(&self) -> f64 {
        -self.w0 / self.w1
    }

    pub fn intercept(&self) -> f64 {
        self.x1_at(0.0)
    }

    pub fn is_vertical(&self) -> bool {
        self.w1 == 0.0
    }

    /// `x0` of a vertical boundary, `None` if the line is not vertical or
    /// the weights do not define a line at all.
    pub fn vertical_x0(&self) -> Option<f64> {
        if self.is_vertical() && self.w0 != 0.0 {
            Some((THRESHOLD - self.bias) / self.w0)
        } else {
            None
        }
    }
}
