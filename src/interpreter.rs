//! Interpreter that converts an L-System symbol sequence into a [`GeometryBuffer`].
//!
//! The entry point is [`TurtleInterpreter`]. Build it with the turn angle of the
//! system, then call [`TurtleInterpreter::run`] once per generation to be drawn.

use crate::error::{Error, Result};
use crate::geometry::{GeometryBuffer, Segment};
use crate::turtle::{TurtleOp, TurtleState};
use tracing::debug;

/// Interprets a symbol sequence with the fixed turtle alphabet.
#[derive(Clone, Debug)]
pub struct TurtleInterpreter {
    angle: f64,
}

impl TurtleInterpreter {
    /// Creates an interpreter turning by `angle` degrees on `+` and `-`.
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Interprets `symbols` from a fresh turtle and returns the segments it drew.
    ///
    /// The turtle starts at the origin facing `+X` with an empty save stack. Every `F`
    /// appends exactly one segment, in the order encountered; `f` moves without drawing.
    ///
    /// # Push / Pop
    ///
    /// `[` saves position and heading; `]` restores them. A `]` with nothing saved is
    /// reported as [`Error::StackUnderflow`] and the partial geometry is dropped.
    pub fn run(&self, symbols: &str) -> Result<GeometryBuffer> {
        let mut buffer = GeometryBuffer::new();
        let mut turtle = TurtleState::default();
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut deepest = 0;

        for (index, symbol) in symbols.chars().enumerate() {
            match TurtleOp::from_symbol(symbol, self.angle) {
                TurtleOp::Turn(degrees) => turtle.turn(degrees),
                TurtleOp::Move { draw } => {
                    let (from, to) = turtle.forward();
                    if draw {
                        buffer.push(Segment::new(from, to));
                    }
                }
                TurtleOp::Push => {
                    stack.push(turtle);
                    deepest = deepest.max(stack.len());
                }
                TurtleOp::Pop => {
                    turtle = stack.pop().ok_or(Error::StackUnderflow { index })?;
                }
                TurtleOp::NoOp => {}
            }
        }

        debug!(
            symbols = symbols.len(),
            segments = buffer.len(),
            deepest_branch = deepest,
            "interpretation pass complete"
        );
        Ok(buffer)
    }
}
