//! Turtle state and the instruction set it understands.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Snapshots are plain values: pushing copies them, popping moves them back.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the pen.
    pub position: DVec2,

    /// Current heading in radians, measured from the +X axis.
    /// Never normalised; `cos`/`sin` consume it directly.
    pub heading: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    /// Unit vector pointing along the current heading.
    pub fn direction(&self) -> DVec2 {
        DVec2::new(self.heading.cos(), self.heading.sin())
    }

    /// Turns by `degrees`; positive values turn counter-clockwise.
    pub fn turn(&mut self, degrees: f64) {
        self.heading += degrees.to_radians();
    }

    /// Moves one unit forward and returns the `(from, to)` positions.
    pub fn forward(&mut self) -> (DVec2, DVec2) {
        let from = self.position;
        self.position = from + self.direction();
        (from, self.position)
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Rotate by the given number of degrees (`+` / `-`).
    Turn(f64),
    /// Step one unit forward, drawing a segment when `draw` is set (`F` / `f`).
    Move { draw: bool },
    /// Save the turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// Symbol has no drawing meaning; it only matters to the grammar.
    NoOp,
}

impl TurtleOp {
    /// Decodes `symbol` using the fixed turtle alphabet, turning by `angle` degrees.
    pub fn from_symbol(symbol: char, angle: f64) -> Self {
        match symbol {
            '+' => TurtleOp::Turn(-angle),
            '-' => TurtleOp::Turn(angle),
            'F' => TurtleOp::Move { draw: true },
            'f' => TurtleOp::Move { draw: false },
            '[' => TurtleOp::Push,
            ']' => TurtleOp::Pop,
            _ => TurtleOp::NoOp,
        }
    }
}
