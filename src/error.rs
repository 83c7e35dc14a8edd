//! Error types shared by every stage of the pipeline.

use thiserror::Error;

/// Failures reported by rewriting, interpretation and rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `advance_to` was asked to go backwards. Call `reset` first.
    #[error("cannot advance from generation {current} back to generation {target}; reset first")]
    Ordering { current: usize, target: usize },

    /// A `]` was interpreted while the save stack was empty.
    #[error("unbalanced ']' at symbol {index}: the save stack is empty")]
    StackUnderflow { index: usize },

    /// Bounds or a render were requested for a buffer with no segments.
    #[error("geometry is empty: the symbol sequence draws no segments")]
    EmptyGeometry,

    /// Wraps a failure with the generation it occurred in.
    #[error("generation {generation}: {source}")]
    AtGeneration {
        generation: usize,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Attaches generation context, unless it is already present.
    pub fn at_generation(self, generation: usize) -> Self {
        match self {
            Error::AtGeneration { .. } => self,
            other => Error::AtGeneration {
                generation,
                source: Box::new(other),
            },
        }
    }

    /// Returns the innermost error, stripping any generation context.
    pub fn root(&self) -> &Error {
        match self {
            Error::AtGeneration { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Problems found while loading a rule-definition text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A line matches none of the `angle`, `thickness`, rule or start forms.
    #[error("line {line}: unrecognised line {text:?}")]
    Syntax { line: usize, text: String },

    /// The `angle:` value is missing or not a finite number.
    #[error("line {line}: invalid angle {value:?}")]
    InvalidAngle { line: usize, value: String },

    /// The `thickness:` value is missing, negative or zero.
    #[error("line {line}: thickness must be a positive integer, got {value:?}")]
    InvalidThickness { line: usize, value: String },

    /// A rule rewrites more (or less) than one symbol.
    #[error("line {line}: rule left-hand side {lhs:?} must be exactly one symbol")]
    InvalidRule { line: usize, lhs: String },

    /// The text never names an axiom.
    #[error("no start line found")]
    MissingAxiom,
}

pub type Result<T> = std::result::Result<T, Error>;
