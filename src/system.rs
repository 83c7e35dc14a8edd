//! The [`LSystem`] facade: rewrite, interpret and render in one place.

use crate::config::Configuration;
use crate::error::Result;
use crate::geometry::GeometryBuffer;
use crate::interpreter::TurtleInterpreter;
use crate::raster::{Canvas, RasterConfig, Rasterizer};
use crate::rewrite::{RewriteEngine, SimulationState};
use tracing::info;

/// A running L-System.
///
/// The symbol sequence is cumulative: stepping forward reuses the previous
/// generation. Geometry is not; every [`geometry`](Self::geometry) or
/// [`render`](Self::render) call interprets the current generation from scratch.
#[derive(Clone, Debug)]
pub struct LSystem {
    engine: RewriteEngine,
    state: SimulationState,
    interpreter: TurtleInterpreter,
    rasterizer: Rasterizer,
    thickness: u32,
}

impl LSystem {
    pub fn new(config: Configuration) -> Self {
        let engine = RewriteEngine::new(config.axiom.clone(), config.rule_table());
        let state = engine.initial_state();
        Self {
            engine,
            state,
            interpreter: TurtleInterpreter::new(config.angle),
            rasterizer: Rasterizer::default(),
            thickness: config.thickness,
        }
    }

    pub fn with_raster_config(mut self, config: RasterConfig) -> Self {
        self.rasterizer = Rasterizer::new(config);
        self
    }

    pub fn generation(&self) -> usize {
        self.state.generation()
    }

    /// The symbol sequence of the current generation.
    pub fn symbols(&self) -> &str {
        self.state.current()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Advances `iterations` generations.
    pub fn step(&mut self, iterations: usize) {
        self.engine.advance(&mut self.state, iterations);
    }

    /// Advances to generation `target`. Going backwards requires [`reset`](Self::reset).
    pub fn step_to(&mut self, target: usize) -> Result<()> {
        self.engine.advance_to(&mut self.state, target)
    }

    /// Returns to the axiom at generation 0.
    pub fn reset(&mut self) {
        self.engine.reset(&mut self.state);
    }

    /// Interprets the current generation into fresh geometry.
    pub fn geometry(&self) -> Result<GeometryBuffer> {
        self.interpreter
            .run(self.state.current())
            .map_err(|e| e.at_generation(self.generation()))
    }

    /// Renders the current generation.
    pub fn render(&self) -> Result<Canvas> {
        let geometry = self.geometry()?;
        self.rasterizer
            .render(&geometry, self.thickness)
            .map_err(|e| e.at_generation(self.generation()))
    }

    /// Advances to `target` and renders it.
    pub fn render_generation(&mut self, target: usize) -> Result<Canvas> {
        info!(from = self.generation(), to = target, "advancing simulation");
        self.step_to(target).map_err(|e| e.at_generation(target))?;
        info!(generation = target, symbols = self.symbols().len(), "rendering");
        self.render()
    }
}
