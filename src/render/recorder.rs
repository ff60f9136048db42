use crate::geometry::{Dimension, Point};

use super::{DrawingSurface, SurfaceStyle};

/// A primitive call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
    Fill,
    Stroke,
}

/// Headless surface that records every primitive call in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    dimension: Dimension,
    style: SurfaceStyle,
    commands: Vec<PathCommand>,
}

impl RecordingSurface {
    /// Creates an empty recorder with fill and stroke enabled.
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            style: SurfaceStyle::default(),
            commands: Vec::new(),
        }
    }

    /// Returns the recorder with different fill/stroke flags.
    #[must_use]
    pub fn with_style(mut self, style: SurfaceStyle) -> Self {
        self.style = style;
        self
    }

    /// Changes the fill/stroke flags for subsequent draws.
    pub fn set_style(&mut self, style: SurfaceStyle) {
        self.style = style;
    }

    /// Returns every command recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Removes and returns the recorded commands.
    pub fn take_commands(&mut self) -> Vec<PathCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Groups recorded points into subpaths, each starting at a `MoveTo`.
    #[must_use]
    pub fn subpaths(&self) -> Vec<Vec<Point>> {
        let mut subpaths: Vec<Vec<Point>> = Vec::new();
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(p) => subpaths.push(vec![*p]),
                PathCommand::LineTo(p) => match subpaths.last_mut() {
                    Some(current) => current.push(*p),
                    None => subpaths.push(vec![*p]),
                },
                PathCommand::BeginPath
                | PathCommand::ClosePath
                | PathCommand::Fill
                | PathCommand::Stroke => {}
            }
        }
        subpaths
    }
}

impl DrawingSurface for RecordingSurface {
    fn dimensions(&self) -> usize {
        self.dimension.count()
    }

    fn style(&self) -> SurfaceStyle {
        self.style
    }

    fn begin_path(&mut self) {
        self.commands.push(PathCommand::BeginPath);
    }

    fn move_to(&mut self, point: &Point) {
        self.commands.push(PathCommand::MoveTo(*point));
    }

    fn line_to(&mut self, point: &Point) {
        self.commands.push(PathCommand::LineTo(*point));
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.commands.push(PathCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(PathCommand::Stroke);
    }
}
