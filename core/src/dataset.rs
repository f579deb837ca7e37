use crate::signal::SignalKind;
use std::ops::Range;

/// A labelled series of samples ready for plotting. The x value of each sample
/// is its index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dataset<'a> {
    pub kind: SignalKind,
    pub y_values: &'a [f64],
}

impl<'a> Dataset<'a> {
    pub fn new(kind: SignalKind, y_values: &'a [f64]) -> Self {
        Self { kind, y_values }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn len(&self) -> usize {
        self.y_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_values.is_empty()
    }

    pub fn x_values(&self) -> Range<usize> {
        0..self.y_values.len()
    }

    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> {
        self.y_values.iter().copied().enumerate()
    }
}

/// Something that displays datasets. The controller calls `render` once per
/// signal after every recompute, always with all five signals derived from the
/// same parameters.
pub trait Renderer {
    fn render(&mut self, dataset: &Dataset<'_>);
}
