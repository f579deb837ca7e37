//! Graphical widgets for the signal visualizer. Sliders produce parameter
//! values and line charts display the datasets the core hands them. Nothing in
//! here knows how signals are generated.

mod chart;
mod chart_panel;
mod slider;
mod window;

pub use chart::*;
pub use chart_panel::*;
pub use rgb_int::Rgb24;
pub use sdl2::rect::Rect;
pub use slider::*;
pub use window::*;
