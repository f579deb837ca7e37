//! Core types for the signal visualizer. This crate knows nothing about windows
//! or pixels. It turns three frequency parameters into five sine-wave signals
//! and hands them to whatever implements [`Renderer`].

mod controller;
mod dataset;
mod parameter;
mod signal;

pub use controller::*;
pub use dataset::*;
pub use parameter::*;
pub use signal::*;
