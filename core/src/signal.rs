use crate::parameter::Parameters;
use std::f64::consts::PI;

pub const DEFAULT_LENGTH: usize = 1000;
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
pub const DEFAULT_PHASE: f64 = 0.0;

/// Samples one unit of time of a sine wave at `length` evenly spaced points.
/// Sample `i` is `amplitude * sin(2π * frequency * (i / length) + phase)`, so
/// `length` controls the sample density but not the apparent period of the
/// wave. A `length` of 0 yields an empty vector.
pub fn generate(
    frequency: f64,
    amplitude: f64,
    phase: f64,
    length: usize,
) -> Vec<f64> {
    (0..length)
        .map(|i| {
            let t = i as f64 / length as f64;
            amplitude * ((2.0 * PI * frequency * t) + phase).sin()
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Binary,
    Baseband,
    Rf,
    If,
    Lo,
}

impl SignalKind {
    /// Display order.
    pub const ALL: [Self; 5] =
        [Self::Binary, Self::Baseband, Self::Rf, Self::If, Self::Lo];

    pub fn label(self) -> &'static str {
        match self {
            Self::Binary => "Binary Signal",
            Self::Baseband => "Baseband Signal",
            Self::Rf => "RF Signal",
            Self::If => "IF Signal",
            Self::Lo => "LO Signal",
        }
    }

    /// The frequency of this signal given the current parameters. The IF
    /// frequency is negative whenever gbps < lo, which is a valid argument to
    /// the generator.
    pub fn frequency(self, parameters: &Parameters) -> f64 {
        match self {
            Self::Binary => parameters.gbaud,
            Self::Baseband => parameters.gbps,
            Self::Rf => parameters.gbps + parameters.lo,
            Self::If => parameters.gbps - parameters.lo,
            Self::Lo => parameters.lo,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Binary => 0,
            Self::Baseband => 1,
            Self::Rf => 2,
            Self::If => 3,
            Self::Lo => 4,
        }
    }
}

/// All five derived signals, always computed together from a single set of
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Signals {
    samples: [Vec<f64>; 5],
}

impl Signals {
    pub fn from_parameters(parameters: &Parameters, length: usize) -> Self {
        Self {
            samples: SignalKind::ALL.map(|kind| {
                generate(
                    kind.frequency(parameters),
                    DEFAULT_AMPLITUDE,
                    DEFAULT_PHASE,
                    length,
                )
            }),
        }
    }

    pub fn get(&self, kind: SignalKind) -> &[f64] {
        &self.samples[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SignalKind, &[f64])> {
        SignalKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }

    /// The number of samples in each signal.
    pub fn len(&self) -> usize {
        self.samples[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
