/// The set of values a parameter may take, as presented by a range input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub initial: f64,
}

/// Range shared by all three frequency parameters.
pub const FREQUENCY_RANGE: ParameterRange = ParameterRange {
    min: 1.0,
    max: 10.0,
    step: 0.1,
    initial: 1.0,
};

impl ParameterRange {
    /// The number of step increments between `min` and `max`.
    pub fn num_steps(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize
    }

    /// Clamps `value` into the range and snaps it to the nearest step counted
    /// from `min`.
    pub fn quantize(&self, value: f64) -> f64 {
        let index = ((value - self.min) / self.step)
            .round()
            .clamp(0.0, self.num_steps() as f64);
        (self.min + (index * self.step)).min(self.max)
    }

    pub fn value_from_01(&self, value_01: f64) -> f64 {
        self.min + (value_01.clamp(0.0, 1.0) * (self.max - self.min))
    }

    pub fn value_to_01(&self, value: f64) -> f64 {
        let width = self.max - self.min;
        if width <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / width).clamp(0.0, 1.0)
    }

    /// Moves `value` by `num_steps` steps (negative moves down) and quantizes
    /// the result.
    pub fn step_by(&self, value: f64, num_steps: i32) -> f64 {
        self.quantize(value + (num_steps as f64 * self.step))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Gbaud,
    Gbps,
    Lo,
}

impl Parameter {
    pub const ALL: [Self; 3] = [Self::Gbaud, Self::Gbps, Self::Lo];

    pub fn label(self) -> &'static str {
        match self {
            Self::Gbaud => "Gbaud",
            Self::Gbps => "Gbps",
            Self::Lo => "LO",
        }
    }

    pub fn range(self) -> ParameterRange {
        FREQUENCY_RANGE
    }
}

/// The three scalars the visualizer is driven by. Values are not validated
/// here; the range input producing them is responsible for keeping them inside
/// [`FREQUENCY_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub gbaud: f64,
    pub gbps: f64,
    pub lo: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gbaud: Parameter::Gbaud.range().initial,
            gbps: Parameter::Gbps.range().initial,
            lo: Parameter::Lo.range().initial,
        }
    }
}

impl Parameters {
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Gbaud => self.gbaud,
            Parameter::Gbps => self.gbps,
            Parameter::Lo => self.lo,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: f64) {
        match parameter {
            Parameter::Gbaud => self.gbaud = value,
            Parameter::Gbps => self.gbps = value,
            Parameter::Lo => self.lo = value,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn frequency_range_has_ninety_steps() {
        assert_eq!(FREQUENCY_RANGE.num_steps(), 90);
    }

    #[test]
    fn quantize_clamps_to_range() {
        assert_eq!(FREQUENCY_RANGE.quantize(0.0), 1.0);
        assert_eq!(FREQUENCY_RANGE.quantize(-3.5), 1.0);
        assert_eq!(FREQUENCY_RANGE.quantize(42.0), 10.0);
    }

    #[test]
    fn quantize_snaps_to_nearest_step() {
        assert!(close(FREQUENCY_RANGE.quantize(3.04), 3.0));
        assert!(close(FREQUENCY_RANGE.quantize(3.06), 3.1));
        assert!(close(FREQUENCY_RANGE.quantize(9.98), 10.0));
    }

    #[test]
    fn unit_interval_mapping() {
        assert_eq!(FREQUENCY_RANGE.value_from_01(0.0), 1.0);
        assert_eq!(FREQUENCY_RANGE.value_from_01(1.0), 10.0);
        assert_eq!(FREQUENCY_RANGE.value_from_01(2.0), 10.0);
        assert_eq!(FREQUENCY_RANGE.value_to_01(5.5), 0.5);
        assert_eq!(FREQUENCY_RANGE.value_to_01(0.0), 0.0);
    }

    #[test]
    fn step_by_stops_at_extremes() {
        assert_eq!(FREQUENCY_RANGE.step_by(1.0, -1), 1.0);
        assert_eq!(FREQUENCY_RANGE.step_by(10.0, 1), 10.0);
        assert!(close(FREQUENCY_RANGE.step_by(1.0, 1), 1.1));
        assert!(close(FREQUENCY_RANGE.step_by(5.0, -5), 4.5));
    }

    #[test]
    fn default_parameters_are_initial_values() {
        let parameters = Parameters::default();
        for parameter in Parameter::ALL {
            assert_eq!(parameters.get(parameter), 1.0);
        }
    }

    #[test]
    fn set_only_touches_one_parameter() {
        let mut parameters = Parameters::default();
        parameters.set(Parameter::Gbps, 3.0);
        assert_eq!(parameters.gbaud, 1.0);
        assert_eq!(parameters.gbps, 3.0);
        assert_eq!(parameters.lo, 1.0);
    }
}
