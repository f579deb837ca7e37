use clap::Parser;
use signal_viz_core::{DEFAULT_LENGTH, Parameter, Parameters};

mod app;
mod layout;

#[derive(Parser)]
#[command(name = "signal_viz")]
#[command(
    about = "Plot signals derived from baud rate, bit rate and LO frequency"
)]
struct Args {
    #[arg(long, default_value = "Signal Visualizer")]
    title: String,
    #[arg(long, default_value_t = 960)]
    width: u32,
    #[arg(long, default_value_t = 1000)]
    height: u32,
    /// Number of samples plotted per signal
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    num_samples: usize,
    #[arg(long, default_value_t = 1)]
    line_width: u32,
    #[arg(long, default_value_t = 1.0)]
    gbaud: f64,
    #[arg(long, default_value_t = 1.0)]
    gbps: f64,
    #[arg(long, default_value_t = 1.0)]
    lo: f64,
}

/// Snaps a value from the command line onto the slider's range.
fn initial_value(parameter: Parameter, requested: f64) -> f64 {
    let value = parameter.range().quantize(requested);
    if (value - requested).abs() > 1e-9 {
        log::warn!(
            "Initial {} of {} is not a slider position; using {} instead",
            parameter.label(),
            requested,
            value
        );
    }
    value
}

impl Args {
    fn initial_parameters(&self) -> Parameters {
        Parameters {
            gbaud: initial_value(Parameter::Gbaud, self.gbaud),
            gbps: initial_value(Parameter::Gbps, self.gbps),
            lo: initial_value(Parameter::Lo, self.lo),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let initial_parameters = args.initial_parameters();
    log::info!(
        "Starting with gbaud={} gbps={} lo={} ({} samples per signal)",
        initial_parameters.gbaud,
        initial_parameters.gbps,
        initial_parameters.lo,
        args.num_samples
    );
    let mut app = app::App::new(app::Config {
        title: args.title,
        width_px: args.width,
        height_px: args.height,
        num_samples: args.num_samples,
        line_width: args.line_width,
        initial_parameters,
    })?;
    app.run()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_match_slider_initial_values() {
        let args = Args::parse_from(["signal_viz"]);
        assert_eq!(args.initial_parameters(), Parameters::default());
        assert_eq!(args.num_samples, 1000);
    }

    #[test]
    fn out_of_range_initial_values_are_clamped() {
        let args =
            Args::parse_from(["signal_viz", "--gbaud", "0.2", "--lo", "12"]);
        let parameters = args.initial_parameters();
        assert_eq!(parameters.gbaud, 1.0);
        assert_eq!(parameters.gbps, 1.0);
        assert_eq!(parameters.lo, 10.0);
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
