use crate::{
    dataset::{Dataset, Renderer},
    parameter::{Parameter, Parameters},
    signal::{DEFAULT_LENGTH, Signals},
};

/// Owns the parameters and the signals derived from them. Every parameter
/// change recomputes all signals from scratch and then passes each of them to
/// the renderer, so the renderer never sees a mix of signals from old and new
/// parameters.
pub struct ViewController<R: Renderer> {
    parameters: Parameters,
    length: usize,
    signals: Signals,
    renderer: R,
}

impl<R: Renderer> ViewController<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_parameters(renderer, Parameters::default(), DEFAULT_LENGTH)
    }

    pub fn with_parameters(
        renderer: R,
        parameters: Parameters,
        length: usize,
    ) -> Self {
        let mut s = Self {
            parameters,
            length,
            signals: Signals::from_parameters(&parameters, length),
            renderer,
        };
        s.render();
        s
    }

    pub fn on_gbaud_change(&mut self, value: f64) {
        self.on_change(Parameter::Gbaud, value);
    }

    pub fn on_gbps_change(&mut self, value: f64) {
        self.on_change(Parameter::Gbps, value);
    }

    pub fn on_lo_change(&mut self, value: f64) {
        self.on_change(Parameter::Lo, value);
    }

    pub fn on_change(&mut self, parameter: Parameter, value: f64) {
        self.parameters.set(parameter, value);
        self.recompute();
    }

    fn recompute(&mut self) {
        log::debug!(
            "recomputing signals (gbaud={}, gbps={}, lo={}, length={})",
            self.parameters.gbaud,
            self.parameters.gbps,
            self.parameters.lo,
            self.length,
        );
        self.signals = Signals::from_parameters(&self.parameters, self.length);
        self.render();
    }

    fn render(&mut self) {
        for (kind, y_values) in self.signals.iter() {
            self.renderer.render(&Dataset::new(kind, y_values));
        }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn signals(&self) -> &Signals {
        &self.signals
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::signal::{SignalKind, generate};

    #[derive(Default)]
    struct Recorder {
        rendered: Vec<(SignalKind, Vec<f64>)>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, dataset: &Dataset<'_>) {
            self.rendered.push((dataset.kind, dataset.y_values.to_vec()));
        }
    }

    impl Recorder {
        fn last(&self, kind: SignalKind) -> &[f64] {
            self.rendered
                .iter()
                .rev()
                .find(|(k, _)| *k == kind)
                .map(|(_, y)| y.as_slice())
                .unwrap()
        }
    }

    #[test]
    fn renders_all_signals_on_creation() {
        let controller = ViewController::new(Recorder::default());
        let kinds = controller
            .renderer()
            .rendered
            .iter()
            .map(|(kind, _)| *kind)
            .collect::<Vec<_>>();
        assert_eq!(kinds, SignalKind::ALL.to_vec());
        assert_eq!(*controller.parameters(), Parameters::default());
    }

    #[test]
    fn initial_state() {
        let controller = ViewController::new(Recorder::default());
        let recorder = controller.renderer();
        let unit = generate(1.0, 1.0, 0.0, 1000);
        assert_eq!(recorder.last(SignalKind::Binary), unit.as_slice());
        assert_eq!(recorder.last(SignalKind::Baseband), unit.as_slice());
        assert_eq!(recorder.last(SignalKind::Lo), unit.as_slice());
        assert_eq!(
            recorder.last(SignalKind::Rf),
            generate(2.0, 1.0, 0.0, 1000).as_slice()
        );
        assert_eq!(
            recorder.last(SignalKind::If),
            generate(0.0, 1.0, 0.0, 1000).as_slice()
        );
        assert!(recorder.last(SignalKind::If).iter().all(|&s| s == 0.0));
    }

    #[test]
    fn gbps_change_updates_mixed_signals_only() {
        let mut controller = ViewController::new(Recorder::default());
        let binary_before =
            controller.signals().get(SignalKind::Binary).to_vec();
        let lo_before = controller.signals().get(SignalKind::Lo).to_vec();
        controller.on_gbps_change(3.0);
        let recorder = controller.renderer();
        assert_eq!(recorder.last(SignalKind::Binary), binary_before.as_slice());
        assert_eq!(recorder.last(SignalKind::Lo), lo_before.as_slice());
        assert_eq!(
            recorder.last(SignalKind::Baseband),
            generate(3.0, 1.0, 0.0, 1000).as_slice()
        );
        assert_eq!(
            recorder.last(SignalKind::Rf),
            generate(4.0, 1.0, 0.0, 1000).as_slice()
        );
        assert_eq!(
            recorder.last(SignalKind::If),
            generate(2.0, 1.0, 0.0, 1000).as_slice()
        );
    }

    #[test]
    fn every_change_rerenders_every_signal() {
        let mut controller = ViewController::new(Recorder::default());
        controller.on_gbaud_change(2.5);
        controller.on_lo_change(4.0);
        let rendered = &controller.renderer().rendered;
        assert_eq!(rendered.len(), 15);
        for batch in rendered.chunks(5) {
            let kinds = batch.iter().map(|(kind, _)| *kind).collect::<Vec<_>>();
            assert_eq!(kinds, SignalKind::ALL.to_vec());
        }
    }

    #[test]
    fn displayed_signals_match_current_parameters() {
        let mut controller = ViewController::new(Recorder::default());
        controller.on_gbaud_change(7.1);
        controller.on_gbps_change(2.0);
        controller.on_lo_change(6.5);
        let expected =
            Signals::from_parameters(controller.parameters(), DEFAULT_LENGTH);
        assert_eq!(controller.signals(), &expected);
        for (kind, y_values) in expected.iter() {
            assert_eq!(controller.renderer().last(kind), y_values);
        }
    }

    #[test]
    fn negative_if_frequency_is_accepted() {
        let mut controller = ViewController::new(Recorder::default());
        controller.on_lo_change(5.0);
        assert_eq!(
            controller.signals().get(SignalKind::If),
            generate(-4.0, 1.0, 0.0, 1000).as_slice()
        );
    }

    #[test]
    fn custom_length() {
        let controller = ViewController::with_parameters(
            Recorder::default(),
            Parameters::default(),
            16,
        );
        assert_eq!(controller.length(), 16);
        assert!(
            controller
                .renderer()
                .rendered
                .iter()
                .all(|(_, y)| y.len() == 16)
        );
    }

    #[test]
    fn slider_extremes_are_bounded() {
        for &value in &[1.0, 10.0] {
            let mut controller = ViewController::new(Recorder::default());
            for parameter in Parameter::ALL {
                controller.on_change(parameter, value);
            }
            for (_, y_values) in controller.signals().iter() {
                assert!(
                    y_values
                        .iter()
                        .all(|s| s.is_finite() && (-1.0..=1.0).contains(s))
                );
            }
        }
    }
}
