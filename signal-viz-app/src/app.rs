use crate::layout::{CHART_SPACING_PX, Layout};
use signal_viz_core::{Parameter, Parameters, ViewController};
use signal_viz_widgets::{ChartConfig, ChartPanel, Rgb24, Slider, Window};

const BACKGROUND: Rgb24 = Rgb24 { r: 0, g: 0, b: 0 };
const HEADING_COLOUR: Rgb24 = Rgb24 {
    r: 255,
    g: 255,
    b: 255,
};

pub struct Config {
    pub title: String,
    pub width_px: u32,
    pub height_px: u32,
    pub num_samples: usize,
    pub line_width: u32,
    pub initial_parameters: Parameters,
}

pub struct App {
    window: Window,
    heading: String,
    layout: Layout,
    sliders: Vec<Slider>,
    controller: ViewController<ChartPanel>,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let window = Window::new(
            config.title.as_str(),
            config.width_px,
            config.height_px,
        )?;
        let layout = Layout::new(config.width_px, config.height_px);
        let sliders = Parameter::ALL
            .into_iter()
            .zip(layout.sliders)
            .map(|(parameter, rect)| {
                Slider::new(
                    parameter,
                    config.initial_parameters.get(parameter),
                    rect,
                )
            })
            .collect();
        let chart_config = ChartConfig {
            border_width: config.line_width,
            ..ChartConfig::default()
        };
        let controller = ViewController::with_parameters(
            ChartPanel::new(layout.charts, CHART_SPACING_PX, chart_config),
            config.initial_parameters,
            config.num_samples,
        );
        Ok(Self {
            window,
            heading: "Signal Visualizer".to_string(),
            layout,
            sliders,
            controller,
        })
    }

    /// Routes events to the sliders and forwards changed values to the
    /// controller. Returns `false` once the user has asked to quit.
    fn handle_events(&mut self) -> bool {
        for event in self.window.poll_events() {
            if Window::is_quit(&event) {
                return false;
            }
            for slider in self.sliders.iter_mut() {
                if let Some(value) = slider.handle_event(&event) {
                    self.controller.on_change(slider.parameter(), value);
                }
            }
        }
        true
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        self.window.clear(BACKGROUND);
        self.window.draw_heading(
            self.heading.as_str(),
            self.layout.heading_y,
            HEADING_COLOUR,
        )?;
        for slider in &self.sliders {
            slider.draw(&mut self.window)?;
        }
        self.controller.renderer().draw(&mut self.window)?;
        self.window.present();
        Ok(())
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.window.wait_until_next_frame();
            if !self.handle_events() {
                log::info!("Exiting");
                return Ok(());
            }
            self.draw()?;
            self.window.frame_complete();
        }
    }
}
