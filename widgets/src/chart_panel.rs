use crate::{
    chart::{ChartConfig, LineChart},
    window::Window,
};
use sdl2::rect::Rect;
use signal_viz_core::{Dataset, Renderer, SignalKind};

/// One line chart per signal, stacked top to bottom in display order.
pub struct ChartPanel {
    charts: Vec<LineChart>,
}

impl ChartPanel {
    pub fn new(rect: Rect, spacing_px: u32, config: ChartConfig) -> Self {
        let num_charts = SignalKind::ALL.len() as u32;
        let total_spacing = spacing_px * (num_charts - 1);
        let chart_height =
            (rect.height().saturating_sub(total_spacing) / num_charts).max(1);
        let charts = SignalKind::ALL
            .into_iter()
            .enumerate()
            .map(|(i, kind)| {
                let y = rect.y()
                    + (i as u32 * (chart_height + spacing_px)) as i32;
                LineChart::new(
                    kind,
                    Rect::new(rect.x(), y, rect.width(), chart_height),
                    config,
                )
            })
            .collect();
        Self { charts }
    }

    pub fn chart(&self, kind: SignalKind) -> Option<&LineChart> {
        self.charts.iter().find(|chart| chart.kind() == kind)
    }

    pub fn charts(&self) -> &[LineChart] {
        &self.charts
    }

    pub fn draw(&self, window: &mut Window) -> anyhow::Result<()> {
        for chart in &self.charts {
            chart.draw(window)?;
        }
        Ok(())
    }
}

impl Renderer for ChartPanel {
    fn render(&mut self, dataset: &Dataset<'_>) {
        match self
            .charts
            .iter_mut()
            .find(|chart| chart.kind() == dataset.kind)
        {
            Some(chart) => chart.set_data(dataset),
            None => log::warn!("No chart for dataset \"{}\"", dataset.label()),
        }
    }
}
