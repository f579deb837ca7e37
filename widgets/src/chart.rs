use crate::window::{
    CHAR_HEIGHT_PX, CHAR_WIDTH_PX, Window, line_rects, text_width_px,
};
use line_2d::Coord;
use rgb_int::Rgb24;
use sdl2::rect::Rect;
use signal_viz_core::{Dataset, SignalKind};

const LEGEND_SPACE_PX: u32 = CHAR_HEIGHT_PX + 6;
const X_LABEL_SPACE_PX: u32 = CHAR_HEIGHT_PX + 6;
const Y_LABEL_CHARS: u32 = 6;
const Y_LABEL_SPACE_PX: u32 = (Y_LABEL_CHARS * CHAR_WIDTH_PX) + 6;
const LEGEND_SWATCH_WIDTH_PX: u32 = 30;

/// How a line chart is drawn. The default is a thin teal line. The x axis is
/// linear and labelled along the bottom.
#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    pub border_colour: Rgb24,
    pub border_width: u32,
    pub axis_colour: Rgb24,
    pub text_colour: Rgb24,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            border_colour: Rgb24 {
                r: 75,
                g: 192,
                b: 192,
            },
            border_width: 1,
            axis_colour: Rgb24 {
                r: 96,
                g: 96,
                b: 96,
            },
            text_colour: Rgb24 {
                r: 255,
                g: 255,
                b: 255,
            },
        }
    }
}

/// The data-space rectangle that is mapped onto a chart's plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Fits the x range to the sample indices and the y range to the finite
    /// samples. A flat or empty series gets one unit of headroom either side
    /// so it is drawn mid-chart.
    pub fn fit(y_values: &[f64]) -> Self {
        let x_max = (y_values.len().saturating_sub(1)).max(1) as f64;
        let (y_min, y_max) = y_values
            .iter()
            .copied()
            .filter(|y| y.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, y| match acc {
                None => Some((y, y)),
                Some((min, max)) => Some((min.min(y), max.max(y))),
            })
            .unwrap_or((0.0, 0.0));
        let (y_min, y_max) = if y_max - y_min > f64::EPSILON {
            (y_min, y_max)
        } else {
            (y_min - 1.0, y_max + 1.0)
        };
        Self {
            x_min: 0.0,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Maps a data-space point into `plot`. Larger y values are drawn higher
    /// up.
    pub fn to_screen(&self, plot: Rect, x: f64, y: f64) -> Coord {
        let x_01 = (x - self.x_min) / (self.x_max - self.x_min);
        let y_01 = (y - self.y_min) / (self.y_max - self.y_min);
        let width = plot.width().saturating_sub(1) as f64;
        let height = plot.height().saturating_sub(1) as f64;
        Coord {
            x: plot.x() + (x_01 * width).round() as i32,
            y: plot.y() + height as i32 - (y_01 * height).round() as i32,
        }
    }
}

/// Draws the most recent dataset it was given for one signal.
pub struct LineChart {
    kind: SignalKind,
    rect: Rect,
    config: ChartConfig,
    y_values: Vec<f64>,
    bounds: Bounds,
    coords: Vec<Coord>,
    line: Vec<Rect>,
}

impl LineChart {
    pub fn new(kind: SignalKind, rect: Rect, config: ChartConfig) -> Self {
        Self {
            kind,
            rect,
            config,
            y_values: Vec::new(),
            bounds: Bounds::fit(&[]),
            coords: Vec::new(),
            line: Vec::new(),
        }
    }

    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The area inside the legend and axis labels where the line is drawn.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            self.rect.x() + Y_LABEL_SPACE_PX as i32,
            self.rect.y() + LEGEND_SPACE_PX as i32,
            self.rect.width().saturating_sub(Y_LABEL_SPACE_PX).max(1),
            self.rect
                .height()
                .saturating_sub(LEGEND_SPACE_PX + X_LABEL_SPACE_PX)
                .max(1),
        )
    }

    /// Screen position of every sample, in order.
    pub fn screen_coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Replaces the displayed data. The rectangles making up the line are
    /// computed here so that drawing a frame is a single batch per chart.
    pub fn set_data(&mut self, dataset: &Dataset<'_>) {
        self.y_values.clear();
        self.y_values.extend_from_slice(dataset.y_values);
        self.bounds = Bounds::fit(&self.y_values);
        let plot = self.plot_rect();
        let bounds = self.bounds;
        self.coords.clear();
        self.coords.extend(
            dataset
                .points()
                .map(|(x, y)| bounds.to_screen(plot, x as f64, y)),
        );
        self.line.clear();
        for pair in self.coords.windows(2) {
            self.line
                .extend(line_rects(pair[0], pair[1], self.config.border_width));
        }
        if let [single] = self.coords.as_slice() {
            self.line
                .extend(line_rects(*single, *single, self.config.border_width));
        }
    }

    fn zero_y(&self) -> i32 {
        let plot = self.plot_rect();
        let zero = 0.0_f64.clamp(self.bounds.y_min, self.bounds.y_max);
        self.bounds.to_screen(plot, self.bounds.x_min, zero).y
    }

    fn draw_legend(&self, window: &mut Window) -> anyhow::Result<()> {
        let label = self.kind.label();
        let total_width =
            LEGEND_SWATCH_WIDTH_PX + CHAR_WIDTH_PX + text_width_px(label);
        let x = self.rect.x()
            + (self.rect.width() as i32 - total_width as i32) / 2;
        let y = self.rect.y();
        window.fill_rect(
            Rect::new(x, y, LEGEND_SWATCH_WIDTH_PX, CHAR_HEIGHT_PX),
            self.config.border_colour,
        )?;
        window.draw_text(
            label,
            x + (LEGEND_SWATCH_WIDTH_PX + CHAR_WIDTH_PX) as i32,
            y,
            self.config.text_colour,
        )
    }

    fn draw_axes(&self, window: &mut Window) -> anyhow::Result<()> {
        let plot = self.plot_rect();
        window.draw_rect(plot, self.config.axis_colour)?;
        let zero_y = self.zero_y();
        window.draw_line(
            Coord {
                x: plot.x(),
                y: zero_y,
            },
            Coord {
                x: plot.right() - 1,
                y: zero_y,
            },
            1,
            self.config.axis_colour,
        )?;
        let text_colour = self.config.text_colour;
        let label_x = self.rect.x();
        window.draw_text(
            format!("{:>6.2}", self.bounds.y_max).as_str(),
            label_x,
            plot.y(),
            text_colour,
        )?;
        window.draw_text(
            format!("{:>6.2}", self.bounds.y_min).as_str(),
            label_x,
            plot.bottom() - CHAR_HEIGHT_PX as i32,
            text_colour,
        )?;
        let x_label_y = plot.bottom() + 3;
        let x_max_label = format!("{}", self.bounds.x_max);
        window.draw_text(
            format!("{}", self.bounds.x_min).as_str(),
            plot.x(),
            x_label_y,
            text_colour,
        )?;
        window.draw_text(
            x_max_label.as_str(),
            plot.right() - text_width_px(x_max_label.as_str()) as i32,
            x_label_y,
            text_colour,
        )
    }

    pub fn draw(&self, window: &mut Window) -> anyhow::Result<()> {
        self.draw_legend(window)?;
        self.draw_axes(window)?;
        window.fill_rects(&self.line, self.config.border_colour)
    }
}
