use signal_viz_widgets::Rect;

const PADDING_PX: u32 = 20;
const HEADING_HEIGHT_PX: u32 = 16;
const SLIDER_HEIGHT_PX: u32 = 40;
const SECTION_SPACING_PX: u32 = 24;
pub const CHART_SPACING_PX: u32 = 16;

/// Fraction of the content width taken by each slider.
const SLIDER_WIDTH_PERCENT: u32 = 30;

/// Where everything on the page goes: a heading, a row of three sliders, then
/// the charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub heading_y: i32,
    pub sliders: [Rect; 3],
    pub charts: Rect,
}

impl Layout {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        let content_width = width_px.saturating_sub(PADDING_PX * 2);
        let heading_y = PADDING_PX as i32;
        let sliders_y =
            heading_y + (HEADING_HEIGHT_PX + SECTION_SPACING_PX) as i32;
        let slider_width = (content_width * SLIDER_WIDTH_PERCENT) / 100;
        let slider_gap = content_width.saturating_sub(slider_width * 3) / 2;
        let sliders = [0, 1, 2].map(|i| {
            Rect::new(
                PADDING_PX as i32 + (i * (slider_width + slider_gap)) as i32,
                sliders_y,
                slider_width,
                SLIDER_HEIGHT_PX,
            )
        });
        let charts_y =
            sliders_y + (SLIDER_HEIGHT_PX + SECTION_SPACING_PX) as i32;
        let charts = Rect::new(
            PADDING_PX as i32,
            charts_y,
            content_width,
            height_px
                .saturating_sub(charts_y as u32 + PADDING_PX)
                .max(1),
        );
        Self {
            heading_y,
            sliders,
            charts,
        }
    }
}
