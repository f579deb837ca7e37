use crate::window::{CHAR_HEIGHT_PX, Window};
use line_2d::Coord;
use rgb_int::Rgb24;
use sdl2::{event::Event, keyboard::Scancode, mouse::MouseButton, rect::Rect};
use signal_viz_core::{Parameter, ParameterRange};

const LABEL_SPACE_PX: u32 = CHAR_HEIGHT_PX + 8;
const TRACK_HEIGHT_PX: u32 = 6;
const THUMB_SIZE_PX: u32 = 14;

const TRACK_COLOUR: Rgb24 = Rgb24 {
    r: 64,
    g: 64,
    b: 64,
};
const FILLED_TRACK_COLOUR: Rgb24 = Rgb24 {
    r: 75,
    g: 192,
    b: 192,
};
const THUMB_COLOUR: Rgb24 = Rgb24 {
    r: 192,
    g: 192,
    b: 192,
};
const THUMB_ACTIVE_COLOUR: Rgb24 = Rgb24 {
    r: 255,
    g: 255,
    b: 255,
};
const TEXT_COLOUR: Rgb24 = THUMB_ACTIVE_COLOUR;

/// Rounds to the slider step for display. Whole numbers are shown without a
/// decimal point.
pub fn format_value(value: f64) -> String {
    let text = format!("{:.1}", value);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// A horizontal range input for one parameter. The label sits above the track.
/// Every value it produces has been passed through
/// [`ParameterRange::quantize`].
pub struct Slider {
    parameter: Parameter,
    range: ParameterRange,
    value: f64,
    rect: Rect,
    dragging: bool,
    hovered: bool,
    focused: bool,
}

impl Slider {
    pub fn new(parameter: Parameter, initial_value: f64, rect: Rect) -> Self {
        let range = parameter.range();
        Self {
            parameter,
            range,
            value: range.quantize(initial_value),
            rect,
            dragging: false,
            hovered: false,
            focused: false,
        }
    }

    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label(&self) -> String {
        format!("{}: {}", self.parameter.label(), format_value(self.value))
    }

    fn track_rect(&self) -> Rect {
        let available_height =
            self.rect.height().saturating_sub(LABEL_SPACE_PX);
        let y = self.rect.y()
            + LABEL_SPACE_PX as i32
            + (available_height as i32 - TRACK_HEIGHT_PX as i32) / 2;
        Rect::new(
            self.rect.x() + (THUMB_SIZE_PX as i32 / 2),
            y,
            self.rect.width().saturating_sub(THUMB_SIZE_PX).max(1),
            TRACK_HEIGHT_PX,
        )
    }

    fn thumb_centre(&self) -> Coord {
        let track = self.track_rect();
        let offset =
            self.range.value_to_01(self.value) * (track.width() - 1) as f64;
        Coord {
            x: track.x() + offset.round() as i32,
            y: track.y() + (TRACK_HEIGHT_PX as i32 / 2),
        }
    }

    /// The value that a click at horizontal pixel position `x` selects.
    pub fn value_at_x(&self, x: i32) -> f64 {
        let track = self.track_rect();
        let value_01 =
            (x - track.x()) as f64 / (track.width() - 1).max(1) as f64;
        self.range.quantize(self.range.value_from_01(value_01))
    }

    fn set_value(&mut self, value: f64) -> Option<f64> {
        if value == self.value {
            return None;
        }
        log::debug!(
            "{} slider changed from {} to {}",
            self.parameter.label(),
            format_value(self.value),
            format_value(value)
        );
        self.value = value;
        Some(value)
    }

    /// A left click inside the slider starts a drag and selects the value under
    /// the pointer. A click anywhere else takes keyboard focus away from this
    /// slider.
    pub fn press_at(&mut self, x: i32, y: i32) -> Option<f64> {
        if self.rect.contains_point((x, y)) {
            self.dragging = true;
            self.focused = true;
            self.set_value(self.value_at_x(x))
        } else {
            self.focused = false;
            None
        }
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> Option<f64> {
        self.hovered = self.rect.contains_point((x, y));
        if self.dragging {
            self.set_value(self.value_at_x(x))
        } else {
            None
        }
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn step(&mut self, num_steps: i32) -> Option<f64> {
        self.set_value(self.range.step_by(self.value, num_steps))
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the new value if the event changed it.
    pub fn handle_event(&mut self, event: &Event) -> Option<f64> {
        match *event {
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => self.press_at(x, y),
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                ..
            } => {
                self.release();
                None
            }
            Event::MouseMotion { x, y, .. } => self.move_to(x, y),
            Event::MouseWheel { y, .. } if self.hovered && y != 0 => {
                self.step(y.signum())
            }
            Event::KeyDown {
                scancode: Some(Scancode::Left),
                ..
            } if self.focused => self.step(-1),
            Event::KeyDown {
                scancode: Some(Scancode::Right),
                ..
            } if self.focused => self.step(1),
            _ => None,
        }
    }

    pub fn draw(&self, window: &mut Window) -> anyhow::Result<()> {
        window.draw_text(
            self.label().as_str(),
            self.rect.x(),
            self.rect.y(),
            TEXT_COLOUR,
        )?;
        let track = self.track_rect();
        window.fill_rect(track, TRACK_COLOUR)?;
        let thumb_centre = self.thumb_centre();
        let filled_width = (thumb_centre.x - track.x()).max(0) as u32;
        if filled_width > 0 {
            window.fill_rect(
                Rect::new(track.x(), track.y(), filled_width, track.height()),
                FILLED_TRACK_COLOUR,
            )?;
        }
        let thumb_colour = if self.dragging || self.hovered || self.focused {
            THUMB_ACTIVE_COLOUR
        } else {
            THUMB_COLOUR
        };
        window.fill_rect(
            Rect::from_center(
                (thumb_centre.x, thumb_centre.y),
                THUMB_SIZE_PX,
                THUMB_SIZE_PX,
            ),
            thumb_colour,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn slider() -> Slider {
        // Track runs from x = 7 to x = 7 + 186 - 1 = 192.
        Slider::new(Parameter::Gbps, 1.0, Rect::new(0, 0, 200, 40))
    }

    #[test]
    fn initial_value_is_quantized() {
        assert_eq!(
            Slider::new(Parameter::Lo, 0.0, Rect::new(0, 0, 200, 40)).value(),
            1.0
        );
        assert!(close(
            Slider::new(Parameter::Lo, 4.26, Rect::new(0, 0, 200, 40))
                .value(),
            4.3
        ));
    }

    #[test]
    fn label_matches_page_text() {
        assert_eq!(slider().label(), "Gbps: 1");
    }

    #[test]
    fn whole_values_have_no_decimal_point() {
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(1.2999999999999998), "1.3");
        assert_eq!(format_value(2.9999999999999996), "3");
    }

    #[test]
    fn track_ends_map_to_range_ends() {
        let slider = slider();
        assert_eq!(slider.value_at_x(7), 1.0);
        assert_eq!(slider.value_at_x(192), 10.0);
        assert_eq!(slider.value_at_x(-100), 1.0);
        assert_eq!(slider.value_at_x(1000), 10.0);
    }

    #[test]
    fn click_and_drag() {
        let mut slider = slider();
        assert_eq!(slider.press_at(192, 30), Some(10.0));
        assert!(slider.is_focused());
        assert_eq!(slider.move_to(7, 30), Some(1.0));
        // Dragging continues outside the widget.
        assert_eq!(slider.move_to(500, 300), Some(10.0));
        slider.release();
        assert_eq!(slider.move_to(7, 30), None);
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn click_outside_is_ignored() {
        let mut slider = slider();
        assert_eq!(slider.press_at(300, 300), None);
        assert!(!slider.is_focused());
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn unchanged_value_is_not_reported() {
        let mut slider = slider();
        assert_eq!(slider.press_at(7, 30), None);
        assert_eq!(slider.step(-1), None);
    }

    #[test]
    fn steps() {
        let mut slider = slider();
        let value = slider.step(1).unwrap();
        assert!(close(value, 1.1));
        assert_eq!(slider.step(100), Some(10.0));
        assert_eq!(slider.step(1), None);
    }
}
