use anyhow::anyhow;
use line_2d::Coord;
use rgb_int::Rgb24;
use sdl2::{
    EventPump,
    event::Event,
    gfx::primitives::DrawRenderer,
    keyboard::Scancode,
    pixels::Color,
    rect::Rect,
    render::{BlendMode, Canvas},
    video::Window as SdlWindow,
};
use std::{
    thread,
    time::{Duration, Instant},
};

const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / 60);

/// Size of a glyph in the bitmap font built into SDL2_gfx.
pub const CHAR_WIDTH_PX: u32 = 8;
pub const CHAR_HEIGHT_PX: u32 = 8;

const HEADING_SCALE: u32 = 2;

pub fn text_width_px(text: &str) -> u32 {
    text.chars().count() as u32 * CHAR_WIDTH_PX
}

pub(crate) fn sdl_color(rgb24: Rgb24) -> Color {
    Color::RGB(rgb24.r, rgb24.g, rgb24.b)
}

pub struct Window {
    pub canvas: Canvas<SdlWindow>,
    event_pump: EventPump,
    prev_tick_complete: Instant,
    width_px: u32,
    height_px: u32,
}

impl Window {
    pub fn new(
        title: &str,
        width_px: u32,
        height_px: u32,
    ) -> anyhow::Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(title, width_px, height_px)
            .position_centered()
            .build()?;
        let mut canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()?;
        canvas.set_blend_mode(BlendMode::Blend);
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        log::info!("Opened window \"{}\" ({}x{})", title, width_px, height_px);
        Ok(Self {
            canvas,
            event_pump,
            prev_tick_complete: Instant::now(),
            width_px,
            height_px,
        })
    }

    pub fn wait_until_next_frame(&self) {
        if let Some(period_to_sleep) = (self.prev_tick_complete
            + FRAME_DURATION)
            .checked_duration_since(Instant::now())
        {
            thread::sleep(period_to_sleep);
        }
    }

    /// Call once all drawing for a frame is done.
    pub fn frame_complete(&mut self) {
        self.prev_tick_complete = Instant::now();
    }

    pub fn poll_events(&mut self) -> Vec<Event> {
        self.event_pump.poll_iter().collect()
    }

    /// Closing the window or pressing escape ends the program.
    pub fn is_quit(event: &Event) -> bool {
        matches!(
            event,
            Event::Quit { .. }
                | Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                }
        )
    }

    pub fn clear(&mut self, background: Rgb24) {
        self.canvas.set_draw_color(sdl_color(background));
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        self.canvas
            .string(x as i16, y as i16, text, sdl_color(colour))
            .map_err(|e| anyhow!(e))
    }

    /// Draws `text` at twice the font size, horizontally centred in the window.
    pub fn draw_heading(
        &mut self,
        text: &str,
        y: i32,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        let scaled_width = text_width_px(text) * HEADING_SCALE;
        let x = (self.width_px as i32 - scaled_width as i32) / 2;
        let scale = HEADING_SCALE as f32;
        self.canvas.set_scale(scale, scale).map_err(|e| anyhow!(e))?;
        let result = self.draw_text(
            text,
            x / HEADING_SCALE as i32,
            y / HEADING_SCALE as i32,
            colour,
        );
        self.canvas.set_scale(1.0, 1.0).map_err(|e| anyhow!(e))?;
        result
    }

    pub fn fill_rect(
        &mut self,
        rect: Rect,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        self.canvas.set_draw_color(sdl_color(colour));
        self.canvas.fill_rect(rect).map_err(|e| anyhow!("{e}"))
    }

    pub fn fill_rects(
        &mut self,
        rects: &[Rect],
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        self.canvas.set_draw_color(sdl_color(colour));
        self.canvas.fill_rects(rects).map_err(|e| anyhow!("{e}"))
    }

    pub fn draw_rect(
        &mut self,
        rect: Rect,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        self.canvas.set_draw_color(sdl_color(colour));
        self.canvas.draw_rect(rect).map_err(|e| anyhow!("{e}"))
    }

    pub fn draw_line(
        &mut self,
        start: Coord,
        end: Coord,
        line_width: u32,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        let rects = line_rects(start, end, line_width).collect::<Vec<_>>();
        self.fill_rects(&rects, colour)
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }
}

/// One square of side `line_width` centred on each pixel of the line from
/// `start` to `end`.
pub(crate) fn line_rects(
    start: Coord,
    end: Coord,
    line_width: u32,
) -> impl Iterator<Item = Rect> {
    let line_width = line_width.max(1);
    line_2d::coords_between(start, end).map(move |Coord { x, y }| {
        Rect::new(
            x - (line_width as i32 / 2),
            y - (line_width as i32 / 2),
            line_width,
            line_width,
        )
    })
}
