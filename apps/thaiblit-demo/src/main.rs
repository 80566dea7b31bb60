use minifb::{Key, Window, WindowOptions};
use thaiblit::{fonts, PixelSink, TextBlitter};

const WIDTH: usize = 320;
const HEIGHT: usize = 140;

const MAX_FPS: u64 = 15;
const INK_COLOUR: u32 = 0x1B1B19;
const PAPER_COLOUR: u32 = 0xB5B5AD;

/// Pixel sink over a minifb-native u32 frame buffer. Out-of-window
/// coordinates are dropped here rather than in the renderer; the renderer
/// treats the surface as unbounded.
struct FrameSink {
    buffer: Vec<u32>,
}

impl FrameSink {
    fn new() -> FrameSink { FrameSink { buffer: vec![PAPER_COLOUR; WIDTH * HEIGHT] } }

    fn plot(&mut self, x: i16, y: i16, colour: u32) {
        if x < 0 || y < 0 || x >= WIDTH as i16 || y >= HEIGHT as i16 {
            return;
        }
        self.buffer[y as usize * WIDTH + x as usize] = colour;
    }
}

impl PixelSink for FrameSink {
    fn draw_pixel(&mut self, x: i16, y: i16) { self.plot(x, y, INK_COLOUR); }

    fn clear_pixel(&mut self, x: i16, y: i16) { self.plot(x, y, PAPER_COLOUR); }
}

fn main() {
    env_logger::init();

    let mut window = Window::new(
        "thaiblit",
        WIDTH,
        HEIGHT,
        WindowOptions { scale_mode: minifb::ScaleMode::AspectRatioStretch, resize: true, ..WindowOptions::default() },
    )
    .unwrap_or_else(|e| {
        panic!("{}", e);
    });

    // Limit the maximum refresh rate
    window.limit_update_rate(Some(std::time::Duration::from_micros(1000 * 1000 / MAX_FPS)));

    let mut text = TextBlitter::new(FrameSink::new());
    text.set_font(Some(&fonts::thai::FONT));
    text.set_extent(WIDTH as u16, HEIGHT as u16);

    // Tone mark placement: lifted over the first-level vowel in the middle
    // sample, dropped onto the bare consonant in the first, pushed clear of
    // the sara am ring in the last.
    text.set_cursor(16, 40);
    text.print("Thai ก่ กั่ ก่ำ");
    text.set_cursor(16, 80);
    text.print("มีน้ำ");
    let width = text.text_width("มีน้ำ");
    log::info!("sample width: {}px", width);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&text.sink_mut().buffer, WIDTH, HEIGHT)
            .unwrap();
    }
}
