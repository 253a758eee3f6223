use palette::Srgba;

use crate::{
    dataset::WalkthroughDataset,
    geometry::Point,
    sequencer::StepRendered,
};

use super::WalkthroughRenderer;

/// Colors and sizes the overlay is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayStyle {
    pub overlay_opacity: f32,
    pub border_width: f32,
    pub border_color: Srgba<f32>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from(&WalkthroughDataset::default())
    }
}

impl From<&WalkthroughDataset> for OverlayStyle {
    fn from(dataset: &WalkthroughDataset) -> Self {
        Self {
            overlay_opacity: dataset.overlay_opacity,
            border_width: dataset.spotlight_border_width,
            border_color: dataset.spotlight_border_color,
        }
    }
}

/// Reference renderer that rasterizes steps into an RGBA8 buffer.
///
/// Each step is drawn from scratch: the black mask outside the spotlight, the
/// border ring just inside the circle edge, then the arrow. Pixels are
/// sampled at their centers without anti-aliasing. Label and button text are
/// not drawn; hosts composite their own text on top.
///
/// Pixels are row-major, origin top-left, four bytes per pixel.
pub struct CpuOverlayRenderer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
    style: OverlayStyle,
    finished: bool,
}

impl CpuOverlayRenderer {
    /// Creates a transparent `[width, height]` RGBA8 canvas.
    pub fn new(image_size: [usize; 2], style: OverlayStyle) -> Self {
        let [width, height] = image_size;
        Self {
            width,
            height,
            pixels: vec![0; width.saturating_mul(height).saturating_mul(4)],
            style,
            finished: false,
        }
    }

    /// Colors and opacity used when rasterizing.
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Whether the last event was `Finished`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// RGBA value at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(out)
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Draws `step` over a cleared buffer.
    pub fn rasterize(&mut self, step: &StepRendered) {
        self.clear();
        if self.width == 0 || self.height == 0 {
            return;
        }

        let circle = step.artifacts.circle_rect;
        let center = circle.center();
        let radius = circle.width() / 2.0;
        let border_width = self.style.border_width.max(0.0);
        let inner_radius = (radius - border_width).max(0.0);

        let mask = [0.0, 0.0, 0.0, self.style.overlay_opacity.clamp(0.0, 1.0)];
        let border = [
            self.style.border_color.red,
            self.style.border_color.green,
            self.style.border_color.blue,
            self.style.border_color.alpha,
        ];
        let arrow = step.artifacts.arrow_path.as_ref();

        for y in 0..self.height {
            for x in 0..self.width {
                let sample = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = (sample - center).length();
                let idx = (y * self.width + x) * 4;
                let pixel = &mut self.pixels[idx..idx + 4];

                if distance > radius {
                    blend_over(pixel, mask);
                } else if border_width > 0.0 && distance >= inner_radius {
                    blend_over(pixel, border);
                }

                if arrow.is_some_and(|arrow| arrow.contains(sample)) {
                    blend_over(pixel, border);
                }
            }
        }
    }
}

impl WalkthroughRenderer for CpuOverlayRenderer {
    fn step_rendered(&mut self, step: &StepRendered) {
        self.finished = false;
        self.rasterize(step);
    }

    fn finished(&mut self) {
        self.finished = true;
        self.clear();
    }
}

/// Source-over blend of a straight-alpha color onto an RGBA8 pixel.
fn blend_over(dst: &mut [u8], color: [f32; 4]) {
    let [r, g, b, a] = color;
    if a <= 0.0 {
        return;
    }

    let bg_r = dst[0] as f32 / 255.0;
    let bg_g = dst[1] as f32 / 255.0;
    let bg_b = dst[2] as f32 / 255.0;
    let bg_a = dst[3] as f32 / 255.0;

    let out_a = a + bg_a * (1.0 - a);
    if out_a > 0.0 {
        let out_r = (r * a + bg_r * bg_a * (1.0 - a)) / out_a;
        let out_g = (g * a + bg_g * bg_a * (1.0 - a)) / out_a;
        let out_b = (b * a + bg_b * bg_a * (1.0 - a)) / out_a;

        dst[0] = (out_r * 255.0).round() as u8;
        dst[1] = (out_g * 255.0).round() as u8;
        dst[2] = (out_b * 255.0).round() as u8;
        dst[3] = (out_a * 255.0).round() as u8;
    }
}
