/// Text measurement backed by real font files.
pub mod font_measurer;
/// Line breaking shared by all measurers.
pub mod wrap;

pub use font_measurer::FontMeasurer;

use crate::{dataset::FontDescriptor, geometry::Size};

/// Computes the wrapped size of a description text.
///
/// Implementations must return `0 x 0` for empty text and must be
/// deterministic, since step artifacts are expected to be reproducible.
pub trait TextMeasurer {
    fn measure(&self, text: &str, max_width: f32, font: &FontDescriptor) -> Size;
}

/// Measurer that gives every glyph the same advance.
///
/// Useful for headless hosts and tests where no font files are available.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Glyph advance as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line height as a multiple of the font size.
    pub line_height_scale: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            line_height_scale: 1.2,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, max_width: f32, font: &FontDescriptor) -> Size {
        let advance = font.size * self.advance_ratio;
        let widths = wrap::wrap_line_widths(text, max_width, |_, _| advance);
        wrap::measured_size(&widths, font.size * self.line_height_scale)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, max_width: f32, font: &FontDescriptor) -> Size {
        (**self).measure(text, max_width, font)
    }
}
