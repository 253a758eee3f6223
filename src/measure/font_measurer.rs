use std::path::PathBuf;

use parking_lot::Mutex;

use crate::{
    dataset::{FontDescriptor, FontFamily},
    font_storage::FontStorage,
    geometry::Size,
};

use super::{TextMeasurer, wrap};

/// [`TextMeasurer`] that shapes text with real font metrics.
///
/// Advances come from `fontdue` glyph metrics with pair kerning, and line
/// height from the face's horizontal line metrics. The storage sits behind a
/// `Mutex` because faces are parsed lazily while measuring through `&self`.
///
/// Text whose font cannot be resolved measures as `0 x 0`, which the geometry
/// engine treats as "no label".
pub struct FontMeasurer {
    pub font_storage: Mutex<FontStorage>,
}

impl Default for FontMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl FontMeasurer {
    /// Creates a measurer with no fonts registered.
    pub fn new() -> Self {
        Self {
            font_storage: Mutex::new(FontStorage::new()),
        }
    }

    /// Creates a measurer populated with the fonts installed on this system.
    pub fn with_system_fonts() -> Self {
        let measurer = Self::new();
        measurer.load_system_fonts();
        measurer
    }

    /// Loads the fonts installed on this system.
    pub fn load_system_fonts(&self) {
        self.font_storage.lock().load_system_fonts();
    }

    /// Loads a font from binary data.
    pub fn load_font_binary(&self, data: impl Into<Vec<u8>>) {
        self.font_storage.lock().load_font_binary(data);
    }

    /// Loads a font from a file path.
    pub fn load_font_file(&self, path: PathBuf) -> Result<(), std::io::Error> {
        self.font_storage.lock().load_font_file(path)
    }

    /// Loads all fonts from a directory.
    pub fn load_fonts_dir(&self, dir: PathBuf) {
        self.font_storage.lock().load_fonts_dir(dir)
    }

    /// Chooses which installed family a generic family resolves to.
    pub fn set_generic_family(&self, generic: &FontFamily, name: impl Into<String>) {
        self.font_storage.lock().set_generic_family(generic, name);
    }

    /// Checks if no faces are registered.
    pub fn is_empty(&self) -> bool {
        self.font_storage.lock().is_empty()
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure(&self, text: &str, max_width: f32, font: &FontDescriptor) -> Size {
        if text.is_empty() {
            return Size::zero();
        }

        let Some(face) = self.font_storage.lock().resolve(font) else {
            log::warn!("No font matches {:?}; measuring text as empty.", font.family);
            return Size::zero();
        };
        let Some(line_metrics) = face.horizontal_line_metrics(font.size) else {
            log::warn!("Font for {:?} has no horizontal metrics.", font.family);
            return Size::zero();
        };

        let widths = wrap::wrap_line_widths(text, max_width, |prev, ch| {
            let kern = prev
                .and_then(|prev| face.horizontal_kern(prev, ch, font.size))
                .unwrap_or(0.0);
            face.metrics(ch, font.size).advance_width + kern
        });

        wrap::measured_size(&widths, line_metrics.new_line_size)
    }
}
