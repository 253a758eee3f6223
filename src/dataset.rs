use palette::Srgba;

use crate::geometry::{Rect, Size};

/// One step of a walkthrough: the text to show and the region to highlight.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkthroughItem {
    /// Description shown next to the spotlight. May be empty.
    pub description_text: String,
    /// Absolute viewport rectangle the spotlight is centered on.
    pub target_rect: Rect,
}

impl WalkthroughItem {
    /// Creates a step pointing at `target_rect`.
    pub fn new(description_text: impl Into<String>, target_rect: Rect) -> Self {
        Self {
            description_text: description_text.into(),
            target_rect,
        }
    }
}

/// Generic or named font family used to measure description text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    SansSerif,
    Serif,
    Monospace,
    Cursive,
    Fantasy,
    Named(String),
}

/// Font handed to the text measurement service.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    pub family: FontFamily,
    /// Font size in pixels.
    pub size: f32,
    /// CSS-style weight (400 regular, 700 bold).
    pub weight: u16,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: FontFamily::SansSerif,
            size: 16.0,
            weight: 400,
        }
    }
}

impl FontDescriptor {
    /// Creates a descriptor with the default weight.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            ..Default::default()
        }
    }

    /// Sets the `fontdb` weight, 400 being regular.
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }
}

/// Items and visual styling for one walkthrough session.
///
/// The dataset is set once by the host. Handing a new dataset to the
/// sequencer restarts the walkthrough from its first item.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkthroughDataset {
    pub items: Vec<WalkthroughItem>,
    /// Opacity of the dark mask, in `[0, 1]`.
    pub overlay_opacity: f32,
    pub text_color: Srgba<f32>,
    pub next_button_color: Srgba<f32>,
    pub font: FontDescriptor,
    pub spotlight_border_width: f32,
    pub spotlight_border_color: Srgba<f32>,
    pub spotlight_radius: f32,
    pub next_button_text: String,
}

impl Default for WalkthroughDataset {
    fn default() -> Self {
        let white = Srgba::new(1.0, 1.0, 1.0, 1.0);
        Self {
            items: Vec::new(),
            overlay_opacity: 0.8,
            text_color: white,
            next_button_color: white,
            font: FontDescriptor::default(),
            spotlight_border_width: 4.0,
            spotlight_border_color: white,
            spotlight_radius: 60.0,
            next_button_text: "Next".to_string(),
        }
    }
}

impl WalkthroughDataset {
    /// Creates a dataset with default styling.
    pub fn new(items: Vec<WalkthroughItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Appends a step after the existing ones.
    pub fn push_item(&mut self, item: WalkthroughItem) {
        self.items.push(item);
    }

    /// Sets the mask opacity, clamped into `[0, 1]`.
    pub fn with_overlay_opacity(mut self, opacity: f32) -> Self {
        self.overlay_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets the label text color.
    pub fn with_text_color(mut self, color: Srgba<f32>) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the next-button text color.
    pub fn with_next_button_color(mut self, color: Srgba<f32>) -> Self {
        self.next_button_color = color;
        self
    }

    /// Sets the font used for the label and the next button.
    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.font = font;
        self
    }

    /// Negative widths are treated as no border.
    pub fn with_spotlight_border(mut self, width: f32, color: Srgba<f32>) -> Self {
        self.spotlight_border_width = width.max(0.0);
        self.spotlight_border_color = color;
        self
    }

    /// Sets the spotlight radius; negative values become 0.
    pub fn with_spotlight_radius(mut self, radius: f32) -> Self {
        self.spotlight_radius = radius.max(0.0);
        self
    }

    /// Sets the next-button caption.
    pub fn with_next_button_text(mut self, text: impl Into<String>) -> Self {
        self.next_button_text = text.into();
        self
    }
}

/// Fixed distances used when placing the label, arrow and next button.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Inset of the label from the left and right edges, and of the next
    /// button from the trailing and bottom edges.
    pub padding: f32,
    /// Gap between the spotlight circle and the label.
    pub label_circle_margin: f32,
    /// Gap between the label edge and the arrow start. The arrow tip stops
    /// twice this distance short of the circle.
    pub arrow_offset: f32,
    pub next_button_size: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 32.0,
            label_circle_margin: 70.0,
            arrow_offset: 10.0,
            next_button_size: Size::new(60.0, 24.0),
        }
    }
}
