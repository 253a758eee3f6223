use crate::dataset::{LayoutConfig, WalkthroughItem};

use super::{Point, Rect, Size};

/// Side of the spotlight the description label is placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPositionOption {
    AboveSpotlight,
    BelowSpotlight,
}

/// Square of side `2 * radius` centered on the item's target.
pub fn circle_mask_rect(item: &WalkthroughItem, radius: f32) -> Rect {
    let center = item.target_rect.center();
    Rect::new(
        Point::new(center.x - radius, center.y - radius),
        Size::new(2.0 * radius, 2.0 * radius),
    )
}

/// Picks the half of the viewport with more room for the label.
///
/// A circle whose bottom edge is below the vertical middle gets its label
/// above. A bottom edge exactly on the middle counts as the top half.
pub fn label_position(circle_rect: &Rect, viewport_bounds: &Rect) -> LabelPositionOption {
    if circle_rect.max_y() > viewport_bounds.center().y {
        LabelPositionOption::AboveSpotlight
    } else {
        LabelPositionOption::BelowSpotlight
    }
}

/// Maximum line width the description text is wrapped to.
pub fn label_measure_width(viewport_size: Size, layout: &LayoutConfig) -> f32 {
    (viewport_size.width - 2.0 * layout.padding).max(0.0)
}

/// Bounding box of the description label.
///
/// The label spans the viewport width minus padding on both sides, measured
/// from the viewport's left edge; its height is the measured text height,
/// capped at half the viewport. Empty text yields a zero-size rect at the
/// position the label would have had.
pub fn label_rect(
    description: &str,
    circle_rect: &Rect,
    position: LabelPositionOption,
    viewport_bounds: &Rect,
    layout: &LayoutConfig,
    measured_text_size: Size,
) -> Rect {
    let viewport_size = viewport_bounds.size;
    let size = if description.is_empty() {
        Size::zero()
    } else {
        let height = measured_text_size
            .height
            .clamp(0.0, (viewport_size.height / 2.0).max(0.0));
        Size::new(label_measure_width(viewport_size, layout), height)
    };

    let y = match position {
        LabelPositionOption::AboveSpotlight => {
            circle_rect.min_y() - layout.label_circle_margin - size.height
        }
        LabelPositionOption::BelowSpotlight => circle_rect.max_y() + layout.label_circle_margin,
    };

    Rect::new(Point::new(viewport_bounds.min_x() + layout.padding, y), size)
}

/// Next-button frame anchored to the bottom-right corner of the viewport.
pub fn next_button_rect(viewport_bounds: &Rect, layout: &LayoutConfig) -> Rect {
    let size = layout.next_button_size;
    Rect::new(
        Point::new(
            viewport_bounds.max_x() - layout.padding - size.width,
            viewport_bounds.max_y() - layout.padding - size.height,
        ),
        size,
    )
}
