/// Arrow connecting the label to the spotlight.
pub mod arrow;
/// Spotlight circle, label placement and next-button placement.
pub mod spotlight;

pub use arrow::{ArrowDimensions, ArrowEndpoints, ArrowPath, arrow_endpoints, arrow_path};
pub use spotlight::{
    LabelPositionOption, circle_mask_rect, label_measure_width, label_position, label_rect,
    next_button_rect,
};

use crate::{
    dataset::{LayoutConfig, WalkthroughDataset, WalkthroughItem},
    measure::TextMeasurer,
};

/// Coordinate space of the display surface. **Y-axis goes down.**
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewportSpace;

/// Local frame of an arrow: the tail starts at the origin and the tip lies on
/// the positive x-axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArrowSpace;

pub type Rect = euclid::Rect<f32, ViewportSpace>;
pub type Point = euclid::Point2D<f32, ViewportSpace>;
pub type Size = euclid::Size2D<f32, ViewportSpace>;
pub type Vector = euclid::Vector2D<f32, ViewportSpace>;

/// Everything a renderer needs to draw one step.
///
/// Artifacts are recomputed on every advance and never cached, so the same
/// item, dataset and viewport always produce equal values.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderArtifacts {
    pub circle_rect: Rect,
    pub label_rect: Rect,
    pub label_position: LabelPositionOption,
    /// `None` when there is no label to point from or the arrow would have
    /// no length.
    pub arrow_path: Option<ArrowPath>,
    pub next_button_rect: Rect,
}

impl RenderArtifacts {
    /// Runs the geometry pipeline for a single item.
    ///
    /// The circle is placed first, since the label side depends on it. The
    /// label is measured against the available width and placed on that
    /// side, then the arrow is routed from the label edge toward the circle.
    pub fn compute<M: TextMeasurer + ?Sized>(
        item: &WalkthroughItem,
        dataset: &WalkthroughDataset,
        layout: &LayoutConfig,
        bounds: Rect,
        measurer: &M,
    ) -> Self {
        let circle_rect = circle_mask_rect(item, dataset.spotlight_radius);
        let label_position = label_position(&circle_rect, &bounds);

        let measured = if item.description_text.is_empty() {
            Size::zero()
        } else {
            measurer.measure(
                &item.description_text,
                label_measure_width(bounds.size, layout),
                &dataset.font,
            )
        };

        let label_rect = label_rect(
            &item.description_text,
            &circle_rect,
            label_position,
            &bounds,
            layout,
            measured,
        );

        // a label squeezed to zero width still has measured lines to point from
        let arrow_path = if label_rect.height() <= 0.0 {
            None
        } else {
            let endpoints = arrow_endpoints(
                &label_rect,
                circle_rect.center(),
                dataset.spotlight_radius,
                label_position,
                layout.arrow_offset,
            );
            let dimensions = ArrowDimensions::from_border_width(dataset.spotlight_border_width);
            match arrow_path(endpoints.start, endpoints.end, &dimensions) {
                Ok(path) => Some(path),
                Err(e) => {
                    log::debug!("Step drawn without arrow: {e}");
                    None
                }
            }
        };

        Self {
            circle_rect,
            label_rect,
            label_position,
            arrow_path,
            next_button_rect: next_button_rect(&bounds, layout),
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedAdvanceMeasurer;

    fn viewport() -> Rect {
        Rect::new(Point::zero(), Size::new(375.0, 667.0))
    }

    #[test]
    fn same_inputs_give_identical_artifacts() {
        let item = WalkthroughItem::new(
            "Your balance lives here",
            Rect::new(Point::new(40.0, 120.0), Size::new(120.0, 44.0)),
        );
        let dataset = WalkthroughDataset::new(vec![item.clone()]);
        let layout = LayoutConfig::default();
        let measurer = FixedAdvanceMeasurer::default();

        let first = RenderArtifacts::compute(&item, &dataset, &layout, viewport(), &measurer);
        let second = RenderArtifacts::compute(&item, &dataset, &layout, viewport(), &measurer);
        assert_eq!(first, second);
    }

    #[test]
    fn top_target_puts_label_and_arrow_below() {
        let item = WalkthroughItem::new(
            "Menu",
            Rect::new(Point::new(100.0, 80.0), Size::new(40.0, 40.0)),
        );
        let dataset = WalkthroughDataset::new(vec![item.clone()]);
        let layout = LayoutConfig::default();
        let artifacts = RenderArtifacts::compute(
            &item,
            &dataset,
            &layout,
            viewport(),
            &FixedAdvanceMeasurer::default(),
        );

        assert_eq!(artifacts.label_position, LabelPositionOption::BelowSpotlight);
        // circle spans y 40..160, label starts one margin below it
        assert_eq!(artifacts.label_rect.min_y(), 230.0);
        assert!(artifacts.label_rect.height() > 0.0);

        let arrow = artifacts.arrow_path.unwrap();
        let tip = arrow.tip();
        assert!(tip.y < artifacts.label_rect.min_y());
        // stops radius + 2 * arrow_offset away from the circle center
        let clearance = (tip - artifacts.circle_rect.center()).length();
        assert!((clearance - 80.0).abs() < 1e-3);
    }

    #[test]
    fn empty_description_has_no_label_and_no_arrow() {
        let item = WalkthroughItem::new(
            "",
            Rect::new(Point::new(100.0, 300.0), Size::new(40.0, 40.0)),
        );
        let dataset = WalkthroughDataset::new(vec![item.clone()]);
        let artifacts = RenderArtifacts::compute(
            &item,
            &dataset,
            &LayoutConfig::default(),
            viewport(),
            &FixedAdvanceMeasurer::default(),
        );

        assert_eq!(artifacts.label_rect.height(), 0.0);
        assert!(artifacts.label_rect.is_empty());
        assert!(artifacts.arrow_path.is_none());
    }

    #[test]
    fn narrow_viewport_keeps_the_arrow() {
        let item = WalkthroughItem::new(
            "Tap",
            Rect::new(Point::new(10.0, 40.0), Size::new(40.0, 40.0)),
        );
        let dataset = WalkthroughDataset::new(vec![item.clone()]).with_spotlight_radius(20.0);
        let narrow = Rect::new(Point::zero(), Size::new(60.0, 400.0));
        let artifacts = RenderArtifacts::compute(
            &item,
            &dataset,
            &LayoutConfig::default(),
            narrow,
            &FixedAdvanceMeasurer::default(),
        );

        assert_eq!(artifacts.label_rect.width(), 0.0);
        assert!(artifacts.label_rect.height() > 0.0);
        assert!(artifacts.arrow_path.is_some());
    }

    #[test]
    fn next_button_sits_in_bottom_right_corner() {
        let item = WalkthroughItem::new(
            "x",
            Rect::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0)),
        );
        let dataset = WalkthroughDataset::new(vec![item.clone()]);
        let artifacts = RenderArtifacts::compute(
            &item,
            &dataset,
            &LayoutConfig::default(),
            viewport(),
            &FixedAdvanceMeasurer::default(),
        );
        assert_eq!(
            artifacts.next_button_rect,
            Rect::new(Point::new(283.0, 611.0), Size::new(60.0, 24.0))
        );
    }
}
