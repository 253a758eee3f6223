use euclid::{Point2D, Transform2D};

use crate::error::GeometryError;

use super::{ArrowSpace, LabelPositionOption, Point, Rect, ViewportSpace};

/// Thickness and head size of the arrow polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowDimensions {
    pub tail_width: f32,
    pub head_width: f32,
    pub head_length: f32,
}

impl ArrowDimensions {
    /// Arrow proportioned to the spotlight ring: half as thick in the tail,
    /// twice as wide and long in the head.
    pub fn from_border_width(border_width: f32) -> Self {
        Self {
            tail_width: border_width / 2.0,
            head_width: border_width * 2.0,
            head_length: border_width * 2.0,
        }
    }
}

/// Start and tip of the arrow in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowEndpoints {
    pub start: Point,
    pub end: Point,
}

/// Closed 7-vertex arrow outline in viewport coordinates.
///
/// Vertices run tail-top, shoulder-top, barb-top, tip, barb-bottom,
/// shoulder-bottom, tail-bottom. The closing edge from the last vertex back
/// to the first is implied.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowPath {
    points: [Point; 7],
}

impl ArrowPath {
    pub const VERTEX_COUNT: usize = 7;

    /// Vertices in drawing order, starting at the tail.
    pub fn points(&self) -> &[Point; 7] {
        &self.points
    }

    /// The vertex the arrow points at.
    pub fn tip(&self) -> Point {
        self.points[3]
    }

    /// Vertices with the first one repeated at the end.
    pub fn closed(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().chain(self.points.first()).copied()
    }

    /// Even-odd containment test, matching how the outline is filled.
    pub fn contains(&self, point: Point) -> bool {
        let mut inside = false;
        let mut prev = self.points[Self::VERTEX_COUNT - 1];
        for &current in &self.points {
            if (current.y > point.y) != (prev.y > point.y) {
                let cross_x =
                    current.x + (point.y - current.y) * (prev.x - current.x) / (prev.y - current.y);
                if point.x < cross_x {
                    inside = !inside;
                }
            }
            prev = current;
        }
        inside
    }
}

/// Builds the arrow outline from `start` to `end`.
///
/// The outline is first laid out along the positive x-axis of the arrow's own
/// frame and then rotated and translated onto the `start -> end` segment. The
/// head is clamped to the arrow length so a very short arrow is all head.
pub fn arrow_path(
    start: Point,
    end: Point,
    dimensions: &ArrowDimensions,
) -> Result<ArrowPath, GeometryError> {
    let delta = end - start;
    let length = delta.length();
    if !length.is_finite() || length <= f32::EPSILON {
        return Err(GeometryError::DegenerateArrow {
            x: start.x,
            y: start.y,
        });
    }

    let head_length = dimensions.head_length.clamp(0.0, length);
    let tail_length = length - head_length;
    let half_tail = dimensions.tail_width / 2.0;
    let half_head = dimensions.head_width / 2.0;

    let local: [Point2D<f32, ArrowSpace>; 7] = [
        Point2D::new(0.0, half_tail),
        Point2D::new(tail_length, half_tail),
        Point2D::new(tail_length, half_head),
        Point2D::new(length, 0.0),
        Point2D::new(tail_length, -half_head),
        Point2D::new(tail_length, -half_tail),
        Point2D::new(0.0, -half_tail),
    ];

    let cos = delta.x / length;
    let sin = delta.y / length;
    let transform: Transform2D<f32, ArrowSpace, ViewportSpace> =
        Transform2D::new(cos, sin, -sin, cos, start.x, start.y);

    Ok(ArrowPath {
        points: local.map(|point| transform.transform_point(point)),
    })
}

/// Routes the arrow from the label edge facing the spotlight toward the
/// circle center.
///
/// The tip stops `2 * arrow_offset` short of the circle edge. When the start
/// is already that close to the circle the arrow collapses to zero length at
/// the start point rather than flipping direction.
pub fn arrow_endpoints(
    label_rect: &Rect,
    circle_center: Point,
    circle_radius: f32,
    label_position: LabelPositionOption,
    arrow_offset: f32,
) -> ArrowEndpoints {
    let start_y = match label_position {
        LabelPositionOption::AboveSpotlight => label_rect.max_y() + arrow_offset,
        LabelPositionOption::BelowSpotlight => label_rect.min_y() - arrow_offset,
    };
    let start = Point::new(label_rect.center().x, start_y);

    let delta = circle_center - start;
    let distance = delta.length();
    if distance <= f32::EPSILON {
        return ArrowEndpoints { start, end: start };
    }

    let ratio = ((distance - circle_radius - 2.0 * arrow_offset) / distance).max(0.0);
    ArrowEndpoints {
        start,
        end: start + delta * ratio,
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn assert_point_close(actual: Point, expected: (f32, f32)) {
        assert!(
            (actual.x - expected.0).abs() < 1e-4 && (actual.y - expected.1).abs() < 1e-4,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn dims() -> ArrowDimensions {
        ArrowDimensions {
            tail_width: 2.0,
            head_width: 8.0,
            head_length: 8.0,
        }
    }

    #[test]
    fn horizontal_arrow_matches_local_outline() {
        let path = arrow_path(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &dims()).unwrap();
        let expected = [
            (0.0, 1.0),
            (2.0, 1.0),
            (2.0, 4.0),
            (10.0, 0.0),
            (2.0, -4.0),
            (2.0, -1.0),
            (0.0, -1.0),
        ];
        for (actual, expected) in path.points().iter().zip(expected) {
            assert_point_close(*actual, expected);
        }
    }

    #[test]
    fn downward_arrow_is_rotated_and_translated() {
        let path = arrow_path(Point::new(5.0, 5.0), Point::new(5.0, 25.0), &dims()).unwrap();
        assert_point_close(path.tip(), (5.0, 25.0));
        // local (0, +1) maps to viewport (-1, 0) relative to the start
        assert_point_close(path.points()[0], (4.0, 5.0));
        assert_point_close(path.points()[2], (1.0, 17.0));
        assert_point_close(path.points()[4], (9.0, 17.0));
    }

    #[test]
    fn polygon_has_seven_vertices_and_closes() {
        let path = arrow_path(Point::new(3.0, 7.0), Point::new(40.0, -12.0), &dims()).unwrap();
        assert_eq!(path.points().len(), ArrowPath::VERTEX_COUNT);

        let closed: Vec<_> = path.closed().collect();
        assert_eq!(closed.len(), 8);
        assert_eq!(closed.first(), closed.last());
    }

    #[test]
    fn zero_length_arrow_is_rejected() {
        let err = arrow_path(Point::new(4.0, 4.0), Point::new(4.0, 4.0), &dims()).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateArrow { x: 4.0, y: 4.0 });
    }

    #[test]
    fn short_arrow_is_all_head() {
        let path = arrow_path(Point::new(0.0, 0.0), Point::new(5.0, 0.0), &dims()).unwrap();
        assert_point_close(path.points()[1], (0.0, 1.0));
        assert_point_close(path.tip(), (5.0, 0.0));
    }

    #[test]
    fn contains_covers_shaft_and_head_only() {
        let path = arrow_path(Point::new(0.0, 0.0), Point::new(20.0, 0.0), &dims()).unwrap();
        assert!(path.contains(Point::new(5.0, 0.0)));
        assert!(path.contains(Point::new(15.0, 2.0)));
        assert!(!path.contains(Point::new(5.0, 3.0)));
        assert!(!path.contains(Point::new(25.0, 0.0)));
        assert!(!path.contains(Point::new(-1.0, 0.0)));
    }

    #[test]
    fn dimensions_follow_border_width() {
        let dims = ArrowDimensions::from_border_width(4.0);
        assert_eq!(dims.tail_width, 2.0);
        assert_eq!(dims.head_width, 8.0);
        assert_eq!(dims.head_length, 8.0);
    }

    #[test]
    fn endpoints_from_label_above_point_down() {
        let label = Rect::new(Point::new(32.0, 100.0), Size::new(311.0, 40.0));
        let endpoints = arrow_endpoints(
            &label,
            Point::new(187.5, 400.0),
            60.0,
            LabelPositionOption::AboveSpotlight,
            10.0,
        );
        assert_point_close(endpoints.start, (187.5, 150.0));
        assert_point_close(endpoints.end, (187.5, 320.0));
    }

    #[test]
    fn endpoints_from_label_below_point_up() {
        let label = Rect::new(Point::new(32.0, 300.0), Size::new(311.0, 40.0));
        let endpoints = arrow_endpoints(
            &label,
            Point::new(187.5, 100.0),
            60.0,
            LabelPositionOption::BelowSpotlight,
            10.0,
        );
        assert_point_close(endpoints.start, (187.5, 290.0));
        assert_point_close(endpoints.end, (187.5, 180.0));
    }

    #[test]
    fn start_inside_clearance_collapses_instead_of_inverting() {
        let label = Rect::new(Point::new(32.0, 100.0), Size::new(311.0, 40.0));
        let endpoints = arrow_endpoints(
            &label,
            Point::new(187.5, 170.0),
            60.0,
            LabelPositionOption::AboveSpotlight,
            10.0,
        );
        assert_eq!(endpoints.start, endpoints.end);
        assert!(arrow_path(endpoints.start, endpoints.end, &dims()).is_err());
    }
}
