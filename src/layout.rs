//! Types and functions used for layouting the skin's child regions.
use std::str::FromStr;

use kurbo::{Insets, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel for "no maximum size" in max-size queries.
///
/// Infinity is absorbing under inset addition, so `UNBOUNDED + insets`
/// stays unbounded instead of silently overflowing a large finite value.
pub const UNBOUNDED: f64 = f64::INFINITY;

/// Horizontal alignment of content within an area.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HPos {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical alignment of content within an area.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VPos {
    Top,
    #[default]
    Center,
    Bottom,
}

impl HPos {
    /// Relative position of the content along the axis (0 = start, 1 = end).
    fn factor(self) -> f64 {
        match self {
            HPos::Left => 0.0,
            HPos::Center => 0.5,
            HPos::Right => 1.0,
        }
    }
}

impl VPos {
    fn factor(self) -> f64 {
        match self {
            VPos::Top => 0.0,
            VPos::Center => 0.5,
            VPos::Bottom => 1.0,
        }
    }
}

/// Error returned when parsing an alignment keyword fails.
#[derive(Debug, Error)]
#[error("unrecognized alignment `{0}`")]
pub struct ParseAlignmentError(String);

impl FromStr for HPos {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(HPos::Left),
            "center" => Ok(HPos::Center),
            "right" => Ok(HPos::Right),
            _ => Err(ParseAlignmentError(s.to_owned())),
        }
    }
}

impl FromStr for VPos {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(VPos::Top),
            "center" => Ok(VPos::Center),
            "bottom" => Ok(VPos::Bottom),
            _ => Err(ParseAlignmentError(s.to_owned())),
        }
    }
}

/// Places content inside a containing area with the given measurements.
///
/// The margin is excluded from the placeable space on each edge. Content
/// larger than the remaining space anchors at the start edge rather than
/// overflowing towards negative coordinates.
///
/// Returns the origin of the content box.
pub fn place_in_area(content: Size, area: Rect, margin: Insets, halign: HPos, valign: VPos) -> Point {
    let free_x = (area.width() - margin.x_value() - content.width).max(0.0);
    let free_y = (area.height() - margin.y_value() - content.height).max(0.0);
    let x = area.x0 + margin.x0 + halign.factor() * free_x;
    let y = area.y0 + margin.y0 + valign.factor() * free_y;
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_centered() {
        let origin = place_in_area(
            Size::new(200.0, 2.0),
            Rect::new(0.0, 0.0, 200.0, 20.0),
            Insets::ZERO,
            HPos::Center,
            VPos::Center,
        );
        assert_eq!(origin, Point::new(0.0, 9.0));
    }

    #[test]
    fn place_corners() {
        let content = Size::new(2.0, 10.0);
        let area = Rect::new(5.0, 5.0, 25.0, 25.0);
        let top_left = place_in_area(content, area, Insets::ZERO, HPos::Left, VPos::Top);
        assert_eq!(top_left, Point::new(5.0, 5.0));
        let bottom_right = place_in_area(content, area, Insets::ZERO, HPos::Right, VPos::Bottom);
        assert_eq!(bottom_right, Point::new(23.0, 15.0));
    }

    #[test]
    fn place_honors_margin() {
        let origin = place_in_area(
            Size::new(4.0, 4.0),
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Insets::new(2.0, 1.0, 2.0, 1.0),
            HPos::Left,
            VPos::Top,
        );
        assert_eq!(origin, Point::new(2.0, 1.0));
    }

    #[test]
    fn oversized_content_anchors_at_start() {
        let origin = place_in_area(
            Size::new(50.0, 50.0),
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Insets::ZERO,
            HPos::Right,
            VPos::Bottom,
        );
        // no free space left, so the end alignment degenerates to the origin
        assert_eq!(origin, Point::new(0.0, 0.0));
    }

    #[test]
    fn parse_alignments() {
        assert_eq!("Left".parse::<HPos>().unwrap(), HPos::Left);
        assert_eq!("bottom".parse::<VPos>().unwrap(), VPos::Bottom);
        assert!("middle".parse::<HPos>().is_err());
    }
}
