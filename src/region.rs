//! Generic rectangular visual nodes.
use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::theme::Theme;

/// A rectangular visual node that can be styled, sized and positioned.
///
/// The appearance itself (stroke, image, whatever the theme declares) is the
/// rendering backend's business; this type only carries the style-class tags
/// used for the lookup, the intrinsic preferred size the styling system
/// computed from the declaration, and the geometry resolved during layout.
pub struct Region {
    style_classes: SmallVec<[String; 2]>,
    intrinsic_size: Size,
    bounds: Rect,
}

impl Region {
    pub fn new() -> Region {
        Region {
            style_classes: SmallVec::new(),
            intrinsic_size: Size::ZERO,
            bounds: Rect::ZERO,
        }
    }

    /// Creates a region tagged with a single style class, with its intrinsic
    /// size resolved from the theme's declaration for that class.
    pub fn styled(class: &str, theme: &Theme) -> Region {
        let mut region = Region::new();
        region.set_style_classes([class]);
        if let Some(size) = theme.declared_size(region.style_classes()) {
            region.intrinsic_size = size;
        }
        region
    }

    /// Replaces the whole style-class list.
    pub fn set_style_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style_classes.clear();
        self.style_classes.extend(classes.into_iter().map(Into::into));
    }

    pub fn style_classes(&self) -> &[String] {
        &self.style_classes
    }

    /// Overrides the intrinsic preferred size, as a styling pass would after
    /// the region's declared appearance changes.
    pub fn set_intrinsic_size(&mut self, size: Size) {
        self.intrinsic_size = size;
    }

    /// Preferred width given a height constraint (`None` = unconstrained).
    /// A plain region's preferred size does not depend on the cross axis.
    pub fn pref_width(&self, _height: Option<f64>) -> f64 {
        self.intrinsic_size.width
    }

    /// Preferred height given a width constraint (`None` = unconstrained).
    pub fn pref_height(&self, _width: Option<f64>) -> f64 {
        self.intrinsic_size.height
    }

    /// Resizes the region in place, keeping its origin. Negative dimensions
    /// clamp to zero.
    pub fn resize(&mut self, width: f64, height: f64) {
        let size = Size::new(width.max(0.0), height.max(0.0));
        self.bounds = Rect::from_origin_size(self.bounds.origin(), size);
    }

    /// Moves the region to the given origin, keeping its size.
    pub fn relocate(&mut self, origin: Point) {
        self.bounds = Rect::from_origin_size(origin, self.bounds.size());
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn size(&self) -> Size {
        self.bounds.size()
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_then_relocate() {
        let mut region = Region::new();
        region.resize(200.0, 2.0);
        region.relocate(Point::new(0.0, 9.0));
        assert_eq!(region.bounds(), Rect::new(0.0, 9.0, 200.0, 11.0));
    }

    #[test]
    fn negative_sizes_clamp_to_zero() {
        let mut region = Region::new();
        region.resize(-5.0, 3.0);
        assert_eq!(region.size(), Size::new(0.0, 3.0));
    }

    #[test]
    fn styled_region_picks_up_declared_size() {
        let mut theme = Theme::default();
        theme.declare("line", 2.0, 2.0);
        let region = Region::styled("line", &theme);
        assert_eq!(region.style_classes(), ["line".to_owned()]);
        assert_eq!(region.pref_width(None), 2.0);
        assert_eq!(region.pref_height(Some(100.0)), 2.0);
    }
}
