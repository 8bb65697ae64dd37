//! Skin for the separator control.
use std::rc::Rc;

use kurbo::{Insets, Rect};
use tracing::trace;

use crate::{
    control::{Orientation, Separator, SeparatorProperty},
    layout::{place_in_area, UNBOUNDED},
    region::Region,
    theme::Theme,
};

/// Separators have no intrinsic length, so we need to hard code some sort of
/// default preferred size when a separator is not otherwise being resized.
/// This is the length to report (height when vertical, width when
/// horizontal) for unconstrained preferred-size queries.
pub const DEFAULT_LENGTH: f64 = 10.0;

/// Interactive behavior attached to a skin.
///
/// A separator has no user interaction, so [`SeparatorSkin`] reports no
/// behavior at all rather than carrying a no-op placeholder.
pub trait Behavior {
    fn dispose(&mut self) {}
}

/// The fixed contract between a skin and the host layout system.
///
/// Size queries take the cross-axis dimension (`None` when the host imposes
/// no constraint) plus the control's four edge insets, and return a
/// non-negative dimension ([`UNBOUNDED`] for unlimited max queries). The
/// layout pass receives the content box with insets already excluded.
pub trait Skin {
    fn compute_min_width(&self, height: Option<f64>, insets: Insets) -> f64;
    fn compute_min_height(&self, width: Option<f64>, insets: Insets) -> f64;
    fn compute_pref_width(&self, height: Option<f64>, insets: Insets) -> f64;
    fn compute_pref_height(&self, width: Option<f64>, insets: Insets) -> f64;
    fn compute_max_width(&self, height: Option<f64>, insets: Insets) -> f64;
    fn compute_max_height(&self, width: Option<f64>, insets: Insets) -> f64;

    /// Distance from the top of the content to its text baseline. Skins
    /// without text sit the baseline on their bottom edge.
    fn compute_baseline_offset(&self, width: Option<f64>, insets: Insets) -> f64 {
        self.compute_pref_height(width, insets)
    }

    /// Sizes and positions the skin's children within the content box
    /// `(x, y, w, h)`.
    fn layout_children(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn behavior(&self) -> Option<&dyn Behavior> {
        None
    }
}

/// Skin rendering a separator as a single thin line region.
///
/// The line is as long as the separator's content box along the orientation
/// axis and as thin as its own preferred size along the other; alignment
/// decides where the leftover cross-axis space goes. The line's appearance is
/// declared in the theme under the `"line"` style class, so it can be a
/// stroke, an image, anything the host's renderer supports.
pub struct SeparatorSkin {
    control: Rc<Separator>,
    line: Region,
}

impl SeparatorSkin {
    /// Creates the skin with the built-in theme.
    pub fn new(control: Rc<Separator>) -> SeparatorSkin {
        SeparatorSkin::with_theme(control, &Theme::default())
    }

    /// Creates the skin, resolving the line's intrinsic size from `theme`.
    ///
    /// The skin owns exactly one line region, created here and never
    /// replaced. A change to any of the observed properties only requests a
    /// layout pass; geometry is recomputed lazily from the property values
    /// current when the host runs [`Skin::layout_children`].
    pub fn with_theme(control: Rc<Separator>, theme: &Theme) -> SeparatorSkin {
        let line = Region::styled("line", theme);
        control.register_change_listener(|control, property| match property {
            SeparatorProperty::Orientation
            | SeparatorProperty::HAlignment
            | SeparatorProperty::VAlignment => control.request_layout(),
        });
        SeparatorSkin { control, line }
    }

    pub fn control(&self) -> &Separator {
        &self.control
    }

    pub fn line(&self) -> &Region {
        &self.line
    }

    /// Mutable access to the line, for the host's styling pass.
    pub fn line_mut(&mut self) -> &mut Region {
        &mut self.line
    }
}

impl Skin for SeparatorSkin {
    // There is no independent minimum policy: min equals pref on both axes.
    fn compute_min_width(&self, height: Option<f64>, insets: Insets) -> f64 {
        self.compute_pref_width(height, insets)
    }

    fn compute_min_height(&self, width: Option<f64>, insets: Insets) -> f64 {
        self.compute_pref_height(width, insets)
    }

    fn compute_pref_width(&self, _height: Option<f64>, insets: Insets) -> f64 {
        let w = match self.control.orientation() {
            Orientation::Vertical => self.line.pref_width(None),
            Orientation::Horizontal => DEFAULT_LENGTH,
        };
        w + insets.x_value()
    }

    fn compute_pref_height(&self, _width: Option<f64>, insets: Insets) -> f64 {
        let h = match self.control.orientation() {
            Orientation::Vertical => DEFAULT_LENGTH,
            Orientation::Horizontal => self.line.pref_height(None),
        };
        h + insets.y_value()
    }

    fn compute_max_width(&self, height: Option<f64>, insets: Insets) -> f64 {
        // A vertical separator cannot grow wider than its preferred
        // thickness. The control's preferred width is answered by this very
        // skin, so delegate directly instead of round-tripping through the
        // control.
        match self.control.orientation() {
            Orientation::Vertical => self.compute_pref_width(height, insets),
            Orientation::Horizontal => UNBOUNDED,
        }
    }

    fn compute_max_height(&self, width: Option<f64>, insets: Insets) -> f64 {
        match self.control.orientation() {
            Orientation::Vertical => UNBOUNDED,
            Orientation::Horizontal => self.compute_pref_height(width, insets),
        }
    }

    /// The line of a horizontal separator is as wide as the content box but
    /// as thin as its own pref height; a vertical separator is the converse.
    /// Once sized, the line is placed in the content box honoring the
    /// control's alignment properties, with no extra margin.
    fn layout_children(&mut self, x: f64, y: f64, w: f64, h: f64) {
        match self.control.orientation() {
            Orientation::Horizontal => {
                let thickness = self.line.pref_height(None);
                self.line.resize(w, thickness);
            }
            Orientation::Vertical => {
                let thickness = self.line.pref_width(None);
                self.line.resize(thickness, h);
            }
        }

        let area = Rect::new(x, y, x + w, y + h);
        let origin = place_in_area(
            self.line.size(),
            area,
            Insets::ZERO,
            self.control.halignment(),
            self.control.valignment(),
        );
        self.line.relocate(origin);
        trace!(x, y, w, h, bounds = ?self.line.bounds(), "laid out separator line");
    }
}
