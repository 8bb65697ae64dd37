//! Skin for a separator control.
//!
//! A separator renders as a thin line inside its content box: as long as the
//! container allows along its orientation axis, and as thin as the line's own
//! styled thickness along the other. This crate models the skin itself plus
//! the minimal collaborators it needs from a host toolkit: an observable
//! separator control, a styleable child region, an alignment-placement
//! primitive, and the size-negotiation contract the host layout system
//! queries.

// public modules
pub mod control;
pub mod layout;
pub mod region;
pub mod skin;
pub mod theme;

// public exports
pub use control::{ChangeFlags, Orientation, Separator, SeparatorProperty};
pub use layout::{place_in_area, HPos, VPos, UNBOUNDED};
pub use region::Region;
pub use skin::{Behavior, SeparatorSkin, Skin, DEFAULT_LENGTH};
pub use theme::{StyleDecl, Theme};

// kurbo reexports
pub use kurbo::{self, Insets, Point, Rect, Size, Vec2};
