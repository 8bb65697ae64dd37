//! The separator control: observed properties and layout invalidation.
use std::{
    cell::{Cell, RefCell},
    fmt,
    str::FromStr,
};

use bitflags::bitflags;
use kurbo::Insets;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::layout::{HPos, VPos};

/// Axis along which the separator's line runs.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Error returned when parsing an orientation keyword fails.
#[derive(Debug, Error)]
#[error("unrecognized orientation `{0}`")]
pub struct ParseOrientationError(String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(ParseOrientationError(s.to_owned())),
        }
    }
}

/// Which observed property of the control changed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SeparatorProperty {
    Orientation,
    HAlignment,
    VAlignment,
}

bitflags! {
    /// Pending invalidation on a control, accumulated between host passes.
    ///
    /// The control only records what is dirty; the host's invalidation
    /// system decides when the corresponding pass runs and clears the flag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChangeFlags: u32 {
        /// A layout pass is pending.
        const LAYOUT = 1 << 0;
        /// A repaint is pending.
        const PAINT = 1 << 1;
    }
}

type ChangeListener = Box<dyn Fn(&Separator, SeparatorProperty)>;

/// The separator control.
///
/// Holds the three properties the skin observes (orientation and the two
/// alignments) plus the control's padding. Property state lives in `Cell`s
/// so the control can be shared behind `Rc` between the host and its skin;
/// everything is single-threaded and synchronous.
pub struct Separator {
    orientation: Cell<Orientation>,
    halignment: Cell<HPos>,
    valignment: Cell<VPos>,
    padding: Cell<Insets>,
    pending: Cell<ChangeFlags>,
    listeners: RefCell<Vec<ChangeListener>>,
}

impl Separator {
    pub fn new(orientation: Orientation) -> Separator {
        Separator {
            orientation: Cell::new(orientation),
            halignment: Cell::new(HPos::Center),
            valignment: Cell::new(VPos::Center),
            padding: Cell::new(Insets::ZERO),
            pending: Cell::new(ChangeFlags::empty()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation.get()
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        if self.orientation.replace(orientation) != orientation {
            self.notify(SeparatorProperty::Orientation);
        }
    }

    pub fn halignment(&self) -> HPos {
        self.halignment.get()
    }

    pub fn set_halignment(&self, halignment: HPos) {
        if self.halignment.replace(halignment) != halignment {
            self.notify(SeparatorProperty::HAlignment);
        }
    }

    pub fn valignment(&self) -> VPos {
        self.valignment.get()
    }

    pub fn set_valignment(&self, valignment: VPos) {
        if self.valignment.replace(valignment) != valignment {
            self.notify(SeparatorProperty::VAlignment);
        }
    }

    pub fn padding(&self) -> Insets {
        self.padding.get()
    }

    /// Sets the edge insets excluded from the control's content box.
    /// Padding is not an observed property, but changing it still
    /// invalidates layout.
    pub fn set_padding(&self, padding: Insets) {
        self.padding.set(padding);
        self.request_layout();
    }

    /// Subscribes to change notifications for the observed properties.
    ///
    /// Listeners run synchronously on the caller's thread, in registration
    /// order, and must not register further listeners from inside the
    /// callback.
    pub fn register_change_listener(&self, listener: impl Fn(&Separator, SeparatorProperty) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self, property: SeparatorProperty) {
        trace!(?property, "separator property changed");
        for listener in self.listeners.borrow().iter() {
            listener(self, property);
        }
    }

    /// Marks the control as needing a new layout pass.
    ///
    /// This is a flag, not a queue: any number of requests before the next
    /// pass collapse into a single pending layout.
    pub fn request_layout(&self) {
        self.invalidate(ChangeFlags::LAYOUT);
    }

    pub fn invalidate(&self, flags: ChangeFlags) {
        self.pending.set(self.pending.get() | flags);
    }

    pub fn pending_changes(&self) -> ChangeFlags {
        self.pending.get()
    }

    pub fn layout_requested(&self) -> bool {
        self.pending.get().contains(ChangeFlags::LAYOUT)
    }

    /// Called by the host once it has run a layout pass.
    pub fn clear_layout_request(&self) {
        self.pending.set(self.pending.get() - ChangeFlags::LAYOUT);
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::new(Orientation::Horizontal)
    }
}

impl fmt::Debug for Separator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Separator")
            .field("orientation", &self.orientation.get())
            .field("halignment", &self.halignment.get())
            .field("valignment", &self.valignment.get())
            .field("padding", &self.padding.get())
            .field("pending", &self.pending.get())
            .finish_non_exhaustive()
    }
}
