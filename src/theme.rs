//! Minimal style source for regions.
//!
//! Full CSS resolution belongs to a host toolkit; this is only the channel
//! by which a declared appearance's intrinsic size reaches a [`Region`].
//!
//! [`Region`]: crate::region::Region
use std::collections::HashMap;

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Intrinsic size declared for a style class.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleDecl {
    pub width: f64,
    pub height: f64,
}

impl StyleDecl {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Maps style-class names to the intrinsic size of their declared appearance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    declarations: HashMap<String, StyleDecl>,
}

impl Theme {
    /// An empty theme with no declarations.
    pub fn empty() -> Theme {
        Theme {
            declarations: HashMap::new(),
        }
    }

    pub fn declare(&mut self, class: impl Into<String>, width: f64, height: f64) {
        self.declarations.insert(class.into(), StyleDecl { width, height });
    }

    /// Resolves the declared size for a node's style-class list; the first
    /// class with a declaration wins.
    pub fn declared_size(&self, classes: &[String]) -> Option<Size> {
        classes
            .iter()
            .find_map(|class| self.declarations.get(class))
            .map(StyleDecl::size)
    }
}

impl Default for Theme {
    /// The built-in theme: a plain one-pixel hairline for the `"line"` class.
    fn default() -> Self {
        let mut theme = Theme::empty();
        theme.declare("line", 1.0, 1.0);
        theme
    }
}
