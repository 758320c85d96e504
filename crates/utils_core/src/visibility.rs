use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use utils_logging::{utils_trace, utils_warn};

/// Anything that can be shown and hidden.
pub trait Visibility {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Calls `obj.show()` when `visible`, otherwise `obj.hide()`.
pub fn set_visibility<T: Visibility + ?Sized>(obj: &mut T, visible: bool) {
    if visible {
        obj.show();
    } else {
        obj.hide();
    }
}

impl<T: Visibility + ?Sized> Visibility for Box<T> {
    fn show(&mut self) {
        (**self).show();
    }

    fn hide(&mut self) {
        (**self).hide();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStyle {
    None,
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
}

impl DisplayStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            DisplayStyle::None => "none",
            DisplayStyle::Block => "block",
            DisplayStyle::Inline => "inline",
            DisplayStyle::InlineBlock => "inline-block",
            DisplayStyle::Flex => "flex",
        }
    }
}

/// A presentational element with a display style.
///
/// Hiding remembers the last visible style so that `show` restores it rather
/// than falling back to a fixed default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    display: DisplayStyle,
    restore_display: DisplayStyle,
}

impl Element {
    pub fn new(id: ElementId, display: DisplayStyle) -> Self {
        let restore_display = match display {
            DisplayStyle::None => DisplayStyle::default(),
            other => other,
        };
        Self {
            id,
            display,
            restore_display,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn display(&self) -> DisplayStyle {
        self.display
    }

    pub fn is_visible(&self) -> bool {
        self.display != DisplayStyle::None
    }
}

impl Visibility for Element {
    fn show(&mut self) {
        self.display = self.restore_display;
        utils_trace!("show {}: display {}", self.id, self.display.as_css());
    }

    fn hide(&mut self) {
        if self.display != DisplayStyle::None {
            self.restore_display = self.display;
        }
        self.display = DisplayStyle::None;
        utils_trace!("hide {}", self.id);
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VisibilityError {
    #[error("no element registered under {0}")]
    UnknownElement(ElementId),
}

/// Visibility targets looked up by id at runtime.
#[derive(Default)]
pub struct ElementRegistry {
    elements: HashMap<ElementId, Box<dyn Visibility>>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `target`, returning any target previously stored under `id`.
    pub fn insert(
        &mut self,
        id: ElementId,
        target: impl Visibility + 'static,
    ) -> Option<Box<dyn Visibility>> {
        self.elements.insert(id, Box::new(target))
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Box<dyn Visibility>> {
        self.elements.remove(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn set_visibility(&mut self, id: ElementId, visible: bool) -> Result<(), VisibilityError> {
        let Some(target) = self.elements.get_mut(&id) else {
            utils_warn!("set_visibility({visible}) on unregistered element {id}");
            return Err(VisibilityError::UnknownElement(id));
        };
        set_visibility(target.as_mut(), visible);
        Ok(())
    }
}

impl fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.elements.keys().copied().collect();
        ids.sort();
        f.debug_struct("ElementRegistry").field("ids", &ids).finish()
    }
}
