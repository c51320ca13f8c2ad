//! Graphics boundary — the drawable-group operations the layout core issues.
//!
//! The core never draws glyphs. It asks a [`Canvas`] for one nested group per
//! system, measure and cell, tags each group with a class name used purely for
//! styling/selection, and translates measure (and system) groups.

mod svg_builder;

pub use svg_builder::SvgCanvas;

use serde::Serialize;

/// Handle to a group created by a [`Canvas`].
///
/// A handle is only meaningful on the canvas that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GroupId(usize);

impl GroupId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Class tag attached to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupClass {
    System,
    Measure,
    Cell,
}

impl GroupClass {
    pub fn css_class(self) -> &'static str {
        match self {
            GroupClass::System => "mus-system",
            GroupClass::Measure => "mus-measure",
            GroupClass::Cell => "mus-cell",
        }
    }
}

/// Drawable-group operations required by the layout core.
pub trait Canvas {
    /// Create a group as the last child of `parent` (or at the top level).
    fn group(&mut self, parent: Option<GroupId>, class: GroupClass) -> GroupId;

    /// Parent of `group`, or `None` for top-level or unknown groups.
    fn parent(&self, group: GroupId) -> Option<GroupId>;

    /// Class tag of `group`, or `None` when the canvas has no such group.
    fn class_of(&self, group: GroupId) -> Option<GroupClass>;

    /// Set the group's transform to a pure translation, replacing any earlier one.
    fn translate(&mut self, group: GroupId, x: f64, y: f64);

    /// Remove every primitive drawn into `group` (child groups are kept).
    fn clear(&mut self, group: GroupId);

    /// Draw an unfilled rectangle into `group`, in the group's coordinates.
    fn rect(&mut self, group: GroupId, x: f64, y: f64, width: f64, height: f64);
}

/// Return `existing` when it is still a child of `parent`, else create a new group.
pub(crate) fn reuse_or_create(
    canvas: &mut dyn Canvas,
    existing: Option<GroupId>,
    parent: Option<GroupId>,
    class: GroupClass,
) -> GroupId {
    match existing {
        Some(g) if canvas.class_of(g) == Some(class) && canvas.parent(g) == parent => g,
        _ => canvas.group(parent, class),
    }
}
