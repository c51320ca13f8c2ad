//! SVG builder — accumulates nested groups and produces the final string.

use super::{Canvas, GroupClass, GroupId};
use crate::constants::{BORDER_COLOR, BORDER_WIDTH};

// ═══════════════════════════════════════════════════════════════════════
// SvgCanvas
// ═══════════════════════════════════════════════════════════════════════

enum Item {
    Element(String),
    Group(GroupId),
}

struct Group {
    parent: Option<GroupId>,
    class: GroupClass,
    translate: Option<(f64, f64)>,
    items: Vec<Item>,
}

/// [`Canvas`] that renders its group tree as SVG markup.
pub struct SvgCanvas {
    groups: Vec<Group>,
    roots: Vec<GroupId>,
    width: f64,
    height: f64,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            groups: Vec::new(),
            roots: Vec::new(),
            width,
            height,
        }
    }

    /// Resize the viewport; used once the layout knows its total height.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of groups tagged with `class`.
    pub fn count_class(&self, class: GroupClass) -> usize {
        self.groups.iter().filter(|g| g.class == class).count()
    }

    /// Children of `group` that are groups themselves, in document order.
    pub fn child_groups(&self, group: GroupId) -> Vec<GroupId> {
        self.groups
            .get(group.index())
            .map(|g| {
                g.items
                    .iter()
                    .filter_map(|item| match item {
                        Item::Group(id) => Some(*id),
                        Item::Element(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Translation currently applied to `group`, if any.
    pub fn translation(&self, group: GroupId) -> Option<(f64, f64)> {
        self.groups.get(group.index()).and_then(|g| g.translate)
    }

    pub fn build(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            self.width, self.height
        ));
        svg.push('\n');
        for &root in &self.roots {
            self.write_group(&mut svg, root, 1);
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn write_group(&self, svg: &mut String, id: GroupId, depth: usize) {
        let Some(group) = self.groups.get(id.index()) else {
            return;
        };
        let indent = "  ".repeat(depth);
        svg.push_str(&indent);
        match group.translate {
            Some((x, y)) => svg.push_str(&format!(
                r#"<g class="{}" transform="translate({:.2},{:.2})">"#,
                group.class.css_class(),
                x,
                y
            )),
            None => svg.push_str(&format!(r#"<g class="{}">"#, group.class.css_class())),
        }
        svg.push('\n');
        for item in &group.items {
            match item {
                Item::Element(el) => {
                    svg.push_str(&indent);
                    svg.push_str("  ");
                    svg.push_str(el);
                    svg.push('\n');
                }
                Item::Group(child) => self.write_group(svg, *child, depth + 1),
            }
        }
        svg.push_str(&indent);
        svg.push_str("</g>\n");
    }
}

impl Canvas for SvgCanvas {
    fn group(&mut self, parent: Option<GroupId>, class: GroupClass) -> GroupId {
        let id = GroupId::new(self.groups.len());
        // An unknown parent falls back to the top level.
        let parent = parent.filter(|p| p.index() < self.groups.len());
        self.groups.push(Group {
            parent,
            class,
            translate: None,
            items: Vec::new(),
        });
        match parent {
            Some(p) => self.groups[p.index()].items.push(Item::Group(id)),
            None => self.roots.push(id),
        }
        id
    }

    fn parent(&self, group: GroupId) -> Option<GroupId> {
        self.groups.get(group.index()).and_then(|g| g.parent)
    }

    fn class_of(&self, group: GroupId) -> Option<GroupClass> {
        self.groups.get(group.index()).map(|g| g.class)
    }

    fn translate(&mut self, group: GroupId, x: f64, y: f64) {
        if let Some(g) = self.groups.get_mut(group.index()) {
            g.translate = Some((x, y));
        }
    }

    fn clear(&mut self, group: GroupId) {
        if let Some(g) = self.groups.get_mut(group.index()) {
            g.items.retain(|item| matches!(item, Item::Group(_)));
        }
    }

    fn rect(&mut self, group: GroupId, x: f64, y: f64, width: f64, height: f64) {
        if let Some(g) = self.groups.get_mut(group.index()) {
            g.items.push(Item::Element(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
                x, y, width, height, BORDER_COLOR, BORDER_WIDTH
            )));
        }
    }
}
