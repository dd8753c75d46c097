//! Mount points that rendered content is placed into.
//!
//! A [`MountPoint`] stands for a container owned by the host page. Setting
//! its content replaces whatever was there before, including nested mount
//! points. Nested mount points are declared inside content with a
//! [`slot`] marker and are reachable through [`MountPoint::nested_mut`]
//! until the content is replaced again.
//!
//! [`MemoryMount`] keeps everything in memory and can assemble the final
//! HTML with nested content spliced into the slots.

use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

static SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--mount:([A-Za-z0-9_-]+)-->").expect("Invalid regex: mount slot"));

/// Marker declaring a nested mount point called `id`.
///
/// # Examples
///
/// ```
/// # use seewrite::mount::slot;
/// assert_eq!(slot("visual-section-1"), "<!--mount:visual-section-1-->");
/// ```
pub fn slot(id: &str) -> String {
    format!("<!--mount:{id}-->")
}

/// A container that rendered HTML is mounted into.
pub trait MountPoint: std::fmt::Debug {
    /// Whether the container is still part of the host page.
    fn is_attached(&self) -> bool;

    /// Replaces the content, dropping previous nested mount points and
    /// creating one for every [`slot`] marker in `html`.
    fn set_content(&mut self, html: String);

    /// The nested mount point declared with `id`, if any.
    fn nested_mut(&mut self, id: &str) -> Option<&mut dyn MountPoint>;

    /// The content with all nested content spliced in.
    fn to_html(&self) -> String;
}

/// In-memory [`MountPoint`].
///
/// # Examples
///
/// ```
/// # use seewrite::mount::{slot, MemoryMount, MountPoint};
/// let mut mount = MemoryMount::new();
/// mount.set_content(format!("<section>{}</section>", slot("inner")));
/// mount.nested_mut("inner").unwrap().set_content("<p>hi</p>".to_string());
///
/// assert_eq!(mount.to_html(), "<section><p>hi</p></section>");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryMount {
    attached: bool,
    content: String,
    nested: IndexMap<String, MemoryMount>,
}

impl MemoryMount {
    /// An attached, empty mount point.
    pub fn new() -> Self {
        Self {
            attached: true,
            content: String::new(),
            nested: IndexMap::new(),
        }
    }

    /// A mount point that has been removed from the host page.
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::new()
        }
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// The content exactly as last set, with slot markers in place.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Ids of the nested mount points, in document order.
    pub fn nested_ids(&self) -> impl Iterator<Item = &str> {
        self.nested.keys().map(String::as_str)
    }
}

impl Default for MemoryMount {
    fn default() -> Self {
        Self::new()
    }
}

impl MountPoint for MemoryMount {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn set_content(&mut self, html: String) {
        if !self.attached {
            debug!(bytes = html.len(); "Mount point detached, content dropped");
            return;
        }

        self.nested = SLOT
            .captures_iter(&html)
            .map(|captures| (captures[1].to_string(), MemoryMount::new()))
            .collect();
        self.content = html;
    }

    fn nested_mut(&mut self, id: &str) -> Option<&mut dyn MountPoint> {
        self.nested
            .get_mut(id)
            .map(|mount| mount as &mut dyn MountPoint)
    }

    fn to_html(&self) -> String {
        SLOT.replace_all(&self.content, |captures: &regex::Captures<'_>| {
            self.nested
                .get(&captures[1])
                .map(MountPoint::to_html)
                .unwrap_or_default()
        })
        .into_owned()
    }
}
