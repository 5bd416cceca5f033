use super::{DrawCmd, Node, NodeId, SortKey, Tag, ZIndex};

/// Retained draw graph.
///
/// Nodes persist across frames until explicitly removed, which lets a
/// renderer keep static layers (background, captions) alive while swapping
/// out dynamic groups by tag each tick.
///
/// Performance characteristics:
/// - `append()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    next_id: u64,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node with the given tag and z-index, returning its id.
    pub fn append(&mut self, tag: Tag, z: ZIndex, cmd: DrawCmd) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.nodes.push(Node { id, tag, key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
        id
    }

    /// Removes every node carrying `tag`. Returns the number removed.
    pub fn remove_tagged(&mut self, tag: Tag) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.tag != tag);

        let removed = before - self.nodes.len();
        if removed > 0 {
            self.sorted_dirty = true;
        }
        removed
    }

    /// Counts nodes carrying `tag`.
    pub fn count_tagged(&self, tag: Tag) -> usize {
        self.nodes.iter().filter(|n| n.tag == tag).count()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Returns the string payload of a text node, if `id` resolves to one.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.cmd {
            DrawCmd::Text(t) => Some(t.text.as_str()),
            _ => None,
        }
    }

    /// Replaces the string payload of a text node.
    ///
    /// Returns `false` if `id` no longer resolves or is not a text node.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        match &mut node.cmd {
            DrawCmd::Text(t) => {
                t.text = text.into();
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns nodes in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterates nodes in paint order (back-to-front).
    ///
    /// The index buffer is owned by `Scene` and reused across calls.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &Node> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.nodes[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.nodes.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.nodes[a].key.cmp(&self.nodes[b].key));

        self.sorted_dirty = false;
    }
}
