use super::{DrawCmd, SortKey, Tag};

/// Stable handle to a retained scene node.
///
/// Ids are never reused within a `Scene`, so a stale handle after a
/// `remove_tagged` simply stops resolving instead of aliasing a new node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u64);

/// A single retained node: identity + group tag + sort key + draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub tag: Tag,
    pub key: SortKey,
    pub cmd: DrawCmd,
}
