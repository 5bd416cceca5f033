/// Group label for retained scene nodes.
///
/// Tags address families of nodes (all hands, all shadows) without holding
/// on to individual ids, so a frame can drop and rebuild one layer while
/// leaving the rest of the scene untouched.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tag(&'static str);

impl Tag {
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        self.0
    }
}
