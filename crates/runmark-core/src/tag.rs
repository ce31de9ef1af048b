//! Inline formatting tag vocabulary.
//!
//! This module defines the fixed set of inline formatting tags and a compact
//! set type over them. The declaration order of [`Tag`] doubles as the order
//! in which the reconciler opens tags, so it is part of the output contract.

/// An inline formatting tag.
///
/// Each variant maps 1:1 to a lowercase markup element name via [`Tag::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Bold,
    Italic,
    Strike,
    Underline,
    Superscript,
    Subscript,
}

impl Tag {
    /// All tags in declaration order.
    ///
    /// DON'T reorder: this is the order in which tags are (re)opened on the
    /// output stream, and downstream consumers depend on it being stable.
    pub const ALL: [Tag; 6] = [
        Tag::Bold,
        Tag::Italic,
        Tag::Strike,
        Tag::Underline,
        Tag::Superscript,
        Tag::Subscript,
    ];

    /// The markup element name for this tag.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Bold => "b",
            Tag::Italic => "i",
            Tag::Strike => "s",
            Tag::Underline => "u",
            Tag::Superscript => "sup",
            Tag::Subscript => "sub",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// An unordered set of [`Tag`] values.
///
/// Backed by a bitmask over the six variants. Iteration always walks
/// [`Tag::ALL`], so the order tags come out is the declaration order, never
/// the insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagSet(u8);

impl TagSet {
    const FULL: u8 = 0b0011_1111;

    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set containing every tag.
    pub const fn all() -> Self {
        Self(Self::FULL)
    }

    pub fn insert(&mut self, tag: Tag) {
        self.0 |= tag.bit();
    }

    pub fn remove(&mut self, tag: Tag) {
        self.0 &= !tag.bit();
    }

    pub fn contains(self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Every tag *not* in this set.
    pub fn complement(self) -> Self {
        Self(!self.0 & Self::FULL)
    }

    /// Tags in `self` that are not in `other`.
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Whether `self` and `other` share at least one tag.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterate the contained tags in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = Self::empty();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<const N: usize> From<[Tag; N]> for TagSet {
    fn from(tags: [Tag; N]) -> Self {
        tags.into_iter().collect()
    }
}
