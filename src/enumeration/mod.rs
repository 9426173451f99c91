mod define;

use crate::underlying::Underlying;
use std::fmt;

/// An integer-backed enumerated type with a fixed table of named members.
///
/// Implementations are normally generated with [`define_enum!`](crate::define_enum) or
/// [`define_flags!`](crate::define_flags). Implementors must be able to hold any value of their
/// [`Underlying`](Enumeration::Underlying) type, not only the declared members, so that undefined
/// values and flag combinations survive a round trip.
pub trait Enumeration: Copy + Eq + fmt::Debug + 'static {
    /// The declared backing integer type.
    type Underlying: Underlying;

    /// Name of the type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Whether bitwise combinations of members are considered defined.
    const FLAGS: bool;

    /// Declared members, in declaration order.
    const MEMBERS: &'static [Member<Self>];

    fn from_underlying(value: Self::Underlying) -> Self;

    fn to_underlying(self) -> Self::Underlying;
}

/// A named member of an [`Enumeration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member<E> {
    name: &'static str,
    value: E,
}

impl<E> Member<E> {
    pub const fn new(name: &'static str, value: E) -> Self {
        Self { name, value }
    }

    /// The declared name of the member.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: Enumeration> Member<E> {
    pub fn value(&self) -> E {
        self.value
    }

    pub(crate) fn bits(&self) -> u64 {
        self.value.to_underlying().to_bits()
    }
}
