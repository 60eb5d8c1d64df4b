//! Which renderings to produce.

use std::fmt;

/// One rendering of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rendering {
    /// Sorted from the line starts.
    Sorted,
    /// Sorted from the line ends.
    ReverseSorted,
    /// Lines as they appear in the source.
    Original,
}

impl Rendering {
    /// Every rendering, in emission order.
    pub const ALL: [Rendering; 3] = [
        Rendering::Sorted,
        Rendering::ReverseSorted,
        Rendering::Original,
    ];
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rendering::Sorted => "sorted",
            Rendering::ReverseSorted => "reverse-sorted",
            Rendering::Original => "original",
        };
        f.write_str(name)
    }
}

/// The set of renderings asked for.
///
/// An empty selection means "everything": see [`Selection::normalized`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub original: bool,
    pub sorted: bool,
    pub reversed: bool,
}

impl Selection {
    pub const ALL: Selection = Selection {
        original: true,
        sorted: true,
        reversed: true,
    };

    pub fn is_empty(&self) -> bool {
        !(self.original || self.sorted || self.reversed)
    }

    /// Turns an empty selection into [`Selection::ALL`].
    pub fn normalized(self) -> Self {
        if self.is_empty() { Self::ALL } else { self }
    }

    pub fn contains(&self, rendering: Rendering) -> bool {
        match rendering {
            Rendering::Sorted => self.sorted,
            Rendering::ReverseSorted => self.reversed,
            Rendering::Original => self.original,
        }
    }

    /// Selected renderings in emission order: sorted, reverse-sorted, original.
    pub fn renderings(&self) -> impl Iterator<Item = Rendering> {
        let selection = *self;
        Rendering::ALL
            .into_iter()
            .filter(move |rendering| selection.contains(*rendering))
    }
}

impl FromIterator<Rendering> for Selection {
    fn from_iter<I: IntoIterator<Item = Rendering>>(iter: I) -> Self {
        let mut selection = Selection::default();
        for rendering in iter {
            match rendering {
                Rendering::Sorted => selection.sorted = true,
                Rendering::ReverseSorted => selection.reversed = true,
                Rendering::Original => selection.original = true,
            }
        }
        selection
    }
}
