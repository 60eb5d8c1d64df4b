//! The directional line comparator and the sorts built on it.
//!
//! Two lines are compared by walking a cursor over each of them, either from the
//! line start towards its end ([`Direction::Forward`]) or from the line end towards
//! its start ([`Direction::Backward`]). Symbols of an [`IgnoreSet`] are stepped over
//! on either side without consuming from the other.
//!
//! When a cursor runs out, both cursors first skip any trailing ignorable symbols.
//! A line is then less than the other exactly when it is exhausted and the other
//! one is not. Two lines exhausted together compare equal.
//!
//! The main entry points are [`forward_less`], [`backward_less`] and
//! [`directional_cmp`]; [`sort_indices`] and [`sort_in_place`] sort any
//! [`LineAccessor`] with them.

use crate::core::{CodeUnit, IgnoreSet, LineAccessor, code_unit_order};
use std::cmp::Ordering;

/// Scan direction of the comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From the first unit of the line towards the last.
    #[default]
    Forward,
    /// From the last unit of the line towards the first (suffix order).
    Backward,
}

impl Direction {
    /// Returns the unit `step` positions away from the scan origin of `line`.
    ///
    /// The caller guarantees `step < line.len()`.
    #[inline(always)]
    pub fn unit_at(self, line: &[CodeUnit], step: usize) -> CodeUnit {
        match self {
            Direction::Forward => line[step],
            Direction::Backward => line[line.len() - 1 - step],
        }
    }
}

/// A cursor over one operand: how many units have been consumed from the origin.
struct Cursor<'a> {
    line: &'a [CodeUnit],
    step: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a [CodeUnit]) -> Self {
        Self { line, step: 0 }
    }

    #[inline(always)]
    fn in_bounds(&self) -> bool {
        self.step < self.line.len()
    }

    #[inline(always)]
    fn unit(&self, direction: Direction) -> CodeUnit {
        direction.unit_at(self.line, self.step)
    }

    /// Steps over the current unit if it is ignorable.
    #[inline(always)]
    fn skip_one(&mut self, direction: Direction, ignore: &IgnoreSet) -> bool {
        if ignore.is_ignorable(self.unit(direction)) {
            self.step += 1;
            return true;
        }
        false
    }

    fn skip_trailing(&mut self, direction: Direction, ignore: &IgnoreSet) {
        while self.in_bounds() && ignore.is_ignorable(self.unit(direction)) {
            self.step += 1;
        }
    }
}

/// Three-way comparison of two lines scanned in `direction`, skipping `ignore`.
///
/// # Examples
///
/// ```
/// use linesort::algo::{Direction, directional_cmp};
/// use linesort::core::{IgnoreSet, utf16};
/// use std::cmp::Ordering;
///
/// let a = utf16("(alpha)");
/// let b = utf16("alpha!");
/// assert_eq!(directional_cmp(&a, &b, Direction::Forward, &IgnoreSet::DEFAULT), Ordering::Equal);
/// ```
pub fn directional_cmp(
    a: &[CodeUnit],
    b: &[CodeUnit],
    direction: Direction,
    ignore: &IgnoreSet,
) -> Ordering {
    let mut lhs = Cursor::new(a);
    let mut rhs = Cursor::new(b);

    while lhs.in_bounds() && rhs.in_bounds() {
        if lhs.skip_one(direction, ignore) || rhs.skip_one(direction, ignore) {
            continue;
        }

        let ordering = code_unit_order(lhs.unit(direction), rhs.unit(direction));
        lhs.step += 1;
        rhs.step += 1;

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    lhs.skip_trailing(direction, ignore);
    rhs.skip_trailing(direction, ignore);

    match (lhs.in_bounds(), rhs.in_bounds()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// `a < b` scanning from the line starts with the default ignore set.
///
/// ```
/// use linesort::algo::forward_less;
/// use linesort::core::utf16;
///
/// assert!(forward_less(&utf16("Обама"), &utf16("Путин")));
/// assert!(forward_less(&utf16("..."), &utf16("a")));
/// ```
#[inline]
pub fn forward_less(a: &[CodeUnit], b: &[CodeUnit]) -> bool {
    directional_cmp(a, b, Direction::Forward, &IgnoreSet::DEFAULT) == Ordering::Less
}

/// `a < b` scanning from the line ends with the default ignore set.
#[inline]
pub fn backward_less(a: &[CodeUnit], b: &[CodeUnit]) -> bool {
    directional_cmp(a, b, Direction::Backward, &IgnoreSet::DEFAULT) == Ordering::Less
}

/// Performs an index-based sort of `provider` in `direction`.
///
/// The collection is left untouched; the returned indices list its lines in
/// ascending order. The sort is stable, so lines that compare equal keep their
/// relative positions.
///
/// # Examples
///
/// ```
/// use linesort::algo::{Direction, sort_indices};
/// use linesort::core::{IgnoreSet, utf16};
///
/// let data = vec![utf16("beta"), utf16("alpha"), utf16("gamma")];
/// let indices = sort_indices(&data, Direction::Forward, &IgnoreSet::DEFAULT);
///
/// assert_eq!(indices, vec![1, 0, 2]);
/// ```
pub fn sort_indices<T: LineAccessor + ?Sized>(
    provider: &T,
    direction: Direction,
    ignore: &IgnoreSet,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..provider.len()).collect();
    indices.sort_by(|&a, &b| {
        directional_cmp(provider.line(a), provider.line(b), direction, ignore)
    });
    indices
}

/// Sorts a mutable slice of lines in place.
///
/// Computes the order with [`sort_indices`] and then applies the permutation by
/// swapping along its cycles.
///
/// ```
/// use linesort::algo::{Direction, sort_in_place};
/// use linesort::core::{IgnoreSet, utf16};
///
/// let mut data = vec![utf16("-gamma"), utf16(".alpha"), utf16("beta!")];
/// sort_in_place(&mut data, Direction::Forward, &IgnoreSet::DEFAULT);
///
/// assert_eq!(data, vec![utf16(".alpha"), utf16("beta!"), utf16("-gamma")]);
/// ```
pub fn sort_in_place<T: AsRef<[CodeUnit]>>(
    data: &mut [T],
    direction: Direction,
    ignore: &IgnoreSet,
) {
    let indices = sort_indices(data, direction, ignore);
    apply_permutation(data, indices);
}

/// Rearranges `data` so that `data[i]` becomes the old `data[indices[i]]`.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current;
            current = next;
        }
        indices[current] = current;
    }
}
