//! The line table: one buffer, the current line order and the original one.
//!
//! A [`LineTable`] owns the whole decoded file. Lines are [`LineView`]s into that
//! buffer, so sorting only permutes small `(start, len)` pairs and never moves text.

use crate::algo::{Direction, directional_cmp};
use crate::core::{BYTE_ORDER_MARK, CodeUnit, IgnoreSet, LINE_SEPARATOR, LineAccessor, LineView};
use crate::error::{LoadError, RestoreError, SizeMismatch};
use crate::loader;
use std::cmp::Ordering;
use std::path::Path;
use tracing::{debug, trace, warn};

/// A detached copy of a table's line order.
///
/// Taken with [`LineTable::snapshot`] and reinstated with [`LineTable::restore`],
/// so a sort result can be reused without sorting again.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    lines: Vec<LineView>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn views(&self) -> &[LineView] {
        &self.lines
    }
}

/// Text split into lines over a single shared buffer.
///
/// # Examples
///
/// ```
/// use linesort::table::LineTable;
///
/// let mut table = LineTable::from_text("beta\nalpha\ngamma\n");
/// table.sort_forward();
/// assert_eq!(table.to_strings(), ["alpha", "beta", "gamma"]);
///
/// table.restore_original();
/// assert_eq!(table.to_strings(), ["beta", "alpha", "gamma"]);
/// ```
#[derive(Debug, Clone)]
pub struct LineTable {
    buffer: Vec<CodeUnit>,
    order: Vec<LineView>,
    original: Vec<LineView>,
    has_header: bool,
    ignore: IgnoreSet,
}

impl LineTable {
    /// Takes ownership of `buffer` and splits it into lines.
    ///
    /// A leading byte-order mark is treated as a header, not as line content.
    /// Empty lines at the end of the buffer are trimmed before the original order
    /// is captured.
    pub fn from_units(buffer: Vec<CodeUnit>) -> Self {
        let has_header = buffer.first() == Some(&BYTE_ORDER_MARK);
        let body_start = usize::from(has_header);

        let mut order = split_lines(&buffer, body_start);
        while order.last().is_some_and(LineView::is_empty) {
            order.pop();
        }
        let original = order.clone();

        Self {
            buffer,
            order,
            original,
            has_header,
            ignore: IgnoreSet::DEFAULT,
        }
    }

    /// Encodes `text` as UTF-16 and splits it into lines.
    pub fn from_text(text: &str) -> Self {
        Self::from_units(text.encode_utf16().collect())
    }

    /// Reads the UTF-16LE file at `path` and splits it into lines.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be read in full. No partial table
    /// is produced.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let capacity = loader::unit_length(path);
        let buffer = loader::read_exact(path, capacity)?;
        let table = Self::from_units(buffer);
        debug!(
            path = %path.display(),
            units = capacity,
            lines = table.len(),
            "loaded line table"
        );
        Ok(table)
    }

    /// Replaces the symbols skipped by [`LineTable::sort_forward`] and
    /// [`LineTable::sort_backward`].
    pub fn with_ignore_set(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn ignore_set(&self) -> &IgnoreSet {
        &self.ignore
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether the buffer started with a byte-order mark.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn buffer(&self) -> &[CodeUnit] {
        &self.buffer
    }

    /// Resolves `view` against this table's buffer.
    pub fn resolve(&self, view: LineView) -> &[CodeUnit] {
        view.resolve(&self.buffer)
    }

    /// The current line order.
    pub fn current_order(&self) -> &[LineView] {
        &self.order
    }

    /// The line order as captured right after loading.
    pub fn original_order(&self) -> &[LineView] {
        &self.original
    }

    /// Lines in the current order.
    pub fn lines(&self) -> impl Iterator<Item = &[CodeUnit]> {
        self.order.iter().map(|view| view.resolve(&self.buffer))
    }

    /// The line at `index` of the current order, decoded lossily.
    pub fn line_string(&self, index: usize) -> Option<String> {
        self.order
            .get(index)
            .map(|view| String::from_utf16_lossy(self.resolve(*view)))
    }

    /// Every line of the current order, decoded lossily.
    pub fn to_strings(&self) -> Vec<String> {
        self.lines().map(String::from_utf16_lossy).collect()
    }

    /// Sorts the current order by a "less than" predicate over line contents.
    pub fn reorder<F>(&mut self, mut less: F)
    where
        F: FnMut(&[CodeUnit], &[CodeUnit]) -> bool,
    {
        self.reorder_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }

    /// Sorts the current order by a three-way comparator over line contents.
    ///
    /// The sort is stable: lines comparing equal keep their relative positions.
    pub fn reorder_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&[CodeUnit], &[CodeUnit]) -> Ordering,
    {
        trace!(lines = self.order.len(), "reordering lines");
        let buffer = &self.buffer;
        self.order
            .sort_by(|a, b| compare(a.resolve(buffer), b.resolve(buffer)));
    }

    /// Sorts the current order scanning each line in `direction`.
    pub fn sort_by_direction(&mut self, direction: Direction) {
        let ignore = self.ignore;
        self.reorder_by(|a, b| directional_cmp(a, b, direction, &ignore));
    }

    /// Lexicographic sort from the line starts.
    pub fn sort_forward(&mut self) {
        self.sort_by_direction(Direction::Forward);
    }

    /// Lexicographic sort from the line ends, i.e. by suffix.
    pub fn sort_backward(&mut self) {
        self.sort_by_direction(Direction::Backward);
    }

    /// Captures the current order.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            lines: self.order.clone(),
        }
    }

    /// Reinstates the order captured in `snapshot`.
    ///
    /// # Errors
    ///
    /// Leaves the order untouched and returns
    /// - [`RestoreError::SizeMismatch`] if the snapshot was taken from a table of a
    ///   different size;
    /// - [`RestoreError::ForeignView`] if one of its views does not lie inside this
    ///   table's buffer.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), RestoreError> {
        if snapshot.len() != self.order.len() {
            let mismatch = SizeMismatch {
                snapshot: snapshot.len(),
                table: self.order.len(),
            };
            warn!(%mismatch, "rejected snapshot");
            return Err(mismatch.into());
        }
        if let Some((index, view)) = snapshot
            .lines
            .iter()
            .enumerate()
            .find(|(_, view)| view.get(&self.buffer).is_none())
        {
            let foreign = RestoreError::ForeignView {
                index,
                start: view.start(),
                end: view.range().end,
                buffer_len: self.buffer.len(),
            };
            warn!(%foreign, "rejected snapshot");
            return Err(foreign);
        }
        self.order.copy_from_slice(&snapshot.lines);
        Ok(())
    }

    /// Returns the current order to the one captured at load time.
    pub fn restore_original(&mut self) {
        self.order.copy_from_slice(&self.original);
    }
}

impl LineAccessor for LineTable {
    fn line(&self, index: usize) -> &[CodeUnit] {
        self.order[index].resolve(&self.buffer)
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

/// Splits `buffer[body_start..]` on [`LINE_SEPARATOR`].
///
/// Yields one view per separator plus the tail after the last one, which may be empty.
fn split_lines(buffer: &[CodeUnit], body_start: usize) -> Vec<LineView> {
    let mut lines = Vec::new();
    let mut line_start = body_start;

    for (offset, &unit) in buffer.iter().enumerate().skip(body_start) {
        if unit == LINE_SEPARATOR {
            lines.push(LineView::new(line_start, offset - line_start));
            line_start = offset + 1;
        }
    }
    lines.push(LineView::new(line_start, buffer.len() - line_start));

    lines
}
