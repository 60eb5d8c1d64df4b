//! Writing a table back out as UTF-16LE.
//!
//! Every rendering is framed the same way: one marker unit, then each line of the
//! current order followed by one separator unit.

use crate::config::{Rendering, Selection};
use crate::core::{BYTE_ORDER_MARK, CodeUnit, LINE_SEPARATOR};
use crate::loader::encode_units;
use crate::table::LineTable;
use std::io::{self, Write};
use tracing::debug;

/// Serializes the current order of a [`LineTable`] to a sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    marker: CodeUnit,
    separator: CodeUnit,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            marker: BYTE_ORDER_MARK,
            separator: LINE_SEPARATOR,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(mut self, marker: CodeUnit) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_separator(mut self, separator: CodeUnit) -> Self {
        self.separator = separator;
        self
    }

    pub fn marker(&self) -> CodeUnit {
        self.marker
    }

    pub fn separator(&self) -> CodeUnit {
        self.separator
    }

    /// Writes one full rendering of `table`: the marker, then every line of the
    /// current order with a trailing separator.
    ///
    /// # Errors
    ///
    /// Propagates any error of the sink.
    pub fn emit<W: Write>(&self, table: &LineTable, sink: &mut W) -> io::Result<()> {
        let mut bytes = Vec::new();
        encode_units(&[self.marker], &mut bytes);
        for line in table.lines() {
            encode_units(line, &mut bytes);
            encode_units(&[self.separator], &mut bytes);
        }
        sink.write_all(&bytes)
    }
}

/// Emits every rendering of `selection`, in order: sorted, reverse-sorted, original.
///
/// The table is reordered in place before each rendering and is left in the order
/// of the last one emitted. An empty selection emits nothing; normalize it first
/// to get all three.
///
/// # Errors
///
/// Propagates any error of the sink.
pub fn emit_selected<W: Write>(
    table: &mut LineTable,
    selection: Selection,
    renderer: &Renderer,
    sink: &mut W,
) -> io::Result<()> {
    for rendering in selection.renderings() {
        match rendering {
            Rendering::Sorted => table.sort_forward(),
            Rendering::ReverseSorted => table.sort_backward(),
            Rendering::Original => table.restore_original(),
        }
        debug!(%rendering, lines = table.len(), "emitting rendering");
        renderer.emit(table, sink)?;
    }
    sink.flush()
}
