//! Core types for linesort.
//!
//! This module defines:
//! - [`CodeUnit`] and [`code_unit_order`]: the primitive order over UTF-16 code units.
//! - [`LineView`]: an index range addressing one line inside a table's buffer.
//! - [`IgnoreSet`]: the symbols skipped while comparing.
//! - [`LineAccessor`]: the trait that exposes lines of any collection without copying.
//! - [`utf16`]: a convenience encoder for building lines from `&str` literals.

use cuneiform::cuneiform;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ops::Range;

/// One fixed-width character slot of the buffer (UTF-16).
pub type CodeUnit = u16;

/// Line separator inside a loaded buffer.
pub const LINE_SEPARATOR: CodeUnit = 0x000A;

/// Byte-order mark, written once at the head of every rendering.
pub const BYTE_ORDER_MARK: CodeUnit = 0xFEFF;

/// Maximum number of symbols an [`IgnoreSet`] can hold.
pub const MAX_IGNORABLE: usize = 16;

/// Total order over individual code units.
///
/// Units are already in native order here: the loader normalizes the
/// little-endian file representation when it decodes the buffer.
#[inline(always)]
pub fn code_unit_order(a: CodeUnit, b: CodeUnit) -> Ordering {
    a.cmp(&b)
}

/// A non-owning reference to one line: `len` code units starting at `start`.
///
/// A view carries no pointer. It is resolved against the buffer of the table that
/// created it with [`LineView::resolve`], which is checked slice indexing.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineView {
    start: usize,
    len: usize,
}

impl LineView {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Returns the units of this line inside `buffer`.
    ///
    /// # Panics
    ///
    /// Panics if the view does not lie inside `buffer`, i.e. it is resolved against
    /// a buffer other than the one it was split from.
    #[inline]
    pub fn resolve<'a>(&self, buffer: &'a [CodeUnit]) -> &'a [CodeUnit] {
        &buffer[self.range()]
    }

    /// Like [`LineView::resolve`], but returns `None` for an out-of-range view.
    pub fn get<'a>(&self, buffer: &'a [CodeUnit]) -> Option<&'a [CodeUnit]> {
        buffer.get(self.range())
    }
}

/// A fixed alphabet of symbols excluded from comparison (but not from storage).
// Cache-aligned so a membership scan touches a single line.
#[cuneiform]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IgnoreSet {
    units: [CodeUnit; MAX_IGNORABLE],
    len: usize,
}

const fn unit(c: char) -> CodeUnit {
    c as CodeUnit
}

impl IgnoreSet {
    /// Punctuation and space: `. , ! : ; " ? - ( )` and `' '`.
    pub const DEFAULT: IgnoreSet = IgnoreSet {
        units: [
            unit('.'),
            unit(','),
            unit('!'),
            unit(':'),
            unit(';'),
            unit('"'),
            unit('?'),
            unit('-'),
            unit('('),
            unit(')'),
            unit(' '),
            0,
            0,
            0,
            0,
            0,
        ],
        len: 11,
    };

    /// Skips nothing; comparison degenerates to plain code-unit order.
    pub const EMPTY: IgnoreSet = IgnoreSet {
        units: [0; MAX_IGNORABLE],
        len: 0,
    };

    /// Builds a set from `symbols`. Entries beyond [`MAX_IGNORABLE`] are dropped.
    pub fn new(symbols: &[CodeUnit]) -> Self {
        let mut set = Self::EMPTY;
        for &symbol in symbols.iter().take(MAX_IGNORABLE) {
            set.units[set.len] = symbol;
            set.len += 1;
        }
        set
    }

    /// Builds a set from the UTF-16 encoding of `symbols`.
    pub fn from_chars(symbols: &str) -> Self {
        let units: Vec<CodeUnit> = symbols.encode_utf16().collect();
        Self::new(&units)
    }

    #[inline(always)]
    pub fn is_ignorable(&self, ch: CodeUnit) -> bool {
        self.units[..self.len].contains(&ch)
    }

    pub fn symbols(&self) -> &[CodeUnit] {
        &self.units[..self.len]
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A trait for accessing lines of a collection as code-unit slices without copying.
///
/// [`crate::table::LineTable`] implements it over its current order; the blanket
/// implementations cover `Vec<Vec<u16>>` and friends.
///
/// # Examples
///
/// ```
/// use linesort::core::{CodeUnit, LineAccessor};
///
/// struct Verses {
///     text: Vec<Vec<CodeUnit>>,
/// }
///
/// impl LineAccessor for Verses {
///     fn line(&self, index: usize) -> &[CodeUnit] {
///         &self.text[index]
///     }
///
///     fn len(&self) -> usize {
///         self.text.len()
///     }
/// }
/// ```
pub trait LineAccessor {
    /// Returns the code units of the line at `index`.
    fn line(&self, index: usize) -> &[CodeUnit];

    /// Returns the number of lines in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no lines.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: AsRef<[CodeUnit]>> LineAccessor for [T] {
    fn line(&self, index: usize) -> &[CodeUnit] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[CodeUnit]>> LineAccessor for Vec<T> {
    fn line(&self, index: usize) -> &[CodeUnit] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[CodeUnit]>> LineAccessor for VecDeque<T> {
    fn line(&self, index: usize) -> &[CodeUnit] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// Encodes `text` as UTF-16 code units.
///
/// A convenience for building lines from `&str`; tables built from text should
/// use [`crate::table::LineTable::from_text`] instead.
pub fn utf16(text: &str) -> Vec<CodeUnit> {
    text.encode_utf16().collect()
}
