//! # linesort
//!
//! `linesort` sorts the lines of a UTF-16 text in ways useful for reading it
//! differently: by their beginnings, by their endings (rhymes, suffixes), or
//! as written.
//!
//! Comparison skips punctuation and spaces (`. , ! : ; " ? - ( )` and `' '`) on
//! both sides, so `"-gamma"` sorts next to `"gamma."`.
//!
//! ## Key Features
//!
//! - **One Buffer**: The whole file is decoded once into a [`LineTable`]. Lines are
//!   [`core::LineView`] index ranges into that buffer; sorting permutes the views only.
//! - **Directional Comparison**: [`forward_less`] and [`backward_less`] are one
//!   algorithm, [`algo::directional_cmp`], scanning from either end of the lines.
//! - **Snapshots**: [`LineTable::snapshot`] saves a sort result and
//!   [`LineTable::restore`] brings it back without sorting again;
//!   [`LineTable::restore_original`] returns to the source order.
//!
//! ## Usage
//!
//! ```rust
//! use linesort::prelude::*;
//!
//! let mut table = LineTable::from_text("and stormy\nwinds do blow\nthe cold\n");
//!
//! table.sort_forward();
//! assert_eq!(table.to_strings(), ["and stormy", "the cold", "winds do blow"]);
//! let sorted = table.snapshot();
//!
//! table.sort_backward();
//! assert_eq!(table.to_strings(), ["the cold", "winds do blow", "and stormy"]);
//!
//! table.restore(&sorted).unwrap();
//! assert_eq!(table.line_string(0).as_deref(), Some("and stormy"));
//! ```
//!
//! ### Writing renderings
//!
//! ```rust
//! use linesort::prelude::*;
//!
//! let mut table = LineTable::from_text("b\na\n");
//! let mut out = Vec::new();
//! emit_selected(&mut table, Selection::default().normalized(), &Renderer::new(), &mut out).unwrap();
//!
//! // Three renderings of (marker + 2 lines with separators), two bytes per unit.
//! assert_eq!(out.len(), 3 * (1 + 2 * 2) * 2);
//! ```

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod render;
pub mod table;

pub use algo::{backward_less, directional_cmp, forward_less};
pub use error::{LoadError, RestoreError, SizeMismatch};
pub use table::{LineTable, Snapshot};

pub mod prelude {
    pub use crate::algo::{Direction, backward_less, directional_cmp, forward_less};
    pub use crate::config::{Rendering, Selection};
    pub use crate::core::{CodeUnit, IgnoreSet, LineAccessor, LineView};
    pub use crate::error::{LoadError, RestoreError, SizeMismatch};
    pub use crate::render::{Renderer, emit_selected};
    pub use crate::table::{LineTable, Snapshot};
}
