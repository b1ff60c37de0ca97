#![forbid(unsafe_code)]

//! Cell and line model: the fundamental units of a shuffled text block.
//!
//! Each [`Cell`] owns one character (or grapheme cluster) of the source text:
//! the `original` content it must resolve back to, and the `state` it is
//! currently displaying. Cells are grouped into [`Line`]s in reading order,
//! and the whole hierarchy is built once at engine construction; it never
//! reflows.
//!
//! # Invariants
//!
//! 1. `original` is immutable after construction.
//! 2. `state` always reflects what is shown on the rendering surface.
//! 3. Cell positions are zero-based and reset per line, not per block.
//! 4. `previous_cell_position` is `position − 1`, or [`NO_PREVIOUS_CELL`]
//!    for the first cell of each line. It is stored for neighbor-aware
//!    effects and has no behavior beyond storage.
//! 5. At the end of any completed animation pass, `state == original`.

// ---------------------------------------------------------------------------
// Element handles
// ---------------------------------------------------------------------------

/// Opaque handle to a leaf element on the rendering surface.
///
/// Assigned by the text-splitting collaborator and passed through, untouched,
/// to the tween sink. The engine attaches no meaning to the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElemId(pub u64);

/// Sentinel for "no preceding cell in this line".
pub const NO_PREVIOUS_CELL: i32 = -1;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One animatable character cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    elem: ElemId,
    position: usize,
    previous_cell_position: i32,
    original: String,
    state: String,
}

impl Cell {
    /// Create a cell displaying its original content.
    #[must_use]
    pub fn new(
        elem: ElemId,
        original: impl Into<String>,
        position: usize,
        previous_cell_position: i32,
    ) -> Self {
        let original = original.into();
        Self {
            elem,
            position,
            previous_cell_position,
            state: original.clone(),
            original,
        }
    }

    /// Surface handle for this cell's leaf element.
    #[inline]
    #[must_use]
    pub fn elem(&self) -> ElemId {
        self.elem
    }

    /// Zero-based index within the owning line.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the preceding cell in the same line, or [`NO_PREVIOUS_CELL`].
    #[inline]
    #[must_use]
    pub fn previous_cell_position(&self) -> i32 {
        self.previous_cell_position
    }

    /// The content this cell resolves back to.
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The currently displayed content.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Whether the displayed content matches the original.
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.state == self.original
    }

    /// Display `glyph`, replacing the current state.
    pub fn set(&mut self, glyph: char) {
        self.state.clear();
        self.state.push(glyph);
    }

    /// Restore the original content.
    pub fn restore(&mut self) {
        self.state.clone_from(&self.original);
    }
}

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

/// An ordered run of cells forming one visual text line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    position: usize,
    cells: Vec<Cell>,
}

impl Line {
    /// Create an empty line at `position` within the block.
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self {
            position,
            cells: Vec::new(),
        }
    }

    /// Zero-based index within the block's line sequence.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The line's cells in reading order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to one cell.
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Number of cells in this line.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the line has no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Append a cell. Construction order is reading order.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// The currently displayed content of the whole line.
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().map(Cell::state).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
