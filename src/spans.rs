//! Per-column opaque runs, derived from a column-major buffer.

use smallvec::SmallVec;

/// Palette index treated as transparent.
pub const TRANSPARENT_INDEX: u8 = 0;

/// A run of opaque pixels inside one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// First opaque row.
    pub top: u32,
    /// Number of opaque rows.
    pub length: u32,
}

impl Span {
    /// One past the last row.
    pub fn end(self) -> u32 {
        self.top + self.length
    }
}

type ColumnSpans = SmallVec<[Span; 2]>;

/// Span lists for every column of a buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanTable {
    columns: Vec<ColumnSpans>,
}

impl SpanTable {
    /// Partition each column of `pixels` (column-major, `width * height`) into opaque runs.
    #[tracing::instrument(level = "trace", skip(pixels))]
    pub fn build(pixels: &[u8], width: u32, height: u32) -> Self {
        let h = height as usize;
        let columns = pixels
            .chunks_exact(h.max(1))
            .take(width as usize)
            .map(column_spans)
            .collect();
        Self { columns }
    }

    /// Spans of column `x`, or an empty slice past the end.
    pub fn column(&self, x: usize) -> &[Span] {
        self.columns.get(x).map(|c| c.as_slice()).unwrap_or_default()
    }

    /// Number of columns covered.
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

fn column_spans(col: &[u8]) -> ColumnSpans {
    let mut out = ColumnSpans::new();
    let mut start: Option<usize> = None;
    for (y, &p) in col.iter().enumerate() {
        match (p != TRANSPARENT_INDEX, start) {
            (true, None) => start = Some(y),
            (false, Some(s)) => {
                out.push(run(s, y));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push(run(s, col.len()));
    }
    out
}

fn run(start: usize, end: usize) -> Span {
    Span {
        top: start as u32,
        length: (end - start) as u32,
    }
}

#[cfg(test)]
#[path = "../tests/unit/spans.rs"]
mod tests;
