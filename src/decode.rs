//! Row-to-point decoding.
//!
//! The boundary between table extraction and grid rendering: raw cell text
//! becomes typed [`Point`]s here. Decoding is deliberately tolerant — a row
//! that cannot produce a point is skipped, never fatal.

use tracing::debug;

/// A decoded coordinate destined for plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    /// Display character; a single space when the source cell was empty.
    pub glyph: char,
}

/// Decode extracted table rows into points.
///
/// The first row is always treated as a header and skipped. Each remaining
/// row needs at least three cells: integer x, display glyph, integer y. Rows
/// that fail the cell count or the integer parse are dropped silently (logged
/// at debug level). Point order follows row order; duplicate coordinates are
/// permitted and resolve last-write-wins at render time.
pub fn decode_points(rows: &[Vec<String>]) -> Vec<Point> {
    // No header + data means nothing to decode.
    if rows.len() < 2 {
        return Vec::new();
    }

    let mut points = Vec::new();
    for row in &rows[1..] {
        if row.len() < 3 {
            debug!(cells = row.len(), "skipping row with too few cells");
            continue;
        }
        let (Ok(x), Ok(y)) = (row[0].parse::<i64>(), row[2].parse::<i64>()) else {
            debug!(x = %row[0], y = %row[2], "skipping row with non-integer coordinates");
            continue;
        };
        let glyph = row[1].chars().next().unwrap_or(' ');
        points.push(Point { x, y, glyph });
    }

    points
}
