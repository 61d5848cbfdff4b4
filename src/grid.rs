//! Cartesian plotting of decoded points onto a character grid.
//!
//! The grid is sized to the bounding box of the input points and the
//! vertical axis is flipped: the greatest y lands on the first output line,
//! matching Cartesian rather than screen coordinates.

use crate::decode::Point;

/// Plot points onto a dense character grid and serialize it line by line.
///
/// Returns `None` when there is nothing to render. Points sharing a
/// coordinate resolve last-write-wins, matching their order in the input.
/// The result has no trailing newline beyond the line join.
pub fn render(points: &[Point]) -> Option<String> {
    let first = points.first()?;

    let (mut min_x, mut max_x) = (first.x, first.x);
    let (mut min_y, mut max_y) = (first.y, first.y);
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let width = usize::try_from(max_x - min_x + 1).ok()?;
    let height = usize::try_from(max_y - min_y + 1).ok()?;

    let mut grid = vec![vec![' '; width]; height];

    for p in points {
        let col = p.x - min_x;
        let row = max_y - p.y;
        // In range by construction of the bounds; checked on the signed
        // values so an out-of-range write can never happen.
        if (0..width as i64).contains(&col) && (0..height as i64).contains(&row) {
            grid[row as usize][col as usize] = p.glyph;
        }
    }

    let lines: Vec<String> = grid.iter().map(|row| row.iter().collect()).collect();
    Some(lines.join("\n"))
}
