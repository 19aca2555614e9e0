use tracing::debug;

use crate::types::CanvasSize;

/// Center an RGBA8 image of `cols x rows` on a fully transparent canvas.
///
/// Offsets are floored, so odd leftover space puts the extra pixel on the right/bottom.
/// Returns the canvas buffer and the `(pad_left, pad_top)` offsets used.
pub fn pad_to_canvas(
    rgba_data: &[u8],
    cols: u32,
    rows: u32,
    canvas: CanvasSize,
) -> (Vec<u8>, u32, u32) {
    let pad_cols = canvas.width.saturating_sub(cols) / 2;
    let pad_rows = canvas.height.saturating_sub(rows) / 2;

    debug!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}, canvas={}",
        cols, rows, pad_cols, pad_rows, canvas
    );

    let canvas_stride = canvas.width as usize * 4;
    let copy_cols = cols.min(canvas.width) as usize;
    let copy_rows = rows.min(canvas.height) as usize;

    let mut padded = vec![0u8; canvas_stride * canvas.height as usize];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..copy_rows {
        let src_offset = row * cols as usize * 4;
        let dst_offset = (row + pad_rows as usize) * canvas_stride + pad_cols as usize * 4;
        let src_slice = &rgba_data[src_offset..src_offset + copy_cols * 4];
        let dst_slice = &mut padded[dst_offset..dst_offset + copy_cols * 4];
        dst_slice.copy_from_slice(src_slice);
    }

    (padded, pad_cols, pad_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(buf: &[u8], canvas: CanvasSize, x: u32, y: u32) -> u8 {
        buf[((y * canvas.width + x) * 4 + 3) as usize]
    }

    #[test]
    fn centers_with_floor_offsets() {
        let canvas = CanvasSize { width: 5, height: 4 };
        let src = vec![255u8; 2 * 1 * 4];
        let (buf, left, top) = pad_to_canvas(&src, 2, 1, canvas);

        assert_eq!((left, top), (1, 1));
        assert_eq!(buf.len(), 5 * 4 * 4);
        assert_eq!(alpha_at(&buf, canvas, 1, 1), 255);
        assert_eq!(alpha_at(&buf, canvas, 2, 1), 255);
        assert_eq!(alpha_at(&buf, canvas, 0, 1), 0);
        assert_eq!(alpha_at(&buf, canvas, 3, 1), 0);
        assert_eq!(alpha_at(&buf, canvas, 1, 0), 0);
        assert_eq!(alpha_at(&buf, canvas, 1, 2), 0);
    }

    #[test]
    fn exact_fit_copies_everything() {
        let canvas = CanvasSize { width: 3, height: 2 };
        let src: Vec<u8> = (0..24).collect();
        let (buf, left, top) = pad_to_canvas(&src, 3, 2, canvas);
        assert_eq!((left, top), (0, 0));
        assert_eq!(buf, src);
    }
}
