mod carousel;
mod intro;
mod status_bar;
mod track;

pub use carousel::CarouselWidget;
pub use intro::IntroWidget;
pub use status_bar::StatusBarWidget;
pub use track::TrackWidget;

use ratatui::{buffer::Buffer, layout::Rect};

/// Copy `src` into `dst` with its origin at (`x`, `y`), keeping only cells inside `clip`.
///
/// Lets a widget be drawn at full size offscreen and then shown partially
/// scrolled or translated.
pub fn blit(src: &Buffer, dst: &mut Buffer, x: i32, y: i32, clip: Rect) {
    let clip = clip.intersection(dst.area);
    for sy in 0..src.area.height {
        let ty = y + sy as i32;
        if ty < clip.y as i32 || ty >= clip.bottom() as i32 {
            continue;
        }
        for sx in 0..src.area.width {
            let tx = x + sx as i32;
            if tx < clip.x as i32 || tx >= clip.right() as i32 {
                continue;
            }
            let from = (src.area.x + sx, src.area.y + sy);
            if let (Some(cell), Some(target)) = (src.cell(from), dst.cell_mut((tx as u16, ty as u16))) {
                *target = cell.clone();
            }
        }
    }
}

/// Cells for a virtual-pixel distance
pub fn px_to_cells(px: f64, scale: f64) -> i32 {
    if scale <= 0.0 {
        return 0;
    }
    (px / scale).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blit_clips_to_target() {
        let mut src = Buffer::empty(Rect::new(0, 0, 4, 1));
        src.set_string(0, 0, "abcd", ratatui::style::Style::default());
        let mut dst = Buffer::empty(Rect::new(0, 0, 6, 1));

        blit(&src, &mut dst, -2, 0, Rect::new(0, 0, 3, 1));
        assert_eq!(dst, Buffer::with_lines(["cd    "]));
    }

    #[test]
    fn test_px_to_cells() {
        assert_eq!(px_to_cells(-1404.0, 10.0), -140);
        assert_eq!(px_to_cells(15.0, 10.0), 2);
        assert_eq!(px_to_cells(15.0, 0.0), 0);
    }
}
