use crate::dimensions::Dimensions;
use crate::rect::Rect;

fn clamp(value: f64, min_value: f64, max_value: f64) -> f64 {
    value.min(max_value).max(min_value)
}

/// Uniform scale factor at which the video covers the display box.
///
/// Cover fitting picks the smallest scale that makes the scaled video at
/// least as large as the box on both axes, so the larger of the two axis
/// ratios wins. Contain fitting would take the smaller ratio and letterbox
/// instead of cropping.
pub fn cover_scale(display: Dimensions, video: Dimensions) -> f64 {
    (display.width / video.width).max(display.height / video.height)
}

/// Maps a rectangle in display pixels (relative to the video element's
/// on-screen box) into video pixels (the frame's native resolution), assuming
/// the video is rendered with `object-fit: cover`.
///
/// The scaled video is centered on the box, so whatever overflows is cropped
/// evenly off both sides of the overflowing axis; the selection is shifted
/// back by that crop before being divided by the scale.
///
/// Returns `None` when the mapping is undefined (either space has a
/// non-positive axis) or the selection ends up with no area inside the frame.
/// A `Some` result is always contained in `[0, video.width] x [0, video.height]`
/// with non-negative extent.
pub fn map_display_rect_to_video_rect_cover(
    display_rect: Rect,
    display: Dimensions,
    video: Dimensions,
) -> Option<Rect> {
    if !video.is_positive() || !display.is_positive() {
        return None;
    }

    let scale = cover_scale(display, video);
    let scaled_width = video.width * scale;
    let scaled_height = video.height * scale;

    let offset_x = (scaled_width - display.width) / 2.0;
    let offset_y = (scaled_height - display.height) / 2.0;

    let src_x = (display_rect.x + offset_x) / scale;
    let src_y = (display_rect.y + offset_y) / scale;
    let src_w = display_rect.width / scale;
    let src_h = display_rect.height / scale;

    let x = clamp(src_x, 0.0, video.width);
    let y = clamp(src_y, 0.0, video.height);
    // Extents clamp against the already-clamped corner, so the result can
    // never reach past the frame edge. A selection entirely past the right or
    // bottom edge collapses to zero here and reads as empty.
    let w = clamp(src_w, 0.0, video.width - x);
    let h = clamp(src_h, 0.0, video.height - y);

    if w <= 0.0 || h <= 0.0 {
        return None;
    }

    Some(Rect::new(x, y, w, h))
}
