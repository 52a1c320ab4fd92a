use scanlens_core::{cover, Dimensions, Rect};
use wasm_bindgen::prelude::*;

/// Video-space rectangle handed back across the JS boundary.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for VideoRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Maps a selection made on the displayed video box (display pixels) into the
/// video frame's native pixel space, assuming `object-fit: cover` rendering.
///
/// Returns `undefined` on the JS side when the mapping is undefined or the
/// selection has no area inside the frame; the caller should treat that as
/// "no valid selection" and wait for a new gesture.
#[wasm_bindgen(js_name = mapDisplayRectToVideoRectCover)]
pub fn map_display_rect_to_video_rect_cover(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    display_width: f64,
    display_height: f64,
    video_width: f64,
    video_height: f64,
) -> Option<VideoRect> {
    cover::map_display_rect_to_video_rect_cover(
        Rect::new(x, y, width, height),
        Dimensions::new(display_width, display_height),
        Dimensions::new(video_width, video_height),
    )
    .map(VideoRect::from)
}
