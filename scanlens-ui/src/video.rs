use crate::selection::VideoRect;
use scanlens_core::{cover, Dimensions, Rect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlVideoElement;

/// On-screen size of a rendered video element's box, in display pixels.
pub fn display_box_of(video: &HtmlVideoElement) -> Dimensions {
    let bounds = video.get_bounding_client_rect();
    Dimensions::new(bounds.width(), bounds.height())
}

/// Native resolution of the element's current video stream, in video pixels.
///
/// Reads 0x0 until the stream's metadata has loaded, which the mapper rejects
/// as an undefined mapping.
pub fn frame_size_of(video: &HtmlVideoElement) -> Dimensions {
    Dimensions::new(video.video_width() as f64, video.video_height() as f64)
}

/// Maps a selection made on a rendered video element into its stream's native
/// frame coordinates, measuring the element live.
///
/// The selection is relative to the element's box (`getBoundingClientRect`),
/// which is assumed to render the stream with `object-fit: cover`.
#[wasm_bindgen(js_name = mapSelectionOnVideoElement)]
pub fn map_selection_on_video_element(
    video: &HtmlVideoElement,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Option<VideoRect> {
    cover::map_display_rect_to_video_rect_cover(
        Rect::new(x, y, width, height),
        display_box_of(video),
        frame_size_of(video),
    )
    .map(VideoRect::from)
}
