//! Browser-only tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use scanlens_ui::capture::CaptureHandle;
use scanlens_ui::selection::map_display_rect_to_video_rect_cover;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn maps_full_box_selection_of_cropped_frame() {
    let mapped =
        map_display_rect_to_video_rect_cover(0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 200.0, 100.0)
            .unwrap();

    assert_eq!(mapped.x, 50.0);
    assert_eq!(mapped.y, 0.0);
    assert_eq!(mapped.width, 100.0);
    assert_eq!(mapped.height, 100.0);
}

#[wasm_bindgen_test]
fn cleared_capture_reads_back_empty() {
    let mut handle = CaptureHandle::new(String::new(), "payload".to_string());
    handle.clear();

    assert_eq!(handle.photo_url(), "");
    assert_eq!(handle.qr_text(), "");
}
