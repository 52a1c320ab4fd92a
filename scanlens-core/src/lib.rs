pub mod capture;
pub mod cover;
pub mod dimensions;
pub mod rect;

pub use capture::Capture;
pub use cover::{cover_scale, map_display_rect_to_video_rect_cover};
pub use dimensions::Dimensions;
pub use rect::Rect;
