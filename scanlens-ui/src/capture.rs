use scanlens_core::Capture;
use wasm_bindgen::prelude::*;
use web_sys::Url;

/// Holder for the capture handed from the scan view to the result view.
///
/// Owns the blob object URL of the captured photo. `clear` is the explicit
/// release step: it revokes the URL so the browser can free the backing blob.
/// A cleared handle reads back as empty strings.
#[wasm_bindgen]
pub struct CaptureHandle {
    inner: Option<Capture>,
}

#[wasm_bindgen]
impl CaptureHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(photo_url: String, qr_text: String) -> CaptureHandle {
        CaptureHandle {
            inner: Some(Capture::new(photo_url, qr_text)),
        }
    }

    #[wasm_bindgen(getter, js_name = photoUrl)]
    pub fn photo_url(&self) -> String {
        self.inner
            .as_ref()
            .map(|capture| capture.photo_url().to_string())
            .unwrap_or_default()
    }

    #[wasm_bindgen(getter, js_name = qrText)]
    pub fn qr_text(&self) -> String {
        self.inner
            .as_ref()
            .map(|capture| capture.qr_text().to_string())
            .unwrap_or_default()
    }

    /// Releases the held capture, revoking the photo's object URL.
    pub fn clear(&mut self) {
        let Some(capture) = self.inner.take() else {
            return;
        };

        let (photo_url, _) = capture.into_parts();
        if !photo_url.is_empty() && Url::revoke_object_url(&photo_url).is_err() {
            log::warn!("failed to revoke object URL for captured photo");
        }
    }
}
