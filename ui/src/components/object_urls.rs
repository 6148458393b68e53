use js_sys::{Array, Uint8Array};
use payloads::ImageFile;
use room_form::PreviewSource;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Browser-backed preview source. Each create allocates an object URL for a
/// blob holding the file bytes; revoke hands the URL back to the browser.
#[derive(Default)]
pub struct ObjectUrlSource;

impl PreviewSource for ObjectUrlSource {
    fn create(&self, image: &ImageFile) -> String {
        let bytes = Uint8Array::from(image.data.as_slice());
        let parts = Array::of1(&JsValue::from(bytes));

        let options = BlobPropertyBag::new();
        options.set_type(&image.content_type);

        let blob =
            match Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            {
                Ok(blob) => blob,
                Err(e) => {
                    tracing::error!(?e, "failed to build preview blob");
                    return String::new();
                }
            };

        match Url::create_object_url_with_blob(&blob) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(?e, "failed to create object URL");
                String::new()
            }
        }
    }

    fn revoke(&self, url: &str) {
        if url.is_empty() {
            return;
        }
        if let Err(e) = Url::revoke_object_url(url) {
            tracing::error!(?e, "failed to revoke object URL");
        }
    }
}
