/// Turning image sources into displayable handles
///
/// Data URLs from the primary endpoint are decoded back to PNG bytes;
/// placeholder sources are rasterized on the spot. Handles are created
/// once per gallery entry and cached by the application.

use iced::widget::image::Handle;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::generate::placeholder;
use crate::state::data::{ImageSource, DATA_URL_PREFIX};

/// Build a widget handle for a source, or `None` when an inline payload
/// turns out to be undisplayable
pub fn handle_for(source: &ImageSource) -> Option<Handle> {
    match source {
        ImageSource::DataUrl(url) => decode_data_url(url).map(Handle::from_bytes),
        ImageSource::Placeholder {
            seed,
            width,
            height,
        } => {
            let pixels = placeholder::render(*seed, *width, *height);
            Some(Handle::from_rgba(*width, *height, pixels.into_raw()))
        }
    }
}

fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let encoded = url.strip_prefix(DATA_URL_PREFIX)?;
    BASE64.decode(encoded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_url() {
        assert_eq!(
            decode_data_url("data:image/png;base64,Zm9v"),
            Some(b"foo".to_vec())
        );
        assert_eq!(decode_data_url("https://example.com/image.png"), None);
        assert_eq!(decode_data_url("data:image/png;base64,???"), None);
    }

    #[test]
    fn test_handle_for_placeholder_never_fails() {
        let source = ImageSource::Placeholder {
            seed: 5,
            width: 8,
            height: 8,
        };
        assert!(handle_for(&source).is_some());
    }

    #[test]
    fn test_handle_for_data_url() {
        let source = ImageSource::from_png_base64("Zm9v");
        assert!(handle_for(&source).is_some());
    }
}
