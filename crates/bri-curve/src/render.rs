//! Display composition for curve parameters.
//!
//! The display string of a curve is its formatted text followed by the
//! rendered image, base64-encoded and framed by [`IMAGE_DELIMITER`] so that a
//! report renderer can split text and images apart.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bri_types::{IMAGE_DELIMITER, NL};

use crate::descriptor::CurveDescriptor;
use crate::error::CurveResult;

/// Produces image bytes (typically an encoded PNG) for a curve.
pub trait CurveRenderer {
    fn render(&self, curve: &CurveDescriptor) -> CurveResult<Vec<u8>>;
}

/// A renderer that produces no image bytes.
///
/// The image frame is still emitted, so the text layout is identical to the
/// one produced with a real renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderRenderer;

impl CurveRenderer for PlaceholderRenderer {
    fn render(&self, _curve: &CurveDescriptor) -> CurveResult<Vec<u8>> {
        Ok(Vec::new())
    }
}

/// Compose the display string of a curve parameter.
///
/// Layout: a newline, the formatted curve without its final newline, then the
/// base64 image between two delimiters.
pub fn compose_display(
    curve: &CurveDescriptor,
    tab: &str,
    renderer: &dyn CurveRenderer,
) -> CurveResult<String> {
    let text = curve.format(tab);
    let text = text.strip_suffix(NL).unwrap_or(&text);
    let image = STANDARD.encode(renderer.render(curve)?);
    Ok(format!("{NL}{text}{IMAGE_DELIMITER}{image}{IMAGE_DELIMITER}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;

    struct FixedRenderer(Vec<u8>);

    impl CurveRenderer for FixedRenderer {
        fn render(&self, _curve: &CurveDescriptor) -> CurveResult<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    struct FailingRenderer;

    impl CurveRenderer for FailingRenderer {
        fn render(&self, _curve: &CurveDescriptor) -> CurveResult<Vec<u8>> {
            Err(CurveError::Render("no canvas".into()))
        }
    }

    fn curve() -> CurveDescriptor {
        CurveDescriptor::parse(r#"{"points": [{"x": 0, "y": 1}]}"#).unwrap()
    }

    #[test]
    fn display_frames_image_after_text() {
        let display = compose_display(&curve(), "    ", &FixedRenderer(b"ABC".to_vec())).unwrap();
        assert!(display.starts_with("\n    fromParams: false\n"));
        assert!(display.ends_with("1.000000\0QUJD\0"));
        assert_eq!(display.matches(IMAGE_DELIMITER).count(), 2);
    }

    #[test]
    fn placeholder_emits_empty_frame() {
        let display = compose_display(&curve(), "    ", &PlaceholderRenderer).unwrap();
        assert!(display.ends_with("\0\0"));
        assert!(!display.contains("\n\0"));
    }

    #[test]
    fn renderer_failure_propagates() {
        let err = compose_display(&curve(), "    ", &FailingRenderer).unwrap_err();
        assert!(matches!(err, CurveError::Render(_)));
    }
}
