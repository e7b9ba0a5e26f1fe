use url::Url;

use crate::error::ImageError;

pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 200;

const LOCAL_BASE: &str = "app://studio.local/";

/// A placeholder image described entirely by its URL, e.g. `/placeholder.svg?height=200&width=300`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderImage {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl PlaceholderImage {
    pub fn parse(raw: &str) -> Result<Self, ImageError> {
        let invalid = |reason: String| ImageError::InvalidUrl {
            url: raw.to_string(),
            reason,
        };
        let base = Url::parse(LOCAL_BASE).map_err(|err| invalid(err.to_string()))?;
        let url = base.join(raw).map_err(|err| invalid(err.to_string()))?;

        let mut width = None;
        let mut height = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "width" => width = Some(parse_dimension("width", &value)?),
                "height" => height = Some(parse_dimension("height", &value)?),
                _ => {}
            }
        }

        Ok(Self {
            path: url.path().to_string(),
            width: width.unwrap_or(DEFAULT_WIDTH),
            height: height.unwrap_or(DEFAULT_HEIGHT),
        })
    }

    /// Like [`PlaceholderImage::parse`], falling back to the default box size.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "using default placeholder size");
            Self {
                path: raw.to_string(),
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            }
        })
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Size that fits `max_width` while keeping the aspect ratio, height capped at `max_height`.
    pub fn fit(&self, max_width: f32, max_height: f32) -> (f32, f32) {
        let width = max_width.max(0.0);
        let height = (width / self.aspect_ratio()).min(max_height.max(0.0));
        (width, height)
    }
}

fn parse_dimension(axis: &'static str, value: &str) -> Result<u32, ImageError> {
    match value.trim().parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ImageError::InvalidDimension {
            axis,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::products;

    #[test]
    fn catalog_placeholders_are_300_by_200() {
        for product in products() {
            let image = PlaceholderImage::parse(product.image_url).expect("parse");
            assert_eq!(image.path, "/placeholder.svg");
            assert_eq!((image.width, image.height), (300, 200));
        }
    }

    #[test]
    fn missing_dimensions_use_defaults() {
        let image = PlaceholderImage::parse("/placeholder.svg?width=640").expect("parse");
        assert_eq!((image.width, image.height), (640, DEFAULT_HEIGHT));
    }

    #[test]
    fn rejects_non_numeric_and_zero_dimensions() {
        assert_eq!(
            PlaceholderImage::parse("/placeholder.svg?height=tall"),
            Err(ImageError::InvalidDimension {
                axis: "height",
                value: "tall".to_string()
            })
        );
        assert!(PlaceholderImage::parse("/placeholder.svg?width=0").is_err());

        let fallback = PlaceholderImage::parse_or_default("/placeholder.svg?width=0");
        assert_eq!((fallback.width, fallback.height), (300, 200));
    }

    #[test]
    fn fit_keeps_aspect_ratio_until_height_cap() {
        let image = PlaceholderImage::parse("/placeholder.svg?height=200&width=300").expect("parse");
        assert_eq!(image.fit(150.0, 192.0), (150.0, 100.0));
        assert_eq!(image.fit(600.0, 192.0), (600.0, 192.0));
    }
}
