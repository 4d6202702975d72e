//! Image reference types and classification.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// A caller-supplied image reference.
///
/// Two calling conventions are accepted: the structured form with an
/// explicit embedded-resource id, and the legacy plain-URI form adapted via
/// [`From`]. A zero `resource_id` means "no resource requested".
///
/// # Examples
///
/// ```
/// use matisse_core::ImageRequest;
///
/// let legacy: ImageRequest = "https://example.com/cover.png".into();
/// assert_eq!(legacy.resource_id, 0);
///
/// let bundled = ImageRequest::resource(42);
/// assert_eq!(bundled.uri, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    /// Embedded resource identifier; zero when absent
    #[serde(default)]
    pub resource_id: u32,
    /// Image URI: data URI, file path, or remote URL
    #[serde(default)]
    pub uri: Option<String>,
}

impl ImageRequest {
    /// Reference an embedded resource by id.
    pub fn resource(resource_id: u32) -> Self {
        Self {
            resource_id,
            uri: None,
        }
    }

    /// Reference an image by URI.
    pub fn uri(uri: impl Into<String>) -> Self {
        Self {
            resource_id: 0,
            uri: Some(uri.into()),
        }
    }

    /// Classify this request into at most one decodable source.
    ///
    /// Rules are checked in order and the first match wins: embedded
    /// resource, `data:image` URI, `file://` path, then http(s) URL. A
    /// request matching none of the rules yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matisse_core::{ImageRequest, ImageSource};
    ///
    /// let source = ImageRequest::uri("data:image/png;base64,AAAA").classify();
    /// assert!(matches!(source, Some(ImageSource::DataUri(_))));
    ///
    /// assert_eq!(ImageRequest::uri("#not-a-real-uri").classify(), None);
    /// ```
    pub fn classify(&self) -> Option<ImageSource> {
        if self.resource_id != 0 {
            return Some(ImageSource::Resource(self.resource_id));
        }

        let uri = self.uri.as_deref()?;

        if uri.starts_with("data:image") {
            return Some(ImageSource::DataUri(uri.to_string()));
        }

        if let Some(path) = uri.strip_prefix("file://") {
            return Some(ImageSource::File(PathBuf::from(path)));
        }

        if let Ok(url) = Url::parse(uri) {
            if matches!(url.scheme(), "http" | "https") {
                return Some(ImageSource::Url(url));
            }
        }

        None
    }
}

impl From<&str> for ImageRequest {
    fn from(uri: &str) -> Self {
        Self::uri(uri)
    }
}

impl From<String> for ImageRequest {
    fn from(uri: String) -> Self {
        Self::uri(uri)
    }
}

/// Where image content is sourced from, after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An image bundled with the application, addressed by id
    Resource(u32),
    /// A `data:image` URI carrying a base64 payload
    DataUri(String),
    /// A local file path, `file://` scheme already stripped
    File(PathBuf),
    /// A remote http(s) URL
    Url(Url),
}
