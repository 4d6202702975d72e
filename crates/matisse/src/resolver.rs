//! Image reference resolution.
//!
//! Exactly one decode path runs per call: the reference is classified once
//! (resource id, then data URI, then file path, then URL) and the first
//! matching rule wins.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::DynamicImage;
use matisse_core::{ImageRequest, ImageSource, PickerOptions};
use matisse_error::{ImageError, ImageErrorKind, MatisseResult};
use matisse_interface::ResourceStore;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Resolves an [`ImageRequest`] into a decoded in-memory image.
///
/// Holds the HTTP client used for the remote path and an optional store for
/// the embedded-resource path. Resolution never retries; a failed decode is
/// surfaced immediately as an [`ImageError`].
pub struct ImageResolver {
    client: reqwest::Client,
    resources: Option<Arc<dyn ResourceStore>>,
    fetch_timeout: Duration,
}

impl ImageResolver {
    /// Create a resolver with an optional embedded-resource store.
    pub fn new(resources: Option<Arc<dyn ResourceStore>>, options: &PickerOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            resources,
            fetch_timeout: options.fetch_timeout,
        }
    }

    /// Resolve a request to a decoded image, or fail with an [`ImageError`].
    #[instrument(skip(self, request), fields(resource_id = request.resource_id))]
    pub async fn resolve(&self, request: &ImageRequest) -> MatisseResult<DynamicImage> {
        let Some(source) = request.classify() else {
            error!(uri = ?request.uri, "Reference matched no resolution rule");
            return Err(ImageError::new(ImageErrorKind::NoSource).into());
        };

        match source {
            ImageSource::Resource(id) => self.decode_resource(id),
            ImageSource::DataUri(uri) => decode_data_uri(&uri),
            ImageSource::File(path) => decode_file(&path).await,
            ImageSource::Url(url) => self.fetch(url).await,
        }
    }

    fn decode_resource(&self, id: u32) -> MatisseResult<DynamicImage> {
        debug!(id, "Decoding embedded resource");
        let bytes = self
            .resources
            .as_ref()
            .and_then(|store| store.load(id))
            .ok_or_else(|| ImageError::new(ImageErrorKind::Resource(id)))?;
        decode_bytes(&bytes)
    }

    async fn fetch(&self, url: Url) -> MatisseResult<DynamicImage> {
        debug!(%url, "Fetching remote image");
        let response = self
            .client
            .get(url)
            .timeout(self.fetch_timeout)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Image fetch failed");
                ImageError::new(ImageErrorKind::Fetch(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Image fetch returned error status");
            return Err(ImageError::new(ImageErrorKind::HttpStatus {
                status: status.as_u16(),
            })
            .into());
        }

        // The body is read to completion here, so the connection is released
        // whether or not the decode succeeds.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Fetch(e.to_string())))?;
        decode_bytes(&bytes)
    }
}

fn decode_data_uri(uri: &str) -> MatisseResult<DynamicImage> {
    let (_, payload) = uri.split_once(',').ok_or_else(|| {
        ImageError::new(ImageErrorKind::Base64("data URI has no payload".to_string()))
    })?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ImageError::new(ImageErrorKind::Base64(e.to_string())))?;
    decode_bytes(&bytes)
}

async fn decode_file(path: &Path) -> MatisseResult<DynamicImage> {
    debug!(path = %path.display(), "Reading image file");
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ImageError::new(ImageErrorKind::Io(format!("{}: {}", path.display(), e)))
    })?;
    decode_bytes(&bytes)
}

fn decode_bytes(bytes: &[u8]) -> MatisseResult<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| ImageError::new(ImageErrorKind::Decode(e.to_string())).into())
}
