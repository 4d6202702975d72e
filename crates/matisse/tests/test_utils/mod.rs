//! Test utilities for Matisse tests.
//!
//! Provides a scripted mock generator, in-process image fixtures, and a
//! single-shot HTTP server for the remote-fetch path.

#![allow(dead_code)]

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{DynamicImage, Rgba, RgbaImage};
use matisse::{
    ColorErrorKind, GeneratorErrorKind, ImageErrorKind, MatisseError, MatisseErrorKind,
    MatisseResult, Palette, PaletteGenerator,
};
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Mock palette generator with a scripted result and call counting.
pub struct MockGenerator {
    palette: Option<Palette>,
    delay: Option<Duration>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGenerator {
    /// A generator that always produces the given palette.
    pub fn new_palette(palette: Palette) -> Self {
        Self {
            palette: Some(palette),
            delay: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// A generator whose extraction produces nothing usable.
    pub fn new_empty() -> Self {
        Self {
            palette: None,
            delay: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// A generator that stalls for `delay` before completing.
    ///
    /// Useful for exercising the generation deadline.
    pub fn new_stalled(delay: Duration) -> Self {
        Self {
            palette: None,
            delay: Some(delay),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl PaletteGenerator for MockGenerator {
    async fn generate(&self, _image: &DynamicImage) -> MatisseResult<Option<Palette>> {
        *self.call_count.lock().unwrap() += 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.palette)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// A 1×1 PNG with the given RGBA pixel, encoded in-process.
pub fn png_pixel(rgba: [u8; 4]) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba(rgba)));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    bytes
}

/// A `data:image` URI carrying the 1×1 PNG fixture.
pub fn png_data_uri(rgba: [u8; 4]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png_pixel(rgba)))
}

/// Serve exactly one HTTP response on an ephemeral port, returning the URL.
pub async fn serve_once(status: &'static str, content_type: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let mut request = [0u8; 1024];
        let _ = stream.read(&mut request).await;
        let header = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(header.as_bytes()).await.expect("write header");
        stream.write_all(&body).await.expect("write body");
        stream.shutdown().await.ok();
    });

    format!("http://{addr}/image.png")
}

/// Unwrap the image kind from a rejection.
pub fn image_kind(err: &MatisseError) -> &ImageErrorKind {
    match err.kind() {
        MatisseErrorKind::Image(image) => &image.kind,
        other => panic!("expected image error, got {other}"),
    }
}

/// Unwrap the color kind from a rejection.
pub fn color_kind(err: &MatisseError) -> &ColorErrorKind {
    match err.kind() {
        MatisseErrorKind::Color(color) => &color.kind,
        other => panic!("expected color error, got {other}"),
    }
}

/// Unwrap the generator kind from a rejection.
pub fn generator_kind(err: &MatisseError) -> &GeneratorErrorKind {
    match err.kind() {
        MatisseErrorKind::Generator(generator) => &generator.kind,
        other => panic!("expected generator error, got {other}"),
    }
}
