//! Document-rendering engine seam.
//!
//! Only the engine's documented entry points appear here: open a document,
//! fetch a page, compute a viewport, render into a canvas. Acquisition is
//! lazy and idempotent; one engine instance is shared by every thumbnail
//! the component paints.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use url::Url;

use crate::error::ThumbnailError;
use crate::surface::CanvasSurface;

/// Page dimensions at a given scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// A loaded document rendering engine.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    /// Point the engine's background worker at its script location.
    fn set_worker_source(&self, script: &Url);

    /// Fetch and open the document at `url`.
    async fn open(&self, url: &Url) -> Result<Box<dyn PdfDocument>, ThumbnailError>;
}

/// An open document.
#[async_trait]
pub trait PdfDocument: Send + Sync {
    /// Pages are numbered from 1.
    async fn page(&self, number: u32) -> Result<Box<dyn PdfPage>, ThumbnailError>;
}

/// One page of an open document.
#[async_trait]
pub trait PdfPage: Send + Sync {
    fn viewport(&self, scale: f32) -> Viewport;

    /// Render into the canvas's 2D surface and resolve on completion.
    async fn render(
        &self,
        canvas: &dyn CanvasSurface,
        viewport: Viewport,
    ) -> Result<(), ThumbnailError>;
}

/// Loads the engine on first use.
#[async_trait]
pub trait EngineLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn PdfEngine>, ThumbnailError>;
}

/// Lazily-initialized engine handle, bound to the component's scope.
///
/// The first acquisition loads the engine; later acquisitions reuse it.
/// A failed load is not cached, so the next render retries acquisition.
pub struct EngineSlot {
    loader: Arc<dyn EngineLoader>,
    cell: OnceCell<Arc<dyn PdfEngine>>,
}

impl EngineSlot {
    pub fn new(loader: Arc<dyn EngineLoader>) -> Self {
        Self {
            loader,
            cell: OnceCell::new(),
        }
    }

    pub async fn acquire(&self) -> Result<Arc<dyn PdfEngine>, ThumbnailError> {
        self.cell
            .get_or_try_init(|| self.loader.load())
            .await
            .cloned()
    }
}
