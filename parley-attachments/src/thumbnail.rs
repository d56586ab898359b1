//! First-page document thumbnails.
//!
//! Paints page 1 of a PDF attachment onto its canvas at half native scale.
//! The operation is autonomous: it mutates the surface and nothing else,
//! and every ineligibility condition is a silent no-op so the message list
//! renders the plain file card instead.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::engine::EngineSlot;
use crate::env::{self, EnvironmentProbe};
use crate::error::ThumbnailError;
use crate::surface::{RenderSurface, ids};
use crate::urls::UrlResolver;

/// Thumbnails render at half native page size.
const THUMBNAIL_SCALE: f32 = 0.5;

/// Vendor-prefixed fill-width keywords, applied in order; an engine keeps
/// the last keyword it understands.
const FILL_WIDTH_KEYWORDS: [&str; 2] = ["-webkit-fill-available", "-moz-available"];

/// Renders document thumbnails onto the surface.
pub struct PdfThumbnailRenderer {
    engine: EngineSlot,
    surface: Arc<dyn RenderSurface>,
    urls: UrlResolver,
    probe: Arc<dyn EnvironmentProbe>,
}

impl PdfThumbnailRenderer {
    pub fn new(
        engine: EngineSlot,
        surface: Arc<dyn RenderSurface>,
        urls: UrlResolver,
        probe: Arc<dyn EnvironmentProbe>,
    ) -> Self {
        Self {
            engine,
            surface,
            urls,
            probe,
        }
    }

    /// Paint page 1 of `link` onto the canvas identified by `canvas_id`.
    ///
    /// Silent no-op when the environment is unsupported, the link is absent
    /// or not a `.pdf`, or the canvas is not mounted. Decode failures
    /// propagate; the caller isolates them per attachment.
    pub async fn render(
        &self,
        canvas_id: &str,
        link: Option<&str>,
    ) -> Result<(), ThumbnailError> {
        if env::is_unsupported(self.probe.as_ref()) {
            tracing::debug!("skipping thumbnail for {}: unsupported engine", canvas_id);
            return Ok(());
        }

        let Some(link) = link else {
            return Ok(());
        };
        if !crate::resolve::has_suffix(link, ".pdf") {
            return Ok(());
        }

        let link = self
            .urls
            .absolute(link)
            .map_err(|e| ThumbnailError::Resolve(e.to_string()))?;

        let Some(canvas) = self.surface.canvas(canvas_id) else {
            return Ok(());
        };

        let engine = self.engine.acquire().await?;
        engine.set_worker_source(&self.urls.worker_script()?);

        let loader = self.surface.loader(&ids::loader(canvas_id));
        if let Some(loader) = &loader {
            loader.set_visible(true);
        }

        let document = engine.open(&link).await?;
        let page = document.page(1).await?;
        let viewport = page.viewport(THUMBNAIL_SCALE);
        canvas.set_size(viewport.width as u32, viewport.height as u32);
        page.render(canvas.as_ref(), viewport).await?;

        if let Some(loader) = &loader {
            loader.set_visible(false);
        }

        for keyword in FILL_WIDTH_KEYWORDS {
            canvas.set_max_width(keyword);
        }
        canvas.set_visible(true);

        Ok(())
    }
}

/// In-flight render tasks keyed by canvas id.
///
/// Scheduling a render for a canvas aborts whatever was already running
/// there, so rapid collapse toggling ends with exactly one render landing.
#[derive(Default)]
pub struct RenderTasks {
    tasks: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl RenderTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel-and-replace: abort any task registered under `canvas_id`,
    /// then register `handle` in its place.
    pub fn replace(&self, canvas_id: &str, handle: JoinHandle<()>) {
        let mut tasks = self.tasks.lock().expect("render task registry poisoned");
        if let Some(previous) = tasks.insert(canvas_id.to_string(), handle) {
            previous.abort();
        }
    }

    /// Abort everything; called on unmount.
    pub fn abort_all(&self) {
        let mut tasks = self.tasks.lock().expect("render task registry poisoned");
        for (_, handle) in tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for RenderTasks {
    fn drop(&mut self) {
        self.abort_all();
    }
}
