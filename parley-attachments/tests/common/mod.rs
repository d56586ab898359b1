//! Shared fakes: an in-memory surface, document engine, and API client.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use parley_api::SessionDescriptor;
use parley_attachments::engine::{EngineLoader, PdfDocument, PdfEngine, PdfPage, Viewport};
use parley_attachments::error::{LaunchError, ThumbnailError};
use parley_attachments::surface::{CanvasSurface, LaunchForm, LoaderIndicator, RenderSurface};
use parley_attachments::{ApiClient, EngineSlot};
use tokio::sync::Notify;
use url::Url;

// --- surface ---

#[derive(Default)]
pub struct FakeCanvas {
    pub size: Mutex<Option<(u32, u32)>>,
    pub max_widths: Mutex<Vec<String>>,
    pub visible: Mutex<bool>,
}

impl CanvasSurface for FakeCanvas {
    fn set_size(&self, width: u32, height: u32) {
        *self.size.lock().unwrap() = Some((width, height));
    }

    fn set_max_width(&self, keyword: &str) {
        self.max_widths.lock().unwrap().push(keyword.to_string());
    }

    fn set_visible(&self, visible: bool) {
        *self.visible.lock().unwrap() = visible;
    }
}

#[derive(Default)]
pub struct FakeLoader {
    pub visible: Mutex<bool>,
    pub times_shown: AtomicUsize,
}

impl LoaderIndicator for FakeLoader {
    fn set_visible(&self, visible: bool) {
        if visible {
            self.times_shown.fetch_add(1, Ordering::SeqCst);
        }
        *self.visible.lock().unwrap() = visible;
    }
}

pub struct FakeForm {
    pub action: Mutex<Option<String>>,
    pub token: Mutex<Option<String>>,
    pub submitted: AtomicUsize,
    pub has_token_input: bool,
}

impl FakeForm {
    pub fn new(has_token_input: bool) -> Self {
        Self {
            action: Mutex::new(None),
            token: Mutex::new(None),
            submitted: AtomicUsize::new(0),
            has_token_input,
        }
    }
}

impl LaunchForm for FakeForm {
    fn set_action(&self, action: &str) {
        *self.action.lock().unwrap() = Some(action.to_string());
    }

    fn set_token(&self, _token_input_id: &str, token: &str) -> bool {
        if !self.has_token_input {
            return false;
        }
        *self.token.lock().unwrap() = Some(token.to_string());
        true
    }

    fn submit(&self) {
        self.submitted.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct FakeSurface {
    pub canvases: Mutex<HashMap<String, Arc<FakeCanvas>>>,
    pub loaders: Mutex<HashMap<String, Arc<FakeLoader>>>,
    pub forms: Mutex<HashMap<String, Arc<FakeForm>>>,
    pub failures: Mutex<Vec<String>>,
}

impl FakeSurface {
    pub fn with_canvas(self, canvas_id: &str) -> Self {
        self.canvases
            .lock()
            .unwrap()
            .insert(canvas_id.to_string(), Arc::new(FakeCanvas::default()));
        self
    }

    pub fn with_loader(self, loader_id: &str) -> Self {
        self.loaders
            .lock()
            .unwrap()
            .insert(loader_id.to_string(), Arc::new(FakeLoader::default()));
        self
    }

    pub fn with_form(self, form_id: &str, has_token_input: bool) -> Self {
        self.forms
            .lock()
            .unwrap()
            .insert(form_id.to_string(), Arc::new(FakeForm::new(has_token_input)));
        self
    }

    pub fn canvas_state(&self, canvas_id: &str) -> Arc<FakeCanvas> {
        self.canvases.lock().unwrap().get(canvas_id).unwrap().clone()
    }

    pub fn loader_state(&self, loader_id: &str) -> Arc<FakeLoader> {
        self.loaders.lock().unwrap().get(loader_id).unwrap().clone()
    }

    pub fn form_state(&self, form_id: &str) -> Arc<FakeForm> {
        self.forms.lock().unwrap().get(form_id).unwrap().clone()
    }
}

impl RenderSurface for FakeSurface {
    fn canvas(&self, canvas_id: &str) -> Option<Arc<dyn CanvasSurface>> {
        self.canvases
            .lock()
            .unwrap()
            .get(canvas_id)
            .cloned()
            .map(|c| c as Arc<dyn CanvasSurface>)
    }

    fn loader(&self, loader_id: &str) -> Option<Arc<dyn LoaderIndicator>> {
        self.loaders
            .lock()
            .unwrap()
            .get(loader_id)
            .cloned()
            .map(|l| l as Arc<dyn LoaderIndicator>)
    }

    fn form(&self, form_id: &str) -> Option<Arc<dyn LaunchForm>> {
        self.forms
            .lock()
            .unwrap()
            .get(form_id)
            .cloned()
            .map(|f| f as Arc<dyn LaunchForm>)
    }

    fn show_failure(&self, message: &str) {
        self.failures.lock().unwrap().push(message.to_string());
    }
}

// --- document engine ---

/// Engine serving a single fixed page of 600x800 points.
#[derive(Default)]
pub struct FakeEngine {
    pub worker_sources: Mutex<Vec<Url>>,
    pub opened: Mutex<Vec<Url>>,
    pub opens: AtomicUsize,
    pub fail_open: bool,
}

#[async_trait]
impl PdfEngine for FakeEngine {
    fn set_worker_source(&self, script: &Url) {
        self.worker_sources.lock().unwrap().push(script.clone());
    }

    async fn open(&self, url: &Url) -> Result<Box<dyn PdfDocument>, ThumbnailError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if self.fail_open {
            return Err(ThumbnailError::Decode("corrupt document".into()));
        }
        self.opened.lock().unwrap().push(url.clone());
        Ok(Box::new(FakeDocument))
    }
}

pub struct FakeDocument;

#[async_trait]
impl PdfDocument for FakeDocument {
    async fn page(&self, number: u32) -> Result<Box<dyn PdfPage>, ThumbnailError> {
        if number != 1 {
            return Err(ThumbnailError::Decode(format!("no page {number}")));
        }
        Ok(Box::new(FakePage))
    }
}

pub struct FakePage;

#[async_trait]
impl PdfPage for FakePage {
    fn viewport(&self, scale: f32) -> Viewport {
        Viewport {
            width: 600.0 * scale,
            height: 800.0 * scale,
        }
    }

    async fn render(
        &self,
        _canvas: &dyn CanvasSurface,
        _viewport: Viewport,
    ) -> Result<(), ThumbnailError> {
        Ok(())
    }
}

pub struct FakeEngineLoader {
    pub engine: Arc<FakeEngine>,
}

#[async_trait]
impl EngineLoader for FakeEngineLoader {
    async fn load(&self) -> Result<Arc<dyn PdfEngine>, ThumbnailError> {
        Ok(self.engine.clone() as Arc<dyn PdfEngine>)
    }
}

pub fn engine_slot(engine: Arc<FakeEngine>) -> EngineSlot {
    EngineSlot::new(Arc::new(FakeEngineLoader { engine }))
}

// --- API client ---

/// Client handing out one fixed session; optionally gated so a call blocks
/// until released, for overlap tests.
pub struct FakeApiClient {
    pub calls: AtomicUsize,
    pub paths: Mutex<Vec<String>>,
    pub gate: Option<Arc<Notify>>,
    pub response: Result<SessionDescriptor, String>,
}

impl FakeApiClient {
    pub fn returning(url: &str, token: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            paths: Mutex::new(Vec::new()),
            gate: None,
            response: Ok(SessionDescriptor {
                url: url.to_string(),
                token: token.to_string(),
            }),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            paths: Mutex::new(Vec::new()),
            gate: None,
            response: Err(message.to_string()),
        }
    }

    pub fn gated(url: &str, token: &str, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::returning(url, token)
        }
    }
}

#[async_trait]
impl ApiClient for FakeApiClient {
    async fn get_session(&self, path: &str) -> Result<SessionDescriptor, LaunchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.paths.lock().unwrap().push(path.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.response
            .clone()
            .map_err(LaunchError::Session)
    }
}
