//! The attachment view: one attachment record wired to its surface.
//!
//! Construction is pure (classification, collapse derivation); `mount`
//! starts the reactive machinery. All collaborators arrive as explicit
//! dependencies, never fetched from ambient scope.

use std::sync::Arc;

use parley_api::{AttachmentRecord, MessageContext, ViewSettings};
use tokio::task::JoinHandle;

use crate::collapse::CollapseController;
use crate::colors;
use crate::error::LaunchError;
use crate::launch::CollaborativeEditLauncher;
use crate::markdown::BodyRenderer;
use crate::resolve::{FileInfo, resolve_file};
use crate::surface::{RenderSurface, ids};
use crate::thumbnail::{PdfThumbnailRenderer, RenderTasks};
use crate::time;

/// Inline image loading: per-message override, then the user's preferences,
/// then on.
pub fn load_image(record: &AttachmentRecord, settings: &ViewSettings) -> bool {
    if let Some(download) = record.download_images {
        return download;
    }
    if settings.auto_image_load == Some(false) {
        return false;
    }
    if settings.save_mobile_bandwidth == Some(true) {
        return false;
    }
    true
}

/// Collaborators the view drives; shared across attachments in a message.
#[derive(Clone)]
pub struct Collaborators {
    pub body: Arc<dyn BodyRenderer>,
    pub renderer: Arc<PdfThumbnailRenderer>,
    pub launcher: Arc<CollaborativeEditLauncher>,
    pub surface: Arc<dyn RenderSurface>,
}

/// View state for one attachment inside one message.
pub struct AttachmentView {
    record: AttachmentRecord,
    ctx: MessageContext,
    settings: ViewSettings,
    info: FileInfo,
    collapse: Arc<CollapseController>,
    collaborators: Collaborators,
    tasks: Arc<RenderTasks>,
    watch_task: Option<JoinHandle<()>>,
}

impl AttachmentView {
    pub fn new(
        record: AttachmentRecord,
        ctx: MessageContext,
        settings: ViewSettings,
        collaborators: Collaborators,
    ) -> Self {
        let info = resolve_file(&record, &ctx);
        let collapse = Arc::new(CollapseController::new(&record, &settings));
        Self {
            record,
            ctx,
            settings,
            info,
            collapse,
            collaborators,
            tasks: Arc::new(RenderTasks::new()),
            watch_task: None,
        }
    }

    // --- derived fields the rendering surface reads ---

    pub fn parsed_text(&self) -> Option<String> {
        self.record
            .text
            .as_deref()
            .map(|text| self.collaborators.body.render(text))
    }

    pub fn parsed_pretext(&self) -> Option<String> {
        self.record
            .pretext
            .as_deref()
            .map(|pretext| self.collaborators.body.render(pretext))
    }

    pub fn markdown_in_pretext(&self) -> bool {
        self.record.mrkdwn_in.iter().any(|field| field == "pretext")
    }

    pub fn load_image(&self) -> bool {
        load_image(&self.record, &self.settings)
    }

    /// Display height for inline images; the template may override it.
    pub fn image_height(&self, height: Option<u32>) -> u32 {
        height.unwrap_or(200)
    }

    pub fn color(&self) -> Option<&str> {
        self.record.color.as_deref().map(colors::resolve)
    }

    pub fn time(&self) -> Option<String> {
        self.record.ts.map(time::format)
    }

    pub fn is_file(&self) -> bool {
        self.record.kind.as_deref() == Some("file")
    }

    pub fn is_pdf(&self) -> bool {
        self.info.is_pdf
    }

    pub fn is_odf(&self) -> bool {
        self.info.is_odf
    }

    pub fn file_id(&self) -> Option<&str> {
        self.info.file_id.as_deref()
    }

    pub fn collapsed(&self) -> bool {
        self.collapse.get()
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        self.collapse.set(collapsed);
    }

    pub fn toggle_collapsed(&self) {
        self.collapse.toggle();
    }

    // --- reactive wiring ---

    /// Whether the message file should get a thumbnail at all.
    fn renders_thumbnail(&self) -> bool {
        self.ctx
            .file
            .as_ref()
            .is_some_and(|file| file.content_type == "application/pdf")
    }

    /// Start observing collapse state. Rendering is deferred to the spawned
    /// tasks, so mounting never blocks the first paint.
    ///
    /// Idempotent per view: a second call replaces the watch task.
    pub fn mount(&mut self) {
        if !self.renders_thumbnail() {
            return;
        }

        if !self.collapse.get() {
            self.schedule_render();
        }

        let mut rx = self.collapse.subscribe();
        let trigger = self.render_trigger();
        let task = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let collapsed = *rx.borrow_and_update();
                if !collapsed {
                    trigger.schedule();
                }
            }
        });
        if let Some(previous) = self.watch_task.replace(task) {
            previous.abort();
        }
    }

    /// Stop observing and cancel in-flight renders.
    pub fn unmount(&mut self) {
        if let Some(task) = self.watch_task.take() {
            task.abort();
        }
        self.tasks.abort_all();
    }

    fn render_trigger(&self) -> RenderTrigger {
        let canvas_id = self
            .ctx
            .file
            .as_ref()
            .map(|file| ids::canvas(&file.id))
            .unwrap_or_default();
        RenderTrigger {
            renderer: self.collaborators.renderer.clone(),
            surface: self.collaborators.surface.clone(),
            tasks: self.tasks.clone(),
            canvas_id,
            link: self.record.title_link.clone(),
        }
    }

    fn schedule_render(&self) {
        self.render_trigger().schedule();
    }

    // --- click path ---

    /// Activation of the open-in-editor control.
    ///
    /// No-op for attachments that never resolved a file id. Failures are
    /// reported on the surface and returned to the caller.
    pub async fn open_in_editor(&self, user_id: &str) -> Result<(), LaunchError> {
        let Some(file_id) = self.info.file_id.as_deref() else {
            return Ok(());
        };
        tracing::debug!("open-in-editor activated for file {}", file_id);

        match self.collaborators.launcher.launch(file_id, user_id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!("editor launch failed for file {}: {}", file_id, e);
                self.collaborators
                    .surface
                    .show_failure(&format!("Could not open the document editor: {e}"));
                Err(e)
            }
        }
    }
}

impl Drop for AttachmentView {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Everything a spawned render task needs, detached from the view's
/// lifetime.
struct RenderTrigger {
    renderer: Arc<PdfThumbnailRenderer>,
    surface: Arc<dyn RenderSurface>,
    tasks: Arc<RenderTasks>,
    canvas_id: String,
    link: Option<String>,
}

impl RenderTrigger {
    /// Spawn a render, replacing any in-flight render for the same canvas.
    fn schedule(&self) {
        let renderer = self.renderer.clone();
        let surface = self.surface.clone();
        let canvas_id = self.canvas_id.clone();
        let link = self.link.clone();
        let handle = tokio::spawn(async move {
            if let Err(e) = renderer.render(&canvas_id, link.as_deref()).await {
                tracing::error!("thumbnail render failed for canvas {}: {}", canvas_id, e);
                surface.show_failure(&format!("Could not preview the document: {e}"));
            }
        });
        self.tasks.replace(&self.canvas_id, handle);
    }
}
