//! Render-surface seam: the elements one attachment owns on screen.
//!
//! The host page provides a canvas, an optional loading indicator, and a
//! hidden submission form per file, each addressable by a deterministic
//! identifier derived from the file id (see [`ids`]).

use std::sync::Arc;

/// Deterministic element identifiers for one attachment's surface elements.
pub mod ids {
    /// The thumbnail canvas is keyed directly by the file id.
    pub fn canvas(file_id: &str) -> String {
        file_id.to_string()
    }

    pub fn loader(canvas_id: &str) -> String {
        format!("js-loading-{canvas_id}")
    }

    pub fn form(file_id: &str) -> String {
        format!("collabora-submit-form-{file_id}")
    }

    pub fn token_input(file_id: &str) -> String {
        format!("collabora-form-access-token-{file_id}")
    }
}

/// The page elements the component reads and mutates.
pub trait RenderSurface: Send + Sync {
    /// Look up the thumbnail canvas, if mounted.
    fn canvas(&self, canvas_id: &str) -> Option<Arc<dyn CanvasSurface>>;

    /// Look up the loading indicator, if the template placed one.
    fn loader(&self, loader_id: &str) -> Option<Arc<dyn LoaderIndicator>>;

    /// Look up the hidden editor-submission form for a file.
    fn form(&self, form_id: &str) -> Option<Arc<dyn LaunchForm>>;

    /// User-visible failure channel for network-dependent operations.
    fn show_failure(&self, message: &str);
}

/// A canvas element plus its 2D drawing surface.
pub trait CanvasSurface: Send + Sync {
    /// Size the drawing buffer to the viewport.
    fn set_size(&self, width: u32, height: u32);

    /// Apply a `max-width` style keyword. Called once per vendor-prefixed
    /// keyword; engines keep the last one they understand.
    fn set_max_width(&self, keyword: &str);

    /// Canvases stay hidden until the first render lands, so decode never
    /// causes a layout flash.
    fn set_visible(&self, visible: bool);
}

/// The spinner shown while a document decodes.
pub trait LoaderIndicator: Send + Sync {
    fn set_visible(&self, visible: bool);
}

/// Hidden form carrying the one-time token to the external editor.
///
/// Submission is a full-page navigation; the token travels in the form
/// body, never in a bookmarkable URL.
pub trait LaunchForm: Send + Sync {
    fn set_action(&self, action: &str);

    /// Set the hidden token field. `false` means the input is missing from
    /// the template, which aborts the launch.
    fn set_token(&self, token_input_id: &str, token: &str) -> bool;

    fn submit(&self);
}
