//! Attachment view component for the Parley client.
//!
//! Renders one chat-message attachment (file card, inline media, accent
//! color) and, for recognized office documents, offers an in-browser
//! collaborative-editing handoff. Three pieces carry the weight:
//!
//! - [`thumbnail::PdfThumbnailRenderer`] paints page 1 of a PDF onto a
//!   canvas surface, gated by the environment and by collapse state;
//! - [`launch::CollaborativeEditLauncher`] trades a file id for a one-time
//!   editor session and navigates via a hidden form submission;
//! - [`collapse::CollapseController`] is the observable flag wiring the two
//!   to the view's visibility.
//!
//! The host supplies collaborators behind traits: a render surface
//! ([`surface`]), a document engine ([`engine`]), an authenticated API
//! client ([`client`]), and a body renderer ([`markdown`]).

pub mod client;
pub mod collapse;
pub mod colors;
pub mod engine;
pub mod env;
pub mod error;
pub mod launch;
pub mod markdown;
pub mod resolve;
pub mod surface;
pub mod thumbnail;
pub mod time;
pub mod urls;
pub mod view;

pub use client::{ApiClient, HttpApiClient};
pub use collapse::CollapseController;
pub use engine::{EngineSlot, PdfDocument, PdfEngine, PdfPage, Viewport};
pub use env::EnvironmentProbe;
pub use error::{LaunchError, ThumbnailError};
pub use launch::CollaborativeEditLauncher;
pub use resolve::{FileInfo, resolve_file};
pub use surface::{CanvasSurface, LaunchForm, RenderSurface};
pub use thumbnail::PdfThumbnailRenderer;
pub use urls::UrlResolver;
pub use view::{AttachmentView, Collaborators};
