//! Attachment component error types.

use thiserror::Error;

/// Failures while painting a document thumbnail.
///
/// Silent-skip conditions (missing link, wrong suffix, missing canvas,
/// unsupported environment) are not errors; the renderer returns `Ok` for
/// those.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("could not resolve document link: {0}")]
    Resolve(String),

    #[error("rendering engine unavailable: {0}")]
    Engine(String),

    #[error("document decode failed: {0}")]
    Decode(String),
}

/// Failures while launching a collaborative-editing session.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("session request failed: {0}")]
    Session(String),

    #[error("invalid session URL: {0}")]
    BadUrl(#[from] url::ParseError),

    #[error("no submission form for file {0}")]
    MissingForm(String),
}
