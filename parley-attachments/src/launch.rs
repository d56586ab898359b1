//! Collaborative-editing handoff.
//!
//! Trades a file id for a one-time editor session, then navigates via the
//! attachment's hidden form. The form carries the access token in its body,
//! so the token never lands in a bookmarkable or shareable URL.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::client::ApiClient;
use crate::error::LaunchError;
use crate::surface::{RenderSurface, ids};
use crate::urls::UrlResolver;

/// Application id registered with the editor integration.
pub const APP_ID: &str = "4606d1ee-9c83-499a-9dc7-84882dfd53b4";

/// Launches external collaborative-editing sessions.
pub struct CollaborativeEditLauncher {
    api: Arc<dyn ApiClient>,
    surface: Arc<dyn RenderSurface>,
    urls: UrlResolver,
    /// File ids with a launch already pending; repeat activations are
    /// ignored until the first resolves.
    pending: Mutex<HashSet<String>>,
}

impl CollaborativeEditLauncher {
    pub fn new(api: Arc<dyn ApiClient>, surface: Arc<dyn RenderSurface>, urls: UrlResolver) -> Self {
        Self {
            api,
            surface,
            urls,
            pending: Mutex::new(HashSet::new()),
        }
    }

    /// Obtain a session for `file_id` and submit the editor form.
    ///
    /// At most one launch is in flight per file id; activations while one
    /// is pending return `Ok` without issuing a second session request.
    pub async fn launch(&self, file_id: &str, user_id: &str) -> Result<(), LaunchError> {
        {
            let mut pending = self.pending.lock().expect("pending set poisoned");
            if !pending.insert(file_id.to_string()) {
                tracing::debug!("launch already pending for file {}, ignoring", file_id);
                return Ok(());
            }
        }

        let outcome = self.launch_inner(file_id, user_id).await;

        self.pending
            .lock()
            .expect("pending set poisoned")
            .remove(file_id);
        outcome
    }

    async fn launch_inner(&self, file_id: &str, user_id: &str) -> Result<(), LaunchError> {
        let session = self
            .api
            .get_session(&format!(
                "apps/public/{APP_ID}/collaboraURL/{file_id}/{user_id}"
            ))
            .await?;
        tracing::debug!("editor session obtained for file {}: {}", file_id, session.url);

        let wopi_src = self
            .urls
            .absolute(&format!("/api/apps/public/{APP_ID}/wopi/files/{file_id}"))?;

        // Vendor URL contract: the editor expects WOPISrc appended verbatim,
        // with no separator normalization.
        let action = format!("{}WOPISrc={}", session.url, wopi_src);

        let form = self
            .surface
            .form(&ids::form(file_id))
            .ok_or_else(|| LaunchError::MissingForm(file_id.to_string()))?;

        form.set_action(&action);
        if !form.set_token(&ids::token_input(file_id), &session.token) {
            return Err(LaunchError::MissingForm(file_id.to_string()));
        }
        form.submit();

        Ok(())
    }
}
