//! HTTP client for the notes endpoint of a running booking server.

use anyhow::{Context, Result, bail};
use booking_core::{NewNote, Note};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

/// Posts notes to `<base_url>/api/notes`.
#[derive(Debug, Clone)]
pub struct NotesClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotesClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:7480`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/api/notes", self.base_url)
    }

    /// Create a note and return the stored record.
    pub async fn create_note(&self, note: &NewNote) -> Result<Note> {
        let url = self.notes_url();
        debug!(%url, "posting note");

        let response = self
            .http
            .post(&url)
            .json(note)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(ErrorBody {
                    error,
                    details: Some(details),
                }) => format!("{error}: {details}"),
                Ok(ErrorBody { error, .. }) => error,
                Err(_) => status.to_string(),
            };
            bail!("Server rejected note ({}): {}", status.as_u16(), message);
        }

        let created: Note = response
            .json()
            .await
            .context("Server returned an unreadable note")?;
        info!(note_id = created.id, "note submitted");
        Ok(created)
    }
}
