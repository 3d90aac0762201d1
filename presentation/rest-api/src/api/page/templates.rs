use std::path::PathBuf;

use thiserror::Error;

/// Template used for the home page and the soft 404 fallback.
pub const INDEX_TEMPLATE: &str = "index";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template.not_found")]
    NotFound(String),
    #[error("template.io_error")]
    Io(#[from] std::io::Error),
}

/// Reads page templates from disk on every request.
///
/// Pages are rendered client-side, so a template is served as-is.
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn render(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.dir.join(format!("{}.html", name));
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => Ok(html),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(TemplateError::NotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
