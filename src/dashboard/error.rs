// ABOUTME: Error types for dashboard rendering
// ABOUTME: Defines template and file-write failures for the HTML generator

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to register dashboard template: {0}")]
    TemplateInit(#[from] handlebars::TemplateError),

    #[error("failed to render dashboard template: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("failed to write dashboard {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
