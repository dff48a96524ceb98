// ABOUTME: Dashboard module for the generated stats page
// ABOUTME: Exports the HTML renderer and its error types

pub mod error;
pub mod renderer;

pub use error::{RenderError, Result};
pub use renderer::DashboardRenderer;
