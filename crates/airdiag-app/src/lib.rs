//! AirDiag Application
//!
//! Command-line shell around the overlay engine: loads saved API responses,
//! renders the old and new diagram pages, draws the change overlay on each
//! and prints textual reports.

mod app;
mod backend;
mod cli;
mod config;
mod error;
pub mod report;

pub use app::{App, SurfaceOutput, run};
pub use backend::{
    BackendError, BackendResult, BoxFuture, DocumentRef, ImagePageRenderer, PageRenderer,
    RenderedPage,
};
pub use cli::{Cli, Command, CompareArgs};
pub use config::{AppConfig, OutputFormat};
pub use error::{AppError, AppResult};
