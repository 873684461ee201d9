pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{http::HttpMuhuratApi, view::HtmlDocumentView};
pub use crate::config::AppConfig;
pub use crate::core::{collector::StaticForm, controller::MuhuratController};
pub use crate::utils::error::{MuhuratError, Result};
