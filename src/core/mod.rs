pub mod collector;
pub mod controller;
pub mod renderer;

pub use crate::domain::model::{
    FailureKind, GenerationOutcome, MuhuratQuery, MuhuratResponse, MuhuratWindow, Severity,
};
pub use crate::domain::ports::{ConfigProvider, FormSource, MuhuratApi, ResultView};
pub use crate::utils::error::Result;
