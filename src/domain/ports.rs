use crate::domain::model::{MuhuratQuery, MuhuratResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The three form inputs, read as currently presented.
pub trait FormSource: Send + Sync {
    fn start_date(&self) -> String;
    fn end_date(&self) -> String;
    fn request_type(&self) -> String;
}

/// The two page regions the controller writes to.
pub trait ResultView: Send + Sync {
    fn show_loading(&self);
    fn hide_loading(&self);
    fn replace_result(&self, html: String);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
}

#[async_trait]
pub trait MuhuratApi: Send + Sync {
    /// Returns only validated, `status == "success"` responses.
    async fn fetch(&self, query: &MuhuratQuery) -> Result<MuhuratResponse>;
}

#[async_trait]
impl<T: MuhuratApi + ?Sized> MuhuratApi for Arc<T> {
    async fn fetch(&self, query: &MuhuratQuery) -> Result<MuhuratResponse> {
        (**self).fetch(query).await
    }
}

impl<T: ResultView + ?Sized> ResultView for Arc<T> {
    fn show_loading(&self) {
        (**self).show_loading()
    }

    fn hide_loading(&self) {
        (**self).hide_loading()
    }

    fn replace_result(&self, html: String) {
        (**self).replace_result(html)
    }
}
