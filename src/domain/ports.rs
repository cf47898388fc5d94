use crate::domain::record::Record;
use crate::request::Request;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 送出請求並回傳解碼後的回應內容
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &dyn Request) -> Result<Record>;
}
