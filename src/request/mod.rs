// 每個請求只描述路徑、HTTP 方法、JSON body 與回應要轉換的模型

pub mod transactions;
pub mod vouchers;

use crate::domain::model::ModelKind;
use crate::utils::error::{Result, SdkError};

pub use transactions::{CancelTransaction, GetDirectdebit, GetTransaction};
pub use vouchers::{ActivateVoucher, ChargeVoucher, VoucherAmount, VoucherPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

pub trait Request: Send + Sync {
    /// 相對於 `{api_url}/v{version}/` 的路徑
    fn uri(&self) -> String;

    fn method(&self) -> Method;

    fn body(&self) -> Option<serde_json::Value> {
        None
    }

    /// 回應要轉換成的模型；`None` 代表回應不轉換
    fn response_model(&self) -> Option<ModelKind> {
        None
    }
}

/// 路徑參數不可為空
pub(crate) fn required_param(param: &'static str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(SdkError::MissingParam { param });
    }
    Ok(value)
}
