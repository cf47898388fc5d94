use crate::domain::model::ModelKind;
use crate::request::{required_param, Method, Request};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct GetTransaction {
    transaction_id: String,
}

impl GetTransaction {
    pub fn new(transaction_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            transaction_id: required_param("transactionId", transaction_id)?,
        })
    }
}

impl Request for GetTransaction {
    fn uri(&self) -> String {
        format!("transactions/{}", self.transaction_id)
    }

    fn method(&self) -> Method {
        Method::Get
    }

    fn response_model(&self) -> Option<ModelKind> {
        Some(ModelKind::Transaction)
    }
}

/// 取消 (void) 一筆交易
#[derive(Debug, Clone)]
pub struct CancelTransaction {
    transaction_id: String,
}

impl CancelTransaction {
    pub fn new(transaction_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            transaction_id: required_param("transactionId", transaction_id)?,
        })
    }
}

impl Request for CancelTransaction {
    fn uri(&self) -> String {
        format!("transactions/{}/void", self.transaction_id)
    }

    fn method(&self) -> Method {
        Method::Patch
    }

    fn response_model(&self) -> Option<ModelKind> {
        Some(ModelKind::Transaction)
    }
}

#[derive(Debug, Clone)]
pub struct GetDirectdebit {
    directdebit_id: String,
}

impl GetDirectdebit {
    pub fn new(directdebit_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            directdebit_id: required_param("directdebitId", directdebit_id)?,
        })
    }
}

impl Request for GetDirectdebit {
    fn uri(&self) -> String {
        format!("directdebits/{}", self.directdebit_id)
    }

    fn method(&self) -> Method {
        Method::Get
    }

    fn response_model(&self) -> Option<ModelKind> {
        Some(ModelKind::Directdebit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SdkError;

    #[test]
    fn test_transaction_requests() {
        let get = GetTransaction::new("EX-1234-5678-9012").unwrap();
        assert_eq!(get.uri(), "transactions/EX-1234-5678-9012");
        assert_eq!(get.method(), Method::Get);
        assert!(get.body().is_none());

        let cancel = CancelTransaction::new("EX-1234-5678-9012").unwrap();
        assert_eq!(cancel.uri(), "transactions/EX-1234-5678-9012/void");
        assert_eq!(cancel.method(), Method::Patch);
        assert_eq!(cancel.response_model(), Some(ModelKind::Transaction));
    }

    #[test]
    fn test_missing_transaction_id() {
        assert!(matches!(
            CancelTransaction::new("  "),
            Err(SdkError::MissingParam { param: "transactionId" })
        ));
    }

    #[test]
    fn test_directdebit_request() {
        let request = GetDirectdebit::new("IL-1234").unwrap();
        assert_eq!(request.uri(), "directdebits/IL-1234");
        assert_eq!(request.response_model(), Some(ModelKind::Directdebit));
    }
}
