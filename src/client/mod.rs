pub mod http;

pub use http::HttpTransport;

use crate::config::SdkConfig;
use crate::core::schema::Schema;
use crate::core::HydratorRegistry;
use crate::domain::model::{Directdebit, Model, ModelKind, Transaction};
use crate::domain::ports::Transport;
use crate::domain::record::Record;
use crate::request::{CancelTransaction, GetDirectdebit, GetTransaction, Request};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// 送出請求並把回應轉換成模型
pub struct ApiClient<T: Transport> {
    transport: T,
    registry: HydratorRegistry,
}

impl ApiClient<HttpTransport> {
    pub fn from_config(config: SdkConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_registry(transport, HydratorRegistry::default())
    }

    pub fn with_registry(transport: T, registry: HydratorRegistry) -> Self {
        Self {
            transport,
            registry,
        }
    }

    /// 只送出請求，不做轉換
    pub async fn send(&self, request: &dyn Request) -> Result<Record> {
        self.transport.send(request).await
    }

    /// 送出請求；有對應模型時轉換並檢查必填欄位
    pub async fn execute(&self, request: &dyn Request) -> Result<Option<Model>> {
        let raw = self.send(request).await?;
        match request.response_model() {
            Some(kind) => self.hydrate_validated(kind, &raw).map(Some),
            None => Ok(None),
        }
    }

    async fn execute_as<M: Schema>(&self, request: &dyn Request) -> Result<M> {
        let raw = self.send(request).await?;
        let model = self.hydrate_validated(M::KIND, &raw)?;
        M::try_from(model)
    }

    fn hydrate_validated(&self, kind: ModelKind, raw: &Record) -> Result<Model> {
        let model = self.registry.hydrate(kind.name(), raw)?;
        model.validate()?;
        tracing::info!("✅ Hydrated {} response", kind);
        Ok(model)
    }

    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.execute_as(&GetTransaction::new(transaction_id)?).await
    }

    pub async fn cancel_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.execute_as(&CancelTransaction::new(transaction_id)?).await
    }

    pub async fn get_directdebit(&self, directdebit_id: &str) -> Result<Directdebit> {
        self.execute_as(&GetDirectdebit::new(directdebit_id)?).await
    }
}
