use crate::core::schema::Schema;
use crate::domain::model::{Model, ModelKind};
use crate::domain::record::Record;
use crate::utils::error::Result;
use std::marker::PhantomData;

/// 以模型名稱動態解析時使用的 hydrator 介面
///
/// `target` 以值傳入並回傳填好的模型。不同執行緒各自使用不同的
/// target 即可並行呼叫；hydrator 本身不持有可變狀態。
pub trait Hydrator: Send + Sync {
    fn kind(&self) -> ModelKind;

    fn hydrate(&self, record: &Record, target: Model) -> Result<Model>;
}

/// 已知目標型別的 hydrator，composite 直接呼叫這一層
pub trait TypedHydrator: Send + Sync {
    type Target: Schema;

    /// `record` 是呼叫端資料的私有副本，可以自由改寫
    fn hydrate_typed(&self, record: Record, target: Self::Target) -> Result<Self::Target>;
}

impl<H: TypedHydrator> Hydrator for H {
    fn kind(&self) -> ModelKind {
        H::Target::KIND
    }

    fn hydrate(&self, record: &Record, target: Model) -> Result<Model> {
        // 型別不符時在動任何欄位之前就失敗
        let target = H::Target::try_from(target)?;
        tracing::debug!(model = %H::Target::KIND, fields = record.len(), "Hydrating model");

        self.hydrate_typed(record.clone(), target).map(Into::into)
    }
}

/// 把 record 中有對應 setter 的欄位逐一寫入 target，其餘欄位略過
pub fn assign<M: Schema>(record: Record, mut target: M) -> Result<M> {
    for (key, value) in record {
        match M::field(&key) {
            Some(field) => (field.set)(&mut target, value)?,
            None => tracing::trace!(model = %M::KIND, field = %key, "Ignoring field without setter"),
        }
    }
    Ok(target)
}

/// 不做任何欄位改寫的通用 hydrator
pub struct BaseHydrator<M> {
    _target: PhantomData<fn() -> M>,
}

impl<M> BaseHydrator<M> {
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<M> Default for BaseHydrator<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Schema> TypedHydrator for BaseHydrator<M> {
    type Target = M;

    fn hydrate_typed(&self, record: Record, target: M) -> Result<M> {
        assign(record, target)
    }
}
