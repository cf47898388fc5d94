// 聚合模型的 hydrator
//
// 順序固定：巢狀模型、status 類欄位（code 有值才轉換）、選填欄位補空字串、日期欄位解析

use crate::core::hydrator::{assign, TypedHydrator};
use crate::core::leaf::{AmountHydrator, BankAccountHydrator, StatusHydrator};
use crate::core::normalize;
use crate::core::registry::HydratorRegistry;
use crate::domain::model::{Customer, Directdebit, ModelKind, Transaction};
use crate::domain::record::Record;
use crate::utils::error::Result;

pub const CUSTOMER_OPTIONAL_FIELDS: [&str; 9] = [
    "initials",
    "lastName",
    "gender",
    "phone",
    "email",
    "trustLevel",
    "reference",
    "language",
    "ip",
];

pub const TRANSACTION_OPTIONAL_FIELDS: [&str; 2] = ["description", "reference"];

const STATUS_GUARD: &str = "code";

#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerHydrator;

impl TypedHydrator for CustomerHydrator {
    type Target = Customer;

    fn hydrate_typed(&self, mut record: Record, target: Customer) -> Result<Customer> {
        normalize::substitute_nested(&mut record, "bankAccount", &BankAccountHydrator)?;
        normalize::fill_defaults(&mut record, &CUSTOMER_OPTIONAL_FIELDS);
        normalize::normalize_temporal(&mut record, "birthDate")?;

        assign(record, target)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DirectdebitHydrator;

impl TypedHydrator for DirectdebitHydrator {
    type Target = Directdebit;

    fn hydrate_typed(&self, mut record: Record, target: Directdebit) -> Result<Directdebit> {
        normalize::substitute_nested(&mut record, "amount", &AmountHydrator)?;
        normalize::substitute_nested(&mut record, "bankAccount", &BankAccountHydrator)?;

        for field in ["status", "declined"] {
            normalize::substitute_guarded(&mut record, field, STATUS_GUARD, &StatusHydrator)?;
        }
        normalize::retain_models(&mut record, &["status", "declined"], ModelKind::Status);

        assign(record, target)
    }
}

/// 交易：customer 與 directdebits 透過 registry 依名稱解析 hydrator
#[derive(Clone, Default)]
pub struct TransactionHydrator {
    registry: HydratorRegistry,
}

impl TransactionHydrator {
    pub fn new(registry: HydratorRegistry) -> Self {
        Self { registry }
    }
}

impl TypedHydrator for TransactionHydrator {
    type Target = Transaction;

    fn hydrate_typed(&self, mut record: Record, target: Transaction) -> Result<Transaction> {
        normalize::substitute_nested(&mut record, "amount", &AmountHydrator)?;

        if record.contains_key("customer") {
            let hydrator = self.registry.resolve(ModelKind::Customer.name())?;
            normalize::substitute_resolved(&mut record, "customer", hydrator.as_ref())?;
        }
        if record.contains_key("directdebits") {
            let hydrator = self.registry.resolve(ModelKind::Directdebit.name())?;
            normalize::substitute_list(&mut record, "directdebits", hydrator.as_ref())?;
        }

        normalize::substitute_guarded(&mut record, "status", STATUS_GUARD, &StatusHydrator)?;
        normalize::retain_models(&mut record, &["status"], ModelKind::Status);

        normalize::fill_defaults(&mut record, &TRANSACTION_OPTIONAL_FIELDS);
        for field in ["createdAt", "expiresAt"] {
            normalize::normalize_temporal(&mut record, field)?;
        }

        assign(record, target)
    }
}
