// 單層模型的 hydrator

use crate::core::coerce;
use crate::core::hydrator::{assign, TypedHydrator};
use crate::domain::model::{Amount, BankAccount, Status};
use crate::domain::record::{Record, Value};
use crate::utils::error::Result;

/// 將 `from` 改名為 `to`，只在 `to` 尚未存在時進行
fn rename(record: &mut Record, from: &str, to: &str) {
    if record.contains_key(to) {
        return;
    }
    if let Some(value) = record.remove(from) {
        record.insert(to, value);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AmountHydrator;

impl TypedHydrator for AmountHydrator {
    type Target = Amount;

    fn hydrate_typed(&self, mut record: Record, target: Amount) -> Result<Amount> {
        // {"amount": {"value": 1250, "currency": "EUR"}} 攤平成 amount / currency
        if matches!(record.get("amount"), Some(Value::Record(_))) {
            if let Some(Value::Record(mut inner)) = record.remove("amount") {
                if let Some(value) = inner.remove("value").or_else(|| inner.remove("amount")) {
                    record.insert("amount", value);
                }
                if let Some(currency) = inner.remove("currency") {
                    if !record.contains_key("currency") {
                        record.insert("currency", currency);
                    }
                }
            }
        }

        rename(&mut record, "value", "amount");

        if let Some(Value::Record(currency)) = record.get("currency") {
            let code = currency.get("code").cloned().unwrap_or(Value::Null);
            record.insert("currency", code);
        }

        assign(record, target)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BankAccountHydrator;

impl TypedHydrator for BankAccountHydrator {
    type Target = BankAccount;

    fn hydrate_typed(&self, mut record: Record, target: BankAccount) -> Result<BankAccount> {
        rename(&mut record, "accountHolder", "owner");
        rename(&mut record, "holder", "owner");

        if let Some(Value::String(iban)) = record.get_mut("iban") {
            *iban = coerce::iban(iban);
        }

        assign(record, target)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StatusHydrator;

impl TypedHydrator for StatusHydrator {
    type Target = Status;

    fn hydrate_typed(&self, mut record: Record, target: Status) -> Result<Status> {
        if let Some(Value::String(action)) = record.get_mut("action") {
            *action = action.trim().to_ascii_uppercase();
        }

        assign(record, target)
    }
}
