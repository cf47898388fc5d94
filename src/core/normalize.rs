// composite hydrator 在 assign 之前改寫 record 的各個步驟

use crate::core::coerce;
use crate::core::hydrator::{Hydrator, TypedHydrator};
use crate::domain::model::ModelKind;
use crate::domain::record::{Record, Value};
use crate::utils::error::Result;

/// 巢狀 record 換成轉換好的子模型；非 record 的值保持原樣
pub fn substitute_nested<H: TypedHydrator>(record: &mut Record, field: &str, hydrator: &H) -> Result<()> {
    if let Some(slot) = record.get_mut(field) {
        if let Value::Record(raw) = slot {
            let raw = std::mem::take(raw);
            let model = hydrator.hydrate_typed(raw, H::Target::default())?;
            *slot = Value::Model(Box::new(model.into()));
        }
    }
    Ok(())
}

/// 與 [`substitute_nested`] 相同，但透過 registry 解析出的 hydrator 進行
pub fn substitute_resolved(record: &mut Record, field: &str, hydrator: &dyn Hydrator) -> Result<()> {
    if let Some(slot) = record.get_mut(field) {
        if let Value::Record(raw) = slot {
            let model = hydrator.hydrate(raw, hydrator.kind().empty())?;
            *slot = Value::from(model);
        }
    }
    Ok(())
}

/// 清單中每個 record 元素各自轉換成子模型
pub fn substitute_list(record: &mut Record, field: &str, hydrator: &dyn Hydrator) -> Result<()> {
    if let Some(Value::List(items)) = record.get_mut(field) {
        for item in items.iter_mut() {
            if let Value::Record(raw) = item {
                let model = hydrator.hydrate(raw, hydrator.kind().empty())?;
                *item = Value::from(model);
            }
        }
    }
    Ok(())
}

/// 只有 guard 子欄位 (例如 status 的 `code`) 不為 null 時才轉換
pub fn substitute_guarded<H: TypedHydrator>(
    record: &mut Record,
    field: &str,
    guard: &str,
    hydrator: &H,
) -> Result<()> {
    let guarded = matches!(record.get(field), Some(Value::Record(raw)) if raw.has_value(guard));
    if guarded {
        substitute_nested(record, field, hydrator)?;
    } else if record.contains_key(field) {
        tracing::debug!(field, guard, "Guard is null, skipping nested hydration");
    }
    Ok(())
}

/// 移除值不是指定模型的欄位，讓 target 保留原本的值
pub fn retain_models(record: &mut Record, fields: &[&str], kind: ModelKind) {
    for field in fields {
        let keep = match record.get(field) {
            None => continue,
            Some(Value::Model(model)) => model.kind() == kind,
            Some(_) => false,
        };
        if !keep {
            tracing::debug!(field = %field, expected = %kind, "Dropping field that is not a hydrated model");
            record.remove(field);
        }
    }
}

/// 缺少或為 null 的選填欄位填入空字串
pub fn fill_defaults(record: &mut Record, keys: &[&str]) {
    for key in keys {
        if !record.has_value(key) {
            record.insert(*key, "");
        }
    }
}

/// 時間欄位：轉成 ISO-8601 日期，結果為空時移除欄位
pub fn normalize_temporal(record: &mut Record, field: &str) -> Result<()> {
    let Some(slot) = record.get_mut(field) else {
        return Ok(());
    };

    let value = std::mem::replace(slot, Value::Null);
    match coerce::temporal(field, value)? {
        Some(datetime) => *slot = Value::DateTime(datetime),
        None => {
            record.remove(field);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::leaf::{BankAccountHydrator, StatusHydrator};
    use crate::domain::model::{BankAccount, Model, Status};
    use crate::utils::error::SdkError;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> Record {
        Record::from_json(value).unwrap()
    }

    #[test]
    fn test_substitute_nested_record() {
        let mut record = raw(json!({"bankAccount": {"iban": "NL00TEST0000000000"}}));
        substitute_nested(&mut record, "bankAccount", &BankAccountHydrator).unwrap();

        match record.get("bankAccount") {
            Some(Value::Model(model)) => assert_eq!(
                **model,
                Model::BankAccount(BankAccount {
                    iban: Some("NL00TEST0000000000".to_string()),
                    ..Default::default()
                })
            ),
            other => panic!("expected hydrated bank account, got {:?}", other),
        }
    }

    #[test]
    fn test_substitute_nested_leaves_non_records() {
        let mut record = raw(json!({"bankAccount": "NL00TEST0000000000"}));
        substitute_nested(&mut record, "bankAccount", &BankAccountHydrator).unwrap();
        assert_eq!(record.get("bankAccount"), Some(&Value::from("NL00TEST0000000000")));
    }

    #[test]
    fn test_guard_null_skips_and_retain_drops() {
        let mut record = raw(json!({
            "status": {"code": null, "message": "x"},
            "declined": {"code": 5, "message": "refused"}
        }));
        substitute_guarded(&mut record, "status", "code", &StatusHydrator).unwrap();
        substitute_guarded(&mut record, "declined", "code", &StatusHydrator).unwrap();
        retain_models(&mut record, &["status", "declined"], ModelKind::Status);

        assert!(!record.contains_key("status"));
        assert!(matches!(record.get("declined"), Some(Value::Model(m)) if m.kind() == ModelKind::Status));
    }

    #[test]
    fn test_retain_keeps_already_hydrated_models() {
        let mut record = Record::new();
        record.insert("status", Model::Status(Status::default()));
        record.insert("declined", Model::BankAccount(BankAccount::default()));
        retain_models(&mut record, &["status", "declined"], ModelKind::Status);

        assert!(record.contains_key("status"));
        assert!(!record.contains_key("declined"));
    }

    #[test]
    fn test_fill_defaults_treats_null_as_absent() {
        let mut record = raw(json!({"email": null, "phone": "0612345678", "gender": ""}));
        fill_defaults(&mut record, &["email", "phone", "gender", "ip"]);

        assert_eq!(record.get("email"), Some(&Value::from("")));
        assert_eq!(record.get("phone"), Some(&Value::from("0612345678")));
        assert_eq!(record.get("gender"), Some(&Value::from("")));
        assert_eq!(record.get("ip"), Some(&Value::from("")));
    }

    #[test]
    fn test_normalize_temporal() {
        let mut record = raw(json!({"birthDate": "1990-05-17T00:00:00+02:00", "createdAt": ""}));
        normalize_temporal(&mut record, "birthDate").unwrap();
        normalize_temporal(&mut record, "createdAt").unwrap();
        normalize_temporal(&mut record, "expiresAt").unwrap();

        assert!(matches!(record.get("birthDate"), Some(Value::DateTime(_))));
        assert!(!record.contains_key("createdAt"));
        assert!(!record.contains_key("expiresAt"));
    }

    #[test]
    fn test_normalize_temporal_propagates_parse_failure() {
        let mut record = raw(json!({"birthDate": "17-05-1990"}));
        assert!(matches!(
            normalize_temporal(&mut record, "birthDate"),
            Err(SdkError::TemporalParseFailure { field, .. }) if field == "birthDate"
        ));
    }
}
