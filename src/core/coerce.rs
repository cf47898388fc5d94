// 基本型別轉換，錯誤訊息帶上欄位名稱

use crate::domain::model::Model;
use crate::domain::record::Value;
use crate::utils::error::{Result, SdkError};
use chrono::{DateTime, FixedOffset};

/// ISO-8601 (ATOM) 格式，例如 `2024-01-15T10:30:00+01:00`
pub const ATOM_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

pub fn format_atom(datetime: &DateTime<FixedOffset>) -> String {
    datetime.format(ATOM_FORMAT).to_string()
}

/// 嚴格解析 ATOM 格式；尾端的 `Z` 視為 `+00:00`
pub fn parse_atom(field: &str, raw: &str) -> Result<DateTime<FixedOffset>> {
    let normalized = match raw.strip_suffix('Z') {
        Some(prefix) => format!("{}+00:00", prefix),
        None => raw.to_string(),
    };

    DateTime::parse_from_str(&normalized, ATOM_FORMAT).map_err(|e| SdkError::TemporalParseFailure {
        field: field.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// 時間欄位正規化：日期值先轉回字串再嚴格解析，空值回傳 `None`
pub fn temporal(field: &str, value: Value) -> Result<Option<DateTime<FixedOffset>>> {
    if value.is_empty() {
        return Ok(None);
    }

    let raw = match value {
        Value::DateTime(datetime) => format_atom(&datetime),
        Value::String(s) => s,
        other => {
            return Err(SdkError::TemporalParseFailure {
                field: field.to_string(),
                value: format!("{:?}", other),
                reason: format!("expected an ISO-8601 string, got {}", other.type_name()),
            })
        }
    };

    parse_atom(field, &raw).map(Some)
}

fn invalid(model: &'static str, field: &str, reason: String) -> SdkError {
    SdkError::InvalidFieldValue {
        model,
        field: field.to_string(),
        reason,
    }
}

pub fn string(model: &'static str, field: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(invalid(
            model,
            field,
            format!("expected a scalar, got {}", other.type_name()),
        )),
    }
}

pub fn opt_string(model: &'static str, field: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        other => string(model, field, other).map(Some),
    }
}

/// 金額轉成最小貨幣單位的整數
pub fn amount(model: &'static str, field: &str, value: Value) -> Result<Option<i64>> {
    match value {
        Value::Null => Ok(None),
        Value::Int(i) => Ok(Some(i)),
        Value::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| invalid(model, field, format!("'{}' is not an integer amount: {}", s, e))),
        other => Err(invalid(
            model,
            field,
            format!("expected an integer amount, got {}", other.type_name()),
        )),
    }
}

/// 幣別代碼：三個英文字母，統一轉大寫
pub fn currency(model: &'static str, field: &str, value: Value) -> Result<Option<String>> {
    let Some(code) = opt_string(model, field, value)? else {
        return Ok(None);
    };

    let code = code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid(
            model,
            field,
            format!("'{}' is not an ISO-4217 currency code", code),
        ));
    }
    Ok(Some(code.to_ascii_uppercase()))
}

pub fn datetime(
    model: &'static str,
    field: &str,
    value: Value,
) -> Result<Option<DateTime<FixedOffset>>> {
    match value {
        Value::Null => Ok(None),
        Value::DateTime(datetime) => Ok(Some(datetime)),
        Value::String(_) => temporal(field, value),
        other => Err(invalid(
            model,
            field,
            format!("expected a datetime, got {}", other.type_name()),
        )),
    }
}

/// 巢狀欄位只接受已轉換好的模型
pub fn nested<M>(model: &'static str, field: &str, value: Value) -> Result<Option<M>>
where
    M: TryFrom<Model, Error = SdkError>,
{
    match value {
        Value::Null => Ok(None),
        Value::Model(inner) => M::try_from(*inner)
            .map(Some)
            .map_err(|e| invalid(model, field, e.to_string())),
        other => Err(invalid(
            model,
            field,
            format!("expected a hydrated model, got {}", other.type_name()),
        )),
    }
}

pub fn nested_list<M>(model: &'static str, field: &str, value: Value) -> Result<Vec<M>>
where
    M: TryFrom<Model, Error = SdkError>,
{
    match value {
        Value::Null => Ok(Vec::new()),
        Value::List(items) => items
            .into_iter()
            .filter_map(|item| nested(model, field, item).transpose())
            .collect(),
        other => Err(invalid(
            model,
            field,
            format!("expected a list, got {}", other.type_name()),
        )),
    }
}

/// IBAN 去除空白並轉大寫
pub fn iban(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase()
}
