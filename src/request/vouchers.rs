use crate::request::{required_param, Method, Request};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoucherAmount {
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoucherPayload {
    pub amount: VoucherAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_id: Option<String>,
}

impl VoucherPayload {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount: VoucherAmount {
                amount,
                currency: currency.into(),
            },
            pin_code: None,
            pos_id: None,
        }
    }

    pub fn with_pin_code(mut self, pin_code: impl Into<String>) -> Self {
        self.pin_code = Some(pin_code.into());
        self
    }

    pub fn with_pos_id(mut self, pos_id: impl Into<String>) -> Self {
        self.pos_id = Some(pos_id.into());
        self
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// 從禮物卡扣款
#[derive(Debug, Clone)]
pub struct ChargeVoucher {
    card_number: String,
    body: serde_json::Value,
}

impl ChargeVoucher {
    pub fn new(card_number: impl Into<String>, payload: VoucherPayload) -> Result<Self> {
        Ok(Self {
            card_number: required_param("cardNumber", card_number)?,
            body: payload.to_json()?,
        })
    }
}

impl Request for ChargeVoucher {
    fn uri(&self) -> String {
        format!("vouchers/{}/charge", self.card_number)
    }

    fn method(&self) -> Method {
        Method::Patch
    }

    fn body(&self) -> Option<serde_json::Value> {
        Some(self.body.clone())
    }
}

#[derive(Debug, Clone)]
pub struct ActivateVoucher {
    card_number: String,
    body: serde_json::Value,
}

impl ActivateVoucher {
    pub fn new(card_number: impl Into<String>, payload: VoucherPayload) -> Result<Self> {
        Ok(Self {
            card_number: required_param("cardNumber", card_number)?,
            body: payload.to_json()?,
        })
    }
}

impl Request for ActivateVoucher {
    fn uri(&self) -> String {
        format!("vouchers/{}/activate", self.card_number)
    }

    fn method(&self) -> Method {
        Method::Patch
    }

    fn body(&self) -> Option<serde_json::Value> {
        Some(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SdkError;
    use serde_json::json;

    #[test]
    fn test_charge_voucher() {
        let request = ChargeVoucher::new("6064364004512345678", VoucherPayload::new(100, "EUR")).unwrap();
        assert_eq!(request.uri(), "vouchers/6064364004512345678/charge");
        assert_eq!(request.method(), Method::Patch);
        assert_eq!(
            request.body(),
            Some(json!({"amount": {"amount": 100, "currency": "EUR"}}))
        );
        assert_eq!(request.response_model(), None);
    }

    #[test]
    fn test_activate_voucher_body() {
        let payload = VoucherPayload::new(1, "EUR").with_pin_code("58809").with_pos_id("1541");
        let request = ActivateVoucher::new("6064364004512345678", payload).unwrap();
        assert_eq!(request.uri(), "vouchers/6064364004512345678/activate");
        assert_eq!(
            request.body(),
            Some(json!({
                "amount": {"amount": 1, "currency": "EUR"},
                "pinCode": "58809",
                "posId": "1541"
            }))
        );
    }

    #[test]
    fn test_missing_card_number() {
        assert!(matches!(
            ChargeVoucher::new("", VoucherPayload::new(100, "EUR")),
            Err(SdkError::MissingParam { param: "cardNumber" })
        ));
    }

    #[test]
    fn test_body_is_serialized_when_request_is_built() {
        let payload = VoucherPayload::new(250, "EUR").with_pos_id("1541");
        let expected = payload.to_json().unwrap();

        let request = ChargeVoucher::new("6064364004512345678", payload).unwrap();
        assert_eq!(request.body(), Some(expected));
    }
}
