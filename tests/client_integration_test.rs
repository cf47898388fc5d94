use anyhow::Result;
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use paysdk::request::{ChargeVoucher, VoucherPayload};
use paysdk::{ApiClient, SdkConfig, SdkError};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_for(server: &MockServer) -> Result<SdkConfig> {
    let mut temp_file = NamedTempFile::new()?;
    let config_content = format!(
        r#"
[api]
url = "{}"
version = 1
timeout_seconds = 5

[credentials]
username = "AT-0000-0000"
password = "s3cr3t"
"#,
        server.base_url()
    );
    temp_file.write_all(config_content.as_bytes())?;

    Ok(SdkConfig::from_file(temp_file.path())?)
}

/// 測試讀取交易並轉換成完整的模型
#[tokio::test]
async fn test_get_transaction() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/transactions/EX-1234-5678-9012")
            .header_exists("authorization")
            .header("accept", "application/json");
        then.status(200).json_body(serde_json::json!({
            "id": "EX-1234-5678-9012",
            "orderId": "1234567890X12345",
            "amount": {"value": 1250, "currency": "EUR"},
            "customer": {
                "lastName": "Jansen",
                "email": null,
                "bankAccount": {"iban": "NL00TEST0000000000"}
            },
            "status": {"code": 20, "action": "PENDING"},
            "createdAt": "2024-01-15T10:30:00+01:00",
            "_links": [{"href": "/transactions/EX-1234-5678-9012", "rel": "self"}]
        }));
    });

    let client = ApiClient::from_config(config_for(&server)?)?;
    let transaction = client.get_transaction("EX-1234-5678-9012").await?;

    assert_eq!(transaction.order_id.as_deref(), Some("1234567890X12345"));
    let customer = transaction.customer.expect("customer");
    assert_eq!(customer.email, "");
    assert_eq!(
        customer.bank_account.and_then(|b| b.iban).as_deref(),
        Some("NL00TEST0000000000")
    );

    api_mock.assert();
    println!("✅ Transaction hydrated from API response");
    Ok(())
}

/// 取消交易使用 PATCH
#[tokio::test]
async fn test_cancel_transaction() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(PATCH).path("/v1/transactions/EX-1234/void");
        then.status(200).json_body(serde_json::json!({
            "id": "EX-1234",
            "status": {"code": -90, "action": "CANCEL"}
        }));
    });

    let client = ApiClient::from_config(config_for(&server)?)?;
    let transaction = client.cancel_transaction("EX-1234").await?;

    assert_eq!(transaction.status.and_then(|s| s.code).as_deref(), Some("-90"));
    api_mock.assert();
    Ok(())
}

/// 扣款請求送出 JSON body，回應不轉換
#[tokio::test]
async fn test_charge_voucher_sends_body() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/v1/vouchers/6064364004512345678/charge")
            .json_body(serde_json::json!({
                "amount": {"amount": 100, "currency": "EUR"},
                "pinCode": "58809"
            }));
        then.status(200).json_body(serde_json::json!({"result": true}));
    });

    let client = ApiClient::from_config(config_for(&server)?)?;
    let request = ChargeVoucher::new(
        "6064364004512345678",
        VoucherPayload::new(100, "EUR").with_pin_code("58809"),
    )?;

    assert_eq!(client.execute(&request).await?, None);
    let raw = client.send(&request).await?;
    assert!(raw.contains_key("result"));

    api_mock.assert_hits(2);
    Ok(())
}

/// API 錯誤狀態碼轉成 UnexpectedResponse
#[tokio::test]
async fn test_error_status_is_reported() -> Result<()> {
    let server = MockServer::start();
    let _api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/directdebits/IL-404");
        then.status(404).body(r#"{"errors": {"general": "Not found"}}"#);
    });

    let client = ApiClient::from_config(config_for(&server)?)?;
    let err = client.get_directdebit("IL-404").await.unwrap_err();

    assert!(matches!(err, SdkError::UnexpectedResponse { status: 404, .. }));
    assert!(!err.is_hydration_error());
    Ok(())
}

/// 回應資料無法轉換時回報 hydration 錯誤
#[tokio::test]
async fn test_malformed_response_fails_hydration() -> Result<()> {
    let server = MockServer::start();
    let _api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/directdebits/IL-1");
        then.status(200).json_body(serde_json::json!({
            "id": "IL-1",
            "bankAccount": "NL00TEST0000000000"
        }));
    });

    let client = ApiClient::from_config(config_for(&server)?)?;
    let err = client.get_directdebit("IL-1").await.unwrap_err();

    assert!(matches!(
        err,
        SdkError::InvalidFieldValue { model: "Directdebit", ref field, .. } if field == "bankAccount"
    ));
    Ok(())
}

/// 設定檔驗證失敗時不建立 client
#[tokio::test]
async fn test_invalid_config_is_rejected() -> Result<()> {
    let config = SdkConfig::from_toml_str(
        r#"
[api]
url = "not a url"
version = 1

[credentials]
username = "AT-0000-0000"
password = "s3cr3t"
"#,
    )?;

    assert!(matches!(
        ApiClient::from_config(config),
        Err(SdkError::InvalidConfigValueError { .. })
    ));
    Ok(())
}
