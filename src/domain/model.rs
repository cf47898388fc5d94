use crate::utils::error::{Result, SdkError};
use crate::utils::validation::{require_field, Validate};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 金額，以最小貨幣單位 (cents) 表示
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub initials: String,
    pub last_name: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub trust_level: String,
    pub reference: String,
    pub language: String,
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directdebit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declined: Option<Status>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub description: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<FixedOffset>>,
    pub directdebits: Vec<Directdebit>,
}

/// 模型名稱標籤，registry 以此查找 hydrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Amount,
    BankAccount,
    Status,
    Customer,
    Directdebit,
    Transaction,
}

impl ModelKind {
    pub const ALL: [ModelKind; 6] = [
        ModelKind::Amount,
        ModelKind::BankAccount,
        ModelKind::Status,
        ModelKind::Customer,
        ModelKind::Directdebit,
        ModelKind::Transaction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Amount => "Amount",
            ModelKind::BankAccount => "BankAccount",
            ModelKind::Status => "Status",
            ModelKind::Customer => "Customer",
            ModelKind::Directdebit => "Directdebit",
            ModelKind::Transaction => "Transaction",
        }
    }

    /// 建立該類型的空模型
    pub fn empty(self) -> Model {
        match self {
            ModelKind::Amount => Model::Amount(Amount::default()),
            ModelKind::BankAccount => Model::BankAccount(BankAccount::default()),
            ModelKind::Status => Model::Status(Status::default()),
            ModelKind::Customer => Model::Customer(Customer::default()),
            ModelKind::Directdebit => Model::Directdebit(Directdebit::default()),
            ModelKind::Transaction => Model::Transaction(Transaction::default()),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SdkError::UnknownHydrator { name: s.to_string() })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Model {
    Amount(Amount),
    BankAccount(BankAccount),
    Status(Status),
    Customer(Customer),
    Directdebit(Directdebit),
    Transaction(Transaction),
}

impl Model {
    pub fn kind(&self) -> ModelKind {
        match self {
            Model::Amount(_) => ModelKind::Amount,
            Model::BankAccount(_) => ModelKind::BankAccount,
            Model::Status(_) => ModelKind::Status,
            Model::Customer(_) => ModelKind::Customer,
            Model::Directdebit(_) => ModelKind::Directdebit,
            Model::Transaction(_) => ModelKind::Transaction,
        }
    }
}

macro_rules! model_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Model {
                fn from(model: $variant) -> Self {
                    Model::$variant(model)
                }
            }

            impl TryFrom<Model> for $variant {
                type Error = SdkError;

                fn try_from(model: Model) -> Result<Self> {
                    match model {
                        Model::$variant(inner) => Ok(inner),
                        other => Err(SdkError::TargetTypeMismatch {
                            expected: ModelKind::$variant.name(),
                            found: other.kind().name(),
                        }),
                    }
                }
            }
        )*
    };
}

model_variant!(Amount, BankAccount, Status, Customer, Directdebit, Transaction);

impl Validate for Amount {
    fn validate(&self) -> Result<()> {
        require_field("Amount", "amount", &self.amount)?;
        require_field("Amount", "currency", &self.currency)
    }
}

impl Validate for BankAccount {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl Validate for Status {
    fn validate(&self) -> Result<()> {
        require_field("Status", "code", &self.code)
    }
}

impl Validate for Customer {
    fn validate(&self) -> Result<()> {
        if let Some(bank_account) = &self.bank_account {
            bank_account.validate()?;
        }
        Ok(())
    }
}

impl Validate for Directdebit {
    fn validate(&self) -> Result<()> {
        require_field("Directdebit", "id", &self.id)?;
        for nested in [&self.status, &self.declined].into_iter().flatten() {
            nested.validate()?;
        }
        if let Some(amount) = &self.amount {
            amount.validate()?;
        }
        Ok(())
    }
}

impl Validate for Transaction {
    fn validate(&self) -> Result<()> {
        require_field("Transaction", "id", &self.id)?;
        if let Some(amount) = &self.amount {
            amount.validate()?;
        }
        if let Some(customer) = &self.customer {
            customer.validate()?;
        }
        if let Some(status) = &self.status {
            status.validate()?;
        }
        self.directdebits.iter().try_for_each(Validate::validate)
    }
}

impl Validate for Model {
    fn validate(&self) -> Result<()> {
        match self {
            Model::Amount(m) => m.validate(),
            Model::BankAccount(m) => m.validate(),
            Model::Status(m) => m.validate(),
            Model::Customer(m) => m.validate(),
            Model::Directdebit(m) => m.validate(),
            Model::Transaction(m) => m.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_kind_from_name() {
        assert_eq!("Customer".parse::<ModelKind>().unwrap(), ModelKind::Customer);
        assert_eq!("directdebit".parse::<ModelKind>().unwrap(), ModelKind::Directdebit);
        assert!(matches!(
            "Voucher".parse::<ModelKind>(),
            Err(SdkError::UnknownHydrator { name }) if name == "Voucher"
        ));
    }

    #[test]
    fn test_try_from_wrong_variant() {
        let err = Customer::try_from(Model::Status(Status::default())).unwrap_err();
        assert!(matches!(
            err,
            SdkError::TargetTypeMismatch { expected: "Customer", found: "Status" }
        ));
    }

    #[test]
    fn test_transaction_validation_reaches_nested_models() {
        let mut transaction = Transaction {
            id: Some("EX-1234-5678-9012".to_string()),
            ..Default::default()
        };
        assert!(transaction.validate().is_ok());

        transaction.amount = Some(Amount {
            amount: Some(1250),
            currency: None,
        });
        assert!(matches!(
            transaction.validate(),
            Err(SdkError::MissingRequiredField { model: "Amount", field: "currency" })
        ));
    }
}
