// 每個模型的欄位 setter 表，沒有列出的原始欄位一律略過

use crate::core::coerce;
use crate::domain::model::{
    Amount, BankAccount, Customer, Directdebit, Model, ModelKind, Status, Transaction,
};
use crate::domain::record::Value;
use crate::utils::error::{Result, SdkError};

pub type Setter<M> = fn(&mut M, Value) -> Result<()>;

pub struct Field<M> {
    pub name: &'static str,
    pub set: Setter<M>,
}

pub trait Schema: Default + Into<Model> + TryFrom<Model, Error = SdkError> + Send + 'static {
    const KIND: ModelKind;
    const FIELDS: &'static [Field<Self>];

    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}

impl Schema for Amount {
    const KIND: ModelKind = ModelKind::Amount;
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "amount",
            set: |m, v| {
                m.amount = coerce::amount("Amount", "amount", v)?;
                Ok(())
            },
        },
        Field {
            name: "currency",
            set: |m, v| {
                m.currency = coerce::currency("Amount", "currency", v)?;
                Ok(())
            },
        },
    ];
}

impl Schema for BankAccount {
    const KIND: ModelKind = ModelKind::BankAccount;
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "iban",
            set: |m, v| {
                m.iban = coerce::opt_string("BankAccount", "iban", v)?;
                Ok(())
            },
        },
        Field {
            name: "bic",
            set: |m, v| {
                m.bic = coerce::opt_string("BankAccount", "bic", v)?;
                Ok(())
            },
        },
        Field {
            name: "owner",
            set: |m, v| {
                m.owner = coerce::opt_string("BankAccount", "owner", v)?;
                Ok(())
            },
        },
    ];
}

impl Schema for Status {
    const KIND: ModelKind = ModelKind::Status;
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "code",
            set: |m, v| {
                m.code = coerce::opt_string("Status", "code", v)?;
                Ok(())
            },
        },
        Field {
            name: "action",
            set: |m, v| {
                m.action = coerce::opt_string("Status", "action", v)?;
                Ok(())
            },
        },
        Field {
            name: "phase",
            set: |m, v| {
                m.phase = coerce::opt_string("Status", "phase", v)?;
                Ok(())
            },
        },
        Field {
            name: "message",
            set: |m, v| {
                m.message = coerce::opt_string("Status", "message", v)?;
                Ok(())
            },
        },
    ];
}

impl Schema for Customer {
    const KIND: ModelKind = ModelKind::Customer;
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "initials",
            set: |m, v| {
                m.initials = coerce::string("Customer", "initials", v)?;
                Ok(())
            },
        },
        Field {
            name: "lastName",
            set: |m, v| {
                m.last_name = coerce::string("Customer", "lastName", v)?;
                Ok(())
            },
        },
        Field {
            name: "gender",
            set: |m, v| {
                m.gender = coerce::string("Customer", "gender", v)?;
                Ok(())
            },
        },
        Field {
            name: "phone",
            set: |m, v| {
                m.phone = coerce::string("Customer", "phone", v)?;
                Ok(())
            },
        },
        Field {
            name: "email",
            set: |m, v| {
                m.email = coerce::string("Customer", "email", v)?;
                Ok(())
            },
        },
        Field {
            name: "trustLevel",
            set: |m, v| {
                m.trust_level = coerce::string("Customer", "trustLevel", v)?;
                Ok(())
            },
        },
        Field {
            name: "reference",
            set: |m, v| {
                m.reference = coerce::string("Customer", "reference", v)?;
                Ok(())
            },
        },
        Field {
            name: "language",
            set: |m, v| {
                m.language = coerce::string("Customer", "language", v)?;
                Ok(())
            },
        },
        Field {
            name: "ip",
            set: |m, v| {
                m.ip = coerce::string("Customer", "ip", v)?;
                Ok(())
            },
        },
        Field {
            name: "birthDate",
            set: |m, v| {
                m.birth_date = coerce::datetime("Customer", "birthDate", v)?;
                Ok(())
            },
        },
        Field {
            name: "bankAccount",
            set: |m, v| {
                m.bank_account = coerce::nested("Customer", "bankAccount", v)?;
                Ok(())
            },
        },
    ];
}

impl Schema for Directdebit {
    const KIND: ModelKind = ModelKind::Directdebit;
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "id",
            set: |m, v| {
                m.id = coerce::opt_string("Directdebit", "id", v)?;
                Ok(())
            },
        },
        Field {
            name: "paymentSessionId",
            set: |m, v| {
                m.payment_session_id = coerce::opt_string("Directdebit", "paymentSessionId", v)?;
                Ok(())
            },
        },
        Field {
            name: "description",
            set: |m, v| {
                m.description = coerce::opt_string("Directdebit", "description", v)?;
                Ok(())
            },
        },
        Field {
            name: "amount",
            set: |m, v| {
                m.amount = coerce::nested("Directdebit", "amount", v)?;
                Ok(())
            },
        },
        Field {
            name: "bankAccount",
            set: |m, v| {
                m.bank_account = coerce::nested("Directdebit", "bankAccount", v)?;
                Ok(())
            },
        },
        Field {
            name: "status",
            set: |m, v| {
                m.status = coerce::nested("Directdebit", "status", v)?;
                Ok(())
            },
        },
        Field {
            name: "declined",
            set: |m, v| {
                m.declined = coerce::nested("Directdebit", "declined", v)?;
                Ok(())
            },
        },
    ];
}

impl Schema for Transaction {
    const KIND: ModelKind = ModelKind::Transaction;
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "id",
            set: |m, v| {
                m.id = coerce::opt_string("Transaction", "id", v)?;
                Ok(())
            },
        },
        Field {
            name: "orderId",
            set: |m, v| {
                m.order_id = coerce::opt_string("Transaction", "orderId", v)?;
                Ok(())
            },
        },
        Field {
            name: "description",
            set: |m, v| {
                m.description = coerce::string("Transaction", "description", v)?;
                Ok(())
            },
        },
        Field {
            name: "reference",
            set: |m, v| {
                m.reference = coerce::string("Transaction", "reference", v)?;
                Ok(())
            },
        },
        Field {
            name: "amount",
            set: |m, v| {
                m.amount = coerce::nested("Transaction", "amount", v)?;
                Ok(())
            },
        },
        Field {
            name: "customer",
            set: |m, v| {
                m.customer = coerce::nested("Transaction", "customer", v)?;
                Ok(())
            },
        },
        Field {
            name: "status",
            set: |m, v| {
                m.status = coerce::nested("Transaction", "status", v)?;
                Ok(())
            },
        },
        Field {
            name: "createdAt",
            set: |m, v| {
                m.created_at = coerce::datetime("Transaction", "createdAt", v)?;
                Ok(())
            },
        },
        Field {
            name: "expiresAt",
            set: |m, v| {
                m.expires_at = coerce::datetime("Transaction", "expiresAt", v)?;
                Ok(())
            },
        },
        Field {
            name: "directdebits",
            set: |m, v| {
                m.directdebits = coerce::nested_list("Transaction", "directdebits", v)?;
                Ok(())
            },
        },
    ];
}
