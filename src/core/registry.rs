use crate::core::composite::{CustomerHydrator, DirectdebitHydrator, TransactionHydrator};
use crate::core::hydrator::Hydrator;
use crate::core::leaf::{AmountHydrator, BankAccountHydrator, StatusHydrator};
use crate::domain::model::{Model, ModelKind};
use crate::domain::record::Record;
use crate::utils::error::{Result, SdkError};
use std::collections::HashMap;

/// 建構函式收到進行解析的 registry，巢狀模型由同一個 registry 解析
pub type HydratorConstructor = fn(&HydratorRegistry) -> Box<dyn Hydrator>;

/// 模型名稱到 hydrator 建構函式的對照表
///
/// 名稱比對不分大小寫。每次 `resolve` 都會建立新的 hydrator，
/// registry 本身不保存任何 hydrator 實例。
#[derive(Clone)]
pub struct HydratorRegistry {
    constructors: HashMap<String, HydratorConstructor>,
}

impl HydratorRegistry {
    /// 建立空的 registry
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// 註冊所有內建模型的 hydrator
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(ModelKind::Amount.name(), |_| Box::new(AmountHydrator));
        registry.register(ModelKind::BankAccount.name(), |_| Box::new(BankAccountHydrator));
        registry.register(ModelKind::Status.name(), |_| Box::new(StatusHydrator));
        registry.register(ModelKind::Customer.name(), |_| Box::new(CustomerHydrator));
        registry.register(ModelKind::Directdebit.name(), |_| Box::new(DirectdebitHydrator));
        registry.register(ModelKind::Transaction.name(), |registry| {
            Box::new(TransactionHydrator::new(registry.clone()))
        });
        registry
    }

    pub fn register(&mut self, name: &str, constructor: HydratorConstructor) {
        if self
            .constructors
            .insert(name.to_ascii_lowercase(), constructor)
            .is_some()
        {
            tracing::debug!(model = name, "Replacing registered hydrator");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(&name.to_ascii_lowercase())
    }

    pub fn resolve(&self, name: &str) -> Result<Box<dyn Hydrator>> {
        self.constructors
            .get(&name.to_ascii_lowercase())
            .map(|constructor| constructor(self))
            .ok_or_else(|| SdkError::UnknownHydrator {
                name: name.to_string(),
            })
    }

    /// 解析 hydrator 並填入該類型的空模型
    pub fn hydrate(&self, name: &str, record: &Record) -> Result<Model> {
        let hydrator = self.resolve(name)?;
        hydrator.hydrate(record, hydrator.kind().empty())
    }

    /// 解析 hydrator 並填入呼叫端提供的模型
    pub fn hydrate_into(&self, name: &str, record: &Record, target: Model) -> Result<Model> {
        self.resolve(name)?.hydrate(record, target)
    }
}

impl Default for HydratorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for HydratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.constructors.keys().collect();
        names.sort();
        f.debug_struct("HydratorRegistry").field("models", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hydrator::BaseHydrator;
    use crate::core::hydrator::TypedHydrator;
    use crate::domain::model::{BankAccount, Customer, Status, Transaction};
    use serde_json::json;

    #[test]
    fn test_builtin_registry_resolves_every_model() {
        let registry = HydratorRegistry::default();
        for kind in ModelKind::ALL {
            let hydrator = registry.resolve(kind.name()).unwrap();
            assert_eq!(hydrator.kind(), kind);
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let registry = HydratorRegistry::default();
        assert!(registry.contains("bankaccount"));
        assert_eq!(registry.resolve("CUSTOMER").unwrap().kind(), ModelKind::Customer);
    }

    #[test]
    fn test_unknown_model() {
        let registry = HydratorRegistry::default();
        assert!(matches!(
            registry.resolve("Voucher"),
            Err(SdkError::UnknownHydrator { name }) if name == "Voucher"
        ));
    }

    #[test]
    fn test_hydrate_by_name() {
        let registry = HydratorRegistry::default();
        let record = Record::from_json(json!({"iban": "NL00TEST0000000000"})).unwrap();

        let model = registry.hydrate("BankAccount", &record).unwrap();
        assert_eq!(
            model,
            Model::BankAccount(BankAccount {
                iban: Some("NL00TEST0000000000".to_string()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_hydrate_into_checks_target() {
        let registry = HydratorRegistry::default();
        let err = registry
            .hydrate_into("BankAccount", &Record::new(), Model::Status(Status::default()))
            .unwrap_err();
        assert!(matches!(err, SdkError::TargetTypeMismatch { .. }));
    }

    #[test]
    fn test_register_replaces_constructor() {
        let mut registry = HydratorRegistry::new();
        registry.register("Status", |_| Box::new(BaseHydrator::<Status>::new()));
        assert!(registry.contains("status"));
        assert!(!registry.contains("Customer"));

        let record = Record::from_json(json!({"action": "paid"})).unwrap();
        // 通用 hydrator 不會把 action 轉大寫
        assert!(matches!(
            registry.hydrate("Status", &record).unwrap(),
            Model::Status(s) if s.action.as_deref() == Some("paid")
        ));
    }

    /// 固定把 lastName 設成 CUSTOM 的客戶 hydrator
    struct FixedNameHydrator;

    impl TypedHydrator for FixedNameHydrator {
        type Target = Customer;

        fn hydrate_typed(&self, _record: Record, mut target: Customer) -> Result<Customer> {
            target.last_name = "CUSTOM".to_string();
            Ok(target)
        }
    }

    #[test]
    fn test_overridden_customer_reaches_transaction() {
        let mut registry = HydratorRegistry::builtin();
        registry.register("Customer", |_| Box::new(FixedNameHydrator));

        let record = Record::from_json(json!({
            "id": "EX-1234",
            "customer": {"lastName": "Jansen"}
        }))
        .unwrap();

        let direct = Customer::try_from(registry.hydrate("Customer", &record).unwrap()).unwrap();
        assert_eq!(direct.last_name, "CUSTOM");

        let transaction =
            Transaction::try_from(registry.hydrate("Transaction", &record).unwrap()).unwrap();
        assert_eq!(transaction.customer.map(|c| c.last_name).as_deref(), Some("CUSTOM"));
    }
}
