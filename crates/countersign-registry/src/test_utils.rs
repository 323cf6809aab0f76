use crate::config::RegistryConfig;
use crate::domain::entities::{CallContext, PaymentInstruction};
use crate::domain::invariants::limits;
use crate::domain::value_objects::{AccountId, DocumentHash};

pub const ADMIN_TAG: u8 = 0xAD;
pub const REGISTRY_TAG: u8 = 0x1E;

pub fn account(tag: u8) -> AccountId {
    AccountId::new([tag; 32])
}

pub fn doc_hash(tag: u8) -> DocumentHash {
    DocumentHash::new([tag; 32])
}

pub fn admin() -> AccountId {
    account(ADMIN_TAG)
}

pub fn registry_address() -> AccountId {
    account(REGISTRY_TAG)
}

pub fn test_config() -> RegistryConfig {
    RegistryConfig::new()
        .with_administrator(admin())
        .with_registry_address(registry_address())
}

pub fn funding_payment(sender: AccountId, amount: u64) -> PaymentInstruction {
    PaymentInstruction::transfer(sender, registry_address(), amount)
}

/// A call context carrying one valid funding payment from `caller`.
pub fn funded_context(caller: AccountId) -> CallContext {
    let payment = funding_payment(caller, limits::MIN_FUNDING_AMOUNT);
    CallContext::with_payment(caller, payment)
}

/// A call context with no companion payments.
pub fn bare_context(caller: AccountId) -> CallContext {
    CallContext::bare(caller)
}
