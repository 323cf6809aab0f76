//! # Registry Service - User Index
//!
//! Per-account lookup of registered document hashes.

use super::*;

impl<KV, PV, AI> UserIndexApi for RegistryService<KV, PV, AI>
where
    KV: KeyValueStore,
    PV: PaymentVerifier,
    AI: AssetIssuer,
{
    fn list_owned(&self, ctx: &CallContext) -> Result<Vec<DocumentHash>, RegistryError> {
        Ok(self.user_index(&ctx.caller)?.into_entries())
    }
}
