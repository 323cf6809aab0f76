//! # Registry Service - Signing Workflow
//!
//! Signature recording, progress queries, and the single-signer veto.

use super::*;

impl<KV, PV, AI> SigningWorkflowApi for RegistryService<KV, PV, AI>
where
    KV: KeyValueStore,
    PV: PaymentVerifier,
    AI: AssetIssuer,
{
    fn sign(
        &mut self,
        ctx: &CallContext,
        hash: DocumentHash,
        signer: AccountId,
    ) -> Result<bool, RegistryError> {
        self.require_companions(ctx, 0)?;
        self.ensure_not_canceled(&hash)?;
        self.require_token(&hash)?;
        Self::authorize_self_attestation(ctx, &signer)?;

        let signer_set = self.signer_set(&hash)?.ok_or(RegistryError::NotFound)?;
        if !signer_set.contains(&signer) {
            return Err(RegistryError::unauthorized("signer is not in the signer set"));
        }

        let mut signatures = self.signature_set(&hash)?;
        if signatures.contains(&signer) {
            tracing::debug!(hash = %hash, signer = %signer, "signature already recorded");
            return Ok(true);
        }

        signatures.push(signer);
        self.kv_store.atomic_batch_write(vec![BatchOperation::put(
            KeyPrefix::signatures_key(&hash),
            signatures.to_blob(),
        )])?;

        tracing::info!(
            hash = %hash,
            signer = %signer,
            recorded = signatures.len(),
            "signature recorded"
        );
        Ok(true)
    }

    fn is_signed(&self, ctx: &CallContext, hash: DocumentHash) -> Result<bool, RegistryError> {
        self.require_companions(ctx, 0)?;
        Ok(self.signature_set(&hash)?.contains(&ctx.caller))
    }

    fn is_complete(&self, ctx: &CallContext, hash: DocumentHash) -> Result<bool, RegistryError> {
        self.require_companions(ctx, 0)?;
        if self.is_canceled(&hash)? {
            return Ok(false);
        }
        let signer_set = match self.signer_set(&hash)? {
            None => return Ok(false),
            Some(set) if set.is_empty() => return Ok(false),
            Some(set) => set,
        };
        let signatures = self.signature_set(&hash)?;
        if signatures.is_empty() {
            return Ok(false);
        }
        Ok(signer_set.is_subset_of(&signatures))
    }

    fn reject(
        &mut self,
        ctx: &CallContext,
        hash: DocumentHash,
        signer: AccountId,
    ) -> Result<TokenRef, RegistryError> {
        self.require_companions(ctx, 0)?;
        self.ensure_not_canceled(&hash)?;
        let token = self.require_token(&hash)?;
        Self::authorize_self_attestation(ctx, &signer)?;

        let signer_set = self.signer_set(&hash)?.ok_or(RegistryError::NotFound)?;
        if !signer_set.contains(&signer) {
            return Err(RegistryError::unauthorized("signer is not in the signer set"));
        }

        self.terminate_document(&hash, token)?;

        tracing::info!(hash = %hash, signer = %signer, token = %token, "document vetoed");
        Ok(token)
    }

    fn total_signers(&self, hash: &DocumentHash) -> Result<u64, RegistryError> {
        match self.signer_set(hash)? {
            None => Ok(0),
            Some(set) => Ok(set.len() as u64),
        }
    }

    fn signed_count(&self, hash: &DocumentHash) -> Result<u64, RegistryError> {
        Ok(self.signature_set(hash)?.len() as u64)
    }
}
