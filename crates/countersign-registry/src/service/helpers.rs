//! # Registry Service - Helper Methods
//!
//! Private helper methods for the RegistryService.

use super::*;

impl<KV, PV, AI> RegistryService<KV, PV, AI>
where
    KV: KeyValueStore,
    PV: PaymentVerifier,
    AI: AssetIssuer,
{
    /// Enforce the number of companion payments the operation demands.
    pub(crate) fn require_companions(
        &self,
        ctx: &CallContext,
        expected: usize,
    ) -> Result<(), RegistryError> {
        if ctx.payments.len() != expected {
            return Err(RegistryError::MalformedRequest {
                expected,
                actual: ctx.payments.len(),
            });
        }
        Ok(())
    }

    /// True iff the cancellation flag is set for this hash.
    pub(crate) fn is_canceled(&self, hash: &DocumentHash) -> Result<bool, RegistryError> {
        Ok(self.kv_store.exists(&KeyPrefix::canceled_key(hash))?)
    }

    /// Reject the call if the hash was canceled. Cancellation is terminal
    /// (INVARIANT-1), so this gates every mutating path.
    pub(crate) fn ensure_not_canceled(&self, hash: &DocumentHash) -> Result<(), RegistryError> {
        if self.is_canceled(hash)? {
            return Err(RegistryError::AlreadyCanceled);
        }
        Ok(())
    }

    /// The token stored for this hash, or None if unregistered.
    pub(crate) fn stored_token(
        &self,
        hash: &DocumentHash,
    ) -> Result<Option<TokenRef>, RegistryError> {
        match self.kv_store.get(&KeyPrefix::token_key(hash))? {
            None => Ok(None),
            Some(bytes) => {
                let token = TokenRef::from_slice(&bytes).ok_or_else(|| {
                    StoreError::Corruption {
                        message: format!("token ref blob has length {}", bytes.len()),
                    }
                })?;
                Ok(Some(token))
            }
        }
    }

    /// The token stored for this hash, or `NotFound`.
    pub(crate) fn require_token(&self, hash: &DocumentHash) -> Result<TokenRef, RegistryError> {
        self.stored_token(hash)?.ok_or(RegistryError::NotFound)
    }

    /// The signer set, or None if the blob was never written.
    ///
    /// An empty blob decodes to an empty list, which is distinct from an
    /// absent key: a canceled document keeps its (cleared) blob around.
    pub(crate) fn signer_set(
        &self,
        hash: &DocumentHash,
    ) -> Result<Option<IdentityList>, RegistryError> {
        match self.kv_store.get(&KeyPrefix::signers_key(hash))? {
            None => Ok(None),
            Some(blob) => Ok(Some(IdentityList::from_blob(&blob)?)),
        }
    }

    /// The signature set; an absent blob reads as empty.
    pub(crate) fn signature_set(&self, hash: &DocumentHash) -> Result<IdentityList, RegistryError> {
        match self.kv_store.get(&KeyPrefix::signatures_key(hash))? {
            None => Ok(IdentityList::new()),
            Some(blob) => Ok(IdentityList::from_blob(&blob)?),
        }
    }

    /// The caller's document index; an absent blob reads as empty.
    pub(crate) fn user_index(&self, account: &AccountId) -> Result<HashList, RegistryError> {
        match self.kv_store.get(&KeyPrefix::user_key(account))? {
            None => Ok(HashList::new()),
            Some(blob) => Ok(HashList::from_blob(&blob)?),
        }
    }

    /// Self-attestation check: the caller must be the signer it acts for.
    pub(crate) fn authorize_self_attestation(
        ctx: &CallContext,
        signer: &AccountId,
    ) -> Result<(), RegistryError> {
        if ctx.caller != *signer {
            return Err(RegistryError::unauthorized("caller is not the signer"));
        }
        Ok(())
    }

    /// Commit the cancellation transition, then drop the token best-effort.
    ///
    /// The batch sets the terminal flag and clears both sets in one atomic
    /// write (INVARIANT-2). The token delete runs after the commit; if the
    /// issuer refuses, the document is still canceled.
    pub(crate) fn terminate_document(
        &mut self,
        hash: &DocumentHash,
        token: TokenRef,
    ) -> Result<(), RegistryError> {
        let operations = vec![
            BatchOperation::put(KeyPrefix::canceled_key(hash), CANCELED_FLAG.to_vec()),
            BatchOperation::put(KeyPrefix::signers_key(hash), Vec::new()),
            BatchOperation::put(KeyPrefix::signatures_key(hash), Vec::new()),
        ];
        self.kv_store.atomic_batch_write(operations)?;

        if let Err(error) = self.assets.delete(token) {
            tracing::warn!(
                hash = %hash,
                token = %token,
                %error,
                "token delete failed; document canceled regardless"
            );
        }

        Ok(())
    }
}
