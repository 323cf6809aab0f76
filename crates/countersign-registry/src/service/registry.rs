//! # Registry Service - Document Lifecycle
//!
//! Create, cancel, and lookup operations for attestation documents.

use super::*;

impl<KV, PV, AI> DocumentRegistryApi for RegistryService<KV, PV, AI>
where
    KV: KeyValueStore,
    PV: PaymentVerifier,
    AI: AssetIssuer,
{
    fn create(
        &mut self,
        ctx: &CallContext,
        hash: DocumentHash,
        signers: &[AccountId],
    ) -> Result<TokenRef, RegistryError> {
        self.ensure_not_canceled(&hash)?;
        self.require_companions(ctx, limits::CREATE_COMPANION_PAYMENTS)?;
        self.payments.verify(
            &ctx.payments[0],
            &ctx.caller,
            &self.config.registry_address,
            self.config.min_funding,
        )?;

        // Re-registering an existing hash re-indexes it for the caller and
        // returns the original token (INVARIANT-4).
        if let Some(token) = self.stored_token(&hash)? {
            let mut index = self.user_index(&ctx.caller)?;
            if index.push_if_absent(&hash) {
                self.kv_store.atomic_batch_write(vec![BatchOperation::put(
                    KeyPrefix::user_key(&ctx.caller),
                    index.to_blob(),
                )])?;
            }
            tracing::debug!(
                hash = %hash,
                token = %token,
                caller = %ctx.caller,
                "duplicate create resolved to existing token"
            );
            return Ok(token);
        }

        let token = self.assets.mint(&TokenSpec::for_document(&hash))?;

        let mut index = self.user_index(&ctx.caller)?;
        index.push_if_absent(&hash);

        let operations = vec![
            BatchOperation::put(KeyPrefix::token_key(&hash), token.to_be_bytes().to_vec()),
            BatchOperation::put(
                KeyPrefix::admin_key(&hash),
                self.config.administrator.as_bytes().to_vec(),
            ),
            BatchOperation::put(
                KeyPrefix::signers_key(&hash),
                IdentityList::from_entries(signers.to_vec()).to_blob(),
            ),
            BatchOperation::put(KeyPrefix::signatures_key(&hash), Vec::new()),
            BatchOperation::put(KeyPrefix::user_key(&ctx.caller), index.to_blob()),
        ];
        if let Err(error) = self.kv_store.atomic_batch_write(operations) {
            tracing::warn!(
                hash = %hash,
                token = %token,
                %error,
                "registration commit failed; minted token is orphaned"
            );
            return Err(error.into());
        }

        tracing::info!(
            hash = %hash,
            token = %token,
            signers = signers.len(),
            "document registered"
        );
        Ok(token)
    }

    fn cancel(&mut self, ctx: &CallContext, hash: DocumentHash) -> Result<TokenRef, RegistryError> {
        if ctx.caller != self.config.administrator {
            return Err(RegistryError::unauthorized("caller is not the administrator"));
        }
        let token = self.require_token(&hash)?;
        self.ensure_not_canceled(&hash)?;

        self.terminate_document(&hash, token)?;

        tracing::info!(hash = %hash, token = %token, "document canceled");
        Ok(token)
    }

    fn token_ref(&self, hash: &DocumentHash) -> Result<Option<TokenRef>, RegistryError> {
        self.stored_token(hash)
    }

    fn is_active(&self, hash: &DocumentHash) -> Result<bool, RegistryError> {
        let registered = self.stored_token(hash)?.is_some();
        let canceled = self.is_canceled(hash)?;
        Ok(document_state(registered, canceled) == DocumentState::Active)
    }
}
