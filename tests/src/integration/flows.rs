//! # Attestation Lifecycle Flows
//!
//! End-to-end scenarios against the public service API:
//!
//! 1. **Unanimous attestation**: every listed signer attests, document completes
//! 2. **Veto**: one signer rejects, document is terminally canceled
//! 3. **Administrative cancel**: the configured administrator shuts a document down
//! 4. **Independence**: documents only share state through the per-user index

#[cfg(test)]
mod tests {
    use rand::Rng;

    use countersign_registry::test_utils::{
        account, admin, bare_context, doc_hash, funded_context, test_config,
    };
    use countersign_registry::{
        DocumentHash, DocumentRegistryApi, InMemoryKVStore, RegistryDependencies, RegistryError,
        RegistryService, SequentialAssetIssuer, SigningWorkflowApi, StandardPaymentPolicy,
        UserIndexApi,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn make_registry(
    ) -> RegistryService<InMemoryKVStore, StandardPaymentPolicy, SequentialAssetIssuer> {
        RegistryService::new(
            RegistryDependencies {
                kv_store: InMemoryKVStore::new(),
                payments: StandardPaymentPolicy::new(),
                assets: SequentialAssetIssuer::new(),
            },
            test_config(),
        )
    }

    fn random_hash() -> DocumentHash {
        DocumentHash::new(rand::thread_rng().gen())
    }

    // =============================================================================
    // UNANIMOUS ATTESTATION
    // =============================================================================

    /// Three signers attest one after another; the document completes only
    /// with the final signature and all counters track the progress.
    #[test]
    fn test_unanimous_attestation_flow() {
        let mut registry = make_registry();
        let hash = random_hash();
        let signers = [account(0xA1), account(0xB2), account(0xC3)];

        let token = registry
            .create(&funded_context(signers[0]), hash, &signers)
            .unwrap();
        assert!(registry.is_active(&hash).unwrap());
        assert_eq!(registry.token_ref(&hash).unwrap(), Some(token));
        assert_eq!(registry.total_signers(&hash).unwrap(), 3);

        for (signed_so_far, signer) in signers.iter().enumerate() {
            assert!(!registry
                .is_complete(&bare_context(*signer), hash)
                .unwrap());
            assert_eq!(registry.signed_count(&hash).unwrap(), signed_so_far as u64);

            assert!(registry.sign(&bare_context(*signer), hash, *signer).unwrap());
            assert!(registry.is_signed(&bare_context(*signer), hash).unwrap());
        }

        assert_eq!(registry.signed_count(&hash).unwrap(), 3);
        assert!(registry
            .is_complete(&bare_context(signers[0]), hash)
            .unwrap());
        // Completion is a derived condition; the document stays active.
        assert!(registry.is_active(&hash).unwrap());
    }

    /// Re-running create and sign changes nothing once applied.
    #[test]
    fn test_lifecycle_is_idempotent() {
        let mut registry = make_registry();
        let hash = random_hash();
        let owner = account(0xA1);

        let token = registry
            .create(&funded_context(owner), hash, &[owner])
            .unwrap();
        for _ in 0..3 {
            let again = registry
                .create(&funded_context(owner), hash, &[owner])
                .unwrap();
            assert_eq!(again, token);
        }
        assert_eq!(registry.list_owned(&bare_context(owner)).unwrap(), vec![hash]);

        for _ in 0..3 {
            assert!(registry.sign(&bare_context(owner), hash, owner).unwrap());
        }
        assert_eq!(registry.signed_count(&hash).unwrap(), 1);
    }

    // =============================================================================
    // VETO
    // =============================================================================

    /// A single authorized signer can veto a document regardless of how many
    /// others already attested, and the veto is terminal.
    #[test]
    fn test_veto_flow() {
        let mut registry = make_registry();
        let hash = random_hash();
        let (alice, bob, carol) = (account(0xA1), account(0xB2), account(0xC3));

        let token = registry
            .create(&funded_context(alice), hash, &[alice, bob, carol])
            .unwrap();
        registry.sign(&bare_context(alice), hash, alice).unwrap();
        registry.sign(&bare_context(carol), hash, carol).unwrap();
        assert_eq!(registry.signed_count(&hash).unwrap(), 2);

        let vetoed = registry.reject(&bare_context(bob), hash, bob).unwrap();
        assert_eq!(vetoed, token);

        // Terminal state: inactive, sets cleared, token gone.
        assert!(!registry.is_active(&hash).unwrap());
        assert_eq!(registry.total_signers(&hash).unwrap(), 0);
        assert_eq!(registry.signed_count(&hash).unwrap(), 0);
        assert!(!registry.is_complete(&bare_context(alice), hash).unwrap());
        assert!(!registry.assets().is_live(token));

        // No way back.
        assert!(matches!(
            registry.create(&funded_context(alice), hash, &[alice]),
            Err(RegistryError::AlreadyCanceled)
        ));
        assert!(matches!(
            registry.sign(&bare_context(alice), hash, alice),
            Err(RegistryError::AlreadyCanceled)
        ));
        assert!(matches!(
            registry.reject(&bare_context(carol), hash, carol),
            Err(RegistryError::AlreadyCanceled)
        ));
    }

    /// Outsiders cannot veto, and signers cannot veto on behalf of others.
    #[test]
    fn test_veto_authorization() {
        let mut registry = make_registry();
        let hash = random_hash();
        let (alice, mallory) = (account(0xA1), account(0xE1));

        registry
            .create(&funded_context(alice), hash, &[alice])
            .unwrap();

        assert!(matches!(
            registry.reject(&bare_context(mallory), hash, mallory),
            Err(RegistryError::Unauthorized { .. })
        ));
        assert!(matches!(
            registry.reject(&bare_context(mallory), hash, alice),
            Err(RegistryError::Unauthorized { .. })
        ));
        assert!(registry.is_active(&hash).unwrap());
    }

    // =============================================================================
    // ADMINISTRATIVE CANCEL
    // =============================================================================

    /// Only the configured administrator may cancel; the user index keeps the
    /// hash even after cancellation.
    #[test]
    fn test_admin_cancel_flow() {
        let mut registry = make_registry();
        let hash = random_hash();
        let owner = account(0xA1);

        let token = registry
            .create(&funded_context(owner), hash, &[owner])
            .unwrap();

        assert!(matches!(
            registry.cancel(&bare_context(owner), hash),
            Err(RegistryError::Unauthorized { .. })
        ));

        let canceled = registry.cancel(&bare_context(admin()), hash).unwrap();
        assert_eq!(canceled, token);
        assert!(!registry.is_active(&hash).unwrap());
        assert!(!registry.assets().is_live(token));

        // Cancellation does not erase the registration history.
        assert_eq!(registry.list_owned(&bare_context(owner)).unwrap(), vec![hash]);
        assert_eq!(registry.token_ref(&hash).unwrap(), Some(token));

        let record = registry.record(&hash).unwrap().unwrap();
        assert!(record.canceled);
        assert_eq!(record.administrator, admin());
    }

    // =============================================================================
    // DOCUMENT INDEPENDENCE
    // =============================================================================

    /// Canceling one document leaves every other document untouched.
    #[test]
    fn test_documents_are_independent() {
        let mut registry = make_registry();
        let owner = account(0xA1);
        let signer = account(0xB2);

        let hashes: Vec<DocumentHash> = (0..4).map(|_| random_hash()).collect();
        let mut tokens = Vec::new();
        for hash in &hashes {
            let token = registry
                .create(&funded_context(owner), *hash, &[signer])
                .unwrap();
            tokens.push(token);
        }
        // Sequential issuer never hands out the same token twice.
        let mut unique = tokens.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), tokens.len());

        registry.sign(&bare_context(signer), hashes[1], signer).unwrap();
        registry.cancel(&bare_context(admin()), hashes[2]).unwrap();

        assert!(registry.is_active(&hashes[0]).unwrap());
        assert_eq!(registry.signed_count(&hashes[1]).unwrap(), 1);
        assert!(!registry.is_active(&hashes[2]).unwrap());
        assert!(registry.is_active(&hashes[3]).unwrap());

        // The owner's index lists every registration, canceled or not.
        assert_eq!(registry.list_owned(&bare_context(owner)).unwrap(), hashes);

        // The mixed states all pass the storage-wide invariant sweep.
        assert!(registry.audit_documents().unwrap().is_empty());
    }

    /// Distinct owners see only their own registrations.
    #[test]
    fn test_per_owner_indexes() {
        let mut registry = make_registry();
        let (alice, bob) = (account(0xA1), account(0xB2));
        let (doc_a, doc_b) = (doc_hash(0x0A), doc_hash(0x0B));

        registry.create(&funded_context(alice), doc_a, &[]).unwrap();
        registry.create(&funded_context(bob), doc_b, &[]).unwrap();

        assert_eq!(registry.list_owned(&bare_context(alice)).unwrap(), vec![doc_a]);
        assert_eq!(registry.list_owned(&bare_context(bob)).unwrap(), vec![doc_b]);

        // Bob co-registers Alice's document; both now index it.
        registry.create(&funded_context(bob), doc_a, &[]).unwrap();
        assert_eq!(
            registry.list_owned(&bare_context(bob)).unwrap(),
            vec![doc_b, doc_a]
        );
        assert_eq!(registry.list_owned(&bare_context(alice)).unwrap(), vec![doc_a]);
    }
}
