//! # Persistence Flows
//!
//! The registry holds no in-process caches, so a service rebuilt over the
//! same file-backed store must observe exactly the state the previous
//! instance committed.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use countersign_registry::test_utils::{
        account, admin, bare_context, doc_hash, funded_context, test_config,
    };
    use countersign_registry::{
        DocumentRegistryApi, FileBackedKVStore, RegistryDependencies, RegistryError,
        RegistryService, SequentialAssetIssuer, SigningWorkflowApi, StandardPaymentPolicy,
        UserIndexApi,
    };

    fn open_registry(
        path: &Path,
    ) -> RegistryService<FileBackedKVStore, StandardPaymentPolicy, SequentialAssetIssuer> {
        RegistryService::new(
            RegistryDependencies {
                kv_store: FileBackedKVStore::new(path),
                payments: StandardPaymentPolicy::new(),
                assets: SequentialAssetIssuer::new(),
            },
            test_config(),
        )
    }

    /// Registrations, signatures, and the user index survive a reopen.
    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("registry.kv");
        let hash = doc_hash(0x11);
        let (alice, bob) = (account(0xA1), account(0xB2));

        let token = {
            let mut registry = open_registry(&store_path);
            let token = registry
                .create(&funded_context(alice), hash, &[alice, bob])
                .unwrap();
            registry.sign(&bare_context(alice), hash, alice).unwrap();
            token
        };

        let registry = open_registry(&store_path);
        assert_eq!(registry.token_ref(&hash).unwrap(), Some(token));
        assert!(registry.is_active(&hash).unwrap());
        assert_eq!(registry.total_signers(&hash).unwrap(), 2);
        assert_eq!(registry.signed_count(&hash).unwrap(), 1);
        assert!(registry.is_signed(&bare_context(alice), hash).unwrap());
        assert!(!registry.is_signed(&bare_context(bob), hash).unwrap());
        assert_eq!(
            registry.list_owned(&bare_context(alice)).unwrap(),
            vec![hash]
        );
        assert!(registry.audit_documents().unwrap().is_empty());
    }

    /// A signature recorded by a rebuilt instance completes the document.
    #[test]
    fn test_signing_resumes_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("registry.kv");
        let hash = doc_hash(0x22);
        let (alice, bob) = (account(0xA1), account(0xB2));

        {
            let mut registry = open_registry(&store_path);
            registry
                .create(&funded_context(alice), hash, &[alice, bob])
                .unwrap();
            registry.sign(&bare_context(alice), hash, alice).unwrap();
        }

        let mut registry = open_registry(&store_path);
        registry.sign(&bare_context(bob), hash, bob).unwrap();
        assert!(registry.is_complete(&bare_context(bob), hash).unwrap());
    }

    /// Cancellation is terminal across instances, not just within one.
    #[test]
    fn test_cancellation_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("registry.kv");
        let hash = doc_hash(0x33);
        let alice = account(0xA1);

        {
            let mut registry = open_registry(&store_path);
            registry
                .create(&funded_context(alice), hash, &[alice])
                .unwrap();
            registry.cancel(&bare_context(admin()), hash).unwrap();
        }

        let mut registry = open_registry(&store_path);
        assert!(!registry.is_active(&hash).unwrap());
        assert_eq!(registry.total_signers(&hash).unwrap(), 0);
        assert!(matches!(
            registry.create(&funded_context(alice), hash, &[alice]),
            Err(RegistryError::AlreadyCanceled)
        ));
        assert!(matches!(
            registry.sign(&bare_context(alice), hash, alice),
            Err(RegistryError::AlreadyCanceled)
        ));
    }
}
