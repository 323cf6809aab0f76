//! # Raw-Byte Handler Flows
//!
//! Drives the registry the way a byte-oriented host would: requests arrive
//! as serialized [`RegistryCall`] values with unvalidated argument blobs,
//! and the handler is the only validation layer in front of the service.

#[cfg(test)]
mod tests {
    use countersign_registry::test_utils::{account, bare_context, funded_context, test_config};
    use countersign_registry::{
        CallOutcome, InMemoryKVStore, RegistryCall, RegistryCallHandler, RegistryError,
        RegistryService, SequentialAssetIssuer, StandardPaymentPolicy,
    };

    fn make_handler() -> RegistryCallHandler<
        InMemoryKVStore,
        StandardPaymentPolicy,
        SequentialAssetIssuer,
    > {
        RegistryCallHandler::new(RegistryService::new_in_memory(test_config()))
    }

    /// A create request deserialized off the wire registers the document.
    #[test]
    fn test_wire_create_and_query() {
        let mut handler = make_handler();
        let alice = account(0xA1);
        let hash_bytes = hex::decode("cd".repeat(32)).unwrap();

        let request = serde_json::json!({
            "op": "Create",
            "args": {
                "hash": hash_bytes.clone(),
                "signers": [alice.as_bytes().to_vec()],
            },
        });
        let call: RegistryCall = serde_json::from_value(request).unwrap();

        let created = handler.dispatch(&funded_context(alice), call).unwrap();
        let token = match created {
            CallOutcome::Token(token) => token,
            other => panic!("unexpected outcome {other:?}"),
        };

        let lookup = handler
            .dispatch(
                &bare_context(alice),
                RegistryCall::GetTokenRef {
                    hash: hash_bytes.clone(),
                },
            )
            .unwrap();
        assert_eq!(lookup, CallOutcome::TokenLookup(Some(token)));

        let count = handler
            .dispatch(
                &bare_context(alice),
                RegistryCall::TotalSigners { hash: hash_bytes },
            )
            .unwrap();
        assert_eq!(count, CallOutcome::Count(1));
    }

    /// Undersized and oversized argument blobs never reach the service.
    #[test]
    fn test_wire_rejects_malformed_blobs() {
        let mut handler = make_handler();
        let alice = account(0xA1);

        for bad_hash in [vec![0u8; 31], vec![0u8; 33], Vec::new()] {
            let result = handler.dispatch(
                &bare_context(alice),
                RegistryCall::SignedCount { hash: bad_hash },
            );
            assert!(matches!(result, Err(RegistryError::InvalidInput { .. })));
        }

        let result = handler.dispatch(
            &bare_context(alice),
            RegistryCall::Sign {
                hash: vec![0xCD; 32],
                signer: vec![0xA1; 16],
            },
        );
        assert!(matches!(result, Err(RegistryError::InvalidInput { .. })));
    }

    /// Read operations on an unknown hash answer with empty shapes.
    #[test]
    fn test_wire_reads_on_unknown_hash() {
        let mut handler = make_handler();
        let alice = account(0xA1);
        let hash = vec![0x99u8; 32];

        let cases = [
            (
                RegistryCall::GetTokenRef { hash: hash.clone() },
                CallOutcome::TokenLookup(None),
            ),
            (
                RegistryCall::IsActive { hash: hash.clone() },
                CallOutcome::Flag(false),
            ),
            (
                RegistryCall::IsSigned { hash: hash.clone() },
                CallOutcome::Flag(false),
            ),
            (
                RegistryCall::TotalSigners { hash: hash.clone() },
                CallOutcome::Count(0),
            ),
            (
                RegistryCall::SignedCount { hash },
                CallOutcome::Count(0),
            ),
            (RegistryCall::ListOwned, CallOutcome::Owned(Vec::new())),
        ];
        for (call, expected) in cases {
            let outcome = handler.dispatch(&bare_context(alice), call).unwrap();
            assert_eq!(outcome, expected);
        }
    }
}
