use crate::domain::errors::AssetError;
use crate::domain::value_objects::{TokenRef, TokenSpec};
use crate::ports::outbound::AssetIssuer;
use std::collections::HashSet;

/// Token issuer handing out ids from an incrementing counter.
///
/// Ids start at 1 so that 0 stays free to mean "unset". Tracks live tokens
/// so double deletion and deletion of unknown ids surface as errors.
#[derive(Debug)]
pub struct SequentialAssetIssuer {
    next_id: u64,
    live: HashSet<TokenRef>,
}

impl SequentialAssetIssuer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            live: HashSet::new(),
        }
    }

    /// Returns true if the token has been minted and not deleted.
    #[must_use]
    pub fn is_live(&self, token: TokenRef) -> bool {
        self.live.contains(&token)
    }

    /// Number of live tokens.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl Default for SequentialAssetIssuer {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetIssuer for SequentialAssetIssuer {
    fn mint(&mut self, _spec: &TokenSpec) -> Result<TokenRef, AssetError> {
        let token = TokenRef::new(self.next_id);
        self.next_id += 1;
        self.live.insert(token);
        Ok(token)
    }

    fn delete(&mut self, token: TokenRef) -> Result<(), AssetError> {
        if self.live.remove(&token) {
            Ok(())
        } else {
            Err(AssetError::UnknownToken(token))
        }
    }
}

/// Controllable issuer for unit tests.
///
/// Records every mint and delete call and can be primed to fail either,
/// for exercising mint-failure aborts and the best-effort delete path.
#[derive(Debug, Default)]
pub struct RecordingAssetIssuer {
    next_id: u64,
    minted: Vec<TokenSpec>,
    deleted: Vec<TokenRef>,
    fail_mints: bool,
    fail_deletes: bool,
}

impl RecordingAssetIssuer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Make subsequent mint calls fail.
    pub fn fail_mints(&mut self) {
        self.fail_mints = true;
    }

    /// Make subsequent delete calls fail.
    pub fn fail_deletes(&mut self) {
        self.fail_deletes = true;
    }

    /// Specs of every mint attempt that succeeded.
    #[must_use]
    pub fn minted(&self) -> &[TokenSpec] {
        &self.minted
    }

    /// Tokens passed to delete, whether or not the call succeeded.
    #[must_use]
    pub fn deleted(&self) -> &[TokenRef] {
        &self.deleted
    }
}

impl AssetIssuer for RecordingAssetIssuer {
    fn mint(&mut self, spec: &TokenSpec) -> Result<TokenRef, AssetError> {
        if self.fail_mints {
            return Err(AssetError::MintFailed {
                message: "issuer primed to fail".to_string(),
            });
        }
        let token = TokenRef::new(self.next_id);
        self.next_id += 1;
        self.minted.push(spec.clone());
        Ok(token)
    }

    fn delete(&mut self, token: TokenRef) -> Result<(), AssetError> {
        self.deleted.push(token);
        if self.fail_deletes {
            return Err(AssetError::DeleteFailed {
                token,
                message: "issuer primed to fail".to_string(),
            });
        }
        Ok(())
    }
}
