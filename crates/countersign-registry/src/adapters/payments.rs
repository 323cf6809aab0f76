use crate::domain::entities::PaymentInstruction;
use crate::domain::errors::PaymentError;
use crate::domain::value_objects::AccountId;
use crate::ports::outbound::PaymentVerifier;

/// The registry's standard funding terms.
///
/// A companion payment is acceptable when it pays the registry address at
/// least the configured threshold, is drawn from the caller's own account,
/// and carries no redirect of funds or ownership.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardPaymentPolicy;

impl StandardPaymentPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PaymentVerifier for StandardPaymentPolicy {
    fn verify(
        &self,
        payment: &PaymentInstruction,
        caller: &AccountId,
        registry_address: &AccountId,
        min_funding: u64,
    ) -> Result<(), PaymentError> {
        if payment.recipient != *registry_address {
            tracing::warn!(recipient = %payment.recipient, "payment rejected: wrong recipient");
            return Err(PaymentError::WrongRecipient);
        }

        if payment.amount < min_funding {
            tracing::warn!(
                amount = payment.amount,
                minimum = min_funding,
                "payment rejected: below funding threshold"
            );
            return Err(PaymentError::AmountBelowMinimum {
                amount: payment.amount,
                minimum: min_funding,
            });
        }

        if payment.sender != *caller {
            tracing::warn!(sender = %payment.sender, caller = %caller, "payment rejected: sender mismatch");
            return Err(PaymentError::SenderMismatch);
        }

        if payment.transfer_ownership_to.is_some() {
            return Err(PaymentError::OwnershipTransfer);
        }

        if payment.redirect_funds_to.is_some() {
            return Err(PaymentError::FundsRedirect);
        }

        Ok(())
    }
}
