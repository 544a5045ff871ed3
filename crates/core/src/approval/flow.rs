//! Two-step approval flow for a single budget.
//!
//! Models the approve → maybe block → verify-PIN interaction as an explicit
//! state machine so retries and cancellation are unambiguous. One decision
//! may be outstanding at a time; the flow rearms only after a terminal
//! transition or an explicit cancel.

use clinia_shared::FinancialSettings;

use super::error::ApprovalError;
use super::gate::ApprovalGate;
use super::types::{ApprovalDecision, BudgetStatus};
use crate::margin::MarginAnalysis;

/// Approval interaction state for one budget.
#[derive(Debug, Clone)]
pub struct ApprovalFlow {
    status: BudgetStatus,
    pending: Option<ApprovalDecision>,
}

impl ApprovalFlow {
    /// Creates a flow for a budget in the given status.
    #[must_use]
    pub const fn new(status: BudgetStatus) -> Self {
        Self {
            status,
            pending: None,
        }
    }

    /// Current budget status.
    #[must_use]
    pub const fn status(&self) -> BudgetStatus {
        self.status
    }

    /// The outstanding decision awaiting a PIN, if any.
    #[must_use]
    pub const fn pending_decision(&self) -> Option<&ApprovalDecision> {
        self.pending.as_ref()
    }

    /// Starts an approval attempt.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::DecisionInFlight` while a previous attempt is
    /// still awaiting its PIN, and propagates gate transition errors.
    pub fn attempt(
        &mut self,
        analysis: Option<&MarginAnalysis>,
        settings: &FinancialSettings,
    ) -> Result<ApprovalDecision, ApprovalError> {
        if self.pending.is_some() {
            return Err(ApprovalError::DecisionInFlight);
        }

        let outcome = ApprovalGate::attempt(self.status, analysis, settings)?;
        self.status = outcome.new_status;
        if outcome.decision.required {
            self.pending = Some(outcome.decision);
        }

        Ok(outcome.decision)
    }

    /// Supplies the manager PIN for the outstanding decision.
    ///
    /// A mismatch keeps the budget blocked and the decision outstanding so
    /// the PIN can be re-entered.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::InvalidTransition` when no decision is
    /// outstanding and `ApprovalError::PinMismatch` for a wrong PIN.
    pub fn supply_pin(
        &mut self,
        entered_pin: &str,
        stored_pin: &str,
    ) -> Result<ApprovalDecision, ApprovalError> {
        let Some(pending) = self.pending else {
            return Err(ApprovalError::InvalidTransition {
                from: self.status,
                to: BudgetStatus::Approved,
            });
        };

        let outcome = ApprovalGate::verify_pin(
            self.status,
            entered_pin,
            stored_pin,
            pending.margin_percent,
        )?;

        self.status = outcome.new_status;
        self.pending = None;
        Ok(outcome.decision)
    }

    /// Abandons the outstanding decision, leaving the budget blocked but
    /// ready for a new attempt.
    pub fn cancel_attempt(&mut self) {
        self.pending = None;
    }

    /// Rejects the budget.
    ///
    /// # Errors
    ///
    /// Propagates gate validation errors.
    pub fn reject(&mut self, reason: &str) -> Result<(), ApprovalError> {
        self.status = ApprovalGate::reject(self.status, reason)?;
        self.pending = None;
        Ok(())
    }

    /// Cancels the budget.
    ///
    /// # Errors
    ///
    /// Propagates gate validation errors.
    pub fn cancel(&mut self) -> Result<(), ApprovalError> {
        self.status = ApprovalGate::cancel(self.status)?;
        self.pending = None;
        Ok(())
    }
}
