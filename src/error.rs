// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Typed failures of the ledger operations. Lookup misses are explicit
/// errors rather than silent no-ops so callers can tell "nothing to do"
/// apart from a dangling reference.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invoice '{0}' not found")]
    InvoiceNotFound(String),

    #[error("Wallet '{0}' not found")]
    WalletNotFound(String),

    #[error("An account with email '{0}' already exists")]
    EmailTaken(String),

    // Deliberately does not distinguish missing-user from wrong-password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("No active session; run 'kudibook login' first")]
    NoSession,

    #[error("Wallet '{0}' has insufficient funds")]
    InsufficientFunds(String),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Amount and VAT rate must not be negative")]
    NegativeAmount,

    #[error("Cannot transfer from a wallet to itself")]
    SelfTransfer,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
