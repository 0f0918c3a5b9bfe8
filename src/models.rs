// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Persisted JSON keeps the camelCase field names and snake_case enum tags
// of the original storage layout, so an existing data directory stays
// readable as-is.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub email: String,
    pub full_name: String,
    // Stored in the clear; see the error taxonomy notes in DESIGN.md.
    pub password: String,
}

/// Active session record persisted under the `user` key. Never carries
/// the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Bank,
    Cash,
    Mobile,
    Crypto,
}

impl WalletKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bank" => Some(Self::Bank),
            "cash" => Some(Self::Cash),
            "mobile" => Some(Self::Mobile),
            "crypto" => Some(Self::Crypto),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::Cash => "cash",
            Self::Mobile => "mobile",
            Self::Crypto => "crypto",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WalletKind,
    pub balance: Decimal,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub account_number: Option<String>,
    pub currency: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update for a wallet; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct WalletPatch {
    pub name: Option<String>,
    pub kind: Option<WalletKind>,
    pub balance: Option<Decimal>,
    pub account_number: Option<String>,
    pub currency: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    Pending,
}

impl InvoiceStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "paid" => Some(Self::Paid),
            "unpaid" => Some(Self::Unpaid),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub client_name: String,
    pub client_email: String,
    pub amount: Decimal,
    /// VAT percentage applied at creation time.
    pub vat: Decimal,
    // vatAmount and total are computed once at creation (or when amount/vat
    // change) and stored; reads never recompute them.
    pub vat_amount: Decimal,
    pub total: Decimal,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wallet_id: Option<String>,
}

/// Partial update for an invoice. Changing `amount` or `vat` recomputes the
/// stored vatAmount/total.
#[derive(Debug, Clone, Default)]
pub struct InvoicePatch {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub amount: Option<Decimal>,
    pub vat: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<InvoiceStatus>,
    pub wallet_id: Option<Option<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    InvoicePayment,
    WalletDeposit,
    WalletWithdrawal,
    WalletTransfer,
}

impl TransactionKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "invoice_payment" => Some(Self::InvoicePayment),
            "wallet_deposit" => Some(Self::WalletDeposit),
            "wallet_withdrawal" => Some(Self::WalletWithdrawal),
            "wallet_transfer" => Some(Self::WalletTransfer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvoicePayment => "invoice_payment",
            Self::WalletDeposit => "wallet_deposit",
            Self::WalletWithdrawal => "wallet_withdrawal",
            Self::WalletTransfer => "wallet_transfer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InvoicePayment => "Invoice Payment",
            Self::WalletDeposit => "Deposit",
            Self::WalletWithdrawal => "Withdrawal",
            Self::WalletTransfer => "Transfer",
        }
    }
}

/// Append-only ledger entry; never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wallet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub from_wallet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub to_wallet_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
}
