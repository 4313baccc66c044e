//! Transaction history domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::WhitelistTier;
use crate::utils::time_utils::datetime_from_unix;

use super::history_traits::HistoryRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

/// Discriminant of a transaction record, used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Purchase,
    TokenRelease,
    Refund,
    WhitelistUpdate,
}

/// Kind-specific payload of a transaction record.
///
/// One variant per known transaction kind, each carrying its own typed
/// fields; interpretation sites match exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "kind",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum TransactionDetail {
    Purchase {
        purchaser: String,
        token_amount: Decimal,
        payment_amount: Decimal,
    },
    TokenRelease {
        beneficiary: String,
        amount: Decimal,
        schedule_id: String,
    },
    Refund {
        recipient: String,
        amount: Decimal,
    },
    WhitelistUpdate {
        account: String,
        tier: WhitelistTier,
    },
}

impl TransactionDetail {
    pub fn kind(&self) -> TransactionKind {
        match self {
            TransactionDetail::Purchase { .. } => TransactionKind::Purchase,
            TransactionDetail::TokenRelease { .. } => TransactionKind::TokenRelease,
            TransactionDetail::Refund { .. } => TransactionKind::Refund,
            TransactionDetail::WhitelistUpdate { .. } => TransactionKind::WhitelistUpdate,
        }
    }

    /// Kind-specific fields included in substring search.
    pub fn searchable_fields(&self) -> Vec<&str> {
        match self {
            TransactionDetail::Purchase { purchaser, .. } => vec![purchaser],
            TransactionDetail::TokenRelease {
                beneficiary,
                schedule_id,
                ..
            } => vec![beneficiary, schedule_id],
            TransactionDetail::Refund { recipient, .. } => vec![recipient],
            TransactionDetail::WhitelistUpdate { account, .. } => vec![account],
        }
    }
}

/// A transaction-history entry, as reported by the data-fetch layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub tx_hash: String,
    /// Unix seconds.
    pub timestamp: i64,
    pub status: TransactionStatus,
    pub from_address: String,
    pub to_address: String,
    #[serde(flatten)]
    pub detail: TransactionDetail,
}

impl TransactionRecord {
    pub fn kind(&self) -> TransactionKind {
        self.detail.kind()
    }

    pub fn timestamp_utc(&self) -> DateTime<Utc> {
        datetime_from_unix(self.timestamp)
    }
}

impl HistoryRecord for TransactionRecord {
    type Kind = TransactionKind;
    type Status = TransactionStatus;

    fn kind(&self) -> TransactionKind {
        self.detail.kind()
    }

    fn status(&self) -> TransactionStatus {
        self.status
    }

    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn from_address(&self) -> &str {
        &self.from_address
    }

    fn to_address(&self) -> &str {
        &self.to_address
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.tx_hash.as_str()];
        fields.extend(self.detail.searchable_fields());
        fields
    }
}

/// AND-combined filter criteria for history queries. `None` fields do not
/// constrain the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria<K = TransactionKind, S = TransactionStatus> {
    pub kinds: Option<Vec<K>>,
    pub statuses: Option<Vec<S>>,
    /// Inclusive lower bound on the record timestamp.
    pub from_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the record timestamp.
    pub to_date: Option<DateTime<Utc>>,
    /// Matches when either endpoint address equals any listed address,
    /// case-insensitively.
    pub addresses: Option<Vec<String>>,
}

impl<K, S> Default for FilterCriteria<K, S> {
    fn default() -> Self {
        Self {
            kinds: None,
            statuses: None,
            from_date: None,
            to_date: None,
            addresses: None,
        }
    }
}
