//! Transaction history module - records, filtering, search, and pagination.

mod history_model;
mod history_service;
mod history_traits;

pub use history_model::{
    FilterCriteria, TransactionDetail, TransactionKind, TransactionRecord, TransactionStatus,
};
pub use history_service::{filter, paginate, query_history, search, sort_by_timestamp_desc};
pub use history_traits::HistoryRecord;
