/// Record shape the history operations work over.
///
/// Implemented by [`TransactionRecord`](super::TransactionRecord); any
/// transaction-like type exposing these accessors can reuse the filter,
/// search, and pagination operations unchanged.
pub trait HistoryRecord {
    type Kind: PartialEq + Copy;
    type Status: PartialEq + Copy;

    fn kind(&self) -> Self::Kind;
    fn status(&self) -> Self::Status;
    /// Unix seconds.
    fn timestamp(&self) -> i64;
    fn from_address(&self) -> &str;
    fn to_address(&self) -> &str;
    /// Fields included in substring search, in addition to the two
    /// endpoint addresses.
    fn searchable_fields(&self) -> Vec<&str>;
}
