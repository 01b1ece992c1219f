mod summary;
mod transaction_log;

pub use summary::{AmountRange, UserSummary};
pub use transaction_log::{TransactionLog, AMOUNT_DECIMAL_PLACES};
