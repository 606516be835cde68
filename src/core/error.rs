use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    #[error("invalid climate zone `{0}`, expected one of P, Q, R, S, T, V, W, X, Y, Z")]
    InvalidZone(String),

    #[error("billing period ends ({end}) before it starts ({start})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("billing period {start}..={end}: its season transition is not in the starting year")]
    UnsupportedPeriod { start: NaiveDate, end: NaiveDate },
}
