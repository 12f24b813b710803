use chrono::NaiveDate;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("field has no results")]
    MissingResults,
    #[error("malformed results: {0}")]
    MalformedResults(#[from] Malformed),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Malformed {
    #[error("{date}: missing {field}")]
    MissingField { date: NaiveDate, field: &'static str },
    #[error("{date}: {field} is not a valid amount ({value})")]
    InvalidValue {
        date: NaiveDate,
        field: &'static str,
        value: f64,
    },
    #[error("{date} does not follow {previous}")]
    OutOfOrder { date: NaiveDate, previous: NaiveDate },
    #[error("{name} is not a number ({value})")]
    InvalidScalar { name: &'static str, value: f64 },
}
