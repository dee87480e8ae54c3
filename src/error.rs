/// Domain failures surfaced to the caller with a stable machine code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("height must be greater than zero (got {0})")]
    InvalidHeight(f64),

    #[error("daily caloric deficit must be greater than zero to reach the goal (got {0})")]
    NoDeficit(f64),

    #[error("insufficient data: {0}")]
    InsufficientData(&'static str),

    #[error("invalid sex: {0} (expected m/male/f/female)")]
    InvalidSex(String),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidHeight(_) => "invalid_height",
            Self::NoDeficit(_) => "no_deficit",
            Self::InsufficientData(_) => "insufficient_data",
            Self::InvalidSex(_) => "invalid_sex",
        }
    }
}

/// Machine code for an arbitrary error, falling back to `general_error`.
pub fn code_of(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<Error>()
        .map(Error::code)
        .unwrap_or("general_error")
}
