use std::{error, fmt};

#[derive(Debug)]
pub enum Error {
    SqlxError(sqlx::Error),
    ParseError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::SqlxError(e) => write!(f, "{}", e),
            Self::ParseError(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::SqlxError(e) => Some(e),
            Self::ParseError(_) => None,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(sqlx_err: sqlx::Error) -> Self {
        Self::SqlxError(sqlx_err)
    }
}
