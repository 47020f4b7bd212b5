use std::{error::Error, fmt};

/// Failures coming out of the store layer, classified once at the
/// service/store boundary. Insert failures are a two-way switch:
/// a foreign-key violation (the referenced match row is missing) or
/// anything else, which callers treat as opaque.
#[derive(Debug)]
pub enum StoreError {
    ForeignKeyViolation,
    Other(anyhow::Error),
}

// SQLite reports SQLITE_CONSTRAINT_FOREIGNKEY with this message.
fn is_foreign_key_violation(msg: &str) -> bool {
    msg.contains("FOREIGN KEY constraint failed")
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use StoreError::*;
        match self {
            ForeignKeyViolation => write!(f, "ForeignKeyViolation"),
            Other(e) => write!(f, "StoreError: {}", e),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use StoreError::*;
        match self {
            Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<libsql::Error> for StoreError {
    fn from(error: libsql::Error) -> Self {
        if is_foreign_key_violation(&error.to_string()) {
            StoreError::ForeignKeyViolation
        } else {
            StoreError::Other(error.into())
        }
    }
}
