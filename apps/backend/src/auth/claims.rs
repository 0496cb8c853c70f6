//! Claims carried inside backend-issued save tokens.

use serde::{Deserialize, Serialize};

/// Claims set encoded into the payload half of a token. Created at issuance,
/// never mutated, exists only inside the token's serialized form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user id (users.id)
    pub sub: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
