/// Configuration for token signing
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Opaque secret key used to sign and verify save tokens. Rotating it
    /// invalidates all outstanding tokens.
    pub token_secret: Vec<u8>,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given token secret
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self { token_secret: token_secret.into() }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
