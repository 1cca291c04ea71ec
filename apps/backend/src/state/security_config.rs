use jsonwebtoken::Algorithm;

/// Access tokens are valid for this many seconds unless configured otherwise.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Configuration for JWT security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    /// Lifetime of tokens minted by `mint_access_token`
    pub token_ttl_secs: i64,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }

    pub fn with_token_ttl(mut self, secs: i64) -> Self {
        self.token_ttl_secs = secs;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
