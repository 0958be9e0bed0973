use std::{collections::HashSet, time::Duration};

use anyhow::{anyhow, Result};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use capx_core::entities::Id;
use jwt_service::JwtService;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The account id
    sub: String,
    /// Expiry time as Unix timestamp
    exp: u64,
}

/// Issues and validates the bearer tokens.
///
/// Logged out tokens are kept in memory until they expire.
/// The blacklist is not persisted: with a configured secret a
/// token that was logged out before a restart is accepted again
/// until its expiry. Without a configured secret no token
/// survives a restart at all.
pub struct JwtState {
    jwt_service: JwtService,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(secret: Option<&str>, time_valid: Duration) -> Self {
        let jwt_service = match secret {
            Some(secret) => {
                log::info!(
                    "Logged out tokens are accepted again after a restart until they expire"
                );
                JwtService::new(secret)
            }
            None => JwtService::random(),
        };
        Self {
            jwt_service,
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, account: &Id) -> Result<String> {
        let now = u64::try_from(OffsetDateTime::now_utc().unix_timestamp())?;
        let claims = Claims {
            sub: account.to_string(),
            exp: now.saturating_add(self.time_valid.as_secs()),
        };
        self.jwt_service.encode(&claims)
    }

    pub fn validate_token_and_get_account(&self, token: &str) -> Result<Id> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.jwt_service.decode(token)?;
        Ok(claims.sub.into())
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_expired_tokens();
        self.lock().insert(token);
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway
    fn remove_expired_tokens(&self) {
        let jwt_service = &self.jwt_service;
        self.lock()
            .retain(|token| jwt_service.decode(token).is_ok());
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

mod jwt_service {
    use super::{Claims, Result};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

    /// A random 256-bit secret, base64 encoded.
    fn generate_secret() -> String {
        STANDARD.encode(rand::random::<[u8; 32]>())
    }

    pub struct JwtService {
        encoding_key: EncodingKey,
        decoding_key: DecodingKey,
    }

    impl JwtService {
        pub fn new(secret: &str) -> Self {
            Self {
                encoding_key: EncodingKey::from_secret(secret.as_bytes()),
                decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            }
        }

        pub fn random() -> Self {
            log::info!("No token secret configured, tokens will not survive a restart");
            Self::new(&generate_secret())
        }

        pub fn encode(&self, claims: &Claims) -> Result<String> {
            let token = encode(&Header::default(), claims, &self.encoding_key)?;
            Ok(token)
        }

        pub fn decode(&self, token: &str) -> Result<Claims> {
            let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
            Ok(data.claims)
        }
    }
}
