use chrono::{Duration, Utc};
pub use jsonwebtoken::Algorithm;
use jsonwebtoken::errors::Error;
pub use jsonwebtoken::errors::ErrorKind as JWTErrorKind;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, TokenData, Validation, decode as jdec, encode as jenc,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub exp: i64,
    pub iat: i64,
    pub id: String,
    pub email: String,
}

impl Claims {
    pub fn new(id: impl Into<String>, email: impl Into<String>, session_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            iat: now.timestamp(),
            exp: (now + Duration::hours(session_hours)).timestamp(),
            id: id.into(),
            email: email.into(),
        }
    }
}

pub fn generate_token<T>(algorithm: Algorithm, key: &str, claims: T) -> Result<String, Error>
where
    T: Serialize,
{
    jenc(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(key.as_bytes()),
    )
}

pub fn validate_token<T>(
    algorithm: Algorithm,
    key: &str,
    token: &str,
) -> Result<TokenData<T>, Error>
where
    for<'a> T: Deserialize<'a>,
{
    let validation = Validation::new(algorithm);
    jdec::<T>(token, &DecodingKey::from_secret(key.as_bytes()), &validation)
}
