use serde::{Deserialize, Serialize};

use crate::Model::Account::Role;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub name: String,
    pub exp: i64,
}

pub mod access_token {
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

    use super::Claims;

    pub fn verify(token: &str) -> Result<Claims, String> {
        let secret = std::env::var("ACCESS_TOKEN_SECRET")
            .map_err(|_| "ACCESS_TOKEN_SECRET not set".to_string())?;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|error| error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{encode, EncodingKey, Header};

    use super::*;

    #[test]
    fn verify_round_trips_claims() {
        std::env::set_var("ACCESS_TOKEN_SECRET", "test-secret");

        let claims = Claims {
            sub: "user-1".to_string(),
            role: Role::Teacher,
            name: "Asha Rahman".to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let verified = access_token::verify(&token).unwrap();
        assert_eq!(verified.sub, "user-1");
        assert_eq!(verified.role, Role::Teacher);
        assert_eq!(verified.name, "Asha Rahman");
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        std::env::set_var("ACCESS_TOKEN_SECRET", "test-secret");

        let claims = Claims {
            sub: "user-1".to_string(),
            role: Role::Student,
            name: "Nila".to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"other-secret"),
        )
        .unwrap();

        assert!(access_token::verify(&token).is_err());
    }
}
