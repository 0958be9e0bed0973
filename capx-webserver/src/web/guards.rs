use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt;
use capx_application::{error::AppError, prelude as flows};
use capx_core::{authorization::Actor, entities::Id, usecases::Error as ParameterError};
use capx_db_sqlite::Connections;

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    match auth_header_val.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() && !token.contains(' ') => Some(token),
        _ => None,
    }
}

/// Authentication state of a request.
///
/// Requests without a valid token are not rejected by the
/// guard itself, each handler decides if authentication
/// is required.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account: Option<Id>,
}

impl Auth {
    pub fn account(&self) -> Result<&Id> {
        self.account
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    /// Resolves the active account that sent the request.
    pub fn actor(&self, connections: &Connections) -> Result<Actor> {
        flows::authenticate(connections, self.account()?)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    async fn account_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<Id> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .find_map(|token| jwt_state.validate_token_and_get_account(token).ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let account = Self::account_from_jwt_in_header(request, &bearer_tokens).await;
        Outcome::Success(Self {
            bearer_tokens,
            account,
        })
    }
}

pub struct Version(pub &'static str);
