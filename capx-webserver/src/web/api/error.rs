use super::json_error_response;
use anyhow::anyhow;
use capx_application::error::{AppError, BError};
pub use capx_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn method_not_allowed(method: &str) -> Self {
        Self::OtherWithStatus(
            anyhow!("Method \"{method}\" not allowed."),
            Status::MethodNotAllowed,
        )
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
            JsonError::Parse(_str, err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

fn parameter_status(err: &ParameterError) -> Status {
    use ParameterError as E;
    match err {
        E::Credentials | E::Unauthorized => Status::Unauthorized,
        E::Forbidden(_) => Status::Forbidden,
        E::UserExists | E::SkillSetConflict(_) => Status::Conflict,
        E::Repo(RepoError::NotFound) => Status::NotFound,
        E::Repo(RepoError::AlreadyExists) => Status::Conflict,
        E::Repo(_) => Status::InternalServerError,
        _ => Status::BadRequest,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                let status = match &err {
                    AppError::Business(BError::Parameter(err)) => parameter_status(err),
                    AppError::Business(BError::Repo(RepoError::NotFound)) => Status::NotFound,
                    AppError::Business(BError::Repo(RepoError::AlreadyExists)) => {
                        Status::Conflict
                    }
                    _ => Status::InternalServerError,
                };
                if status == Status::InternalServerError {
                    error!("Error: {err}");
                    return json_error_response(req, &"Internal server error", status);
                }
                json_error_response(req, &err, status)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &"Internal server error", Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
