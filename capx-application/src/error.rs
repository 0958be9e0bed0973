use capx_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use std::io;
use thiserror::Error;

pub use capx_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        // Storage errors are reported as such, no matter
        // which layer passed them on.
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_are_unwrapped() {
        let err = AppError::from(ParameterError::Repo(RepoError::NotFound));
        assert!(matches!(
            err,
            AppError::Business(BError::Repo(RepoError::NotFound))
        ));
        let err = AppError::from(ParameterError::Unauthorized);
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(ParameterError::Unauthorized))
        ));
    }
}
