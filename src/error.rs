use argon2::Error as Argon2Error;
use log::warn;
use mongodb::error::Error as DbError;
use rocket::{http::Status, response::Responder};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while serving an election operation.
///
/// Every core operation returns exactly one of these or succeeds; there are
/// no multi-collection transactions to partially fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The store round trip itself failed; the caller decides whether to retry.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] DbError),
    #[error(transparent)]
    Argon2(#[from] Argon2Error),
    /// Voter or candidate absent.
    #[error("Not found: {0}")]
    NotFound(String),
    /// The voter exists but the supplied passcode does not match.
    #[error("Invalid credential")]
    InvalidCredential,
    /// Not one of the six recognized positions.
    #[error("Invalid position: {0:?}")]
    InvalidPosition(String),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        warn!("{}", self);
        Err(match self {
            Self::NotFound(_) => Status::NotFound,
            Self::InvalidCredential => Status::Unauthorized,
            Self::InvalidPosition(_) => Status::BadRequest,
            Self::StoreUnavailable(_) | Self::Argon2(_) => Status::InternalServerError,
        })
    }
}
