//! Path identifier gate
//!
//! Every record operation parses its raw path ids here before any query is
//! built, so malformed ids never reach storage.

use uuid::Uuid;

use menu_shared::utils::parse_uuid;

use crate::error::DomainError;

/// Parse one id, failing with [`DomainError::WrongIdType`].
pub fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
    parse_uuid(raw).ok_or(DomainError::WrongIdType)
}

/// Parse the ids of a request path from outermost to innermost.
///
/// A single id fails with [`DomainError::WrongIdType`]; several fail with
/// [`DomainError::WrongIdTypes`].
pub fn parse_ids<const N: usize>(raw: [&str; N]) -> Result<[Uuid; N], DomainError> {
    let err = if N == 1 {
        DomainError::WrongIdType
    } else {
        DomainError::WrongIdTypes
    };

    let mut ids = [Uuid::nil(); N];
    for (slot, raw) in ids.iter_mut().zip(raw) {
        *slot = parse_uuid(raw).ok_or_else(|| err.clone())?;
    }
    Ok(ids)
}
