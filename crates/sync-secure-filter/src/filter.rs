use crate::error::{FilterError, Result};
use crate::request::EncryptionTarget;

/// Stamps `encrypt` onto the request and hands the same reference back.
pub fn apply_encryption<R>(encrypt: bool, request: &mut R) -> &mut R
where
    R: EncryptionTarget + ?Sized,
{
    request.set_do_encryption(encrypt);
    tracing::trace!(encrypt, "request filtered");
    request
}

/// Like [`apply_encryption`], for callers that may not have a request.
///
/// A missing request is rejected with [`FilterError::InvalidArgument`] and
/// nothing is mutated.
pub fn filter_request<R>(encrypt: bool, request: Option<&mut R>) -> Result<&mut R>
where
    R: EncryptionTarget + ?Sized,
{
    let Some(request) = request else {
        tracing::warn!(encrypt, "filter called without a request");
        return Err(FilterError::InvalidArgument(
            "no request to filter".to_string(),
        ));
    };
    Ok(apply_encryption(encrypt, request))
}

pub fn filter_all<'a, R, I>(encrypt: bool, requests: I) -> usize
where
    R: EncryptionTarget + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut R>,
{
    let mut stamped = 0usize;
    for request in requests {
        apply_encryption(encrypt, request);
        stamped += 1;
    }
    tracing::debug!(encrypt, stamped, "request batch filtered");
    stamped
}
