use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Result;
use crate::filter::filter_request;
use crate::request::EncryptionTarget;

// Process-wide encryption preference.
//
// Loads and stores are SeqCst so a `filter` always observes the most recent
// `set_encrypt`. Concurrent writers are last-write-wins; nothing orders a
// writer against a filter running on another thread.
static GLOBAL: EncryptionFlag = EncryptionFlag::new(false);

#[derive(Debug, Default)]
pub struct EncryptionFlag {
    encrypt: AtomicBool,
}

impl EncryptionFlag {
    pub const fn new(encrypt: bool) -> Self {
        Self {
            encrypt: AtomicBool::new(encrypt),
        }
    }

    pub fn set(&self, encrypt: bool) {
        self.encrypt.store(encrypt, Ordering::SeqCst);
    }

    pub fn get(&self) -> bool {
        self.encrypt.load(Ordering::SeqCst)
    }

    pub fn filter<'a, R>(&self, request: Option<&'a mut R>) -> Result<&'a mut R>
    where
        R: EncryptionTarget + ?Sized,
    {
        filter_request(self.get(), request)
    }
}

pub fn global() -> &'static EncryptionFlag {
    &GLOBAL
}

pub fn set_encrypt(encrypt: bool) {
    GLOBAL.set(encrypt);
    tracing::debug!(encrypt, "global encryption flag set");
}

pub fn is_encrypt() -> bool {
    GLOBAL.get()
}

/// Stamps the process-wide flag onto `request`.
///
/// Prefer [`crate::SecureSession`] or [`crate::apply_encryption`] where the
/// caller can carry the flag itself.
pub fn filter<R>(request: Option<&mut R>) -> Result<&mut R>
where
    R: EncryptionTarget + ?Sized,
{
    GLOBAL.filter(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::request::RpcRequest;

    // The process-wide flag is exercised in tests/global_flag.rs, where it
    // owns its own test binary.

    #[test]
    fn local_flag_defaults_to_false() {
        let flag = EncryptionFlag::default();
        assert!(!flag.get());
    }

    #[test]
    fn local_flag_returns_last_set_value() {
        let flag = EncryptionFlag::new(false);
        for v in [true, false, true, true, false] {
            flag.set(v);
            assert_eq!(flag.get(), v);
        }
    }

    #[test]
    fn local_flag_filter_stamps_current_value() {
        let flag = EncryptionFlag::new(true);
        let mut req = RpcRequest::new("Show", 1);
        flag.filter(Some(&mut req)).expect("filter");
        assert!(req.do_encryption);

        flag.set(false);
        flag.filter(Some(&mut req)).expect("filter");
        assert!(!req.do_encryption);
    }

    #[test]
    fn local_flag_rejects_missing_request() {
        let flag = EncryptionFlag::new(true);
        let err = flag
            .filter::<RpcRequest>(None)
            .expect_err("missing request should fail");
        assert_eq!(err.code(), "invalid_argument");
        assert!(matches!(err, FilterError::InvalidArgument(_)));
    }

    #[test]
    fn shared_flag_is_visible_across_threads() {
        let flag = std::sync::Arc::new(EncryptionFlag::new(false));
        let writer = flag.clone();
        std::thread::spawn(move || writer.set(true))
            .join()
            .expect("writer thread");
        assert!(flag.get());
    }
}
