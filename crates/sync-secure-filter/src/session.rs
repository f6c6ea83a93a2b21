// Per-connection encryption preference, threaded explicitly by the caller.

use crate::config::FilterConfig;
use crate::error::Result;
use crate::filter::{apply_encryption, filter_request};
use crate::request::EncryptionTarget;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecureSession {
    encrypt: bool,
}

impl SecureSession {
    pub fn new(encrypt: bool) -> Self {
        Self { encrypt }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.encrypt)
    }

    pub fn set_encrypt(&mut self, encrypt: bool) {
        self.encrypt = encrypt;
        tracing::debug!(encrypt, "session encryption flag set");
    }

    pub fn is_encrypt(&self) -> bool {
        self.encrypt
    }

    pub fn apply<'a, R>(&self, request: &'a mut R) -> &'a mut R
    where
        R: EncryptionTarget + ?Sized,
    {
        apply_encryption(self.encrypt, request)
    }

    pub fn filter<'a, R>(&self, request: Option<&'a mut R>) -> Result<&'a mut R>
    where
        R: EncryptionTarget + ?Sized,
    {
        filter_request(self.encrypt, request)
    }

    /// Publishes this session's preference to callers still using the
    /// process-wide [`crate::filter()`].
    pub fn install_global(&self) {
        crate::flag::set_encrypt(self.encrypt);
    }
}
