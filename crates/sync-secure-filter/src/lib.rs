//! Marks outgoing proxy RPC requests for encryption.
//!
//! The transport encrypts any request whose `do_encryption` attribute is set.
//! This crate decides that attribute from a single boolean preference, either
//! carried explicitly ([`SecureSession`], [`apply_encryption`]) or held in a
//! process-wide atomic flag ([`set_encrypt`], [`is_encrypt`], [`filter()`]).

mod config;
mod error;
mod filter;
mod flag;
mod logging;
mod request;
mod session;

pub use config::{FilterConfig, ENCRYPT_ENV};
pub use error::{FilterError, Result};
pub use filter::{apply_encryption, filter_all, filter_request};
pub use flag::{filter, global, is_encrypt, set_encrypt, EncryptionFlag};
pub use logging::init_logging;
pub use request::{EncryptionTarget, RpcRequest};
pub use session::SecureSession;
