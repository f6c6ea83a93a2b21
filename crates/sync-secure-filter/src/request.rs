use serde::{Deserialize, Serialize};

/// A message whose transport reads a "do encryption" attribute before sending.
///
/// Request types owned by the proxy layer implement this so the filter can
/// stamp them without knowing anything else about their shape.
pub trait EncryptionTarget {
    fn set_do_encryption(&mut self, encrypt: bool);

    fn do_encryption(&self) -> bool;
}

impl<T: EncryptionTarget + ?Sized> EncryptionTarget for Box<T> {
    fn set_do_encryption(&mut self, encrypt: bool) {
        (**self).set_do_encryption(encrypt);
    }

    fn do_encryption(&self) -> bool {
        (**self).do_encryption()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub function_name: String,
    pub correlation_id: u32,
    #[serde(default)]
    pub parameters: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub do_encryption: bool,
}

impl RpcRequest {
    pub fn new(function_name: impl Into<String>, correlation_id: u32) -> Self {
        Self {
            function_name: function_name.into(),
            correlation_id,
            parameters: serde_json::Map::new(),
            do_encryption: false,
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }
}

impl EncryptionTarget for RpcRequest {
    fn set_do_encryption(&mut self, encrypt: bool) {
        self.do_encryption = encrypt;
    }

    fn do_encryption(&self) -> bool {
        self.do_encryption
    }
}
