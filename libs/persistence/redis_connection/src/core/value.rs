use serde::{Serialize, de::DeserializeOwned};

use crate::cache::CacheError;

/// JSON is the single wire format for cached payloads. Entries are opaque
/// bytes to the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn inner(self) -> T { self.0 }
}

impl<T: Serialize> Json<T> {
    pub fn to_bytes(&self) -> Result<Vec<u8>, CacheError> {
        serde_json::to_vec(&self.0)
            .map_err(|e| CacheError::Serialization(e.to_string()))
    }
}

impl<T: DeserializeOwned> Json<T> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CacheError> {
        serde_json::from_slice(bytes)
            .map(Json)
            .map_err(|e| CacheError::Deserialization(e.to_string()))
    }
}
