use serde::{Deserialize, Serialize};
use std::fmt;

/// Short random id attached to the tracing span of a single jump.
///
/// Displayed as eight hex digits taken from a v4 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JumpId(u32);

impl JumpId {
    pub fn new() -> Self {
        let bytes = uuid::Uuid::new_v4().into_bytes();
        Self(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

impl Default for JumpId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JumpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_eight_hex_digits() {
        let shown = JumpId(0xab).to_string();
        assert_eq!(shown, "000000ab");

        let random = JumpId::new().to_string();
        assert_eq!(random.len(), 8);
        assert!(random.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&JumpId(7)).unwrap(), "7");
    }
}
