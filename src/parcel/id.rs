use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// Stable key for a parcel within a loaded dataset.
/// Keeps the original `ParcelID` text (leading zeros included) without repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParcelId(Arc<str>);

impl ParcelId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ParcelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParcelId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl From<String> for ParcelId {
    fn from(id: String) -> Self { Self(Arc::from(id)) }
}
