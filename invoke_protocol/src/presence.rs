use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A record field that tells a missing key apart from an explicit `null`.
///
/// Use with `#[serde(default)]` so a missing key decodes as `Absent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Presence<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }

    pub fn value(self) -> Option<T> {
        match self {
            Presence::Value(v) => Some(v),
            Presence::Absent | Presence::Null => None,
        }
    }
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::Absent
    }
}

impl<T> From<Option<T>> for Presence<T> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Presence::Null, Presence::Value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Presence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Presence::from)
    }
}

impl<T: Serialize> Serialize for Presence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Presence::Value(v) => serializer.serialize_some(v),
            Presence::Absent | Presence::Null => serializer.serialize_none(),
        }
    }
}
