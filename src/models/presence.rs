use serde::{Deserialize, Deserializer};

/// An optional body field that remembers whether it was omitted or sent as `null`.
///
/// Pair with `#[serde(default)]` so a missing key becomes [`Presence::Absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<T> {
    Absent,
    Null,
    Present(T),
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::Absent
    }
}

impl<T> Presence<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }

    /// Collapses absent and null into `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Presence::Present(v) => Some(v),
            Presence::Absent | Presence::Null => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Presence<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Presence::Present(v),
            None => Presence::Null,
        })
    }
}
