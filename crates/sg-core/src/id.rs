//! Object identity.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

static NAMES: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Identity of a scene object on the host canvas.
///
/// Interned, so it is `Copy` and compares in O(1). The snap detector uses it
/// to tell the active object apart from the candidates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(Spur);

impl ObjectId {
    /// The id for `name`, interning it on first use.
    pub fn intern(name: &str) -> Self {
        Self(NAMES.get_or_intern(name))
    }

    /// The id for `name` if any object was ever given that name. Lookups of
    /// host-supplied names go through here so unknown names are not retained.
    pub fn lookup(name: &str) -> Option<Self> {
        NAMES.get(name).map(Self)
    }

    pub fn as_str(&self) -> &str {
        NAMES.resolve(&self.0)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectId").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = Cow::<'de, str>::deserialize(deserializer)?;
        Ok(Self::intern(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_id() {
        let a = ObjectId::intern("card");
        assert_eq!(a, ObjectId::intern("card"));
        assert_eq!(a.as_str(), "card");
        assert_eq!(format!("{a} {a:?}"), "card ObjectId(\"card\")");
    }

    #[test]
    fn lookup_does_not_intern() {
        assert_eq!(ObjectId::lookup("id_never_added"), None);
        assert_eq!(ObjectId::lookup("id_never_added"), None);
        let known = ObjectId::intern("id_known");
        assert_eq!(ObjectId::lookup("id_known"), Some(known));
    }

    #[test]
    fn serializes_as_its_name() {
        let id = ObjectId::intern("id_json");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"id_json\"");
        assert_eq!(serde_json::from_str::<ObjectId>(&json).unwrap(), id);
    }
}
