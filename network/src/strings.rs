use hashbrown::HashMap;

use util::Hasher;

use crate::NameId;

/// Stores the interned display names used by a network.
/// Many modules share few distinct type names, so each unique
/// string is stored once and referred to by `NameId`.
#[derive(Debug)]
pub struct NetworkStrings {
    lookup: HashMap<Box<str>, NameId, Hasher>,
    names: Vec<Box<str>>,
}

impl Default for NetworkStrings {
    fn default() -> Self {
        Self {
            lookup: HashMap::with_capacity_and_hasher(16, Hasher::default()),
            names: Vec::with_capacity(16),
        }
    }
}

impl NetworkStrings {
    /// Intern `name` and return a key that can be used to retrieve it later.
    pub fn intern(&mut self, name: &str) -> NameId {
        if let Some(id) = self.lookup.get(name) {
            return *id;
        }
        let id = NameId::from(self.names.len());
        self.names.push(name.into());
        self.lookup.insert(name.into(), id);
        id
    }

    /// Get the string associated with `id`.
    #[inline]
    pub fn get(&self, id: NameId) -> &str {
        &self.names[usize::from(id)]
    }

    /// Total number of distinct names interned.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if len is 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_intern_dedupes() {
        let mut strings = NetworkStrings::default();
        let a = strings.intern("ReadField");
        let b = strings.intern("ShowField");
        let a2 = strings.intern("ReadField");
        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(strings.len(), 2);
        assert_eq!(strings.get(a), "ReadField");
        assert_eq!(strings.get(b), "ShowField");
    }
}
