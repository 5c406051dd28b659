//! Top-level collection of class entries.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::class::ClassEntry;

/// All requested transforms, keyed by fully qualified class name.
///
/// Class names are opaque: whatever spelling the input uses (`a.b.C` or
/// `a/b/C`) is the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessTransformSet {
    classes: HashMap<String, ClassEntry>,
}

impl AccessTransformSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the entry for `name`, installing an empty one first if the
    /// class has not been seen yet.
    pub fn get_or_create_class(&mut self, name: &str) -> &mut ClassEntry {
        self.classes.entry(name.to_owned()).or_default()
    }

    pub fn class(&self, name: &str) -> Option<&ClassEntry> {
        self.classes.get(name)
    }

    pub fn class_mut(&mut self, name: &str) -> Option<&mut ClassEntry> {
        self.classes.get_mut(name)
    }

    pub fn remove_class(&mut self, name: &str) -> Option<ClassEntry> {
        self.classes.remove(name)
    }

    /// Classes in no particular order.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &ClassEntry)> + '_ {
        self.classes.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Merge every class of `other` into this set.
    pub fn merge(&mut self, other: &AccessTransformSet) {
        for (name, entry) in &other.classes {
            match self.classes.entry(name.clone()) {
                Entry::Occupied(mut slot) => slot.get_mut().merge_entry(entry),
                Entry::Vacant(slot) => {
                    slot.insert(entry.clone());
                }
            }
        }
    }

    /// Drop identity member entries, then classes left with nothing to do.
    pub fn clean(&mut self) {
        self.classes.retain(|_, entry| {
            entry.clean();
            !entry.is_empty()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{AccessChange, AccessTransform, ModifierChange};

    #[test]
    fn get_or_create_is_stable() {
        let mut set = AccessTransformSet::new();
        set.get_or_create_class("a.B")
            .merge_class(AccessTransform::visibility(AccessChange::Public));
        set.get_or_create_class("a.B");
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.class("a.B").map(ClassEntry::class_transform),
            Some(AccessTransform::visibility(AccessChange::Public))
        );
    }

    #[test]
    fn merge_sets() {
        let remove_final = AccessTransform::new(AccessChange::None, ModifierChange::Remove);
        let public = AccessTransform::visibility(AccessChange::Public);

        let mut left = AccessTransformSet::new();
        left.get_or_create_class("A").merge_field("x", public);
        let mut right = AccessTransformSet::new();
        right.get_or_create_class("A").merge_field("x", remove_final);
        right.get_or_create_class("B").merge_class(public);

        left.merge(&right);
        assert_eq!(left.len(), 2);
        assert_eq!(
            left.class("A").and_then(|c| c.field("x")),
            Some(public.merge(remove_final))
        );
        assert_eq!(left.class("B"), right.class("B"));
    }

    #[test]
    fn clean_drops_empty_classes() {
        let mut set = AccessTransformSet::new();
        set.get_or_create_class("Empty");
        set.get_or_create_class("Kept")
            .merge_class(AccessTransform::visibility(AccessChange::Protected));
        set.clean();
        assert!(set.class("Empty").is_none());
        assert!(set.class("Kept").is_some());
    }
}
