//! Per-class aggregation of transforms.

use std::collections::HashMap;

use crate::access::AccessTransform;
use crate::signature::MethodSignature;

/// Every transform requested for one class: the class itself, its fields
/// by name and its methods by signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassEntry {
    class_transform: AccessTransform,
    fields: HashMap<String, AccessTransform>,
    methods: HashMap<MethodSignature, AccessTransform>,
}

impl ClassEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform applied to the class declaration.
    pub fn class_transform(&self) -> AccessTransform {
        self.class_transform
    }

    pub fn field(&self, name: &str) -> Option<AccessTransform> {
        self.fields.get(name).copied()
    }

    pub fn method(&self, signature: &MethodSignature) -> Option<AccessTransform> {
        self.methods.get(signature).copied()
    }

    /// Field transforms, in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, AccessTransform)> + '_ {
        self.fields.iter().map(|(name, t)| (name.as_str(), *t))
    }

    /// Method transforms, in no particular order.
    pub fn methods(&self) -> impl Iterator<Item = (&MethodSignature, AccessTransform)> + '_ {
        self.methods.iter().map(|(sig, t)| (sig, *t))
    }

    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn num_methods(&self) -> usize {
        self.methods.len()
    }

    /// True if nothing is requested for the class or any member.
    pub fn is_empty(&self) -> bool {
        self.class_transform.is_empty() && self.fields.is_empty() && self.methods.is_empty()
    }

    pub fn merge_class(&mut self, transform: AccessTransform) {
        self.class_transform = self.class_transform.merge(transform);
    }

    pub fn merge_field(&mut self, name: impl Into<String>, transform: AccessTransform) {
        let slot = self.fields.entry(name.into()).or_default();
        *slot = slot.merge(transform);
    }

    pub fn merge_method(&mut self, signature: MethodSignature, transform: AccessTransform) {
        let slot = self.methods.entry(signature).or_default();
        *slot = slot.merge(transform);
    }

    /// Merge `transform` into every field known right now.
    ///
    /// Fields merged later are not affected, and no entry is created when
    /// the class has no fields yet.
    pub fn merge_all_fields(&mut self, transform: AccessTransform) {
        for slot in self.fields.values_mut() {
            *slot = slot.merge(transform);
        }
    }

    /// Merge `transform` into every method known right now. Same snapshot
    /// rule as [`merge_all_fields`](Self::merge_all_fields).
    pub fn merge_all_methods(&mut self, transform: AccessTransform) {
        for slot in self.methods.values_mut() {
            *slot = slot.merge(transform);
        }
    }

    /// Merge every request of `other` into this entry, key by key.
    pub fn merge_entry(&mut self, other: &ClassEntry) {
        self.merge_class(other.class_transform);
        for (name, t) in &other.fields {
            self.merge_field(name.as_str(), *t);
        }
        for (sig, t) in &other.methods {
            self.merge_method(sig.clone(), *t);
        }
    }

    /// Drop member entries that request nothing.
    pub fn clean(&mut self) {
        self.fields.retain(|_, t| !t.is_empty());
        self.methods.retain(|_, t| !t.is_empty());
    }
}
