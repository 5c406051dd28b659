use atfml_core::{AccessChange, AccessTransform, AccessTransformSet, ModifierChange};

/// Parse `source` into a fresh set, panicking on error.
pub fn parse(source: &str) -> AccessTransformSet {
    let mut set = AccessTransformSet::new();
    if let Err(e) = atfml_reader::read_str(source, &mut set) {
        panic!("failed to parse {source:?}: {e}");
    }
    set
}

pub fn t(access: AccessChange, final_change: ModifierChange) -> AccessTransform {
    AccessTransform::new(access, final_change)
}
