use atfml_core::{AccessChange, AccessTransform, ModifierChange};

/// Every distinct transform, identity included.
pub fn all_transforms() -> Vec<AccessTransform> {
    AccessChange::ALL
        .iter()
        .flat_map(|&access| {
            ModifierChange::ALL
                .iter()
                .map(move |&final_change| AccessTransform::new(access, final_change))
        })
        .collect()
}
