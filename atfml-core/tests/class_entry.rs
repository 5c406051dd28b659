use atfml_core::{
    AccessChange, AccessFlags, AccessTransform, AccessTransformSet, MethodSignature,
    ModifierChange,
};

fn t(access: AccessChange, final_change: ModifierChange) -> AccessTransform {
    AccessTransform::new(access, final_change)
}

#[test]
fn field_merges_accumulate() {
    let mut set = AccessTransformSet::new();
    let class = set.get_or_create_class("net.ex.Foo");
    class.merge_field("bar", t(AccessChange::Protected, ModifierChange::Add));
    class.merge_field("bar", t(AccessChange::Private, ModifierChange::Remove));

    let class = set.class("net.ex.Foo").unwrap();
    assert_eq!(
        class.field("bar"),
        Some(t(AccessChange::Protected, ModifierChange::Remove))
    );
    assert!(class.class_transform().is_empty());
    assert_eq!(class.num_methods(), 0);
}

#[test]
fn methods_keyed_by_descriptor() {
    let mut set = AccessTransformSet::new();
    let class = set.get_or_create_class("net.ex.Foo");
    class.merge_method(
        MethodSignature::of("doit", "(I)V"),
        AccessTransform::visibility(AccessChange::Public),
    );
    class.merge_method(
        MethodSignature::of("doit", "(J)V"),
        AccessTransform::visibility(AccessChange::Protected),
    );

    let class = set.class("net.ex.Foo").unwrap();
    assert_eq!(class.num_methods(), 2);
    assert_eq!(
        class.method(&MethodSignature::of("doit", "(J)V")),
        Some(AccessTransform::visibility(AccessChange::Protected))
    );
    assert_eq!(class.method(&MethodSignature::of("doit", "()V")), None);
}

#[test]
fn merge_entry_and_apply() {
    let mut a = AccessTransformSet::new();
    a.get_or_create_class("C").merge_method(
        MethodSignature::of("m", "()V"),
        AccessTransform::visibility(AccessChange::Protected),
    );
    let mut b = AccessTransformSet::new();
    b.get_or_create_class("C").merge_method(
        MethodSignature::of("m", "()V"),
        t(AccessChange::None, ModifierChange::Remove),
    );

    let mut ab = a.clone();
    ab.merge(&b);
    let mut ba = b.clone();
    ba.merge(&a);
    assert_eq!(ab, ba);

    let merged = ab
        .class("C")
        .and_then(|c| c.method(&MethodSignature::of("m", "()V")))
        .unwrap();
    let flags = AccessFlags::PRIVATE | AccessFlags::FINAL | AccessFlags::STATIC;
    assert_eq!(
        merged.apply(flags),
        AccessFlags::PROTECTED | AccessFlags::STATIC
    );
}

#[test]
fn remove_class() {
    let mut set = AccessTransformSet::new();
    set.get_or_create_class("Gone");
    assert!(set.remove_class("Gone").is_some());
    assert!(set.is_empty());
    assert!(set.remove_class("Gone").is_none());
}
