use super::*;
use pretty_assertions::assert_eq;

fn list() -> ErasedType {
    ErasedType::new("java.util.List")
}

#[test]
fn erased_equality_is_by_name() {
    let a = ErasedType::new("java.util.List");
    let b = ErasedType::new(String::from("java.util.List"));
    assert_eq!(a, b);
    assert_ne!(a, ErasedType::new("java.util.Set"));
}

#[test]
fn erased_clone_is_equal() {
    let a = list();
    assert_eq!(a.clone(), a);
}

#[test]
fn sort_per_variant() {
    let t = TypeDescription::variable("T", vec![]);
    assert_eq!(TypeDescription::from(list()).sort(), TypeSort::NonGeneric);
    assert_eq!(
        TypeDescription::parameterized(list(), vec![t.clone()]).sort(),
        TypeSort::Parameterized
    );
    assert_eq!(t.sort(), TypeSort::Variable);
    assert_eq!(
        TypeDescription::generic_array(t.clone()).sort(),
        TypeSort::GenericArray
    );
    assert_eq!(TypeDescription::wildcard(None).sort(), TypeSort::Wildcard);

    assert!(TypeSort::NonGeneric.is_non_generic());
    assert!(!TypeSort::Parameterized.is_non_generic());
}

#[test]
fn parameterized_erases_to_raw_type() {
    let string = TypeDescription::erased("java.lang.String");
    let generic = TypeDescription::parameterized(list(), vec![string]);
    assert_eq!(generic.as_erasure(), list());
    assert!(generic.represents(&list()));
}

#[test]
fn erased_round_trips_through_generic_view() {
    let generic = list().as_generic_type();
    assert_eq!(generic.sort(), TypeSort::NonGeneric);
    assert_eq!(generic.as_erasure(), list());
}

#[test]
fn variable_erases_to_first_bound() {
    let number = TypeDescription::erased("java.lang.Number");
    let comparable = TypeDescription::parameterized(
        ErasedType::new("java.lang.Comparable"),
        vec![TypeDescription::variable("T", vec![])],
    );
    let t = TypeDescription::variable("T", vec![number, comparable]);
    assert_eq!(t.as_erasure(), ErasedType::new("java.lang.Number"));
}

#[test]
fn unbounded_variable_and_wildcard_erase_to_object() {
    assert_eq!(
        TypeDescription::variable("T", vec![]).as_erasure(),
        ErasedType::object()
    );
    assert_eq!(
        TypeDescription::wildcard(None).as_erasure(),
        ErasedType::object()
    );
}

#[test]
fn generic_array_erases_to_array_of_component_erasure() {
    let element = TypeDescription::parameterized(list(), vec![TypeDescription::wildcard(None)]);
    let array = TypeDescription::generic_array(element);
    let erasure = array.as_erasure();
    assert_eq!(erasure, ErasedType::new("java.util.List[]"));
    assert!(erasure.is_array());
    assert!(!list().is_array());
}

#[test]
fn display_uses_source_notation() {
    let k = TypeDescription::variable("K", vec![]);
    let v = TypeDescription::wildcard(Some(TypeDescription::erased("java.lang.Number")));
    let map = TypeDescription::parameterized(ErasedType::new("java.util.Map"), vec![k, v]);
    assert_eq!(map.to_string(), "java.util.Map<K, ? extends java.lang.Number>");

    let array = TypeDescription::generic_array(TypeDescription::variable("E", vec![]));
    assert_eq!(array.to_string(), "E[]");
    assert_eq!(TypeDescription::wildcard(None).to_string(), "?");
}

#[test]
fn display_inner_class_of_generic_owner() {
    let owner = TypeDescription::parameterized(
        ErasedType::new("com.example.Outer"),
        vec![TypeDescription::variable("A", vec![])],
    );
    let inner = TypeDescription::Parameterized {
        erasure: ErasedType::new("com.example.Outer$Inner"),
        arguments: vec![TypeDescription::variable("B", vec![])],
        owner: Some(Box::new(owner)),
    };
    assert_eq!(inner.to_string(), "com.example.Outer<A>.Inner<B>");
    assert_eq!(inner.as_erasure(), ErasedType::new("com.example.Outer$Inner"));
}

#[test]
fn array_of_appends_dimension() {
    let strings = ErasedType::new("java.lang.String").array_of();
    assert_eq!(strings.name(), "java.lang.String[]");
    assert_eq!(strings.array_of().name(), "java.lang.String[][]");
    assert!(strings.is_array());
}
