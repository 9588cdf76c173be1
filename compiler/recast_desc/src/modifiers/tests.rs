use super::*;

#[test]
fn modifiers_size() {
    assert_eq!(std::mem::size_of::<Modifiers>(), 2);
}

#[test]
fn from_access_truncates_unknown_bits() {
    // 0x0200 is ACC_INTERFACE, which is a class flag, not a method flag
    let mods = Modifiers::from_access(0x0200 | 0x0010 | 0x0001);
    assert_eq!(mods, Modifiers::FINAL | Modifiers::PUBLIC);
}

#[test]
fn predicates_read_their_bit() {
    let mods = Modifiers::FINAL | Modifiers::STATIC;
    assert!(mods.is_final());
    assert!(mods.is_static());
    assert!(!mods.is_private());
    assert!(!mods.is_abstract());

    assert!(Modifiers::SYNTHETIC.is_synthetic());
    assert!(Modifiers::BRIDGE.is_bridge());
    assert!(!Modifiers::empty().is_final());
}

#[test]
fn visibility_prefers_most_restrictive() {
    assert_eq!(Modifiers::PUBLIC.visibility(), Visibility::Public);
    assert_eq!(Modifiers::PROTECTED.visibility(), Visibility::Protected);
    assert_eq!(Modifiers::PRIVATE.visibility(), Visibility::Private);
    assert_eq!(Modifiers::empty().visibility(), Visibility::Package);
    // Malformed, but must still resolve deterministically
    assert_eq!(
        (Modifiers::PUBLIC | Modifiers::PRIVATE).visibility(),
        Visibility::Private
    );
}

#[test]
fn keywords_map_to_flags() {
    assert_eq!(Modifiers::from_keyword("final"), Some(Modifiers::FINAL));
    assert_eq!(Modifiers::from_keyword("strictfp"), Some(Modifiers::STRICT));
    assert_eq!(
        Modifiers::from_keyword("synthetic"),
        Some(Modifiers::SYNTHETIC)
    );
    assert_eq!(Modifiers::from_keyword("FINAL"), None);
    assert_eq!(Modifiers::from_keyword("transient"), None);
}
