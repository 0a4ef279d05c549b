//! GetPropertyName and lazy name materialization

use jsref::{Context, Identifier, PropertyKey, Reference, Value};

use super::host::{TestObject, handle};

#[test]
fn test_index_name_matches_identifier_name() {
    let mut cx = Context::new();
    let obj = TestObject::new();

    for i in [0u32, 1, 9, 10, 255, 65536, u32::MAX] {
        let by_index = Reference::indexed(handle(&obj), i);
        let by_name = Reference::new(handle(&obj), Identifier::from(i.to_string()));
        assert_eq!(
            by_index.property_name(&mut cx),
            by_name.property_name(&mut cx)
        );
    }
}

#[test]
fn test_materialization_is_memoized() {
    let mut cx = super::bare_context();
    let obj = TestObject::new();
    let r = Reference::indexed(handle(&obj), 12);

    let first = r.property_name(&mut cx).unwrap();
    let second = r.property_name(&mut cx).unwrap();
    assert!(Identifier::ptr_eq(&first, &second));
    assert_eq!(cx.identifier_table().len(), 1);
}

#[test]
fn test_materialization_keeps_index_path() {
    let mut cx = Context::new();
    let arr = TestObject::array([Value::from("a")]);
    let r = Reference::indexed(handle(&arr), 0);

    assert_eq!(r.property_name(&mut cx).unwrap(), "0");
    assert_eq!(r.key(), Some(&PropertyKey::Index(0)));

    assert_eq!(r.get_value(&mut cx).unwrap(), Value::from("a"));
    r.put_value(&mut cx, Value::from("b")).unwrap();
    assert_eq!(arr.index_reads(), 1);
    assert_eq!(arr.name_reads(), 0);
    assert_eq!(arr.own_value(0u32), Some(Value::from("b")));
}

#[test]
fn test_named_reference_returns_stored_identifier() {
    let mut cx = super::bare_context();
    let obj = TestObject::new();
    let name = Identifier::from("title");
    let r = Reference::new(handle(&obj), name.clone());

    let got = r.property_name(&mut cx).unwrap();
    assert!(Identifier::ptr_eq(&got, &name));
    assert_eq!(cx.identifier_table().len(), 0);
}

#[test]
fn test_value_reference_has_no_name() {
    let mut cx = Context::new();
    assert!(
        Reference::value(Value::from(1))
            .property_name(&mut cx)
            .is_none()
    );
}

#[test]
fn test_display_for_diagnostics() {
    let arr = TestObject::array(Vec::new());
    assert_eq!(Reference::indexed(handle(&arr), 4).to_string(), "Array[4]");

    let obj = TestObject::new();
    assert_eq!(
        Reference::new(handle(&obj), Identifier::from("k")).to_string(),
        "Object.k"
    );
}
