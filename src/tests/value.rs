use crate::{Array, Error, Object, Value};

#[test]
fn constructors_set_variant() {
    assert!(Value::null().is_null());
    assert_eq!(Value::boolean(true).as_bool(), Some(true));
    assert_eq!(Value::number(2.5).as_number(), Some(2.5));
    assert_eq!(Value::string("hi").as_bytes(), Some(&b"hi"[..]));
    assert_eq!(Value::array().as_array().map(Array::len), Some(0));
    assert_eq!(Value::object().as_object().map(Object::len), Some(0));
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn string_copies_input() {
    let mut source = b"abc".to_vec();
    let value = Value::string(&source);
    source[0] = b'z';
    assert_eq!(value.as_bytes(), Some(&b"abc"[..]));
}

#[test]
fn string_length_is_authoritative() {
    let value = Value::string([b'a', 0, b'b']);
    assert_eq!(value.as_bytes().map(<[u8]>::len), Some(3));
}

#[test]
fn make_replaces_previous_payload() {
    let mut value = Value::array();
    value.as_array_mut().unwrap().push(Value::string("child"));

    value.make_string("now a string");
    assert_eq!(value.as_bytes(), Some(&b"now a string"[..]));

    value.make_number(3.0).make_boolean(false);
    assert_eq!(value.as_bool(), Some(false));

    value.make_object();
    assert!(value.as_object().unwrap().is_empty());

    value.make_array();
    assert!(value.as_array().unwrap().is_empty());

    value.make_null();
    assert!(value.is_null());
}

#[test]
fn destroy_resets_to_null() {
    let mut value = Value::object();
    let object = value.as_object_mut().unwrap();
    let _ = object.put("k", Value::from(vec![Value::null(), Value::from("s")]));

    value.destroy();
    assert!(value.is_null());

    value.make_number(1.0);
    assert_eq!(value.as_number(), Some(1.0));
}

#[test]
fn type_names() {
    let names: Vec<&str> = [
        Value::null(),
        Value::boolean(true),
        Value::number(0.0),
        Value::string(""),
        Value::array(),
        Value::object(),
    ]
    .iter()
    .map(Value::type_name)
    .collect();
    assert_eq!(names, ["null", "boolean", "number", "string", "array", "object"]);
}

#[test]
fn array_push_get_pop() {
    let mut value = Value::array();
    let array = value.as_array_mut().unwrap();
    array.push(Value::number(1.0));
    array.push(Value::boolean(true));
    array.push(Value::null());

    assert_eq!(value.array_get(0), Some(&Value::number(1.0)));
    assert_eq!(value.array_get(2), Some(&Value::Null));
    assert_eq!(value.array_get(3), None);

    let array = value.as_array_mut().unwrap();
    assert_eq!(array.pop(), Some(Value::Null));
    assert_eq!(array.pop(), Some(Value::boolean(true)));
    assert_eq!(array.pop(), Some(Value::number(1.0)));
    assert_eq!(array.pop(), None);
    assert!(array.is_empty());
}

#[test]
fn array_get_mut_and_iter() {
    let mut array: Array = (0..3).map(|i| Value::number(f64::from(i))).collect();
    array.get_mut(1).unwrap().make_string("one");

    let names: Vec<&str> = array.iter().map(Value::type_name).collect();
    assert_eq!(names, ["number", "string", "number"]);
    assert_eq!(array.as_slice().len(), 3);
}

#[test]
fn accessors_on_wrong_variant() {
    let mut value = Value::number(1.0);
    assert_eq!(value.array_get(0), None);
    assert_eq!(value.object_get("k"), None);
    assert!(value.as_bytes().is_none());
    assert!(value.as_array_mut().is_none());
    assert!(value.as_object_mut().is_none());
}

#[test]
fn try_accessors_report_type() {
    let mut value = Value::string("x");
    assert_eq!(
        value.try_array_mut().unwrap_err(),
        Error::UnexpectedType {
            expected: "array",
            found: "string",
        }
    );
    let err = value.try_object_mut().unwrap_err();
    assert_eq!(err.to_string(), "expected object, found string");

    value.make_object();
    assert!(value.try_object_mut().is_ok());
}

#[test]
fn conversions() {
    assert_eq!(Value::from(true), Value::boolean(true));
    assert_eq!(Value::from(4.0), Value::number(4.0));
    assert_eq!(Value::from("s"), Value::string("s"));
    assert_eq!(Value::from(String::from("s")), Value::string("s"));
    assert_eq!(Value::from(Array::new()), Value::array());
    assert_eq!(Value::from(Object::new()), Value::object());
}

#[test]
fn nested_tree_lookup() {
    let mut root = Value::object();
    let mut inner = Value::object();
    let _ = inner
        .as_object_mut()
        .unwrap()
        .put("leaf", Value::from(vec![Value::from(1.0), Value::from(2.0)]));
    let _ = root.as_object_mut().unwrap().put("inner", inner);

    let leaf = root.object_get("inner").and_then(|v| v.object_get("leaf"));
    assert_eq!(leaf.and_then(|v| v.array_get(1)), Some(&Value::number(2.0)));
}
