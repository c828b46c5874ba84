//! Property tests for ObjectId reordering and string element encoding.

use std::borrow::Cow;

use cbson::{
    decode_element, encode_element, encode_key, shuffle_oid, unshuffle_oid, EncodeError, Text,
    Value,
};
use proptest::prelude::*;

fn non_string_value() -> impl Strategy<Value = Value<'static>> {
    prop_oneof![
        any::<i32>().prop_map(Value::Int32),
        any::<i64>().prop_map(Value::Int64),
        any::<f64>().prop_map(Value::Double),
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(Value::DateTime),
        any::<[u8; 12]>().prop_map(Value::ObjectId),
        Just(Value::Null),
        proptest::collection::vec(any::<u8>(), 0..32)
            .prop_map(|b| Value::Binary { subtype: 0, bytes: Cow::Owned(b) }),
        proptest::collection::vec(any::<u8>(), 0..32).prop_map(|b| Value::Document(Cow::Owned(b))),
        proptest::collection::vec(any::<u8>(), 0..32).prop_map(|b| Value::Array(Cow::Owned(b))),
    ]
}

proptest! {
    #[test]
    fn shuffle_reverses_each_segment(bytes in any::<[u8; 12]>()) {
        let wire = shuffle_oid(&bytes).unwrap();
        prop_assert_eq!(wire.len(), 12);

        let mut head = bytes[..8].to_vec();
        head.reverse();
        let mut tail = bytes[8..].to_vec();
        tail.reverse();
        prop_assert_eq!(&wire[..8], head.as_slice());
        prop_assert_eq!(&wire[8..], tail.as_slice());

        prop_assert_eq!(unshuffle_oid(&wire).unwrap(), bytes);
        prop_assert_eq!(shuffle_oid(&unshuffle_oid(&bytes).unwrap()).unwrap(), bytes);
    }

    #[test]
    fn shuffle_rejects_wrong_length(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(bytes.len() != 12);
        let err = shuffle_oid(&bytes).unwrap_err();
        prop_assert_eq!(err, EncodeError::InvalidLength { field: "oid", expected: 12, actual: bytes.len() });
    }

    #[test]
    fn string_element_roundtrip(name in "\\PC{0,16}", text in any::<String>()) {
        let key = encode_key(&name).unwrap();
        let bytes = encode_element(&key, &Value::from(text.as_str())).unwrap();

        prop_assert_eq!(bytes.len(), 1 + key.len() + 4 + text.len() + 1);
        prop_assert_eq!(bytes[0], 0x02);
        let prefix = &bytes[1 + key.len()..1 + key.len() + 4];
        prop_assert_eq!(prefix, &((text.len() + 1) as i32).to_le_bytes()[..]);
        prop_assert_eq!(*bytes.last().unwrap(), 0);

        let (decoded_name, decoded_value) = decode_element(&bytes).unwrap();
        prop_assert_eq!(decoded_name, name.as_str());
        prop_assert_eq!(decoded_value, Value::from(text.as_str()));
    }

    #[test]
    fn utf16_matches_utf8(text in any::<String>()) {
        let units: Vec<u16> = text.encode_utf16().collect();
        let wide = Value::String(Text::Utf16(Cow::Owned(units)));
        prop_assert_eq!(
            encode_element(b"k", &wide).unwrap(),
            encode_element(b"k", &Value::from(text.as_str())).unwrap()
        );
    }

    #[test]
    fn non_string_kinds_are_unsupported(value in non_string_value()) {
        let err = encode_element(b"x", &value).unwrap_err();
        prop_assert!(err.is_fallback());
        prop_assert_eq!(err, EncodeError::UnsupportedType { element_type: value.element_type() });
    }
}

#[test]
fn test_known_vectors() {
    assert_eq!(
        shuffle_oid(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]).unwrap(),
        [7, 6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8]
    );
    assert_eq!(
        encode_element(b"x", &Value::from("ab")).unwrap(),
        [0x02, b'x', 0x03, 0x00, 0x00, 0x00, b'a', b'b', 0x00]
    );
    assert_eq!(
        encode_element(b"x", &Value::from("")).unwrap(),
        [0x02, b'x', 0x01, 0x00, 0x00, 0x00, 0x00]
    );
    assert!(matches!(
        encode_element(b"x", &Value::from(42i32)),
        Err(EncodeError::UnsupportedType { .. })
    ));
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("value-{i}");
                let bytes = encode_element(b"k\0", &Value::from(text.as_str())).unwrap();
                let (_, value) = decode_element(&bytes).unwrap();
                assert_eq!(value, Value::from(text.as_str()));
                shuffle_oid(&[i as u8; 12]).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), [i as u8; 12]);
    }
}
