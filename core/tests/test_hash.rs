#[cfg(test)]
mod hash_tests {
    use proptest::prelude::*;
    use scs_native_core::{
        boundary::{city64, HostValue, RawBuffer},
        hash::{hash_bytes, hash_text, ByteSequence},
        types::{BoundaryError, Entry},
    };

    #[test]
    fn hello_hashes_to_known_value() {
        let hash = city64(&[HostValue::text("hello")]).unwrap();
        assert_eq!(hash.value(), 0xb48be5a931380ce8);
        assert_eq!(u64::from(hash), hash_text("hello").value());
    }

    #[test]
    fn empty_text_hashes_to_k2() {
        let hash = city64(&[HostValue::text("")]).unwrap();
        assert_eq!(hash.value(), 0x9ae16a3b2f90404f);
    }

    #[test]
    fn scs_resource_path() {
        let hash = city64(&[HostValue::text("def/world/road.sii")]).unwrap();
        assert_eq!(hash.value(), 0x4e0f11d3b277a73e);
        assert_eq!(hash.to_string(), "0x4e0f11d3b277a73e");
    }

    #[test]
    fn high_bit_values_keep_full_precision() {
        // Above 2^53; a lossy float would round this.
        let hash = city64(&[HostValue::text("a")]).unwrap();
        assert_eq!(hash.value(), 0xb3454265b6df75e3);
        assert!(hash.value() > (1u64 << 53));
    }

    #[test]
    fn non_text_is_type_error() {
        let err = city64(&[HostValue::other("int")]).unwrap_err();
        assert!(matches!(err, BoundaryError::Type { entry: Entry::City64, position: 1, .. }));
        assert_eq!(err.to_string(), "city64() argument 1 must be str, not int");
    }

    #[test]
    fn buffer_is_type_error() {
        let bytes = b"hello";
        let err = city64(&[HostValue::Buffer(RawBuffer::from_slice(bytes))]).unwrap_err();
        assert!(err.is_argument_error());
        assert!(err.to_string().ends_with("not read-only buffer"));
    }

    #[test]
    fn bytes_is_type_error_naming_host_type() {
        let bytes = b"hello";
        let err = city64(&[HostValue::Buffer(RawBuffer::from_slice(bytes).named("bytes"))]).unwrap_err();
        assert_eq!(err.to_string(), "city64() argument 1 must be str, not bytes");
    }

    #[test]
    fn lone_surrogate_hashes_as_one_replacement_character() {
        // Host text with an unpaired surrogate, decoded the way the bindings do.
        let text = String::from_utf16_lossy(&[0x61, 0xD800, 0x62]);
        let hash = city64(&[HostValue::text(text)]).unwrap();
        assert_eq!(hash, hash_bytes(ByteSequence::from_text("a\u{FFFD}b")));
        assert_eq!(hash.value(), cityhasher::hash::<u64>([b'a', 0xEF, 0xBF, 0xBD, b'b']));
    }

    #[test]
    fn no_arguments_is_arity_error() {
        let err = city64(&[]).unwrap_err();
        assert_eq!(err.to_string(), "city64() takes exactly 1 argument(s) (0 given)");
    }

    #[test]
    fn two_arguments_is_arity_error() {
        let err = city64(&[HostValue::text("a"), HostValue::text("b")]).unwrap_err();
        assert!(matches!(err, BoundaryError::Arity { expected: 1, given: 2, .. }));
    }

    proptest! {
        #[test]
        fn deterministic_and_matches_raw_bytes(s in ".{0,300}") {
            let first = city64(&[HostValue::text(s.clone())]).unwrap();
            let second = city64(&[HostValue::text(s.as_str())]).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first, hash_bytes(ByteSequence::from_text(&s)));
        }
    }
}
