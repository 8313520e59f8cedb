use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_VIOLATIONS, 1);
    assert_eq!(EXIT_RUNTIME_ERROR, 2);
}
