pub fn assert_str_contains(s1: &str, to_contain: &str) {
    assert!(
        s1.contains(to_contain),
        "String does not contain expected value. \nString: `{s1}`\nDoes not contain: `{to_contain}`"
    );
}

pub fn assert_str_starts_with(s1: &str, to_start_with: &str) {
    assert!(
        s1.starts_with(to_start_with),
        "String does not start with expected value. \nString: `{s1}`\nDoes not start with: `{to_start_with}`"
    );
}
