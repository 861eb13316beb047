use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WarpError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(WarpError::load("x").to_string().contains("load error:"));
    assert!(
        WarpError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WarpError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
