use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ResampleError::invalid_configuration("x")
            .to_string()
            .contains("invalid configuration:")
    );
    assert!(
        ResampleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ResampleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ResampleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
