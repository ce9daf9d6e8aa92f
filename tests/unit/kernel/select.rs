use super::*;
use crate::foundation::error::ResampleError;

#[test]
fn every_recognized_tag_builds_a_usable_kernel() {
    for tag in ["mitchell", "lanczos", "hamming", "gaussian", "triangle", "box"] {
        let k = select_kernel(tag).unwrap();
        assert_eq!(k.kind().as_str(), tag);
        assert!(k.radius() > 0.0, "{tag}");
        assert!(k.lookup(0.0) >= 0.0, "{tag}");
    }
}

#[test]
fn family_parameters_are_fixed() {
    assert_eq!(
        shape_for(KernelKind::Mitchell),
        KernelShape::Mitchell {
            b: 1.0 / 3.0,
            c: 1.0 / 3.0
        }
    );
    assert_eq!(
        shape_for(KernelKind::Gaussian),
        KernelShape::Gaussian {
            alpha: 2.0,
            radius: 2.0
        }
    );
    assert_eq!(kernel_for(KernelKind::Lanczos).radius(), 3.0);
    assert_eq!(kernel_for(KernelKind::Hamming).radius(), 1.0);
    assert_eq!(kernel_for(KernelKind::Triangle).radius(), 1.0);
    assert_eq!(kernel_for(KernelKind::Box).radius(), 0.5);
}

#[test]
fn unknown_tag_is_invalid_configuration() {
    let err = select_kernel("nonexistent").unwrap_err();
    assert!(matches!(err, ResampleError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("nonexistent"));
}
