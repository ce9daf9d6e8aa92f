use super::*;

fn kernel(kind: KernelKind) -> Kernel {
    crate::kernel::select::kernel_for(kind)
}

#[test]
fn kind_parses_every_documented_tag() {
    for kind in KernelKind::ALL {
        assert_eq!(kind.as_str().parse::<KernelKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn kind_rejects_unknown_and_miscased_tags() {
    for tag in ["nonexistent", "Mitchell", "", " box"] {
        let err = tag.parse::<KernelKind>().unwrap_err();
        assert!(matches!(err, ResampleError::InvalidConfiguration(_)));
    }
}

#[test]
fn kind_serializes_as_lowercase_tag() {
    let s = serde_json::to_string(&KernelKind::Gaussian).unwrap();
    assert_eq!(s, "\"gaussian\"");
    let k: KernelKind = serde_json::from_str("\"lanczos\"").unwrap();
    assert_eq!(k, KernelKind::Lanczos);
}

#[test]
fn lookup_is_zero_outside_support() {
    for kind in KernelKind::ALL {
        let k = kernel(kind);
        let r = k.radius();
        assert_eq!(k.lookup(r + 1e-6), 0.0, "{kind}");
        assert_eq!(k.lookup(-(r + 0.25)), 0.0, "{kind}");
        assert_eq!(k.lookup(100.0), 0.0, "{kind}");
    }
}

#[test]
fn lookup_is_symmetric() {
    for kind in KernelKind::ALL {
        let k = kernel(kind);
        for d in [0.1, 0.37, 0.49, 0.9, 1.3, 2.7] {
            assert_eq!(k.lookup(d), k.lookup(-d), "{kind} at {d}");
        }
    }
}

#[test]
fn lookup_tracks_exact_shape_within_bucket_error() {
    for kind in KernelKind::ALL {
        let k = kernel(kind);
        let bucket = k.radius() / KERNEL_TABLE_SIZE as f64;
        let centre = 10.5 * bucket;
        assert!(
            (k.lookup(centre) - k.shape().evaluate(centre)).abs() < 1e-12,
            "{kind}"
        );
    }
}

#[test]
fn box_is_inclusive_at_its_radius() {
    let k = kernel(KernelKind::Box);
    assert_eq!(k.radius(), 0.5);
    assert_eq!(k.lookup(0.5), 1.0);
    assert_eq!(k.lookup(-0.5), 1.0);
    assert_eq!(k.lookup(0.0), 1.0);
    assert_eq!(k.lookup(0.5001), 0.0);
}

#[test]
fn triangle_falls_off_linearly() {
    let shape = KernelShape::Triangle { radius: 1.0 };
    assert_eq!(shape.evaluate(0.0), 1.0);
    assert!((shape.evaluate(0.25) - 0.75).abs() < 1e-12);
    assert_eq!(shape.evaluate(1.0), 0.0);
    assert_eq!(shape.evaluate(-1.5), 0.0);
}

#[test]
fn mitchell_third_third_matches_known_values() {
    let shape = KernelShape::Mitchell {
        b: 1.0 / 3.0,
        c: 1.0 / 3.0,
    };
    assert!((shape.evaluate(0.0) - 8.0 / 9.0).abs() < 1e-12);
    assert!((shape.evaluate(1.0) - 1.0 / 18.0).abs() < 1e-12);
    assert!(shape.evaluate(2.0).abs() < 1e-12);
    assert!(shape.evaluate(1.5) < 0.0);
}

#[test]
fn sinc_windows_are_one_at_centre_and_zero_at_edge() {
    for shape in [
        KernelShape::Lanczos { radius: 3.0 },
        KernelShape::Hamming { radius: 1.0 },
    ] {
        assert_eq!(shape.evaluate(0.0), 1.0);
        assert_eq!(shape.evaluate(shape.radius()), 0.0);
    }
}

#[test]
fn gaussian_reaches_zero_at_radius() {
    let shape = KernelShape::Gaussian {
        alpha: 2.0,
        radius: 2.0,
    };
    assert!(shape.evaluate(0.0) > 0.99);
    assert_eq!(shape.evaluate(2.0), 0.0);
    assert_eq!(shape.evaluate(3.0), 0.0);
}
