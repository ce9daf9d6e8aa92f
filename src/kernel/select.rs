use crate::foundation::error::ResampleResult;
use crate::kernel::shape::{Kernel, KernelKind, KernelShape};

const MITCHELL_B: f64 = 1.0 / 3.0;
const MITCHELL_C: f64 = 1.0 / 3.0;
const GAUSSIAN_ALPHA: f64 = 2.0;

/// Parameters each family is instantiated with.
pub fn shape_for(kind: KernelKind) -> KernelShape {
    match kind {
        KernelKind::Mitchell => KernelShape::Mitchell {
            b: MITCHELL_B,
            c: MITCHELL_C,
        },
        KernelKind::Lanczos => KernelShape::Lanczos { radius: 3.0 },
        KernelKind::Hamming => KernelShape::Hamming { radius: 1.0 },
        KernelKind::Gaussian => KernelShape::Gaussian {
            alpha: GAUSSIAN_ALPHA,
            radius: 2.0,
        },
        KernelKind::Triangle => KernelShape::Triangle { radius: 1.0 },
        KernelKind::Box => KernelShape::Box { radius: 0.5 },
    }
}

/// Build the kernel for an already-parsed family.
pub fn kernel_for(kind: KernelKind) -> Kernel {
    Kernel::new(kind, shape_for(kind))
}

/// Build the kernel named by `tag`.
///
/// Unknown tags fail with [`crate::ResampleError::InvalidConfiguration`] before
/// anything is allocated.
pub fn select_kernel(tag: &str) -> ResampleResult<Kernel> {
    let kind = tag.parse::<KernelKind>()?;
    Ok(kernel_for(kind))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/select.rs"]
mod tests;
