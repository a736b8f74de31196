//! Kernel strategies and the build-time choice between them.
//!
//! Both strategies are always compiled so they can be checked against each
//! other on any host. `build.rs` emits `cfg(tinydsp_packed)` or
//! `cfg(tinydsp_scalar)`, which only decides what [`SelectedKernel`] points at.

use core::fmt;

pub mod packed;
pub mod scalar;
#[cfg(feature = "std")]
pub mod slice;
pub mod traits;

/// The strategy the crate-level entry points are compiled against.
#[cfg(tinydsp_packed)]
pub type SelectedKernel = packed::PackedKernel<packed::NativeOrder>;

/// The strategy the crate-level entry points are compiled against.
#[cfg(not(tinydsp_packed))]
pub type SelectedKernel = scalar::ScalarKernel;

/// Execution strategy of a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Four elements per iteration, scalar tail.
    Packed,
    /// One element per iteration.
    Scalar,
}

impl Backend {
    /// Strategy picked by the build script for this target.
    pub const fn selected() -> Self {
        if cfg!(tinydsp_packed) {
            Backend::Packed
        } else {
            Backend::Scalar
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Backend::Packed => "packed",
            Backend::Scalar => "scalar",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which byte of a multi-byte word is most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Byte order of the compilation target.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::traits::Kernel;

    #[test]
    fn test_selected_backend_matches_selected_kernel() {
        assert_eq!(Backend::selected(), SelectedKernel::BACKEND);
    }

    #[test]
    fn test_native_byte_order() {
        let expected = if u16::from_ne_bytes([1, 0]) == 1 {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        };
        assert_eq!(ByteOrder::native(), expected);
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(Backend::Packed.name(), "packed");
        assert_eq!(Backend::Scalar.name(), "scalar");
    }
}
