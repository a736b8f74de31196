//! Build-time strategy selection.
//!
//! The build script tries its rules in order: a valid `TINYDSP_BACKEND`,
//! then the `force-scalar` feature, then the target. An unrecognised
//! `TINYDSP_BACKEND` value must not shadow the rules after it.

use tinydsp::simd::traits::Kernel;
use tinydsp::simd::{Backend, SelectedKernel};

fn env_override() -> Option<Backend> {
    let value = option_env!("TINYDSP_BACKEND")?;

    if value.eq_ignore_ascii_case("scalar") {
        Some(Backend::Scalar)
    } else if value.eq_ignore_ascii_case("packed") {
        Some(Backend::Packed)
    } else {
        None
    }
}

#[test]
fn test_selected_backend_follows_rule_order() {
    let expected = match env_override() {
        Some(backend) => backend,
        None if cfg!(feature = "force-scalar") => Backend::Scalar,
        None => return check_target_rule(),
    };

    assert_eq!(Backend::selected(), expected);
    assert_eq!(SelectedKernel::BACKEND, expected);
}

fn check_target_rule() {
    // neither host architecture is on the scalar-only target list
    if cfg!(any(target_arch = "x86_64", target_arch = "aarch64")) {
        assert_eq!(Backend::selected(), Backend::Packed);
    }
    assert_eq!(SelectedKernel::BACKEND, Backend::selected());
}

#[cfg(feature = "force-scalar")]
#[test]
fn test_force_scalar_survives_unknown_env_value() {
    if env_override().is_none() {
        assert_eq!(Backend::selected(), Backend::Scalar);
        assert_eq!(SelectedKernel::BACKEND, Backend::Scalar);
    }
}
