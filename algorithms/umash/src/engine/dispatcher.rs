//! Hardware dispatcher.
//!
//! Selects the fastest CLMUL backend available on the current CPU.

use crate::kernels;
use crate::types::KernelFn;

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the best kernel for this CPU.
#[must_use]
#[allow(unreachable_code)]
pub(crate) fn get_best_kernel() -> KernelFn {
    // 1. Runtime dispatch (std only).
    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("sse2") && is_x86_feature_detected!("pclmulqdq") {
            return safe_pclmul_wrapper;
        }
    }

    // 2. Compile-time dispatch (no_std).
    #[cfg(all(
        not(feature = "std"),
        target_arch = "x86_64",
        target_feature = "sse2",
        target_feature = "pclmulqdq"
    ))]
    return safe_pclmul_wrapper;

    // 3. Portable fallback.
    kernels::portable::oneshot
}

/// Returns the name of the active backend.
#[must_use]
#[allow(unreachable_code)]
pub fn get_active_backend_name() -> &'static str {
    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("sse2") && is_x86_feature_detected!("pclmulqdq") {
            return "PCLMULQDQ";
        }
    }

    #[cfg(all(
        not(feature = "std"),
        target_arch = "x86_64",
        target_feature = "sse2",
        target_feature = "pclmulqdq"
    ))]
    return "PCLMULQDQ";

    "Portable"
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// PCLMULQDQ wrapper: only handed out once the CPU is validated.
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
#[allow(dead_code)]
fn safe_pclmul_wrapper(params: &crate::params::Params, seed: u64, which: usize, data: &[u8]) -> u64 {
    // SAFETY: only reachable after CPUID validation (SSE2 + PCLMULQDQ), or
    // under an equivalent compile-time `target_feature` guarantee.
    unsafe { kernels::pclmul::oneshot(params, seed, which, data) }
}
