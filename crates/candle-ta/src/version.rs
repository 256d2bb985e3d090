//! Build identity.
//!
//! The identity string names the package, its version and the compile
//! target, e.g. `candle-ta v1.0.0 (x86_64-linux)`. Hosts loading the native
//! library use it to confirm which build they are talking to.

use std::ffi::{CStr, CString};
use std::sync::OnceLock;

/// Package name from Cargo metadata.
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// Package version from Cargo metadata.
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

static VERSION: OnceLock<String> = OnceLock::new();
static VERSION_C: OnceLock<CString> = OnceLock::new();

/// Returns the identity string `"<name> v<version> (<arch>-<os>)"`.
///
/// # Example
///
/// ```
/// let v = candle_ta::version();
/// assert!(v.starts_with("candle-ta v"));
/// assert!(v.contains(std::env::consts::ARCH));
/// ```
#[must_use]
pub fn version() -> &'static str {
    VERSION.get_or_init(|| {
        format!(
            "{PACKAGE_NAME} v{PACKAGE_VERSION} ({}-{})",
            std::env::consts::ARCH,
            std::env::consts::OS
        )
    })
}

/// Returns [`version`] as a NUL-terminated string with static lifetime.
///
/// The pointer behind it stays valid for the life of the process.
#[must_use]
pub fn version_cstr() -> &'static CStr {
    VERSION_C.get_or_init(|| CString::new(version()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let v = version();
        assert!(v.starts_with(PACKAGE_NAME));
        assert!(v.contains(&format!("v{PACKAGE_VERSION}")));
        assert!(v.ends_with(&format!("{}-{})", std::env::consts::ARCH, std::env::consts::OS)));
    }

    #[test]
    fn test_cstr_matches_str() {
        assert_eq!(version_cstr().to_str().unwrap(), version());
        assert_eq!(version_cstr().as_ptr(), version_cstr().as_ptr());
    }
}
