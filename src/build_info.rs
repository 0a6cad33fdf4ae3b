//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Footer text for the menu, e.g. `v0.1.0 2026-10-14 (abc1234)`.
pub fn version_label() -> String {
    format!(
        "v{} {} ({})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
