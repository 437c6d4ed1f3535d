//! Version details baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string, e.g. `flappy 0.1.0 (2026-10-18 abc1234)`.
pub fn version_line() -> String {
    format!(
        "flappy {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line_mentions_package_version() {
        let line = version_line();
        assert!(line.starts_with("flappy "));
        assert!(line.contains(env!("CARGO_PKG_VERSION")));
        assert!(line.ends_with(&format!("{})", BUILD_COMMIT)));
    }

    #[test]
    fn test_build_commit_format() {
        // 7-char short hash unless overridden or built outside git
        assert!(!BUILD_COMMIT.is_empty());
    }

    #[test]
    fn test_build_date_format() {
        // YYYY-MM-DD unless overridden
        assert!(!BUILD_DATE.is_empty());
    }
}
