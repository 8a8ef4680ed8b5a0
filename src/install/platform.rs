//! Platform labels used to select release assets and executables
//!
//! Labels follow the `{os}-{arch}` naming of Node.js (`linux-x64`,
//! `darwin-arm64`, `win32-x64`) since the manifest is consumed by a
//! wrapping npm package.

/// Returns the label of the platform this binary was built for
pub fn current_label() -> String {
    label_for(std::env::consts::OS, std::env::consts::ARCH)
}

/// Builds a platform label from Rust's OS and architecture names
pub fn label_for(os: &str, arch: &str) -> String {
    let os = match os {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    };
    let arch = match arch {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "x86" => "ia32",
        other => other,
    };
    format!("{}-{}", os, arch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("linux", "x86_64", "linux-x64")]
    #[case("linux", "aarch64", "linux-arm64")]
    #[case("macos", "aarch64", "darwin-arm64")]
    #[case("windows", "x86", "win32-ia32")]
    #[case("linux", "arm", "linux-arm")]
    #[case("freebsd", "riscv64", "freebsd-riscv64")]
    fn label_for_returns_node_style_label(
        #[case] os: &str,
        #[case] arch: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(label_for(os, arch), expected);
    }

    #[test]
    fn current_label_has_os_and_arch() {
        let label = current_label();
        assert!(label.contains('-'));
    }
}
