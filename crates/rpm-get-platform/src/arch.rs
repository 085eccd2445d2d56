//! Architecture detection.

use std::fmt;

use once_cell::sync::Lazy;

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X86_64,
    ARM,
    ARM64,
    Unknown,
}

static HOST: Lazy<Arch> = Lazy::new(|| parse(&sysinfo::System::cpu_arch()));

/// Detect current architecture.
pub fn detect() -> Arch {
    *HOST
}

/// Map a `uname -m` style string to an [`Arch`].
pub fn parse(raw: &str) -> Arch {
    match raw.trim() {
        "i386" | "i686" | "x86" => Arch::X86,
        "x86_64" | "amd64" => Arch::X86_64,
        "arm" | "armv7l" | "armv7" => Arch::ARM,
        "aarch64" | "arm64" => Arch::ARM64,
        _ => Arch::Unknown,
    }
}

impl Arch {
    /// Name as it appears in RPM file names and `uname -m`.
    pub fn rpm_name(self) -> &'static str {
        match self {
            Arch::X86 => "i686",
            Arch::X86_64 => "x86_64",
            Arch::ARM => "armv7hl",
            Arch::ARM64 => "aarch64",
            Arch::Unknown => std::env::consts::ARCH,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rpm_name())
    }
}
