//! Static keyword and tech-stack rule tables for dimension extraction.
//!
//! Tables are fixed, ordered sequences. Declaration order is kept for
//! diagnostic output; scoring never depends on it because every rule adds an
//! independent delta.

use distrofit_core::Axis;

/// Which signal collection a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    Keywords,
    TechStack,
}

/// How a term is compared against a rule's patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matching {
    /// Case-sensitive equality.
    Exact,
    /// The lowercased term contains a pattern. Equality is a special case.
    Substring,
}

impl Matching {
    pub(crate) fn find(self, term: &str, patterns: &[&'static str]) -> Option<&'static str> {
        match self {
            Self::Exact => patterns.iter().copied().find(|pattern| *pattern == term),
            Self::Substring => {
                let lowered = term.to_lowercase();
                patterns
                    .iter()
                    .copied()
                    .find(|pattern| lowered.contains(pattern))
            }
        }
    }
}

/// A set of patterns that adds `delta` to `axis` once per matching term.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub(crate) name: &'static str,
    pub(crate) axis: Axis,
    pub(crate) source: Source,
    pub(crate) matching: Matching,
    pub(crate) delta: i32,
    pub(crate) patterns: &'static [&'static str],
}

/// Starting value of each axis before any evidence is applied.
pub(crate) const BASELINE: [(Axis, i32); 4] = [
    (Axis::Rolling, 5),
    (Axis::Diy, 5),
    (Axis::Performance, 3),
    (Axis::DevFocus, 5),
];

/// Rolling bonus for senior profiles, who tolerate churn.
pub(crate) const SENIOR_ROLLING_BONUS: i32 = 1;

/// Scripting languages counted towards the DIY bonus.
pub(crate) const SCRIPTING_LANGUAGES: &[&str] = &["bash", "lua", "python"];
/// Distinct scripting languages required for the DIY bonus.
pub(crate) const SCRIPTING_THRESHOLD: usize = 2;
/// DIY bonus for profiles fluent in several scripting languages.
pub(crate) const SCRIPTING_DIY_BONUS: i32 = 2;

const BLEEDING_EDGE_STACK: &[&str] = &["rust", "mojo", "zig", "deno", "bun"];

const STABILITY_KEYWORDS: &[&str] = &["production", "enterprise", "stable", "lts"];

const CUSTOMISATION_KEYWORDS: &[&str] = &[
    "dotfiles",
    "rice",
    "customization",
    "tiling",
    "window manager",
    "kernel",
    "arch",
    "gentoo",
    "nixos",
    "low-level",
    "assembly",
    // tiling window managers
    "hyprland",
    "sway",
    "i3",
    "awesome",
    "dwm",
    "qtile",
    "bspwm",
    // bars, launchers and compositors
    "wayland",
    "x11",
    "compositor",
    "eww",
    "polybar",
    "waybar",
    "rofi",
    "wofi",
    // minimal distributions
    "minimal",
    "minimalism",
    "void",
    "artix",
    "crux",
    "alpine",
    "kiss",
    "lfs",
    "linux from scratch",
    "custom kernel",
    "musl",
    "glibc hardening",
    // atomic desktops
    "immutable",
    "atomic",
    "silverblue",
    "kinoite",
    "bazzite",
    "ublue",
    // declarative configuration
    "home-manager",
    "flakes",
    "nix",
    "guix",
    // ricing culture
    "ricing",
    "unixporn",
    "gruvbox",
    "catppuccin",
    "tokyonight",
];

const SIMPLICITY_KEYWORDS: &[&str] = &["beginner", "simple", "easy", "user-friendly"];

const PERFORMANCE_KEYWORDS: &[&str] = &[
    "gaming",
    "performance",
    "gpu",
    "vulkan",
    "shader",
    "godot",
    "unreal",
];

const PERFORMANCE_STACK: &[&str] = &[
    "c", "c++", "rust", "vulkan", "opengl", "gpu", // graphics
    "cuda", "rocm", "opencl", "metal", // compute
    "directx", "dx12", "webgpu", // game ports
    "assembly", "asm", "x86", "arm", "riscv", // low level
    "hpc", "mpi", "openmp", "simd", "avx", "avx512", // HPC
    "zig", "c++20", "c++23", "cpp", "ispc", "halide", // performance languages
    "game dev", "godot", "unreal", "unity", // engines
];

const CRITICAL_KEYWORDS: &[&str] = &["kernel", "ansible", "kubernetes", "k8s", "docker", "devops"];

const DEVELOPER_STACK: &[&str] = &[
    "c",
    "c++",
    "go",
    "rust",
    "python",
    "ruby",
    "javascript",
    "typescript",
    "java",
    "kotlin",
    "swift",
    "php",
    "perl",
    "shell",
    "bash",
    "lua",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "vagrant",
    "chef",
    "puppet",
    "jenkins",
    "gitlab",
    "github actions",
    "circleci",
    "aws",
    "gcp",
    "azure",
    "cloud",
    "git",
    "make",
    "cmake",
    "gradle",
    "maven",
    "npm",
    "yarn",
    "pip",
];

const DEV_PROCESS_KEYWORDS: &[&str] = &[
    "devops",
    "backend",
    "infrastructure",
    "sre",
    "platform",
    "rails",
    "web",
    "api",
    "microservices",
    "containers",
    "orchestration",
    "automation",
    "ci/cd",
    "deployment",
    "ansible",
    "kubernetes",
    "k8s",
];

/// Every table-driven rule, in declaration order.
pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "bleeding_edge_stack",
        axis: Axis::Rolling,
        source: Source::TechStack,
        matching: Matching::Exact,
        delta: 2,
        patterns: BLEEDING_EDGE_STACK,
    },
    Rule {
        name: "stability_keywords",
        axis: Axis::Rolling,
        source: Source::Keywords,
        matching: Matching::Exact,
        delta: -2,
        patterns: STABILITY_KEYWORDS,
    },
    Rule {
        name: "customisation_keywords",
        axis: Axis::Diy,
        source: Source::Keywords,
        matching: Matching::Exact,
        delta: 3,
        patterns: CUSTOMISATION_KEYWORDS,
    },
    Rule {
        name: "simplicity_keywords",
        axis: Axis::Diy,
        source: Source::Keywords,
        matching: Matching::Exact,
        delta: -2,
        patterns: SIMPLICITY_KEYWORDS,
    },
    Rule {
        name: "performance_keywords",
        axis: Axis::Performance,
        source: Source::Keywords,
        matching: Matching::Exact,
        delta: 2,
        patterns: PERFORMANCE_KEYWORDS,
    },
    Rule {
        name: "performance_stack",
        axis: Axis::Performance,
        source: Source::TechStack,
        matching: Matching::Exact,
        delta: 1,
        patterns: PERFORMANCE_STACK,
    },
    Rule {
        name: "critical_keywords",
        axis: Axis::DevFocus,
        source: Source::Keywords,
        matching: Matching::Substring,
        delta: 2,
        patterns: CRITICAL_KEYWORDS,
    },
    Rule {
        name: "developer_stack",
        axis: Axis::DevFocus,
        source: Source::TechStack,
        matching: Matching::Substring,
        delta: 1,
        patterns: DEVELOPER_STACK,
    },
    Rule {
        name: "dev_process_keywords",
        axis: Axis::DevFocus,
        source: Source::Keywords,
        matching: Matching::Substring,
        delta: 1,
        patterns: DEV_PROCESS_KEYWORDS,
    },
];
