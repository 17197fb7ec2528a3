use std::path::PathBuf;

/// Pages whose root `className` was split by the formatter run.
pub const DEFAULT_TARGETS: [&str; 7] = [
    r"app\atomic-structure-calculators\formal-charge-calculator\page.tsx",
    r"app\atomic-structure-calculators\wavelength-energy-calculator\page.tsx",
    r"app\chemical-reaction-calculators\radioactive-decay-calculator\page.tsx",
    r"app\redox-calculators\redox-balancing-calculator\page.tsx",
    r"app\thermodynamics-calculators\bond-energy-calculator\page.tsx",
    r"app\thermodynamics-calculators\clausius-clapeyron-calculator\page.tsx",
    r"app\thermodynamics-calculators\hess-law-calculator\page.tsx",
];

pub fn default_targets() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect()
}

/// Maps a target written with backslash separators onto the host path.
pub fn host_path(target: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(target)
    } else {
        PathBuf::from(target.replace('\\', "/"))
    }
}
