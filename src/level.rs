use crate::console::Console;
use std::fmt;

/// Ordered severity of a log event, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Information,
    Warning,
    Error,
    Fatal,
}

impl Level {
    /// Whether events at this level are forwarded to the remote
    /// collector. Fixed policy: everything except `Debug` ships.
    pub fn ships_remote(self) -> bool {
        !matches!(self, Level::Debug)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "Debug",
            Level::Information => "Information",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Fatal => "Fatal",
        };
        f.write_str(name)
    }
}

/// Icon used when a level has no entry in [`LEVEL_SPECS`].
pub const DEFAULT_ICON: &str = "🐸";

/// Presentation and console capability associated with one level.
///
/// `print` routes a rendered line to the matching console method; it is
/// resolved from the fixed table below, never dynamically.
pub struct LevelSpec {
    pub level: Level,
    pub icon: &'static str,
    pub print: fn(&dyn Console, &str),
}

fn print_log(console: &dyn Console, line: &str) {
    console.log(line);
}

fn print_info(console: &dyn Console, line: &str) {
    console.info(line);
}

fn print_warn(console: &dyn Console, line: &str) {
    console.warn(line);
}

fn print_error(console: &dyn Console, line: &str) {
    console.error(line);
}

/// Fixed lookup table translating a [`Level`] to its icon and console
/// print capability. Fatal reuses the error print.
pub const LEVEL_SPECS: [LevelSpec; 5] = [
    LevelSpec {
        level: Level::Debug,
        icon: "🐳",
        print: print_log,
    },
    LevelSpec {
        level: Level::Information,
        icon: "🐸",
        print: print_info,
    },
    LevelSpec {
        level: Level::Warning,
        icon: "🐠",
        print: print_warn,
    },
    LevelSpec {
        level: Level::Error,
        icon: "🐝",
        print: print_error,
    },
    LevelSpec {
        level: Level::Fatal,
        icon: "🐞",
        print: print_error,
    },
];

/// Resolve the spec for a level. Callers treat `None` as an inert
/// capability and print nothing.
pub fn lookup(level: Level) -> Option<&'static LevelSpec> {
    LEVEL_SPECS.iter().find(|spec| spec.level == level)
}
