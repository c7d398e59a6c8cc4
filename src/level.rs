// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Display;

/// Severity of a logged message.
///
/// The variant name doubles as the display tag written by every sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Routine progress information
    Message,
    /// Suspicious condition
    Warning,
    /// Runtime error
    Error,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Message, Level::Warning, Level::Error];

    /**
    Numeric code stored in the `level` column of the database table.

    The codes are not in severity order; they are fixed by the table's existing consumers.
    */
    pub const fn database_code(self) -> i64 {
        match self {
            Level::Message => 1,
            Level::Error => 2,
            Level::Warning => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Message => "Message",
            Level::Warning => "Warning",
            Level::Error => "Error",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/*
Boilerplate notes.

Copy/Clone/Eq/Hash are derived so levels can live in sets.
Ord follows declaration order, which is only used for deterministic set iteration.
Default is not implemented; there is no obvious default severity.
*/
