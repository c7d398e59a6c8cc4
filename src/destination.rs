// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Display;

/// Where an accepted message is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Destination {
    Console,
    File,
    Database,
}

impl Destination {
    /// Order in which a single log call visits the enabled destinations.
    pub const FAN_OUT_ORDER: [Destination; 3] =
        [Destination::File, Destination::Console, Destination::Database];

    pub(crate) fn fan_out_rank(self) -> usize {
        match self {
            Destination::File => 0,
            Destination::Console => 1,
            Destination::Database => 2,
        }
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Destination::Console => "console",
            Destination::File => "file",
            Destination::Database => "database",
        };
        f.write_str(name)
    }
}
