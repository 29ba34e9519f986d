// launch.rs - Initial mode and seed selected at startup

use std::fmt;
use std::str::FromStr;

use crate::error::LaunchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchMode {
    /// Editing mode on an empty board.
    Draw,
    /// Running mode on a random board.
    Random,
    /// Running mode on the fixed glider seed.
    Glider,
}

impl LaunchMode {
    pub const ALL: [LaunchMode; 3] = [Self::Draw, Self::Random, Self::Glider];

    pub fn name(self) -> &'static str {
        match self {
            Self::Draw   => "draw",
            Self::Random => "random",
            Self::Glider => "glider",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Draw   => "start paused on an empty board and draw with the mouse",
            Self::Random => "start running from a random board",
            Self::Glider => "start running from a single glider",
        }
    }
}

impl FromStr for LaunchMode {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| LaunchError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Usage text listing the launch modes.
pub fn usage(program: &str) -> String {
    let mut text = format!("usage: {program} <MODE>\n\nmodes:\n");
    for mode in LaunchMode::ALL {
        text.push_str(&format!("  {:<8}{}\n", mode.name(), mode.description()));
    }
    text
}
