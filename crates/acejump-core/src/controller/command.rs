use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User-facing jump commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JumpCommand {
    Jump,
    JumpSelect,
    MultiChar,
    MultiCharSelect,
    Line,
    LineSelect,
}

impl JumpCommand {
    pub const ALL: [JumpCommand; 6] = [
        JumpCommand::Jump,
        JumpCommand::JumpSelect,
        JumpCommand::MultiChar,
        JumpCommand::MultiCharSelect,
        JumpCommand::Line,
        JumpCommand::LineSelect,
    ];

    /// Command id as registered with the host.
    pub fn id(self) -> &'static str {
        match self {
            JumpCommand::Jump => "acejump.jump",
            JumpCommand::JumpSelect => "acejump.jump.selection",
            JumpCommand::MultiChar => "acejump.jump.multiChar",
            JumpCommand::MultiCharSelect => "acejump.jump.multiChar.selection",
            JumpCommand::Line => "acejump.jump.line",
            JumpCommand::LineSelect => "acejump.jump.line.selection",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Extend the selection to the target instead of moving the cursor.
    pub fn extends_selection(self) -> bool {
        matches!(
            self,
            JumpCommand::JumpSelect | JumpCommand::MultiCharSelect | JumpCommand::LineSelect
        )
    }

    /// Run restriction rounds before falling back to labels.
    pub fn is_multi_char(self) -> bool {
        matches!(self, JumpCommand::MultiChar | JumpCommand::MultiCharSelect)
    }

    /// Label line anchors instead of asking for a character.
    pub fn is_line(self) -> bool {
        matches!(self, JumpCommand::Line | JumpCommand::LineSelect)
    }
}

impl fmt::Display for JumpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for JumpCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|c| c.id()).collect();
            format!("unknown command '{s}', expected one of: {}", known.join(", "))
        })
    }
}
