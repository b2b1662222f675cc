use std::path::PathBuf;

use acejump_common::{LineRange, Position};
use acejump_core::JumpCommand;
use clap::Parser;

/// AceJump: replay a jump against a text file and print where it landed.
#[derive(Parser, Debug)]
#[command(name = "acejump", version, about)]
pub struct Args {
    /// Text file to jump in.
    #[arg(short = 'f', long, required_unless_present = "print_config")]
    pub file: Option<PathBuf>,

    /// Keystrokes to type. `<esc>` and `<bs>` stand for Escape and Backspace.
    #[arg(short = 'k', long, default_value = "")]
    pub keys: String,

    /// Command id, e.g. acejump.jump or acejump.jump.multiChar.selection.
    #[arg(short = 'c', long, default_value = "acejump.jump")]
    pub command: JumpCommand,

    /// Cursor position before the jump (LINE:COL, zero-based).
    #[arg(long, value_parser = parse_position, default_value = "0:0")]
    pub cursor: Position,

    /// Selection anchor (LINE:COL). Without it the selection is empty.
    #[arg(long, value_parser = parse_position)]
    pub anchor: Option<Position>,

    /// Visible line range (START:END, inclusive). Repeat for split views.
    /// Defaults to the whole file.
    #[arg(long = "visible", value_parser = parse_line_range)]
    pub visible: Vec<LineRange>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

fn split_pair(s: &str, what: &str) -> Result<(usize, usize), String> {
    let (a, b) = s
        .split_once(':')
        .ok_or_else(|| format!("expected {what}, got '{s}'"))?;
    let a = a.trim().parse().map_err(|e| format!("'{a}': {e}"))?;
    let b = b.trim().parse().map_err(|e| format!("'{b}': {e}"))?;
    Ok((a, b))
}

fn parse_position(s: &str) -> Result<Position, String> {
    split_pair(s, "LINE:COL").map(|(line, character)| Position::new(line, character))
}

fn parse_line_range(s: &str) -> Result<LineRange, String> {
    split_pair(s, "START:END").map(|(start, end)| LineRange::new(start, end))
}
