use common::games::snake::{Direction, InputEvent, SnakeSettings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Input(InputEvent),
    Resume,
    Restart,
    Set(SettingChange),
    Save,
    Status,
    Help,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingChange {
    Columns(u32),
    Rows(u32),
    CellPixelSize(u32),
    DrawGrid(bool),
    RuleEnforced(bool),
    Wraparound(bool),
    Cheating(bool),
}

impl SettingChange {
    pub fn apply(&self, settings: &mut SnakeSettings) {
        match *self {
            SettingChange::Columns(value) => settings.columns = value,
            SettingChange::Rows(value) => settings.rows = value,
            SettingChange::CellPixelSize(value) => settings.cell_pixel_size = value,
            SettingChange::DrawGrid(value) => settings.draw_grid = value,
            SettingChange::RuleEnforced(value) => settings.rule_enforced = value,
            SettingChange::Wraparound(value) => settings.wraparound = value,
            SettingChange::Cheating(value) => settings.cheating = value,
        }
    }
}

pub const HELP: &str = "\
Commands:
  w/a/s/d, up/down/left/right  steer
  esc                          pause
  close                        ask to exit (pauses)
  resume                       continue a paused game
  restart                      start a new game
  set <option> <value>         change an option of a paused game and resume
                               options: columns, rows, cell, grid, rules, wrap, cheat
  save                         write the current options to the config file
  status                       show phase and score
  quit                         exit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("Empty command".to_string());
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "w" | "up" => Command::Input(InputEvent::Turn(Direction::Up)),
        "s" | "down" => Command::Input(InputEvent::Turn(Direction::Down)),
        "a" | "left" => Command::Input(InputEvent::Turn(Direction::Left)),
        "d" | "right" => Command::Input(InputEvent::Turn(Direction::Right)),
        "esc" | "escape" | "p" => Command::Input(InputEvent::EscapeRequested),
        "close" => Command::Input(InputEvent::CloseRequested),
        "resume" | "r" => Command::Resume,
        "restart" => Command::Restart,
        "save" => Command::Save,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        "set" => {
            let option = parts.next().ok_or("Usage: set <option> <value>")?;
            let value = parts.next().ok_or("Usage: set <option> <value>")?;
            Command::Set(parse_setting(option, value)?)
        }
        other => return Err(format!("Unknown command: {}", other)),
    };

    if parts.next().is_some() {
        return Err(format!("Too many arguments for {}", word));
    }
    Ok(command)
}

fn parse_setting(option: &str, value: &str) -> Result<SettingChange, String> {
    let change = match option.to_ascii_lowercase().as_str() {
        "columns" | "width" => SettingChange::Columns(parse_number(value)?),
        "rows" | "height" => SettingChange::Rows(parse_number(value)?),
        "cell" | "cell_pixel_size" => SettingChange::CellPixelSize(parse_number(value)?),
        "grid" | "draw_grid" => SettingChange::DrawGrid(parse_flag(value)?),
        "rules" | "rule_enforced" => SettingChange::RuleEnforced(parse_flag(value)?),
        "wrap" | "wraparound" | "infinite" => SettingChange::Wraparound(parse_flag(value)?),
        "cheat" | "cheating" => SettingChange::Cheating(parse_flag(value)?),
        other => return Err(format!("Unknown option: {}", other)),
    };
    Ok(change)
}

fn parse_number(value: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|e| format!("Invalid number {}: {}", value, e))
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(format!("Invalid flag {}, expected on or off", value)),
    }
}
