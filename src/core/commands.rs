//! Keyboard command dispatch
//!
//! Maps key presses on the overlay to transport commands. Keys that are not
//! in the table (or that carry modifiers) are left for the default handler.

/// The six transport commands the overlay understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    TogglePause,
    Restart,
    SkipBack,
    SkipForward,
    PrevTrack,
    NextTrack,
}

/// Look up the command bound to `key`
///
/// `key` is the GPUI key name (`"space"`, `"left"`, `","`, ...). Both the
/// main-row and keypad zero arrive as `"0"`.
pub fn command_for_key(key: &str) -> Option<PlayerCommand> {
    match key {
        "space" => Some(PlayerCommand::TogglePause),
        "0" => Some(PlayerCommand::Restart),
        "left" => Some(PlayerCommand::SkipBack),
        "right" => Some(PlayerCommand::SkipForward),
        "," => Some(PlayerCommand::PrevTrack),
        "." => Some(PlayerCommand::NextTrack),
        _ => None,
    }
}

/// Like [`command_for_key`], but never claims a chorded keystroke
pub fn command_for_keystroke(key: &str, has_modifiers: bool) -> Option<PlayerCommand> {
    if has_modifiers {
        return None;
    }
    command_for_key(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_keys() {
        assert_eq!(command_for_key("space"), Some(PlayerCommand::TogglePause));
        assert_eq!(command_for_key("0"), Some(PlayerCommand::Restart));
        assert_eq!(command_for_key("left"), Some(PlayerCommand::SkipBack));
        assert_eq!(command_for_key("right"), Some(PlayerCommand::SkipForward));
        assert_eq!(command_for_key(","), Some(PlayerCommand::PrevTrack));
        assert_eq!(command_for_key("."), Some(PlayerCommand::NextTrack));
    }

    #[test]
    fn test_unbound_keys_pass_through() {
        for key in ["a", "1", "up", "down", "escape", "enter", ""] {
            assert_eq!(command_for_key(key), None, "key {:?} should not be bound", key);
        }
    }

    #[test]
    fn test_modifiers_pass_through() {
        assert_eq!(command_for_keystroke("space", true), None);
        assert_eq!(command_for_keystroke(".", true), None);
        assert_eq!(command_for_keystroke(".", false), Some(PlayerCommand::NextTrack));
    }
}
