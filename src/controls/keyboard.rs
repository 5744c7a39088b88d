// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts of the controls.
//!
//! | Key | Action |
//! |-----|--------|
//! | Space | Toggle play/pause |
//! | Left / Right | Focus the scrubber and step one frame |
//! | A | Pause and jump to the start |
//! | S | Pause and jump to the end |

use super::scrubber::StepDirection;
use iced::keyboard::{key::Named, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlayPause,
    Step(StepDirection),
    JumpToStart,
    JumpToEnd,
}

/// Maps a pressed key to its action, if any.
#[must_use]
pub fn action_for(key: &Key) -> Option<KeyAction> {
    match key.as_ref() {
        Key::Named(Named::Space) => Some(KeyAction::TogglePlayPause),
        Key::Named(Named::ArrowLeft) => Some(KeyAction::Step(StepDirection::Backward)),
        Key::Named(Named::ArrowRight) => Some(KeyAction::Step(StepDirection::Forward)),
        Key::Character(c) if c.eq_ignore_ascii_case("a") => Some(KeyAction::JumpToStart),
        Key::Character(c) if c.eq_ignore_ascii_case("s") => Some(KeyAction::JumpToEnd),
        _ => None,
    }
}

/// Keys pressed since the last key release.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeysDown(Vec<Key>);

impl KeysDown {
    pub fn press(&mut self, key: Key) {
        self.0.push(key);
    }

    /// Any key release clears the whole list.
    pub fn release(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_toggles_playback() {
        assert_eq!(
            action_for(&Key::Named(Named::Space)),
            Some(KeyAction::TogglePlayPause)
        );
    }

    #[test]
    fn arrows_step_the_scrubber() {
        assert_eq!(
            action_for(&Key::Named(Named::ArrowLeft)),
            Some(KeyAction::Step(StepDirection::Backward))
        );
        assert_eq!(
            action_for(&Key::Named(Named::ArrowRight)),
            Some(KeyAction::Step(StepDirection::Forward))
        );
    }

    #[test]
    fn letters_jump_regardless_of_case() {
        for (letter, action) in [
            ("a", KeyAction::JumpToStart),
            ("A", KeyAction::JumpToStart),
            ("s", KeyAction::JumpToEnd),
            ("S", KeyAction::JumpToEnd),
        ] {
            assert_eq!(action_for(&Key::Character(letter.into())), Some(action));
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(action_for(&Key::Character("x".into())), None);
        assert_eq!(action_for(&Key::Named(Named::Enter)), None);
    }

    #[test]
    fn release_clears_all_pressed_keys() {
        let mut keys = KeysDown::default();
        keys.press(Key::Named(Named::Space));
        keys.press(Key::Character("a".into()));
        assert_eq!(keys.keys().len(), 2);
        keys.release();
        assert!(keys.keys().is_empty());
    }
}
