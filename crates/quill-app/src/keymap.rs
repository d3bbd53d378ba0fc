//! Key chords and rebindable action tables
//!
//! Chords are written in Emacs notation in the config file (`"C-c C-c"`,
//! `"C-x o"`, `"<f2>"`) and shown to the user in long form
//! (`Ctrl+C Ctrl+C`).

use std::fmt;
use std::str::FromStr;

use crate::config::KeySettings;
use crate::input_key::InputKey;
use quill_core::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// KeyChord
// ─────────────────────────────────────────────────────────────────────────────

/// A non-empty sequence of keys bound to one action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyChord {
    keys: Vec<InputKey>,
}

impl KeyChord {
    /// Build a chord from keys. Returns `None` for an empty sequence.
    pub fn new(keys: Vec<InputKey>) -> Option<Self> {
        if keys.is_empty() {
            None
        } else {
            Some(Self { keys })
        }
    }

    /// Parse Emacs-style notation, e.g. `"C-c C-k"`.
    pub fn parse(notation: &str) -> Result<Self> {
        let keys = notation
            .split_whitespace()
            .map(|token| parse_key(token).map_err(|reason| Error::key_chord(notation, reason)))
            .collect::<Result<Vec<_>>>()?;

        Self::new(keys).ok_or_else(|| Error::key_chord(notation, "empty chord"))
    }

    pub fn keys(&self) -> &[InputKey] {
        &self.keys
    }

    /// True if `prefix` is a proper or full prefix of this chord.
    pub fn starts_with(&self, prefix: &[InputKey]) -> bool {
        self.keys.starts_with(prefix)
    }
}

impl FromStr for KeyChord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

/// Parse one whitespace-separated token of chord notation.
fn parse_key(token: &str) -> std::result::Result<InputKey, String> {
    if let Some(rest) = token.strip_prefix("C-") {
        return single_char(rest)
            .map(|c| InputKey::CharCtrl(c.to_ascii_lowercase()))
            .ok_or_else(|| format!("expected one character after C- in {:?}", token));
    }
    if let Some(rest) = token.strip_prefix("M-") {
        return single_char(rest)
            .map(InputKey::CharAlt)
            .ok_or_else(|| format!("expected one character after M- in {:?}", token));
    }

    let named = match token {
        "RET" => Some(InputKey::Enter),
        "ESC" => Some(InputKey::Esc),
        "TAB" => Some(InputKey::Tab),
        "SPC" => Some(InputKey::Char(' ')),
        "DEL" => Some(InputKey::Backspace),
        "<up>" => Some(InputKey::Up),
        "<down>" => Some(InputKey::Down),
        "<left>" => Some(InputKey::Left),
        "<right>" => Some(InputKey::Right),
        "<home>" => Some(InputKey::Home),
        "<end>" => Some(InputKey::End),
        "<prior>" => Some(InputKey::PageUp),
        "<next>" => Some(InputKey::PageDown),
        "<delete>" => Some(InputKey::Delete),
        "<backtab>" => Some(InputKey::BackTab),
        _ => None,
    };
    if let Some(key) = named {
        return Ok(key);
    }

    if let Some(n) = token
        .strip_prefix("<f")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return match n.parse::<u8>() {
            Ok(n @ 1..=12) => Ok(InputKey::F(n)),
            _ => Err(format!("unknown function key {:?}", token)),
        };
    }

    single_char(token)
        .map(InputKey::Char)
        .ok_or_else(|| format!("unknown key {:?}", token))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chord matching
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of feeding one key to a [`ChordMatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordMatch<A> {
    /// A complete chord matched
    Matched(A),
    /// Keys so far are a prefix of at least one chord
    Pending,
    /// The sequence matches nothing; pending keys are returned
    Unbound(Vec<InputKey>),
}

/// Accumulates prefix keys across key events until a chord resolves.
#[derive(Debug, Clone, Default)]
pub struct ChordMatcher {
    pending: Vec<InputKey>,
}

impl ChordMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key and resolve against `bindings`.
    ///
    /// The first binding in table order wins when two chords are identical.
    pub fn feed<A: Copy>(&mut self, key: InputKey, bindings: &[(KeyChord, A)]) -> ChordMatch<A> {
        self.pending.push(key);

        if let Some((_, action)) = bindings
            .iter()
            .find(|(chord, _)| chord.keys() == self.pending.as_slice())
        {
            self.pending.clear();
            return ChordMatch::Matched(*action);
        }

        if bindings
            .iter()
            .any(|(chord, _)| chord.starts_with(&self.pending))
        {
            return ChordMatch::Pending;
        }

        ChordMatch::Unbound(std::mem::take(&mut self.pending))
    }

    /// Keys typed so far that form an incomplete chord
    pub fn pending(&self) -> &[InputKey] {
        &self.pending
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drop any partial chord (C-g)
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

/// Render a key sequence the way a chord is displayed.
pub fn describe_keys(keys: &[InputKey]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// ─────────────────────────────────────────────────────────────────────────────
// Capture keymap
// ─────────────────────────────────────────────────────────────────────────────

/// The two actions available inside a capture buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureAction {
    /// Deliver the buffer text and close
    Save,
    /// Discard the buffer text and close
    Cancel,
}

pub const DEFAULT_SAVE_CHORD: &str = "C-c C-c";
pub const DEFAULT_CANCEL_CHORD: &str = "C-c C-k";

/// Rebindable action-to-chord table for the capture buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureKeymap {
    pub save: KeyChord,
    pub cancel: KeyChord,
}

impl Default for CaptureKeymap {
    fn default() -> Self {
        Self {
            save: default_chord(DEFAULT_SAVE_CHORD, &[InputKey::CharCtrl('c'); 2]),
            cancel: default_chord(
                DEFAULT_CANCEL_CHORD,
                &[InputKey::CharCtrl('c'), InputKey::CharCtrl('k')],
            ),
        }
    }
}

impl CaptureKeymap {
    /// Build from the `[keys]` config section.
    pub fn from_settings(keys: &KeySettings) -> Result<Self> {
        Ok(Self {
            save: KeyChord::parse(&keys.save)?,
            cancel: KeyChord::parse(&keys.cancel)?,
        })
    }

    /// Override a single binding.
    pub fn rebind(&mut self, action: CaptureAction, chord: KeyChord) {
        match action {
            CaptureAction::Save => self.save = chord,
            CaptureAction::Cancel => self.cancel = chord,
        }
    }

    pub fn chord_for(&self, action: CaptureAction) -> &KeyChord {
        match action {
            CaptureAction::Save => &self.save,
            CaptureAction::Cancel => &self.cancel,
        }
    }

    /// Binding table handed to the host when a capture buffer opens.
    pub fn bindings(&self) -> Vec<(KeyChord, CaptureAction)> {
        vec![
            (self.save.clone(), CaptureAction::Save),
            (self.cancel.clone(), CaptureAction::Cancel),
        ]
    }

    /// Header line shown at the top of the capture buffer.
    pub fn help_banner(&self) -> String {
        format!(
            "Capture buffer. Finish with {}, abort with {}.",
            self.save, self.cancel
        )
    }
}

/// Parse a built-in chord, falling back to explicit keys.
///
/// The notation constants are covered by tests, the fallback only keeps
/// `Default` infallible.
fn default_chord(notation: &str, keys: &[InputKey]) -> KeyChord {
    KeyChord::parse(notation).unwrap_or_else(|_| KeyChord {
        keys: keys.to_vec(),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Global keymap
// ─────────────────────────────────────────────────────────────────────────────

/// Commands reachable through chords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Capture-buffer action (only bound inside the capture buffer)
    Capture(CaptureAction),
    /// Open a capture buffer that inserts at point on save
    OpenCapture,
    /// Open a capture buffer that appends to the notes buffer on save
    OpenNoteCapture,
    /// Cycle focus to the next window
    OtherWindow,
    /// Write the focused buffer to its file
    WriteFile,
    /// Exit the application
    Quit,
}

/// Workspace-wide chord table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    pub capture: CaptureKeymap,
    global: Vec<(KeyChord, Command)>,
}

impl Default for Keymap {
    fn default() -> Self {
        // Default KeySettings only contains valid notation
        Self::from_settings(&KeySettings::default()).unwrap_or_else(|_| Self {
            capture: CaptureKeymap::default(),
            global: Vec::new(),
        })
    }
}

impl Keymap {
    pub fn from_settings(keys: &KeySettings) -> Result<Self> {
        let global = vec![
            (KeyChord::parse(&keys.open)?, Command::OpenCapture),
            (KeyChord::parse(&keys.open_note)?, Command::OpenNoteCapture),
            (KeyChord::parse(&keys.other_window)?, Command::OtherWindow),
            (KeyChord::parse(&keys.write_file)?, Command::WriteFile),
            (KeyChord::parse(&keys.quit)?, Command::Quit),
        ];

        Ok(Self {
            capture: CaptureKeymap::from_settings(keys)?,
            global,
        })
    }

    pub fn global(&self) -> &[(KeyChord, Command)] {
        &self.global
    }

    /// Chord bound to a global command, for status hints
    pub fn chord_for(&self, command: Command) -> Option<&KeyChord> {
        self.global
            .iter()
            .find(|(_, c)| *c == command)
            .map(|(chord, _)| chord)
    }
}
