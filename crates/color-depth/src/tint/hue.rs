//! Named hues and their relatives on the color wheel.

use std::fmt;
use std::str::FromStr;

use crate::color::Channel;

/// One of fifteen named hues.
///
/// The twelve chromatic hues sit on a wheel in declaration order, from
/// [`Red`](Hue::Red) clockwise to [`Pink`](Hue::Pink), which wraps back to
/// red. The three neutrals are off the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Black,
    Grey,
    White,
    Red,
    Orange,
    Yellow,
    Chartreuse,
    Green,
    Teal,
    Cyan,
    Azure,
    Blue,
    Purple,
    Magenta,
    Pink,
}

impl Hue {
    /// Every hue, neutrals first, then the wheel starting at red.
    pub const ALL: [Hue; 15] = [
        Hue::Black,
        Hue::Grey,
        Hue::White,
        Hue::Red,
        Hue::Orange,
        Hue::Yellow,
        Hue::Chartreuse,
        Hue::Green,
        Hue::Teal,
        Hue::Cyan,
        Hue::Azure,
        Hue::Blue,
        Hue::Purple,
        Hue::Magenta,
        Hue::Pink,
    ];

    /// Returns true for black, grey and white.
    #[inline]
    pub const fn is_neutral(self) -> bool {
        matches!(self, Hue::Black | Hue::Grey | Hue::White)
    }

    /// Primary hue of a color channel.
    #[inline]
    pub const fn primary(channel: Channel) -> Hue {
        match channel {
            Channel::Red => Hue::Red,
            Channel::Green => Hue::Green,
            Channel::Blue => Hue::Blue,
        }
    }

    /// The hue itself followed by its two wheel neighbours.
    ///
    /// Neutrals have no neighbours and return only themselves.
    pub const fn relatives(self) -> &'static [Hue] {
        match self {
            Hue::Red => &[Hue::Red, Hue::Pink, Hue::Orange],
            Hue::Orange => &[Hue::Orange, Hue::Red, Hue::Yellow],
            Hue::Yellow => &[Hue::Yellow, Hue::Orange, Hue::Chartreuse],
            Hue::Chartreuse => &[Hue::Chartreuse, Hue::Yellow, Hue::Green],
            Hue::Green => &[Hue::Green, Hue::Chartreuse, Hue::Teal],
            Hue::Teal => &[Hue::Teal, Hue::Green, Hue::Cyan],
            Hue::Cyan => &[Hue::Cyan, Hue::Teal, Hue::Azure],
            Hue::Azure => &[Hue::Azure, Hue::Cyan, Hue::Blue],
            Hue::Blue => &[Hue::Blue, Hue::Azure, Hue::Purple],
            Hue::Purple => &[Hue::Purple, Hue::Blue, Hue::Magenta],
            Hue::Magenta => &[Hue::Magenta, Hue::Purple, Hue::Pink],
            Hue::Pink => &[Hue::Pink, Hue::Magenta, Hue::Red],
            Hue::Black => &[Hue::Black],
            Hue::Grey => &[Hue::Grey],
            Hue::White => &[Hue::White],
        }
    }

    /// Lower-case name, e.g. `"chartreuse"`.
    pub const fn name(self) -> &'static str {
        match self {
            Hue::Black => "black",
            Hue::Grey => "grey",
            Hue::White => "white",
            Hue::Red => "red",
            Hue::Orange => "orange",
            Hue::Yellow => "yellow",
            Hue::Chartreuse => "chartreuse",
            Hue::Green => "green",
            Hue::Teal => "teal",
            Hue::Cyan => "cyan",
            Hue::Azure => "azure",
            Hue::Blue => "blue",
            Hue::Purple => "purple",
            Hue::Magenta => "magenta",
            Hue::Pink => "pink",
        }
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a [`Hue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHueError(pub String);

impl fmt::Display for ParseHueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown hue: {:?}", self.0)
    }
}

impl std::error::Error for ParseHueError {}

impl FromStr for Hue {
    type Err = ParseHueError;

    /// Parse a hue name, case-insensitively. `"gray"` is accepted for grey.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "gray" {
            return Ok(Hue::Grey);
        }
        Hue::ALL
            .iter()
            .copied()
            .find(|hue| hue.name() == wanted)
            .ok_or_else(|| ParseHueError(s.to_string()))
    }
}
