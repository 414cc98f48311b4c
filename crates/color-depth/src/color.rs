//! Color tuple type
//!
//! A [`ColorTuple`] is an RGB triple with an optional alpha component. The
//! numeric range of each component depends on the [`ColorDepth`] it is
//! interpreted at; the tuple itself only guarantees that values fit in a byte.
//!
//! [`ColorDepth`]: crate::ColorDepth

use std::fmt;

/// One of the three color channels of a tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All color channels in tuple order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of the channel inside an RGB(A) tuple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// An RGB color with an optional alpha component.
///
/// # Example
///
/// ```
/// use color_depth::ColorTuple;
///
/// let opaque = ColorTuple::rgb(255, 128, 0);
/// assert_eq!(opaque.component_count(), 3);
///
/// let translucent = ColorTuple::rgba(255, 128, 0, 64);
/// assert_eq!(translucent.component_count(), 4);
/// assert_eq!(translucent.to_string(), "255 128 0 64");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTuple {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha component, `None` for 3-component tuples
    pub a: Option<u8>,
}

impl ColorTuple {
    /// Create a 3-component tuple.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Create a 4-component tuple.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }

    /// Build a tuple from a 3- or 4-element slice.
    ///
    /// Returns `None` for any other length.
    pub fn from_slice(components: &[u8]) -> Option<Self> {
        match *components {
            [r, g, b] => Some(Self::rgb(r, g, b)),
            [r, g, b, a] => Some(Self::rgba(r, g, b, a)),
            _ => None,
        }
    }

    /// Returns true if the tuple carries an alpha component.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.a.is_some()
    }

    /// Number of components: 3 or 4.
    #[inline]
    pub const fn component_count(&self) -> usize {
        if self.a.is_some() {
            4
        } else {
            3
        }
    }

    /// The color channels as `[r, g, b]`.
    #[inline]
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Value of a single color channel.
    #[inline]
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Same color with the alpha component dropped.
    #[inline]
    pub const fn without_alpha(self) -> Self {
        Self::rgb(self.r, self.g, self.b)
    }

    /// Same color with the alpha component set.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Components in tuple order (3 or 4 values).
    pub fn components(&self) -> Vec<u8> {
        let mut out = self.channels().to_vec();
        out.extend(self.a);
        out
    }
}

impl From<[u8; 3]> for ColorTuple {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for ColorTuple {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for ColorTuple {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for ColorTuple {
    /// Space-separated components, the JASC-PAL body line form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)?;
        if let Some(a) = self.a {
            write!(f, " {}", a)?;
        }
        Ok(())
    }
}
