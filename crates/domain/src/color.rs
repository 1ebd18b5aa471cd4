use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// RGB color assigned to a `Reminder`.
///
/// Every channel is expected to be in the range [0, 255]. Channels are kept
/// wider than a byte so that out of range input reaches the `ReminderBuilder`
/// and gets rejected there instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "R")]
    pub r: i32,
    #[serde(rename = "G")]
    pub g: i32,
    #[serde(rename = "B")]
    pub b: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl Display for ColorChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (short, name) = match self {
            Self::Red => ("R", "red"),
            Self::Green => ("G", "green"),
            Self::Blue => ("B", "blue"),
        };
        write!(f, "{} ({})", short, name)
    }
}

impl Color {
    pub const MAX_CHANNEL_VALUE: i32 = 255;

    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    pub fn channel(&self, channel: ColorChannel) -> i32 {
        match channel {
            ColorChannel::Red => self.r,
            ColorChannel::Green => self.g,
            ColorChannel::Blue => self.b,
        }
    }

    /// First channel, in R, G, B order, above `MAX_CHANNEL_VALUE`.
    /// Negative values are not considered out of range.
    pub fn channel_above_range(&self) -> Option<ColorChannel> {
        [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue]
            .iter()
            .copied()
            .find(|channel| self.channel(*channel) > Self::MAX_CHANNEL_VALUE)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
