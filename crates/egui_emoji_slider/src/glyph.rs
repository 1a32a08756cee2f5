//! Named emoji and the text they render as.

use std::sync::LazyLock;

/// Something went wrong turning a code point into a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GlyphError {
    /// The value is a surrogate or lies above `U+10FFFF`.
    #[error("U+{0:04X} is not a Unicode scalar value")]
    InvalidCodePoint(u32),
}

/// Decode a single Unicode scalar value into a displayable string.
///
/// ```
/// assert_eq!(egui_emoji_slider::glyph_for(0x1F525), Ok("🔥".to_owned()));
/// ```
///
/// # Errors
/// Returns [`GlyphError::InvalidCodePoint`] for surrogates and values above `U+10FFFF`.
pub fn glyph_for(code_point: u32) -> Result<String, GlyphError> {
    char::from_u32(code_point)
        .map(String::from)
        .ok_or(GlyphError::InvalidCodePoint(code_point))
}

/// Number of UTF-16 code units the glyph occupies.
///
/// Text APIs that work in UTF-16 see two units (a surrogate pair) for anything
/// outside the Basic Multilingual Plane.
pub fn utf16_len(glyph: &str) -> usize {
    glyph.encode_utf16().count()
}

/// The emoji the slider knows by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Emoji {
    /// U+1F60A smiling face with smiling eyes.
    Smiley,
    /// U+2764 heavy black heart.
    Heart,
    /// U+1F60D smiling face with heart-shaped eyes.
    #[default]
    LoveFace,
    /// U+1F602 face with tears of joy.
    FunnyFace,
    /// U+1F60B face savouring delicious food.
    YummyFace,
    /// U+1F44F clapping hands.
    Claps,
    /// U+1F525 fire.
    Fire,
    /// U+1F621 pouting face.
    AngryFace,
    /// U+1F4A9 pile of poo.
    ShittyFace,
    /// U+1F47B ghost.
    Ghost,
    /// U+1F47D extraterrestrial alien.
    Alien,
    /// U+1F44D thumbs up.
    ThumbsUp,
    /// U+1F44E thumbs down.
    ThumbsDown,
    /// U+1F44A fisted hand.
    Punch,
    /// U+1F494 broken heart.
    BrokenHeart,
}

static GLYPHS: LazyLock<[String; 15]> = LazyLock::new(|| {
    // Every entry in the table is a valid scalar value.
    Emoji::ALL.map(|emoji| glyph_for(emoji.code_point()).unwrap_or_default())
});

impl Emoji {
    /// Every emoji, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Smiley,
        Self::Heart,
        Self::LoveFace,
        Self::FunnyFace,
        Self::YummyFace,
        Self::Claps,
        Self::Fire,
        Self::AngryFace,
        Self::ShittyFace,
        Self::Ghost,
        Self::Alien,
        Self::ThumbsUp,
        Self::ThumbsDown,
        Self::Punch,
        Self::BrokenHeart,
    ];

    /// The Unicode scalar value of the emoji.
    pub const fn code_point(self) -> u32 {
        match self {
            Self::Smiley => 0x1F60A,
            Self::Heart => 0x2764,
            Self::LoveFace => 0x1F60D,
            Self::FunnyFace => 0x1F602,
            Self::YummyFace => 0x1F60B,
            Self::Claps => 0x1F44F,
            Self::Fire => 0x1F525,
            Self::AngryFace => 0x1F621,
            Self::ShittyFace => 0x1F4A9,
            Self::Ghost => 0x1F47B,
            Self::Alien => 0x1F47D,
            Self::ThumbsUp => 0x1F44D,
            Self::ThumbsDown => 0x1F44E,
            Self::Punch => 0x1F44A,
            Self::BrokenHeart => 0x1F494,
        }
    }

    /// camelCase name, e.g. `"loveFace"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Smiley => "smiley",
            Self::Heart => "heart",
            Self::LoveFace => "loveFace",
            Self::FunnyFace => "funnyFace",
            Self::YummyFace => "yummyFace",
            Self::Claps => "claps",
            Self::Fire => "fire",
            Self::AngryFace => "angryFace",
            Self::ShittyFace => "shittyFace",
            Self::Ghost => "ghost",
            Self::Alien => "alien",
            Self::ThumbsUp => "thumbsUp",
            Self::ThumbsDown => "thumbsDown",
            Self::Punch => "punch",
            Self::BrokenHeart => "brokenHeart",
        }
    }

    /// Look up an emoji by its [`Self::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|emoji| emoji.name() == name)
    }

    /// The rendered text, built once on first use.
    pub fn glyph(self) -> &'static str {
        &GLYPHS[self as usize]
    }
}

impl std::fmt::Display for Emoji {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
