// src/types.rs

/// FLV tag type enumeration
///
/// Only the three values the container format defines are listed. The 5-bit
/// field on the wire can hold other values; those are kept as raw `u8` on
/// [`Tag`](crate::Tag) and never rejected by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TagType {
    Audio = 8,
    Video = 9,
    ScriptData = 18,
}

impl TagType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            8 => Some(TagType::Audio),
            9 => Some(TagType::Video),
            18 => Some(TagType::ScriptData),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn is_audio(&self) -> bool {
        matches!(self, TagType::Audio)
    }

    pub fn is_video(&self) -> bool {
        matches!(self, TagType::Video)
    }

    pub fn is_script_data(&self) -> bool {
        matches!(self, TagType::ScriptData)
    }

    /// Get the name of the tag type as a string
    pub fn name(&self) -> &'static str {
        match self {
            TagType::Audio => "audio",
            TagType::Video => "video",
            TagType::ScriptData => "script_data",
        }
    }
}

impl From<TagType> for u8 {
    fn from(tag_type: TagType) -> u8 {
        tag_type.as_u8()
    }
}

/// First header byte: reserved(2) | filter(1) | tag type(5), MSB first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagFlags(u8);

impl TagFlags {
    pub const RESERVED_SHIFT: u8 = 6;
    pub const RESERVED_MASK: u8 = 0b11;
    pub const FILTER_SHIFT: u8 = 5;
    pub const FILTER_MASK: u8 = 0b1;
    pub const TAG_TYPE_MASK: u8 = 0b1_1111;

    pub fn new(byte: u8) -> Self {
        TagFlags(byte)
    }

    pub fn empty() -> Self {
        TagFlags(0)
    }

    /// Build the byte from its three fields. Each input is masked to its
    /// width, so an out-of-range value never spills into a neighbour.
    pub fn pack(reserved: u8, filter: u8, tag_type: u8) -> Self {
        TagFlags(
            (reserved & Self::RESERVED_MASK) << Self::RESERVED_SHIFT
                | (filter & Self::FILTER_MASK) << Self::FILTER_SHIFT
                | (tag_type & Self::TAG_TYPE_MASK),
        )
    }

    pub fn reserved(&self) -> u8 {
        (self.0 >> Self::RESERVED_SHIFT) & Self::RESERVED_MASK
    }

    pub fn filter(&self) -> u8 {
        (self.0 >> Self::FILTER_SHIFT) & Self::FILTER_MASK
    }

    pub fn tag_type(&self) -> u8 {
        self.0 & Self::TAG_TYPE_MASK
    }

    pub fn is_encrypted(&self) -> bool {
        self.filter() != 0
    }

    /// Same flags with the reserved bits cleared
    pub fn without_reserved(&self) -> Self {
        TagFlags(self.0 & !(Self::RESERVED_MASK << Self::RESERVED_SHIFT))
    }

    pub fn raw_value(&self) -> u8 {
        self.0
    }
}
