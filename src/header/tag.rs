use core::fmt;

use super::constants;

/// Universal tags understood by this codec
///
/// All of them fit in a single identifier byte: class universal,
/// and a tag number below 0x1f.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    Sequence,
}

impl Tag {
    /// The identifier byte of this tag
    pub const fn byte(self) -> u8 {
        match self {
            Tag::Boolean => constants::TAG_BOOLEAN,
            Tag::Integer => constants::TAG_INTEGER,
            Tag::BitString => constants::TAG_BIT_STRING,
            Tag::OctetString => constants::TAG_OCTET_STRING,
            Tag::Null => constants::TAG_NULL,
            Tag::ObjectIdentifier => constants::TAG_OID,
            Tag::Sequence => constants::TAG_SEQUENCE,
        }
    }

    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            constants::TAG_BOOLEAN => Some(Tag::Boolean),
            constants::TAG_INTEGER => Some(Tag::Integer),
            constants::TAG_BIT_STRING => Some(Tag::BitString),
            constants::TAG_OCTET_STRING => Some(Tag::OctetString),
            constants::TAG_NULL => Some(Tag::Null),
            constants::TAG_OID => Some(Tag::ObjectIdentifier),
            constants::TAG_SEQUENCE => Some(Tag::Sequence),
            _ => None,
        }
    }

    /// Whether the value is made of other DER values
    pub const fn is_constructed(self) -> bool {
        self.byte() & 0b0010_0000 != 0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Boolean => "BOOLEAN",
            Tag::Integer => "INTEGER",
            Tag::BitString => "BIT STRING",
            Tag::OctetString => "OCTET STRING",
            Tag::Null => "NULL",
            Tag::ObjectIdentifier => "OBJECT IDENTIFIER",
            Tag::Sequence => "SEQUENCE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Tag; 7] = [
        Tag::Boolean,
        Tag::Integer,
        Tag::BitString,
        Tag::OctetString,
        Tag::Null,
        Tag::ObjectIdentifier,
        Tag::Sequence,
    ];

    #[test]
    fn byte_mapping_is_bijective() {
        for tag in ALL {
            assert_eq!(Tag::from_byte(tag.byte()), Some(tag));
        }
    }

    #[test]
    fn unsupported_identifiers() {
        // SET, UTF8String, context specific [0] constructed, long form tag
        for byte in [0x31u8, 0x0c, 0xa0, 0x1f, 0x00] {
            assert_eq!(Tag::from_byte(byte), None, "0x{:02x}", byte);
        }
    }

    #[test]
    fn only_sequence_is_constructed() {
        for tag in ALL {
            assert_eq!(tag.is_constructed(), tag == Tag::Sequence);
        }
    }
}
