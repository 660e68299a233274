/// Logical value kind recorded in a key's meta entry.
///
/// The full enumeration is carried for on-disk compatibility; only `String`
/// and `Hash` values are ever materialized. Absent keys report the reserved
/// tag 0xFF ("none") at the command level without a stored meta entry.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    String = 0,
    List = 1,
    Set = 2,
    SortedSet = 3,
    Hash = 4,
}

impl DataType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::String),
            1 => Some(Self::List),
            2 => Some(Self::Set),
            3 => Some(Self::SortedSet),
            4 => Some(Self::Hash),
            _ => None,
        }
    }

    /// The name reported by the TYPE command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::List => "list",
            Self::Set => "set",
            Self::SortedSet => "zset",
            Self::Hash => "hash",
        }
    }
}
