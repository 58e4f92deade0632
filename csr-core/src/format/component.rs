//! Component tags used to address the parts of a stored matrix

/// Named part of a stored CSR matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Component {
    /// The [`SparseMatrixMetadata`](crate::SparseMatrixMetadata) record
    Meta = 0,
    /// Row index pointers (`rows + 1` entries)
    IndPtr = 1,
    /// Column indices (`nz` entries)
    Inds = 2,
    /// Nonzero values (`nz` entries)
    NzData = 3,
}

impl Component {
    /// All components in load order
    pub const ALL: [Component; 4] = [
        Component::Meta,
        Component::IndPtr,
        Component::Inds,
        Component::NzData,
    ];

    /// Tag under which stores file this component
    pub const fn as_str(self) -> &'static str {
        match self {
            Component::Meta => "meta",
            Component::IndPtr => "indptr",
            Component::Inds => "inds",
            Component::NzData => "nzdata",
        }
    }

    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Component::Meta),
            1 => Some(Component::IndPtr),
            2 => Some(Component::Inds),
            3 => Some(Component::NzData),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown component tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownComponent;

impl core::fmt::Display for UnknownComponent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown matrix component tag")
    }
}

impl core::str::FromStr for Component {
    type Err = UnknownComponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meta" => Ok(Component::Meta),
            "indptr" => Ok(Component::IndPtr),
            "inds" => Ok(Component::Inds),
            "nzdata" => Ok(Component::NzData),
            _ => Err(UnknownComponent),
        }
    }
}
