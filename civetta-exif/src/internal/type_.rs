civetta_common::utils::convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Type of the values stored in an entry
    pub enum Type {
        Byte = 1,
        /// 7-bit ASCII terminated by NULL
        Ascii = 2,
        Short = 3,
        Long = 4,
        /// Two longs, numerator and denominator
        Rational = 5,
        Undefined = 7,
        SLong = 9,
        /// Two signed longs, numerator and denominator
        SRational = 10,
    }
);

impl Type {
    /// Size of a single value in bytes
    ///
    /// Unknown types are treated as single bytes.
    pub fn size(self) -> u32 {
        match self {
            Self::Byte | Self::Ascii | Self::Undefined | Self::Unknown(_) => 1,
            Self::Short => 2,
            Self::Long | Self::SLong => 4,
            Self::Rational | Self::SRational => 8,
        }
    }

    pub fn u16(self) -> u16 {
        self.into()
    }
}
