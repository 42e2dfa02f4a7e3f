/// Adds conversions `from` and `into` integer to enums
///
/// Takes an enum that must have a `#[repr()]` as first meta field and assigns a
/// value to all enum variants. Values without a variant are kept in an
/// additional `Unknown` variant.
///
/// ```
/// # use civetta_common::utils::convertible_enum;
/// convertible_enum!(
///     #[repr(u16)]
///     #[derive(Debug, PartialEq)]
///     pub enum Kind {
///         Short = 3,
///         Long = 4,
///     }
/// );
/// let int: u16 = Kind::Long.into();
/// assert_eq!(int, 4);
/// assert_eq!(Kind::from(3), Kind::Short);
/// assert_eq!(Kind::from(11), Kind::Unknown(11));
/// ```
#[macro_export]
macro_rules! convertible_enum {
    (#[repr($type:ty)]$(#[$meta:meta])* $visibility:vis enum $enum_name:ident {
        $($(#[$variant_meta:meta])* $variant_name:ident = $variant_value:expr,)*
    }) => {
        #[repr($type)]
        $(#[$meta])*
        $visibility enum $enum_name {
            $($(#[$variant_meta])* $variant_name = $variant_value,)*
            Unknown($type)
        }

        impl std::convert::From<$type> for $enum_name {
            fn from(v: $type) -> Self {
                match v {
                    $(x if x == $variant_value => Self::$variant_name,)*
                    other => Self::Unknown(other),
                }
            }
        }

        impl std::convert::From<$enum_name> for $type {
            fn from(v: $enum_name) -> $type {
                match v {
                    $($enum_name::$variant_name => $variant_value,)*
                    $enum_name::Unknown(other) => other,
                }
            }
        }
    }
}

/// Adds conversions `try_from` and `into` integer to enums
///
/// Takes an enum that must have a `#[repr()]` as first meta field and assigns a
/// value to all enum variants.
///
/// ```
/// # use civetta_common::utils::maybe_convertible_enum;
/// maybe_convertible_enum!(
///     #[repr(u8)]
///     #[derive(Debug, PartialEq)]
///     pub enum Test {
///         Val1 = 1,
///         Val2 = 2,
///     }
/// );
/// let int: u8 = Test::Val2.into();
/// assert_eq!(int, 2);
/// assert_eq!(Test::try_from(2), Ok(Test::Val2));
/// assert_eq!(Test::try_from(3), Err(UnknownTestValueError(3)));
/// ```
#[macro_export]
macro_rules! maybe_convertible_enum {
    (#[repr($type:ty)]$(#[$meta:meta])* $visibility:vis enum $enum_name:ident {
        $($(#[$variant_meta:meta])* $variant_name:ident = $variant_value:expr,)*
    }) => {
        #[repr($type)]
        $(#[$meta])*
        $visibility enum $enum_name {
            $($(#[$variant_meta])* $variant_name = $variant_value,)*
        }

        paste::paste! {
            #[derive(Debug, PartialEq, Eq, Clone, Copy)]
            pub struct [<Unknown $enum_name ValueError>](pub $type);

            impl std::fmt::Display for [<Unknown $enum_name ValueError>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!("Enum '", stringify!($enum_name), "' has no variant with value '{}'"), self.0)
                }
            }

            impl std::error::Error for [<Unknown $enum_name ValueError>] {}

            impl std::convert::TryFrom<$type> for $enum_name {
                type Error = [<Unknown $enum_name ValueError>];
                fn try_from(v: $type) -> Result<Self, Self::Error> {
                    match v {
                        $(x if x == $variant_value => Ok(Self::$variant_name),)*
                        other => Err([<Unknown $enum_name ValueError>](other)),
                    }
                }
            }
        }

        impl std::convert::From<$enum_name> for $type {
            fn from(v: $enum_name) -> $type {
                match v {
                    $($enum_name::$variant_name => $variant_value,)*
                }
            }
        }
    }
}

pub use {convertible_enum, maybe_convertible_enum};

/// Four character code as big endian [`u32`]
///
/// Allows to use four character codes as enum discriminants.
///
/// ```
/// # use civetta_common::utils::fourcc;
/// assert_eq!(fourcc(b"meta"), 0x6D65_7461);
/// ```
pub const fn fourcc(d: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*d)
}

/// Writes a four character code as text if it is printable ASCII
///
/// ```
/// # use civetta_common::utils::FourCc;
/// assert_eq!(FourCc(*b"Exif").to_string(), "Exif");
/// assert_eq!(FourCc([0, 1, 2, 3]).to_string(), "0x00010203");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc(pub [u8; 4]);

impl std::fmt::Display for FourCc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.iter().all(|x| x.is_ascii_graphic() || *x == b' ') {
            for c in self.0 {
                write!(f, "{}", char::from(c))?;
            }
            Ok(())
        } else {
            write!(f, "0x{:08X}", u32::from_be_bytes(self.0))
        }
    }
}

impl std::fmt::Debug for FourCc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
