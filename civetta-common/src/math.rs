//! Checked arithmetic
//!
//! Every offset and length in the supported formats is read from the file
//! itself. All arithmetic on those values goes through the helpers in this
//! module so that an overflow becomes an error instead of a wrap or a panic.

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Operation {0:?} + {1:?} failed")]
    AddFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} - {1:?} failed")]
    SubFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} * {1:?} failed")]
    MulFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} / {1:?} failed")]
    DivFailed(Option<i128>, Option<i128>),
    #[error("Conversion failed for value {0:?}")]
    ConversionFailed(Option<i128>),
}

/// Container for safe integer operations
///
/// Errors are carried through chained operations and only surface on
/// [`Checked::check`].
///
/// ```
/// # use civetta_common::math::Checked;
/// let offset = Checked::new(8_u32);
/// let count = Checked::new(3_u32);
///
/// assert_eq!((offset + count * 12_u32).check(), Ok(44));
/// assert!((Checked::new(u32::MAX) + 1_u32).check().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Checked<T>(Result<T, MathError>);

impl<T> Checked<T> {
    pub fn new(val: T) -> Self {
        Self(Ok(val))
    }

    pub fn check(self) -> Result<T, MathError> {
        self.0
    }
}

impl<T> From<T> for Checked<T> {
    fn from(val: T) -> Self {
        Self(Ok(val))
    }
}

impl<T> std::ops::Deref for Checked<T> {
    type Target = Result<T, MathError>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[macro_export]
/**
 * Redefines variables as [`Checked`].
 *
 * ```
 * use civetta_common::math::checked;
 *
 * let start = 10_usize;
 * let len = 4_usize;
 * checked![start, len];
 *
 * assert_eq!((start + len).check(), Ok(14));
 *
 * let start = usize::MAX;
 * let len = 1_usize;
 * checked![start];
 *
 * assert!((start + len).check().is_err());
 * ```
 */
macro_rules! checked [
    ($($v:ident$(,)?)*) => {
        $( let $v = $crate::math::Checked::new($v); )*
    };
];

pub use checked;

macro_rules! impl_operator {
    ($op:ident, $f:ident, $t:ty) => {
        paste::paste! {
            impl [< Safe $op >] for $t {
                fn [< safe_ $f >](self, rhs: $t) -> Result<$t, MathError> {
                    let err = || MathError:: [< $op Failed >] (self.try_into().ok(), rhs.try_into().ok());
                    self.[< checked_ $f >](rhs)
                        .ok_or_else(err)
                }
            }
        }

        impl<R: Into<Self> + Copy> std::ops::$op<R> for Checked<$t> {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: R) -> Self::Output {
                let Checked(Ok(x)) = self else { return self };
                let Checked(Ok(y)) = rhs.into() else { return rhs.into() };
                paste::paste! {
                    Checked(x.[< safe_ $f >](y))
                }
            }
        }
    };
}

macro_rules! impl_binary_operators {
    ($t:ty) => {
        impl_operator!(Add, add, $t);
        impl_operator!(Sub, sub, $t);
        impl_operator!(Mul, mul, $t);
        impl_operator!(Div, div, $t);
    };
}

macro_rules! impl_cast {
    ($t:ty, $target:ident) => {
        impl Checked<$t> {
            pub fn $target(self) -> Checked<$target> {
                let x = match self.0 {
                    Err(err) => return Checked(Err(err)),
                    Ok(v) => v,
                };
                Checked(
                    x.try_into()
                        .map_err(|_| MathError::ConversionFailed(x.try_into().ok())),
                )
            }
        }
    };
}

macro_rules! impl_casts {
    ($t:ty) => {
        impl_cast!($t, u16);
        impl_cast!($t, u32);
        impl_cast!($t, u64);
        impl_cast!($t, usize);
    };
}

impl_binary_operators!(u16);
impl_binary_operators!(u32);
impl_binary_operators!(u64);
impl_binary_operators!(usize);

impl_casts!(u16);
impl_casts!(u32);
impl_casts!(u64);
impl_casts!(usize);

pub trait ToU16: Sized + TryInto<u16> + TryInto<i128> + Copy {
    fn u16(self) -> Result<u16, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToU16 for u32 {}
impl ToU16 for u64 {}
impl ToU16 for usize {}

pub trait ToU32: Sized + TryInto<u32> + TryInto<i128> + Copy {
    fn u32(self) -> Result<u32, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToU32 for u16 {}
impl ToU32 for u64 {}
impl ToU32 for usize {}

pub trait ToU64: Sized + TryInto<u64> + TryInto<i128> + Copy {
    fn u64(self) -> Result<u64, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToU64 for u16 {}
impl ToU64 for u32 {}
impl ToU64 for usize {}

pub trait ToUsize: Sized + TryInto<usize> + TryInto<i128> + Copy {
    fn usize(self) -> Result<usize, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToUsize for u16 {}
impl ToUsize for u32 {}
impl ToUsize for u64 {}

/// Same as `checked_add` functions but returns an error
pub trait SafeAdd: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as `checked_sub` functions but returns an error
pub trait SafeSub: Sized {
    fn safe_sub(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as `checked_mul` functions but returns an error
pub trait SafeMul: Sized {
    fn safe_mul(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as `checked_div` functions but returns an error
pub trait SafeDiv: Sized {
    fn safe_div(self, rhs: Self) -> Result<Self, MathError>;
}

/// Converts an APEX aperture value to an f-number
///
/// Uses the exact relation `N = 2^(Av/2)`.
///
/// <https://en.wikipedia.org/wiki/APEX_system>
///
/// ```
/// # use civetta_common::math::apex_to_f_number;
/// assert!((apex_to_f_number(2.0) - 2.0).abs() < 1e-9);
/// assert!((apex_to_f_number(0.0) - 1.0).abs() < 1e-9);
/// ```
pub fn apex_to_f_number(apex: f64) -> f64 {
    (apex * std::f64::consts::LN_2 / 2.).exp()
}
