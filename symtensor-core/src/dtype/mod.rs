use std::{fmt::Debug, ops::Neg};

#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

pub use self::rand::RandDispatch;

mod rand;

/// Marker trait for tensor element types.
///
/// Antisymmetric groups store one representative per orbit and negate it on
/// odd permutations, so every element type must support negation. Reads of a
/// structurally-zero entry return [`DType::ZERO`].
pub trait DType:
    Debug + Copy + PartialEq + Neg<Output = Self> + Send + Sync + RandDispatch + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const NAME: &'static str;
}

macro_rules! dtype {
    ($rt:ident, $zero:expr, $one:expr) => {
        impl DType for $rt {
            const ZERO: $rt = $zero;
            const ONE: $rt = $one;
            const NAME: &'static str = stringify!($rt);
        }
    };
}

dtype!(i8, 0i8, 1i8);
dtype!(i16, 0i16, 1i16);
dtype!(i32, 0i32, 1i32);
dtype!(i64, 0i64, 1i64);
dtype!(f32, 0f32, 1f32);
dtype!(f64, 0f64, 1f64);

#[cfg(feature = "half")]
impl DType for f16 {
    const ZERO: f16 = f16::from_f64_const(0.0);
    const ONE: f16 = f16::from_f64_const(1.0);
    const NAME: &'static str = "f16";
}

#[cfg(feature = "bfloat")]
impl DType for bf16 {
    const ZERO: bf16 = bf16::from_f64_const(0.0);
    const ONE: bf16 = bf16::from_f64_const(1.0);
    const NAME: &'static str = "bf16";
}
