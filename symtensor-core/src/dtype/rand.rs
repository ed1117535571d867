use rand::{distributions::Uniform, Rng};
use rand_distr::{Distribution, Normal};

// Optional half-precision types
#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

use crate::Result;

/// Dispatch random fills based on the data type.
pub trait RandDispatch {
    /// Fill the slice with values drawn uniformly from `[low, high)`.
    fn fill_with_uniform<R: Rng + ?Sized>(
        rng: &mut R,
        slice: &mut [Self],
        low: Self,
        high: Self,
    ) -> Result<()>
    where
        Self: Sized;

    /// Fill the slice with normal (Gaussian) random values.
    fn fill_with_normal<R: Rng + ?Sized>(
        rng: &mut R,
        slice: &mut [Self],
        mean: Self,
        std: Self,
    ) -> Result<()>
    where
        Self: Sized;
}

macro_rules! check_range {
    ($low:expr, $high:expr) => {
        if !($low < $high) {
            crate::bail!("Uniform random fill needs low < high, got {:?}..{:?}", $low, $high)
        }
    };
}

// Floats: support both uniform and normal
macro_rules! rand_float {
    ($t:ident) => {
        impl RandDispatch for $t {
            fn fill_with_uniform<R: Rng + ?Sized>(
                rng: &mut R,
                slice: &mut [Self],
                low: Self,
                high: Self,
            ) -> Result<()> {
                check_range!(low, high);
                let dist = Uniform::new(low, high);
                slice.iter_mut().for_each(|x| *x = dist.sample(rng));
                Ok(())
            }

            fn fill_with_normal<R: Rng + ?Sized>(
                rng: &mut R,
                slice: &mut [Self],
                mean: Self,
                std: Self,
            ) -> Result<()> {
                let dist = Normal::new(mean, std).map_err(crate::Error::msg)?;
                slice.iter_mut().for_each(|x| *x = dist.sample(rng));
                Ok(())
            }
        }
    };
}

// Integers: uniform only
macro_rules! rand_integral {
    ($t:ident) => {
        impl RandDispatch for $t {
            fn fill_with_uniform<R: Rng + ?Sized>(
                rng: &mut R,
                slice: &mut [Self],
                low: Self,
                high: Self,
            ) -> Result<()> {
                check_range!(low, high);
                let dist = Uniform::new(low, high);
                slice.iter_mut().for_each(|x| *x = dist.sample(rng));
                Ok(())
            }

            fn fill_with_normal<R: Rng + ?Sized>(
                _rng: &mut R,
                _slice: &mut [Self],
                _mean: Self,
                _std: Self,
            ) -> Result<()> {
                crate::bail!(
                    "Normal random fill is not supported for dtype {}",
                    stringify!($t)
                )
            }
        }
    };
}

rand_float!(f32);
rand_float!(f64);
rand_integral!(i8);
rand_integral!(i16);
rand_integral!(i32);
rand_integral!(i64);

// Half types sample in f32 and round.
#[cfg(any(feature = "half", feature = "bfloat"))]
macro_rules! rand_half {
    ($t:ident) => {
        impl RandDispatch for $t {
            fn fill_with_uniform<R: Rng + ?Sized>(
                rng: &mut R,
                slice: &mut [Self],
                low: Self,
                high: Self,
            ) -> Result<()> {
                check_range!(low, high);
                let dist = Uniform::new(low.to_f32(), high.to_f32());
                slice
                    .iter_mut()
                    .for_each(|x| *x = $t::from_f32(dist.sample(rng)));
                Ok(())
            }

            fn fill_with_normal<R: Rng + ?Sized>(
                rng: &mut R,
                slice: &mut [Self],
                mean: Self,
                std: Self,
            ) -> Result<()> {
                let dist = Normal::new(mean.to_f32(), std.to_f32()).map_err(crate::Error::msg)?;
                slice
                    .iter_mut()
                    .for_each(|x| *x = $t::from_f32(dist.sample(rng)));
                Ok(())
            }
        }
    };
}

#[cfg(feature = "half")]
rand_half!(f16);
#[cfg(feature = "bfloat")]
rand_half!(bf16);
