pub mod concretetensor;
pub mod expression;

pub use concretetensor::Tensor;
pub use expression::{axis, FreeAxis, Slot, TensorExpression, TensorExpressionMut};
