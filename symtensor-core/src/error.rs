use std::fmt::Display;

use crate::FreeAxis;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A mutable access named two equal indices inside an antisymmetric group.
    /// Such an entry is identically zero and has no storage behind it.
    #[error("index {index:?} repeats a value inside antisymmetric group {group}, the entry is structurally zero")]
    DegenerateWrite { index: Vec<usize>, group: usize },

    #[error("invalid partition: {0}")]
    InvalidPartition(String),

    #[error("storage holds {got} elements but the layout needs {expected}")]
    StorageSize { expected: usize, got: usize },

    #[error("expected {expected} index arguments, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("no free axis is tagged `{0}`")]
    UnknownAxis(FreeAxis),

    #[error("expression still depends on free axes {0:?}")]
    UnboundAxes(Vec<FreeAxis>),

    #[error("Message: {0}")]
    Msg(String),

    #[error("{inner}\n{backtrace}")]
    WithBacktrace {
        inner: Box<Self>,
        backtrace: Box<std::backtrace::Backtrace>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new error based on a printable error message.
    pub fn msg<M: Display>(msg: M) -> Self {
        Self::Msg(msg.to_string()).bt()
    }

    pub fn bt(self) -> Self {
        let backtrace = std::backtrace::Backtrace::capture();
        match backtrace.status() {
            std::backtrace::BacktraceStatus::Disabled
            | std::backtrace::BacktraceStatus::Unsupported => self,
            _ => Self::WithBacktrace {
                inner: Box::new(self),
                backtrace: Box::new(backtrace),
            },
        }
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Msg(format!($msg).into()).bt())
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Msg(format!($err).into()).bt())
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Msg(format!($fmt, $($arg)*).into()).bt())
    };
}
