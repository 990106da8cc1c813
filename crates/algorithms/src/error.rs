//! Error handling for curve and field operations.

use core::fmt;

/// The error type shared by every curvekit operation.
///
/// Errors are always returned, never panicked; operations that can fail in
/// constant time (inversion, square roots, decompression) surface their
/// failure through these variants at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A byte encoding was structurally invalid: bad sign byte, x-coordinate
    /// out of range, a right-hand side with no square root, or a
    /// non-canonical Ristretto/Ed448/Gt encoding.
    InvalidEncoding,
    /// Attempted to invert zero.
    NotInverse,
    /// Attempted the square root of a quadratic non-residue.
    NotSquare,
    /// A serialization envelope referenced an unknown curve name.
    UnrecognizedCurve,
    /// A binary operation received operands from different curves.
    InvalidType,
    /// `set(x, y)` received coordinates that are neither on the curve nor
    /// the identity sentinel.
    InvalidCoordinates,
    /// A byte-slice input had the wrong length.
    InvalidLength {
        /// Context where the length was checked.
        context: &'static str,
        /// Expected length in bytes.
        expected: usize,
        /// Length that was actually supplied.
        actual: usize,
    },
    /// The caller-supplied random source returned fewer bytes than required.
    InsufficientEntropy,
}

/// Result alias used throughout the curvekit crates.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEncoding => write!(f, "invalid point or scalar encoding"),
            Error::NotInverse => write!(f, "inverse does not exist"),
            Error::NotSquare => write!(f, "value is not a quadratic residue"),
            Error::UnrecognizedCurve => write!(f, "unrecognized curve name"),
            Error::InvalidType => write!(f, "operands belong to different curves"),
            Error::InvalidCoordinates => write!(f, "coordinates are not on the curve"),
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::InsufficientEntropy => write!(f, "random source ran out of bytes"),
        }
    }
}

impl std::error::Error for Error {}

/// Check a slice length, mapping a mismatch to `Error::InvalidLength`.
#[inline]
pub fn expect_len(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            context,
            expected,
            actual,
        })
    }
}
