//! Human-readable dump of a matrix.
//!
//! ```text
//! [
//! 1.00,2.00,
//! 3.00,4.00,
//! ]
//!
//! ```
//!
//! Every element has two fractional digits and a trailing comma, every row
//! ends with a newline, and the closing bracket is followed by a blank
//! line. The format is for people; nothing parses it back.

use std::fmt;
use std::io;

use super::Matrix;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:.2},", self.data[self.offset(i, j)])?;
            }
            writeln!(f)?;
        }
        write!(f, "]\n\n")
    }
}

impl Matrix {
    /// Writes the diagnostic dump to `sink`.
    ///
    /// # Errors
    ///
    /// Whatever the sink returns.
    pub fn format_to<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_with_two_decimals() {
        let m = Matrix::from_vec(2, 2, vec![1.0, -2.5, 3.333, 4.0]).unwrap();
        let mut out = Vec::new();
        m.format_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\n1.00,-2.50,\n3.33,4.00,\n]\n\n"
        );
    }

    #[test]
    fn empty_matrix_is_just_brackets() {
        let m = Matrix::zeros(0, 0).unwrap();
        assert_eq!(m.to_string(), "[\n]\n\n");
    }

    struct BrokenSink;

    impl io::Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate() {
        let m = Matrix::identity(2, 2).unwrap();
        let err = m.format_to(&mut BrokenSink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
