use std::fmt::Write;

use crate::utils::errors::AstResult;

/// Helper function for writing formatted lines to a buffer
/// Used by the DOT writer and the C++ generator
pub fn write_line(buf: &mut String, args: std::fmt::Arguments) -> AstResult<()> {
    buf.write_fmt(args)?;
    buf.push('\n');
    Ok(())
}
