use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod codegen;
pub mod dot;
pub mod samples;
pub mod utils;

pub const VERSION: &str = "0.1.0";

pub use ast::{AstNode, Node, NodeKind, Program};
pub use utils::errors::{AstError, AstResult};

pub fn read(filename: &Path) -> AstResult<String> {
    if !filename.is_file() {
        return Err(AstError::FileReadError(format!(
            "{} is not a readable file",
            filename.display()
        )));
    }
    // Open the path in read-only mode, returns `io::Result<File>`
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
