//! Wraps a translated program body into a standalone C++ program: one
//! `double` per symbol, the body, then a print statement per symbol.

mod symbols;

pub use symbols::SymbolSet;

use tracing::debug;

use crate::utils::config::cpp::{
    BEGIN_MARKER, END_MARKER, HEADER, MAIN_CLOSE, MAIN_OPEN, VARIABLE_TYPE,
};
use crate::utils::{write_line, AstResult};

pub struct CppGenerator {
    symbols: SymbolSet,
    output: String,
}

impl CppGenerator {
    pub fn new(symbols: SymbolSet) -> Self {
        Self {
            symbols,
            output: String::with_capacity(1024),
        }
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn generate_code(&mut self, program: &str) -> AstResult<()> {
        self.output.clear();
        write_line(&mut self.output, format_args!("{}", HEADER))?;
        write_line(&mut self.output, format_args!("{}", MAIN_OPEN))?;

        for symbol in self.symbols.iter() {
            write_line(&mut self.output, format_args!("{} {};", VARIABLE_TYPE, symbol))?;
        }

        write_line(&mut self.output, format_args!("\n{}\n", BEGIN_MARKER))?;
        write_line(&mut self.output, format_args!("{}", program))?;
        write_line(&mut self.output, format_args!("{}\n", END_MARKER))?;

        for symbol in self.symbols.iter() {
            write_line(
                &mut self.output,
                format_args!("std::cout << \"{0}: \" << {0} << std::endl;", symbol),
            )?;
        }

        write_line(&mut self.output, format_args!("{}", MAIN_CLOSE))?;
        debug!(
            symbols = self.symbols.len(),
            bytes = self.output.len(),
            "generated C++ program"
        );
        Ok(())
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }
}
