// DOT output format constants
pub mod dot {
    pub const PREAMBLE: &str = "digraph G {";
    pub const POSTAMBLE: &str = "}";
    pub const LINE_PREFIX: &str = "\t";
    pub const EDGE_ARROW: &str = " -> ";
    pub const EDGE_TERMINATOR: &str = ";";

    // Visual shape used for leaf nodes
    pub const LEAF_SHAPE: &str = "box";

    // Initial capacity of the serialization buffer
    pub const BUFFER_CAPACITY: usize = 1024;
}

// Node naming conventions
pub mod naming {
    use lazy_static::lazy_static;
    use regex::Regex;

    pub const SEPARATOR: &str = "_";
    pub const ROOT_ID: &str = "root";

    // Fixed labels for variants that do not take a caller label
    pub const BLOCK_LABEL: &str = "Block";
    pub const CONDITIONAL_LABEL: &str = "If";

    lazy_static! {
        // Unquoted DOT identifier: a name or a numeral
        pub static ref DOT_IDENTIFIER: Regex =
            Regex::new(r"^(?:[A-Za-z_][A-Za-z0-9_]*|-?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?))$")
                .expect("DOT identifier pattern");
    }

    // DOT keywords are case-insensitive and cannot name a node
    pub const DOT_KEYWORDS: &[&str] = &["node", "edge", "graph", "digraph", "subgraph", "strict"];

    pub fn is_dot_identifier(id: &str) -> bool {
        DOT_IDENTIFIER.is_match(id)
            && !DOT_KEYWORDS
                .iter()
                .any(|keyword| keyword.eq_ignore_ascii_case(id))
    }
}

// C++ generator text
pub mod cpp {
    use lazy_static::lazy_static;
    use regex::Regex;

    pub const HEADER: &str = "#include <iostream>";
    pub const MAIN_OPEN: &str = "int main() {";
    pub const MAIN_CLOSE: &str = "}";
    pub const VARIABLE_TYPE: &str = "double";
    pub const BEGIN_MARKER: &str = "/* Begin program */";
    pub const END_MARKER: &str = "/* End program */";

    lazy_static! {
        pub static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
            .expect("C++ identifier pattern");
    }

    pub fn is_identifier(name: &str) -> bool {
        IDENTIFIER.is_match(name)
    }
}
