use astdot::codegen::{CppGenerator, SymbolSet};
use astdot::{AstError, AstResult};
use indoc::indoc;

#[test]
fn test_generate_wraps_program_body() -> AstResult<()> {
    let symbols = SymbolSet::from_names(["pi", "b", "a"])?;
    let mut generator = CppGenerator::new(symbols);
    generator.generate_code("pi = a * b;")?;

    let expected = indoc! {r#"
        #include <iostream>
        int main() {
        double a;
        double b;
        double pi;

        /* Begin program */

        pi = a * b;
        /* End program */

        std::cout << "a: " << a << std::endl;
        std::cout << "b: " << b << std::endl;
        std::cout << "pi: " << pi << std::endl;
        }
    "#};
    assert_eq!(generator.get_output(), expected);
    Ok(())
}

#[test]
fn test_generate_without_symbols() -> AstResult<()> {
    let mut generator = CppGenerator::new(SymbolSet::new());
    generator.generate_code("")?;

    let expected = indoc! {"
        #include <iostream>
        int main() {

        /* Begin program */


        /* End program */

        }
    "};
    assert_eq!(generator.get_output(), expected);
    Ok(())
}

#[test]
fn test_generate_replaces_previous_output() -> AstResult<()> {
    let mut generator = CppGenerator::new(SymbolSet::from_names(["x"])?);
    generator.generate_code("x = 1;")?;
    generator.generate_code("x = 2;")?;

    let output = generator.get_output();
    assert!(output.contains("x = 2;"));
    assert!(!output.contains("x = 1;"));
    assert_eq!(output.matches("#include <iostream>").count(), 1);
    Ok(())
}

#[test]
fn test_symbols_are_sorted_and_deduplicated() -> AstResult<()> {
    let mut symbols = SymbolSet::new();
    assert!(symbols.insert("zeta")?);
    assert!(symbols.insert("alpha")?);
    assert!(!symbols.insert("zeta")?);

    assert_eq!(symbols.len(), 2);
    assert!(symbols.contains("alpha"));
    assert_eq!(symbols.iter().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
    Ok(())
}

#[test]
fn test_invalid_symbol_is_rejected() {
    let mut symbols = SymbolSet::new();
    match symbols.insert("2fast") {
        Err(AstError::InvalidSymbol(name)) => assert_eq!(name, "2fast"),
        other => panic!("expected invalid symbol, got {:?}", other),
    }
    assert!(SymbolSet::from_names(["ok", "not ok"]).is_err());
    assert!(symbols.is_empty());
}
