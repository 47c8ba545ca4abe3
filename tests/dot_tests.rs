use astdot::ast::{Binary, Block, Conditional, Literal, Unary};
use astdot::{dot, samples, AstError, AstNode, AstResult, Node, Program};

// Wraps body lines in the digraph preamble/postamble, one tab per line.
fn digraph(body: &[&str]) -> String {
    let mut expected = String::from("digraph G {\n");
    for line in body {
        expected.push('\t');
        expected.push_str(line);
        expected.push('\n');
    }
    expected.push_str("}\n");
    expected
}

fn edge_lines(dot: &str) -> Vec<&str> {
    dot.lines().filter(|line| line.contains(" -> ")).collect()
}

fn label_lines(dot: &str) -> Vec<&str> {
    dot.lines().filter(|line| line.contains("label=")).collect()
}

#[test]
fn test_empty_program() -> AstResult<()> {
    let program = Program::default();
    assert_eq!(program.serialize()?, digraph(&["root [label=\"Block\"]"]));
    Ok(())
}

#[test]
fn test_literal_rendering() -> AstResult<()> {
    let program = Program::from_root(Literal::new("root", "Identifier", "pi"));
    let dot = program.serialize()?;
    assert_eq!(dot, digraph(&["root [shape=box,label=\"Identifier: pi\"]"]));
    Ok(())
}

#[test]
fn test_assignment_end_to_end() -> AstResult<()> {
    let program = samples::assignment_program()?;
    let dot = program.serialize()?;

    let expected = digraph(&[
        "root [label=\"Block\"]",
        "root -> root_0;",
        "root_0 [label=\"Assignment\"]",
        "root_0 -> root_0_left;",
        "root_0_left [shape=box,label=\"Identifier: pi\"]",
        "root_0 -> root_0_right;",
        "root_0_right [label=\"TIMES\"]",
        "root_0_right -> root_0_right_left;",
        "root_0_right_left [shape=box,label=\"Identifier: a\"]",
        "root_0_right -> root_0_right_right;",
        "root_0_right_right [shape=box,label=\"Identifier: b\"]",
    ]);
    assert_eq!(dot, expected);
    assert_eq!(label_lines(&dot).len(), 6);
    assert_eq!(edge_lines(&dot).len(), 5);
    Ok(())
}

#[test]
fn test_nested_sample_skips_unset_optional_slots() -> AstResult<()> {
    let program = samples::nested_program()?;
    let dot = program.serialize()?;

    let expected = digraph(&[
        "root [label=\"Block\"]",
        "root -> root_0;",
        "root_0 [label=\"Assignment\"]",
        "root_0 -> root_0_left;",
        "root_0_left [shape=box,label=\"Identifier: pi\"]",
        "root_0 -> root_0_right;",
        "root_0_right [label=\"TIMES\"]",
        "root_0_right -> root_0_right_left;",
        "root_0_right_left [shape=box,label=\"Identifier: a\"]",
        "root_0_right -> root_0_right_right;",
        "root_0_right_right [shape=box,label=\"Identifier: b\"]",
        "root -> root_1;",
        "root_1 [label=\"If\"]",
        "root_1 -> root_1_cond;",
        "root_1_cond [label=\"GT\"]",
        "root_1_cond -> root_1_cond_left;",
        "root_1_cond_left [shape=box,label=\"Identifier: a\"]",
        "root_1_cond -> root_1_cond_right;",
        "root_1_cond_right [shape=box,label=\"Integer: 2\"]",
        "root_1 -> root_1_if;",
        "root_1_if [label=\"Block\"]",
        "root_1_if -> root_1_if_0;",
        "root_1_if_0 [label=\"Assignment\"]",
        "root_1_if -> root_1_if_1;",
        "root_1_if_1 [label=\"If\"]",
        "root_1_if_1 -> root_1_if_1_cond;",
        "root_1_if_1_cond [label=\"NOT\"]",
        "root_1_if_1 -> root_1_if_1_if;",
        "root_1_if_1_if [label=\"Block\"]",
    ]);
    assert_eq!(dot, expected);
    Ok(())
}

#[test]
fn test_serialize_is_idempotent() -> AstResult<()> {
    let program = samples::nested_program()?;
    let first = program.serialize()?;
    let second = program.serialize()?;
    assert_eq!(first, second);
    assert_eq!(dot::serialize(&program)?, first);
    Ok(())
}

#[test]
fn test_edge_count_matches_non_root_nodes() -> AstResult<()> {
    for program in [samples::assignment_program()?, samples::nested_program()?] {
        let dot = program.serialize()?;
        let stats = program.stats()?;
        assert_eq!(edge_lines(&dot).len(), stats.nodes - 1);
        assert_eq!(label_lines(&dot).len(), stats.nodes);
        assert_eq!(stats.edges, stats.nodes - 1);
    }
    Ok(())
}

#[test]
fn test_block_children_are_not_interleaved() -> AstResult<()> {
    let mut root = Block::new("root");
    for _ in 0..3 {
        let id = root.next_child_id();
        let child = root.push_child(Unary::new(id, "NEG")).as_unary_mut()?;
        let leaf = format!("{}_child", child.id());
        child.set_child(Literal::new(leaf, "Integer", "1"))?;
    }
    let dot = Program::from_root(root).serialize()?;

    let edges = edge_lines(&dot);
    assert_eq!(
        edges,
        vec![
            "\troot -> root_0;",
            "\troot_0 -> root_0_child;",
            "\troot -> root_1;",
            "\troot_1 -> root_1_child;",
            "\troot -> root_2;",
            "\troot_2 -> root_2_child;",
        ]
    );
    Ok(())
}

#[test]
fn test_conditional_without_alternatives_has_two_edges() -> AstResult<()> {
    let mut cond = Conditional::new("root");
    cond.set_condition(Literal::new("root_cond", "Identifier", "flag"))?;
    cond.set_then(Block::new("root_if"))?;
    let dot = Program::from_root(cond).serialize()?;

    assert_eq!(
        dot,
        digraph(&[
            "root [label=\"If\"]",
            "root -> root_cond;",
            "root_cond [shape=box,label=\"Identifier: flag\"]",
            "root -> root_if;",
            "root_if [label=\"Block\"]",
        ])
    );
    Ok(())
}

#[test]
fn test_conditional_alternatives_follow_declared_order() -> AstResult<()> {
    let mut cond = Conditional::new("root");
    // Filled in reverse to show that output order does not depend on it.
    cond.set_else(Block::new("root_else"))?;
    let elif = cond.set_elif(Binary::new("root_elif", "Elif"))?;
    elif.set_left(Literal::new("root_elif_left", "Identifier", "b"))?;
    elif.set_right(Block::new("root_elif_right"))?;
    cond.set_then(Block::new("root_if"))?;
    cond.set_condition(Literal::new("root_cond", "Identifier", "a"))?;

    let dot = Program::from_root(cond).serialize()?;
    let edges = edge_lines(&dot);
    assert_eq!(
        edges,
        vec![
            "\troot -> root_cond;",
            "\troot -> root_if;",
            "\troot -> root_elif;",
            "\troot_elif -> root_elif_left;",
            "\troot_elif -> root_elif_right;",
            "\troot -> root_else;",
        ]
    );
    Ok(())
}

#[test]
fn test_missing_condition_is_malformed() {
    let mut root = Block::new("root");
    let id = root.next_child_id();
    root.push_child(Conditional::new(id));
    let program = Program::from_root(root);

    match program.serialize() {
        Err(AstError::MalformedTree { node, slot }) => {
            assert_eq!(node, "root_0");
            assert_eq!(slot, "cond");
        }
        other => panic!("expected malformed tree, got {:?}", other),
    }
}

#[test]
fn test_missing_then_block_is_malformed() -> AstResult<()> {
    let mut cond = Conditional::new("root");
    cond.set_condition(Literal::new("root_cond", "Identifier", "a"))?;
    let program = Program::from_root(cond);
    assert!(matches!(
        program.serialize(),
        Err(AstError::MalformedTree { slot: "if", .. })
    ));
    Ok(())
}

#[test]
fn test_program_without_root_is_malformed() {
    let mut program = Program::default();
    program.take_root();
    assert!(matches!(
        program.serialize(),
        Err(AstError::MalformedTree { slot: "root", .. })
    ));
}

#[test]
fn test_write_dot_leaves_sink_empty_on_failure() -> AstResult<()> {
    let mut root = Block::new("root");
    root.push_child(Literal::new("root_0", "Identifier", "x"));
    root.push_child(Conditional::new("root_1"));
    let program = Program::from_root(root);

    let mut sink: Vec<u8> = Vec::new();
    assert!(program.write_dot(&mut sink).is_err());
    assert!(sink.is_empty());

    let program = samples::assignment_program()?;
    program.write_dot(&mut sink)?;
    assert_eq!(String::from_utf8_lossy(&sink), program.serialize()?);
    Ok(())
}

#[test]
fn test_quotes_in_labels_are_escaped() -> AstResult<()> {
    let program = Program::from_root(Literal::new("root", "String", "say \"hi\""));
    let dot = program.serialize()?;
    assert_eq!(dot, digraph(&["root [shape=box,label=\"String: say \\\"hi\\\"\"]"]));
    Ok(())
}

#[test]
fn test_backslashes_in_labels_are_escaped() -> AstResult<()> {
    let program = Program::from_root(Literal::new("root", "Path", "C:\\"));
    let dot = program.serialize()?;
    assert_eq!(dot, digraph(&["root [shape=box,label=\"Path: C:\\\\\"]"]));

    let program = Program::from_root(Literal::new("root", "String", "a\\\"b"));
    let dot = program.serialize()?;
    assert_eq!(dot, digraph(&["root [shape=box,label=\"String: a\\\\\\\"b\"]"]));
    Ok(())
}

#[test]
fn test_identifier_check() -> AstResult<()> {
    samples::nested_program()?.check_identifiers()?;

    let mut root = Block::new("root");
    root.push_child(Literal::new("root_0", "Identifier", "a"));
    root.push_child(Literal::new("root_0", "Identifier", "b"));
    let program = Program::from_root(root);
    match program.check_identifiers() {
        Err(AstError::DuplicateIdentifier { id }) => assert_eq!(id, "root_0"),
        other => panic!("expected duplicate identifier, got {:?}", other),
    }
    // Duplicates are the builder's problem; serialization still succeeds.
    assert_eq!(edge_lines(&program.serialize()?).len(), 2);

    let program = Program::from_root(Node::new_literal("root-0", "Identifier", "a"));
    assert!(matches!(
        program.check_identifiers(),
        Err(AstError::InvalidIdentifier { .. })
    ));

    // Keywords would be read as graph statements instead of nodes.
    let mut root = Block::new("graph");
    root.push_child(Literal::new("node", "Identifier", "a"));
    match Program::from_root(root).check_identifiers() {
        Err(AstError::InvalidIdentifier { id }) => assert_eq!(id, "graph"),
        other => panic!("expected invalid identifier, got {:?}", other),
    }
    for keyword in ["Node", "EDGE", "subgraph", "Digraph", "strict"] {
        let program = Program::from_root(Block::new(keyword));
        assert!(program.check_identifiers().is_err(), "{} accepted", keyword);
    }
    Program::from_root(Block::new("nodes")).check_identifiers()?;
    Ok(())
}

#[test]
fn test_stats_for_nested_sample() -> AstResult<()> {
    let stats = samples::nested_program()?.stats()?;
    assert_eq!(stats.nodes, 15);
    assert_eq!(stats.edges, 14);
    assert_eq!(stats.leaves, 8);
    assert_eq!(stats.depth, 5);
    let root = samples::nested_program()?;
    assert_eq!(root.root()?.children().len(), 2);
    Ok(())
}
