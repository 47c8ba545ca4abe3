//! Reference trees, built the way a parser would build them.

use crate::ast::naming::{make_name, slots};
use crate::ast::{AstNode, Binary, Block, Node, Program, Unary};
use crate::utils::AstResult;

/// `pi = a * b`
pub fn assignment_program() -> AstResult<Program> {
    let mut program = Program::default();
    let root = program.root_mut()?.as_block_mut()?;
    push_assignment(root)?;
    Ok(program)
}

/// `pi = a * b` followed by
/// ```text
/// if a > 2 {
///     <assignment>
///     if not <condition> {}
/// }
/// ```
/// Several slots are left unset on purpose; optional slots are skipped on
/// output.
pub fn nested_program() -> AstResult<Program> {
    let mut program = Program::default();
    let root = program.root_mut()?.as_block_mut()?;
    push_assignment(root)?;

    let id = root.next_child_id();
    let outer = root.push_child(Node::new_conditional(id)).as_conditional_mut()?;

    let cond_id = make_name(outer.id(), slots::CONDITION);
    let condition = outer.set_condition(Binary::new(cond_id, "GT"))?.as_binary_mut()?;
    let left = make_name(condition.id(), slots::LEFT);
    condition.set_left(Node::new_literal(left, "Identifier", "a"))?;
    let right = make_name(condition.id(), slots::RIGHT);
    condition.set_right(Node::new_literal(right, "Integer", "2"))?;

    let then_id = make_name(outer.id(), slots::THEN);
    let then_block = outer.set_then(Block::new(then_id))?;
    let id = then_block.next_child_id();
    then_block.push_child(Binary::new(id, "Assignment"));
    let id = then_block.next_child_id();
    let inner = then_block.push_child(Node::new_conditional(id)).as_conditional_mut()?;

    let cond_id = make_name(inner.id(), slots::CONDITION);
    inner.set_condition(Unary::new(cond_id, "NOT"))?;
    let then_id = make_name(inner.id(), slots::THEN);
    inner.set_then(Block::new(then_id))?;

    Ok(program)
}

fn push_assignment(block: &mut Block) -> AstResult<()> {
    let id = block.next_child_id();
    let assignment = block.push_child(Binary::new(id, "Assignment")).as_binary_mut()?;

    let left = make_name(assignment.id(), slots::LEFT);
    assignment.set_left(Node::new_literal(left, "Identifier", "pi"))?;

    let right = make_name(assignment.id(), slots::RIGHT);
    let times = assignment.set_right(Binary::new(right, "TIMES"))?.as_binary_mut()?;
    let left = make_name(times.id(), slots::LEFT);
    times.set_left(Node::new_literal(left, "Identifier", "a"))?;
    let right = make_name(times.id(), slots::RIGHT);
    times.set_right(Node::new_literal(right, "Identifier", "b"))?;
    Ok(())
}
