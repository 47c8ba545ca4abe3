/*
*                    astdot -- AST to Graphviz DOT.
*
* block       = { statement } ;
* statement   = assignment | conditional ;
* assignment  = identifier "=" expression ;
* conditional = "if" condition block [ "elif" condition block ] [ "else" block ] ;
* expression  = unary | expression binop expression | literal ;
* unary       = unop expression ;
* literal     = identifier | integer ;
*/

use crate::ast::{Binary, Block, Conditional, Literal, Program, Unary};
use crate::utils::errors::AstResult;

/// Common surface of every tree node, concrete variant or the `Node` sum.
pub trait AstNode {
    fn id(&self) -> &str;
    fn label(&self) -> &str;
    fn accept(&self, visitor: &mut dyn AstVisitor) -> AstResult<()>;
    /// Present children in declaration order; unset slots are skipped.
    fn children(&self) -> Vec<&dyn AstNode>;
}

pub trait AstVisitor {
    fn visit_literal(&mut self, node: &Literal) -> AstResult<()>;
    fn visit_unary(&mut self, node: &Unary) -> AstResult<()>;
    fn visit_binary(&mut self, node: &Binary) -> AstResult<()>;
    fn visit_block(&mut self, node: &Block) -> AstResult<()>;
    fn visit_conditional(&mut self, node: &Conditional) -> AstResult<()>;
    fn visit_program(&mut self, program: &Program) -> AstResult<()>;
}
