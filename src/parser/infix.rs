use log::debug;

use crate::expression::{ExpressionNode, Operator};
use crate::parser::Parse;
use crate::parser::errors::ParseError;
use crate::parser::tokenizer::{Paren, Token, tokenize};

/// Binding priority per symbol. `(` only ever sits on the operator stack as
/// a sentinel and has the lowest priority so no operator pops it.
const OPERATOR_PRIORITIES: [(char, u8); 5] =
    [('+', 2), ('-', 2), ('*', 3), ('/', 3), ('(', 1)];

/// # Errors
///
/// Returns [`ParseError::InvalidOperatorPriority`] for symbols missing from
/// the priority table.
pub fn priority_of(symbol: char) -> Result<u8, ParseError> {
    OPERATOR_PRIORITIES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, priority)| *priority)
        .ok_or(ParseError::InvalidOperatorPriority(symbol))
}

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(Operator),
    OpenParen,
}

impl StackEntry {
    fn symbol(self) -> char {
        match self {
            StackEntry::Operator(op) => op.symbol(),
            StackEntry::OpenParen => '(',
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingOperator {
    entry: StackEntry,
    priority: u8,
}

impl PendingOperator {
    fn new(entry: StackEntry) -> Result<Self, ParseError> {
        Ok(Self {
            entry,
            priority: priority_of(entry.symbol())?,
        })
    }
}

/// Working storage of one shunting-yard pass
struct InfixContext {
    output: Vec<ExpressionNode>,
    operators: Vec<PendingOperator>,
}

impl InfixContext {
    fn with_capacity(tokens: usize) -> Self {
        Self {
            output: Vec::with_capacity(tokens),
            operators: Vec::with_capacity(tokens / 2),
        }
    }

    fn push_operator(&mut self, op: Operator) -> Result<(), ParseError> {
        let incoming = PendingOperator::new(StackEntry::Operator(op))?;
        // equal priority pops as well, which makes same-level chains left-associative
        while self
            .operators
            .last()
            .is_some_and(|top| top.priority >= incoming.priority)
        {
            self.pop_and_reduce()?;
        }
        self.operators.push(incoming);
        Ok(())
    }

    fn close_paren(&mut self) -> Result<(), ParseError> {
        loop {
            match self.operators.pop() {
                None => return Err(ParseError::UnmatchedParenthesis),
                Some(PendingOperator {
                    entry: StackEntry::OpenParen,
                    ..
                }) => return Ok(()),
                Some(PendingOperator {
                    entry: StackEntry::Operator(op),
                    ..
                }) => self.reduce(op)?,
            }
        }
    }

    fn pop_and_reduce(&mut self) -> Result<(), ParseError> {
        match self.operators.pop().map(|pending| pending.entry) {
            Some(StackEntry::Operator(op)) => self.reduce(op),
            // an open paren still on the stack when reducing was never closed
            Some(StackEntry::OpenParen) | None => Err(ParseError::UnmatchedParenthesis),
        }
    }

    /// Replace the last two output nodes by a single binary node
    fn reduce(&mut self, operator: Operator) -> Result<(), ParseError> {
        let available = self.output.len();
        let (Some(right), Some(left)) = (self.output.pop(), self.output.pop()) else {
            return Err(ParseError::InsufficientOperands {
                operator,
                available,
            });
        };
        debug!("Reducing {} {} {}", left, operator, right);
        self.output.push(ExpressionNode::binary(operator, left, right));
        Ok(())
    }

    fn finish(mut self) -> Result<ExpressionNode, ParseError> {
        while !self.operators.is_empty() {
            self.pop_and_reduce()?;
        }
        // stray operands such as `1 2` are only caught here
        match (self.output.pop(), self.output.len()) {
            (Some(root), 0) => Ok(root),
            (Some(_), rest) => Err(ParseError::MalformedExpression(rest + 1)),
            (None, _) => Err(ParseError::MalformedExpression(0)),
        }
    }
}

/// Shunting-yard parser for infix notation with `+ - * /` and parentheses
#[derive(Debug, Default, Clone, Copy)]
pub struct InfixParser;

impl Parse for InfixParser {
    fn parse(&self, text: &str) -> Result<ExpressionNode, ParseError> {
        let tokens = tokenize(text)?;
        let mut ctx = InfixContext::with_capacity(tokens.len());

        for token in tokens {
            match token {
                Token::Number(n) => ctx.output.push(ExpressionNode::number(n)),
                Token::Operator(op) => ctx.push_operator(op)?,
                Token::Paren(Paren::Open) => ctx
                    .operators
                    .push(PendingOperator::new(StackEntry::OpenParen)?),
                Token::Paren(Paren::Close) => ctx.close_paren()?,
            }
        }

        let root = ctx.finish()?;
        debug!("Parsed infix expression: {} (depth {})", root, root.depth());
        Ok(root)
    }
}
