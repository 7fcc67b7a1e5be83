use log::debug;

use crate::expression::ExpressionNode;
use crate::parser::Parse;
use crate::parser::errors::ParseError;
use crate::parser::tokenizer::{Token, tokenize};

/// Parser for prefix (Polish) notation, e.g. `- / 10 + 1 1 * 1 2`.
///
/// Tokens are reduced right to left on a single stack. Parentheses carry no
/// meaning in prefix notation and are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrefixParser;

impl Parse for PrefixParser {
    fn parse(&self, text: &str) -> Result<ExpressionNode, ParseError> {
        let tokens = tokenize(text)?;
        let mut stack: Vec<ExpressionNode> = Vec::with_capacity(tokens.len());

        for token in tokens.into_iter().rev() {
            match token {
                Token::Number(n) => stack.push(ExpressionNode::number(n)),
                Token::Operator(operator) => {
                    let available = stack.len();
                    // top of the stack is the operand written first
                    let (Some(first), Some(second)) = (stack.pop(), stack.pop()) else {
                        return Err(ParseError::InsufficientOperands {
                            operator,
                            available,
                        });
                    };
                    stack.push(ExpressionNode::binary(operator, first, second));
                }
                other @ Token::Paren(_) => {
                    return Err(ParseError::UnsupportedToken(other.to_string()));
                }
            }
        }

        if stack.len() != 1 {
            return Err(ParseError::MalformedExpression(stack.len()));
        }
        let root = stack
            .pop()
            .ok_or(ParseError::MalformedExpression(0))?;
        debug!("Parsed prefix expression: {} (depth {})", root, root.depth());
        Ok(root)
    }
}
