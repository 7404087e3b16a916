//! Lowering of infix expressions.
//!
//! Expressions are linearised with an operand stack and an operator stack. Every
//! time an operator is reduced, its two operands are combined into a fresh
//! temporary, which is pushed back onto the operand stack.
use log::{trace, warn};

use crate::{
    lexer::tokens::{Token, TokenKind},
    span::Span,
};

use super::{error::*, fixity::Fixity, generator::TacGenerator, BinOp, Name, TacInstr, Value};

/// Converts an operand token into the value it denotes.
pub(super) fn operand_value(token: &Token) -> Option<Value> {
    match token.kind {
        TokenKind::Number | TokenKind::String => Some(Value::Const(token.text.clone())),
        TokenKind::Identifier => Some(Value::Name(Name::Var(token.text.clone()))),
        _ => None,
    }
}

/// Whether `token` ends an expression. The terminator itself is not consumed.
fn is_terminator(token: &Token) -> bool {
    token.is_delimiter(";") || token.is_delimiter(")")
}

impl<'t> TacGenerator<'t> {
    /// Lower the expression at the cursor, stopping before `;`, `)` or the end of
    /// input. Returns the value holding the result of the expression.
    pub(super) fn lower_expr(&mut self) -> GenResult<Value> {
        let start = self.cursor.span();
        let mut operands: Vec<Value> = vec![];
        let mut operators: Vec<(BinOp, Span)> = vec![];

        while let Some(token) = self.cursor.peek() {
            if is_terminator(token) {
                break;
            }

            if let Some(value) = operand_value(token) {
                operands.push(value);
            } else if token.kind == TokenKind::Operator {
                let op = match BinOp::from_symbol(&token.text) {
                    Some(op) => op,
                    None => {
                        return error(
                            GenErrorKind::UnsupportedOperator(token.text.clone()),
                            token.source,
                        )
                    }
                };
                let fixity = Fixity::for_binop(op);

                while let Some(&(top, span)) = operators.last() {
                    if !Fixity::for_binop(top).precedes_rhs(&fixity) {
                        break;
                    }
                    operators.pop();
                    self.reduce(&mut operands, top, span)?;
                }
                operators.push((op, token.source));
            } else {
                return error(GenErrorKind::UnexpectedToken(token.clone()), token.source);
            }

            self.cursor.advance(1);
        }

        while let Some((op, span)) = operators.pop() {
            self.reduce(&mut operands, op, span)?;
        }

        if operands.len() > 1 {
            warn!(
                "Expression has {} unconnected operands, using the last one",
                operands.len()
            );
        }
        match operands.pop() {
            Some(value) => Ok(value),
            None => error(GenErrorKind::IncompleteExpression, start),
        }
    }

    /// Pop two operands, combine them with `op` into a new temporary, and push
    /// the temporary.
    fn reduce(&mut self, operands: &mut Vec<Value>, op: BinOp, span: Span) -> GenResult<()> {
        let (lhs, rhs) = match (operands.pop(), operands.pop()) {
            (Some(rhs), Some(lhs)) => (lhs, rhs),
            _ => return error(GenErrorKind::MissingOperand(op), span),
        };

        let target = self.name_generator.next_temp();
        trace!("Reduce {} {} {} into {}", lhs, op, rhs, target);
        self.emit(TacInstr::Bin(target.clone(), op, lhs, rhs));
        operands.push(Value::Name(target));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::lex;

    use super::*;

    /// Lowers the expression in `source`, returning the result value, the emitted
    /// instructions, and the number of tokens that were consumed.
    fn lower(source: &str) -> (GenResult<Value>, Vec<String>, usize) {
        let tokens = lex(source).unwrap();
        let mut generator = TacGenerator::new(&tokens);
        let result = generator.lower_expr();
        let lines = generator
            .program()
            .iter_instructions()
            .map(ToString::to_string)
            .collect();
        (result, lines, generator.cursor.position())
    }

    fn temp(n: usize) -> Value {
        Value::Name(Name::Temp(n))
    }

    #[test]
    fn single_operand_emits_nothing() {
        let (result, lines, _) = lower("y;");

        assert_eq!(Ok(Value::Name(Name::Var("y".to_string()))), result);
        assert!(lines.is_empty());
    }

    #[test]
    fn multiplication_is_reduced_before_addition() {
        let (result, lines, _) = lower("a + b * c");

        assert_eq!(vec!["t1 = b * c", "t2 = a + t1"], lines);
        assert_eq!(Ok(temp(2)), result);
    }

    #[test]
    fn subtraction_is_left_associative() {
        let (result, lines, _) = lower("a - b - c");

        assert_eq!(vec!["t1 = a - b", "t2 = t1 - c"], lines);
        assert_eq!(Ok(temp(2)), result);
    }

    #[test]
    fn mixed_precedence_chain() {
        let (_, lines, _) = lower("a * b + c / d - e");

        assert_eq!(
            vec!["t1 = a * b", "t2 = c / d", "t3 = t1 + t2", "t4 = t3 - e"],
            lines
        );
    }

    #[test]
    fn one_binop_per_operator_and_result_is_last_target() {
        let (result, lines, _) = lower("1 + 2 * 3 - 4 / 5 * 6 + 7");

        assert_eq!(6, lines.len());
        assert!(lines[5].starts_with("t6 = "));
        assert_eq!(Ok(temp(6)), result);
    }

    #[test]
    fn stops_before_terminator() {
        let (_, _, consumed) = lower("x + 1; y = 2;");
        assert_eq!(3, consumed);

        let (_, _, consumed) = lower("x ) {");
        assert_eq!(1, consumed);
    }

    #[test]
    fn empty_expression_is_incomplete() {
        let (result, lines, _) = lower(";");

        assert_eq!(
            GenErrorKind::IncompleteExpression,
            result.unwrap_err().kind().clone()
        );
        assert!(lines.is_empty());
    }

    #[test]
    fn trailing_operator_is_missing_an_operand() {
        let (result, _, _) = lower("x + ;");

        assert_eq!(
            GenErrorKind::MissingOperand(BinOp::Add),
            result.unwrap_err().kind().clone()
        );
    }

    #[test]
    fn leading_operator_is_missing_an_operand() {
        let (result, _, _) = lower("- 1;");

        assert_eq!(
            GenErrorKind::MissingOperand(BinOp::Subtract),
            result.unwrap_err().kind().clone()
        );
    }

    #[test]
    fn assignment_operator_is_unsupported() {
        let (result, _, _) = lower("a = b;");

        assert_eq!(
            GenErrorKind::UnsupportedOperator("=".to_string()),
            result.unwrap_err().kind().clone()
        );
    }

    #[test]
    fn parenthesis_is_unexpected() {
        let tokens = lex("( a + b );").unwrap();
        let mut generator = TacGenerator::new(&tokens);

        let err = generator.lower_expr().unwrap_err();

        assert_eq!(&GenErrorKind::UnexpectedToken(tokens[0].clone()), err.kind());
    }
}
