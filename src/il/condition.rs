//! Lowering of `<operand> <comparison> <operand>` conditions.
use crate::lexer::tokens::TokenKind;

use super::{
    error::*, expression::operand_value, generator::TacGenerator, CmpOp, Condition, Value,
};

impl<'t> TacGenerator<'t> {
    /// Lower the three-token condition at the cursor. Conditions emit no
    /// instructions; the result is used directly by a conditional jump.
    pub(super) fn lower_condition(&mut self) -> GenResult<Condition> {
        if self.cursor.remaining() < 3 {
            return error(GenErrorKind::IncompleteCondition, self.cursor.span());
        }

        let lhs = self.lower_cond_operand()?;

        let op_token = self.cursor.next()?;
        let op = match (op_token.kind, CmpOp::from_symbol(&op_token.text)) {
            (TokenKind::Operator, Some(op)) => op,
            _ => {
                return error(
                    GenErrorKind::UnknownComparison(op_token.text.clone()),
                    op_token.source,
                )
            }
        };

        let rhs = self.lower_cond_operand()?;

        Ok(Condition { lhs, op, rhs })
    }

    fn lower_cond_operand(&mut self) -> GenResult<Value> {
        let token = self.cursor.next()?;
        match operand_value(token) {
            Some(value) => Ok(value),
            None => error(GenErrorKind::UnexpectedToken(token.clone()), token.source),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::lex;

    use super::*;

    fn lower(source: &str) -> (GenResult<Condition>, usize) {
        let tokens = lex(source).unwrap();
        let mut generator = TacGenerator::new(&tokens);
        let result = generator.lower_condition();
        assert!(generator.program().is_empty());
        (result, generator.cursor.position())
    }

    #[test]
    fn condition_renders_as_predicate() {
        let (result, consumed) = lower("x > 5 )");

        assert_eq!("x > 5", result.unwrap().to_string());
        assert_eq!(3, consumed);
    }

    #[test]
    fn all_comparison_operators_are_accepted() {
        for op in ["<", ">", "<=", ">=", "==", "!="] {
            let (result, _) = lower(&format!("a {} b", op));

            assert_eq!(Some(result.unwrap().op), CmpOp::from_symbol(op));
        }
    }

    #[test]
    fn two_tokens_are_an_incomplete_condition() {
        let (result, consumed) = lower("x >");

        assert_eq!(
            GenErrorKind::IncompleteCondition,
            result.unwrap_err().kind().clone()
        );
        assert_eq!(0, consumed);
    }

    #[test]
    fn arithmetic_operator_is_not_a_comparison() {
        let (result, _) = lower("x + 5");

        assert_eq!(
            GenErrorKind::UnknownComparison("+".to_string()),
            result.unwrap_err().kind().clone()
        );
    }

    #[test]
    fn delimiter_is_not_an_operand() {
        let (result, _) = lower("( x > 5");

        assert!(matches!(
            result.unwrap_err().kind(),
            GenErrorKind::UnexpectedToken(token) if token.is_delimiter("(")
        ));
    }
}
