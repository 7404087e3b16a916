use log::{debug, trace};

use crate::{
    cursor::TokenCursor,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    blocks::*,
    error::*,
    label_generator::LabelGenerator,
    name_generator::NameGenerator,
    tac::*,
};

/// Lower a token stream to a three-address code listing.
///
/// Each call uses a fresh generator, so temporaries and labels are numbered from
/// `t1` and `L1` in every run. On failure, the partially generated listing is
/// discarded.
pub fn generate(tokens: &[Token]) -> GenResult<TacProgram> {
    TacGenerator::new(tokens).generate()
}

pub(super) struct TacGenerator<'t> {
    pub(super) cursor: TokenCursor<'t>,
    pub(super) name_generator: NameGenerator,
    program: TacProgram,
    label_generator: LabelGenerator,
    blocks: BlockStack,
}
impl<'t> TacGenerator<'t> {
    pub(super) fn new(tokens: &'t [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            name_generator: NameGenerator::new(),
            program: TacProgram::new(),
            label_generator: LabelGenerator::new(),
            blocks: BlockStack::new(),
        }
    }

    /// Scan the token stream from start to end, lowering every statement that is
    /// found. Consumes the generator, since its counters may not be reused.
    fn generate(mut self) -> GenResult<TacProgram> {
        while let Some(token) = self.cursor.peek() {
            self.lower_stmt(token)?;
        }

        if self.blocks.depth() > 0 {
            return error(
                GenErrorKind::UnbalancedBlock(Unbalanced::Unclosed(self.blocks.depth())),
                self.cursor.span(),
            );
        }

        debug!(
            "Generated {} instructions using {} temporaries",
            self.program.len(),
            self.name_generator.count()
        );
        Ok(self.program)
    }

    /// Lower the statement starting at `token`. Tokens that do not start a
    /// statement are skipped.
    fn lower_stmt(&mut self, token: &'t Token) -> GenResult<()> {
        match (token.kind, token.text.as_str()) {
            (TokenKind::Keyword, "var") => self.lower_var_decl(),
            (TokenKind::Identifier, _) if self.is_assignment() => self.lower_assign(),
            (TokenKind::Keyword, "if") => self.lower_if(),
            (TokenKind::Keyword, "while") => self.lower_while(),
            (TokenKind::Delimiter, "}") => self.lower_block_end(token),
            _ => {
                trace!("Skipping {}", token);
                self.cursor.advance(1);
                Ok(())
            }
        }
    }

    /// Whether the cursor is at an identifier followed by `=`.
    fn is_assignment(&self) -> bool {
        self.cursor
            .peek_nth(1)
            .map_or(false, |next| next.is_operator("="))
    }

    /// `var x = <expr>;`
    fn lower_var_decl(&mut self) -> GenResult<()> {
        self.cursor.expect(TokenKind::Keyword, "var")?;
        debug!("Lowering variable declaration");
        self.lower_assign()
    }

    /// `x = <expr>;`
    fn lower_assign(&mut self) -> GenResult<()> {
        let target = self.cursor.expect_kind(TokenKind::Identifier)?;
        self.cursor.expect(TokenKind::Operator, "=")?;
        debug!("Lowering assignment to '{}'", target.text);

        let value = self.lower_expr()?;
        self.cursor.expect_delimiter(";")?;

        self.emit(TacInstr::Assign(Name::Var(target.text.clone()), value));
        Ok(())
    }

    /// `if (<cond>) {` jumps into the block when the condition holds, and past it
    /// otherwise. The end label is emitted when the block is closed.
    fn lower_if(&mut self) -> GenResult<()> {
        self.cursor.expect(TokenKind::Keyword, "if")?;
        self.cursor.expect_delimiter("(")?;
        let cond = self.lower_condition()?;
        self.cursor.expect_delimiter(")")?;
        self.cursor.expect_delimiter("{")?;

        let true_lbl = self.label_generator.next_label();
        let end_lbl = self.label_generator.next_label();
        debug!("Opening if-block ({} .. {})", true_lbl, end_lbl);

        self.emit(TacInstr::IfGoto(cond, true_lbl));
        self.emit(TacInstr::Goto(end_lbl));
        self.emit(TacInstr::Label(true_lbl));

        self.blocks.open(OpenBlock::IfEnd(end_lbl));
        Ok(())
    }

    /// `while (<cond>) {` tests the condition after the start label, so that the
    /// jump back from the end of the body re-evaluates it.
    fn lower_while(&mut self) -> GenResult<()> {
        self.cursor.expect(TokenKind::Keyword, "while")?;

        let start_lbl = self.label_generator.next_label();
        let end_lbl = self.label_generator.next_label();
        debug!("Opening while-block ({} .. {})", start_lbl, end_lbl);

        self.emit(TacInstr::Label(start_lbl));

        self.cursor.expect_delimiter("(")?;
        let cond = self.lower_condition()?;
        self.cursor.expect_delimiter(")")?;
        self.cursor.expect_delimiter("{")?;

        self.emit(TacInstr::IfNotGoto(cond, end_lbl));

        self.blocks.open(OpenBlock::While {
            start: start_lbl,
            end: end_lbl,
        });
        Ok(())
    }

    /// `}` closes the innermost open block.
    fn lower_block_end(&mut self, token: &Token) -> GenResult<()> {
        self.cursor.expect_delimiter("}")?;

        match self.blocks.close() {
            Some(OpenBlock::IfEnd(end)) => {
                debug!("Closing if-block at {}", end);
                self.emit(TacInstr::Label(end));
            }
            Some(OpenBlock::While { start, end }) => {
                debug!("Closing while-block at {}", end);
                self.emit(TacInstr::Goto(start));
                self.emit(TacInstr::Label(end));
            }
            None => {
                return error(
                    GenErrorKind::UnbalancedBlock(Unbalanced::UnexpectedClose),
                    token.source,
                )
            }
        }
        Ok(())
    }

    /// Emit an instruction, adding it to the listing.
    pub(super) fn emit(&mut self, instr: TacInstr) {
        trace!("Emit {}", instr);
        self.program.push(instr);
    }

    #[cfg(test)]
    pub(super) fn program(&self) -> &TacProgram {
        &self.program
    }
}
