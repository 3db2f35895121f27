use std::rc::Rc;

use log::{trace, warn};

use crate::{MK_SPAN, MK_TOKEN};

use super::{patterns::classify, tokens::{Token, TokenClass}};

/// Tokenizer switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Drop whitespace tokens from the output.
    pub skip_whitespace: bool,
    /// Trace every position and match.
    pub verbose: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            skip_whitespace: true,
            verbose: false,
        }
    }
}

#[derive(Clone)]
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    file: Rc<String>,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>, config: LexerConfig) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
            config,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn trace_position(&self) {
        if !self.config.verbose {
            return;
        }

        let preview: String = self.remainder().chars().take(20).collect();
        trace!("lexing {:?}...", preview);
    }

    /// Consumes one token at the current position.
    ///
    /// Returns false when no pattern accepts the input here.
    fn lex_token(&mut self) -> bool {
        let Some((class, lexeme)) = classify(self.remainder()) else {
            return false;
        };

        if self.config.verbose {
            trace!("found {:?} -> {}, moving up by {}", lexeme, class, lexeme.len());
        }

        let start = self.pos;
        self.advance_n(lexeme.len());

        if class == TokenClass::Whitespace && self.config.skip_whitespace {
            return true;
        }

        let token = MK_TOKEN!(class, lexeme.to_string(), MK_SPAN!(start, self.pos, self.file));
        self.push(token);
        true
    }

    /// Runs the lexer to the end of input and returns the token stream.
    ///
    /// Unrecognised characters are skipped one at a time. The stream always
    /// ends with a single EOF token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.at_eof() {
            self.trace_position();

            if self.lex_token() {
                continue;
            }

            let skipped = self.at().map(|c| c.len_utf8()).unwrap_or(1);
            warn!("unknown token {:?} at {}", self.at().unwrap_or_default(), self.pos);
            self.advance_n(skipped);
        }

        let eof = MK_TOKEN!(TokenClass::EOF, String::new(), MK_SPAN!(self.pos, self.pos, self.file));
        self.push(eof);
        self.tokens
    }
}

/// Tokenizes `source` with the default configuration.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, None, LexerConfig::default())
}

/// Tokenizes `source`, attributing spans to `file` (`shell` when absent).
pub fn tokenize_with(source: &str, file: Option<String>, config: LexerConfig) -> Vec<Token> {
    Lexer::new(source, file, config).tokenize()
}
