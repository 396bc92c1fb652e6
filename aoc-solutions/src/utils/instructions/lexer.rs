//! Lexer for corrupted instruction streams
//!
//! Produces a flat [`Token`] sequence in one left-to-right pass with a single
//! character of lookahead. Words are kept only when they end in a keyword of
//! the active [`Grammar`]; everything unrecognised collapses into
//! [`Token::Illegal`] runs.

use std::fmt;
use std::iter::Peekable;

/// Instruction keywords recognised at the end of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `mul`
    Multiply,
    /// `do`
    Enable,
    /// `don't`
    Disable,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Multiply => "mul",
            Keyword::Enable => "do",
            Keyword::Disable => "don't",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Integer(u64),
    Keyword(Keyword),
    LeftParen,
    RightParen,
    Comma,
    /// A maximal run of characters that start no other token
    Illegal(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(value) => write!(f, "{}", value),
            Token::Keyword(keyword) => write!(f, "{}", keyword),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::Comma => f.write_str(","),
            Token::Illegal(text) => write!(f, "<illegal {:?}>", text),
        }
    }
}

/// Which instruction keywords the lexer recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    /// Recognise `do` / `don't` and treat `'` as part of a word
    pub toggles: bool,
}

impl Grammar {
    /// Only `mul(a,b)` instructions
    pub const MULTIPLY_ONLY: Self = Self { toggles: false };
    /// `mul(a,b)` plus the `do()` / `don't()` switches
    pub const WITH_TOGGLES: Self = Self { toggles: true };

    fn is_word_char(self, c: char) -> bool {
        c.is_ascii_alphabetic() || (self.toggles && c == '\'')
    }

    /// Keyword a word ends with; the longest matching suffix wins
    fn keyword(self, word: &str) -> Option<Keyword> {
        if self.toggles {
            if word.ends_with("don't") {
                return Some(Keyword::Disable);
            }
            if word.ends_with("do") {
                return Some(Keyword::Enable);
            }
        }
        word.ends_with("mul").then_some(Keyword::Multiply)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::MULTIPLY_ONLY
    }
}

/// Streaming lexer over any character source
///
/// Each call to `next` consumes exactly the characters of the token it
/// returns, plus any discarded words before it.
pub struct Lexer<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    grammar: Grammar,
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(chars: I, grammar: Grammar) -> Self {
        Self {
            chars: chars.peekable(),
            grammar,
        }
    }

    fn integer(&mut self) -> u64 {
        let mut value: u64 = 0;
        while let Some(digit) = self.chars.next_if(char::is_ascii_digit) {
            let digit = u64::from(digit) - u64::from('0');
            value = value.saturating_mul(10).saturating_add(digit);
        }
        value
    }

    fn word(&mut self) -> String {
        let grammar = self.grammar;
        let mut word = String::new();
        while let Some(c) = self.chars.next_if(|&c| grammar.is_word_char(c)) {
            word.push(c);
        }
        word
    }

    /// The current character plus every following character that cannot start a word
    fn junk(&mut self) -> String {
        let grammar = self.grammar;
        let mut junk: String = self.chars.next().into_iter().collect();
        while let Some(c) = self.chars.next_if(|&c| !grammar.is_word_char(c)) {
            junk.push(c);
        }
        junk
    }
}

impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let token = match *self.chars.peek()? {
                '(' => {
                    self.chars.next();
                    Token::LeftParen
                }
                ')' => {
                    self.chars.next();
                    Token::RightParen
                }
                ',' => {
                    self.chars.next();
                    Token::Comma
                }
                c if c.is_ascii_digit() => Token::Integer(self.integer()),
                c if self.grammar.is_word_char(c) => {
                    let word = self.word();
                    match self.grammar.keyword(&word) {
                        Some(keyword) => Token::Keyword(keyword),
                        None => {
                            tracing::trace!(word = %word, "discarding word");
                            continue;
                        }
                    }
                }
                _ => Token::Illegal(self.junk()),
            };
            return Some(token);
        }
    }
}

/// Lex a whole character source into tokens
pub fn tokenize<I>(chars: I, grammar: Grammar) -> Vec<Token>
where
    I: IntoIterator<Item = char>,
{
    Lexer::new(chars.into_iter(), grammar).collect()
}
