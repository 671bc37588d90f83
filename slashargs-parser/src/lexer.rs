//! A lexer for generating tokens from a command line.

use alloc::string::String;
use core::iter::Peekable;
use core::str::Chars;

use crate::utils::{BACKSLASH, QUOTE, SWITCH_PREFIX, is_separator};

/// Variant of a token read after the program name. Only store the switch name, not the slash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Kind<'a> {
    /// A switch marker (e.g. /silent).
    Switch(&'a str),

    /// Value (i.e. everything that is not a switch marker).
    Value(&'a str),
}

/// Defines a `Token` that has been read from the command line.
///
/// The quotes are stripped from the value, so the token remembers whether its first character in
/// the original input was a quote. This is the only way to tell `/sw` from `"/sw"` afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Token {
    value: String,
    quoted: bool,
}

impl Token {
    /// Create a token from an already unquoted value.
    pub fn new(value: impl Into<String>, quoted: bool) -> Self {
        Token {
            value: value.into(),
            quoted,
        }
    }

    /// Create a token from one element of a pre-split argument vector.
    ///
    /// The element has already been split and unquoted, so its content is kept as-is. Only one
    /// enclosing pair of quotes, if any, is removed.
    pub fn from_arg(raw: &str) -> Self {
        let quoted = raw.starts_with(QUOTE);

        let value = raw
            .strip_prefix(QUOTE)
            .and_then(|x| x.strip_suffix(QUOTE))
            .unwrap_or(raw);

        Token::new(value, quoted)
    }

    /// The token value, without its quotes.
    #[inline(always)]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Evaluate if the token started with a quote in the original input.
    #[inline(always)]
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Consume the token and return its value.
    #[inline(always)]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Classify the token as a switch marker or a plain value.
    ///
    /// This does not apply to the program name, which is never a switch.
    pub fn kind(&self) -> Kind<'_> {
        match self.value.strip_prefix(SWITCH_PREFIX) {
            Some(name) if !self.quoted => Kind::Switch(name),
            _ => Kind::Value(&self.value),
        }
    }
}

/// Defines a lexer that is responsible for streaming tokens from a command line string.
///
/// The first token is always the program name, even when the input is empty or made of
/// whitespace only. In that case its value is empty.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
    program_read: bool,
}

impl<'a> Tokens<'a> {
    /// Create a new lexer from the command line input.
    pub fn new(input: &'a str) -> Self {
        Tokens {
            chars: input.chars().peekable(),
            program_read: false,
        }
    }

    // The program path has no escapes: a quoted path runs up to the next quote.
    fn program(&mut self) -> Token {
        let quoted = self.chars.next_if_eq(&QUOTE).is_some();
        let mut value = String::new();

        if quoted {
            for c in self.chars.by_ref() {
                if c == QUOTE {
                    break;
                }
                value.push(c);
            }
        }

        while let Some(c) = self.chars.next_if(|&c| !is_separator(c)) {
            value.push(c);
        }

        Token { value, quoted }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.program_read {
            self.program_read = true;
            return Some(self.program());
        }

        while self.chars.next_if(|&c| is_separator(c)).is_some() {}

        let quoted = *self.chars.peek()? == QUOTE;
        let value = read_argument(&mut self.chars);

        Some(Token { value, quoted })
    }
}

/// Read one argument and remove its quotes.
///
/// Backslashes are literal unless they precede a quote: 2n backslashes followed by a quote give n
/// backslashes and open or close a quoted span, 2n+1 give n backslashes and a literal quote.
/// Inside a quoted span, two consecutive quotes give one literal quote.
fn read_argument(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut value = String::new();
    let mut in_quotes = false;
    let mut backslashes = 0;

    while let Some(&c) = chars.peek() {
        if !in_quotes && is_separator(c) {
            break;
        }
        chars.next();

        match c {
            BACKSLASH => backslashes += 1,

            QUOTE => {
                push_backslashes(&mut value, backslashes / 2);

                if backslashes % 2 == 1 {
                    value.push(QUOTE);
                } else if in_quotes && chars.next_if_eq(&QUOTE).is_some() {
                    value.push(QUOTE);
                } else {
                    in_quotes = !in_quotes;
                }

                backslashes = 0;
            }

            _ => {
                push_backslashes(&mut value, backslashes);
                backslashes = 0;
                value.push(c);
            }
        }
    }

    push_backslashes(&mut value, backslashes);
    value
}

#[inline(always)]
fn push_backslashes(value: &mut String, count: usize) {
    value.extend(core::iter::repeat_n(BACKSLASH, count));
}
