//! A parser for collecting switches and their arguments from a token stream.

use alloc::string::String;
use alloc::vec::Vec;

use crate::lexer::{Kind, Token};
use crate::utils::{eq_ignore_case, fold_case};

/// Defines the possible errors that may occur during parsing of switches or their look-up.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The input is missing altogether (i.e. no argument vector).
    #[error("invalid argument")]
    InvalidArgument,

    /// The switch has not been found on the command line.
    #[error("switch not found")]
    SwitchNotFound,

    /// The argument index is beyond the number of arguments of the switch.
    #[error("argument index out of range")]
    IndexOutOfRange,
}

/// A switch found on the command line, with its arguments in order of appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Switch {
    name: String,
    args: Vec<String>,
}

impl Switch {
    fn new(name: &str) -> Self {
        Switch {
            name: fold_case(name),
            args: Vec::new(),
        }
    }

    /// The switch name, folded to lower case and without the slash.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All the arguments of the switch.
    #[inline(always)]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Number of arguments.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if the switch has no argument.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Get the argument at the given position.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// Defines the result of switch parsing. This is a key-value store, ordered by first appearance,
/// that offers a case-insensitive look-up over switches.
///
/// Values found after the program name but before the first switch are dropped.
#[derive(Debug, Default)]
pub struct SwitchTable {
    program: String,
    switches: Vec<Switch>,
}

impl SwitchTable {
    /// Build the table from a token stream. The first token is the program name.
    pub fn parse<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut tokens = tokens.into_iter();

        let mut out = Self::default();

        if let Some(program) = tokens.next() {
            out.program = program.into_value();
        }

        let mut current = None;

        for token in tokens {
            match token.kind() {
                Kind::Switch(name) => current = Some(out.open(name)),

                Kind::Value(value) => {
                    if let Some(index) = current {
                        out.switches[index].args.push(String::from(value));
                    }
                }
            }
        }

        out
    }

    // A repeated switch keeps accumulating on its first entry.
    fn open(&mut self, name: &str) -> usize {
        if let Some(index) = self.position(name) {
            return index;
        }

        self.switches.push(Switch::new(name));
        self.switches.len() - 1
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.switches
            .iter()
            .position(|x| eq_ignore_case(&x.name, name))
    }

    /// The program name, as the first token of the command line.
    #[inline(always)]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Number of distinct switches.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    /// Check if no switch has been found.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// Check if there exists a switch with the given name, whatever its case.
    #[inline(always)]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Get the switch with the given name, whatever its case.
    pub fn get(&self, name: &str) -> Option<&Switch> {
        self.position(name).map(|index| &self.switches[index])
    }

    /// Iterate over switches in order of first appearance.
    pub fn iter(&self) -> core::slice::Iter<'_, Switch> {
        self.switches.iter()
    }

    /// Get the number of arguments of the given switch.
    pub fn argument_count(&self, name: &str) -> Result<usize, Error> {
        self.get(name).map(Switch::len).ok_or(Error::SwitchNotFound)
    }

    /// Get one argument of the given switch.
    pub fn argument(&self, name: &str, index: usize) -> Result<&str, Error> {
        self.get(name)
            .ok_or(Error::SwitchNotFound)?
            .get(index)
            .ok_or(Error::IndexOutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use crate::lexer::Tokens;

    use super::*;

    #[test]
    fn it_should_parse_program_only() {
        let table = SwitchTable::parse(Tokens::new("myprog.exe"));

        assert_that!(table.program(), eq("myprog.exe"));
        assert_that!(table.is_empty(), eq(true));
    }

    #[test]
    fn it_should_parse_empty_token_stream() {
        let table = SwitchTable::parse(core::iter::empty());

        assert_that!(table.program(), eq(""));
        assert_that!(table.len(), eq(0));
    }

    #[test]
    fn it_should_never_classify_program_as_switch() {
        let table = SwitchTable::parse(Tokens::new("/prog /foo"));

        assert_that!(table.program(), eq("/prog"));
        assert_that!(table.len(), eq(1));
        assert_that!(table.contains("prog"), eq(false));
    }

    #[test]
    fn it_should_attach_values_to_current_switch() {
        let tokens = Tokens::new("prog /foo bar baz /qux quux");
        let table = SwitchTable::parse(tokens);

        assert_that!(table.len(), eq(2));
        assert_that!(table.argument_count("foo"), eq(&Ok(2)));
        assert_that!(table.argument("foo", 0), eq(&Ok("bar")));
        assert_that!(table.argument("foo", 1), eq(&Ok("baz")));
        assert_that!(table.argument("qux", 0), eq(&Ok("quux")));
    }

    #[test]
    fn it_should_drop_values_before_first_switch() {
        let tokens = Tokens::new("prog stray words /foo bar");
        let table = SwitchTable::parse(tokens);

        assert_that!(table.len(), eq(1));
        assert_that!(table.argument_count("foo"), eq(&Ok(1)));
    }

    #[test]
    fn it_should_fold_switch_names() {
        let table = SwitchTable::parse(Tokens::new("prog /FooP"));

        assert_that!(table.iter().next().map(Switch::name), eq(Some("foop")));
        assert_that!(table.contains("FOOP"), eq(true));
        assert_that!(table.contains("fOOp"), eq(true));
        assert_that!(table.contains("blah"), eq(false));
    }

    #[test]
    fn it_should_accumulate_repeated_switch() {
        let tokens = Tokens::new("prog /foo a /bar b /FOO c");
        let table = SwitchTable::parse(tokens);

        assert_that!(table.len(), eq(2));
        assert_that!(table.argument_count("foo"), eq(&Ok(2)));
        assert_that!(table.argument("foo", 1), eq(&Ok("c")));
        assert_that!(table.argument_count("bar"), eq(&Ok(1)));
    }

    #[test]
    fn it_should_report_missing_switch_and_index() {
        let table = SwitchTable::parse(Tokens::new("prog /foo bar"));

        assert_that!(table.argument_count("baz"), eq(&Err(Error::SwitchNotFound)));
        assert_that!(table.argument("baz", 0), eq(&Err(Error::SwitchNotFound)));
        assert_that!(table.argument("foo", 1), eq(&Err(Error::IndexOutOfRange)));
    }

    #[test]
    fn it_should_keep_every_distinct_switch() {
        let cmd_line: String = (0..100).map(|i| alloc::format!(" /s{i} v{i}")).collect();
        let cmd_line = alloc::format!("prog{cmd_line}");
        let table = SwitchTable::parse(Tokens::new(&cmd_line));

        assert_that!(table.len(), eq(100));
        assert_that!(table.argument("S0", 0), eq(&Ok("v0")));
        assert_that!(table.argument("s99", 0), eq(&Ok("v99")));
        assert_that!(
            table.iter().last().map(Switch::name),
            eq(Some("s99"))
        );
    }
}
