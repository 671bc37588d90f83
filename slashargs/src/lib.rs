//! slashargs, a `no_std` parser for Windows-style `/switch` command lines.
#![no_std]
#![deny(missing_docs)]

extern crate alloc;

use alloc::string::String;

pub use slashargs_parser as parser;

use parser::{Switch, SwitchTable, Token, Tokens};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// An argument query has been made before a successful parse.
    #[error("command line not parsed")]
    NotParsed,

    /// An error comes from the parsing of switches.
    #[error(transparent)]
    Parser(#[from] parser::Error),
}

/// A command line parser collecting the switches (e.g. `/install`) and their arguments.
///
/// The parser starts empty. Existence and count queries answer `false` and `0` until a parse
/// succeeds, while argument queries fail with [`Error::NotParsed`]. Each parse call rebuilds the
/// switches from scratch.
#[derive(Debug, Default)]
pub struct CommandLineParser {
    table: Option<SwitchTable>,
}

impl CommandLineParser {
    /// Create an empty parser.
    pub const fn new() -> Self {
        CommandLineParser { table: None }
    }

    /// Parse a whole command line, the program name first.
    ///
    /// A missing, empty or blank command line is valid and holds no switch.
    pub fn parse_from_string(&mut self, cmd_line: Option<&str>) -> Result<(), Error> {
        self.table = None;

        let tokens = Tokens::new(cmd_line.unwrap_or_default());
        self.table = Some(SwitchTable::parse(tokens));

        Ok(())
    }

    /// Parse a pre-split argument vector, the program name first.
    ///
    /// An empty vector is valid and holds no switch, but a missing one is an invalid argument.
    pub fn parse_from_argv(&mut self, argv: Option<&[&str]>) -> Result<(), Error> {
        self.table = None;

        let argv = argv.ok_or(parser::Error::InvalidArgument)?;
        let tokens = argv.iter().map(|arg| Token::from_arg(arg));
        self.table = Some(SwitchTable::parse(tokens));

        Ok(())
    }

    /// Check if the last parse call succeeded.
    #[inline(always)]
    pub fn has_parsed(&self) -> bool {
        self.table.is_some()
    }

    /// The program name found on the command line, if parsed.
    pub fn program_name(&self) -> Option<&str> {
        self.table.as_ref().map(SwitchTable::program)
    }

    /// Number of distinct switches, or zero if not parsed.
    pub fn required_switch_count(&self) -> usize {
        self.table.as_ref().map_or(0, SwitchTable::len)
    }

    /// Check if the switch is present, whatever its case. Always false if not parsed.
    pub fn has_required_switch(&self, name: &str) -> bool {
        self.table.as_ref().is_some_and(|x| x.contains(name))
    }

    /// Iterate over switch names, lower case, in order of first appearance.
    pub fn required_switches(&self) -> impl Iterator<Item = &str> {
        self.table.iter().flat_map(SwitchTable::iter).map(Switch::name)
    }

    /// Get the number of arguments of the given switch.
    pub fn required_switch_argument_count(&self, name: &str) -> Result<usize, Error> {
        Ok(self.table()?.argument_count(name)?)
    }

    /// Get a copy of one argument of the given switch.
    pub fn required_switch_argument_value(&self, name: &str, index: usize) -> Result<String, Error> {
        let value = self.table()?.argument(name, index)?;
        Ok(String::from(value))
    }

    /// Get all the arguments of the given switch.
    pub fn required_switch_arguments(&self, name: &str) -> Result<&[String], Error> {
        let switch = self
            .table()?
            .get(name)
            .ok_or(parser::Error::SwitchNotFound)?;

        Ok(switch.args())
    }

    fn table(&self) -> Result<&SwitchTable, Error> {
        self.table.as_ref().ok_or(Error::NotParsed)
    }
}
