//! slashargs-parser, the lexer and switch table behind `slashargs`.
#![no_std]

extern crate alloc;

pub mod lexer;
pub mod parser;
pub mod utils;

pub use lexer::{Kind, Token, Tokens};
pub use parser::{Error, Switch, SwitchTable};
