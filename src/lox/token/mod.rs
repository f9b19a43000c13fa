//! This is the Lexing or Tokenization module, split into two submodules.
//!
//! - [tokens] specifies the data types making up the tokens of the Lox language.
//! - [lexer] contains the scanning pass itself, alongside the error
//!   definitions for this phase and the [`LexOutput`](lexer::LexOutput)
//!   pairing the token stream with the reported errors.
//!
//! This module mirrors, but doesn't directly follow, the [Scanning](https://craftinginterpreters.com/scanning.html)
//! chapter of the "Crafting Interpreters" book.
pub mod lexer;
pub mod tokens;
