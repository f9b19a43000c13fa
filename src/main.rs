//! # Loxlex - The lexical front end of Crafting Interpreters' Lox language
//!
//! This crate implements the scanning phase of the Lox programming language
//! from the book "Crafting Interpreters"[^1] by Robert Nystrom: it turns raw
//! source text into a flat, ordered token stream for a parser to consume,
//! and deliberately nothing more. There is no AST, no evaluation, and no
//! error recovery beyond skipping an offending character and scanning on.
//!
//! ## Behaviour
//!
//! The scanner makes a single left-to-right pass over the source, recognizing
//! each lexeme with maximal munch (one character of lookahead decides between
//! `!`/`!=`, `=`/`==`, `<`/`<=` and `>`/`>=`). Every scan produces a stream
//! that ends in exactly one end-of-input token, even when errors occurred;
//! unrecognized characters are reported with their 1-based source line and
//! simply contribute no token. See [`lexer::tokenize`] for the entry point.
//!
//! ## Extensions
//!
//! - The [lexer](lexer::tokenize) has support for nestable multiline block comments.
//!   Single-line comments do not cancel an end-of-comment marker on the same line.
//! - The REPL supports multi-line input: errors are categorized as to whether
//!   they are caused by unterminated input - if that is the case, the REPL
//!   asks for a continuation line instead of raising the error.
//!
//!   This, however, does not allow for editing of any previous line, and
//!   additional support like the ability to cancel input via Ctrl-C is also
//!   not enabled currently.
//!
//! ## Guidelines
//!
//! The following are taken as a guideline for the implementation:
//!
//! - `#![deny(warnings)]`, including most optional lints and also a lot from clippy.
//!   Circumventing these via `#[expect(...)]` should be taken as a last precaution,
//!   where the alternative would complicate or make the code less readable.
//! - Comprehensive documentation.
//! - Tests beside the code they exercise.
//!
//! [^1]: <https://craftinginterpreters.com/>
#![deny(
    warnings,
)]
#![deny(
    future_incompatible,
    keyword_idents,
    let_underscore,
    nonstandard_style,
    refining_impl_trait,
)]
#![deny(
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2024_compatibility,
)]
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![deny(
    clippy::absolute_paths,
    clippy::alloc_instead_of_core,
    clippy::allow_attributes_without_reason,
    clippy::arithmetic_side_effects,
    clippy::as_conversions,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    clippy::big_endian_bytes,
    clippy::cfg_not_test,
    clippy::clone_on_ref_ptr,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::default_numeric_fallback,
    clippy::default_union_representation,
    clippy::deref_by_slicing,
    clippy::disallowed_script_idents,
    clippy::else_if_without_else,
    clippy::empty_drop,
    clippy::empty_enum_variants_with_brackets,
    clippy::empty_structs_with_brackets,
    clippy::error_impl_error,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::exit,
    clippy::field_scoped_visibility_modifiers,
    clippy::filetype_is_file,
    clippy::float_arithmetic,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::get_unwrap,
    clippy::host_endian_bytes,
    clippy::if_then_some_else_none,
    clippy::impl_trait_in_params,
    clippy::indexing_slicing,
    clippy::infinite_loop,
    clippy::inline_asm_x86_att_syntax,
    clippy::inline_asm_x86_intel_syntax,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    clippy::iter_over_hash_type,
    clippy::large_include_file,
    clippy::let_underscore_must_use,
    clippy::let_underscore_untyped,
    clippy::little_endian_bytes,
    clippy::lossy_float_literal,
    clippy::map_err_ignore,
    clippy::mem_forget,
    clippy::min_ident_chars,
    clippy::missing_assert_message,
    clippy::missing_asserts_for_indexing,
    clippy::missing_docs_in_private_items,
    clippy::missing_trait_methods,
    clippy::mixed_read_write_in_expression,
    clippy::module_name_repetitions,
    clippy::modulo_arithmetic,
    clippy::multiple_inherent_impl,
    clippy::multiple_unsafe_ops_per_block,
    clippy::mutex_atomic,
    clippy::mutex_integer,
    clippy::needless_raw_strings,
    clippy::non_ascii_literal,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::partial_pub_fields,
    clippy::pathbuf_init_then_push,
    clippy::pattern_type_mismatch,
    clippy::pub_with_shorthand,
    clippy::pub_without_shorthand,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::redundant_type_annotations,
    clippy::renamed_function_params,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::semicolon_inside_block,
    clippy::separated_literal_suffix,
    clippy::single_char_lifetime_names,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_chars_any,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::suspicious_xor_used_as_pow,
    clippy::tests_outside_test_module,
    clippy::todo,
    clippy::try_err,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unnecessary_safety_comment,
    clippy::unnecessary_safety_doc,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unused_result_ok,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::verbose_file_reads,
    clippy::wildcard_enum_match_arm
)]
#![warn(unused)]
#![allow(
    edition_2024_expr_fragment_specifier,
    reason = "the macros expect the 2024 edition behaviour."
)]
pub mod lox;

use clap::{Parser, Subcommand};

use lox::errors::{EngineError, UnterminatedError};
use lox::std::LoxStdDisplay;
use lox::token::lexer::{self, LexOutput};

use std::fs;
use std::io::{Error as IOError, Write};
use std::process::{ExitCode, Termination};

/// Load a file and run it through the lexer, printing the token stream
/// in the book's standard format.
///
/// Lexing itself never fails; if any errors were reported along the way,
/// the tokens are still printed, and the errors become the process result.
fn run_file(file: String) -> Result<(), EngineError> {
    let source = fs::read_to_string(file)?;
    let LexOutput { tokens, errors } = lexer::tokenize(source);

    for token in &tokens {
        println!("{}", token.std_display());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(EngineError::LexingErrors(errors))
    }
}

/// Run the REPL Prompt.
/// TODO: Add command support (mainly :quit)
fn run_prompt() -> Result<(), IOError> {
    use std::io::{stdin, stdout};

    let mut buffer = String::new();
    let stdin = stdin();
    loop {
        print!("{}", if buffer.is_empty() { "> " } else { ". " });
        stdout().flush()?;

        let read = stdin.read_line(&mut buffer)?;
        if read == 0 {
            // End of input (Ctrl-D) ends the session.
            break Ok(());
        }

        let LexOutput { tokens, errors } = lexer::tokenize(&buffer);

        // A sole unterminated string or comment just means the entered
        // line isn't finished yet - ask for a continuation line instead
        // of reporting it.
        if let [ref only] = *errors.as_slice() {
            if only.is_unterminated() {
                continue;
            }
        }

        for error in &errors {
            eprintln!("{error}");
        }
        for token in &tokens {
            println!("{token}");
        }
        buffer.clear();
    }
}

/// Isomorphic to `Result<T, EngineError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
///
/// As this is only supposed to be used on the very
/// outer shell, T defaults to `()`.
#[derive(Debug)]
enum EngineResult<T = ()> {
    /// Ok variant.
    Ok(T),
    /// Error variant
    Err(EngineError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        if let EngineResult::Err(err) = self {
            eprintln!("{}", err.display_error());
            err.into()
        } else {
            ExitCode::SUCCESS
        }
    }
}

impl<T, E> From<Result<T, E>> for EngineResult<T>
where
    EngineError: From<E>,
{
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => EngineResult::Ok(value),
            Err(err) => EngineResult::Err(err.into()),
        }
    }
}

/// loxlex is the lexical front end for the Lox Programming Language: it
/// tokenizes Lox source code and prints the resulting token stream, either
/// for a whole file or interactively on a REPL. Parsing and interpretation
/// are intentionally not part of this tool.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    subcommand_negates_reqs = true,
    args_conflicts_with_subcommands = true
)]
struct LoxArgs {
    /// Subcommands, either this or [`source_file`] needs to be specified.
    #[command(subcommand)]
    command: Option<LoxCommands>,

    /// Source File for the program
    #[arg(required = true)]
    source_file: Option<String>,
}

/// Available commands in loxlex
#[derive(Subcommand, Debug)]
enum LoxCommands {
    /// run the lexer repl.
    Repl,
    /// tokenize the given file and print its token stream.
    Tokenize {
        /// Source File for the program
        source_file: String,
    },
}

fn main() -> EngineResult {
    let LoxArgs {
        command,
        source_file
    } = LoxArgs::parse();

    match (command, source_file) {
        (None, Some(source_file))
        | (Some(LoxCommands::Tokenize { source_file }), None) => run_file(source_file).into(),

        (Some(LoxCommands::Repl), None) => run_prompt().into(),

        (Some(_), Some(_))
        | (None, None) => unreachable!("clap verifies this cannot happen."),
    }
}
