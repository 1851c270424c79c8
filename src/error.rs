//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

//! Compiler stages may generate syntax errors and semantical errors. Lexical
//! and syntax errors are fatal; semantical errors are collected into an
//! ordered list and reported together.

pub use crate::lexer;
pub use crate::lexer::Location;

use crate::ast::{BinaryOp, DecafType, UnaryOp};

use ariadne::{Report, ReportKind};

/// The ordered list of diagnostics produced by a compiler stage. Order is
/// traversal order and therefore deterministic for identical inputs.
#[derive(Debug)]
pub struct Errors
{
	pub errors: Vec<Error>,
}

impl Errors
{
	pub fn codes(&self) -> Vec<u16>
	{
		self.errors.iter().map(|x| x.code()).collect()
	}

	pub fn is_empty(&self) -> bool
	{
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize
	{
		self.errors.len()
	}
}

impl From<Error> for Errors
{
	fn from(error: Error) -> Self
	{
		Self {
			errors: vec![error],
		}
	}
}

impl IntoIterator for Errors
{
	type Item = Error;
	type IntoIter = <Vec<Error> as IntoIterator>::IntoIter;

	fn into_iter(self) -> Self::IntoIter
	{
		self.errors.into_iter()
	}
}

#[must_use]
#[derive(Debug)]
pub enum Error
{
	// Fatal front end errors.
	Lexical
	{
		error: lexer::Error,
		location: Location,
	},
	UnexpectedToken
	{
		expectation: String,
		location: Location,
	},
	UnexpectedEndOfFile
	{
		expectation: String,
		last_location: Location,
	},

	// Entry point errors.
	MissingMain
	{
		location: Location
	},
	MainIsNotAFunction
	{
		location: Location
	},
	MainHasParameters
	{
		location: Location
	},
	MainReturnType
	{
		return_type: DecafType,
		location: Location,
	},

	// Resolution errors.
	UndefinedSymbol
	{
		name: String,
		location: Location,
	},
	CalleeIsNotAFunction
	{
		name: String,
		location: Location,
	},

	// Declaration errors.
	DuplicateDeclaration
	{
		name: String,
		location: Location,
	},
	VoidVariable
	{
		name: String,
		location: Location,
	},
	InvalidArrayLength
	{
		name: String,
		length: i32,
		location: Location,
	},
	NonGlobalArray
	{
		name: String,
		location: Location,
	},

	// Type errors.
	MismatchedOperandTypes
	{
		op: BinaryOp,
		left: DecafType,
		right: DecafType,
		location: Location,
	},
	InvalidOperandType
	{
		op: BinaryOp,
		expected: DecafType,
		actual: DecafType,
		location: Location,
	},
	InvalidUnaryOperandType
	{
		op: UnaryOp,
		expected: DecafType,
		actual: DecafType,
		location: Location,
	},
	AssignmentTypeMismatch
	{
		lhs: DecafType,
		rhs: DecafType,
		location: Location,
	},
	NonBooleanCondition
	{
		actual: DecafType,
		location: Location,
	},
	ReturnTypeMismatch
	{
		expected: DecafType,
		actual: DecafType,
		location: Location,
	},
	MissingReturnValue
	{
		expected: DecafType,
		location: Location,
	},

	// Call site errors.
	ArgumentCountMismatch
	{
		name: String,
		expected: usize,
		actual: usize,
		location: Location,
	},
	ArgumentTypeMismatch
	{
		name: String,
		position: usize,
		expected: DecafType,
		actual: DecafType,
		location: Location,
	},

	// Indexing errors.
	MissingArrayIndex
	{
		name: String,
		location: Location,
	},
	InvalidIndexType
	{
		name: String,
		actual: DecafType,
		location: Location,
	},
	IndexedNonArray
	{
		name: String,
		location: Location,
	},

	// Control flow errors.
	BreakOutsideLoop
	{
		location: Location
	},
	ContinueOutsideLoop
	{
		location: Location
	},
}

impl Error
{
	pub fn code(&self) -> u16
	{
		match self
		{
			Error::Lexical {
				error: lexer::Error::UnexpectedCharacter { .. },
				..
			} => 110,
			Error::Lexical {
				error: lexer::Error::IdentifierTooLong,
				..
			} => 130,
			Error::Lexical {
				error: lexer::Error::InvalidIntegerLiteral(..),
				..
			} => 140,
			Error::Lexical {
				error: lexer::Error::MissingClosingQuote,
				..
			} => 160,
			Error::Lexical {
				error: lexer::Error::UnexpectedTrailingBackslash,
				..
			} => 161,
			Error::Lexical {
				error: lexer::Error::InvalidEscapeSequence { .. },
				..
			} => 162,
			Error::UnexpectedToken { .. } => 300,
			Error::UnexpectedEndOfFile { .. } => 301,
			Error::UndefinedSymbol { .. } => 400,
			Error::CalleeIsNotAFunction { .. } => 401,
			Error::MissingMain { .. } => 410,
			Error::MainIsNotAFunction { .. } => 411,
			Error::MainHasParameters { .. } => 412,
			Error::MainReturnType { .. } => 413,
			Error::DuplicateDeclaration { .. } => 420,
			Error::VoidVariable { .. } => 421,
			Error::InvalidArrayLength { .. } => 422,
			Error::NonGlobalArray { .. } => 423,
			Error::MismatchedOperandTypes { .. } => 500,
			Error::InvalidOperandType { .. } => 501,
			Error::InvalidUnaryOperandType { .. } => 502,
			Error::AssignmentTypeMismatch { .. } => 503,
			Error::NonBooleanCondition { .. } => 504,
			Error::ReturnTypeMismatch { .. } => 505,
			Error::MissingReturnValue { .. } => 506,
			Error::ArgumentCountMismatch { .. } => 510,
			Error::ArgumentTypeMismatch { .. } => 512,
			Error::MissingArrayIndex { .. } => 520,
			Error::InvalidIndexType { .. } => 521,
			Error::IndexedNonArray { .. } => 522,
			Error::BreakOutsideLoop { .. } => 800,
			Error::ContinueOutsideLoop { .. } => 801,
		}
	}

	fn location(&self) -> &Location
	{
		match self
		{
			Error::Lexical { location, .. } => location,
			Error::UnexpectedToken { location, .. } => location,
			Error::UnexpectedEndOfFile { last_location, .. } => last_location,
			Error::MissingMain { location } => location,
			Error::MainIsNotAFunction { location } => location,
			Error::MainHasParameters { location } => location,
			Error::MainReturnType { location, .. } => location,
			Error::UndefinedSymbol { location, .. } => location,
			Error::CalleeIsNotAFunction { location, .. } => location,
			Error::DuplicateDeclaration { location, .. } => location,
			Error::VoidVariable { location, .. } => location,
			Error::InvalidArrayLength { location, .. } => location,
			Error::NonGlobalArray { location, .. } => location,
			Error::MismatchedOperandTypes { location, .. } => location,
			Error::InvalidOperandType { location, .. } => location,
			Error::InvalidUnaryOperandType { location, .. } => location,
			Error::AssignmentTypeMismatch { location, .. } => location,
			Error::NonBooleanCondition { location, .. } => location,
			Error::ReturnTypeMismatch { location, .. } => location,
			Error::MissingReturnValue { location, .. } => location,
			Error::ArgumentCountMismatch { location, .. } => location,
			Error::ArgumentTypeMismatch { location, .. } => location,
			Error::MissingArrayIndex { location, .. } => location,
			Error::InvalidIndexType { location, .. } => location,
			Error::IndexedNonArray { location, .. } => location,
			Error::BreakOutsideLoop { location } => location,
			Error::ContinueOutsideLoop { location } => location,
		}
	}

	pub fn line_number(&self) -> usize
	{
		self.location().line_number
	}

	/// Build a labelled report for terminal output. The label spans the
	/// offending source line.
	pub fn report(&self) -> Report<(String, std::ops::Range<usize>)>
	{
		let location = self.location();
		Report::build(
			ReportKind::Error,
			location.source_filename.clone(),
			location.span.start,
		)
		.with_code(format!("E{:03}", self.code()))
		.with_message(self.to_string())
		.with_label(location.label().with_color(ariadne::Color::Yellow))
		.finish()
	}
}

impl std::fmt::Display for Error
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
	{
		let line = self.line_number();
		match self
		{
			Error::Lexical { error, .. } =>
			{
				write!(f, "Lexical error ({}) on line {}", error, line)
			}
			Error::UnexpectedToken { expectation, .. } =>
			{
				write!(f, "Unexpected token ({}) on line {}", expectation, line)
			}
			Error::UnexpectedEndOfFile { expectation, .. } =>
			{
				write!(f, "Unexpected end of file ({})", expectation)
			}
			Error::MissingMain { .. } =>
			{
				write!(f, "Program does not contain a 'main' function")
			}
			Error::MainIsNotAFunction { .. } =>
			{
				write!(f, "'main' is not a function")
			}
			Error::MainHasParameters { .. } =>
			{
				write!(f, "'main' must not take parameters")
			}
			Error::MainReturnType { return_type, .. } =>
			{
				write!(f, "'main' must return int, not {}", return_type)
			}
			Error::UndefinedSymbol { name, .. } =>
			{
				write!(f, "Symbol '{}' undefined on line {}", name, line)
			}
			Error::CalleeIsNotAFunction { name, .. } =>
			{
				write!(f, "'{}' is not a function on line {}", name, line)
			}
			Error::DuplicateDeclaration { name, .. } =>
			{
				write!(
					f,
					"Multiple declarations named '{}' in the scope opened on \
					 line {}",
					name, line
				)
			}
			Error::VoidVariable { name, .. } =>
			{
				write!(f, "Void variable '{}' on line {}", name, line)
			}
			Error::InvalidArrayLength { name, length, .. } =>
			{
				write!(
					f,
					"Array '{}' has invalid length {} on line {}",
					name, length, line
				)
			}
			Error::NonGlobalArray { name, .. } =>
			{
				write!(
					f,
					"Array '{}' declared in non-global scope on line {}",
					name, line
				)
			}
			Error::MismatchedOperandTypes {
				op, left, right, ..
			} =>
			{
				write!(
					f,
					"Operands of '{}' have mismatched types {} and {} on line \
					 {}",
					op, left, right, line
				)
			}
			Error::InvalidOperandType {
				op,
				expected,
				actual,
				..
			} =>
			{
				write!(
					f,
					"Operand of '{}' must be {}, found {} on line {}",
					op, expected, actual, line
				)
			}
			Error::InvalidUnaryOperandType {
				op,
				expected,
				actual,
				..
			} =>
			{
				write!(
					f,
					"Operand of '{}' must be {}, found {} on line {}",
					op, expected, actual, line
				)
			}
			Error::AssignmentTypeMismatch { lhs, rhs, .. } =>
			{
				write!(
					f,
					"Assignment of {} value to {} location on line {}",
					rhs, lhs, line
				)
			}
			Error::NonBooleanCondition { actual, .. } =>
			{
				write!(
					f,
					"Condition must be bool, found {} on line {}",
					actual, line
				)
			}
			Error::ReturnTypeMismatch {
				expected, actual, ..
			} =>
			{
				write!(
					f,
					"Return value has type {}, expected {} on line {}",
					actual, expected, line
				)
			}
			Error::MissingReturnValue { expected, .. } =>
			{
				write!(
					f,
					"Missing return value of type {} on line {}",
					expected, line
				)
			}
			Error::ArgumentCountMismatch {
				name,
				expected,
				actual,
				..
			} =>
			{
				write!(
					f,
					"Function '{}' expects {} arguments, got {} on line {}",
					name, expected, actual, line
				)
			}
			Error::ArgumentTypeMismatch {
				name,
				position,
				expected,
				actual,
				..
			} =>
			{
				write!(
					f,
					"Argument {} of '{}' has type {}, expected {} on line {}",
					position, name, actual, expected, line
				)
			}
			Error::MissingArrayIndex { name, .. } =>
			{
				write!(
					f,
					"Array '{}' accessed without index on line {}",
					name, line
				)
			}
			Error::InvalidIndexType { name, actual, .. } =>
			{
				write!(
					f,
					"Index of '{}' must be int, found {} on line {}",
					name, actual, line
				)
			}
			Error::IndexedNonArray { name, .. } =>
			{
				write!(
					f,
					"'{}' is not an array but is indexed on line {}",
					name, line
				)
			}
			Error::BreakOutsideLoop { .. } =>
			{
				write!(f, "'break' outside of loop on line {}", line)
			}
			Error::ContinueOutsideLoop { .. } =>
			{
				write!(f, "'continue' outside of loop on line {}", line)
			}
		}
	}
}
