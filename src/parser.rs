/**/

use crate::ast::{
	Ast, BinaryOp, DecafType, Literal, Location, NodeId, NodeKind, Parameter,
	UnaryOp,
};
use crate::error::Error;
use crate::lexer::{LexedToken, Token};

use std::collections::VecDeque;

/// Build a syntax tree from the token stream. The first lexical or syntax
/// error aborts parsing; unlike the analysis stage, the front end does not
/// recover.
pub fn parse(tokens: Vec<LexedToken>) -> Result<Ast, Error>
{
	let program_location = match tokens.first()
	{
		Some(token) => Location {
			line_number: 1,
			span: 0..0,
			..token.location.clone()
		},
		None => Location {
			source_filename: String::new(),
			line_number: 1,
			span: 0..0,
		},
	};
	let mut parser = Parser {
		tokens: VecDeque::from(tokens),
		ast: Ast::new(),
		last_location: program_location.clone(),
	};

	let mut variables = Vec::new();
	let mut functions = Vec::new();
	while !parser.tokens.is_empty()
	{
		if parser.peek() == Some(&Token::Def)
		{
			let function = parser.parse_funcdecl()?;
			functions.push(function);
		}
		else
		{
			let variable = parser.parse_vardecl()?;
			variables.push(variable);
		}
	}

	let mut ast = parser.ast;
	let root = ast.add(
		NodeKind::Program {
			variables,
			functions,
		},
		program_location,
	);
	ast.set_root(root);
	Ok(ast)
}

struct Parser
{
	tokens: VecDeque<LexedToken>,
	ast: Ast,
	last_location: Location,
}

impl Parser
{
	fn pop(&mut self, expectation: &str) -> Result<(Token, Location), Error>
	{
		match self.tokens.pop_front()
		{
			Some(LexedToken {
				result: Ok(token),
				location,
			}) =>
			{
				self.last_location = location.clone();
				Ok((token, location))
			}
			Some(LexedToken {
				result: Err(error),
				location,
			}) => Err(Error::Lexical { error, location }),
			None => Err(Error::UnexpectedEndOfFile {
				expectation: expectation.to_string(),
				last_location: self.last_location.clone(),
			}),
		}
	}

	fn expect(
		&mut self,
		expected: Token,
		expectation: &str,
	) -> Result<Location, Error>
	{
		let (token, location) = self.pop(expectation)?;
		if token == expected
		{
			Ok(location)
		}
		else
		{
			Err(Error::UnexpectedToken {
				expectation: expectation.to_string(),
				location,
			})
		}
	}

	fn peek(&self) -> Option<&Token>
	{
		match self.tokens.front()
		{
			Some(LexedToken {
				result: Ok(token), ..
			}) => Some(token),
			_ => None,
		}
	}

	fn peek_is(&self, token: &Token) -> bool
	{
		self.peek() == Some(token)
	}

	fn parse_type(&mut self) -> Result<(DecafType, Location), Error>
	{
		let (token, location) = self.pop("expected a type")?;
		let value_type = match token
		{
			Token::Int => DecafType::Int,
			Token::Bool => DecafType::Bool,
			Token::Void => DecafType::Void,
			Token::Str => DecafType::Str,
			_ =>
			{
				return Err(Error::UnexpectedToken {
					expectation: "expected a type".to_string(),
					location,
				});
			}
		};
		Ok((value_type, location))
	}

	fn parse_identifier(&mut self) -> Result<(String, Location), Error>
	{
		let (token, location) = self.pop("expected an identifier")?;
		match token
		{
			Token::Identifier(name) => Ok((name, location)),
			_ => Err(Error::UnexpectedToken {
				expectation: "expected an identifier".to_string(),
				location,
			}),
		}
	}

	fn parse_vardecl(&mut self) -> Result<NodeId, Error>
	{
		let (value_type, location) = self.parse_type()?;
		let (name, _) = self.parse_identifier()?;

		let (is_array, array_length) = if self.peek_is(&Token::BracketLeft)
		{
			self.expect(Token::BracketLeft, "expected '['")?;
			let (token, length_location) = self.pop("expected array length")?;
			let length = match token
			{
				Token::IntLiteral(length) => length,
				_ =>
				{
					return Err(Error::UnexpectedToken {
						expectation: "expected array length".to_string(),
						location: length_location,
					});
				}
			};
			self.expect(Token::BracketRight, "expected ']'")?;
			(true, length)
		}
		else
		{
			(false, 1)
		};

		self.expect(Token::Semicolon, "expected ';'")?;
		let node = self.ast.add(
			NodeKind::VarDecl {
				name,
				value_type,
				is_array,
				array_length,
			},
			location,
		);
		Ok(node)
	}

	fn parse_funcdecl(&mut self) -> Result<NodeId, Error>
	{
		let location = self.expect(Token::Def, "expected 'def'")?;
		let (return_type, _) = self.parse_type()?;
		let (name, _) = self.parse_identifier()?;

		self.expect(Token::ParenLeft, "expected '('")?;
		let mut parameters = Vec::new();
		if !self.peek_is(&Token::ParenRight)
		{
			loop
			{
				let (value_type, _) = self.parse_type()?;
				let (name, _) = self.parse_identifier()?;
				parameters.push(Parameter { name, value_type });
				if self.peek_is(&Token::Comma)
				{
					self.expect(Token::Comma, "expected ','")?;
				}
				else
				{
					break;
				}
			}
		}
		self.expect(Token::ParenRight, "expected ')'")?;

		let body = self.parse_block()?;
		let node = self.ast.add(
			NodeKind::FuncDecl {
				name,
				return_type,
				parameters,
				body,
			},
			location,
		);
		Ok(node)
	}

	fn parse_block(&mut self) -> Result<NodeId, Error>
	{
		let location = self.expect(Token::BraceLeft, "expected '{'")?;

		// Local declarations precede the statements of a block; a statement
		// never starts with a type keyword.
		let mut variables = Vec::new();
		while matches!(
			self.peek(),
			Some(Token::Int | Token::Bool | Token::Void | Token::Str)
		)
		{
			let variable = self.parse_vardecl()?;
			variables.push(variable);
		}

		let mut statements = Vec::new();
		while !self.peek_is(&Token::BraceRight)
		{
			let statement = self.parse_statement()?;
			statements.push(statement);
		}
		self.expect(Token::BraceRight, "expected '}'")?;

		let node = self.ast.add(
			NodeKind::Block {
				variables,
				statements,
			},
			location,
		);
		Ok(node)
	}

	fn parse_statement(&mut self) -> Result<NodeId, Error>
	{
		match self.peek()
		{
			Some(Token::If) =>
			{
				let location = self.expect(Token::If, "expected 'if'")?;
				self.expect(Token::ParenLeft, "expected '('")?;
				let condition = self.parse_expression()?;
				self.expect(Token::ParenRight, "expected ')'")?;
				let if_block = self.parse_block()?;
				let else_block = if self.peek_is(&Token::Else)
				{
					self.expect(Token::Else, "expected 'else'")?;
					Some(self.parse_block()?)
				}
				else
				{
					None
				};
				let node = self.ast.add(
					NodeKind::Conditional {
						condition,
						if_block,
						else_block,
					},
					location,
				);
				Ok(node)
			}
			Some(Token::While) =>
			{
				let location = self.expect(Token::While, "expected 'while'")?;
				self.expect(Token::ParenLeft, "expected '('")?;
				let condition = self.parse_expression()?;
				self.expect(Token::ParenRight, "expected ')'")?;
				let body = self.parse_block()?;
				let node = self
					.ast
					.add(NodeKind::WhileLoop { condition, body }, location);
				Ok(node)
			}
			Some(Token::Return) =>
			{
				let location = self.expect(Token::Return, "expected 'return'")?;
				let value = if self.peek_is(&Token::Semicolon)
				{
					None
				}
				else
				{
					Some(self.parse_expression()?)
				};
				self.expect(Token::Semicolon, "expected ';'")?;
				let node = self.ast.add(NodeKind::Return { value }, location);
				Ok(node)
			}
			Some(Token::Break) =>
			{
				let location = self.expect(Token::Break, "expected 'break'")?;
				self.expect(Token::Semicolon, "expected ';'")?;
				Ok(self.ast.add(NodeKind::Break, location))
			}
			Some(Token::Continue) =>
			{
				let location =
					self.expect(Token::Continue, "expected 'continue'")?;
				self.expect(Token::Semicolon, "expected ';'")?;
				Ok(self.ast.add(NodeKind::Continue, location))
			}
			Some(Token::Identifier(_)) =>
			{
				let (name, location) = self.parse_identifier()?;
				if self.peek_is(&Token::ParenLeft)
				{
					let call = self.parse_call(name, location)?;
					self.expect(Token::Semicolon, "expected ';'")?;
					Ok(call)
				}
				else
				{
					let target = self.parse_location(name, location.clone())?;
					self.expect(Token::Assignment, "expected '='")?;
					let value = self.parse_expression()?;
					self.expect(Token::Semicolon, "expected ';'")?;
					let node = self.ast.add(
						NodeKind::Assignment {
							location: target,
							value,
						},
						location,
					);
					Ok(node)
				}
			}
			_ =>
			{
				let (_, location) = self.pop("expected a statement")?;
				Err(Error::UnexpectedToken {
					expectation: "expected a statement".to_string(),
					location,
				})
			}
		}
	}

	fn parse_location(
		&mut self,
		name: String,
		location: Location,
	) -> Result<NodeId, Error>
	{
		let index = if self.peek_is(&Token::BracketLeft)
		{
			self.expect(Token::BracketLeft, "expected '['")?;
			let index = self.parse_expression()?;
			self.expect(Token::BracketRight, "expected ']'")?;
			Some(index)
		}
		else
		{
			None
		};
		Ok(self.ast.add(NodeKind::Location { name, index }, location))
	}

	fn parse_call(
		&mut self,
		name: String,
		location: Location,
	) -> Result<NodeId, Error>
	{
		self.expect(Token::ParenLeft, "expected '('")?;
		let mut arguments = Vec::new();
		if !self.peek_is(&Token::ParenRight)
		{
			loop
			{
				let argument = self.parse_expression()?;
				arguments.push(argument);
				if self.peek_is(&Token::Comma)
				{
					self.expect(Token::Comma, "expected ','")?;
				}
				else
				{
					break;
				}
			}
		}
		self.expect(Token::ParenRight, "expected ')'")?;
		Ok(self.ast.add(NodeKind::FuncCall { name, arguments }, location))
	}

	fn parse_expression(&mut self) -> Result<NodeId, Error>
	{
		self.parse_binary_ops(0)
	}

	/// Parse left-associative binary operators with precedence climbing;
	/// `precedence` is the lowest binding strength still accepted.
	fn parse_binary_ops(&mut self, precedence: usize) -> Result<NodeId, Error>
	{
		if precedence >= NUM_PRECEDENCE_LEVELS
		{
			return self.parse_unary_expression();
		}

		let mut left = self.parse_binary_ops(precedence + 1)?;
		while let Some(op) = self.peek().and_then(binary_op_at(precedence))
		{
			let (_, location) = self.pop("expected an operator")?;
			let right = self.parse_binary_ops(precedence + 1)?;
			left = self
				.ast
				.add(NodeKind::BinaryOp { op, left, right }, location);
		}
		Ok(left)
	}

	fn parse_unary_expression(&mut self) -> Result<NodeId, Error>
	{
		let op = match self.peek()
		{
			Some(Token::Minus) => Some(UnaryOp::Negative),
			Some(Token::Not) => Some(UnaryOp::Not),
			_ => None,
		};
		match op
		{
			Some(op) =>
			{
				let (_, location) = self.pop("expected an operator")?;
				let child = self.parse_unary_expression()?;
				Ok(self.ast.add(NodeKind::UnaryOp { op, child }, location))
			}
			None => self.parse_primary_expression(),
		}
	}

	fn parse_primary_expression(&mut self) -> Result<NodeId, Error>
	{
		let (token, location) = self.pop("expected an expression")?;
		match token
		{
			Token::ParenLeft =>
			{
				let inner = self.parse_expression()?;
				self.expect(Token::ParenRight, "expected ')'")?;
				Ok(inner)
			}
			Token::IntLiteral(value) => Ok(self
				.ast
				.add(NodeKind::Literal(Literal::Int(value)), location)),
			Token::BoolLiteral(value) => Ok(self
				.ast
				.add(NodeKind::Literal(Literal::Bool(value)), location)),
			Token::StringLiteral(value) => Ok(self
				.ast
				.add(NodeKind::Literal(Literal::Str(value)), location)),
			Token::Identifier(name) =>
			{
				if self.peek_is(&Token::ParenLeft)
				{
					self.parse_call(name, location)
				}
				else
				{
					self.parse_location(name, location)
				}
			}
			_ => Err(Error::UnexpectedToken {
				expectation: "expected an expression".to_string(),
				location,
			}),
		}
	}
}

const NUM_PRECEDENCE_LEVELS: usize = 6;

/// The binary operators at one precedence level, weakest first.
fn binary_op_at(precedence: usize) -> impl Fn(&Token) -> Option<BinaryOp>
{
	move |token| match (precedence, token)
	{
		(0, Token::Or) => Some(BinaryOp::Or),
		(1, Token::And) => Some(BinaryOp::And),
		(2, Token::Equals) => Some(BinaryOp::Equals),
		(2, Token::DoesNotEqual) => Some(BinaryOp::DoesNotEqual),
		(3, Token::Less) => Some(BinaryOp::IsLess),
		(3, Token::LessEq) => Some(BinaryOp::IsLE),
		(3, Token::GreaterEq) => Some(BinaryOp::IsGE),
		(3, Token::Greater) => Some(BinaryOp::IsGreater),
		(4, Token::Plus) => Some(BinaryOp::Add),
		(4, Token::Minus) => Some(BinaryOp::Subtract),
		(5, Token::Times) => Some(BinaryOp::Multiply),
		(5, Token::Divide) => Some(BinaryOp::Divide),
		(5, Token::Modulo) => Some(BinaryOp::Modulo),
		_ => None,
	}
}
