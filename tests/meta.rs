//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

use decafc::ast::{BinaryOp, DecafType, UnaryOp};

use comfy_table::Table;

const BINARY_OPS: [BinaryOp; 13] = [
	BinaryOp::Or,
	BinaryOp::And,
	BinaryOp::Equals,
	BinaryOp::DoesNotEqual,
	BinaryOp::IsLess,
	BinaryOp::IsLE,
	BinaryOp::IsGE,
	BinaryOp::IsGreater,
	BinaryOp::Add,
	BinaryOp::Subtract,
	BinaryOp::Multiply,
	BinaryOp::Divide,
	BinaryOp::Modulo,
];

const UNARY_OPS: [UnaryOp; 2] = [UnaryOp::Negative, UnaryOp::Not];

fn show_types(types: enumset::EnumSet<DecafType>) -> String
{
	let shown: Vec<String> = types.iter().map(|x| x.to_string()).collect();
	shown.join(" | ")
}

#[test]
fn check_operator_typing_rules()
{
	let mut table = Table::new();
	table
		.load_preset(comfy_table::presets::UTF8_FULL)
		.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
		.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
	table.set_header(["Operator", "Operands", "Result"]);

	for op in BINARY_OPS
	{
		table.add_row([
			op.to_string(),
			show_types(op.operand_types()),
			op.result_type().to_string(),
		]);

		// Every operand class is a value type; void never qualifies.
		assert!(!op.operand_types().contains(DecafType::Void));
		assert!(!op.operand_types().is_empty());
		assert!(matches!(
			op.result_type(),
			DecafType::Int | DecafType::Bool
		));
	}

	for op in UNARY_OPS
	{
		table.add_row([
			op.to_string(),
			op.operand_type().to_string(),
			op.result_type().to_string(),
		]);

		assert!(op.operand_type() != DecafType::Void);
		assert_eq!(op.operand_type(), op.result_type());
	}

	println!("{table}");
}
