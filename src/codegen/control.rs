//! Loops and conditionals.
//!
//! Every construct takes one id from a per-run counter and derives all of its
//! labels from it, so nested and sibling constructs never share a label.
//!
//! The two conditional forms branch differently: `IF … THEN … END` skips the
//! body on the *false* jump, while the `ELSE` form enters the first body on
//! the *true* jump. The VM is the judge of which one is right, both are kept
//! as they are.

use log::trace;

use super::{
	CodeGen, Condition,
	instruction::{Code, Instruction, Jump, Label, LabelKind},
};

impl CodeGen {
	fn next_label_id(&mut self) -> usize {
		let id = self.next_label;
		self.next_label += 1;
		trace!("Allocated label id {id}");
		id
	}

	/// ```text
	/// :while_N
	/// <test>
	/// <false jump> :after_N
	/// <body>
	/// JP :while_N
	/// :after_N
	/// ```
	pub fn while_loop(&mut self, condition: Condition, body: Vec<Code>) -> Code {
		let id = self.next_label_id();
		let top = Label::new(LabelKind::While, id);
		let after = Label::new(LabelKind::After, id);
		let (test, jumps) = self.branch_on(condition);

		let mut code = Code::new().then(Instruction::Mark(top));
		code.append(test);
		code.push(Instruction::Jump(jumps.on_false, after));
		body.into_iter().for_each(|statement| code.append(statement));
		code.then(Instruction::Jump(Jump::Jp, top)).then(Instruction::Mark(after))
	}

	/// ```text
	/// <test>
	/// <false jump> :endif_N
	/// JP :true_N
	/// :true_N
	/// <body>
	/// :endif_N
	/// ```
	pub fn if_then(&mut self, condition: Condition, body: Vec<Code>) -> Code {
		let id = self.next_label_id();
		let on_true = Label::new(LabelKind::True, id);
		let end = Label::new(LabelKind::EndIf, id);
		let (mut code, jumps) = self.branch_on(condition);

		code.push(Instruction::Jump(jumps.on_false, end));
		code.push(Instruction::Jump(Jump::Jp, on_true));
		code.push(Instruction::Mark(on_true));
		body.into_iter().for_each(|statement| code.append(statement));
		code.then(Instruction::Mark(end))
	}

	/// ```text
	/// <test>
	/// <true jump> :true_N
	/// JP :false_N
	/// :true_N
	/// <then body>
	/// JP :endif_N
	/// :false_N
	/// <else body>
	/// :endif_N
	/// ```
	pub fn if_else(&mut self, condition: Condition, then_body: Vec<Code>, else_body: Vec<Code>) -> Code {
		let id = self.next_label_id();
		let on_true = Label::new(LabelKind::True, id);
		let on_false = Label::new(LabelKind::False, id);
		let end = Label::new(LabelKind::EndIf, id);
		let (mut code, jumps) = self.branch_on(condition);

		code.push(Instruction::Jump(jumps.on_true, on_true));
		code.push(Instruction::Jump(Jump::Jp, on_false));
		code.push(Instruction::Mark(on_true));
		then_body.into_iter().for_each(|statement| code.append(statement));
		code.push(Instruction::Jump(Jump::Jp, end));
		code.push(Instruction::Mark(on_false));
		else_body.into_iter().for_each(|statement| code.append(statement));
		code.then(Instruction::Mark(end))
	}
}
