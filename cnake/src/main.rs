use cnake::value::Arithmetic;
use cnake::{Number, Object, Var};

fn setup_tracing() {
	use tracing::level_filters::LevelFilter;

	let loglevel = std::env::var("CNAKE_LOGGING");
	let filter = match loglevel.as_ref().map(|x| x.as_ref()) {
		Ok("T") | Ok("TRACE") => LevelFilter::TRACE,
		Ok("D") | Ok("DEBUG") => LevelFilter::DEBUG,
		Ok("I") | Ok("INFO") => LevelFilter::INFO,
		Ok("W") | Ok("WARN") => LevelFilter::WARN,
		Ok("E") | Ok("ERROR") => LevelFilter::ERROR,
		Ok("O") | Ok("OFF") => LevelFilter::OFF,
		_ => return,
	};

	tracing_subscriber::fmt().with_max_level(filter).init();
}

fn print_pair(a: Number, b: Number, a_correct: f64, b_correct: f64) {
	println!("Number a: {a} Number b: {b}");
	println!("Correct a: {} Correct b: {}\n", Number::new(a_correct), Number::new(b_correct));
}

macro_rules! binary_op {
	($op:tt) => {{
		let b = Number::from(5);
		let a = b $op Number::from(true);
		let b = a $op b;

		let b_correct = 5.0;
		let a_correct = b_correct $op 1.0;
		let b_correct = a_correct $op b_correct;

		println!("Testing operator: '{}'", stringify!($op));
		print_pair(a, b, a_correct, b_correct);
	}};
}

macro_rules! compound_op {
	($op:tt) => {{
		let mut a = Number::new(6.14567);
		let mut b = Number::from(-2);
		b $op Number::from(true);
		a $op b;

		let mut a_correct = 6.14567;
		let mut b_correct = -2.0;
		b_correct $op 1.0;
		a_correct $op b_correct;

		println!("Testing operator: '{}'", stringify!($op));
		print_pair(a, b, a_correct, b_correct);
	}};
}

fn main() {
	setup_tracing();

	println!("Testing binary operators");
	binary_op!(+);
	binary_op!(-);
	binary_op!(*);
	binary_op!(/);

	println!("Testing compound operators");
	compound_op!(+=);
	compound_op!(-=);
	compound_op!(*=);
	compound_op!(/=);

	println!("Testing vars");
	let mut var = Var::new();
	println!("default: '{var}' ({})", var.typename());
	var.assign(&Object::from(7.0546_f32));
	var.add_in_place(&Var::from(true)).mul_in_place(&2.0);
	println!("(7.0546f + true) * 2: {var} ({})", var.typename());
	println!("None + {var}: {}", Var::new() + &var);

	let x = Object::from(1.0).add_scratch(&Object::from(2.0));
	let y = Object::from(10.0).add_scratch(&Object::from(20.0));
	println!("scratch: 1 + 2 reads {x} after 10 + 20 reads {y}");
}
