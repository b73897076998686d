use predicates::str;
use rstest::rstest;
use test_utilities::*;

#[test]
fn command() {
	geoshape_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("convert", "[OPTIONS] <INPUT_FILE> [OUTPUT_FILE]")]
#[case("probe", "[OPTIONS] <INPUT_FILE>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	geoshape_cmd()
		.args(sub_command.split(' '))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[test]
fn unknown_subcommand() {
	geoshape_cmd()
		.arg("serve")
		.assert()
		.failure()
		.code(2)
		.stderr(str::contains("unrecognized subcommand 'serve'"));
}
