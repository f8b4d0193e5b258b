/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use std::fs;
use std::process::Command;

/// How a case's stdout (or, for failures, stderr) is held against the
/// expected output file.
#[derive(Clone, Copy)]
enum Expect {
	/// stdout must equal the expected file
	Exact,
	/// stdout must contain the expected file's text
	Contains,
	/// the run must fail with the expected text on stderr
	Failure,
}

/// Dynamically collects test cases from a given directory. Inputs are named
/// `<case>_in.<ext>` and paired with `<case>_out.txt`.
fn collect_test_cases(subfolder: &str) -> Vec<(String, String)> {
	let dir_path = format!("tests/test_data/{}", subfolder);

	let mut test_cases = vec![];

	if let Ok(entries) = fs::read_dir(&dir_path) {
		let mut inputs = vec![];
		let mut outputs = vec![];

		for entry in entries.flatten() {
			let file_name =
				entry.file_name().into_string().unwrap_or_default();
			if file_name.ends_with("_out.txt") {
				outputs.push(file_name);
			} else if file_name.contains("_in.") {
				inputs.push(file_name);
			}
		}

		inputs.sort();
		outputs.sort();

		for input_file in inputs {
			let stem = input_file.split("_in.").next().unwrap_or_default();
			let output_file = format!("{}_out.txt", stem);
			if outputs.contains(&output_file) {
				test_cases.push((input_file, output_file));
			}
		}
	}

	assert!(!test_cases.is_empty(), "no test cases in {}", dir_path);
	test_cases
}

#[test]
fn test_integration_export() {
	let test_cases = collect_test_cases("export");
	execute("export", test_cases, Expect::Exact, vec!["--out-format", "csv"]);
}

#[test]
fn test_integration_rate_override() {
	let test_cases = collect_test_cases("override");
	execute(
		"override",
		test_cases,
		Expect::Exact,
		vec!["--out-format", "csv", "-r", "0"],
	);
}

#[test]
fn test_integration_json_input() {
	let test_cases = collect_test_cases("json");
	execute("json", test_cases, Expect::Exact, vec!["--out-format", "csv"]);
}

#[test]
fn test_integration_summary() {
	let test_cases = collect_test_cases("summary");
	execute("summary", test_cases, Expect::Contains, vec![]);
}

#[test]
fn test_integration_should_fail() {
	let test_cases = collect_test_cases("failures");
	execute("failures", test_cases, Expect::Failure, vec![]);
}

#[test]
fn test_integration_bad_precision() {
	let output = Command::new("cargo")
		.args([
			"run",
			"--",
			"-f",
			"tests/test_data/summary/example_in.csv",
			"-p",
			"50",
		])
		.output()
		.expect("Failed to execute process");
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr)
		.contains("Maximum precision is 12"));
}

#[test]
fn test_integration_config_override_rate() {
	let config_path = std::env::temp_dir()
		.join(format!("eol-override-{}.toml", std::process::id()));
	fs::write(&config_path, "[defaults]\noverride_rate = 0.0\n")
		.expect("Failed to write config");

	let output = Command::new("cargo")
		.args([
			"run",
			"--",
			"-f",
			"tests/test_data/summary/example_in.csv",
			"--config",
			config_path.to_str().unwrap_or_default(),
		])
		.output()
		.expect("Failed to execute process");
	let _ = fs::remove_file(&config_path);

	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr)
		.contains("override_rate 0% from the config file"));
}

fn execute(
	subfolder: &str,
	test_cases: Vec<(String, String)>,
	expect: Expect,
	args: Vec<&str>,
) {
	for (input_file, expected_output_file) in test_cases {
		println!("running for {}...", input_file);

		let loc = format!("{}/{}/{}", "tests/test_data", subfolder, input_file);

		let all_args =
			[vec!["run", "--", "-f", loc.as_str()], args.clone()].concat();

		let output = Command::new("cargo")
			.args(all_args)
			.output()
			.expect("Failed to execute process");

		let expected_output = fs::read_to_string(format!(
			"{}/{}/{}",
			"tests/test_data", subfolder, expected_output_file
		))
		.expect("Failed to read expected output file");
		let expected_output = expected_output.trim();

		if let Expect::Failure = expect {
			assert!(
				!output.status.success(),
				"{} unexpectedly succeeded!",
				input_file
			);
			let stderr = String::from_utf8_lossy(&output.stderr);
			assert!(
				stderr.contains(expected_output),
				"{} failed without {:?}; stderr:\n{}",
				input_file,
				expected_output,
				stderr
			);
			continue;
		}

		assert!(
			output.status.success(),
			"{} failed processing: {}",
			input_file,
			String::from_utf8_lossy(&output.stderr)
		);

		let stdout = String::from_utf8_lossy(&output.stdout);

		match expect {
			Expect::Exact => assert_eq!(
				stdout.trim(),
				expected_output,
				"Output did not match for {}; expected:\n{}\ngot:\n{}",
				input_file,
				expected_output,
				stdout.trim()
			),
			_ => assert!(
				stdout.contains(expected_output),
				"Output for {} lacks {:?}; got:\n{}",
				input_file,
				expected_output,
				stdout
			),
		}
	}
}
