use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::{env, fs};

const CASES_PATH: &str = "tests/cases/";
const CASES_WRITE: &str = "tests/integ_test_cases.rs";

fn main() -> Result<(), String> {
    println!("cargo::rerun-if-changed={CASES_PATH}");
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_integ_test_cases(&out_dir)
}

/// Turns each `tests/cases/*.toml` into a test mod named after the file, with one `#[test]` per
/// `[expect.NAME]` table. The generated file gets picked up by `tests/integ_test.rs` via
/// `include!`.
fn generate_integ_test_cases(out_dir: &str) -> Result<(), String> {
    let mut case_files = Vec::new();
    for dir_entry in fs::read_dir(CASES_PATH).map_err(|e| e.to_string())? {
        let dir_entry = dir_entry.map_err(|e| e.to_string())?;
        if !dir_entry.file_type().map_err(|e| e.to_string())?.is_file() {
            return Err(format!("{}: not a regular file", dir_entry.path().to_string_lossy()));
        }
        case_files.push(dir_entry.path());
    }
    // read_dir order is platform-dependent; sort so the generated file is stable
    case_files.sort();

    let mut out = String::with_capacity(4096);
    for path in case_files {
        let path_lossy = path.to_string_lossy().to_string();
        let Some(stem) = path.file_stem() else {
            return Err(format!("{path_lossy}: no file stem"));
        };
        let contents = fs::read_to_string(&path).map_err(|e| format!("{path_lossy}: {e}"))?;
        let spec_file: TestSpecFile = toml::from_str(&contents).map_err(|e| format!("{path_lossy}: {e}"))?;
        write_mod(&mut out, &stem.to_string_lossy(), &spec_file);
    }

    let out_path = Path::new(out_dir).join(CASES_WRITE);
    fs::create_dir_all(out_path.parent().expect("no parent dir found"))
        .map_err(|e| format!("mkdirs on {}: {}", out_path.to_string_lossy(), e))?;
    fs::write(&out_path, out).map_err(|e| format!("writing to {}: {}", out_path.to_string_lossy(), e))?;

    Ok(())
}

fn write_mod(out: &mut String, mod_name: &str, spec_file: &TestSpecFile) {
    out.push_str(&format!("mod {mod_name} {{\n"));
    out.push_str("    use super::*;\n\n");
    out.push_str(&format!("    const INPUT: &str = {:?};\n", spec_file.given.input));

    let empty = BTreeMap::new();
    let files = spec_file.given.files.as_ref().unwrap_or(&empty);
    out.push_str(&format!("    const FILES: [(&str, &str); {}] = [", files.len()));
    for (file_name, file_contents) in files {
        out.push_str(&format!("({file_name:?}, {file_contents:?}), "));
    }
    out.push_str("];\n");

    for (case_name, expect) in &spec_file.expect {
        write_test_fn(out, case_name, expect);
    }

    out.push_str("}\n\n");
}

fn write_test_fn(out: &mut String, case_name: &str, expect: &TestExpect) {
    let fn_name = case_name
        .replace(|ch: char| !(ch.is_alphanumeric() || ch.is_whitespace()), "")
        .replace(|ch: char| ch.is_whitespace(), "_");
    out.push('\n');
    out.push_str("    #[test]\n");
    out.push_str(&format!("    fn {fn_name}() {{\n"));
    out.push_str("        Case {\n");
    out.push_str(&format!("            cli_args: &{:?},\n", expect.cli_args));
    out.push_str(&format!("            expect_output: {:?},\n", expect.output));
    out.push_str(&format!(
        "            expect_error: {:?},\n",
        expect.output_err.as_deref().unwrap_or_default()
    ));
    out.push_str(&format!(
        "            expect_output_json: {},\n",
        expect.output_json.unwrap_or(false)
    ));
    out.push_str(&format!(
        "            expect_success: {},\n",
        expect.expect_success.unwrap_or(true)
    ));
    out.push_str("            input: INPUT,\n");
    out.push_str("            files: &FILES,\n");
    out.push_str("        }\n");
    out.push_str("        .check();\n");
    out.push_str("    }\n");
}

#[derive(Deserialize)]
struct TestSpecFile {
    given: TestGiven,
    expect: BTreeMap<String, TestExpect>,
}

#[derive(Deserialize)]
struct TestGiven {
    input: String,
    files: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize)]
struct TestExpect {
    cli_args: Vec<String>,
    output: String,
    output_json: Option<bool>,
    expect_success: Option<bool>,
    output_err: Option<String>,
}
