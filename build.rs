//! Build script to generate the embedded category table
//!
//! Reads `data/categories.txt` and generates Rust source code with a const slice.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_category_table(
        "data/categories.txt",
        &Path::new(&out_dir).join("categories.rs"),
        "CATEGORIES",
        "Fixed book categories used for partial book credit",
    );

    // Rebuild if the table changes
    println!("cargo:rerun-if-changed=data/categories.txt");
}

fn generate_category_table(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<(&str, Vec<&str>)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (name, books) = line
                .split_once(':')
                .unwrap_or_else(|| panic!("Malformed category line in {input_path}: {line}"));
            (name.trim(), books.split_whitespace().collect())
        })
        .collect();
    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated category table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &[&str])] = &[").unwrap();

    for (name, books) in rows {
        let quoted: Vec<String> = books.iter().map(|b| format!("\"{b}\"")).collect();
        writeln!(output, "    (\"{name}\", &[{}]),", quoted.join(", ")).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of categories in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
