//! Build script to generate the embedded word list
//!
//! Reads the tab-separated vocabulary file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words.tsv",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Built-in SAT vocabulary list",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.tsv");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.split('\t').map(str::trim).collect())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({} words)", rows.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[EmbeddedWord] = &[").unwrap();

    for (line_no, columns) in rows.iter().enumerate() {
        let word = columns.first().copied().unwrap_or_default();
        assert!(
            !word.is_empty(),
            "{input_path}: entry {} has an empty headword",
            line_no + 1
        );

        writeln!(output, "    EmbeddedWord {{").unwrap();
        writeln!(output, "        word: {word:?},").unwrap();
        writeln!(output, "        part_of_speech: {},", optional(columns.get(1))).unwrap();
        writeln!(output, "        definition: {},", optional(columns.get(2))).unwrap();
        writeln!(output, "        example: {},", optional(columns.get(3))).unwrap();
        writeln!(output, "    }},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", rows.len()).unwrap();
}

fn optional(column: Option<&&str>) -> String {
    match column {
        Some(value) if !value.is_empty() => format!("Some({value:?})"),
        _ => "None".to_string(),
    }
}
