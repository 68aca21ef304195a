//! Prompt compilation for repository summarization.
//!
//! The canonical prompt concatenates every retained file, each labeled
//! with its name, under a single instruction line. An empty file set
//! still yields a valid (if low-content) prompt.

/// Instruction line prefixed to every summarization prompt.
pub const SUMMARY_INSTRUCTION: &str =
    "Analyze the following source files and describe the purpose and architecture of the repository:\n";

/// Compiles the file-labeled summarization prompt.
pub fn compile_source_prompt<'a, I>(files: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut prompt = String::from(SUMMARY_INSTRUCTION);
    for (name, content) in files {
        prompt.push_str("\n--- ");
        prompt.push_str(name);
        prompt.push_str(" ---\n");
        prompt.push_str(content);
        prompt.push('\n');
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_each_file() {
        let prompt = compile_source_prompt(vec![
            ("math.py", "def add(a, b):\n    return a+b"),
            ("a.go", "func run(){}"),
        ]);
        assert!(prompt.starts_with(SUMMARY_INSTRUCTION));
        assert!(prompt.contains("\n--- math.py ---\n"));
        assert!(prompt.contains("def add(a, b):"));
        assert!(prompt.contains("\n--- a.go ---\n"));
    }

    #[test]
    fn empty_file_set_yields_instruction_only() {
        let prompt = compile_source_prompt(Vec::new());
        assert_eq!(prompt, SUMMARY_INSTRUCTION);
    }
}
