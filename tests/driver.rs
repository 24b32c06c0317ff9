#[cfg(test)]
mod driver_tests {
    use lambda_let as ll;

    use ll::error::LangError;
    use ll::source::read_source;

    use std::io::Write;
    use std::path::PathBuf;
    use std::process::{Command, Output, Stdio};

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "lambda-let-{}-{}",
            std::process::id(),
            name
        ));

        std::fs::write(&path, contents).expect("scratch file should be writable");

        path
    }

    fn run_on_file(subcommand: &str, name: &str, contents: &[u8]) -> Output {
        let path = scratch_file(name, contents);
        let output = Command::new(env!("CARGO_BIN_EXE_lambda-let"))
            .arg(subcommand)
            .arg(&path)
            .output()
            .expect("binary should start");

        let _ = std::fs::remove_file(&path);

        output
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }

    #[test]
    fn test_evaluate_prints_value() {
        let output = run_on_file("evaluate", "ok.ll", b"let id = \\x -> x in id 7");

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "7\n");
    }

    #[test]
    fn test_missing_file_exits_74() {
        let missing = std::env::temp_dir().join("lambda-let-does-not-exist.ll");
        let output = Command::new(env!("CARGO_BIN_EXE_lambda-let"))
            .arg("evaluate")
            .arg(&missing)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(74));
        assert!(stderr(&output).contains("Failed to read"));
        assert!(!stderr(&output).contains("backtrace"));
        assert!(stdout(&output).is_empty());
    }

    #[test]
    fn test_invalid_utf8_exits_65() {
        let output = run_on_file("evaluate", "bad-utf8.ll", b"\xff");

        assert_eq!(output.status.code(), Some(65));
        assert!(stdout(&output).is_empty());
    }

    #[test]
    fn test_syntax_error_exits_65() {
        let output = run_on_file("parse", "unclosed.ll", b"(1");

        assert_eq!(output.status.code(), Some(65));
        assert!(stderr(&output).contains("Unclosed"));
        assert!(stdout(&output).is_empty());
    }

    #[test]
    fn test_evaluation_error_exits_70_without_value() {
        let output = run_on_file("evaluate", "unbound.ll", b"let x = x in x");

        assert_eq!(output.status.code(), Some(70));
        assert!(stderr(&output).contains("Unbound variable 'x'"));
        assert!(stdout(&output).is_empty());
    }

    #[test]
    fn test_tokenize_reports_every_bad_character() {
        let output = run_on_file("tokenize", "chars.ll", b"1 $ x #");

        assert_eq!(output.status.code(), Some(65));
        assert_eq!(stdout(&output), "NUMBER 1 1\nIDENTIFIER x null\nEOF  null\n");
        assert_eq!(stderr(&output).lines().count(), 2);
    }

    #[test]
    fn test_parse_json() {
        let path = scratch_file("json.ll", b"f 1");
        let output = Command::new(env!("CARGO_BIN_EXE_lambda-let"))
            .args(["parse", "--json"])
            .arg(&path)
            .output()
            .unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(output.status.code(), Some(0));

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["Apply"]["func"]["Var"], "f");
        assert_eq!(json["Apply"]["arg"]["Number"], 1);
    }

    #[test]
    fn test_reads_stdin_without_filename() {
        let mut child = Command::new(env!("CARGO_BIN_EXE_lambda-let"))
            .arg("evaluate")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        child
            .stdin
            .take()
            .unwrap()
            .write_all(b"(\\a -> \\b -> b) 1 true")
            .unwrap();

        let output = child.wait_with_output().unwrap();

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "true\n");
    }

    #[test]
    fn test_read_source_error_kinds() {
        let missing = std::env::temp_dir().join("lambda-let-also-missing.ll");
        let err = read_source(Some(missing.as_path())).unwrap_err();

        assert!(matches!(err, LangError::Read { ref path, .. } if *path == missing));
        assert_eq!(err.exit_code(), 74);

        let bad = scratch_file("bad-utf8-lib.ll", b"x \xfe");
        let err = read_source(Some(bad.as_path())).unwrap_err();
        let _ = std::fs::remove_file(&bad);

        assert!(matches!(err, LangError::Utf8(_)));
        assert_eq!(err.exit_code(), 65);

        let good = scratch_file("good-lib.ll", b"\\x -> x");
        let text = read_source(Some(good.as_path())).unwrap();
        let _ = std::fs::remove_file(&good);

        assert_eq!(text, "\\x -> x");
    }
}
