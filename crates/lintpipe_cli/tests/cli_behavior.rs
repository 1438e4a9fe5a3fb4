//! Integration tests for CLI behavior
//!
//! ESLint is replaced by small shell scripts so the tests exercise the whole
//! binary without a Node.js toolchain.

#![cfg(unix)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

const UNDEFINED_X: &str = r#"[{"filePath":"a.js","messages":[{"ruleId":"no-undef","severity":2,"message":"'x' is not defined.","line":1,"column":1}],"errorCount":1,"warningCount":0,"fixableErrorCount":0,"fixableWarningCount":0}]"#;

const FIXED_A: &str = r#"[{"filePath":"a.js","messages":[],"errorCount":0,"warningCount":0,"output":"const x = 1;\n"}]"#;

fn lintpipe_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lintpipe"));
    cmd.current_dir(dir.path());
    cmd
}

/// Writes a stand-in eslint script and returns the `--eslint-bin` value.
fn fake_eslint(dir: &TempDir, body: &str) -> String {
    let script = dir.child("fake-eslint.sh");
    script.write_str(&format!("{}\n", body)).unwrap();
    format!("sh {}", script.path().display())
}

/// A stand-in that reads stdin and prints `json`.
fn stdin_eslint(dir: &TempDir, json: &str) -> String {
    fake_eslint(dir, &format!("cat > /dev/null\ncat <<'EOF'\n{}\nEOF", json))
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        let dir = TempDir::new().unwrap();
        lintpipe_cmd(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("--fail-on-unresolved"));
    }

    #[test]
    fn shows_version_with_flag() {
        let dir = TempDir::new().unwrap();
        lintpipe_cmd(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod stream_mode {
    use super::*;

    #[test]
    fn writes_fully_fixed_file_in_place() {
        let dir = TempDir::new().unwrap();
        dir.child("a.js").write_str("var x = 1\n").unwrap();
        let eslint = stdin_eslint(&dir, FIXED_A);

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "a.js"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        dir.child("a.js").assert("const x = 1;\n");
    }

    #[test]
    fn writes_fixed_file_under_out_dir() {
        let dir = TempDir::new().unwrap();
        dir.child("a.js").write_str("var x = 1\n").unwrap();
        let eslint = stdin_eslint(&dir, FIXED_A);

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "--out-dir", "build", "a.js"])
            .assert()
            .success();

        dir.child("a.js").assert("var x = 1\n");
        dir.child("build/a.js").assert("const x = 1;\n");
    }

    #[test]
    fn prints_unfixable_findings_and_succeeds() {
        let dir = TempDir::new().unwrap();
        dir.child("a.js").write_str("x;\n").unwrap();
        let eslint = stdin_eslint(&dir, UNDEFINED_X);

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "a.js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("'x' is not defined"))
            .stdout(predicate::str::contains("1 problem (1 error, 0 warnings)"));

        dir.child("a.js").assert("x;\n");
    }

    #[test]
    fn fails_on_unfixable_findings_when_asked() {
        let dir = TempDir::new().unwrap();
        dir.child("a.js").write_str("x;\n").unwrap();
        let eslint = stdin_eslint(&dir, UNDEFINED_X);

        lintpipe_cmd(&dir)
            .args([
                "--eslint-bin",
                &eslint,
                "--fail-on-unresolved",
                "--format",
                "unix",
                "a.js",
            ])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "a.js:1:1: 'x' is not defined. [Error/no-undef]",
            ));
    }

    #[test]
    fn pipes_file_contents_to_eslint() {
        let dir = TempDir::new().unwrap();
        dir.child("src/a.js").write_str("let y = 2\n").unwrap();
        let eslint = fake_eslint(
            &dir,
            "cat > stdin.txt\nprintf '%s\\n' \"$@\" > args.txt\necho '[]'",
        );

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "--no-cache", "src/a.js"])
            .assert()
            .success();

        dir.child("stdin.txt").assert("let y = 2\n");
        dir.child("args.txt")
            .assert(predicate::str::contains("--stdin-filename\nsrc/a.js\n"))
            .assert(predicate::str::contains("--cache").not());
    }

    #[test]
    fn skips_files_matched_by_eslintignore() {
        let dir = TempDir::new().unwrap();
        dir.child(".eslintignore").write_str("dist/\n").unwrap();
        dir.child("dist/a.js").write_str("x;\n").unwrap();
        let eslint = fake_eslint(&dir, "touch ran.txt\necho '[]'");

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "dist/a.js"])
            .assert()
            .success();

        dir.child("ran.txt").assert(predicate::path::missing());
    }

    #[test]
    fn skips_dotfiles_by_default() {
        let dir = TempDir::new().unwrap();
        dir.child(".hidden.js").write_str("x;\n").unwrap();
        let eslint = fake_eslint(&dir, "touch ran.txt\necho '[]'");

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "--fail-on-unresolved", ".hidden.js"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        dir.child("ran.txt").assert(predicate::path::missing());
    }

    #[test]
    fn nothing_to_do_without_paths() {
        let dir = TempDir::new().unwrap();
        let eslint = fake_eslint(&dir, "touch ran.txt\necho '[]'");

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint])
            .assert()
            .success();

        dir.child("ran.txt").assert(predicate::path::missing());
    }
}

mod path_mode {
    use super::*;

    #[test]
    fn scans_globs_and_reports() {
        let dir = TempDir::new().unwrap();
        let eslint = fake_eslint(
            &dir,
            &format!(
                "printf '%s\\n' \"$@\" > args.txt\ncat <<'EOF'\n{}\nEOF\nexit 1",
                UNDEFINED_X
            ),
        );

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "--files", "src/**/*.js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("'x' is not defined"));

        dir.child("args.txt")
            .assert(predicate::str::contains("--fix-dry-run\n"))
            .assert(predicate::str::ends_with("src/**/*.js\n"));
    }

    #[test]
    fn applies_fixes_to_disk() {
        let dir = TempDir::new().unwrap();
        let target = dir.child("src/a.js");
        target.write_str("var x = 1\n").unwrap();
        let json = format!(
            r#"[{{"filePath":"{}","messages":[],"output":"const x = 1;\n"}}]"#,
            target.path().display()
        );
        let eslint = fake_eslint(&dir, &format!("cat <<'EOF'\n{}\nEOF", json));

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "--files", "src/*.js"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        target.assert("const x = 1;\n");
    }

    #[test]
    fn reads_globs_from_options_file() {
        let dir = TempDir::new().unwrap();
        dir.child(".lintpipe.jsonc")
            .write_str(
                r#"{
                    // lint everything under lib
                    "files": ["lib/**/*.js"],
                    "failOnError": true,
                }"#,
            )
            .unwrap();
        let eslint = fake_eslint(
            &dir,
            &format!("cat <<'EOF'\n{}\nEOF\nexit 1", UNDEFINED_X),
        );

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("'x' is not defined"));
    }

    #[test]
    fn no_fix_leaves_files_alone() {
        let dir = TempDir::new().unwrap();
        let eslint = fake_eslint(&dir, "printf '%s\\n' \"$@\" > args.txt\necho '[]'");

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "--no-fix", "--files", "src/*.js"])
            .assert()
            .success();

        dir.child("args.txt")
            .assert(predicate::str::contains("--fix-dry-run").not());
    }
}

mod errors {
    use super::*;

    #[test]
    fn eslint_crash_exits_with_2() {
        let dir = TempDir::new().unwrap();
        let eslint = fake_eslint(&dir, "echo 'ConfigCrash' >&2\nexit 2");

        // the diagnostic may be wrapped, so match single words
        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "--files", "src/*.js"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("ConfigCrash"))
            .stderr(predicate::str::contains("exit code 2"));
    }

    #[test]
    fn missing_options_file_exits_with_2() {
        let dir = TempDir::new().unwrap();

        lintpipe_cmd(&dir)
            .args(["--config", "missing.jsonc"])
            .assert()
            .code(2);
    }

    #[test]
    fn unknown_formatter_exits_with_2() {
        let dir = TempDir::new().unwrap();
        dir.child("a.js").write_str("x;\n").unwrap();
        let eslint = stdin_eslint(&dir, UNDEFINED_X);

        lintpipe_cmd(&dir)
            .args(["--eslint-bin", &eslint, "--format", "checkstyle", "a.js"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Unknown formatter"));
    }
}
