//! Drives the real command-line engine against shell scripts standing in
//! for `tesseract`.
#![cfg(unix)]

use std::cell::RefCell;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::{tempdir, TempDir};
use tesseract_gui_lib::error::OcrError;
use tesseract_gui_lib::services::controller::{Controller, DisplayLayer, FileFilter};
use tesseract_gui_lib::services::ocr::{OcrEngine, TesseractCli};

// Writing an executable while another test forks can make exec fail with
// ETXTBSY, so script-based tests run one at a time.
static SCRIPTS: Mutex<()> = Mutex::new(());

const VERSION_BRANCH: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "tesseract 5.3.0"
  echo " leptonica-1.82.0"
  exit 0
fi
"#;

fn fake_tesseract(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("fake-tesseract");
    fs::write(&path, format!("{}{}", VERSION_BRANCH, body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn image_in(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, b"fake image").unwrap();
    path
}

struct ScriptedDisplay {
    pick: RefCell<Option<PathBuf>>,
    statuses: RefCell<Vec<String>>,
}

impl ScriptedDisplay {
    fn picking(path: PathBuf) -> Self {
        Self {
            pick: RefCell::new(Some(path)),
            statuses: RefCell::new(Vec::new()),
        }
    }
}

impl DisplayLayer for ScriptedDisplay {
    fn show_status(&self, status: &str) {
        self.statuses.borrow_mut().push(status.to_string());
    }

    fn show_text(&self, _text: &str) {}

    fn pick_file(&self, _title: &str, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.pick.borrow_mut().take()
    }
}

#[test]
fn probe_reports_script_as_available() {
    let _guard = SCRIPTS.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempdir().unwrap();
    let engine = TesseractCli::with_program(fake_tesseract(&dir, "exit 0\n"));

    assert_eq!(engine.version().as_deref(), Some("5.3.0"));
    assert!(engine.is_available());
}

#[test]
fn probe_rejects_failing_version_command() {
    let _guard = SCRIPTS.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken-tesseract");
    fs::write(&path, "#!/bin/sh\nexit 127\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

    let engine = TesseractCli::with_program(path);
    assert!(!engine.is_available());
}

#[test]
fn run_passes_arguments_and_returns_text_path() {
    let _guard = SCRIPTS.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempdir().unwrap();
    let script = fake_tesseract(
        &dir,
        r#"printf '%s\n' "$@" > "$(dirname "$2")/args.log"
printf '  Hello\n' > "$2.txt"
"#,
    );
    let input = image_in(&dir, "img.png");

    let output = TesseractCli::with_program(script).run(&input, "deu").unwrap();

    assert_eq!(output, dir.path().join("img_ocr.txt"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "  Hello\n");

    let args = fs::read_to_string(dir.path().join("args.log")).unwrap();
    let args: Vec<&str> = args.lines().collect();
    let expected_base = dir.path().join("img_ocr");
    assert_eq!(
        args,
        vec![
            input.to_str().unwrap(),
            expected_base.to_str().unwrap(),
            "-l",
            "deu"
        ]
    );
}

#[test]
fn run_reports_exit_status_and_stderr() {
    let _guard = SCRIPTS.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempdir().unwrap();
    let script = fake_tesseract(
        &dir,
        r#"echo "Failed loading language 'xyz'" >&2
exit 1
"#,
    );
    let input = image_in(&dir, "img.png");

    let err = TesseractCli::with_program(script).run(&input, "xyz").unwrap_err();

    match &err {
        OcrError::ToolFailed { status, stderr, .. } => {
            assert_eq!(status.code(), Some(1));
            assert_eq!(stderr, "Failed loading language 'xyz'");
        }
        other => panic!("expected tool failure, got {:?}", other),
    }
    assert!(err.to_string().contains("Failed loading language 'xyz'"));
}

#[test]
fn controller_end_to_end_with_script() {
    let _guard = SCRIPTS.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempdir().unwrap();
    let script = fake_tesseract(&dir, "printf '\\n  Hello %s\\n' \"$4\" > \"$2.txt\"\n");
    let input = image_in(&dir, "photo.jpeg");

    let mut app = Controller::new(TesseractCli::with_program(script), dir.path());
    let display = ScriptedDisplay::picking(input);

    app.choose_file(&display);
    app.convert(&display);

    assert_eq!(app.output_text(), "Hello eng\n");
    assert_eq!(app.status(), "Image converted succesfully");
    assert!(dir.path().join("photo_ocr.txt").is_file());
    assert_eq!(
        display.statuses.borrow().as_slice(),
        [
            "File selected",
            "OCR executing, please wait..",
            "Image converted succesfully"
        ]
    );
}

#[test]
fn controller_surfaces_tool_failure() {
    let _guard = SCRIPTS.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempdir().unwrap();
    let script = fake_tesseract(&dir, "echo 'cannot read image' >&2\nexit 2\n");
    let input = image_in(&dir, "img.png");

    let mut app = Controller::new(TesseractCli::with_program(script), dir.path());
    let display = ScriptedDisplay::picking(input);

    app.choose_file(&display);
    app.convert(&display);

    assert!(app.status().starts_with("Error: "), "{}", app.status());
    assert!(app.status().contains("cannot read image"), "{}", app.status());
    assert_eq!(app.output_text(), "Converted text will display here");
    assert!(!dir.path().join("img_ocr.txt").exists());
}

#[test]
#[ignore] // Needs tesseract on the search path
fn real_tesseract_probe() {
    assert!(TesseractCli::new().is_available());
}
