//! Batch behavior against a recording converter
//!
//! The fake converter never touches the disk; it records what it was asked
//! to do and answers according to a per-file script.

use md2docx::converter::{ConverterConfig, ConverterRunner, Invocation, RunStatus};
use md2docx::error::LaunchError;
use md2docx::report::status_line;
use md2docx::{convert_batch, BatchState, ConversionJob, ConversionOptions, FileOutcome, OutcomeKind};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[derive(Clone, Copy)]
enum Answer {
    Succeed,
    Fail(i32),
    Unlaunchable,
}

struct RecordingConverter {
    calls: RefCell<Vec<Invocation>>,
    answers: HashMap<PathBuf, Answer>,
}

impl RecordingConverter {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            answers: HashMap::new(),
        }
    }

    fn answer(mut self, file: &str, answer: Answer) -> Self {
        self.answers.insert(PathBuf::from(file), answer);
        self
    }

    fn inputs(&self) -> Vec<PathBuf> {
        self.calls.borrow().iter().map(|c| c.input.clone()).collect()
    }
}

impl ConverterRunner for RecordingConverter {
    fn run(&self, invocation: &Invocation) -> Result<RunStatus, LaunchError> {
        self.calls.borrow_mut().push(invocation.clone());
        match self.answers.get(&invocation.input).copied().unwrap_or(Answer::Succeed) {
            Answer::Succeed => Ok(RunStatus::Success),
            Answer::Fail(code) => Ok(RunStatus::Failed {
                code: Some(code),
                detail: format!("`{}` returned exit status: {}", invocation.command_line(), code),
            }),
            Answer::Unlaunchable => Err(LaunchError::NotFound {
                program: invocation.program.clone(),
            }),
        }
    }
}

fn workspace(present: &[&str]) -> (TempDir, ConversionOptions) {
    let dir = TempDir::new().unwrap();
    for name in present {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "# Heading\n\nBody\n").unwrap();
    }

    let mut options = ConversionOptions::new(ConverterConfig::new("/opt/pandoc/bin/pandoc"));
    options.work_dir = dir.path().to_path_buf();
    (dir, options)
}

fn run(
    job: &ConversionJob,
    options: &ConversionOptions,
    converter: &RecordingConverter,
) -> (md2docx::BatchSummary, Vec<String>) {
    let mut lines = Vec::new();
    let summary = convert_batch(job, options, converter, |outcome: &FileOutcome| {
        lines.push(status_line(outcome));
    })
    .unwrap();
    (summary, lines)
}

#[test]
fn test_two_file_scenario() {
    let (_dir, options) = workspace(&["a.md"]);
    let converter = RecordingConverter::new();
    let job = ConversionJob::new(["a.md", "b.md"]);

    let (summary, lines) = run(&job, &options, &converter);

    assert_eq!(
        lines,
        vec![
            "Successfully converted a.md to a.docx".to_string(),
            "Error: b.md not found.".to_string(),
        ]
    );
    assert_eq!(converter.calls.borrow().len(), 1);
    assert_eq!(summary.state, BatchState::Done);
}

#[test]
fn test_missing_files_never_invoke_converter() {
    let (_dir, options) = workspace(&["keep.md"]);
    let converter = RecordingConverter::new();
    let job = ConversionJob::new(["gone1.md", "keep.md", "gone2.md"]);

    let (summary, lines) = run(&job, &options, &converter);

    assert_eq!(converter.inputs(), vec![PathBuf::from("keep.md")]);
    assert_eq!(summary.missing(), 2);
    assert_eq!(lines[0], "Error: gone1.md not found.");
    assert_eq!(lines[2], "Error: gone2.md not found.");
}

#[test]
fn test_each_present_file_invoked_once_with_swapped_extension() {
    let files = ["NollyCrewHub_Business_Plan.md", "Report.v2.md", "sections/03_Solution.md"];
    let (dir, options) = workspace(&files);
    let converter = RecordingConverter::new();

    let (summary, _) = run(&ConversionJob::new(files), &options, &converter);

    let calls = converter.calls.borrow();
    let pairs: Vec<(PathBuf, PathBuf)> = calls
        .iter()
        .map(|c| (c.input.clone(), c.output.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (
                PathBuf::from("NollyCrewHub_Business_Plan.md"),
                PathBuf::from("NollyCrewHub_Business_Plan.docx")
            ),
            (PathBuf::from("Report.v2.md"), PathBuf::from("Report.v2.docx")),
            (
                PathBuf::from("sections/03_Solution.md"),
                PathBuf::from("sections/03_Solution.docx")
            ),
        ]
    );
    for call in calls.iter() {
        assert_eq!(call.program, Path::new("/opt/pandoc/bin/pandoc"));
        assert_eq!(call.work_dir, dir.path());
    }
    assert_eq!(summary.converted(), 3);
}

#[test]
fn test_duplicates_are_converted_twice() {
    let (_dir, options) = workspace(&["a.md"]);
    let converter = RecordingConverter::new();

    let (summary, _) = run(&ConversionJob::new(["a.md", "a.md"]), &options, &converter);

    assert_eq!(converter.calls.borrow().len(), 2);
    assert_eq!(summary.converted(), 2);
}

#[test]
fn test_failure_is_local_to_file() {
    let (_dir, options) = workspace(&["a.md", "b.md", "c.md"]);
    let converter = RecordingConverter::new().answer("b.md", Answer::Fail(64));

    let (summary, lines) = run(&ConversionJob::new(["a.md", "b.md", "c.md"]), &options, &converter);

    assert_eq!(converter.calls.borrow().len(), 3);
    assert_eq!(summary.state, BatchState::Done);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.converted(), 2);
    assert!(lines[1].starts_with("Error converting b.md: "), "{}", lines[1]);
    assert!(lines[1].contains("64"));
    match &summary.outcomes[1].kind {
        OutcomeKind::ConversionFailed { code, output, .. } => {
            assert_eq!(*code, Some(64));
            assert_eq!(output, Path::new("b.docx"));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_unlaunchable_converter_aborts_batch() {
    let (_dir, options) = workspace(&["a.md", "b.md", "c.md"]);
    let converter = RecordingConverter::new().answer("b.md", Answer::Unlaunchable);

    let (summary, lines) = run(&ConversionJob::new(["a.md", "b.md", "c.md"]), &options, &converter);

    assert_eq!(
        converter.inputs(),
        vec![PathBuf::from("a.md"), PathBuf::from("b.md")]
    );
    assert_eq!(summary.state, BatchState::Aborted);
    assert_eq!(summary.outcomes.len(), 2);
    assert_eq!(
        lines,
        vec![
            "Successfully converted a.md to a.docx".to_string(),
            "Error: The converter executable was not found at /opt/pandoc/bin/pandoc".to_string(),
        ]
    );
}

#[test]
fn test_missing_files_before_abort_are_still_reported() {
    let (_dir, options) = workspace(&["b.md"]);
    let converter = RecordingConverter::new().answer("b.md", Answer::Unlaunchable);

    let (summary, lines) = run(&ConversionJob::new(["a.md", "b.md", "c.md"]), &options, &converter);

    assert_eq!(lines[0], "Error: a.md not found.");
    assert_eq!(lines.len(), 2);
    assert!(summary.aborted());
}

#[test]
fn test_preflight_rejects_missing_work_dir() {
    let (dir, mut options) = workspace(&[]);
    options.work_dir = dir.path().join("not-here");
    let converter = RecordingConverter::new();

    let result = convert_batch(&ConversionJob::new(["a.md"]), &options, &converter, |_| {});

    assert!(result.is_err());
    assert!(converter.calls.borrow().is_empty());
}
