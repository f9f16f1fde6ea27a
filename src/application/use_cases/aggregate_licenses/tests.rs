use super::*;
use crate::compliance::domain::{License, LicenseType};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// Mock implementations for testing

struct MockResolver {
    modules: Option<Vec<Module>>,
}

impl MockResolver {
    fn with_modules(modules: Vec<Module>) -> Self {
        Self {
            modules: Some(modules),
        }
    }

    fn failing() -> Self {
        Self { modules: None }
    }
}

impl ModuleResolver for MockResolver {
    fn resolve(&self, _project_dir: &Path, _cancel: &CancellationToken) -> Result<Vec<Module>> {
        self.modules
            .clone()
            .ok_or_else(|| anyhow::anyhow!("go: go.mod file not found"))
    }
}

/// Returns `<dir>/<name>` for each configured name; fails for modules listed in `failing`
#[derive(Default)]
struct MockFinder {
    files: HashMap<String, Vec<&'static str>>,
    failing: Vec<String>,
    calls: AtomicUsize,
    visited: Mutex<Vec<String>>,
}

impl MockFinder {
    fn with_files(mut self, module: &str, names: &[&'static str]) -> Self {
        self.files.insert(module.to_string(), names.to_vec());
        self
    }

    fn failing_for(mut self, module: &str) -> Self {
        self.failing.push(module.to_string());
        self
    }
}

impl LicenseFinder for MockFinder {
    fn find(&self, module: &Module, cancel: &CancellationToken) -> Result<Vec<PathBuf>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.visited.lock().unwrap().push(module.path().to_string());
        cancel.check()?;
        if self.failing.iter().any(|m| m == module.path()) {
            anyhow::bail!("permission denied");
        }
        let Some(dir) = module.dir() else {
            return Ok(Vec::new());
        };
        Ok(self
            .files
            .get(module.path())
            .map(|names| names.iter().map(|n| dir.join(n)).collect())
            .unwrap_or_default())
    }
}

/// Classifies by file name; names listed in `unreadable` fail like a vanished file
#[derive(Default)]
struct MockClassifier {
    licenses: Vec<&'static str>,
    unreadable: Vec<&'static str>,
    calls: AtomicUsize,
}

impl MockClassifier {
    fn returning(licenses: &[&'static str]) -> Self {
        Self {
            licenses: licenses.to_vec(),
            ..Default::default()
        }
    }
}

impl LicenseClassifier for MockClassifier {
    fn classify(&self, path: &Path, _cancel: &CancellationToken) -> Result<Vec<License>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if self.unreadable.contains(&name) {
            return Err(LicenseError::Read {
                path: path.to_path_buf(),
                details: "No such file or directory".to_string(),
            }
            .into());
        }
        Ok(self.licenses.iter().map(|n| License::new(*n)).collect())
    }
}

#[derive(Default)]
struct RecordingProgressReporter {
    messages: RefCell<Vec<String>>,
    progress: RefCell<Vec<(usize, usize)>>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.borrow_mut().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn module(path: &str) -> Module {
    Module::new(path, "v1.0.0", Some(PathBuf::from("/mod").join(path)))
}

fn aggregator(
    resolver: MockResolver,
    finder: MockFinder,
    classifier: MockClassifier,
) -> Aggregator<MockResolver, MockFinder, MockClassifier, RecordingProgressReporter> {
    Aggregator::new(
        resolver,
        finder,
        classifier,
        RecordingProgressReporter::default(),
    )
}

fn summary(files: &[LicenseFile]) -> Vec<(String, String)> {
    files
        .iter()
        .map(|f| (f.module().path().to_string(), f.rel_path().to_string()))
        .collect()
}

#[test]
fn test_single_mit_module() {
    let aggregator = aggregator(
        MockResolver::with_modules(vec![module("a")]),
        MockFinder::default().with_files("a", &["LICENSE"]),
        MockClassifier::returning(&["MIT"]),
    );

    let files = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].module().path(), "a");
    assert_eq!(files[0].module().version(), "v1.0.0");
    assert_eq!(files[0].path(), Path::new("/mod/a/LICENSE"));
    assert_eq!(files[0].rel_path(), "LICENSE");
    assert_eq!(files[0].licenses().len(), 1);
    assert_eq!(files[0].licenses()[0].name(), "MIT");
    assert_eq!(files[0].licenses()[0].license_type(), &LicenseType::Mit);
}

#[test]
fn test_n_modules_with_m_files_yield_n_times_m_entries() {
    let names: &[&'static str] = &["LICENSE", "NOTICE", "sub/COPYING"];
    let modules: Vec<Module> = (0..4).map(|i| module(&format!("m{}", i))).collect();
    let finder = (0..4).fold(MockFinder::default(), |finder, i| {
        finder.with_files(&format!("m{}", i), names)
    });

    let aggregator = aggregator(
        MockResolver::with_modules(modules),
        finder,
        MockClassifier::returning(&["Apache-2.0"]),
    );

    let files = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap();

    assert_eq!(files.len(), 12);
    assert_eq!(aggregator.classifier.calls.load(Ordering::SeqCst), 12);
}

#[test]
fn test_order_follows_resolver_then_finder() {
    let aggregator = aggregator(
        MockResolver::with_modules(vec![module("zeta"), module("alpha")]),
        MockFinder::default()
            .with_files("zeta", &["NOTICE", "LICENSE"])
            .with_files("alpha", &["LICENSE"]),
        MockClassifier::returning(&["MIT"]),
    );

    let files = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap();

    assert_eq!(
        summary(&files),
        vec![
            ("zeta".to_string(), "NOTICE".to_string()),
            ("zeta".to_string(), "LICENSE".to_string()),
            ("alpha".to_string(), "LICENSE".to_string()),
        ]
    );
}

#[test]
fn test_no_deduplication_across_modules() {
    // a vendored copy of the same dependency appears under two module roots
    let outer = Module::new("example.com/outer", "v1.0.0", Some(PathBuf::from("/mod/outer")));
    let nested = Module::new(
        "example.com/outer/inner",
        "v1.0.0",
        Some(PathBuf::from("/mod/outer/inner")),
    );
    let aggregator = aggregator(
        MockResolver::with_modules(vec![outer, nested]),
        MockFinder::default()
            .with_files("example.com/outer", &["inner/LICENSE"])
            .with_files("example.com/outer/inner", &["LICENSE"]),
        MockClassifier::returning(&["MIT"]),
    );

    let files = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path(), files[1].path());
    assert_eq!(files[0].rel_path(), "inner/LICENSE");
    assert_eq!(files[1].rel_path(), "LICENSE");
}

#[test]
fn test_module_without_dir_contributes_nothing() {
    let aggregator = aggregator(
        MockResolver::with_modules(vec![Module::new("a", "v1.0.0", None), module("b")]),
        MockFinder::default()
            .with_files("a", &["LICENSE"])
            .with_files("b", &["LICENSE"]),
        MockClassifier::returning(&["MIT"]),
    );

    let files = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap();

    assert_eq!(summary(&files), vec![("b".to_string(), "LICENSE".to_string())]);
}

#[test]
fn test_unclassified_file_is_kept_with_no_licenses() {
    let aggregator = aggregator(
        MockResolver::with_modules(vec![module("a")]),
        MockFinder::default().with_files("a", &["NOTICE"]),
        MockClassifier::returning(&[]),
    );

    let files = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].licenses().is_empty());
}

#[test]
fn test_resolution_failure_aborts_before_finding() {
    let aggregator = aggregator(
        MockResolver::failing(),
        MockFinder::default(),
        MockClassifier::default(),
    );

    let err = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LicenseError>(),
        Some(LicenseError::Resolution { .. })
    ));
    assert!(format!("{:#}", err).contains("go.mod file not found"));
    assert_eq!(aggregator.finder.calls.load(Ordering::SeqCst), 0);
    assert_eq!(aggregator.classifier.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_walk_failure_is_tagged_with_module() {
    let aggregator = aggregator(
        MockResolver::with_modules(vec![module("a"), module("b"), module("c")]),
        MockFinder::default()
            .with_files("a", &["LICENSE"])
            .failing_for("b")
            .with_files("c", &["LICENSE"]),
        MockClassifier::returning(&["MIT"]),
    );

    let err = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap_err();

    match err.downcast_ref::<LicenseError>() {
        Some(LicenseError::Walk { module }) => assert_eq!(module, "b"),
        other => panic!("expected Walk error, got {:?}", other),
    }
    // fail fast: module c is never searched
    assert_eq!(*aggregator.finder.visited.lock().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_read_failure_is_tagged_with_path() {
    let classifier = MockClassifier {
        licenses: vec!["MIT"],
        unreadable: vec!["NOTICE"],
        ..Default::default()
    };
    let aggregator = aggregator(
        MockResolver::with_modules(vec![module("a")]),
        MockFinder::default().with_files("a", &["LICENSE", "NOTICE"]),
        classifier,
    );

    let err = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap_err();

    match err.downcast_ref::<LicenseError>() {
        Some(LicenseError::Classification { path }) => {
            assert_eq!(path, Path::new("/mod/a/NOTICE"))
        }
        other => panic!("expected Classification error, got {:?}", other),
    }
    assert!(err
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<LicenseError>(), Some(LicenseError::Read { .. }))));
}

#[test]
fn test_cancellation_surfaces_as_walk_error() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let aggregator = aggregator(
        MockResolver::with_modules(vec![module("a")]),
        MockFinder::default().with_files("a", &["LICENSE"]),
        MockClassifier::returning(&["MIT"]),
    );

    let err = aggregator.aggregate(Path::new("/project"), &cancel).unwrap_err();

    assert!(LicenseError::is_cancellation(&err));
    assert!(matches!(
        err.downcast_ref::<LicenseError>(),
        Some(LicenseError::Walk { .. })
    ));
}

#[test]
fn test_rel_path_outside_module_dir_is_empty() {
    assert_eq!(
        relative_path(Some(Path::new("/mod/a")), Path::new("/elsewhere/LICENSE")),
        ""
    );
    assert_eq!(relative_path(None, Path::new("/mod/a/LICENSE")), "");
    assert_eq!(
        relative_path(Some(Path::new("/mod/a")), Path::new("/mod/a/sub/LICENSE")),
        "sub/LICENSE"
    );
}

#[test]
fn test_progress_is_reported_per_module() {
    let aggregator = aggregator(
        MockResolver::with_modules(vec![module("a"), module("b")]),
        MockFinder::default(),
        MockClassifier::default(),
    );

    aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap();

    let reporter = aggregator.progress_reporter();
    assert_eq!(*reporter.progress.borrow(), vec![(1, 2), (2, 2)]);
    assert!(reporter
        .messages
        .borrow()
        .iter()
        .any(|m| m.contains("Resolved 2 module(s)")));
}

#[test]
fn test_parallel_matches_sequential_order() {
    let build = || {
        let modules: Vec<Module> = (0..16).map(|i| module(&format!("m{:02}", i))).collect();
        let finder = (0..16).fold(MockFinder::default(), |finder, i| {
            finder.with_files(&format!("m{:02}", i), &["LICENSE", "NOTICE"])
        });
        aggregator(
            MockResolver::with_modules(modules),
            finder,
            MockClassifier::returning(&["BSD-3-Clause"]),
        )
    };

    let sequential = build()
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap();
    let parallel = build()
        .with_parallelism(true)
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap();

    assert_eq!(summary(&sequential), summary(&parallel));
    assert_eq!(parallel.len(), 32);
}

#[test]
fn test_parallel_reports_first_error_in_resolver_order() {
    let modules: Vec<Module> = (0..8).map(|i| module(&format!("m{}", i))).collect();
    let aggregator = aggregator(
        MockResolver::with_modules(modules),
        MockFinder::default().failing_for("m6").failing_for("m2"),
        MockClassifier::default(),
    )
    .with_parallelism(true);

    let err = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap_err();

    match err.downcast_ref::<LicenseError>() {
        Some(LicenseError::Walk { module }) => assert_eq!(module, "m2"),
        other => panic!("expected Walk error, got {:?}", other),
    }
}

#[test]
fn test_collect_empty_module_list() {
    let aggregator = aggregator(
        MockResolver::with_modules(vec![]),
        MockFinder::default(),
        MockClassifier::default(),
    );

    let files = aggregator
        .aggregate(Path::new("/project"), &CancellationToken::new())
        .unwrap();

    assert!(files.is_empty());
}
