#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use activity_analytics::api::Activity;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the variables on unwind and serializes access to the process
/// environment, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// A small project: a short kickoff, a two-week build phase depending on it,
/// and a long rollout depending on both.
pub fn sample_activities() -> Vec<Activity> {
    vec![
        Activity::new(101, 0.5, "2024-01-03", "2024-01-03")
            .with_dependencies(&[102], &[102, 103]),
        Activity::new(102, 15.0, "2024-01-04", "2024-01-19")
            .with_prerequisites(&[101], &[101])
            .with_dependencies(&[103], &[103]),
        Activity::new(103, 40.0, "2024-01-22", "2024-03-01")
            .with_prerequisites(&[102], &[101, 102]),
    ]
}

/// The wire form the activity endpoint serves for [`sample_activities`].
pub const SAMPLE_ACTIVITIES_JSON: &str = r#"[
  {
    "nodeId": 101,
    "duration": 0.5,
    "startDate": "2024-01-03",
    "endDate": "2024-01-03",
    "directPrerequisites": [],
    "allPrerequisites": [],
    "directDependencies": [102],
    "allDependencies": [102, 103]
  },
  {
    "nodeId": 102,
    "duration": 15.0,
    "startDate": "2024-01-04",
    "endDate": "2024-01-19",
    "directPrerequisites": [101],
    "allPrerequisites": [101],
    "directDependencies": [103],
    "allDependencies": [103]
  },
  {
    "nodeId": 103,
    "duration": 40.0,
    "startDate": "2024-01-22",
    "endDate": "2024-03-01",
    "directPrerequisites": [102],
    "allPrerequisites": [101, 102],
    "directDependencies": [],
    "allDependencies": []
  }
]"#;

/// Write `content` to a fresh temporary file that lives as long as the handle.
pub fn temp_file_with(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
