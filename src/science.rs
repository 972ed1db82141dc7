use crate::config::{load_science_yield, EnvSource, ProcessEnv};
use crate::errors::ConfigError;
use std::sync::OnceLock;

pub const NO_SCIENCE_YIELD: &str = "No Science Yield!";

/// Formats the report shown to callers. Non-positive yields are valid and
/// produce the `NO_SCIENCE_YIELD` sentinel.
pub fn science_report(science_yield: i64) -> String {
    if science_yield > 0 {
        format!("Our current science yield is {science_yield}")
    } else {
        NO_SCIENCE_YIELD.to_string()
    }
}

/// Load-once holder for the science yield.
///
/// The first call to [`ScienceSettings::science_yield`] reads the source; the
/// outcome, success or failure, is cached for the lifetime of the value.
/// Concurrent first callers wait for that single load and see the same result.
pub struct ScienceSettings {
    source: Box<dyn EnvSource>,
    science_yield: OnceLock<Result<i64, ConfigError>>,
}

impl ScienceSettings {
    pub fn new(source: impl EnvSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            science_yield: OnceLock::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ProcessEnv)
    }

    pub fn science_yield(&self) -> Result<i64, ConfigError> {
        self.science_yield
            .get_or_init(|| load_science_yield(self.source.as_ref()))
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.science_yield.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingEnv {
        inner: HashMap<String, String>,
        reads: Arc<AtomicUsize>,
    }

    impl EnvSource for CountingEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.var(key)
        }
    }

    fn counting(value: Option<&str>) -> (ScienceSettings, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let mut inner = HashMap::new();
        if let Some(v) = value {
            inner.insert("YIELD_SCIENCE".to_string(), v.to_string());
        }
        let settings = ScienceSettings::new(CountingEnv {
            inner,
            reads: reads.clone(),
        });
        (settings, reads)
    }

    #[test]
    fn test_report_positive_yield() {
        assert_eq!(science_report(10), "Our current science yield is 10");
        assert_eq!(science_report(1), "Our current science yield is 1");
        assert!(science_report(i64::MAX).contains(&i64::MAX.to_string()));
    }

    #[test]
    fn test_report_non_positive_yield() {
        assert_eq!(science_report(0), NO_SCIENCE_YIELD);
        assert_eq!(science_report(-7), NO_SCIENCE_YIELD);
    }

    #[test]
    fn test_yield_read_once() {
        let (settings, reads) = counting(Some("10"));
        assert!(!settings.is_loaded());
        assert_eq!(reads.load(Ordering::SeqCst), 0);

        for _ in 0..100 {
            assert_eq!(settings.science_yield(), Ok(10));
        }
        assert!(settings.is_loaded());
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_is_cached() {
        let (settings, reads) = counting(None);
        let first = settings.science_yield();
        let second = settings.science_yield();

        assert_eq!(first, Err(ConfigError::Missing("YIELD_SCIENCE".to_string())));
        assert_eq!(first, second);
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let (settings, reads) = counting(Some("abc"));

        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| s.spawn(|| settings.science_yield()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(reads.load(Ordering::SeqCst), 1);
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert!(matches!(results[0], Err(ConfigError::Invalid { .. })));
    }
}
