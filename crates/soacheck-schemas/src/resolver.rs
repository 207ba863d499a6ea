//! Service directory resolution
//!
//! Decides which directory a validation run should scan from an optional
//! service name and an optional base (SOA) directory.
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Report marker for a service directory that could not be determined
pub const UNKNOWN_SERVICE: &str = "UNKNOWN SERVICE";

/// Result of resolving a service directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ServicePath {
    /// Directory to scan
    Resolved { path: PathBuf },
    /// No directory could be determined
    Unresolved { reason: String },
}

impl ServicePath {
    fn unresolved(reason: impl Into<String>) -> Self {
        Self::Unresolved {
            reason: reason.into(),
        }
    }

    /// The resolved directory, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Resolved { path } => Some(path),
            Self::Unresolved { .. } => None,
        }
    }

    /// Whether a directory was determined
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Resolves service directories relative to a fixed working directory.
///
/// The working directory is captured once so resolution is deterministic
/// and testable.
#[derive(Debug, Clone)]
pub struct ServicePathResolver {
    working_dir: PathBuf,
}

impl ServicePathResolver {
    /// Resolver anchored at the process working directory
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self::with_working_dir(std::env::current_dir()?))
    }

    /// Resolver anchored at an explicit directory
    pub fn with_working_dir(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// The directory used when neither a service nor a base is given
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Resolve the directory to scan.
    ///
    /// | service | base               | result                   |
    /// |---------|--------------------|--------------------------|
    /// | given   | given              | `base/service`           |
    /// | given   | absent             | unresolved               |
    /// | absent  | absent             | working directory        |
    /// | absent  | working directory  | working directory        |
    /// | absent  | any other base     | unresolved               |
    ///
    /// A blank service counts as absent. A service name must be a single
    /// path segment; anything else is unresolved. No filesystem access
    /// happens here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use soacheck_schemas::resolver::ServicePathResolver;
    /// use std::path::Path;
    ///
    /// let resolver = ServicePathResolver::with_working_dir("/work");
    /// let resolved = resolver.resolve(Some("some_service"), Some(Path::new("some/path")));
    /// assert_eq!(resolved.path(), Some(Path::new("some/path/some_service")));
    /// assert!(!resolver.resolve(None, Some(Path::new("unused"))).is_resolved());
    /// ```
    pub fn resolve(&self, service: Option<&str>, base_dir: Option<&Path>) -> ServicePath {
        let service = service.filter(|name| !name.trim().is_empty());
        let resolved = match (service, base_dir) {
            (Some(service), _) if !is_single_segment(service) => {
                ServicePath::unresolved(format!("invalid service name '{}'", service))
            }
            (Some(service), Some(base)) => ServicePath::Resolved {
                path: base.join(service),
            },
            (Some(service), None) => ServicePath::unresolved(format!(
                "no base directory configured for service '{}'",
                service
            )),
            (None, None) => ServicePath::Resolved {
                path: self.working_dir.clone(),
            },
            (None, Some(base)) if self.is_working_dir(base) => ServicePath::Resolved {
                path: self.working_dir.clone(),
            },
            (None, Some(_)) => ServicePath::unresolved("no service specified"),
        };

        match &resolved {
            ServicePath::Resolved { path } => {
                debug!(service = ?service, path = %path.display(), "Resolved service path")
            }
            ServicePath::Unresolved { reason } => {
                debug!(service = ?service, reason = %reason, "Service path unresolved")
            }
        }
        resolved
    }

    fn is_working_dir(&self, base: &Path) -> bool {
        if base == self.working_dir {
            return true;
        }
        let joined = self.working_dir.join(base);
        normalize(&joined) == normalize(&self.working_dir)
    }
}

fn is_single_segment(service: &str) -> bool {
    let mut components = Path::new(service).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !service.contains(['/', '\\'])
}

/// Lexically drop `.` components and trailing separators
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ServicePathResolver {
        ServicePathResolver::with_working_dir("/srv/work")
    }

    #[test]
    fn test_service_and_base() {
        let resolved = resolver().resolve(Some("some_service"), Some(Path::new("some/path")));
        assert_eq!(
            resolved,
            ServicePath::Resolved {
                path: PathBuf::from("some/path/some_service")
            }
        );
    }

    #[test]
    fn test_service_without_base_is_unresolved() {
        let resolved = resolver().resolve(Some("some_service"), None);
        assert!(!resolved.is_resolved());
        assert_eq!(resolved.path(), None);
    }

    #[test]
    fn test_no_service_no_base_uses_working_dir() {
        let resolved = resolver().resolve(None, None);
        assert_eq!(resolved.path(), Some(Path::new("/srv/work")));
    }

    #[test]
    fn test_from_current_dir() {
        let resolver = ServicePathResolver::from_current_dir().unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolver.resolve(None, None).path(), Some(cwd.as_path()));
        assert_eq!(
            resolver.resolve(None, Some(&cwd)).path(),
            Some(cwd.as_path())
        );
    }

    #[test]
    fn test_no_service_base_is_working_dir() {
        let resolver = resolver();
        assert!(resolver.resolve(None, Some(Path::new("/srv/work"))).is_resolved());
        assert!(resolver.resolve(None, Some(Path::new("/srv/work/"))).is_resolved());
        assert!(resolver.resolve(None, Some(Path::new("."))).is_resolved());
    }

    #[test]
    fn test_no_service_other_base_is_unresolved() {
        let resolved = resolver().resolve(None, Some(Path::new("unused")));
        assert_eq!(
            resolved,
            ServicePath::Unresolved {
                reason: "no service specified".to_string()
            }
        );
    }

    #[test]
    fn test_service_must_be_single_segment() {
        let resolver = resolver();
        let base = Some(Path::new("/soa"));
        assert!(!resolver.resolve(Some("a/b"), base).is_resolved());
        assert!(!resolver.resolve(Some(".."), base).is_resolved());
        assert!(!resolver.resolve(Some("/abs"), base).is_resolved());
        assert!(resolver.resolve(Some("web-api"), base).is_resolved());
    }

    #[test]
    fn test_blank_service_is_absent() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(Some("  "), None).path(),
            Some(Path::new("/srv/work"))
        );
        assert_eq!(
            resolver.resolve(Some(""), Some(Path::new("/soa"))),
            ServicePath::Unresolved {
                reason: "no service specified".to_string()
            }
        );
    }

    #[test]
    fn test_serialized_status() {
        let json = serde_json::to_value(resolver().resolve(None, None)).unwrap();
        assert_eq!(json["status"], "resolved");
        assert_eq!(json["path"], "/srv/work");
    }
}
