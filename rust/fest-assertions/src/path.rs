use crate::{error::FailureKind, formatting::Nullable, GenericAssert};
use std::{ffi::OsStr, fmt::Debug, fs, path::Path, sync::Arc};

/// Assertions for types implementing [`AsRef`]<[`Path`](std::path::Path)>, e.g.
/// `&Path`, `PathBuf` or `&PathBuf`.
///
/// ### Examples
/// ```rust, no_run
/// use fest_assertions::*;
/// use std::path::Path;
///
/// // test actual path exists
/// Path::new("/tmp/file").should().exists();
///
/// // test path not exists
/// Path::new("/tmp/file").should().does_not_exist();
///
/// // test path points to a file
/// Path::new("/tmp/file").should().is_file().has_file_size(42);
///
/// // test path points to a directory
/// Path::new("/tmp/dir/").should().is_directory().is_absolute();
///
/// // test path has a valid filename
/// Path::new("/tmp/file").should().has_file_name(&"file");
/// ```
pub trait PathAssertions {
    fn exists(self) -> Self;
    fn does_not_exist(self) -> Self;
    fn is_file(self) -> Self;
    fn is_directory(self) -> Self;
    fn is_absolute(self) -> Self;
    fn is_relative(self) -> Self;
    fn has_file_name<E: AsRef<OsStr>>(self, expected_file_name: E) -> Self;

    /// The size in bytes of the file the path points to. Failing to read
    /// the file's metadata is a failure carrying the I/O error as its cause.
    fn has_file_size(self, expected: u64) -> Self;
}

impl<T: AsRef<Path> + Debug> GenericAssert<T> {
    fn expect_path(&self, holds: fn(&Path) -> bool, template: &str) {
        let actual = self.actual_or_fail();

        if !holds(actual.as_ref()) {
            self.failure(FailureKind::Condition).fail(template, &[actual]);
        }
    }
}

impl<T: AsRef<Path> + Debug> PathAssertions for GenericAssert<T> {
    fn exists(self) -> Self {
        self.expect_path(Path::exists, "expecting path:<{}> to exist");
        self
    }

    fn does_not_exist(self) -> Self {
        self.expect_path(|path| !path.exists(), "expecting path:<{}> not to exist");
        self
    }

    fn is_file(self) -> Self {
        self.expect_path(Path::is_file, "expecting path:<{}> to be a file");
        self
    }

    fn is_directory(self) -> Self {
        self.expect_path(Path::is_dir, "expecting path:<{}> to be a directory");
        self
    }

    fn is_absolute(self) -> Self {
        self.expect_path(Path::is_absolute, "expecting path:<{}> to be absolute");
        self
    }

    fn is_relative(self) -> Self {
        self.expect_path(Path::is_relative, "expecting path:<{}> to be relative");
        self
    }

    fn has_file_name<E: AsRef<OsStr>>(self, expected_file_name: E) -> Self {
        let actual = self.actual_or_fail();
        let expected = expected_file_name.as_ref();
        let file_name = actual.as_ref().file_name();

        if file_name != Some(expected) {
            self.failure(FailureKind::Equality).fail(
                "expected file name:<{}> but was:<{}> for path:<{}>",
                &[&expected, &Nullable(file_name), actual],
            );
        }

        self
    }

    fn has_file_size(self, expected: u64) -> Self {
        let actual = self.actual_or_fail();

        let size = match fs::metadata(actual.as_ref()) {
            Ok(metadata) => metadata.len(),
            Err(error) => self.failure(FailureKind::Condition).fail_with_cause(
                "unable to read the metadata of path:<{}>",
                &[actual],
                Arc::new(error),
            ),
        };

        if size != expected {
            self.failure(FailureKind::Equality).fail(
                "expected size:<{}> but was size:<{}> for file:<{}>",
                &[&expected, &size, actual],
            );
        }

        self
    }
}
