//! Extension allow-list filtering.

/// Keep the filenames that end with one of the allowed extensions.
///
/// Matching is a case-sensitive suffix check, so `.tar.gz` style extensions
/// only need their final suffix in the allow-list. Input order is preserved.
pub fn filter_by_extension<'a, S, E>(filenames: &'a [S], allowed_extensions: &[E]) -> Vec<&'a str>
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    filenames
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| has_allowed_extension(name, allowed_extensions))
        .collect()
}

/// Check a single filename against the allow-list.
pub fn has_allowed_extension<E: AsRef<str>>(filename: &str, allowed_extensions: &[E]) -> bool {
    allowed_extensions
        .iter()
        .any(|ext| filename.ends_with(ext.as_ref()))
}

/// Default allow-list: source code, notebooks, web files and Java archives.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    ".txt", ".py", ".java", ".js", ".c", ".cpp", ".cc", ".cxx", ".c++", ".h", ".hpp", ".hxx",
    ".hh", ".h++", ".cs", ".php", ".rb", ".swift", ".m", ".go", ".kt", ".kts", ".ts", ".scala",
    ".r", ".pl", ".pm", ".lua", ".sh", ".bash", ".vb", ".fs", ".fsx", ".dart", ".rs", ".hs",
    ".lhs", ".ipynb", ".sql", ".css", ".html", ".htm", ".jar",
];
