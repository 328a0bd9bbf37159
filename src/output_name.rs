use crate::degree::Degree;

/// Suffix inserted before the extension, zero-padded to at least 3 digits.
pub fn rotate_suffix(degree: u32) -> String {
    format!("_rotate{:03}", degree)
}

/// Insert `suffix` before the extension of `path`.
///
/// Only the text after the last `.` counts as the extension, so
/// `archive.tar.pdf` keeps `archive.tar` as its base. A path without any `.`
/// gets a `pdf` extension.
pub fn with_suffix(path: &str, suffix: &str) -> String {
    match path.rsplit_once('.') {
        Some((base, extension)) => format!("{}{}.{}", base, suffix, extension),
        None => format!("{}{}.pdf", path, suffix),
    }
}

/// Sibling path the rotated document is written to.
pub fn output_path(path: &str, degree: Degree) -> String {
    with_suffix(path, &degree.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_extension() {
        assert_eq!(with_suffix("doc.pdf", "_rotate090"), "doc_rotate090.pdf");
    }

    #[test]
    fn test_multiple_dots() {
        assert_eq!(
            with_suffix("archive.tar.pdf", "_rotate090"),
            "archive.tar_rotate090.pdf"
        );
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(with_suffix("noext", "_rotate090"), "noext_rotate090.pdf");
    }

    #[test]
    fn test_keeps_directories() {
        assert_eq!(
            with_suffix("scans/2024/in.PDF", "_rotate180"),
            "scans/2024/in_rotate180.PDF"
        );
    }

    #[test]
    fn test_dot_in_directory_only() {
        // The dot belongs to the directory, but it is still the last one.
        assert_eq!(
            with_suffix("v1.2/report", "_rotate090"),
            "v1_rotate090.2/report"
        );
    }

    #[test]
    fn test_suffix_width_is_a_minimum() {
        assert_eq!(rotate_suffix(0), "_rotate000");
        assert_eq!(rotate_suffix(90), "_rotate090");
        assert_eq!(rotate_suffix(180), "_rotate180");
        assert_eq!(rotate_suffix(1080), "_rotate1080");
    }

    #[test]
    fn test_output_path() {
        let degree = Degree::parse("-90").unwrap();
        assert_eq!(output_path("doc.pdf", degree), "doc_rotate270.pdf");
    }
}
