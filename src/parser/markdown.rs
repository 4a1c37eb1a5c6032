use std::path::Path;

/// Characters in a source file name that become spaces in its heading
pub const SEPARATORS: [char; 1] = ['_'];

/// Derives a human-readable heading from a source file name.
///
/// The extension is dropped and every underscore is replaced with a single
/// space. Other punctuation, hyphens included, is kept as written.
///
/// # Example
/// ```
/// use levelmerge::parser::derive_heading;
/// assert_eq!(derive_heading("04_Java_Fundamentals_Core.md"), "04 Java Fundamentals Core");
/// ```
pub fn derive_heading(source_name: &str) -> String {
    let stem = Path::new(source_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_name.to_string());

    stem.chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect()
}

/// `# <title>\n`
pub fn title_line(title: &str) -> String {
    format!("# {}\n", title)
}

/// Subsection marker opening one merged source: `\n## From <heading>\n`
pub fn section_heading(source_name: &str) -> String {
    format!("\n## From {}\n", derive_heading(source_name))
}

/// Builds a merged document one source at a time.
///
/// Segments (each heading and each body) are joined with a newline, so a
/// heading is followed by a blank line and bodies are separated from the
/// next heading by a blank line.
#[derive(Debug, Default)]
pub struct MergedDocument {
    title: Option<String>,
    segments: Vec<String>,
}

impl MergedDocument {
    pub fn new(title: Option<&str>) -> Self {
        Self {
            title: title.map(title_line),
            segments: Vec::new(),
        }
    }

    pub fn push_section(&mut self, source_name: &str, content: String) {
        self.segments.push(section_heading(source_name));
        self.segments.push(content);
    }

    pub fn render(&self) -> String {
        let mut out = self.title.clone().unwrap_or_default();
        out.push_str(&self.segments.join("\n"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_heading_strips_extension_and_separators() {
        assert_eq!(
            derive_heading("04_Java_Fundamentals_Core.md"),
            "04 Java Fundamentals Core"
        );
        assert_eq!(derive_heading("a.md"), "a");
        assert_eq!(derive_heading("spring-boot_basics.md"), "spring-boot basics");
    }

    #[test]
    fn test_derive_heading_only_drops_last_extension() {
        assert_eq!(derive_heading("notes.v2.md"), "notes.v2");
        assert_eq!(derive_heading("README"), "README");
    }

    #[test]
    fn test_derive_heading_keeps_each_separator() {
        assert_eq!(derive_heading("a__b.md"), "a  b");
    }

    #[test]
    fn test_section_heading() {
        assert_eq!(
            section_heading("04_Java_Fundamentals_Core.md"),
            "\n## From 04 Java Fundamentals Core\n"
        );
    }

    #[test]
    fn test_render_with_title() {
        let mut doc = MergedDocument::new(Some("Basics"));
        doc.push_section("a.md", "Q1".to_string());
        doc.push_section("b.md", "Q2".to_string());

        assert_eq!(doc.render(), "# Basics\n\n## From a\n\nQ1\n\n## From b\n\nQ2");
    }

    #[test]
    fn test_render_without_sections() {
        assert_eq!(MergedDocument::new(Some("Basics")).render(), "# Basics\n");
        assert_eq!(MergedDocument::new(None).render(), "");
    }

    #[test]
    fn test_render_without_title() {
        let mut doc = MergedDocument::new(None);
        doc.push_section("a.md", "Q1\n".to_string());
        assert_eq!(doc.render(), "\n## From a\n\nQ1\n");
    }
}
