//! Group spec model - which source documents feed which output document

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::{Component, Path};

/// Errors raised when a group spec violates its invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("Group spec has no groups")]
    Empty,

    #[error("'{0}' is not a plain file name")]
    InvalidName(String),

    #[error("Group '{0}' has no sources")]
    EmptyGroup(String),

    #[error("Output '{0}' is declared more than once")]
    DuplicateOutput(String),

    #[error("Source '{source_name}' is listed twice in group '{output}'")]
    DuplicateSource { output: String, source_name: String },

    #[error("Source '{source_name}' belongs to both '{first}' and '{second}'")]
    SharedSource {
        source_name: String,
        first: String,
        second: String,
    },
}

/// One output document and the ordered sources merged into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub output: String,
    pub sources: Vec<String>,
}

impl Group {
    pub fn new<I, S>(output: impl Into<String>, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: output.into(),
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered, validated list of groups.
///
/// Groups keep their declaration order, and so do the sources inside each
/// group. Once built the spec is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSpec {
    groups: Vec<Group>,
}

impl GroupSpec {
    /// Build a spec, checking that outputs are unique, no group is empty and
    /// every source belongs to exactly one group.
    pub fn new(groups: Vec<Group>) -> Result<Self, SpecError> {
        validate(&groups)?;
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of source names across all groups
    pub fn source_count(&self) -> usize {
        self.groups.iter().map(|g| g.sources.len()).sum()
    }
}

fn validate(groups: &[Group]) -> Result<(), SpecError> {
    if groups.is_empty() {
        return Err(SpecError::Empty);
    }

    let mut outputs = HashSet::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for group in groups {
        check_name(&group.output)?;
        if !outputs.insert(group.output.as_str()) {
            return Err(SpecError::DuplicateOutput(group.output.clone()));
        }
        if group.sources.is_empty() {
            return Err(SpecError::EmptyGroup(group.output.clone()));
        }

        let mut seen = HashSet::new();
        for source in &group.sources {
            check_name(source)?;
            if !seen.insert(source.as_str()) {
                return Err(SpecError::DuplicateSource {
                    output: group.output.clone(),
                    source_name: source.clone(),
                });
            }
            if let Some(first) = owners.insert(source.as_str(), group.output.as_str()) {
                return Err(SpecError::SharedSource {
                    source_name: source.clone(),
                    first: first.to_string(),
                    second: group.output.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Outputs and sources live directly in the working directory, so a name
/// must be exactly one normal path component.
fn check_name(name: &str) -> Result<(), SpecError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(SpecError::InvalidName(name.to_string())),
    }
}

/// Human-readable title per output name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TitleLabels {
    titles: HashMap<String, String>,
}

impl TitleLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, output: impl Into<String>, title: impl Into<String>) -> Self {
        self.insert(output, title);
        self
    }

    pub fn insert(&mut self, output: impl Into<String>, title: impl Into<String>) {
        self.titles.insert(output.into(), title.into());
    }

    pub fn get(&self, output: &str) -> Option<&str> {
        self.titles.get(output).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for TitleLabels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            titles: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_declaration_order() {
        let spec = GroupSpec::new(vec![
            Group::new("b.md", ["2.md", "1.md"]),
            Group::new("a.md", ["3.md"]),
        ])
        .unwrap();

        let outputs: Vec<_> = spec.groups().iter().map(|g| g.output.as_str()).collect();
        assert_eq!(outputs, vec!["b.md", "a.md"]);
        assert_eq!(spec.groups()[0].sources, vec!["2.md", "1.md"]);
        assert_eq!(spec.source_count(), 3);
    }

    #[test]
    fn test_rejects_empty_spec() {
        assert_eq!(GroupSpec::new(vec![]), Err(SpecError::Empty));
    }

    #[test]
    fn test_rejects_empty_group() {
        let result = GroupSpec::new(vec![Group::new("out.md", Vec::<String>::new())]);
        assert_eq!(result, Err(SpecError::EmptyGroup("out.md".to_string())));
    }

    #[test]
    fn test_rejects_duplicate_output() {
        let result = GroupSpec::new(vec![
            Group::new("out.md", ["a.md"]),
            Group::new("out.md", ["b.md"]),
        ]);
        assert_eq!(result, Err(SpecError::DuplicateOutput("out.md".to_string())));
    }

    #[test]
    fn test_rejects_duplicate_source_in_group() {
        let result = GroupSpec::new(vec![Group::new("out.md", ["a.md", "a.md"])]);
        assert!(matches!(result, Err(SpecError::DuplicateSource { .. })));
    }

    #[test]
    fn test_rejects_source_shared_between_groups() {
        let result = GroupSpec::new(vec![
            Group::new("one.md", ["a.md"]),
            Group::new("two.md", ["b.md", "a.md"]),
        ]);
        assert_eq!(
            result,
            Err(SpecError::SharedSource {
                source_name: "a.md".to_string(),
                first: "one.md".to_string(),
                second: "two.md".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_names_outside_working_dir() {
        let result = GroupSpec::new(vec![Group::new("../escaped.md", ["a.md"])]);
        assert_eq!(result, Err(SpecError::InvalidName("../escaped.md".to_string())));

        let result = GroupSpec::new(vec![Group::new("out.md", ["sub/a.md"])]);
        assert_eq!(result, Err(SpecError::InvalidName("sub/a.md".to_string())));

        for name in ["", ".", "..", "/tmp/out.md", "./out.md", "out.md/"] {
            let result = GroupSpec::new(vec![Group::new(name, ["a.md"])]);
            assert_eq!(
                result,
                Err(SpecError::InvalidName(name.to_string())),
                "accepted {:?}",
                name
            );
        }
    }

    #[test]
    fn test_source_may_share_name_with_its_output() {
        let spec = GroupSpec::new(vec![Group::new("01_Basics.md", ["01_Basics.md", "x.md"])]);
        assert!(spec.is_ok());
    }

    #[test]
    fn test_title_labels() {
        let titles: TitleLabels = [("out.md", "Basics")].into_iter().collect();
        assert_eq!(titles.get("out.md"), Some("Basics"));
        assert_eq!(titles.get("other.md"), None);

        let titles = TitleLabels::new().with("x.md", "X");
        assert_eq!(titles.get("x.md"), Some("X"));
    }
}
