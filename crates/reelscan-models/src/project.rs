use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Numeric identifier of a scanning project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// One named storage location of a project.
///
/// `path` is a template that may reference other entries or the project name
/// as `${var}`; `resolved` is its fully expanded absolute form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectPathEntry {
    pub name: String,
    pub description: String,
    pub path: String,
    pub resolved: String,
}

/// Expand `${var}` references in a path template.
///
/// Unknown variables are left in place so a partially configured project
/// still shows where the expansion stopped.
pub fn resolve_path_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                // unterminated reference, keep literally
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> HashMap<String, String> {
        HashMap::from([
            ("name".to_string(), "TestProject".to_string()),
            (
                "project".to_string(),
                "/var/data/reelscan/TestProject".to_string(),
            ),
        ])
    }

    #[test]
    fn test_resolve_simple() {
        assert_eq!(resolve_path_template("${name}", &vars()), "TestProject");
        assert_eq!(
            resolve_path_template("${project}/scanned_images", &vars()),
            "/var/data/reelscan/TestProject/scanned_images"
        );
    }

    #[test]
    fn test_resolve_unknown_kept() {
        assert_eq!(
            resolve_path_template("${project}/${unknown}", &vars()),
            "/var/data/reelscan/TestProject/${unknown}"
        );
    }

    #[test]
    fn test_resolve_no_refs() {
        assert_eq!(resolve_path_template("/plain/path", &vars()), "/plain/path");
    }

    #[test]
    fn test_resolve_unterminated() {
        assert_eq!(
            resolve_path_template("/a/${name", &vars()),
            "/a/${name"
        );
    }

    #[test]
    fn test_project_id_wire_format() {
        let json = serde_json::to_string(&ProjectId(4)).unwrap();
        assert_eq!(json, "4");
    }
}
