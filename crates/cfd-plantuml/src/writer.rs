//! Line-level `PlantUML` output.

use crate::consts::FOOTER;

/// Derive a `PlantUML` alias from an identifier.
///
/// Keeps ASCII alphanumerics and underscores so the alias is a valid
/// unquoted identifier: `5c2d-41aa` becomes `5c2d41aa`. An identifier with
/// nothing left to keep is hex-encoded instead (`...` becomes `_2e2e2e`).
pub fn alias(id: &str) -> String {
    let alias: String = id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if alias.is_empty() {
        format!("_{}", hex::encode(id))
    } else {
        alias
    }
}

/// Builds a `PlantUML` document line by line.
#[derive(Debug)]
pub(crate) struct DiagramWriter {
    out: String,
}

impl DiagramWriter {
    /// Start a document with `@startuml`.
    pub(crate) fn new() -> Self {
        Self {
            out: String::from("@startuml\n"),
        }
    }

    /// Append a raw line.
    pub(crate) fn line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    pub(crate) fn title(&mut self, title: &str) {
        self.line(&format!("title {title}"));
    }

    /// `[name] <<stereotype>> as alias`
    pub(crate) fn node(&mut self, name: &str, stereotype: &str, alias: &str) {
        self.line(&format!("[{name}] <<{stereotype}>> as {alias}"));
    }

    /// Node with a bold label: `[**name**] <<stereotype>> as alias`
    pub(crate) fn bold_node(&mut self, name: &str, stereotype: &str, alias: &str) {
        self.node(&format!("**{name}**"), stereotype, alias);
    }

    /// Multi-line component with a bold heading and detail lines.
    pub(crate) fn component(&mut self, alias: &str, stereotype: &str, heading: &str, details: &[String]) {
        self.line(&format!("component {alias} <<{stereotype}>> ["));
        self.line(&format!("**{heading}**"));
        for detail in details {
            self.line(detail);
        }
        self.line("]");
    }

    /// `from --> to`
    pub(crate) fn edge(&mut self, from: &str, to: &str) {
        self.line(&format!("{from} --> {to}"));
    }

    /// Close the document with footer and `@enduml`.
    pub(crate) fn finish(mut self) -> String {
        self.line(FOOTER);
        self.line("@enduml");
        self.out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_alias_strips_guid_separators() {
        assert_eq!(
            alias("1cb006ee-fb05-47e1-b541-c34179ddc446"),
            "1cb006eefb0547e1b541c34179ddc446"
        );
    }

    #[test]
    fn test_alias_strips_name_punctuation() {
        assert_eq!(alias("nodejs-buildpack.v1"), "nodejsbuildpackv1");
        assert_eq!(alias("java_buildpack"), "java_buildpack");
    }

    #[test]
    fn test_alias_never_empty() {
        assert_eq!(alias("..."), "_2e2e2e");
        assert_eq!(alias("-"), "_2d");
        assert_eq!(alias(""), "_");
    }

    #[test]
    fn test_document_frame() {
        let mut writer = DiagramWriter::new();
        writer.node("dev", "space", "s1");
        writer.edge("o1", "s1");

        assert_eq!(
            writer.finish(),
            "@startuml\n[dev] <<space>> as s1\no1 --> s1\ncenter footer Generated with cfdiagram\n@enduml\n"
        );
    }

    #[test]
    fn test_component() {
        let mut writer = DiagramWriter::new();
        writer.component("a1", "app", "my_app", &["State: STARTED".to_owned()]);

        assert!(
            writer
                .finish()
                .contains("component a1 <<app>> [\n**my_app**\nState: STARTED\n]\n")
        );
    }
}
