//! Landscape diagram: every stack, buildpack, organization, space and app.

use cfd_cloudfoundry::Landscape;
use cfd_cloudfoundry::types::ResourceKind;

use crate::error::{RenderError, resolve};
use crate::writer::{DiagramWriter, alias};

/// Options for [`render_landscape`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LandscapeOptions {
    /// Add quota definition nodes and organization -> quota edges.
    pub include_quotas: bool,
}

/// Render the whole platform as a `PlantUML` component diagram.
///
/// Nodes are aliased by GUID. Records are emitted in GUID order, so equal
/// input yields byte-identical output.
///
/// # Errors
///
/// Returns [`RenderError::MissingReference`] when a record points at a stack,
/// organization, space, buildpack or quota definition that is not part of
/// `landscape`.
pub fn render_landscape(
    landscape: &Landscape,
    options: &LandscapeOptions,
) -> Result<String, RenderError> {
    let mut writer = DiagramWriter::new();

    for stack in landscape.stacks.values() {
        writer.node(&stack.entity.name, "stack", &alias(stack.guid()));
    }
    writer.blank();

    for buildpack in landscape.buildpacks.values() {
        writer.node(&buildpack.entity.name, "buildpack", &alias(buildpack.guid()));
    }
    for buildpack in landscape.buildpacks.values() {
        let Some(stack_name) = buildpack.entity.stack_name() else {
            continue;
        };
        let stack = landscape
            .stack_by_name(stack_name)
            .ok_or_else(|| RenderError::MissingReference {
                kind: ResourceKind::Stack,
                key: stack_name.to_owned(),
                referenced_by: format!("buildpack '{}'", buildpack.entity.name),
            })?;
        writer.edge(&alias(buildpack.guid()), &alias(stack.guid()));
    }
    writer.blank();

    for org in landscape.organizations.values() {
        writer.node(&org.entity.name, "organization", &alias(org.guid()));
    }
    for space in landscape.spaces.values() {
        writer.node(&space.entity.name, "space", &alias(space.guid()));
    }
    for space in landscape.spaces.values() {
        let org = resolve(&landscape.organizations, &space.entity.organization_guid, || {
            format!("space '{}'", space.entity.name)
        })?;
        writer.edge(&alias(org.guid()), &alias(space.guid()));
    }
    writer.blank();

    for app in landscape.apps.values() {
        writer.node(&app.entity.name, "app", &alias(app.guid()));
    }
    for app in landscape.apps.values() {
        let referenced_by = || format!("app '{}'", app.entity.name);
        let space = resolve(&landscape.spaces, &app.entity.space_guid, referenced_by)?;
        writer.edge(&alias(space.guid()), &alias(app.guid()));

        if let Some(guid) = app.entity.detected_buildpack_guid() {
            let buildpack = resolve(&landscape.buildpacks, guid, referenced_by)?;
            writer.edge(&alias(app.guid()), &alias(buildpack.guid()));
        }
    }
    writer.blank();

    if options.include_quotas {
        for quota in landscape.quota_definitions.values() {
            writer.node(&quota.entity.name, "quota", &alias(quota.guid()));
        }
        for org in landscape.organizations.values() {
            let Some(guid) = org
                .entity
                .quota_definition_guid
                .as_deref()
                .filter(|guid| !guid.is_empty())
            else {
                continue;
            };
            let quota = resolve(&landscape.quota_definitions, guid, || {
                format!("organization '{}'", org.entity.name)
            })?;
            writer.edge(&alias(org.guid()), &alias(quota.guid()));
        }
        writer.blank();
    }

    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::landscape;

    #[test]
    fn test_render_minimal_landscape() {
        let landscape = landscape(json!({
            "organizations": [
                ["1a2b-3c", {"name": "org"}]
            ],
            "spaces": [
                ["4d5e-6f", {"name": "dev", "organization_guid": "1a2b-3c"}]
            ],
            "apps": [
                ["7a8b-9c", {"name": "my-app", "space_guid": "4d5e-6f"}]
            ]
        }));

        let diagram = render_landscape(&landscape, &LandscapeOptions::default()).unwrap();

        assert_eq!(
            diagram,
            "@startuml\n\
             \n\
             \n\
             [org] <<organization>> as 1a2b3c\n\
             [dev] <<space>> as 4d5e6f\n\
             1a2b3c --> 4d5e6f\n\
             \n\
             [my-app] <<app>> as 7a8b9c\n\
             4d5e6f --> 7a8b9c\n\
             \n\
             center footer Generated with cfdiagram\n\
             @enduml\n"
        );
    }

    #[test]
    fn test_render_buildpacks_and_stacks() {
        let landscape = landscape(json!({
            "stacks": [
                ["st-1", {"name": "cflinuxfs3"}]
            ],
            "buildpacks": [
                ["bp-1", {"name": "java_buildpack", "stack": "cflinuxfs3"}],
                ["bp-2", {"name": "binary_buildpack", "stack": null}]
            ],
            "organizations": [["o-1", {"name": "org"}]],
            "spaces": [["s-1", {"name": "dev", "organization_guid": "o-1"}]],
            "apps": [
                ["a-1", {"name": "java-app", "space_guid": "s-1", "detected_buildpack_guid": "bp-1"}],
                ["a-2", {"name": "static-app", "space_guid": "s-1", "detected_buildpack_guid": ""}]
            ]
        }));

        let diagram = render_landscape(&landscape, &LandscapeOptions::default()).unwrap();

        assert!(diagram.contains("[cflinuxfs3] <<stack>> as st1\n"));
        assert!(diagram.contains("[java_buildpack] <<buildpack>> as bp1\n"));
        assert!(diagram.contains("[binary_buildpack] <<buildpack>> as bp2\n"));
        assert!(diagram.contains("bp1 --> st1\n"));
        assert!(!diagram.contains("bp2 --> "));
        assert!(diagram.contains("a1 --> bp1\n"));
        assert!(!diagram.contains("a2 --> "));
        assert!(diagram.contains("s1 --> a1\n"));
        assert!(diagram.contains("s1 --> a2\n"));
    }

    #[test]
    fn test_sections_in_order() {
        let landscape = landscape(json!({
            "stacks": [["st-1", {"name": "cflinuxfs3"}]],
            "buildpacks": [["bp-1", {"name": "java_buildpack", "stack": "cflinuxfs3"}]],
            "organizations": [["o-1", {"name": "org"}]],
            "spaces": [["s-1", {"name": "dev", "organization_guid": "o-1"}]],
            "apps": [["a-1", {"name": "app", "space_guid": "s-1"}]]
        }));

        let diagram = render_landscape(&landscape, &LandscapeOptions::default()).unwrap();
        let position = |needle: &str| diagram.find(needle).unwrap();

        assert!(position("<<stack>>") < position("<<buildpack>>"));
        assert!(position("<<buildpack>>") < position("<<organization>>"));
        assert!(position("<<organization>>") < position("<<space>>"));
        assert!(position("<<space>>") < position("<<app>>"));
        assert!(position("<<app>>") < position("center footer"));
    }

    #[test]
    fn test_output_is_sorted_by_guid() {
        let landscape = landscape(json!({
            "organizations": [
                ["o-2", {"name": "second"}],
                ["o-1", {"name": "first"}]
            ]
        }));

        let diagram = render_landscape(&landscape, &LandscapeOptions::default()).unwrap();

        assert!(diagram.find("[first]").unwrap() < diagram.find("[second]").unwrap());
    }

    #[test]
    fn test_quotas_only_when_enabled() {
        let landscape = landscape(json!({
            "quota_definitions": [["q-1", {"name": "default"}]],
            "organizations": [
                ["o-1", {"name": "org", "quota_definition_guid": "q-1"}]
            ]
        }));

        let without = render_landscape(&landscape, &LandscapeOptions::default()).unwrap();
        let with = render_landscape(
            &landscape,
            &LandscapeOptions {
                include_quotas: true,
            },
        )
        .unwrap();

        assert!(!without.contains("<<quota>>"));
        assert!(with.contains("[default] <<quota>> as q1\n"));
        assert!(with.contains("o1 --> q1\n"));
    }

    #[test]
    fn test_missing_organization() {
        let landscape = landscape(json!({
            "spaces": [["s-1", {"name": "dev", "organization_guid": "gone"}]]
        }));

        let err = render_landscape(&landscape, &LandscapeOptions::default()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "space 'dev' references unknown organization 'gone'"
        );
    }

    #[test]
    fn test_missing_space() {
        let landscape = landscape(json!({
            "apps": [["a-1", {"name": "orphan", "space_guid": "gone"}]]
        }));

        let err = render_landscape(&landscape, &LandscapeOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            RenderError::MissingReference { kind: ResourceKind::Space, ref key, .. } if key == "gone"
        ));
    }

    #[test]
    fn test_missing_detected_buildpack() {
        let landscape = landscape(json!({
            "organizations": [["o-1", {"name": "org"}]],
            "spaces": [["s-1", {"name": "dev", "organization_guid": "o-1"}]],
            "apps": [
                ["a-1", {"name": "app", "space_guid": "s-1", "detected_buildpack_guid": "bp-gone"}]
            ]
        }));

        let err = render_landscape(&landscape, &LandscapeOptions::default()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "app 'app' references unknown buildpack 'bp-gone'"
        );
    }

    #[test]
    fn test_missing_quota_definition() {
        let landscape = landscape(json!({
            "organizations": [
                ["o-1", {"name": "org", "quota_definition_guid": "q-gone"}]
            ]
        }));
        let options = LandscapeOptions {
            include_quotas: true,
        };

        let err = render_landscape(&landscape, &options).unwrap_err();

        assert_eq!(
            err.to_string(),
            "organization 'org' references unknown quota definition 'q-gone'"
        );
        assert!(render_landscape(&landscape, &LandscapeOptions::default()).is_ok());
    }

    #[test]
    fn test_missing_buildpack_stack() {
        let landscape = landscape(json!({
            "buildpacks": [["bp-1", {"name": "java_buildpack", "stack": "windows"}]]
        }));

        let err = render_landscape(&landscape, &LandscapeOptions::default()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "buildpack 'java_buildpack' references unknown stack 'windows'"
        );
    }
}
