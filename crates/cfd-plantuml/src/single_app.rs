//! Single-app diagram: one v3 app with its space, organization, buildpacks
//! and stack.

use std::collections::BTreeSet;

use cfd_cloudfoundry::Landscape;
use cfd_cloudfoundry::types::ResourceKind;
use cfd_cloudfoundry::types::v3::V3App;
use tracing::warn;

use crate::consts::{SINGLE_APP_TITLE, SKIN};
use crate::error::{RenderError, resolve};
use crate::writer::{DiagramWriter, alias};

/// Render one app and its dependencies.
///
/// Only `organizations`, `spaces`, `stacks` and `buildpacks` of `landscape`
/// are consulted. Lifecycle buildpacks are referenced by name and resolved to
/// the record for the app's stack; names that are not registered buildpacks
/// (git URLs, custom buildpacks) become standalone nodes aliased from the
/// name. Repeated names are rendered once.
///
/// # Errors
///
/// Returns [`RenderError::MissingReference`] when the app's space, the
/// space's organization or the lifecycle stack is not part of `landscape`.
pub fn render_single_app(app: &V3App, landscape: &Landscape) -> Result<String, RenderError> {
    let app_ref = || format!("app '{}'", app.name);

    let space = resolve(&landscape.spaces, app.space_guid(), app_ref)?;
    let org = resolve(&landscape.organizations, &space.entity.organization_guid, || {
        format!("space '{}'", space.entity.name)
    })?;

    let app_alias = alias(&app.guid);
    let space_alias = alias(space.guid());
    let org_alias = alias(org.guid());

    let mut writer = DiagramWriter::new();
    writer.line(SKIN);
    writer.blank();
    writer.title(&format!("{SINGLE_APP_TITLE} - {}", app.name));
    writer.blank();

    writer.bold_node(&space.entity.name, "space", &space_alias);
    writer.bold_node(&org.entity.name, "organization", &org_alias);
    writer.edge(&org_alias, &space_alias);
    writer.blank();

    writer.component(
        &app_alias,
        "app",
        &app.name,
        &[
            format!("State: {}", app.state),
            format!("Created at: {}", app.created_at),
            format!("Updated at: {}", app.updated_at.as_deref().unwrap_or_default()),
        ],
    );

    if let Some(lifecycle) = app.buildpack_lifecycle() {
        let stack_name = lifecycle.stack.as_deref().filter(|name| !name.is_empty());
        let mut emitted = BTreeSet::new();
        for name in &lifecycle.buildpacks {
            if !emitted.insert(name.as_str()) {
                continue;
            }
            let buildpack_alias = match landscape.buildpack_for_stack(name, stack_name) {
                Some(buildpack) => alias(buildpack.guid()),
                None => {
                    warn!(app = %app.name, buildpack = %name, "Lifecycle buildpack is not registered");
                    alias(name)
                }
            };
            writer.bold_node(name, "buildpack", &buildpack_alias);
            writer.edge(&app_alias, &buildpack_alias);
        }

        if let Some(stack_name) = stack_name {
            let stack = landscape
                .stack_by_name(stack_name)
                .ok_or_else(|| RenderError::MissingReference {
                    kind: ResourceKind::Stack,
                    key: stack_name.to_owned(),
                    referenced_by: app_ref(),
                })?;
            let stack_alias = alias(stack.guid());
            writer.bold_node(&stack.entity.name, "stack", &stack_alias);
            writer.edge(&app_alias, &stack_alias);
        }
    }

    writer.edge(&space_alias, &app_alias);
    writer.blank();

    Ok(writer.finish())
}
