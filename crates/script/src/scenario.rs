//! Drive a builder through a scenario manifest in the usual order:
//! formations, force model and propagator, report file, mission sequence.

use gmat_config::{ScenarioManifest, TemplateConfig};
use tracing::info;

use crate::builder::ScriptBuilder;
use crate::error::ScriptError;

/// Assemble the script described by `manifest`.
pub fn build_scenario(
    manifest: &ScenarioManifest,
    templates: TemplateConfig,
) -> Result<ScriptBuilder, ScriptError> {
    let mut builder = ScriptBuilder::with_templates(templates);

    for formation in &manifest.formations {
        builder.declare_formation(
            &formation.satellite_names(),
            &formation.elements(),
            &formation.name,
        )?;
    }

    if manifest.force_model {
        builder.apply_default_force_model_and_propagator();
    }

    if let Some(report) = &manifest.report {
        builder.add_report_file(&report.traits, &report.path);
    }

    if let Some(mission) = &manifest.mission {
        match &mission.formation {
            Some(formation) => {
                builder.propagate_formation(
                    formation,
                    &mission.satellite,
                    mission.amount,
                    &mission.unit,
                )?;
            }
            None => {
                builder.default_mission_sequence(&mission.satellite, mission.amount, &mission.unit);
            }
        }
    }

    info!(
        formations = manifest.formations.len(),
        bytes = builder.script().len(),
        "assembled scenario script"
    );
    Ok(builder)
}
