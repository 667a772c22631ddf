//! Accumulating script builder and formation registry.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use gmat_config::TemplateConfig;
use gmat_core::{DEFAULT_FORMATION, DEFAULT_SCRIPT_PATH, KeplerianElements, set_literal};
use tracing::{debug, info};

use crate::error::ScriptError;
use crate::render::{self, BLOCK_GAP};

/// Registry entry for a declared formation.
///
/// The set literal is derived once from the names at declaration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation {
    satellite_names: Vec<String>,
    satellite_set: String,
}

impl Formation {
    fn new<S: AsRef<str>>(satellite_names: &[S]) -> Self {
        Self {
            satellite_names: satellite_names
                .iter()
                .map(|name| name.as_ref().to_owned())
                .collect(),
            satellite_set: set_literal(satellite_names),
        }
    }

    /// Member spacecraft in declaration order.
    pub fn satellite_names(&self) -> &[String] {
        &self.satellite_names
    }

    /// Member set as written in the script, e.g. `{ Sat1, Sat2 }`.
    pub fn satellite_set(&self) -> &str {
        &self.satellite_set
    }
}

/// Builds one GMAT script by appending rendered blocks.
///
/// Every append operation returns only the text it added; [`Self::script`]
/// exposes the cumulative buffer. Builders are independent, so concurrent
/// generations each use their own instance.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    script: String,
    formations: BTreeMap<String, Formation>,
    templates: TemplateConfig,
    latest_formation: Option<String>,
}

impl ScriptBuilder {
    /// Empty builder using the reference template values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty builder rendering with the given template values.
    pub fn with_templates(templates: TemplateConfig) -> Self {
        Self {
            templates,
            ..Self::default()
        }
    }

    /// Template values used for every rendered block.
    pub fn templates(&self) -> &TemplateConfig {
        &self.templates
    }

    /// Everything appended so far.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// True until the first block is appended.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Registry entry for `name`, if declared.
    pub fn formation(&self, name: &str) -> Option<&Formation> {
        self.formations.get(name)
    }

    /// Registered formations ordered by name.
    pub fn formations(&self) -> impl Iterator<Item = (&str, &Formation)> {
        self.formations
            .iter()
            .map(|(name, formation)| (name.as_str(), formation))
    }

    /// Declare one spacecraft per name, then a formation grouping them.
    ///
    /// Names and element records are paired positionally and must have the
    /// same length; on mismatch nothing is appended or registered. An existing
    /// formation with the same name is replaced in the registry.
    pub fn declare_formation<S: AsRef<str>>(
        &mut self,
        satellite_names: &[S],
        elements: &[KeplerianElements],
        formation_name: &str,
    ) -> Result<&str, ScriptError> {
        if satellite_names.len() != elements.len() {
            return Err(ScriptError::ShapeMismatch {
                satellites: satellite_names.len(),
                elements: elements.len(),
            });
        }

        let formation = Formation::new(satellite_names);
        let start = self.script.len();
        for (name, sat_elements) in formation.satellite_names.iter().zip(elements) {
            let block = render::spacecraft(name, sat_elements, &self.templates.spacecraft);
            self.push_block(&[block]);
        }
        self.push_block(&[render::formation(formation_name, &formation.satellite_set)]);

        debug!(
            formation = formation_name,
            satellites = formation.satellite_names.len(),
            bytes = self.script.len() - start,
            "declared formation"
        );
        self.formations.insert(formation_name.to_owned(), formation);
        self.latest_formation = Some(formation_name.to_owned());
        Ok(&self.script[start..])
    }

    /// Append the default force model and the propagator that uses it.
    pub fn apply_default_force_model_and_propagator(&mut self) -> &str {
        let force_model = render::force_model(&self.templates.force_model);
        let propagator =
            render::propagator(&self.templates.propagator, &self.templates.force_model.name);
        self.push_block(&[force_model, propagator])
    }

    /// Append a report file writing `traits` to `path`.
    ///
    /// Trait names are passed through unchecked.
    pub fn add_report_file<S: AsRef<str>>(&mut self, traits: &[S], path: &str) -> &str {
        let block = render::report_file(&self.templates.report, path, traits);
        self.push_block(&[block])
    }

    /// Append a mission sequence propagating the latest declared formation.
    ///
    /// Falls back to [`DEFAULT_FORMATION`] when no formation has been declared.
    pub fn default_mission_sequence(
        &mut self,
        sat: &str,
        time_amount: f64,
        time_unit: &str,
    ) -> &str {
        let formation = self
            .latest_formation
            .clone()
            .unwrap_or_else(|| DEFAULT_FORMATION.to_owned());
        self.push_mission(&formation, sat, time_amount, time_unit)
    }

    /// Append a mission sequence propagating a specific registered formation.
    pub fn propagate_formation(
        &mut self,
        formation: &str,
        sat: &str,
        time_amount: f64,
        time_unit: &str,
    ) -> Result<&str, ScriptError> {
        if !self.formations.contains_key(formation) {
            return Err(ScriptError::UnknownFormation(formation.to_owned()));
        }
        Ok(self.push_mission(formation, sat, time_amount, time_unit))
    }

    /// Write the whole script to `path`, replacing any existing file.
    ///
    /// In-memory state is left untouched, so a builder can be saved repeatedly.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScriptError> {
        let path = path.as_ref();
        gmat_export::write_text(path, &self.script)?;
        info!(path = %path.display(), bytes = self.script.len(), "saved script");
        Ok(())
    }

    /// [`Self::save`] to [`DEFAULT_SCRIPT_PATH`].
    pub fn save_default(&self) -> Result<(), ScriptError> {
        self.save(DEFAULT_SCRIPT_PATH)
    }

    /// Stream the whole script to an arbitrary writer.
    pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(self.script.as_bytes())
    }

    fn push_mission(
        &mut self,
        formation: &str,
        sat: &str,
        time_amount: f64,
        time_unit: &str,
    ) -> &str {
        let block = render::mission_sequence(
            &self.templates.propagator.name,
            formation,
            sat,
            time_amount,
            time_unit,
        );
        self.push_block(&[block])
    }

    fn push_block(&mut self, sections: &[String]) -> &str {
        let start = self.script.len();
        self.script.push_str(BLOCK_GAP);
        for section in sections {
            self.script.push_str(section);
        }
        debug!(bytes = self.script.len() - start, "appended block");
        &self.script[start..]
    }
}
