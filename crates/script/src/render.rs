//! Block renderers for the GMAT script language.
//!
//! Each function returns one banner-headed section ending in a blank line.
//! The builder prefixes a two-line gap before every block it appends.

use std::fmt::Display;

use gmat_config::{ForceModelConfig, PropagatorConfig, ReportFileConfig, SpacecraftDefaults};
use gmat_core::{KeplerianElements, format_compact, format_real, set_literal};

/// Separator written before every appended block.
pub const BLOCK_GAP: &str = "\n\n";

const RULE: &str = "%----------------------------------------";

struct Section {
    text: String,
}

impl Section {
    fn new(title: &str) -> Self {
        Self {
            text: format!("{RULE}\n%---------- {title}\n{RULE}\n\n"),
        }
    }

    fn line(&mut self, line: impl Display) -> &mut Self {
        self.text.push_str(&line.to_string());
        self.text.push('\n');
        self
    }

    fn blank(&mut self) -> &mut Self {
        self.text.push('\n');
        self
    }

    fn create(&mut self, kind: &str, name: &str) -> &mut Self {
        self.line(format_args!("Create {kind} {name};"))
    }

    fn assign(&mut self, object: &str, field: &str, value: impl Display) -> &mut Self {
        self.line(format_args!("GMAT {object}.{field} = {value};"))
    }

    fn finish(&mut self) -> String {
        self.blank();
        std::mem::take(&mut self.text)
    }
}

fn quoted(value: &str) -> String {
    format!("'{value}'")
}

fn pair(values: [i32; 2]) -> String {
    format!("[ {} {} ]", values[0], values[1])
}

/// Diagonal 6x6 covariance literal: rows space-separated, joined by ` ; `.
fn diagonal_covariance(sigma: f64) -> String {
    let sigma = format_compact(sigma);
    let rows: Vec<String> = (0..6)
        .map(|row| {
            (0..6)
                .map(|col| if row == col { sigma.as_str() } else { "0" })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    format!("[ {} ]", rows.join(" ; "))
}

/// Spacecraft declaration with Keplerian initial state.
pub fn spacecraft(
    name: &str,
    elements: &KeplerianElements,
    defaults: &SpacecraftDefaults,
) -> String {
    let [offset_x, offset_y, offset_z] = defaults.model_offset;
    let [rotation_x, rotation_y, rotation_z] = defaults.model_rotation;
    Section::new(&format!("Create Spacecraft {name}"))
        .create("Spacecraft", name)
        .assign(name, "DateFormat", &defaults.date_format)
        .assign(name, "Epoch", quoted(&defaults.epoch))
        .assign(name, "CoordinateSystem", &defaults.coordinate_system)
        .assign(name, "DisplayStateType", &defaults.display_state_type)
        .assign(name, "SMA", format_real(elements.sma))
        .assign(name, "ECC", format_real(elements.ecc))
        .assign(name, "INC", format_real(elements.inc))
        .assign(name, "RAAN", format_real(elements.raan))
        .assign(name, "AOP", format_real(elements.aop))
        .assign(name, "TA", format_real(elements.ta))
        .assign(name, "DryMass", format_compact(defaults.dry_mass))
        .assign(name, "Cd", format_compact(defaults.cd))
        .assign(name, "Cr", format_compact(defaults.cr))
        .assign(name, "DragArea", format_compact(defaults.drag_area))
        .assign(name, "SRPArea", format_compact(defaults.srp_area))
        .assign(name, "SPADDragScaleFactor", format_compact(defaults.spad_drag_scale_factor))
        .assign(name, "SPADSRPScaleFactor", format_compact(defaults.spad_srp_scale_factor))
        .assign(
            name,
            "AtmosDensityScaleFactor",
            format_compact(defaults.atmos_density_scale_factor),
        )
        .assign(
            name,
            "ExtendedMassPropertiesModel",
            quoted(&defaults.extended_mass_properties_model),
        )
        .assign(name, "NAIFId", defaults.naif_id)
        .assign(name, "NAIFIdReferenceFrame", defaults.naif_id_reference_frame)
        .assign(name, "OrbitColor", &defaults.orbit_color)
        .assign(name, "TargetColor", &defaults.target_color)
        .assign(
            name,
            "OrbitErrorCovariance",
            diagonal_covariance(defaults.orbit_error_sigma),
        )
        .assign(name, "CdSigma", format_compact(defaults.cd_sigma))
        .assign(name, "CrSigma", format_compact(defaults.cr_sigma))
        .assign(name, "Id", quoted(&defaults.id))
        .assign(name, "Attitude", &defaults.attitude)
        .assign(
            name,
            "SPADSRPInterpolationMethod",
            &defaults.spad_srp_interpolation_method,
        )
        .assign(
            name,
            "SPADSRPScaleFactorSigma",
            format_compact(defaults.spad_srp_scale_factor_sigma),
        )
        .assign(
            name,
            "SPADDragInterpolationMethod",
            &defaults.spad_drag_interpolation_method,
        )
        .assign(
            name,
            "SPADDragScaleFactorSigma",
            format_compact(defaults.spad_drag_scale_factor_sigma),
        )
        .assign(
            name,
            "AtmosDensityScaleFactorSigma",
            format_compact(defaults.atmos_density_scale_factor_sigma),
        )
        .assign(name, "ModelFile", quoted(&defaults.model_file))
        .assign(name, "ModelOffsetX", format_compact(offset_x))
        .assign(name, "ModelOffsetY", format_compact(offset_y))
        .assign(name, "ModelOffsetZ", format_compact(offset_z))
        .assign(name, "ModelRotationX", format_compact(rotation_x))
        .assign(name, "ModelRotationY", format_compact(rotation_y))
        .assign(name, "ModelRotationZ", format_compact(rotation_z))
        .assign(name, "ModelScale", format_compact(defaults.model_scale))
        .assign(
            name,
            "AttitudeDisplayStateType",
            quoted(&defaults.attitude_display_state_type),
        )
        .assign(
            name,
            "AttitudeRateDisplayStateType",
            quoted(&defaults.attitude_rate_display_state_type),
        )
        .assign(
            name,
            "AttitudeCoordinateSystem",
            &defaults.attitude_coordinate_system,
        )
        .assign(name, "EulerAngleSequence", quoted(&defaults.euler_angle_sequence))
        .finish()
}

/// Formation declaration grouping previously created spacecraft.
pub fn formation(name: &str, satellite_set: &str) -> String {
    Section::new("Formation")
        .create("Formation", name)
        .assign(name, "Add", satellite_set)
        .finish()
}

/// Force model section. The point-mass list keeps GMAT's unpadded `{A, B}` form.
pub fn force_model(config: &ForceModelConfig) -> String {
    let name = config.name.as_str();
    Section::new("ForceModels")
        .create("ForceModel", name)
        .assign(name, "CentralBody", &config.central_body)
        .assign(
            name,
            "PointMasses",
            format_args!("{{{}}}", config.point_masses.join(", ")),
        )
        .assign(name, "Drag", &config.drag)
        .assign(name, "SRP", &config.srp)
        .assign(name, "RelativisticCorrection", &config.relativistic_correction)
        .assign(name, "ErrorControl", &config.error_control)
        .finish()
}

/// Propagator section bound to the force model named `force_model`.
pub fn propagator(config: &PropagatorConfig, force_model: &str) -> String {
    let name = config.name.as_str();
    Section::new("Propagators")
        .create("Propagator", name)
        .assign(name, "FM", force_model)
        .assign(name, "Type", &config.integrator)
        .assign(name, "InitialStepSize", format_compact(config.initial_step_size))
        .assign(name, "Accuracy", &config.accuracy)
        .assign(name, "MinStep", format_compact(config.min_step))
        .assign(name, "MaxStep", format_compact(config.max_step))
        .assign(name, "MaxStepAttempts", config.max_step_attempts)
        .assign(
            name,
            "StopIfAccuracyIsViolated",
            config.stop_if_accuracy_is_violated,
        )
        .finish()
}

/// Report-file section writing `traits` to `path`.
pub fn report_file<S: AsRef<str>>(
    config: &ReportFileConfig,
    path: &str,
    traits: &[S],
) -> String {
    let name = config.name.as_str();
    Section::new("Report File")
        .create("ReportFile", name)
        .assign(name, "SolverIterations", &config.solver_iterations)
        .assign(name, "UpperLeft", pair(config.upper_left))
        .assign(name, "Size", pair(config.size))
        .assign(name, "RelativeZOrder", config.relative_z_order)
        .assign(name, "Maximized", config.maximized)
        .assign(name, "Filename", quoted(path))
        .assign(name, "Precision", config.precision)
        .assign(name, "Add", set_literal(traits))
        .assign(name, "WriteHeaders", config.write_headers)
        .assign(name, "LeftJustify", &config.left_justify)
        .assign(name, "ZeroFill", &config.zero_fill)
        .assign(name, "FixedWidth", config.fixed_width)
        .assign(name, "Delimiter", quoted(&config.delimiter))
        .assign(name, "ColumnWidth", config.column_width)
        .assign(name, "WriteReport", config.write_report)
        .finish()
}

/// Mission sequence with a single propagate command stopping on `sat.time_unit`.
pub fn mission_sequence(
    propagator: &str,
    formation: &str,
    sat: &str,
    time_amount: f64,
    time_unit: &str,
) -> String {
    let amount = format_real(time_amount);
    Section::new("Mission Sequence")
        .blank()
        .line("BeginMissionSequence;")
        .blank()
        .line(format_args!(
            "Propagate 'Prop {amount} {time_unit}' {propagator}({formation}) {{ {sat}.{time_unit} = {amount} }};"
        ))
        .finish()
}
