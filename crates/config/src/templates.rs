//! Fixed values baked into each script block.
//!
//! `TemplateConfig::default()` reproduces the reference script literals exactly.
//! Every section is `#[serde(default)]`, so an override file only has to name
//! the fields it changes.

use serde::Deserialize;

/// All template sections in one place.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TemplateConfig {
    pub spacecraft: SpacecraftDefaults,
    pub force_model: ForceModelConfig,
    pub propagator: PropagatorConfig,
    pub report: ReportFileConfig,
}

/// Spacecraft fields that are not orbital elements.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpacecraftDefaults {
    pub date_format: String,
    pub epoch: String,
    pub coordinate_system: String,
    pub display_state_type: String,
    pub dry_mass: f64,
    pub cd: f64,
    pub cr: f64,
    pub drag_area: f64,
    pub srp_area: f64,
    pub spad_drag_scale_factor: f64,
    pub spad_srp_scale_factor: f64,
    pub atmos_density_scale_factor: f64,
    pub extended_mass_properties_model: String,
    pub naif_id: i64,
    pub naif_id_reference_frame: i64,
    pub orbit_color: String,
    pub target_color: String,
    /// Diagonal of the 6x6 orbit error covariance.
    pub orbit_error_sigma: f64,
    pub cd_sigma: f64,
    pub cr_sigma: f64,
    pub id: String,
    pub attitude: String,
    pub spad_srp_interpolation_method: String,
    pub spad_srp_scale_factor_sigma: f64,
    pub spad_drag_interpolation_method: String,
    pub spad_drag_scale_factor_sigma: f64,
    pub atmos_density_scale_factor_sigma: f64,
    pub model_file: String,
    pub model_offset: [f64; 3],
    pub model_rotation: [f64; 3],
    pub model_scale: f64,
    pub attitude_display_state_type: String,
    pub attitude_rate_display_state_type: String,
    pub attitude_coordinate_system: String,
    pub euler_angle_sequence: String,
}

/// Placeholder sigma used for unmodelled uncertainties.
pub const UNBOUNDED_SIGMA: f64 = 1e70;

impl Default for SpacecraftDefaults {
    fn default() -> Self {
        Self {
            date_format: "UTCGregorian".into(),
            epoch: "01 Jan 2000 11:59:28.000".into(),
            coordinate_system: "EarthMJ2000Eq".into(),
            display_state_type: "Keplerian".into(),
            dry_mass: 850.0,
            cd: 2.2,
            cr: 1.8,
            drag_area: 15.0,
            srp_area: 1.0,
            spad_drag_scale_factor: 1.0,
            spad_srp_scale_factor: 1.0,
            atmos_density_scale_factor: 1.0,
            extended_mass_properties_model: "None".into(),
            naif_id: -123_456_789,
            naif_id_reference_frame: -123_456_789,
            orbit_color: "Red".into(),
            target_color: "Teal".into(),
            orbit_error_sigma: UNBOUNDED_SIGMA,
            cd_sigma: UNBOUNDED_SIGMA,
            cr_sigma: UNBOUNDED_SIGMA,
            id: "SatId".into(),
            attitude: "CoordinateSystemFixed".into(),
            spad_srp_interpolation_method: "Bilinear".into(),
            spad_srp_scale_factor_sigma: UNBOUNDED_SIGMA,
            spad_drag_interpolation_method: "Bilinear".into(),
            spad_drag_scale_factor_sigma: UNBOUNDED_SIGMA,
            atmos_density_scale_factor_sigma: UNBOUNDED_SIGMA,
            model_file: "../data/vehicle/models/aura.3ds".into(),
            model_offset: [0.0; 3],
            model_rotation: [0.0; 3],
            model_scale: 1.2,
            attitude_display_state_type: "Quaternion".into(),
            attitude_rate_display_state_type: "AngularVelocity".into(),
            attitude_coordinate_system: "EarthMJ2000Eq".into(),
            euler_angle_sequence: "321".into(),
        }
    }
}

/// Force model applied by the propagator.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ForceModelConfig {
    pub name: String,
    pub central_body: String,
    pub point_masses: Vec<String>,
    pub drag: String,
    pub srp: String,
    pub relativistic_correction: String,
    pub error_control: String,
}

impl Default for ForceModelConfig {
    fn default() -> Self {
        Self {
            name: "fm".into(),
            central_body: "Earth".into(),
            point_masses: vec!["Earth".into(), "Sun".into(), "Luna".into()],
            drag: "None".into(),
            srp: "Off".into(),
            relativistic_correction: "Off".into(),
            error_control: "RSSStep".into(),
        }
    }
}

/// Numerical integrator settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PropagatorConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub integrator: String,
    pub initial_step_size: f64,
    /// Kept as text: GMAT's reference value has no shorter f64 spelling.
    pub accuracy: String,
    pub min_step: f64,
    pub max_step: f64,
    pub max_step_attempts: u32,
    pub stop_if_accuracy_is_violated: bool,
}

impl Default for PropagatorConfig {
    fn default() -> Self {
        Self {
            name: "prop".into(),
            integrator: "RungeKutta89".into(),
            initial_step_size: 60.0,
            accuracy: "9.999999999999999e-12".into(),
            min_step: 0.001,
            max_step: 2700.0,
            max_step_attempts: 50,
            stop_if_accuracy_is_violated: true,
        }
    }
}

/// Report-file layout settings. The filename and reported variables are per call.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReportFileConfig {
    pub name: String,
    pub solver_iterations: String,
    pub upper_left: [i32; 2],
    pub size: [i32; 2],
    pub relative_z_order: i32,
    pub maximized: bool,
    pub precision: u32,
    pub write_headers: bool,
    pub left_justify: String,
    pub zero_fill: String,
    pub fixed_width: bool,
    pub delimiter: String,
    pub column_width: u32,
    pub write_report: bool,
}

impl Default for ReportFileConfig {
    fn default() -> Self {
        Self {
            name: "ReportFile1".into(),
            solver_iterations: "Current".into(),
            upper_left: [0, 0],
            size: [0, 0],
            relative_z_order: 0,
            maximized: false,
            precision: 16,
            write_headers: true,
            left_justify: "On".into(),
            zero_fill: "Off".into(),
            fixed_width: false,
            delimiter: "  ".into(),
            column_width: 23,
            write_report: true,
        }
    }
}
