use gmat_scriptgen::common::KeplerianElements;
use gmat_scriptgen::config::TemplateConfig;
use gmat_scriptgen::script::render;

const RULE: &str = "%----------------------------------------";

fn sample_elements() -> KeplerianElements {
    KeplerianElements {
        sma: 7000.0,
        ecc: 0.001,
        inc: 98.0,
        raan: 0.0,
        aop: 0.0,
        ta: 0.0,
    }
}

#[test]
fn spacecraft_block_matches_reference_layout() {
    let templates = TemplateConfig::default();
    let block = render::spacecraft("Sat1", &sample_elements(), &templates.spacecraft);

    let expected = [
        RULE,
        "%---------- Create Spacecraft Sat1",
        RULE,
        "",
        "Create Spacecraft Sat1;",
        "GMAT Sat1.DateFormat = UTCGregorian;",
        "GMAT Sat1.Epoch = '01 Jan 2000 11:59:28.000';",
        "GMAT Sat1.CoordinateSystem = EarthMJ2000Eq;",
        "GMAT Sat1.DisplayStateType = Keplerian;",
        "GMAT Sat1.SMA = 7000.0;",
        "GMAT Sat1.ECC = 0.001;",
        "GMAT Sat1.INC = 98.0;",
        "GMAT Sat1.RAAN = 0.0;",
        "GMAT Sat1.AOP = 0.0;",
        "GMAT Sat1.TA = 0.0;",
        "GMAT Sat1.DryMass = 850;",
        "GMAT Sat1.Cd = 2.2;",
        "GMAT Sat1.Cr = 1.8;",
        "GMAT Sat1.DragArea = 15;",
        "GMAT Sat1.SRPArea = 1;",
        "GMAT Sat1.SPADDragScaleFactor = 1;",
        "GMAT Sat1.SPADSRPScaleFactor = 1;",
        "GMAT Sat1.AtmosDensityScaleFactor = 1;",
        "GMAT Sat1.ExtendedMassPropertiesModel = 'None';",
        "GMAT Sat1.NAIFId = -123456789;",
        "GMAT Sat1.NAIFIdReferenceFrame = -123456789;",
        "GMAT Sat1.OrbitColor = Red;",
        "GMAT Sat1.TargetColor = Teal;",
        "GMAT Sat1.OrbitErrorCovariance = [ 1e+70 0 0 0 0 0 ; 0 1e+70 0 0 0 0 ; 0 0 1e+70 0 0 0 ; 0 0 0 1e+70 0 0 ; 0 0 0 0 1e+70 0 ; 0 0 0 0 0 1e+70 ];",
        "GMAT Sat1.CdSigma = 1e+70;",
        "GMAT Sat1.CrSigma = 1e+70;",
        "GMAT Sat1.Id = 'SatId';",
        "GMAT Sat1.Attitude = CoordinateSystemFixed;",
        "GMAT Sat1.SPADSRPInterpolationMethod = Bilinear;",
        "GMAT Sat1.SPADSRPScaleFactorSigma = 1e+70;",
        "GMAT Sat1.SPADDragInterpolationMethod = Bilinear;",
        "GMAT Sat1.SPADDragScaleFactorSigma = 1e+70;",
        "GMAT Sat1.AtmosDensityScaleFactorSigma = 1e+70;",
        "GMAT Sat1.ModelFile = '../data/vehicle/models/aura.3ds';",
        "GMAT Sat1.ModelOffsetX = 0;",
        "GMAT Sat1.ModelOffsetY = 0;",
        "GMAT Sat1.ModelOffsetZ = 0;",
        "GMAT Sat1.ModelRotationX = 0;",
        "GMAT Sat1.ModelRotationY = 0;",
        "GMAT Sat1.ModelRotationZ = 0;",
        "GMAT Sat1.ModelScale = 1.2;",
        "GMAT Sat1.AttitudeDisplayStateType = 'Quaternion';",
        "GMAT Sat1.AttitudeRateDisplayStateType = 'AngularVelocity';",
        "GMAT Sat1.AttitudeCoordinateSystem = EarthMJ2000Eq;",
        "GMAT Sat1.EulerAngleSequence = '321';",
        "",
        "",
    ]
    .join("\n");

    assert_eq!(block, expected);
}

#[test]
fn force_model_and_propagator_sections() {
    let templates = TemplateConfig::default();
    let text = render::force_model(&templates.force_model)
        + &render::propagator(&templates.propagator, &templates.force_model.name);

    let expected = [
        RULE,
        "%---------- ForceModels",
        RULE,
        "",
        "Create ForceModel fm;",
        "GMAT fm.CentralBody = Earth;",
        "GMAT fm.PointMasses = {Earth, Sun, Luna};",
        "GMAT fm.Drag = None;",
        "GMAT fm.SRP = Off;",
        "GMAT fm.RelativisticCorrection = Off;",
        "GMAT fm.ErrorControl = RSSStep;",
        "",
        RULE,
        "%---------- Propagators",
        RULE,
        "",
        "Create Propagator prop;",
        "GMAT prop.FM = fm;",
        "GMAT prop.Type = RungeKutta89;",
        "GMAT prop.InitialStepSize = 60;",
        "GMAT prop.Accuracy = 9.999999999999999e-12;",
        "GMAT prop.MinStep = 0.001;",
        "GMAT prop.MaxStep = 2700;",
        "GMAT prop.MaxStepAttempts = 50;",
        "GMAT prop.StopIfAccuracyIsViolated = true;",
        "",
        "",
    ]
    .join("\n");

    assert_eq!(text, expected);
}

#[test]
fn report_file_section() {
    let templates = TemplateConfig::default();
    let block = render::report_file(&templates.report, "out.tsv", &["Sat1.X", "Sat1.Y"]);

    let expected = [
        RULE,
        "%---------- Report File",
        RULE,
        "",
        "Create ReportFile ReportFile1;",
        "GMAT ReportFile1.SolverIterations = Current;",
        "GMAT ReportFile1.UpperLeft = [ 0 0 ];",
        "GMAT ReportFile1.Size = [ 0 0 ];",
        "GMAT ReportFile1.RelativeZOrder = 0;",
        "GMAT ReportFile1.Maximized = false;",
        "GMAT ReportFile1.Filename = 'out.tsv';",
        "GMAT ReportFile1.Precision = 16;",
        "GMAT ReportFile1.Add = { Sat1.X, Sat1.Y };",
        "GMAT ReportFile1.WriteHeaders = true;",
        "GMAT ReportFile1.LeftJustify = On;",
        "GMAT ReportFile1.ZeroFill = Off;",
        "GMAT ReportFile1.FixedWidth = false;",
        "GMAT ReportFile1.Delimiter = '  ';",
        "GMAT ReportFile1.ColumnWidth = 23;",
        "GMAT ReportFile1.WriteReport = true;",
        "",
        "",
    ]
    .join("\n");

    assert_eq!(block, expected);
}

#[test]
fn mission_sequence_section() {
    let block = render::mission_sequence("prop", "form", "Sat1", 1.0, "ElapsedDays");

    let expected = [
        RULE,
        "%---------- Mission Sequence",
        RULE,
        "",
        "",
        "BeginMissionSequence;",
        "",
        "Propagate 'Prop 1.0 ElapsedDays' prop(form) { Sat1.ElapsedDays = 1.0 };",
        "",
        "",
    ]
    .join("\n");

    assert_eq!(block, expected);
}

#[test]
fn formation_section_uses_declared_name() {
    let block = render::formation("chase", "{ A, B }");
    assert!(block.contains("Create Formation chase;\nGMAT chase.Add = { A, B };\n"));
    assert!(block.starts_with(RULE));
    assert!(block.ends_with(";\n\n"));
}
