//! Core records and literal formatting shared across the script generator workspace.

pub use elements::KeplerianElements;
pub use defaults::{
    DEFAULT_FORMATION, DEFAULT_REPORT_PATH, DEFAULT_SCRIPT_PATH, DEFAULT_TIME_AMOUNT,
    DEFAULT_TIME_UNIT,
};
pub use literal::{format_compact, format_real, set_literal};

/// Default identifiers and arguments used when callers do not supply their own.
pub mod defaults {
    /// Formation name used when none is given.
    pub const DEFAULT_FORMATION: &str = "form";
    /// Output filename of the report-file block.
    pub const DEFAULT_REPORT_PATH: &str = "SWIPE_ReportFile.tsv";
    /// Script path written by `save` when none is given.
    pub const DEFAULT_SCRIPT_PATH: &str = "Test_Vector";
    /// Propagation span of the default mission sequence.
    pub const DEFAULT_TIME_AMOUNT: f64 = 1.0;
    /// Stopping-condition parameter of the default mission sequence.
    pub const DEFAULT_TIME_UNIT: &str = "ElapsedDays";
}

/// Classical orbital element records.
pub mod elements {
    /// Six Keplerian elements substituted into a spacecraft declaration.
    ///
    /// Values are written verbatim; no range checks are applied.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct KeplerianElements {
        /// Semi-major axis (km).
        pub sma: f64,
        /// Eccentricity.
        pub ecc: f64,
        /// Inclination (deg).
        pub inc: f64,
        /// Right ascension of the ascending node (deg).
        pub raan: f64,
        /// Argument of periapsis (deg).
        pub aop: f64,
        /// True anomaly (deg).
        pub ta: f64,
    }

    impl KeplerianElements {
        /// Circular equatorial orbit at the given semi-major axis.
        pub fn circular(sma: f64) -> Self {
            Self {
                sma,
                ecc: 0.0,
                inc: 0.0,
                raan: 0.0,
                aop: 0.0,
                ta: 0.0,
            }
        }
    }
}

/// Rendering helpers for literals in the GMAT script language.
pub mod literal {
    /// Render a float the way GMAT reference scripts spell it.
    ///
    /// Uses the shortest round-trip digits, keeps a trailing `.0` on integral
    /// values and writes exponents with an explicit sign and at least two
    /// digits (`2.0`, `0.001`, `1e+70`, `1e-05`).
    pub fn format_real(value: f64) -> String {
        if value.is_nan() {
            return "nan".to_owned();
        }
        let debug = format!("{value:?}");
        match debug.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => debug,
        }
    }

    /// Like [`format_real`], but integral values drop the trailing `.0` (`850`, `2.2`).
    pub fn format_compact(value: f64) -> String {
        let real = format_real(value);
        match real.strip_suffix(".0") {
            Some(integral) => integral.to_owned(),
            None => real,
        }
    }

    /// Brace-delimited, comma-separated set literal: `{ a, b, c }`.
    pub fn set_literal<S: AsRef<str>>(items: &[S]) -> String {
        let joined = items
            .iter()
            .map(|item| item.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {joined} }}")
    }
}
