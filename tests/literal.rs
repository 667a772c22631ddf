use gmat_scriptgen::common::{format_compact, format_real, set_literal};

#[test]
fn real_values_keep_a_fractional_part() {
    assert_eq!(format_real(2.0), "2.0");
    assert_eq!(format_real(0.1), "0.1");
    assert_eq!(format_real(7000.0), "7000.0");
    assert_eq!(format_real(-12.5), "-12.5");
}

#[test]
fn exponents_are_signed_and_padded() {
    assert_eq!(format_real(1e70), "1e+70");
    assert_eq!(format_real(1e-5), "1e-05");
    assert_eq!(format_real(1.5e16), "1.5e+16");
    assert_eq!(format_real(2.5e-12), "2.5e-12");
    assert_eq!(format_real(0.0001), "0.0001");
}

#[test]
fn compact_drops_integral_suffix_only() {
    assert_eq!(format_compact(850.0), "850");
    assert_eq!(format_compact(2.2), "2.2");
    assert_eq!(format_compact(0.0), "0");
    assert_eq!(format_compact(1e70), "1e+70");
    assert_eq!(format_compact(0.001), "0.001");
}

#[test]
fn non_finite_values() {
    assert_eq!(format_real(f64::NAN), "nan");
    assert_eq!(format_real(f64::INFINITY), "inf");
    assert_eq!(format_real(f64::NEG_INFINITY), "-inf");
}

#[test]
fn set_literal_pads_braces() {
    assert_eq!(set_literal(&["a", "b", "c"]), "{ a, b, c }");
    assert_eq!(set_literal(&[String::from("Sat1")]), "{ Sat1 }");
    assert_eq!(set_literal::<&str>(&[]), "{  }");
}
