use yantra_shadows::angles::{equation_of_time, solar_declination, time_correction};
use yantra_shadows::sun_events::*;
use yantra_shadows::types::SunEvent;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn delhi_solstice() -> SunEvent {
    let n = 173;
    let tc = time_correction(77.2, 82.5, equation_of_time(n));
    sunrise_sunset(28.6, solar_declination(n), tc)
}

// ── Rise / set ──

#[test]
fn test_delhi_solstice_clock_times() {
    let ev = delhi_solstice();
    assert_eq!(ev.sunrise_hm().as_deref(), Some("05:28"));
    assert_eq!(ev.sunset_hm().as_deref(), Some("19:17"));
}

#[test]
fn test_symmetric_about_solar_noon() {
    for &(lat, decl) in &[(28.6, 23.4), (51.5, -20.0), (-33.9, 12.0), (0.0, 5.0), (65.0, 23.0)] {
        match sunrise_sunset(lat, decl, 0.0) {
            SunEvent::Daily {
                sunrise_solar,
                sunset_solar,
                ..
            } => {
                assert_approx!(sunrise_solar + sunset_solar, 24.0, 1e-9);
            }
            SunEvent::Polar => panic!("unexpected polar condition at {} / {}", lat, decl),
        }
    }
}

#[test]
fn test_equinox_gives_twelve_hour_day() {
    if let SunEvent::Daily {
        sunrise_solar,
        sunset_solar,
        ..
    } = sunrise_sunset(45.0, 0.0, 0.0)
    {
        assert_approx!(sunrise_solar, 6.0, 1e-9);
        assert_approx!(sunset_solar, 18.0, 1e-9);
    } else {
        panic!("equinox should rise and set");
    }
}

#[test]
fn test_clock_times_shift_by_time_correction() {
    let ev = sunrise_sunset(40.0, 10.0, 30.0);
    if let SunEvent::Daily {
        sunrise_solar,
        sunrise_local,
        sunset_solar,
        sunset_local,
    } = ev
    {
        assert_approx!(sunrise_solar - sunrise_local, 0.5, 1e-12);
        assert_approx!(sunset_solar - sunset_local, 0.5, 1e-12);
    } else {
        panic!("expected rise/set");
    }
}

#[test]
fn test_longer_days_in_summer() {
    let day_length = |decl: f64| match sunrise_sunset(40.0, decl, 0.0) {
        SunEvent::Daily {
            sunrise_solar,
            sunset_solar,
            ..
        } => sunset_solar - sunrise_solar,
        SunEvent::Polar => panic!("polar at 40°"),
    };
    assert!(day_length(23.0) > day_length(0.0));
    assert!(day_length(0.0) > day_length(-23.0));
}

// ── Polar conditions ──

#[test]
fn test_arctic_winter_is_polar() {
    let ev = sunrise_sunset(78.0, solar_declination(355), 0.0);
    assert!(ev.is_polar());
    assert_eq!(ev.sunrise_hm(), None);
    assert_eq!(ev.sunset_hm(), None);
}

#[test]
fn test_arctic_summer_is_polar() {
    assert!(sunrise_sunset(78.0, solar_declination(172), 0.0).is_polar());
    assert!(sunrise_sunset(-78.0, solar_declination(355), 0.0).is_polar());
}

#[test]
fn test_polar_serializes_sentinel() {
    let json = serde_json::to_value(SunEvent::Polar).unwrap();
    assert_eq!(json["sunrise_local"], NO_RISE_SET);
    assert_eq!(json["sunset_local"], NO_RISE_SET);
}

#[test]
fn test_daily_serializes_hh_mm() {
    let json = serde_json::to_value(delhi_solstice()).unwrap();
    assert_eq!(json["sunrise_local"], "05:28");
    assert_eq!(json["sunset_local"], "19:17");
}

// ── Formatting ──

#[test]
fn test_hours_to_hm_truncates() {
    assert_eq!(hours_to_hm(6.0), "06:00");
    assert_eq!(hours_to_hm(6.99), "06:59");
    assert_eq!(hours_to_hm(19.2929), "19:17");
    assert_eq!(hours_to_hm(23.5), "23:30");
}
