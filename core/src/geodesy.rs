// core/src/geodesy.rs

pub const EARTH_RADIUS_KM: f64 = 6371.0; // middelradius
pub const SECS_PER_HOUR: f64 = 3600.0;

/// Storsirkelavstand (haversine) i km mellom to (lat, lon) i grader.
/// Sammenfallende punkter gir 0.0; asin-argumentet clampes så antipodale
/// punkter ikke gir NaN fra avrundingsstøy.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if !(lat1.is_finite() && lon1.is_finite() && lat2.is_finite() && lon2.is_finite()) {
        return 0.0;
    }

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // a ∈ [0, 1] matematisk; clamp mot flyttallsdrift
    let a = a.clamp(0.0, 1.0);
    let d = 2.0 * EARTH_RADIUS_KM * a.sqrt().asin();

    if d.is_finite() {
        d.max(0.0)
    } else {
        0.0
    }
}

/// Fart (km/t) fra distanse (km) og medgått tid (sek).
/// Returnerer 0 når tiden er <= 0 — aldri divisjon på null eller NaN.
#[inline]
pub fn speed_from_distance_time(distance_km: f64, elapsed_secs: f64) -> f64 {
    if elapsed_secs <= 0.0 || !elapsed_secs.is_finite() || !distance_km.is_finite() {
        return 0.0;
    }
    let v = distance_km / (elapsed_secs / SECS_PER_HOUR);
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
