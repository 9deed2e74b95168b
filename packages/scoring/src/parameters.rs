//! Per-parameter normalization onto the 0-10 risk scale.
//!
//! Thresholds here are part of the public scoring contract: consumers that
//! validate scores depend on these exact bands. `totalRainfall` depends on
//! the hazard and lives in [`crate::rainfall`].

use crate::bands::{BandTable, ScoreBand};

/// Higher NDVI (greener canopy) is safer.
pub const NDVI_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_least(0.8, 0.0),
        ScoreBand::at_least(0.6, 2.0),
        ScoreBand::at_least(0.4, 4.0),
        ScoreBand::at_least(0.3, 6.0),
        ScoreBand::at_least(0.2, 8.0),
    ],
    10.0,
);

/// Higher EVI is safer.
pub const EVI_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_least(0.6, 0.0),
        ScoreBand::at_least(0.4, 2.0),
        ScoreBand::at_least(0.3, 4.0),
        ScoreBand::at_least(0.2, 6.0),
        ScoreBand::at_least(0.1, 8.0),
    ],
    10.0,
);

/// Higher NDMI (wetter canopy) is safer.
pub const NDMI_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_least(0.4, 0.0),
        ScoreBand::at_least(0.2, 2.0),
        ScoreBand::at_least(0.0, 4.0),
        ScoreBand::at_least(-0.2, 6.0),
        ScoreBand::at_least(-0.4, 8.0),
    ],
    10.0,
);

/// Cooler land surface is safer.
pub const LST_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_most(25.0, 0.0),
        ScoreBand::at_most(30.0, 2.0),
        ScoreBand::at_most(35.0, 4.0),
        ScoreBand::at_most(40.0, 6.0),
        ScoreBand::at_most(45.0, 8.0),
    ],
    10.0,
);

/// Cooler-than-normal is safer.
pub const LST_ANOMALY_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_most(-2.0, 0.0),
        ScoreBand::at_most(0.0, 2.0),
        ScoreBand::at_most(2.0, 4.0),
        ScoreBand::at_most(4.0, 6.0),
        ScoreBand::at_most(6.0, 8.0),
    ],
    10.0,
);

/// Wetter-than-normal is safer, except a large surplus scores above a
/// small one.
pub const RAINFALL_ANOMALY_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_least(20.0, 2.0),
        ScoreBand::at_least(0.0, 0.0),
        ScoreBand::at_least(-20.0, 4.0),
        ScoreBand::at_least(-40.0, 6.0),
        ScoreBand::at_least(-60.0, 8.0),
    ],
    10.0,
);

/// Higher lifted index (more stable air) is safer.
pub const LIFTED_INDEX_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_least(6.0, 0.0),
        ScoreBand::at_least(2.0, 2.0),
        ScoreBand::at_least(0.0, 4.0),
        ScoreBand::at_least(-2.0, 6.0),
        ScoreBand::at_least(-6.0, 8.0),
    ],
    10.0,
);

/// Less convective energy is safer.
pub const CAPE_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_most(1000.0, 0.0),
        ScoreBand::at_most(2000.0, 2.0),
        ScoreBand::at_most(3000.0, 4.0),
        ScoreBand::at_most(4000.0, 6.0),
        ScoreBand::at_most(5000.0, 8.0),
    ],
    10.0,
);

/// Moderate shear is safest. Ranges overlap and are checked in order.
pub const WIND_SHEAR_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::between(10.0, 20.0, 2.0),
        ScoreBand::between(5.0, 25.0, 4.0),
        ScoreBand::between(0.0, 30.0, 6.0),
        ScoreBand::at_most(40.0, 8.0),
    ],
    10.0,
);

/// Lower evapotranspiration is safer.
pub const ETA_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_most(2.0, 0.0),
        ScoreBand::at_most(4.0, 2.0),
        ScoreBand::at_most(6.0, 4.0),
        ScoreBand::at_most(8.0, 6.0),
        ScoreBand::at_most(10.0, 8.0),
    ],
    10.0,
);

#[must_use]
pub fn get_ndvi_score(value: f64) -> f64 {
    NDVI_BANDS.score(value)
}

#[must_use]
pub fn get_evi_score(value: f64) -> f64 {
    EVI_BANDS.score(value)
}

#[must_use]
pub fn get_ndmi_score(value: f64) -> f64 {
    NDMI_BANDS.score(value)
}

#[must_use]
pub fn get_lst_score(value: f64) -> f64 {
    LST_BANDS.score(value)
}

#[must_use]
pub fn get_lst_anomaly_score(value: f64) -> f64 {
    LST_ANOMALY_BANDS.score(value)
}

#[must_use]
pub fn get_rainfall_anomaly_score(value: f64) -> f64 {
    RAINFALL_ANOMALY_BANDS.score(value)
}

#[must_use]
pub fn get_lifted_index_score(value: f64) -> f64 {
    LIFTED_INDEX_BANDS.score(value)
}

#[must_use]
pub fn get_cape_score(value: f64) -> f64 {
    CAPE_BANDS.score(value)
}

#[must_use]
pub fn get_wind_shear_score(value: f64) -> f64 {
    WIND_SHEAR_BANDS.score(value)
}

#[must_use]
pub fn get_eta_score(value: f64) -> f64 {
    ETA_BANDS.score(value)
}

/// Scores the number of active weather alerts.
///
/// Alerts are counts, so this is a direct lookup rather than a band table.
#[must_use]
pub const fn get_weather_alerts_score(count: u32) -> f64 {
    match count {
        0 => 0.0,
        1 => 3.0,
        2 => 6.0,
        3 => 8.0,
        _ => 10.0,
    }
}
