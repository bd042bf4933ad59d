use serde::{Deserialize, Serialize};

/// The four named regions of the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    MountStupid,
    ValleyOfDespair,
    SlopeOfEnlightenment,
    PlateauOfSustainability,
}

impl Zone {
    pub const ALL: [Self; 4] = [
        Self::MountStupid,
        Self::ValleyOfDespair,
        Self::SlopeOfEnlightenment,
        Self::PlateauOfSustainability,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MountStupid => "Mt. Stupid",
            Self::ValleyOfDespair => "Valley of Despair",
            Self::SlopeOfEnlightenment => "Slope of Enlightenment",
            Self::PlateauOfSustainability => "Plateau of Sustainability",
        }
    }

    /// Upper-case two-line caption drawn on the chart.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::MountStupid => "MT. STUPID",
            Self::ValleyOfDespair => "VALLEY OF\nDESPAIR",
            Self::SlopeOfEnlightenment => "SLOPE OF\nENLIGHTENMENT",
            Self::PlateauOfSustainability => "PLATEAU OF\nSUSTAINABILITY",
        }
    }

    /// Caption anchor in normalized drawable coordinates, y measured from
    /// the top.
    #[must_use]
    pub fn caption_anchor(self) -> (f64, f64) {
        match self {
            Self::MountStupid => (0.18, 0.02),
            Self::ValleyOfDespair => (0.40, 0.97),
            Self::SlopeOfEnlightenment => (0.62, 0.50),
            Self::PlateauOfSustainability => (0.88, 0.10),
        }
    }
}

/// Ascending upper bounds of the first three zones.
pub const ZONE_THRESHOLDS: [f64; 3] = [0.25, 0.48, 0.75];

#[must_use]
pub fn zone_for(x: f64) -> Zone {
    let x = clamp_unit(x);
    Zone::ALL
        .iter()
        .zip(ZONE_THRESHOLDS)
        .find(|(_, upper)| x < *upper)
        .map_or(Zone::PlateauOfSustainability, |(zone, _)| *zone)
}

/// Finer subdivision of a zone with its own status message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBand {
    pub zone: Zone,
    /// Exclusive upper bound; the last band also takes `x == 1.0`.
    pub upper: f64,
    template: &'static str,
}

impl ZoneBand {
    const fn new(zone: Zone, upper: f64, template: &'static str) -> Self {
        Self {
            zone,
            upper,
            template,
        }
    }

    #[must_use]
    pub fn template(&self) -> &'static str {
        self.template
    }

    #[must_use]
    pub fn message(&self, name: &str) -> String {
        self.template.replace("{name}", name)
    }
}

pub static ZONE_BANDS: [ZoneBand; 12] = [
    ZoneBand::new(Zone::MountStupid, 0.08, "{name} just read one article about it."),
    ZoneBand::new(Zone::MountStupid, 0.17, "{name} is now explaining it to experts."),
    ZoneBand::new(Zone::MountStupid, 0.25, "{name} has started to notice a few gaps."),
    ZoneBand::new(Zone::ValleyOfDespair, 0.32, "{name} realises it is a lot bigger than expected."),
    ZoneBand::new(Zone::ValleyOfDespair, 0.40, "{name} is sure they know nothing at all."),
    ZoneBand::new(Zone::ValleyOfDespair, 0.48, "{name} is climbing out of the pit, slowly."),
    ZoneBand::new(Zone::SlopeOfEnlightenment, 0.57, "{name} is finally getting the hang of it."),
    ZoneBand::new(Zone::SlopeOfEnlightenment, 0.66, "{name} now answers questions with 'it depends'."),
    ZoneBand::new(Zone::SlopeOfEnlightenment, 0.75, "{name} can tell good advice from bad advice."),
    ZoneBand::new(Zone::PlateauOfSustainability, 0.84, "{name} knows what they know, and what they don't."),
    ZoneBand::new(Zone::PlateauOfSustainability, 0.92, "{name} quietly fixes it while everyone argues."),
    ZoneBand::new(Zone::PlateauOfSustainability, 1.0, "{name} has reached the plateau. Respect."),
];

#[must_use]
pub fn band_for(x: f64) -> &'static ZoneBand {
    let x = clamp_unit(x);
    ZONE_BANDS
        .iter()
        .find(|band| x < band.upper)
        .unwrap_or(&ZONE_BANDS[ZONE_BANDS.len() - 1])
}

#[must_use]
pub fn status_message_for(name: &str, x: f64) -> String {
    band_for(x).message(name)
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
