//! # Moon Phase Catalog
//!
//! The eight named phases in waxing → waning order, starting at New Moon.
//! The table is a fixed-size array so the "exactly eight, order matters"
//! invariant is carried by the type.

use serde::Serialize;

/// Static description of one of the eight named phases.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MoonPhaseDescriptor {
    pub name: &'static str,
    /// Nominal lit fraction of the disk, percent
    pub illumination_nominal: u8,
    pub glyph: &'static str,
    /// Sun-Moon elongation at the start of this phase (index × 45°)
    pub angle_degrees: u16,
    pub description: &'static str,
    pub photography_note: &'static str,
}

impl MoonPhaseDescriptor {
    /// True strictly between New Moon and Full Moon.
    pub fn is_waxing(&self) -> bool {
        (1..180).contains(&self.angle_degrees)
    }
}

/// Phase catalog indexed 0–7.
pub static MOON_PHASES: [MoonPhaseDescriptor; 8] = [
    MoonPhaseDescriptor {
        name: "New Moon",
        illumination_nominal: 0,
        glyph: "🌑",
        angle_degrees: 0,
        description: "The Moon sits between Earth and Sun with its lit side facing away from us.",
        photography_note: "Darkest skies of the month. Ideal for Milky Way and deep-sky work.",
    },
    MoonPhaseDescriptor {
        name: "Waxing Crescent",
        illumination_nominal: 25,
        glyph: "🌒",
        angle_degrees: 45,
        description: "A thin sliver grows on the right (northern hemisphere) after sunset.",
        photography_note: "Catch earthshine on the dark limb shortly after dusk.",
    },
    MoonPhaseDescriptor {
        name: "First Quarter",
        illumination_nominal: 50,
        glyph: "🌓",
        angle_degrees: 90,
        description: "Half the disk is lit. The Moon is 90° east of the Sun.",
        photography_note: "Long shadows along the terminator make craters stand out.",
    },
    MoonPhaseDescriptor {
        name: "Waxing Gibbous",
        illumination_nominal: 75,
        glyph: "🌔",
        angle_degrees: 135,
        description: "More than half lit and growing, visible most of the evening.",
        photography_note: "Good terminator detail with plenty of light for short exposures.",
    },
    MoonPhaseDescriptor {
        name: "Full Moon",
        illumination_nominal: 100,
        glyph: "🌕",
        angle_degrees: 180,
        description: "The whole near side is lit. Rises around sunset and sets around sunrise.",
        photography_note: "Flat lighting on the disk. Shoot moonrise against a landscape.",
    },
    MoonPhaseDescriptor {
        name: "Waning Gibbous",
        illumination_nominal: 75,
        glyph: "🌖",
        angle_degrees: 225,
        description: "Still mostly lit but shrinking, rising later each night.",
        photography_note: "Terminator returns on the opposite limb. Best after midnight.",
    },
    MoonPhaseDescriptor {
        name: "Last Quarter",
        illumination_nominal: 50,
        glyph: "🌗",
        angle_degrees: 270,
        description: "The other half is lit. Rises around midnight, high at dawn.",
        photography_note: "Morning blue hour pairs well with the quarter Moon.",
    },
    MoonPhaseDescriptor {
        name: "Waning Crescent",
        illumination_nominal: 25,
        glyph: "🌘",
        angle_degrees: 315,
        description: "A thin crescent in the eastern sky before sunrise.",
        photography_note: "Early riser's crescent with earthshine before dawn.",
    },
];

/// Look up a phase by index, wrapping out-of-range values.
pub fn phase_by_index(index: usize) -> &'static MoonPhaseDescriptor {
    &MOON_PHASES[index % MOON_PHASES.len()]
}
