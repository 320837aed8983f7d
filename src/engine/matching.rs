//! Ashtakoot (Guna Milan) compatibility scoring.
//!
//! Only Graha Maitri, Gana, Bhakoot and Nadi are computed from the Moon
//! placements. Varna, Vashya, Tara and Yoni contribute fixed points.

use crate::models::{
    CompatibilityScore, Gana, GunaBreakdown, MatchReport, MoonPlacement, Nadi, Rashi, Verdict,
};

pub const VARNA_POINTS: f64 = 1.0;
pub const VASHYA_POINTS: f64 = 2.0;
pub const TARA_POINTS: f64 = 1.5;
pub const YONI_POINTS: f64 = 2.0;

/// Sign distances (counted inclusively from the boy's rashi) that carry Bhakoot dosha
const AFFLICTED_DISTANCES: [usize; 6] = [2, 5, 6, 8, 9, 12];

/// Temperament match, max 6
pub fn gana_points(boy: Gana, girl: Gana) -> f64 {
    use Gana::*;

    match (boy, girl) {
        (b, g) if b == g => 6.0,
        (Deva, Manushya) | (Manushya, Deva) => 6.0,
        (Rakshasa, Deva) | (Deva, Rakshasa) => 1.0,
        (Rakshasa, Manushya) | (Manushya, Rakshasa) => 0.0,
        _ => 3.0,
    }
}

/// Constitution match, max 8. Equal nadis score zero (Nadi dosha).
pub fn nadi_points(boy: Nadi, girl: Nadi) -> f64 {
    if boy == girl {
        0.0
    } else {
        8.0
    }
}

/// Inclusive count from the boy's rashi to the girl's, 1..=12
pub fn bhakoot_distance(boy_rashi_index: usize, girl_rashi_index: usize) -> usize {
    let mut dist = girl_rashi_index as i64 - boy_rashi_index as i64 + 1;
    if dist <= 0 {
        dist += 12;
    }
    dist as usize
}

/// Sign harmony, max 7
pub fn bhakoot_points(boy_rashi_index: usize, girl_rashi_index: usize) -> f64 {
    let dist = bhakoot_distance(boy_rashi_index, girl_rashi_index);
    if AFFLICTED_DISTANCES.contains(&dist) {
        0.0
    } else {
        7.0
    }
}

/// Planetary friendship between the two rashi lords, max 5
pub fn graha_maitri_points(boy: Rashi, girl: Rashi) -> f64 {
    let boy_lord = boy.lord();
    let girl_lord = girl.lord();

    if boy_lord == girl_lord {
        return 5.0;
    }

    let total = boy_lord.relation_to(girl_lord).points() + girl_lord.relation_to(boy_lord).points();

    // Halves sum exactly, so equality is safe here
    if total == 2.0 {
        5.0
    } else if total == 1.5 {
        4.0
    } else if total == 1.0 {
        3.0
    } else if total == 0.5 {
        1.0
    } else {
        0.0
    }
}

/// Score two Moon placements. Order matters: the first is the boy's.
pub fn score_compatibility(boy: &MoonPlacement, girl: &MoonPlacement) -> CompatibilityScore {
    let breakdown = GunaBreakdown {
        varna: VARNA_POINTS,
        vashya: VASHYA_POINTS,
        tara: TARA_POINTS,
        yoni: YONI_POINTS,
        graha_maitri: graha_maitri_points(boy.rashi, girl.rashi),
        gana: gana_points(boy.nakshatra.gana, girl.nakshatra.gana),
        bhakoot: bhakoot_points(boy.rashi_index, girl.rashi_index),
        nadi: nadi_points(boy.nakshatra.nadi, girl.nakshatra.nadi),
    };

    let total_score = breakdown.total();

    CompatibilityScore {
        breakdown,
        total_score,
        verdict: Verdict::from_total(total_score),
    }
}

/// Full Kundli matching report with analysis and remedies
pub fn match_report(
    boy_name: &str,
    boy: &MoonPlacement,
    girl_name: &str,
    girl: &MoonPlacement,
) -> MatchReport {
    let score = score_compatibility(boy, girl);
    let points = &score.breakdown;

    let analysis = format!(
        "**Astrological Details:**\n\
         - **{boy_name}**: {} Rashi, {} Nakshatra\n\
         - **{girl_name}**: {} Rashi, {} Nakshatra\n\n\
         **Guna Milan (Points):**\n\
         - **Nadi (Health):** {} / 8\n\
         - **Bhakoot (Harmony):** {} / 7\n\
         - **Gana (Temperament):** {} / 6\n\
         - **Graha Maitri (Mental):** {} / 5\n",
        boy.rashi,
        boy.nakshatra.name,
        girl.rashi,
        girl.nakshatra.name,
        points.nadi,
        points.bhakoot,
        points.gana,
        points.graha_maitri,
    );

    let mut recommendations = String::new();
    if points.nadi == 0.0 {
        recommendations.push_str(
            "- **Nadi Dosha:** Major conflict detected. Health issues possible. \
             Consult a Panditji for 'Mahamrityunjaya' pooja.\n",
        );
    }
    if points.bhakoot == 0.0 {
        recommendations.push_str("- **Bhakoot Dosha:** Family harmony may require effort.\n");
    }
    if points.gana == 0.0 {
        recommendations.push_str(
            "- **Gana Dosha:** Temperament mismatch (Rakshasa-Manushya). \
             Practice patience in communication.\n",
        );
    }

    if score.total_score > 25.0 {
        recommendations.push_str("- A divine union. Proceed with confidence.\n");
    } else if recommendations.is_empty() {
        recommendations.push_str("- Standard Vedic remedies recommended for a balanced life.\n");
    }

    MatchReport {
        score: score.total_score.floor() as u32,
        verdict: score.verdict,
        analysis,
        recommendations,
    }
}
