//! Plain-text rendering of a reading.

use super::{Reading, ReadingKind};

const FOOTER: &str = "✨ This reading is generated for entertainment only.\n\
                      Tarot is a mirror for the mind; the real answer is always within you.";

/// Render a reading as plain text.
pub fn render(reading: &Reading) -> String {
    let mut out = format!("🔮 {}\n{}\n\n", reading.title(), reading.description());

    if let Some(narrative) = &reading.narrative {
        out.push_str(&format!("{narrative}\n\n"));
        out.push_str(FOOTER);
        return out;
    }

    out.push_str("── Cards ──\n");
    for (i, (pick, interp)) in reading
        .picks
        .iter()
        .zip(&reading.interpretations)
        .enumerate()
    {
        out.push_str(&format!(
            "\n{}. {} · {} ({})\n",
            i + 1,
            pick.position,
            pick.card,
            pick.orientation
        ));
        out.push_str(&format!("   Core meaning: {}\n", interp.core_meaning));
        out.push_str(&format!("   {}\n", interp.detailed_analysis));
        if let Some(focus) = interp.focus {
            out.push_str(&format!("   Focus: {focus}\n"));
        }
        if let Some(insight) = interp.topic_insight {
            out.push_str(&format!("   Insight: {insight}\n"));
        }
        out.push_str(&format!("   Hint: {}\n", interp.guidance));
    }

    let heading = match reading.kind {
        ReadingKind::Full => "Overall Reading and Advice",
        ReadingKind::Supplemental(_) => "Follow-up Guidance",
    };
    out.push_str(&format!("\n── {heading} ──\n"));
    match reading.energy {
        Some(energy) => {
            out.push_str(&format!("Energy trend ({energy}): {}\n", reading.synthesis));
        }
        None => out.push_str(&format!("{}\n", reading.synthesis)),
    }
    out.push_str("Key advice:\n");
    for line in &reading.advice {
        out.push_str(&format!("  • {line}\n"));
    }
    out.push('\n');
    out.push_str(FOOTER);
    out
}
