use std::fmt::Write as _;

use crate::models::results::{BoardList, SkillDescriptions, SkillProfile};
use crate::presentation::html::{escape, format_rating};

const MISSING_DESCRIPTION: &str = "Description not available";

/// `<table>` of (skill, rating) rows in profile order.
pub fn profile_table(profile: &SkillProfile) -> String {
    let mut html = String::from("<table><tr><th>Skill</th><th>Rating</th></tr>");
    for (skill, rating) in profile.pairs() {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(skill),
            format_rating(rating)
        );
    }
    html.push_str("</table>");
    html
}

/// One card per profile skill with its rating and level description.
/// Skills the model did not describe get a placeholder.
pub fn description_cards(profile: &SkillProfile, descriptions: &SkillDescriptions) -> String {
    profile
        .pairs()
        .map(|(skill, rating)| {
            format!(
                "<div class=\"skill-card\"><div class=\"skill-card-title\">{} <span class=\"rating\">{}/10</span></div><div class=\"skill-card-body\">{}</div></div>",
                escape(skill),
                format_rating(rating),
                escape(descriptions.get(skill).unwrap_or(MISSING_DESCRIPTION))
            )
        })
        .collect()
}

/// Ranked job board cards, numbered from 1 in the model's order.
pub fn board_cards(boards: &BoardList) -> String {
    boards
        .0
        .iter()
        .enumerate()
        .map(|(i, board)| {
            format!(
                "<div class=\"board-card\"><div class=\"board-name\">{}. {}</div><div class=\"board-why\">{}</div></div>",
                i + 1,
                escape(&board.name),
                escape(&board.why)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::results::JobBoard;

    fn profile() -> SkillProfile {
        SkillProfile {
            skills: vec!["Motor Control".to_string(), "PCB <Design>".to_string()],
            ratings: vec![8.0, 6.5],
        }
    }

    #[test]
    fn test_profile_table_rows_follow_profile_order() {
        let html = profile_table(&profile());
        assert_eq!(html.matches("<tr>").count(), 3);
        let first = html.find("Motor Control").unwrap();
        let second = html.find("PCB &lt;Design&gt;").unwrap();
        assert!(first < second);
        assert!(html.contains("<td>8</td>"));
        assert!(html.contains("<td>6.5</td>"));
    }

    #[test]
    fn test_description_cards_fall_back_for_missing_skills() {
        let descriptions = SkillDescriptions(vec![(
            "Motor Control".to_string(),
            "Tunes FOC loops independently".to_string(),
        )]);
        let html = description_cards(&profile(), &descriptions);
        assert!(html.contains("Tunes FOC loops independently"));
        assert!(html.contains("8/10"));
        assert!(html.contains(MISSING_DESCRIPTION));
    }

    #[test]
    fn test_board_cards_are_ranked_from_one() {
        let boards = BoardList(vec![
            JobBoard {
                name: "IEEE Job Site".to_string(),
                why: "Niche engineering audience".to_string(),
            },
            JobBoard {
                name: "LinkedIn".to_string(),
                why: "Broad reach".to_string(),
            },
        ]);
        let html = board_cards(&boards);
        assert!(html.contains("1. IEEE Job Site"));
        assert!(html.contains("2. LinkedIn"));
    }
}
