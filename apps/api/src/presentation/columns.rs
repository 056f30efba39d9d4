use serde::Serialize;

use crate::models::results::SkillList;
use crate::presentation::html::escape;

/// Two display columns; the left one takes the extra item when `n` is odd.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillColumns {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

pub fn split_columns(skills: &SkillList) -> SkillColumns {
    let half = skills.len().div_ceil(2);
    let (left, right) = skills.as_slice().split_at(half);
    SkillColumns {
        left: left.to_vec(),
        right: right.to_vec(),
    }
}

impl SkillColumns {
    pub fn to_html(&self) -> String {
        let column = |items: &[String]| {
            items
                .iter()
                .map(|skill| format!("<div class=\"skill-item\">• {}</div>", escape(skill)))
                .collect::<String>()
        };
        format!(
            "<div class=\"skill-columns\"><div class=\"skill-column\">{}</div><div class=\"skill-column\">{}</div></div>",
            column(&self.left),
            column(&self.right)
        )
    }
}
