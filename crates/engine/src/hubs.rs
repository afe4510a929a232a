//! Memory hub notes: the master index and one link hub (MOC) per category.

use crate::format::format_section;

const MASTER_INDEX: &str = include_str!("../content/memory/master-index.md");

struct HubSection {
    heading: &'static str,
    links: &'static [&'static str],
}

struct Hub {
    category: &'static str,
    title: &'static str,
    sections: &'static [HubSection],
}

const HUBS: &[Hub] = &[
    Hub {
        category: "AI",
        title: "🤖 AI MOC",
        sections: &[
            HubSection {
                heading: "Tools",
                links: &[
                    "[[AI/Tools/Cursor/cursor-basics]]",
                    "[[AI/Tools/Claude/claude-api-guide]]",
                    "[[AI/Tools/Dify/dify-workflows]]",
                ],
            },
            HubSection {
                heading: "Techniques",
                links: &[
                    "[[AI/Techniques/Prompting/prompt-engineering-basics]]",
                    "[[AI/Techniques/RAG/rag-architecture]]",
                    "[[AI/Techniques/Agent-Development/multi-agent-systems]]",
                ],
            },
            HubSection {
                heading: "Concepts",
                links: &[
                    "[[AI/Concepts/llm-fundamentals]]",
                    "[[AI/Concepts/transformer-architecture]]",
                    "[[AI/Concepts/ai-safety]]",
                ],
            },
        ],
    },
    Hub {
        category: "Business",
        title: "💼 Business MOC",
        sections: &[
            HubSection {
                heading: "Sales",
                links: &[
                    "[[Business/Sales/pricing-strategy]]",
                    "[[Business/Sales/consultative-selling]]",
                ],
            },
            HubSection {
                heading: "Marketing",
                links: &[
                    "[[Business/Marketing/content-marketing-strategy]]",
                    "[[Business/Marketing/social-media-strategy]]",
                ],
            },
            HubSection {
                heading: "Community & Ops",
                links: &[
                    "[[Business/Community-Building/member-retention]]",
                    "[[Business/Operations/workflow-automation]]",
                ],
            },
        ],
    },
    Hub {
        category: "Personal",
        title: "🌱 Personal MOC",
        sections: &[
            HubSection {
                heading: "Health",
                links: &[
                    "[[Personal/Health/stress-management]]",
                    "[[Personal/Health/exercise-routines]]",
                ],
            },
            HubSection {
                heading: "Parenting",
                links: &[
                    "[[Personal/Parenting/child-development]]",
                    "[[Personal/Parenting/balance-work-family]]",
                ],
            },
            HubSection {
                heading: "Productivity",
                links: &[
                    "[[Personal/Productivity/focus-techniques]]",
                    "[[Personal/Productivity/time-management]]",
                ],
            },
        ],
    },
    Hub {
        category: "Education",
        title: "📚 Education MOC",
        sections: &[
            HubSection {
                heading: "Pedagogy",
                links: &[
                    "[[Education/Pedagogy/active-learning]]",
                    "[[Education/Pedagogy/feedback-methods]]",
                ],
            },
            HubSection {
                heading: "Curriculum Design",
                links: &[
                    "[[Education/Curriculum-Design/backward-design]]",
                    "[[Education/Curriculum-Design/assessment-design]]",
                ],
            },
            HubSection {
                heading: "Teaching Techniques",
                links: &[
                    "[[Education/Teaching-Techniques/storytelling]]",
                    "[[Education/Teaching-Techniques/live-coding]]",
                ],
            },
        ],
    },
];

pub fn master_index() -> String {
    format_section(MASTER_INDEX)
}

/// Link hub for `category`.  Unknown categories get a titled hub with no
/// link sections.
pub fn category_hub(category: &str) -> String {
    let hub = HUBS
        .iter()
        .find(|hub| hub.category.eq_ignore_ascii_case(category));
    let title = match hub {
        Some(hub) => hub.title.to_string(),
        None => format!("{category} MOC"),
    };
    let links = hub
        .map(|hub| {
            hub.sections
                .iter()
                .map(|section| {
                    let mut block = format!("### {}", section.heading);
                    for link in section.links {
                        block.push_str("\n- ");
                        block.push_str(link);
                    }
                    block
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    let mut body = format_section(&format!("# {title}\n"));
    body.push_str("## 🔗 リンク集\n");
    body.push_str(&links);
    body.push('\n');
    body.push_str(&format_section(&format!(
        "## 📝 メモ\n- 月次レビューで必ず最新化する。\n- 関連タグ: #{}",
        category.to_lowercase()
    )));
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_hub() {
        let hub = category_hub("AI");
        assert!(hub.starts_with("# 🤖 AI MOC\n## 🔗 リンク集\n### Tools\n- [[AI/Tools/Cursor/cursor-basics]]\n"));
        assert!(hub.contains("- [[AI/Concepts/ai-safety]]\n## 📝 メモ\n"));
        assert!(hub.ends_with("- 関連タグ: #ai\n"));
        assert_eq!(hub.matches("### ").count(), 3);
    }

    #[test]
    fn category_match_ignores_case() {
        assert!(category_hub("personal").starts_with("# 🌱 Personal MOC\n"));
        assert!(category_hub("personal").ends_with("#personal\n"));
    }

    #[test]
    fn unknown_category_hub_has_no_links() {
        assert_eq!(
            category_hub("Technical"),
            "# Technical MOC\n## 🔗 リンク集\n\n## 📝 メモ\n- 月次レビューで必ず最新化する。\n- 関連タグ: #technical\n"
        );
    }

    #[test]
    fn master_index_is_fixed() {
        let index = master_index();
        assert!(index.starts_with("# 🧠 Second Brain Master Index\n"));
        assert!(index.contains("[[AI/_AI-MOC]]"));
        assert!(index.ends_with('\n') && !index.ends_with("\n\n"));
    }
}
