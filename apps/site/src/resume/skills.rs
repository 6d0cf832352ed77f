use crate::models::resume::SkillGroup;

/// Keyword → group table, checked in order; the first keyword contained in the
/// lowercased skill decides its group.
const GROUP_KEYWORDS: &[(&str, &str)] = &[
    ("cloud", "Cloud & Platforms"),
    ("azure", "Cloud & Platforms"),
    ("gcp", "Cloud & Platforms"),
    ("aws", "Cloud & Platforms"),
    ("snowflake", "Data Warehousing"),
    ("big query", "Data Warehousing"),
    ("spark", "Big Data & Processing"),
    ("hadoop", "Big Data & Processing"),
    ("kafka", "Streaming & Messaging"),
    ("pub/sub", "Streaming & Messaging"),
    ("sql", "Databases"),
    ("postgres", "Databases"),
    ("postgresql", "Databases"),
    ("mysql", "Databases"),
    ("hbase", "Databases"),
    ("scala", "Languages"),
    ("python", "Languages"),
    ("java", "Languages"),
    ("spring", "Frameworks"),
    ("rest", "Frameworks"),
    ("airflow", "Orchestration"),
    ("composer", "Orchestration"),
    ("databricks", "Platforms"),
    ("terraform", "DevOps"),
    ("jenkins", "DevOps"),
    ("github actions", "DevOps"),
    ("snowpark", "ML & AI"),
    ("vertex ai", "ML & AI"),
    ("ml", "ML & AI"),
    ("pytorch", "ML & AI"),
    ("tensor", "ML & AI"),
    ("scikit", "ML & AI"),
    ("pandas", "ML & AI"),
    ("numpy", "ML & AI"),
];

const FALLBACK_GROUP: &str = "Other";

/// Groups a flat skill list by keyword. Groups appear in first-seen order and
/// duplicate skills within a group are dropped.
pub fn group_skills(skills: &[String]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let lower = skill.to_lowercase();
        let name = GROUP_KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, group)| *group)
            .unwrap_or(FALLBACK_GROUP);

        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) if group.items.contains(skill) => {}
            Some(group) => group.items.push(skill.clone()),
            None => groups.push(SkillGroup {
                name: name.to_string(),
                items: vec![skill.clone()],
            }),
        }
    }

    groups
}
