use crate::model::TreeNode;

fn node(id: &str, label: &str, color: &str, checked: bool, children: Vec<TreeNode>) -> TreeNode {
    TreeNode {
        id: id.to_string(),
        label: label.to_string(),
        color: color.to_string(),
        is_checked: checked,
        children,
    }
}

/// The built-in sample checklist, used when no data file is given.
pub fn sample_tree() -> Vec<TreeNode> {
    vec![
        node(
            "1",
            "Marketing Campaign",
            "red",
            true,
            vec![
                node("1-1", "Create Ad Copies", "pink", true, vec![]),
                node("1-2", "Design Landing Page", "purple", false, vec![]),
            ],
        ),
        node(
            "2",
            "Product Roadmap",
            "blue",
            true,
            vec![
                node("2-1", "Define Q1 Goals", "teal", true, vec![]),
                node("2-2", "Feature Prioritization", "yellow", true, vec![]),
            ],
        ),
        node(
            "3",
            "User Research",
            "green",
            false,
            vec![node("3-1", "Interview Users", "orange", true, vec![])],
        ),
        node(
            "4",
            "Backend Tasks",
            "gray",
            true,
            vec![
                node("4-1", "Optimize Database Queries", "black", true, vec![]),
                node("4-2", "Refactor API Endpoints", "blue", false, vec![]),
            ],
        ),
        node(
            "5",
            "Frontend Tasks",
            "purple",
            true,
            vec![node("5-1", "Fix UI Alignment", "indigo", true, vec![])],
        ),
        node(
            "6",
            "Content Calendar",
            "orange",
            true,
            vec![
                node("6-1", "Write Blog Article", "brown", true, vec![]),
                node("6-2", "Plan Social Media Posts", "cyan", true, vec![]),
            ],
        ),
        node(
            "7",
            "Release v1.0.0",
            "teal",
            true,
            vec![
                node("7-1", "Prepare Release Notes", "yellow", true, vec![]),
                node("7-2", "Smoke Testing", "red", true, vec![]),
            ],
        ),
    ]
}
