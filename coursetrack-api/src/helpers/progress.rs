//! Checklist progress: checked flags counted over totals at each level of the
//! category tree. A node without children counts as fully done when its own
//! flag is checked.

use shared_types::{CategoryProgress, GoalProgress, MainCategory, MainGoal, OverallProgress};

pub fn percent(checked: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = f64::from(checked) / f64::from(total) * 100.0;
    (raw * 100.0).round() / 100.0
}

fn leaf_percent(checked: bool) -> f64 {
    if checked {
        100.0
    } else {
        0.0
    }
}

fn count_checked<T>(items: &[T], is_checked: impl Fn(&T) -> bool) -> u32 {
    items.iter().filter(|item| is_checked(item)).count() as u32
}

pub fn goal_progress(goal: &MainGoal) -> GoalProgress {
    let total = goal.sub_goals.len() as u32;
    let checked = count_checked(&goal.sub_goals, |s| s.checked);

    GoalProgress {
        goal_id: goal.id,
        name: goal.name.clone(),
        checked: goal.checked,
        sub_goals_checked: checked,
        sub_goals_total: total,
        percent: if total == 0 {
            leaf_percent(goal.checked)
        } else {
            percent(checked, total)
        },
    }
}

pub fn category_progress(category: &MainCategory) -> CategoryProgress {
    let total = category.main_goals.len() as u32;
    let checked = count_checked(&category.main_goals, |g| g.checked);

    CategoryProgress {
        category_id: category.id,
        name: category.name.clone(),
        checked: category.checked,
        goals_checked: checked,
        goals_total: total,
        percent: if total == 0 {
            leaf_percent(category.checked)
        } else {
            percent(checked, total)
        },
        goals: category.main_goals.iter().map(goal_progress).collect(),
    }
}

pub fn overall_progress(categories: &[MainCategory]) -> OverallProgress {
    let total = categories.len() as u32;
    let checked = count_checked(categories, |c| c.checked);

    OverallProgress {
        categories_checked: checked,
        categories_total: total,
        percent: percent(checked, total),
        categories: categories.iter().map(category_progress).collect(),
    }
}
