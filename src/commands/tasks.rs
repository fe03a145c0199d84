//! `todoist tasks` command: listing with filters, sorting, and comment
//! enrichment.

use std::sync::Arc;

use crate::api::enrich;
use crate::api::types::Task;
use crate::cli::{Cli, SortKey, TasksArgs};
use crate::output::Formatter;

/// Execute the `tasks` command.
///
/// # Errors
///
/// Returns an error string when project resolution, the listing call,
/// enrichment, or output fails.
pub async fn run(cli: &Cli, args: &TasksArgs) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let project_id = match &args.project {
        Some(name) => Some(client.find_project(name).await.map_err(|e| e.to_string())?.id),
        None => None,
    };

    let filter = effective_filter(args);
    let mut tasks = client
        .get_tasks(project_id.as_deref(), filter.as_deref())
        .await
        .map_err(|e| e.to_string())?;

    if let Some(key) = args.sort {
        sort_tasks(&mut tasks, key);
    }

    if args.details && !cli.json {
        if tasks.is_empty() {
            return out.write_tasks(&tasks).map_err(|e| e.to_string());
        }
        let client = Arc::new(client);
        let comments =
            enrich::comments_by_task(&client, &tasks).await.map_err(|e| e.to_string())?;
        return out.write_tasks_with_comments(&tasks, &comments).map_err(|e| e.to_string());
    }

    out.write_tasks(&tasks).map_err(|e| e.to_string())
}

/// Picks the server-side filter from the flag combination.
///
/// An explicit `--filter` always wins. `--overdue` is a shortcut for the
/// overdue filter; `--all` drops the filter entirely; a bare `--project`
/// lists everything in that project. The default is today's tasks plus
/// anything overdue.
fn effective_filter(args: &TasksArgs) -> Option<String> {
    if let Some(filter) = &args.filter {
        return Some(filter.clone());
    }
    if args.overdue {
        return Some("overdue".to_owned());
    }
    if args.all || args.project.is_some() {
        return None;
    }
    Some("today | overdue".to_owned())
}

/// Sorts tasks client-side by the selected key.
fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    match key {
        SortKey::Priority => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortKey::Due => tasks.sort_by(|a, b| {
            match (due_sort_key(a), due_sort_key(b)) {
                (None, None) => a.order.cmp(&b.order),
                // Undated tasks sort last.
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (Some(_), None) => std::cmp::Ordering::Less,
                (Some(da), Some(db)) => da.cmp(db).then(a.order.cmp(&b.order)),
            }
        }),
        SortKey::Name => {
            tasks.sort_by(|a, b| a.content.to_lowercase().cmp(&b.content.to_lowercase()));
        }
        SortKey::Created => tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
}

fn due_sort_key(task: &Task) -> Option<&str> {
    let due = task.due.as_ref()?;
    match &due.datetime {
        Some(datetime) => Some(datetime),
        None if due.date.is_empty() => None,
        None => Some(&due.date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Due;

    fn args(filter: Option<&str>, project: Option<&str>, overdue: bool, all: bool) -> TasksArgs {
        TasksArgs {
            filter: filter.map(str::to_owned),
            project: project.map(str::to_owned),
            overdue,
            all,
            details: false,
            sort: None,
        }
    }

    #[test]
    fn default_filter_is_today_plus_overdue() {
        assert_eq!(effective_filter(&args(None, None, false, false)).as_deref(), Some("today | overdue"));
    }

    #[test]
    fn explicit_filter_wins_over_shortcuts() {
        assert_eq!(
            effective_filter(&args(Some("p1"), None, true, true)).as_deref(),
            Some("p1")
        );
    }

    #[test]
    fn overdue_shortcut_maps_to_the_overdue_filter() {
        assert_eq!(effective_filter(&args(None, None, true, false)).as_deref(), Some("overdue"));
    }

    #[test]
    fn all_and_bare_project_drop_the_filter() {
        assert_eq!(effective_filter(&args(None, None, false, true)), None);
        assert_eq!(effective_filter(&args(None, Some("Work"), false, false)), None);
    }

    fn task(content: &str, priority: u8, due_date: Option<&str>, created: &str) -> Task {
        let mut task: Task = serde_json::from_value(serde_json::json!({
            "id": content,
            "content": content,
            "priority": priority,
            "created_at": created,
        }))
        .unwrap();
        task.due = due_date.map(|date| Due {
            date: date.to_owned(),
            string: String::new(),
            datetime: None,
            is_recurring: false,
            timezone: None,
        });
        task
    }

    #[test]
    fn priority_sort_puts_most_urgent_first() {
        let mut tasks = vec![
            task("low", 1, None, ""),
            task("high", 4, None, ""),
            task("mid", 3, None, ""),
        ];
        sort_tasks(&mut tasks, SortKey::Priority);
        let order: Vec<&str> = tasks.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(order, ["high", "mid", "low"]);
    }

    #[test]
    fn due_sort_puts_undated_tasks_last() {
        let mut tasks = vec![
            task("none", 1, None, ""),
            task("later", 1, Some("2024-02-01"), ""),
            task("soon", 1, Some("2024-01-05"), ""),
        ];
        sort_tasks(&mut tasks, SortKey::Due);
        let order: Vec<&str> = tasks.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(order, ["soon", "later", "none"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut tasks = vec![task("beta", 1, None, ""), task("Alpha", 1, None, "")];
        sort_tasks(&mut tasks, SortKey::Name);
        assert_eq!(tasks[0].content, "Alpha");
    }
}
