use firelist::model::{Priority, TodoItem};
use firelist::query::{filter_and_sort, search, FilterKind, SortKey};

fn todo(id: &str, title: &str, priority: Priority, completed: bool, created_at: i64) -> TodoItem {
    TodoItem {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        completed,
        priority,
        created_at,
        updated_at: created_at,
        owner_id: "user-1".to_string(),
    }
}

fn sample_items() -> Vec<TodoItem> {
    vec![
        todo("1", "team meeting notes", Priority::High, false, 100),
        todo("2", "Buy groceries", Priority::Low, true, 200),
        todo("3", "Call dentist", Priority::High, false, 300),
        todo("4", "water plants", Priority::Medium, false, 400),
    ]
}

#[test]
fn test_filter_all_keeps_everything() {
    let items = sample_items();
    let result = filter_and_sort(&items, FilterKind::All, SortKey::CreatedAt);
    assert_eq!(result.len(), 4);
}

#[test]
fn test_filter_pending_and_completed_partition() {
    let items = sample_items();
    let pending = filter_and_sort(&items, FilterKind::Pending, SortKey::CreatedAt);
    let completed = filter_and_sort(&items, FilterKind::Completed, SortKey::CreatedAt);

    assert_eq!(pending.len(), 3);
    assert!(pending.iter().all(|t| !t.completed));
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, "2");
}

#[test]
fn test_high_priority_filter_sorted_by_created_at_descending() {
    let items = sample_items();
    let result = filter_and_sort(&items, FilterKind::HighPriority, SortKey::CreatedAt);

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|t| t.priority == Priority::High));
    // Newest first
    assert_eq!(result[0].id, "3");
    assert_eq!(result[1].id, "1");
}

#[test]
fn test_sort_by_title_is_case_insensitive() {
    let items = sample_items();
    let result = filter_and_sort(&items, FilterKind::All, SortKey::Title);

    let titles: Vec<&str> = result.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Buy groceries", "Call dentist", "team meeting notes", "water plants"]);
}

#[test]
fn test_sort_by_priority_puts_high_first() {
    let items = sample_items();
    let result = filter_and_sort(&items, FilterKind::All, SortKey::Priority);

    assert_eq!(result[0].priority, Priority::High);
    assert_eq!(result[1].priority, Priority::High);
    assert_eq!(result[2].priority, Priority::Medium);
    assert_eq!(result[3].priority, Priority::Low);
    // Stable: equal keys keep their prior relative order
    assert_eq!(result[0].id, "1");
    assert_eq!(result[1].id, "3");
}

#[test]
fn test_sort_by_completion_puts_incomplete_first() {
    let items = sample_items();
    let result = filter_and_sort(&items, FilterKind::All, SortKey::CompletionStatus);

    assert!(!result[0].completed);
    assert!(!result[1].completed);
    assert!(!result[2].completed);
    assert!(result[3].completed);
}

#[test]
fn test_sort_by_updated_at_newest_first() {
    let mut items = sample_items();
    items[0].updated_at = 999;
    let result = filter_and_sort(&items, FilterKind::All, SortKey::UpdatedAt);
    assert_eq!(result[0].id, "1");
}

#[test]
fn test_filter_does_not_mutate_input() {
    let items = sample_items();
    let _ = filter_and_sort(&items, FilterKind::All, SortKey::Title);
    assert_eq!(items[0].id, "1");
    assert_eq!(items[3].id, "4");
}

#[test]
fn test_search_empty_query_returns_all_unchanged() {
    let items = sample_items();
    assert_eq!(search(&items, ""), items);
    assert_eq!(search(&items, "   "), items);
}

#[test]
fn test_search_is_case_insensitive() {
    let items = sample_items();
    let result = search(&items, "MEETING");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "team meeting notes");
}

#[test]
fn test_search_matches_description() {
    let mut items = sample_items();
    items[1].description = "milk, eggs, coffee beans".to_string();

    let result = search(&items, "coffee");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "2");
}

#[test]
fn test_search_no_match_returns_empty() {
    let items = sample_items();
    assert!(search(&items, "nonexistent").is_empty());
}
