use super::*;

#[test]
fn project_menu_lists_actions_in_order() {
    let labels: Vec<String> = project_menu_options().into_iter().map(|o| o.label).collect();
    assert_eq!(labels, vec!["Edit", "Configure", "Workspace", "Delete"]);
}

#[test]
fn only_delete_is_danger() {
    let options = project_menu_options();
    let danger: Vec<&str> = options.iter().filter(|o| o.danger).map(|o| o.value.as_str()).collect();
    assert_eq!(danger, vec!["delete"]);
}

#[test]
fn project_action_round_trips_menu_value() {
    for action in ProjectAction::ALL {
        assert_eq!(ProjectAction::from_value(action.value()), Some(action));
    }
    assert_eq!(ProjectAction::from_value("archive"), None);
}

#[test]
fn workspace_path_targets_project_route() {
    assert_eq!(workspace_path("68b6e315"), "/app/projects/68b6e315");
}

#[test]
fn avatar_initial_uses_name_or_fallback() {
    let user = User { name: "ada".to_owned(), email: "ada@example.com".to_owned() };
    assert_eq!(avatar_initial(Some(&user)), "A");
    assert_eq!(avatar_initial(None), "U");
    assert_eq!(avatar_initial(Some(&User::default())), "U");
}
