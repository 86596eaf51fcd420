use super::*;

#[test]
fn selection_default_is_idle() {
    assert_eq!(Selection::default(), Selection::Idle);
    assert!(Selection::default().selected().is_none());
}

#[test]
fn select_from_idle() {
    let mut sel = Selection::Idle;
    assert_eq!(sel.select("6".into()), None);
    assert_eq!(sel, Selection::Selected("6".into()));
}

#[test]
fn select_replaces_previous() {
    let mut sel = Selection::Selected("1".into());
    assert_eq!(sel.select("2".into()), Some("1".into()));
    assert!(sel.is_selected(&"2".into()));
    assert!(!sel.is_selected(&"1".into()));
}

#[test]
fn reselecting_same_id_keeps_it_selected() {
    let mut sel = Selection::Selected("3".into());
    assert_eq!(sel.select("3".into()), Some("3".into()));
    assert!(sel.is_selected(&"3".into()));
}

#[test]
fn clear_returns_to_idle() {
    let mut sel = Selection::Selected("4".into());
    assert_eq!(sel.clear(), Some("4".into()));
    assert_eq!(sel, Selection::Idle);
    assert_eq!(sel.clear(), None);
}
