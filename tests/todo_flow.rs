use todoz::api::TodozApi;
use todoz::options::{FILTER_OPTIONS, SORT_OPTIONS};
use todoz::store::memory::InMemoryStore;
use todoz::view::Filter;

fn setup() -> TodozApi<InMemoryStore> {
    let mut api = TodozApi::new(InMemoryStore::new());

    // Created order: Groceries, Laundry, Taxes
    api.add_todo("Groceries").unwrap();
    api.add_todo("Laundry").unwrap();
    api.add_todo("Taxes").unwrap();

    api
}

#[test]
fn test_full_add_list_flow() {
    let api = setup();

    let res = api.list_todos(None, None).unwrap();
    assert_eq!(res.listed_todos.len(), 3);
    assert_eq!(res.listed_todos[0].text, "Groceries");
    assert_eq!(res.listed_todos[2].text, "Taxes");
}

#[test]
fn test_complete_and_filter() {
    let mut api = setup();
    let laundry = api.list_todos(None, None).unwrap().listed_todos[1].clone();

    api.toggle_done(&laundry.id).unwrap();

    let done = api.list_todos(Some(Filter::Done), None).unwrap();
    assert_eq!(done.listed_todos.len(), 1);
    assert_eq!(done.listed_todos[0].text, "Laundry");

    let undone = api.list_todos(Some(Filter::Undone), None).unwrap();
    assert_eq!(undone.listed_todos.len(), 2);
    assert!(undone.listed_todos.iter().all(|t| !t.done));
}

#[test]
fn test_edit_then_remove() {
    let mut api = setup();
    let taxes = api.list_todos(None, None).unwrap().listed_todos[2].clone();

    api.edit_todo_text(&taxes.id, "File taxes").unwrap();
    let res = api.list_todos(None, None).unwrap();
    assert_eq!(res.listed_todos[2].text, "File taxes");
    assert_eq!(res.listed_todos[2].created_at, taxes.created_at);

    api.remove_todo(&taxes.id).unwrap();
    let res = api.list_todos(None, None).unwrap();
    assert_eq!(res.listed_todos.len(), 2);
    assert!(res.listed_todos.iter().all(|t| t.id != taxes.id));
}

#[test]
fn test_blank_input_signals_without_mutation() {
    let mut api = setup();

    let res = api.add_todo("   ").unwrap();
    assert!(res.has_error());
    assert_eq!(api.list_todos(None, None).unwrap().listed_todos.len(), 3);

    let groceries = api.list_todos(None, None).unwrap().listed_todos[0].clone();
    let res = api.edit_todo_text(&groceries.id, "\t\n").unwrap();
    assert!(res.has_error());
    assert_eq!(
        api.list_todos(None, None).unwrap().listed_todos[0].text,
        "Groceries"
    );
}

#[test]
fn test_catalog_driven_sorting() {
    let api = setup();

    // "A to Z" comes third in the catalog
    let a_to_z = &SORT_OPTIONS[2];
    assert_eq!(a_to_z.label, "A to Z");

    let res = api.list_todos(Some(Filter::All), Some(a_to_z)).unwrap();
    let texts: Vec<&str> = res.listed_todos.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["Groceries", "Laundry", "Taxes"]);

    let z_to_a = &SORT_OPTIONS[3];
    let res = api.list_todos(Some(Filter::All), Some(z_to_a)).unwrap();
    let texts: Vec<&str> = res.listed_todos.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["Taxes", "Laundry", "Groceries"]);
}

#[test]
fn test_latest_sorts_newest_first() {
    let api = setup();

    // "Latest" is the first catalog entry; Taxes was created last
    let latest = &SORT_OPTIONS[0];
    let res = api.list_todos(None, Some(latest)).unwrap();
    assert_eq!(res.listed_todos.first().unwrap().text, "Taxes");

    let oldest = &SORT_OPTIONS[1];
    let res = api.list_todos(None, Some(oldest)).unwrap();
    assert_eq!(res.listed_todos.first().unwrap().text, "Groceries");
}

#[test]
fn test_filter_catalog_is_exhaustive() {
    let api = setup();

    // Every catalog filter is accepted by the list command
    for filter in FILTER_OPTIONS {
        assert!(api.list_todos(Some(filter), None).is_ok());
    }
}
