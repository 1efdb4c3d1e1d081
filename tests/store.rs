use rolodex_web::prelude::*;
use tempfile::tempdir;

fn contact(name: &str, phone: &str, email: &str, address: &str) -> Contact {
    Contact::new(
        name.to_string(),
        phone.to_string(),
        email.to_string(),
        address.to_string(),
    )
}

fn json_store(path: &std::path::Path) -> ContactStore {
    ContactStore::open(Box::new(JsonStorage::new(path)))
}

#[test]
fn bob_carol_robert_walkthrough() -> Result<(), AppError> {
    let dir = tempdir()?;
    let store = json_store(&dir.path().join("contacts.json"));
    assert!(store.list().is_empty());

    store.add("Bob", "555-1111", "bob@x.com", "1 Main St");
    assert_eq!(
        store.list(),
        vec![contact("Bob", "555-1111", "bob@x.com", "1 Main St")]
    );

    store.add("Carol", "555-2222", "carol@x.com", "2 Oak Ave");
    let listed = store.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Bob");

    assert!(store.update("Bob", "Robert", "555-1111", "robert@x.com", "1 Main St"));
    assert_eq!(store.find("bob"), None);
    let robert = contact("Robert", "555-1111", "robert@x.com", "1 Main St");
    assert_eq!(store.find("robert"), Some(robert.clone()));
    assert_eq!(store.list()[0], robert);

    assert!(store.delete("carol"));
    assert_eq!(store.list(), vec![robert.clone()]);

    assert!(!store.delete("carol"));
    assert_eq!(store.list(), vec![robert]);

    Ok(())
}

#[test]
fn list_length_tracks_add_and_delete() -> Result<(), AppError> {
    let dir = tempdir()?;
    let store = json_store(&dir.path().join("contacts.json"));

    for (i, name) in ["Ada", "Grace", "Linus", "Ada"].iter().enumerate() {
        let before = store.list().len();
        store.add(name, &i.to_string(), "", "");
        assert_eq!(store.list().len(), before + 1);
    }

    for name in ["ada", "linus", "ADA"] {
        let before = store.list().len();
        assert!(store.delete(name));
        assert_eq!(store.list().len(), before - 1);
    }

    assert_eq!(store.list(), vec![contact("Grace", "1", "", "")]);
    Ok(())
}

#[test]
fn delete_keeps_relative_order() -> Result<(), AppError> {
    let dir = tempdir()?;
    let store = json_store(&dir.path().join("contacts.json"));

    for name in ["a", "b", "c", "d", "e"] {
        store.add(name, "", "", "");
    }
    assert!(store.delete("C"));

    let names: Vec<String> = store.list().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["a", "b", "d", "e"]);
    Ok(())
}

#[test]
fn reload_yields_identical_sequence() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");

    let store = json_store(&path);
    store.add("Zoë", "+44 20 7946 0958", "zoe@example.co.uk", "Flat 2, \"The Mews\"");
    store.add("bob", "", "", "");
    store.add("Bob", "2", "b@x.com", "line one\nline two");
    assert!(store.update("BOB", "Bobby", "1", "", ""));

    let reopened = json_store(&path);
    assert_eq!(reopened.list(), store.list());

    // Explicit load replaces whatever was there
    let scratch = ContactStore::new(Box::new(JsonStorage::new(&path)));
    scratch.load();
    assert_eq!(scratch.list(), store.list());
    Ok(())
}

#[test]
fn missing_or_malformed_file_starts_empty() -> Result<(), AppError> {
    let dir = tempdir()?;

    let missing = json_store(&dir.path().join("nope").join("contacts.json"));
    assert!(missing.list().is_empty());

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{\"name\": \"half")?;
    let broken = json_store(&path);
    assert!(broken.list().is_empty());

    // First mutation replaces the broken file
    broken.add("Fresh", "", "", "");
    assert_eq!(json_store(&path).list(), vec![contact("Fresh", "", "", "")]);
    Ok(())
}

#[test]
fn unwritable_path_keeps_in_memory_change() -> Result<(), AppError> {
    let dir = tempdir()?;
    // A directory where the file should be makes every save fail
    let path = dir.path().join("contacts.json");
    std::fs::create_dir(&path)?;

    let store = json_store(&path);
    store.add("Bob", "", "", "");
    assert!(store.update("bob", "Robert", "", "", ""));

    assert_eq!(store.list(), vec![contact("Robert", "", "", "")]);
    assert!(path.is_dir());
    Ok(())
}
