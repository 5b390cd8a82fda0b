use todo_core::{
    Command, CommandOutcome, Note, NoteService, NoteServiceError, NoteStore, UserProfile, View,
    HELP_TEXT, UNCATEGORISED,
};

fn service() -> NoteService {
    NoteService::for_user(UserProfile::new("george"))
}

#[test]
fn add_rejects_duplicate_title_and_leaves_store_unchanged() {
    let mut service = service();
    service.add_note("milk", ["home"]).unwrap();

    let err = service.add_note("milk", ["work"]).unwrap_err();
    assert_eq!(err, NoteServiceError::DuplicateTitle("milk".to_string()));
    assert_eq!(service.store().len(), 1);
    assert_eq!(service.store().notes()[0].categories, vec!["HOME"]);
}

#[test]
fn add_without_categories_files_under_uncategorised() {
    let mut service = service();
    let note = service.add_note("loose", Vec::<String>::new()).unwrap();
    assert_eq!(note.categories, vec![UNCATEGORISED]);
}

#[test]
fn add_rejects_empty_title() {
    let mut service = service();
    let err = service.add_note("", ["home"]).unwrap_err();
    assert_eq!(err, NoteServiceError::MissingArgument("title"));
}

#[test]
fn remove_unknown_or_empty_title_is_not_found() {
    let mut service = service();
    service.add_note("milk", ["home"]).unwrap();

    assert!(matches!(
        service.remove_note("bread"),
        Err(NoteServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.remove_note(""),
        Err(NoteServiceError::NotFound(_))
    ));

    let removed = service.remove_note("milk").unwrap();
    assert_eq!(removed.title, "milk");
    assert!(service.into_store().is_empty());
}

#[test]
fn rename_checks_existence_and_uniqueness() {
    let mut service = service();
    service.add_note("milk", ["home"]).unwrap();
    service.add_note("report", ["work"]).unwrap();

    assert!(matches!(
        service.rename_note("bread", "toast"),
        Err(NoteServiceError::NotFound(_))
    ));
    assert_eq!(
        service.rename_note("milk", "report").unwrap_err(),
        NoteServiceError::DuplicateTitle("report".to_string())
    );

    let renamed = service.rename_note("milk", "oat milk").unwrap();
    assert_eq!(renamed.title, "oat milk");
    assert_eq!(service.store().find_index("oat milk"), Some(0));

    let unchanged = service.rename_note("report", "report").unwrap();
    assert_eq!(unchanged.title, "report");
}

#[test]
fn recategorize_replaces_categories_and_normalizes_empty_list() {
    let mut service = service();
    service.add_note("milk", ["home"]).unwrap();

    let note = service.recategorize_note("milk", ["shop", "Urgent"]).unwrap();
    assert_eq!(note.categories, vec!["SHOP", "URGENT"]);

    let note = service
        .recategorize_note("milk", Vec::<String>::new())
        .unwrap();
    assert_eq!(note.categories, vec![UNCATEGORISED]);

    assert!(matches!(
        service.recategorize_note("bread", ["x"]),
        Err(NoteServiceError::NotFound(_))
    ));
}

#[test]
fn view_without_categories_returns_full_index() {
    let mut service = service();
    service.add_note("A", ["work"]).unwrap();
    service.add_note("B", ["home", "work"]).unwrap();
    service.add_note("C", Vec::<String>::new()).unwrap();

    let View::Index(entries) = service.view::<String>(&[]) else {
        panic!("expected index view");
    };
    let order: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(order, vec!["WORK", "HOME", UNCATEGORISED]);
    assert_eq!(entries[0].1.len(), 2);
}

#[test]
fn view_with_categories_intersects() {
    let mut service = service();
    service.add_note("A", ["work"]).unwrap();
    service.add_note("C", ["work", "urgent"]).unwrap();

    let View::Matches { categories, notes } = service.view(&["work", "urgent"]) else {
        panic!("expected match view");
    };
    assert_eq!(categories, vec!["work", "urgent"]);
    let titles: Vec<&str> = notes.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, vec!["C"]);
}

#[test]
fn execute_line_runs_full_session() {
    let mut service = service();

    let added = service.execute_line("add \"Buy milk\" home;shop").unwrap();
    assert!(matches!(added, CommandOutcome::Added(ref note) if note.categories == vec!["HOME", "SHOP"]));

    let renamed = service.execute_line("e \"Buy milk\" \"Buy oat milk\"").unwrap();
    assert!(matches!(
        renamed,
        CommandOutcome::Renamed { ref previous_title, ref note }
            if previous_title == "Buy milk" && note.title == "Buy oat milk"
    ));

    let recategorized = service.execute_line("c \"Buy oat milk\" urgent").unwrap();
    assert!(matches!(recategorized, CommandOutcome::Recategorized(ref note) if note.categories == vec!["URGENT"]));

    let viewed = service.execute_line("v URGENT").unwrap();
    assert!(matches!(viewed, CommandOutcome::Viewed(View::Matches { ref notes, .. }) if notes.len() == 1));

    let removed = service.execute_line("r \"Buy oat milk\"").unwrap();
    assert!(matches!(removed, CommandOutcome::Removed(_)));
    assert!(service.store().is_empty());

    assert_eq!(service.execute_line("h").unwrap(), CommandOutcome::Help(HELP_TEXT));
    assert_eq!(service.execute_line("QUIT").unwrap(), CommandOutcome::Quit);
    assert_eq!(
        service.execute_line("frobnicate").unwrap(),
        CommandOutcome::Unrecognized("frobnicate".to_string())
    );
}

#[test]
fn execute_line_maps_parse_failures_to_missing_argument() {
    let mut service = service();
    assert_eq!(
        service.execute_line("edit \"only one\"").unwrap_err(),
        NoteServiceError::MissingArgument("new title")
    );
    assert_eq!(
        service.execute_line("add no quotes").unwrap_err(),
        NoteServiceError::MissingArgument("title")
    );
}

#[test]
fn execute_add_duplicate_reports_error() {
    let mut service = service();
    let command = Command::Add {
        title: "milk".to_string(),
        categories: vec![],
    };
    service.execute(command.clone()).unwrap();
    assert_eq!(
        service.execute(command).unwrap_err().to_string(),
        "note already exists: `milk`"
    );
}

#[test]
fn writes_leave_other_uncategorised_notes_untouched() {
    let mut store = NoteStore::new(UserProfile::new("george"));
    store.add(Note::new("bare", Vec::<String>::new()));
    let mut service = NoteService::new(store);

    service.add_note("other", Vec::<String>::new()).unwrap();
    service.add_note("tagged", ["home"]).unwrap();
    service
        .recategorize_note("tagged", Vec::<String>::new())
        .unwrap();

    let notes = service.store().notes();
    assert!(notes[0].categories.is_empty());
    assert_eq!(notes[1].categories, vec![UNCATEGORISED]);
    assert_eq!(notes[2].categories, vec![UNCATEGORISED]);
}
