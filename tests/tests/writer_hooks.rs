use jobstore::{Entity, Hook};
use pretty_assertions::assert_eq;
use tests::{stage, tests, StoreTest};

fn get_add_delete_hooks(test: &mut StoreTest) {
    let mut writer = test.writer();

    let err = writer.get_hook("test").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.not_found_entity(), Some(Entity::Hook));

    assert!(!writer.hook_exists("test"));
    writer.add_hook(Hook::new("test", "method", "never")).unwrap();
    assert!(writer.hook_exists("test"));

    let hook = writer.get_hook("test").unwrap();
    assert_eq!(hook, &Hook::new("test", "method", "never"));
    assert!(hook.active);
    assert_eq!(hook.priority, 1);
    assert_eq!(hook.description, None);

    let err = writer
        .add_hook(Hook::new("test", "method", "never"))
        .unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(err.to_string(), "hook `test` already exists; delete it first");

    writer.del_hook("test").unwrap();
    assert!(!writer.hook_exists("test"));
    assert!(writer.del_hook("test").unwrap_err().is_not_found());
}

fn hooks_persist_with_attributes(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer
        .add_hook(
            Hook::new("test", "method", "never")
                .description("Hook from Test")
                .priority(10),
        )
        .unwrap();
    writer
        .add_hook(Hook::new("test2", "method2", "always").active(false))
        .unwrap();
    writer.save().unwrap();

    assert_eq!(test.count("hook"), 2);

    let writer = test.writer_for("test").unwrap();
    let hook = writer.get_hook("test").unwrap();
    assert_eq!(hook.description.as_deref(), Some("Hook from Test"));
    assert_eq!(hook.priority, 10);
    assert_eq!(hook.method, "method");
    assert!(hook.active);
    assert_eq!(hook.when, "never");

    let hook = writer.get_hook("test2").unwrap();
    assert_eq!(hook.description, None);
    assert_eq!(hook.priority, 1);
    assert!(!hook.active);
    assert_eq!(hook.when, "always");
}

fn job_without_hooks(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.save().unwrap();

    let writer = test.writer_for("test").unwrap();
    assert!(writer.hooks().is_empty());
    assert!(writer.get_hook("test").unwrap_err().is_not_found());
}

fn add_hook_to_existing_job(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.add_hook(Hook::new("test", "method", "never")).unwrap();
    writer
        .add_hook(Hook::new("test2", "method2", "always"))
        .unwrap();
    writer.save().unwrap();

    let mut writer = test.writer_for("test").unwrap();
    writer
        .add_hook(Hook::new("test3", "method3", "sometimes"))
        .unwrap();
    writer.save().unwrap();

    assert_eq!(test.count("hook"), 3);

    let reader = test.reader("test").unwrap();
    let names: Vec<_> = reader.hooks().keys().map(String::as_str).collect();
    assert_eq!(names, ["test", "test2", "test3"]);
    assert_eq!(reader.hook("test3").unwrap().when, "sometimes");
}

fn staged_hook_deletion_removes_row(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.add_hook(Hook::new("keep", "m", "before")).unwrap();
    writer.add_hook(Hook::new("drop", "m", "after")).unwrap();
    writer.save().unwrap();

    let mut writer = test.writer_for("test").unwrap();
    writer.del_hook("drop").unwrap();
    writer.save().unwrap();

    assert_eq!(test.count("hook"), 1);
    let reader = test.reader("test").unwrap();
    assert!(reader.hook("keep").is_ok());
    assert!(reader.hook("drop").unwrap_err().is_not_found());
}

fn existing_hook_rows_are_not_edited(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.add_hook(Hook::new("h", "old", "after")).unwrap();
    writer.save().unwrap();

    // A second writer stages a hook with the same name but another method.
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.add_hook(Hook::new("h", "new", "after")).unwrap();
    writer.save().unwrap();

    assert_eq!(test.reader("test").unwrap().hook("h").unwrap().method, "old");

    // Replacing takes a deletion and a re-add.
    let mut writer = test.writer_for("test").unwrap();
    writer.del_hook("h").unwrap();
    writer.add_hook(Hook::new("h", "new", "after")).unwrap();
    writer.save().unwrap();

    assert_eq!(test.reader("test").unwrap().hook("h").unwrap().method, "new");
    assert_eq!(test.count("hook"), 1);
}

fn unsaved_hook_deletion_keeps_stored_row(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.add_hook(Hook::new("h", "m", "after")).unwrap();
    writer.save().unwrap();

    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.add_hook(Hook::new("h", "other", "before")).unwrap();
    writer.del_hook("h").unwrap();
    let job = writer.save().unwrap();

    assert_eq!(test.count("hook"), 1);
    assert_eq!(job.hooks["h"].method, "m");
    assert_eq!(test.reader("test").unwrap().hook("h").unwrap().when, "after");
}

tests!(
    get_add_delete_hooks,
    hooks_persist_with_attributes,
    job_without_hooks,
    add_hook_to_existing_job,
    staged_hook_deletion_removes_row,
    existing_hook_rows_are_not_edited,
    unsaved_hook_deletion_keeps_stored_row,
);
