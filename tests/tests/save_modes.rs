use jobstore::{Hook, Rule, Value};
use pretty_assertions::assert_eq;
use tests::{stage, tests, StoreTest};

fn seed(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.set_prop("description", "original").unwrap();
    writer.add_field("in", "out").unwrap();
    writer.add_rule("out", Rule::new("r", "m")).unwrap();
    writer.add_hook(Hook::new("h", "m", "after")).unwrap();
    writer.save().unwrap();
}

fn create_only_inserts(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.set_prop("mode", "c").unwrap();
    let job = writer.save().unwrap();
    assert!(job.id.is_some());
    assert_eq!(test.count("job"), 1);
}

fn create_only_rejects_existing_name(test: &mut StoreTest) {
    seed(test);
    let before = test.counts();

    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.set_prop("mode", "c").unwrap();
    writer.set_prop("description", "changed").unwrap();
    writer.add_field("in", "other").unwrap();

    let err = writer.save().unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(err.to_string(), "job `test` already exists");

    assert_eq!(test.counts(), before);
    let job = test.reader("test").unwrap().into_job();
    assert_eq!(job.description.as_deref(), Some("original"));
    assert!(!writer.is_bound());
}

fn update_only_requires_existing(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.set_prop("mode", "u").unwrap();

    let err = writer.save().unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(test.counts(), [0, 0, 0, 0]);
}

fn update_only_updates(test: &mut StoreTest) {
    seed(test);

    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.set_prop("mode", "u").unwrap();
    writer.set_prop("priority", 5).unwrap();
    writer.save().unwrap();

    let job = test.reader("test").unwrap().into_job();
    assert_eq!(job.priority, 5);
    assert_eq!(test.counts(), [1, 1, 1, 1]);
}

fn create_or_update_upserts(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    let first = writer.save().unwrap();

    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.set_prop("priority", 3).unwrap();
    let second = writer.save().unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(test.count("job"), 1);
    assert_eq!(test.reader("test").unwrap().job().priority, 3);
}

fn delete_mode_removes_job(test: &mut StoreTest) {
    seed(test);

    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.set_prop("mode", "d").unwrap();
    let job = writer.save().unwrap();

    assert_eq!(job.id, None);
    assert!(!writer.is_bound());
    assert_eq!(test.counts(), [0, 0, 0, 0]);
    assert!(test.reader("test").unwrap_err().is_not_found());
}

fn delete_mode_on_missing_job(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.set_prop("mode", "d").unwrap();
    assert!(writer.save().unwrap_err().is_not_found());
}

fn save_twice_is_idempotent(test: &mut StoreTest) {
    seed(test);

    let mut writer = test.writer_for("test").unwrap();
    let first = writer.save().unwrap();
    let counts = test.counts();
    let second = writer.save().unwrap();

    assert_eq!(first, second);
    assert_eq!(test.counts(), counts);
    assert_eq!(counts, [1, 1, 1, 1]);
}

fn saved_job_includes_stored_children(test: &mut StoreTest) {
    seed(test);

    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.add_field("in2", "extra").unwrap();
    let job = writer.save().unwrap();

    assert_eq!(job, test.reader("test").unwrap().into_job());
    assert!(job.fields["out"].rules.contains_key("r"));
    assert!(job.hooks.contains_key("h"));
    assert_eq!(job.description.as_deref(), None);

    assert!(writer.get_field("out").is_ok());
    assert!(writer.rule_exists("out", "r"));
    assert!(writer.hook_exists("h"));
    assert!(writer.field_exists("extra"));
}

fn create_mode_is_kept_on_reload(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.set_prop("mode", "c").unwrap();
    writer.save().unwrap();

    let mut writer = test.writer_for("test").unwrap();
    assert_eq!(writer.get_prop("mode").unwrap(), Value::from("c"));
    assert!(writer.save().unwrap_err().is_already_exists());

    writer.set_prop("mode", "cu").unwrap();
    writer.set_prop("priority", 4).unwrap();
    writer.save().unwrap();
    assert_eq!(test.reader("test").unwrap().job().priority, 4);
}

tests!(
    create_only_inserts,
    create_only_rejects_existing_name,
    update_only_requires_existing,
    update_only_updates,
    create_or_update_upserts,
    delete_mode_removes_job,
    delete_mode_on_missing_job,
    save_twice_is_idempotent,
    saved_job_includes_stored_children,
    create_mode_is_kept_on_reload,
);
