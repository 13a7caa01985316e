use jobstore::{Mode, PropType, Value};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{params, stage, tests, StoreTest};

fn new_job(test: &mut StoreTest) {
    let input_parameters = params(json!({ "headers": false, "delimiter": ";" }));
    let output_parameters = params(json!({
        "base_url": "https://jsonplaceholder.typicode.com",
        "endpoint": "/posts",
    }));

    let mut writer = test.writer();
    writer.set_prop("name", "test").unwrap();
    writer.set_prop("description", "My Job").unwrap();
    writer.set_prop("priority", 10).unwrap();
    writer.set_prop("mode", "cu").unwrap();
    writer.set_prop("active", true).unwrap();
    writer.set_prop("input", "csv").unwrap();
    writer.set_prop("input_parameters", input_parameters.clone()).unwrap();
    writer.set_prop("output", "rest").unwrap();
    writer.set_prop("output_parameters", output_parameters.clone()).unwrap();

    let job = writer.save().unwrap();
    assert!(job.id.is_some());
    assert!(writer.is_bound());
    assert_eq!(writer.get_prop("name").unwrap(), Value::from("test"));
    assert_eq!(writer.get_prop("description").unwrap(), Value::from("My Job"));

    assert_eq!(test.count("job"), 1);
    assert_eq!(test.raw_text("SELECT mode FROM job WHERE name = 'test'"), "cu");

    let stored: serde_json::Value =
        serde_json::from_str(&test.raw_text("SELECT input_parameters FROM job")).unwrap();
    assert_eq!(stored, json!({ "headers": false, "delimiter": ";" }));

    let job = test.reader("test").unwrap().into_job();
    assert_eq!(job.description.as_deref(), Some("My Job"));
    assert_eq!(job.priority, 10);
    assert!(job.active);
    assert_eq!(job.input.as_deref(), Some("csv"));
    assert_eq!(job.input_parameters, input_parameters);
    assert_eq!(job.output.as_deref(), Some("rest"));
    assert_eq!(job.output_parameters, output_parameters);
}

fn required_properties_in_order(test: &mut StoreTest) {
    let mut writer = test.writer();

    let err = writer.save().unwrap_err();
    assert!(err.is_missing_required_property());
    assert_eq!(err.to_string(), "Property name is required");

    writer.set_prop("name", "test").unwrap();
    assert_eq!(
        writer.save().unwrap_err().to_string(),
        "Property input is required"
    );

    writer.set_prop("input", "test").unwrap();
    assert_eq!(
        writer.save().unwrap_err().to_string(),
        "Property output is required"
    );
    assert_eq!(test.count("job"), 0);

    writer.set_prop("output", "test").unwrap();
    writer.save().unwrap();
    assert_eq!(test.count("job"), 1);
}

fn unset_required_property_reads_null(test: &mut StoreTest) {
    let writer = test.writer();
    assert_eq!(writer.get_prop("name").unwrap(), Value::Null);
    assert_eq!(writer.get_prop("priority").unwrap(), Value::Integer(1));
    assert_eq!(writer.get_prop("mode").unwrap(), Value::from("cu"));
}

fn unknown_property(test: &mut StoreTest) {
    let mut writer = test.writer();

    let err = writer.get_prop("toto").unwrap_err();
    assert!(err.is_unknown_property());

    assert!(writer.set_prop("toto", "test").unwrap_err().is_unknown_property());

    let err = writer.prop_type("does_not_exist").unwrap_err();
    assert_eq!(err.to_string(), "`does_not_exist` is not a valid job property");
}

fn prop_types(test: &mut StoreTest) {
    let writer = test.writer();
    assert_eq!(writer.prop_type("name").unwrap(), PropType::String);
    assert_eq!(writer.prop_type("priority").unwrap(), PropType::Integer);
    assert_eq!(writer.prop_type("input_parameters").unwrap(), PropType::Map);
    assert!(matches!(
        writer.prop_type("mode").unwrap(),
        PropType::Enum(literals) if literals == Mode::LITERALS
    ));
}

fn wrong_type(test: &mut StoreTest) {
    let mut writer = test.writer();
    let err = writer.set_prop("name", 32).unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(err.to_string().starts_with("name must be of type string"));
}

fn bad_mode(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    let err = writer.set_prop("mode", "wrong").unwrap_err();
    assert!(err.is_invalid_enum_value());
    assert!(err.to_string().starts_with("wrong is not a valid mode"));
}

fn load_then_update(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.save().unwrap();

    let mut writer = test.writer_for("test").unwrap();
    assert!(writer.get_job().active);
    assert_eq!(writer.get_job().input.as_deref(), Some("csv"));

    writer.set_prop("active", false).unwrap();
    writer.set_prop("description", "now inactive").unwrap();
    writer.save().unwrap();

    let job = test.reader("test").unwrap().into_job();
    assert!(!job.active);
    assert_eq!(job.description.as_deref(), Some("now inactive"));
    assert_eq!(test.count("job"), 1);
}

fn persisted_name_is_immutable(test: &mut StoreTest) {
    let mut writer = test.writer();
    stage(&mut writer, "test");
    writer.save().unwrap();

    let err = writer.set_prop("name", "renamed").unwrap_err();
    assert!(err.is_immutable_property());

    let mut writer = test.writer_for("test").unwrap();
    assert!(writer.set_prop("name", "renamed").unwrap_err().is_immutable_property());
    writer.set_prop("name", "test").unwrap();
    assert!(test.reader("renamed").unwrap_err().is_not_found());
}

tests!(
    new_job,
    required_properties_in_order,
    unset_required_property_reads_null,
    unknown_property,
    prop_types,
    wrong_type,
    bad_mode,
    load_then_update,
    persisted_name_is_immutable,
);
