// Integration tests for script loading, lessons and configuration

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use structviz::catalog::{self, Lesson, Topic};
use structviz::config::Config;
use structviz::errors::Error;
use structviz::script::ScriptSet;
use structviz::sequencer::Visualization;
use structviz::viz::{ArrayAction, ArrayViz, ListAction, ListKind, ListViz};

const ARRAY_SCRIPT: &str = r#"
initial = [1, 2, 3]

[[operations]]
id = "peek"
name = "Peek"
description = "Look at index 1"

[[operations.steps]]
action = "highlight"
index = 1
message = "Look here"
phase = "target"

[[operations.steps]]
action = "sparkle"
index = 1
message = "Something newer than this build"
phase = "fx"

[[operations.steps]]
action = "update"
index = 1
value = 7
message = "Overwrite"
phase = "update"

[[operations.steps]]
action = "complete"
message = "Done"
phase = "complete"

[[operations]]
id = "grow"
name = "Grow"

[[operations.steps]]
action = "shift"
indices = [2]
message = "Make room"
phase = "shift"

[[operations.steps]]
action = "insert"
index = 2
value = 9
message = "Insert 9"
phase = "insert"
"#;

const LIST_SCRIPT: &str = r#"
[[operations]]
id = "pop"
name = "Pop"
description = "Remove the head"

[[operations.steps]]
action = "mark_delete"
node_index = 0
message = "Mark head"
phase = "mark"

[[operations.steps]]
action = "delete_head"
message = "Unlink head"
phase = "delete"

[[operations.steps]]
action = "move"
node_index = 1
prev_index = 0
message = "Walk"
phase = "traverse"
"#;

/// Unique scratch file under the system temp directory
fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("structviz-test-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir.join(name)
}

#[test]
fn test_parse_array_script() {
    let script = ScriptSet::<ArrayAction>::parse(ARRAY_SCRIPT).expect("Parsing failed");

    assert_eq!(script.initial, Some(vec![1, 2, 3]));
    assert_eq!(script.operations.len(), 2);

    let peek = &script.operations[0];
    assert_eq!(peek.id(), "peek");
    assert_eq!(peek.description(), "Look at index 1");
    assert_eq!(peek.len(), 4);
    assert_eq!(peek.steps()[0].action, ArrayAction::Highlight { index: 1 });
    assert_eq!(peek.steps()[1].action, ArrayAction::Unknown);
    assert_eq!(peek.steps()[2].action, ArrayAction::Update { index: 1, value: 7 });
    assert_eq!(peek.steps()[3].action, ArrayAction::Complete { index: None });
    assert_eq!(peek.steps()[3].phase, "complete");

    let grow = &script.operations[1];
    assert_eq!(grow.description(), "");
    assert_eq!(grow.steps()[0].action, ArrayAction::Shift { indices: vec![2] });
}

#[test]
fn test_unknown_action_is_skipped_during_replay() {
    let script = ScriptSet::<ArrayAction>::parse(ARRAY_SCRIPT).expect("Parsing failed");
    let mut lesson = Lesson::from_script(
        script,
        |initial| initial.map(ArrayViz::new).unwrap_or_default(),
        Duration::from_millis(100),
    )
    .expect("Lesson creation failed");

    let seq = lesson.sequencer_mut();
    seq.go_to(0);
    let before = seq.state().clone();
    seq.next();
    assert_eq!(seq.state(), &before);

    seq.next();
    assert_eq!(seq.state().values, vec![1, 7, 3]);
}

#[test]
fn test_parse_list_script() {
    let script = ScriptSet::<ListAction>::parse(LIST_SCRIPT).expect("Parsing failed");
    assert_eq!(script.initial, None);

    let pop = &script.operations[0];
    assert_eq!(pop.steps()[0].action, ListAction::MarkDelete { node_index: 0 });
    assert_eq!(pop.steps()[1].action, ListAction::DeleteHead);
    assert_eq!(
        pop.steps()[2].action,
        ListAction::Move {
            node_index: 1,
            prev_index: Some(0)
        }
    );

    let mut lesson = Lesson::from_script(
        script,
        |_| ListViz::default(),
        Duration::from_millis(100),
    )
    .expect("Lesson creation failed");
    lesson.sequencer_mut().go_to(1);
    assert_eq!(lesson.sequencer().state().values(), vec![20, 30, 40, 50]);
}

#[test]
fn test_script_errors() {
    let empty = ScriptSet::<ArrayAction>::parse("initial = [1]");
    assert!(matches!(empty, Err(Error::EmptyScript)));

    let no_steps = ScriptSet::<ArrayAction>::parse(
        r#"
        [[operations]]
        id = "idle"
        name = "Idle"
        "#,
    );
    assert!(matches!(no_steps, Err(Error::EmptyOperation { ref id }) if id == "idle"));

    let duplicate = ScriptSet::<ArrayAction>::parse(
        r#"
        [[operations]]
        id = "a"
        name = "A"
        [[operations.steps]]
        action = "select"
        index = 0
        message = "m"

        [[operations]]
        id = "a"
        name = "Again"
        [[operations.steps]]
        action = "select"
        index = 1
        message = "m"
        "#,
    );
    assert!(matches!(duplicate, Err(Error::DuplicateOperation { ref id }) if id == "a"));

    let malformed = ScriptSet::<ArrayAction>::parse("[[operations]\nid = ");
    assert!(matches!(malformed, Err(Error::Parse { .. })));

    let missing = ScriptSet::<ArrayAction>::load(&scratch_path("does-not-exist.toml"));
    assert!(matches!(missing, Err(Error::Io { .. })));
}

#[test]
fn test_script_for_other_topic_is_flagged() {
    let script = ScriptSet::<ArrayAction>::parse(LIST_SCRIPT).expect("Parsing failed");
    let pop = &script.operations[0];
    assert!(pop.steps().iter().all(|step| step.action == ArrayAction::Unknown));
    assert_eq!(script.unknown_steps(), vec![("pop", 3, 3)]);

    let mixed = ScriptSet::<ArrayAction>::parse(ARRAY_SCRIPT).expect("Parsing failed");
    assert_eq!(mixed.unknown_steps(), vec![("peek", 1, 4)]);

    let clean = ScriptSet::<ListAction>::parse(LIST_SCRIPT).expect("Parsing failed");
    assert!(clean.unknown_steps().is_empty());
}

#[test]
fn test_load_script_from_file() {
    let path = scratch_path("list-script.toml");
    fs::write(&path, LIST_SCRIPT).expect("Failed to write script");

    let script = ScriptSet::<ListAction>::load(&path).expect("Loading failed");
    assert_eq!(script.operations[0].id(), "pop");
}

#[test]
fn test_builtin_lessons() {
    let arrays = catalog::array_lesson(Duration::from_millis(1500)).expect("array lesson");
    let ids: Vec<&str> = arrays.operations().iter().map(|op| op.id()).collect();
    assert_eq!(ids, vec!["access", "search", "insert", "delete", "update"]);
    assert_eq!(arrays.selected(), 0);
    assert_eq!(
        arrays.sequencer().state().values,
        ArrayViz::default().initial_state().values
    );

    let lists = catalog::list_lesson(ListKind::Doubly, Duration::from_millis(1500)).expect("list lesson");
    assert_eq!(lists.operations().len(), 8);
    assert_eq!(lists.sequencer().viz().kind(), ListKind::Doubly);
    assert_eq!(lists.sequencer().state().values(), vec![10, 20, 30, 40, 50]);
}

#[test]
fn test_lesson_selection() {
    let mut lesson = catalog::list_lesson(ListKind::Singly, Duration::from_millis(1500)).unwrap();

    lesson.select_by_id("delete-tail").unwrap();
    assert_eq!(lesson.operation().id(), "delete-tail");

    // Re-selecting the active operation keeps the position
    lesson.sequencer_mut().go_to(3);
    let index = lesson.selected();
    assert!(lesson.select(index));
    assert_eq!(lesson.sequencer().index(), 3);

    assert!(!lesson.select(42));
    assert_eq!(lesson.operation().id(), "delete-tail");

    let unknown = lesson.select_by_id("rotate");
    match unknown {
        Err(Error::UnknownOperation { id, available }) => {
            assert_eq!(id, "rotate");
            assert!(available.contains("traverse"));
        }
        other => panic!("Expected UnknownOperation, got {:?}", other),
    }

    lesson.select(0);
    lesson.previous_operation();
    assert_eq!(lesson.operation().id(), "delete-value");
    lesson.next_operation();
    assert_eq!(lesson.operation().id(), "traverse");
    assert_eq!(lesson.sequencer().index(), 0);
}

#[test]
fn test_lesson_rejects_empty_operation_list() {
    let lesson = Lesson::<ArrayViz>::new(ArrayViz::default(), Vec::new(), Duration::from_millis(10));
    assert!(matches!(lesson, Err(Error::EmptyScript)));
}

#[test]
fn test_topic_parsing() {
    assert_eq!("arrays".parse::<Topic>(), Ok(Topic::Arrays));
    assert_eq!("linked-list".parse::<Topic>(), Ok(Topic::LinkedLists));
    assert!("trees".parse::<Topic>().is_err());
    assert_eq!(Topic::Arrays.toggle(), Topic::LinkedLists);
    assert_eq!(Topic::LinkedLists.to_string(), "linked-lists");
}

#[test]
fn test_config_defaults() {
    let config = Config::parse("").expect("Parsing failed");
    assert_eq!(config, Config::default());
    assert_eq!(config.base_interval, Duration::from_millis(1500));
    assert_eq!(config.speed, 1.0);
    assert_eq!(config.topic, Topic::Arrays);
}

#[test]
fn test_config_values() {
    let config = Config::parse(
        r#"
        base_interval_ms = 800
        speed = 2.0
        topic = "linked-lists"
        operation = "insert-at"
        list_kind = "doubly"
        "#,
    )
    .expect("Parsing failed");

    assert_eq!(config.base_interval, Duration::from_millis(800));
    assert_eq!(config.speed, 2.0);
    assert_eq!(config.topic, Topic::LinkedLists);
    assert_eq!(config.operation.as_deref(), Some("insert-at"));
    assert_eq!(config.list_kind, ListKind::Doubly);
    assert_eq!(config.script, None);
}

#[test]
fn test_config_rejects_bad_topic() {
    let result = Config::parse("topic = \"graphs\"");
    assert!(matches!(result, Err(Error::Parse { .. })));
}

#[test]
fn test_config_resolves_script_relative_to_file() {
    let path = scratch_path("structviz.toml");
    fs::write(&path, "script = \"ops.toml\"\n").expect("Failed to write config");

    let config = Config::load(&path).expect("Loading failed");
    let expected = path.parent().unwrap().join("ops.toml");
    assert_eq!(config.script, Some(expected));
}
