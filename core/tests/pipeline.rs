mod common;

use common::{FakeExecutor, DUMP_COMMAND, NEXT_REPORT};
use pretty_assertions::assert_eq;
use tasktable_core::api::{
    run_block, run_command, AppConfig, BlockOutput, OutputMode, RunnerError,
};

const NEXT_COMMAND: &str = "task rc.detection:off rc.defaultwidth:1000 next";
const NEXT_EXPORT_COMMAND: &str = "task project:home export \
rc.columns=id,entry.age,project,due,description \
'rc.description=Most urgent tasks' \
'rc.filter=status:pending -WAITING limit:page' \
rc.labels=ID,Age,Project,Due,Description \
rc.sort=urgency-";
const NEXT_EXPORT: &str = r#"[
{"id":1,"description":"Pay rent","project":"home","status":"pending","urgency":9.8},
{"id":4,"description":"Water plants","project":"home","status":"pending","urgency":2.1}
]
"#;

#[tokio::test]
async fn block_renders_report_as_table() {
    let fake = FakeExecutor::new()
        .with_reports()
        .with_output(NEXT_COMMAND, NEXT_REPORT)
        .into_arc();

    let (spec, output) = run_block("command: task next\n", &AppConfig::default(), fake.clone())
        .await
        .unwrap();
    assert_eq!(spec.command, "task next");

    let BlockOutput::Table(table) = output else {
        panic!("expected a table");
    };
    assert_eq!(
        table.column_names().collect::<Vec<_>>(),
        vec!["ID", "Age", "Project", "Due", "Description"]
    );
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0]["ID"], "1");
    assert_eq!(table.rows[0]["Due"], "2026-10-20");
    assert_eq!(table.rows[1]["Project"], "work.review");
    assert_eq!(table.rows[1]["Due"], "");
    assert_eq!(
        table.rows[1]["Description"],
        "Prepare the quarterly review slides for the board meeting"
    );
    assert_eq!(table.rows[2]["ID"], "12");
    assert_eq!(table.rows[2]["Age"], "3mo");

    // one dump, one report run
    assert_eq!(fake.calls(), vec![DUMP_COMMAND.to_string(), NEXT_COMMAND.to_string()]);
}

#[tokio::test]
async fn raw_mode_returns_filtered_text() {
    let fake = FakeExecutor::new()
        .with_reports()
        .with_output(NEXT_COMMAND, NEXT_REPORT)
        .into_arc();

    let (_, output) = run_block("command: next\nraw: true\n", &AppConfig::default(), fake)
        .await
        .unwrap();

    let BlockOutput::Raw(text) = output else {
        panic!("expected raw text");
    };
    assert_eq!(text.lines().count(), 4);
    assert!(text.starts_with("ID Age Project"));
    assert!(!text.contains("3 tasks"));
    assert!(!text.contains("---"));
}

#[tokio::test]
async fn empty_report_output_is_an_empty_table() {
    let fake = FakeExecutor::new()
        .with_reports()
        .with_output(NEXT_COMMAND, "\nNo matches.\n")
        .into_arc();
    let output = run_command("next", OutputMode::Table, &AppConfig::default(), fake.clone())
        .await
        .unwrap();
    let BlockOutput::Table(table) = output else {
        panic!("expected a table");
    };
    // whatever line survives filtering is taken as the header
    assert_eq!(table.columns.len(), 2);
    assert!(table.rows.is_empty());

    let fake = FakeExecutor::new()
        .with_reports()
        .with_output(NEXT_COMMAND, "\n\n")
        .into_arc();
    let output = run_command("next", OutputMode::Table, &AppConfig::default(), fake)
        .await
        .unwrap();
    assert_eq!(output, BlockOutput::Table(Default::default()));
}

#[tokio::test]
async fn unknown_report_never_reaches_the_executor() {
    let fake = FakeExecutor::new().with_reports().into_arc();

    let err = run_block("command: task bogus\n", &AppConfig::default(), fake.clone())
        .await
        .unwrap_err();

    assert!(matches!(err, RunnerError::Validation(ref t) if t == "bogus"));
    assert_eq!(fake.calls(), vec![DUMP_COMMAND.to_string()]);
}

#[tokio::test]
async fn report_failure_propagates_unmodified() {
    let fake = FakeExecutor::new()
        .with_reports()
        .with_failure(NEXT_COMMAND, 1, "Unknown filter")
        .into_arc();

    let err = run_command("next", OutputMode::Table, &AppConfig::default(), fake.clone())
        .await
        .unwrap_err();

    match err {
        RunnerError::Execution {
            command,
            exit_code,
            stderr,
        } => {
            assert_eq!(command, NEXT_COMMAND);
            assert_eq!(exit_code, 1);
            assert_eq!(stderr, "Unknown filter");
        }
        other => panic!("unexpected error: {other}"),
    }
    // no retry
    assert_eq!(fake.calls().len(), 2);
}

#[tokio::test]
async fn invalid_block_fails_before_any_command() {
    let fake = FakeExecutor::new().with_reports().into_arc();
    let err = run_block("report: next\n", &AppConfig::default(), fake.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, RunnerError::Block(_)));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn export_block_parses_json_with_report_settings() {
    let fake = FakeExecutor::new()
        .with_reports()
        .with_output(NEXT_EXPORT_COMMAND, NEXT_EXPORT)
        .into_arc();

    let (spec, output) = run_block(
        "command: task project:home next\nexport: true\n",
        &AppConfig::default(),
        fake.clone(),
    )
    .await
    .unwrap();
    assert_eq!(spec.mode(), OutputMode::Export);

    let BlockOutput::Export(value) = output else {
        panic!("expected export json");
    };
    let tasks = value.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["description"], "Pay rent");
    assert_eq!(tasks[1]["urgency"], 2.1);
    assert_eq!(
        fake.calls(),
        vec![DUMP_COMMAND.to_string(), NEXT_EXPORT_COMMAND.to_string()]
    );
}

#[tokio::test]
async fn literal_export_runs_without_the_dump() {
    let fake = FakeExecutor::new()
        .with_output("task export status:pending", "[]\n")
        .into_arc();

    let (_, output) = run_block(
        "command: task export status:pending\n",
        &AppConfig::default(),
        fake.clone(),
    )
    .await
    .unwrap();

    assert_eq!(output, BlockOutput::Export(serde_json::json!([])));
    assert_eq!(fake.calls(), vec!["task export status:pending".to_string()]);
}

#[tokio::test]
async fn malformed_export_is_an_export_error() {
    let fake = FakeExecutor::new()
        .with_output("task export", "Configuration override rc.x\n[")
        .into_arc();

    let err = run_command("export", OutputMode::Export, &AppConfig::default(), fake)
        .await
        .unwrap_err();
    assert!(matches!(err, RunnerError::Export(_)));
    assert!(!err.is_validation());
}
