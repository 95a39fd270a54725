use redact_core::{
    forms::{self, CredentialForm, FormMode},
    output, CoreError, SubmitRequest, Workflow, WorkflowState,
};

#[test]
fn test_text_redaction_scenario() {
    // User pastes text and submits: one text request, output written as
    // redacted_output.txt.
    let mut wf = Workflow::new();
    wf.set_text("Patient John Doe, SSN 123-45-6789").unwrap();

    let request = wf.submission().unwrap();
    match request {
        SubmitRequest::Text { text } => assert_eq!(text, "Patient John Doe, SSN 123-45-6789"),
        other => panic!("expected text request, got {other:?}"),
    }

    assert_eq!(output::TEXT_OUTPUT_NAME, "redacted_output.txt");
}

#[test]
fn test_csv_redaction_scenario() {
    // User uploads claims.csv, selects only "name", submits; the download
    // name gets the _redacted suffix.
    let mut wf = Workflow::new();
    wf.select_file("claims.csv", b"name,amount\nJohn,120\n".to_vec())
        .unwrap();
    assert_eq!(wf.columns(), ["name", "amount"]);

    wf.toggle_column("name").unwrap();

    match wf.submission().unwrap() {
        SubmitRequest::Csv { file, columns } => {
            assert_eq!(file.name, "claims.csv");
            assert_eq!(columns, ["name"]);
            assert_eq!(output::redacted_file_name(&file.name), "claims_redacted.csv");
        }
        other => panic!("expected csv request, got {other:?}"),
    }
}

#[test]
fn test_document_detection_and_retry_scenario() {
    // Detection fails once, the file stays selected, and a retry succeeds.
    let mut wf = Workflow::new();
    wf.select_file("notes.docx", vec![0xd0, 0xcf]).unwrap();
    assert_eq!(wf.state(), WorkflowState::Detecting);

    wf.detection_failed();
    assert_eq!(wf.state(), WorkflowState::FileSelected);
    assert!(wf.file().is_some());

    wf.retry_detection().unwrap();
    wf.entities_detected(vec!["PERSON".to_string(), "EMAIL".to_string()]);

    wf.toggle_entity("EMAIL").unwrap();
    match wf.submission().unwrap() {
        SubmitRequest::Document { entities, .. } => assert_eq!(entities, ["EMAIL"]),
        other => panic!("expected document request, got {other:?}"),
    }
}

#[test]
fn test_replacing_a_file_discards_derived_state() {
    let mut wf = Workflow::new();
    wf.select_file("claims.csv", b"name,amount\n".to_vec()).unwrap();
    wf.toggle_column("name").unwrap();

    // A new file recreates the derived sets from scratch.
    wf.select_file("other.csv", b"city,zip\n".to_vec()).unwrap();
    assert_eq!(wf.columns(), ["city", "zip"]);
    assert!(wf.selected_columns().is_empty());
}

#[test]
fn test_oversized_text_is_rejected_with_state_intact() {
    let mut wf = Workflow::new();
    wf.select_file("claims.csv", b"name\n".to_vec()).unwrap();

    let long = "z".repeat(redact_core::MAX_TEXT_CHARS + 1);
    assert!(matches!(
        wf.set_text(&long).unwrap_err(),
        CoreError::TextTooLong { .. }
    ));
    // The rejected text did not replace the selected file.
    assert!(wf.file().is_some());
}

#[test]
fn test_signup_then_login_validation() {
    let mut form = CredentialForm {
        name: "Jane Roe".to_string(),
        email: "jane@example.com".to_string(),
        password: "Str0ngPass!".to_string(),
        confirm_password: "Str0ngPass!".to_string(),
    };
    assert!(forms::validate(&form, FormMode::Signup).is_empty());

    // After registration the same credentials pass login validation even
    // with the signup-only fields cleared.
    form.name.clear();
    form.confirm_password.clear();
    assert!(forms::validate(&form, FormMode::Login).is_empty());
}
