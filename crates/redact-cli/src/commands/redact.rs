use std::path::PathBuf;

use anyhow::{Context, Result};
use redact_client::{ApiClient, RedactTextResponse, Session, SessionStore};
use redact_core::{output, FileKind, SubmitRequest, Workflow, WorkflowState};

/// What a successful submit produced: redacted text for the text endpoint,
/// an opaque redacted file for the rest.
enum Outcome {
    Text(RedactTextResponse),
    Binary(Vec<u8>),
}

pub async fn text(
    client: &ApiClient,
    store: &SessionStore,
    input: String,
    out: Option<PathBuf>,
    print: bool,
) -> Result<()> {
    let session = store.require()?;

    let mut workflow = Workflow::new();
    workflow.set_text(&input)?;

    let outcome = submit(client, &session, &mut workflow).await?;
    let Outcome::Text(response) = outcome else {
        anyhow::bail!("unexpected binary response for text input");
    };

    if print {
        println!("{}", response.redacted_text);
        if !response.entities.is_empty() {
            println!("\nRedacted entities:");
            for entity in &response.entities {
                println!(
                    "  {} [{}..{}] score {:.2}",
                    entity.entity_type, entity.start, entity.end, entity.score
                );
            }
        }
    }

    let out_path = out.unwrap_or_else(|| PathBuf::from(output::TEXT_OUTPUT_NAME));
    tokio::fs::write(&out_path, response.redacted_text.as_bytes())
        .await
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("✓ Wrote {}", out_path.display());
    Ok(())
}

pub async fn file(
    client: &ApiClient,
    store: &SessionStore,
    path: PathBuf,
    columns: Vec<String>,
    entities: Vec<String>,
    list: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    // Guard first: nothing is read or uploaded without a session.
    let session = store.require()?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .with_context(|| format!("invalid file name: {}", path.display()))?;
    let data = tokio::fs::read(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(bytes = data.len(), file = %name, "read input file");

    let mut workflow = Workflow::new();
    workflow.select_file(&name, data)?;

    let kind = workflow.file().map(|f| f.kind);
    if !columns.is_empty() && kind != Some(FileKind::Csv) {
        anyhow::bail!("--columns only applies to csv files");
    }
    if !entities.is_empty() && kind == Some(FileKind::Csv) {
        anyhow::bail!("--entities only applies to pdf and docx files");
    }

    // PDF/DOCX: detection runs to completion before redaction is offered.
    if workflow.state() == WorkflowState::Detecting {
        println!("Detecting entities in {name}...");
        let detected = {
            let file = workflow.file().context("no file selected")?;
            client.detect_entities(&session, file).await
        };
        match detected {
            Ok(labels) => workflow.entities_detected(labels),
            Err(err) => {
                workflow.detection_failed();
                return Err(err).with_context(|| format!("entity detection failed for {name}"));
            }
        }
    }

    if list {
        if kind == Some(FileKind::Csv) {
            println!("Columns in {name}:");
            for column in workflow.columns() {
                println!("  {column}");
            }
        } else {
            println!("Detected entities in {name}:");
            for entity in workflow.entities() {
                println!("  {entity}");
            }
        }
        return Ok(());
    }

    for column in &columns {
        workflow.toggle_column(column)?;
    }
    for entity in &entities {
        workflow.toggle_entity(entity)?;
    }

    let outcome = submit(client, &session, &mut workflow).await?;
    let Outcome::Binary(bytes) = outcome else {
        anyhow::bail!("unexpected text response for a file upload");
    };

    let out_path = out.unwrap_or_else(|| PathBuf::from(output::redacted_file_name(&name)));
    tokio::fs::write(&out_path, &bytes)
        .await
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("✓ Wrote {}", out_path.display());
    Ok(())
}

/// Issue exactly one redaction request for the workflow's payload. No
/// retry; a failure leaves the workflow in `Failed` with its input intact.
async fn submit(client: &ApiClient, session: &Session, workflow: &mut Workflow) -> Result<Outcome> {
    workflow.begin_submit();

    let result = match workflow.submission() {
        Ok(SubmitRequest::Text { text }) => client
            .redact_text(session, text)
            .await
            .map(Outcome::Text)
            .map_err(anyhow::Error::from),
        Ok(SubmitRequest::Csv { file, columns }) => client
            .redact_csv(session, file, &columns)
            .await
            .map(Outcome::Binary)
            .map_err(anyhow::Error::from),
        Ok(SubmitRequest::Document { file, entities }) => client
            .redact_document(session, file, &entities)
            .await
            .map(Outcome::Binary)
            .map_err(anyhow::Error::from),
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(outcome) => {
            workflow.submitted();
            Ok(outcome)
        }
        Err(err) => {
            workflow.submit_failed();
            Err(err)
        }
    }
}
