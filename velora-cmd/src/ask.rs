//! One-shot question and backend health check.

use log::info;
use velora_chat::{ConnectionStatus, Dispatcher};
use velora_data::presentation::{insight_source_label, risk_score_label};
use velora_ocean::{AnalysisBackend, AnalysisResult};

/// Ask `question` once and print the reply.
///
/// A rejected or failed query is reported as an error so the process exits
/// non-zero.
pub async fn run_ask<B: AnalysisBackend>(
    backend: &B,
    mut dispatcher: Dispatcher,
    question: &str,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("Question is empty");
    }

    dispatcher.submit(backend, question).await;
    let conversation = dispatcher.conversation();

    let reply = match conversation.messages().last() {
        Some(msg) if msg.is_error => anyhow::bail!("{}", msg.text),
        Some(msg) => msg.text.clone(),
        None => anyhow::bail!("No reply for {:?}", question),
    };
    println!("{}", reply);

    if let Some(result) = conversation.current_result() {
        for line in details(result) {
            println!("{}", line);
        }
        if let Some(path) = csv_path {
            let rows = crate::export::write_chart_csv(path, result)?;
            info!("Wrote {} chart rows to {}", rows, path);
        }
    }
    Ok(())
}

/// Extra lines printed under the summary: notice, risk and insight.
pub fn details(result: &AnalysisResult) -> Vec<String> {
    let mut lines = Vec::new();
    if result.is_empty() {
        let notice = result
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("No data found. Try adjusting your region or year range.");
        lines.push(notice.to_string());
        return lines;
    }
    if let Some(risk) = &result.risk {
        lines.push(format!("Risk: {} ({})", risk.level, risk_score_label(risk)));
    }
    if let Some(insight) = &result.insight {
        lines.push(format!(
            "Insight [{}]: {}",
            insight_source_label(Some(insight.source)),
            insight.text
        ));
    }
    lines
}

/// Print the liveness probe result; unreachable is an error.
pub async fn run_health<B: AnalysisBackend>(backend: &B) -> anyhow::Result<()> {
    let status = ConnectionStatus::probe(backend).await;
    println!("{}", status.label());
    if !status.is_connected() {
        anyhow::bail!("Analysis backend is not reachable");
    }
    Ok(())
}
