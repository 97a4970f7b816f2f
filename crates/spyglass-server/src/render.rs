use spyglass_core::time::TimeReport;
use spyglass_core::types::{ExtractHit, SearchOutcome};

/// Longest extract snippet rendered before truncation kicks in.
const EXTRACT_SNIPPET_CHARS: usize = 2000;
const TRUNCATION_MARKER: &str = "...(content truncated)";

/// Render a search outcome as the tool's text block.
pub fn search_results(query: &str, outcome: &SearchOutcome) -> String {
    let mut text = format!(
        "🔍 Search query: \"{query}\"\n📊 Found {} results:\n\n",
        outcome.results.len()
    );

    for (index, hit) in outcome.results.iter().enumerate() {
        let date = hit.published_date.as_deref().unwrap_or("unknown");
        text.push_str(&format!(
            "**{}. {}**\n🔗 URL: {}\n⭐ Score: {:.2}\n📅 Published: {}\n📝 Summary: {}\n\n",
            index + 1,
            hit.title,
            hit.url,
            hit.score,
            date,
            hit.content,
        ));
    }

    if let Some(answer) = &outcome.answer {
        text.push_str(&format!("🤖 **AI answer:**\n{answer}\n"));
    }

    text
}

/// Render extraction results, truncating each entry's content.
pub fn extract_results(hits: &[ExtractHit]) -> String {
    let mut text = String::from("📄 Extraction results:\n\n");

    for (index, hit) in hits.iter().enumerate() {
        text.push_str(&format!(
            "**{}. URL**: {}\n**Status**: {}\n**Content**:\n{}\n\n",
            index + 1,
            hit.url,
            hit.status_code,
            snippet(&hit.raw_content),
        ));
    }

    text
}

/// Render a time report, surfacing the UTC fallback as a warning line.
pub fn current_time(report: &TimeReport) -> String {
    let mut text = format!(
        "🕐 Current time: {}\n🌍 Timezone: {}\n⏱️ Unix seconds: {}\n⏱️ Unix milliseconds: {}\n",
        report.formatted, report.timezone, report.unix_secs, report.unix_millis,
    );

    if let Some(requested) = &report.fallback_from {
        text.push_str(&format!(
            "⚠️ Unknown timezone \"{requested}\", fell back to UTC\n"
        ));
    }

    text
}

fn snippet(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(EXTRACT_SNIPPET_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}{TRUNCATION_MARKER}")
    } else {
        head
    }
}
