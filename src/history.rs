//! history.rs — in-memory session log of analyses, owned by the shell.
//!
//! The core never sees this; the API layer appends after each call. Entries
//! are capped, snapshots come back newest-first, and the whole log can be
//! exported as CSV with the same columns as the original history table.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::decision::{Analysis, Sentiment};

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub ts_unix: u64,
    pub text: String,
    pub label: Sentiment,
    pub confidence: f32,
    pub reading: String,
}

impl HistoryEntry {
    /// "Bom (85%)" style rendering used by the table and the CSV export.
    pub fn sentiment_display(&self) -> String {
        format!(
            "{} ({:.0}%)",
            self.label.display_ptbr(),
            self.confidence * 100.0
        )
    }
}

/// Per-label counts for the session summary.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub temperature: Temperature,
}

/// Session "thermometer" driven by the share of negative tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    High,
    Medium,
    Stable,
}

impl SessionStats {
    fn from_counts(positive: usize, negative: usize, neutral: usize) -> Self {
        let total = positive + negative + neutral;
        let negative_share = if total > 0 {
            negative as f32 / total as f32
        } else {
            0.0
        };
        let temperature = if negative_share > 0.4 {
            Temperature::High
        } else if negative_share > 0.2 {
            Temperature::Medium
        } else {
            Temperature::Stable
        };
        Self {
            total,
            positive,
            negative,
            neutral,
            temperature,
        }
    }
}

#[derive(Debug)]
pub struct History {
    inner: Mutex<Vec<HistoryEntry>>,
    cap: usize,
}

impl History {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(10_000))),
            cap: cap.min(10_000),
        }
    }

    pub fn push(&self, text: &str, analysis: &Analysis) {
        let entry = HistoryEntry {
            ts_unix: now_unix(),
            text: text.to_string(),
            label: analysis.label,
            confidence: analysis.confidence,
            reading: analysis.reading.clone(),
        };

        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    /// Last `n` entries, newest first.
    pub fn snapshot_last_n(&self, n: usize) -> Vec<HistoryEntry> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let start = v.len().saturating_sub(n);
        let mut out = v[start..].to_vec();
        out.reverse();
        out
    }

    /// Full log, newest first.
    pub fn snapshot_all(&self) -> Vec<HistoryEntry> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let mut out = v.clone();
        out.reverse();
        out
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("history mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.lock().expect("history mutex poisoned").clear();
    }

    pub fn stats(&self) -> SessionStats {
        let v = self.inner.lock().expect("history mutex poisoned");
        let mut pos = 0;
        let mut neg = 0;
        let mut neu = 0;
        for e in v.iter() {
            match e.label {
                Sentiment::Positive => pos += 1,
                Sentiment::Negative => neg += 1,
                Sentiment::Neutral => neu += 1,
            }
        }
        SessionStats::from_counts(pos, neg, neu)
    }

    /// Full export, newest first, with the original table columns.
    pub fn to_csv(&self) -> anyhow::Result<Vec<u8>> {
        let rows = self.snapshot_all();
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(["Texto do cliente", "Sentimento identificado", "Leitura de CX"])?;
        for e in &rows {
            wtr.write_record([
                e.text.as_str(),
                e.sentiment_display().as_str(),
                e.reading.as_str(),
            ])?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| anyhow::anyhow!("csv flush failed: {e}"))?;
        Ok(bytes)
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
