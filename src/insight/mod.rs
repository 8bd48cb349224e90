use crate::config::InsightConfig;
use crate::models::WeeklyAverages;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

pub const FALLBACK_INSIGHT: &str = "Could not generate an insight at this time.";
pub const NO_DATA_INSIGHT: &str =
    "Not enough data to generate insights. Keep adding readings!";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for the external text-generation endpoint (Ollama-style
/// `/api/generate`). Failures never propagate: the caller always gets
/// a displayable string.
#[derive(Clone)]
pub struct InsightGenerator {
    client: reqwest::Client,
    base_url: Option<String>,
    model: String,
}

impl InsightGenerator {
    pub fn new(config: &InsightConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }

    pub async fn consumption_insight(&self, averages: &WeeklyAverages) -> String {
        if averages.current_week_consumption == 0.0
            && averages.previous_week_consumption == 0.0
        {
            return NO_DATA_INSIGHT.to_string();
        }

        match self.generate(averages).await {
            Ok(insight) => insight,
            Err(e) => {
                warn!("Insight generation failed: {}", e);
                FALLBACK_INSIGHT.to_string()
            }
        }
    }

    async fn generate(&self, averages: &WeeklyAverages) -> Result<String, String> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| "no insight endpoint configured".to_string())?;

        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: build_prompt(averages),
            stream: false,
        };

        let url = format!("{}/api/generate", base_url);

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("insight request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("insight API error ({}): {}", status, body));
        }

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| format!("failed to parse insight response: {}", e))?;

        Ok(result.response.trim().to_string())
    }
}

fn build_prompt(averages: &WeeklyAverages) -> String {
    format!(
        "You are an expert energy consumption analyst.\n\n\
         You will receive the average daily energy consumption for the current week \
         and the previous week. Generate a concise and informative insight comparing \
         the two values, highlighting any significant changes or trends.\n\n\
         Current Week Consumption: {} kWh\n\
         Previous Week Consumption: {} kWh\n\n\
         Insight:",
        averages.current_week_consumption, averages.previous_week_consumption
    )
}
