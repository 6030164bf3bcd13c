// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::blocking::Client;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::{GoalPlan, GoalPlanner};
use crate::error::GoalError;
use crate::utils::http_client;

pub const QUERY_PARAM: &str = "consulta";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemotePlan {
    pub monthly_saving: Decimal,
    pub projected_date: String,
    pub recommendations: Value,
}

fn decimal_field(v: &Value) -> Option<Decimal> {
    match v {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl RemotePlan {
    /// Picks `ahorro_mensual`, `fecha_proyectada` and `recomendaciones`
    /// out of the webhook body.
    pub fn from_value(body: &Value) -> Result<Self, GoalError> {
        let obj = body
            .as_object()
            .ok_or_else(|| GoalError::Service("response is not a JSON object".into()))?;
        let monthly_saving = obj
            .get("ahorro_mensual")
            .and_then(decimal_field)
            .ok_or_else(|| GoalError::Service("missing or invalid 'ahorro_mensual'".into()))?;
        let projected_date = match obj.get("fecha_proyectada") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => {
                return Err(GoalError::Service("missing 'fecha_proyectada'".into()));
            }
            Some(other) => other.to_string(),
        };
        Ok(RemotePlan {
            monthly_saving,
            projected_date,
            recommendations: obj.get("recomendaciones").cloned().unwrap_or(Value::Null),
        })
    }

    pub fn recommendation_lines(&self) -> Vec<String> {
        render_recommendations(&self.recommendations)
    }
}

fn suggestion_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Object(o) => match o.get("sugerencia").or_else(|| o.get("suggestion")) {
            Some(Value::String(s)) => s.clone(),
            _ => v.to_string(),
        },
        other => other.to_string(),
    }
}

/// Flattens whatever shape the webhook used for recommendations into
/// display lines; unknown shapes are shown as compact JSON.
pub fn render_recommendations(v: &Value) -> Vec<String> {
    match v {
        Value::Null => Vec::new(),
        Value::Object(map) => map
            .iter()
            .map(|(category, item)| format!("{}: {}", category, suggestion_text(item)))
            .collect(),
        Value::Array(items) => items.iter().map(suggestion_text).collect(),
        Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}

pub struct RemotePlanner {
    url: String,
    client: Client,
}

impl RemotePlanner {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        Ok(RemotePlanner {
            url: url.trim().to_string(),
            client: http_client()?,
        })
    }

    fn call(&self, query: &str) -> Result<Value, GoalError> {
        let resp = self
            .client
            .get(&self.url)
            .query(&[(QUERY_PARAM, query)])
            .send()
            .map_err(|err| GoalError::Service(err.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GoalError::Service(format!("HTTP {}", status)));
        }
        resp.json::<Value>()
            .map_err(|err| GoalError::Service(format!("invalid JSON body: {}", err)))
    }
}

impl GoalPlanner for RemotePlanner {
    fn plan(&self, query: &str) -> Result<GoalPlan, GoalError> {
        let plan = self
            .call(query)
            .and_then(|body| RemotePlan::from_value(&body))
            .inspect_err(|err| {
                tracing::warn!(url = %self.url, error = %err, "goal webhook failed");
            })?;
        Ok(GoalPlan::Remote(plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_flat_and_nested_shapes() {
        let flat = json!({"vivienda": "Ahorra la cuota inicial"});
        assert_eq!(
            render_recommendations(&flat),
            vec!["vivienda: Ahorra la cuota inicial"]
        );
        let nested = json!({"ocio": {"sugerencia": "Menos restaurantes", "ahorro": 100}});
        assert_eq!(
            render_recommendations(&nested),
            vec!["ocio: Menos restaurantes"]
        );
    }

    #[test]
    fn unknown_shapes_fall_back_to_json() {
        let odd = json!({"extra": {"monto": 5}});
        assert_eq!(render_recommendations(&odd), vec![r#"extra: {"monto":5}"#]);
        assert_eq!(render_recommendations(&json!(42)), vec!["42"]);
        assert!(render_recommendations(&Value::Null).is_empty());
    }

    #[test]
    fn from_value_requires_fields() {
        let ok = json!({
            "ahorro_mensual": "150000",
            "fecha_proyectada": "marzo 2026",
            "recomendaciones": ["Ahorra"]
        });
        let plan = RemotePlan::from_value(&ok).unwrap();
        assert_eq!(plan.monthly_saving, Decimal::from(150_000));
        assert_eq!(plan.recommendation_lines(), vec!["Ahorra"]);

        let missing = json!({"fecha_proyectada": "marzo 2026"});
        assert!(matches!(
            RemotePlan::from_value(&missing),
            Err(GoalError::Service(_))
        ));
        assert!(RemotePlan::from_value(&json!([1, 2])).is_err());
    }
}
