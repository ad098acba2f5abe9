// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Declarative Vega-Lite (v5) chart specifications with inlined data.
//!
//! Nothing here renders; any Vega-Lite host can display the output.

use crate::aggregate::{self, Bucket, WEEKDAYS};
use crate::models::ExpenseTable;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value, json};

const SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

fn num(d: Decimal) -> Value {
    json!(d.to_f64().unwrap_or_default())
}

fn chart(title: &str, values: Vec<Value>, body: Value) -> Value {
    let mut spec = json!({
        "$schema": SCHEMA,
        "title": title,
        "width": "container",
        "data": { "values": values },
    });
    if let (Some(spec_obj), Value::Object(extra)) = (spec.as_object_mut(), body) {
        spec_obj.extend(extra);
    }
    spec
}

/// Cumulative cost (red) layered over cumulative balance change.
pub fn simple_timeseries(table: &ExpenseTable) -> Value {
    let values = aggregate::cumulative(table)
        .into_iter()
        .map(|p| {
            json!({
                "Date": p.date.to_string(),
                "Cost": num(p.cost),
                "BalanceChange": num(p.balance_change),
            })
        })
        .collect();
    chart(
        "Cumulative expenses",
        values,
        json!({
            "layer": [
                {
                    "mark": "line",
                    "encoding": {
                        "x": { "field": "Date", "type": "temporal" },
                        "y": { "field": "Cost", "type": "quantitative" },
                        "color": { "value": "red" }
                    }
                },
                {
                    "mark": "line",
                    "encoding": {
                        "x": { "field": "Date", "type": "temporal" },
                        "y": { "field": "BalanceChange", "type": "quantitative" }
                    }
                }
            ]
        }),
    )
}

pub fn bar_by_date(table: &ExpenseTable) -> Value {
    let values = aggregate::bucket_totals(table, Bucket::Week)
        .into_iter()
        .map(|b| json!({ "Date": b.bucket.to_string(), "Cost": num(b.cost) }))
        .collect();
    chart(
        "Expenses by Week",
        values,
        json!({
            "mark": "bar",
            "encoding": {
                "x": { "field": "Date", "type": "temporal" },
                "y": { "field": "Cost", "type": "quantitative" }
            }
        }),
    )
}

pub fn bar_by_type(table: &ExpenseTable) -> Value {
    let values = aggregate::type_totals(table)
        .into_iter()
        .map(|t| json!({ "Type": t.r#type, "Cost": num(t.cost) }))
        .collect();
    chart(
        "Expenses by Type",
        values,
        json!({
            "mark": "bar",
            "encoding": {
                "x": { "field": "Type", "type": "nominal" },
                "y": { "field": "Cost", "type": "quantitative" },
                "color": { "field": "Type", "type": "nominal", "legend": null }
            }
        }),
    )
}

pub fn area_chart(table: &ExpenseTable) -> Value {
    let values = aggregate::daily_cumulative_by_type(table)
        .into_iter()
        .map(|s| {
            json!({
                "Date": s.bucket.to_string(),
                "Type": s.r#type,
                "Total Expense": num(s.cost),
            })
        })
        .collect();
    chart(
        "Percentage of Expenses by Type",
        values,
        json!({
            "mark": "area",
            "encoding": {
                "x": { "field": "Date", "type": "temporal" },
                "y": { "field": "Total Expense", "type": "quantitative", "stack": "normalize" },
                "color": { "field": "Type", "type": "nominal" }
            }
        }),
    )
}

pub fn bar_by_weekday(table: &ExpenseTable) -> Value {
    let values = aggregate::weekday_means(table)
        .into_iter()
        .map(|w| json!({ "Weekday": w.weekday, "Cost": num(w.mean) }))
        .collect();
    chart(
        "Mean Expense by Weekday",
        values,
        json!({
            "mark": "bar",
            "encoding": {
                "x": { "field": "Weekday", "type": "ordinal", "sort": WEEKDAYS },
                "y": { "field": "Cost", "type": "quantitative", "title": "Mean Cost" }
            }
        }),
    )
}

/// Histogram of costs with the top tail above `q` removed.
pub fn histogram(table: &ExpenseTable, q: Decimal) -> Value {
    let values = aggregate::trim_outliers(table, q)
        .rows()
        .iter()
        .map(|r| json!({ "Date": r.date.to_string(), "Type": r.r#type, "Cost": num(r.cost) }))
        .collect();
    chart(
        "Expense Distribution",
        values,
        json!({
            "mark": "bar",
            "encoding": {
                "x": { "field": "Cost", "type": "quantitative", "bin": { "maxbins": 30 } },
                "y": { "aggregate": "count", "type": "quantitative" }
            }
        }),
    )
}

/// All dashboard charts keyed by name.
pub fn dashboard(table: &ExpenseTable, q: Decimal) -> Value {
    let mut specs = Map::new();
    specs.insert("cumulative".into(), simple_timeseries(table));
    specs.insert("by_week".into(), bar_by_date(table));
    specs.insert("by_type".into(), bar_by_type(table));
    specs.insert("type_share".into(), area_chart(table));
    specs.insert("by_weekday".into(), bar_by_weekday(table));
    specs.insert("distribution".into(), histogram(table, q));
    Value::Object(specs)
}
