//! Tests for table plans evaluated over raw frames.

mod common;

use common::{customer_row, customers, order_row, orders};
use framer_ingest::{column_text, column_values};
use framer_model::{OrderLinkStrategy, SchemaVersion, Value};
use framer_transform::{ReshapeContext, reshape};

#[test]
fn output_columns_match_every_plan() {
    for version in [SchemaVersion::V1, SchemaVersion::V2] {
        let schema = version.schema();
        let raw_customers = customers(schema, &[customer_row("a1", "Smith", "0", "1")]);
        let raw_orders = orders(
            schema,
            &[("FrameOrders-Working", vec![order_row("100", "03/04/15 00:00:00", "a1", "BOS", "")])],
        );
        for plan in schema.plans {
            let raw = match plan.source {
                framer_model::RawTable::Customers => &raw_customers,
                framer_model::RawTable::Orders => &raw_orders,
            };
            let result = reshape(plan, raw, &ReshapeContext::default()).expect("reshape");
            let names: Vec<&str> = result
                .frame
                .data
                .get_columns()
                .iter()
                .map(|column| column.name().as_str())
                .collect();
            assert_eq!(names, plan.column_names(), "{version} {}", plan.name);
            assert_eq!(result.frame.record_count(), 1);
        }
    }
}

#[test]
fn accounts_v2_cleans_customer_fields() {
    let schema = SchemaVersion::V2.schema();
    let raw = customers(
        schema,
        &[
            customer_row(" ab1 ", "Smith", "0", "1"),
            customer_row("cd2", "", "0", "0"),
        ],
    );
    let plan = schema.plan("Accounts").expect("accounts plan");
    let result = reshape(plan, &raw, &ReshapeContext::default()).expect("reshape");
    let data = &result.frame.data;

    assert_eq!(
        column_text(data, "Legacy Customer Number").expect("numbers"),
        vec![Some("AB1".to_string()), Some("CD2".to_string())]
    );
    // An empty name falls back to the customer number.
    assert_eq!(
        column_text(data, "Account").expect("accounts"),
        vec![Some("Smith".to_string()), Some("CD2".to_string())]
    );
    assert_eq!(
        column_text(data, "Account Type").expect("types"),
        vec![Some("Institution".to_string()), Some("Personal".to_string())]
    );
    assert_eq!(
        column_text(data, "Source").expect("sources"),
        vec![Some("Walk In".to_string()), Some("Walk In".to_string())]
    );
    assert_eq!(
        column_values(data, "Tax Exempt").expect("flags"),
        vec![Some(Value::Flag(true)), Some(Value::Flag(false))]
    );
    assert_eq!(
        column_text(data, "Comments").expect("comments")[0].as_deref(),
        Some("likes\ngold")
    );
    let record = column_text(data, "Legacy Customer Record").expect("records");
    let first = record[0].as_deref().expect("record present");
    assert!(first.starts_with("<pre><br/>Customer Number"));
    assert!(first.contains("likes<br/><br/>gold"));
    assert!(result.unmapped.is_empty());
}

#[test]
fn delivery_location_falls_back_to_order_location() {
    let schema = SchemaVersion::V2.schema();
    let raw = orders(
        schema,
        &[(
            "FrameOrders-Working",
            vec![
                order_row("100", "03/04/15 00:00:00", "A1", "BOS", ""),
                order_row("101", "03/04/15 00:00:00", "A1", "SOM", "UPS"),
                order_row("102", "03/04/15 00:00:00", "A1", "XYZ", ""),
            ],
        )],
    );
    let plan = schema.plan("Orders").expect("orders plan");
    let result = reshape(plan, &raw, &ReshapeContext::default()).expect("reshape");
    assert_eq!(
        column_text(&result.frame.data, "Delivery Location").expect("delivery"),
        vec![
            Some("Boston".to_string()),
            Some("Delivery".to_string()),
            None
        ]
    );
    assert_eq!(result.unmapped.get("Order Location"), Some(&1));
    assert_eq!(result.unmapped.get("Delivery Location"), Some(&1));
    assert_eq!(
        column_text(&result.frame.data, "Salesperson Link").expect("sales"),
        vec![Some("RS".to_string()); 3]
    );
    assert_eq!(
        column_text(&result.frame.data, "Order Status").expect("status")[0].as_deref(),
        Some("Closed")
    );
}

#[test]
fn order_links_disambiguate_repeated_order_numbers() {
    let schema = SchemaVersion::V2.schema();
    let raw = orders(
        schema,
        &[
            ("FrameOrders-Working", vec![order_row("100", "03/04/15 00:00:00", "A1", "BOS", "")]),
            ("FrameOrders-Closed", vec![order_row("100", "01/02/12 00:00:00", "B2", "BOS", "")]),
        ],
    );
    let treatments = schema.plan("Treatments").expect("treatments plan");
    let orders_plan = schema.plan("Orders").expect("orders plan");

    let by_index = ReshapeContext::default();
    let links = column_text(
        &reshape(treatments, &raw, &by_index).expect("reshape").frame.data,
        "Order Link",
    )
    .expect("links");
    assert_eq!(
        links,
        vec![Some("100-0".to_string()), Some("100-1".to_string())]
    );
    let order_ids = column_text(
        &reshape(orders_plan, &raw, &by_index).expect("reshape").frame.data,
        "Legacy Order ID",
    )
    .expect("ids");
    assert_eq!(order_ids, links);

    let by_customer = ReshapeContext {
        link_strategy: OrderLinkStrategy::CustomerNumber,
    };
    let links = column_text(
        &reshape(treatments, &raw, &by_customer).expect("reshape").frame.data,
        "Order Link",
    )
    .expect("links");
    assert_eq!(
        links,
        vec![Some("100-A1".to_string()), Some("100-B2".to_string())]
    );
}

#[test]
fn treatments_split_dimensions_by_schema_version() {
    let rows = vec![order_row("100", "03/04/15 00:00:00", "A1", "BOS", "")];
    let v2 = SchemaVersion::V2.schema();
    let raw = orders(v2, &[("FrameOrders-Working", rows.clone())]);
    let result = reshape(
        v2.plan("Treatments").expect("plan"),
        &raw,
        &ReshapeContext::default(),
    )
    .expect("reshape");
    let data = &result.frame.data;
    assert_eq!(
        column_values(data, "Frame Width Inches").expect("inches"),
        vec![Some(Value::Integer(24))]
    );
    assert_eq!(
        column_text(data, "Frame Width Fraction").expect("fraction"),
        vec![Some(".1/2".to_string())]
    );
    assert_eq!(
        column_text(data, "Frame Height Fraction").expect("fraction"),
        vec![None]
    );
    assert_eq!(
        column_text(data, "Frame Manufacturer").expect("mfg"),
        vec![Some("Nielsen".to_string())]
    );
    assert_eq!(
        column_text(data, "Glazing").expect("glazing"),
        vec![Some("Regular Glass".to_string())]
    );

    let v1 = SchemaVersion::V1.schema();
    let raw = orders(v1, &[("FrameOrders-Working", rows)]);
    let result = reshape(
        v1.plan("Treatments").expect("plan"),
        &raw,
        &ReshapeContext::default(),
    )
    .expect("reshape");
    assert_eq!(
        column_text(&result.frame.data, "Frame Width Fraction").expect("fraction"),
        vec![Some(" 1/2'".to_string())]
    );
    assert_eq!(
        column_text(&result.frame.data, "Frame Height Fraction").expect("fraction"),
        vec![Some("\"".to_string())]
    );
    assert_eq!(
        column_text(&result.frame.data, "Order Status").expect("status"),
        vec![Some("Archived".to_string())]
    );
}

#[test]
fn empty_raw_table_reshapes_to_empty_frame() {
    let schema = SchemaVersion::V2.schema();
    let raw = customers(schema, &[]);
    let plan = schema.plan("Contacts").expect("plan");
    let result = reshape(plan, &raw, &ReshapeContext::default()).expect("reshape");
    assert_eq!(result.frame.record_count(), 0);
    assert_eq!(result.frame.column_count(), plan.columns.len());
}
