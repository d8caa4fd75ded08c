//! Events emitted by model mutations, captured through the instrument
//! subscriber and inspected as DataFrames.

#![cfg(feature = "instrument")]

use econ_core::instrument;
use econ_core::{
    Country, DemandCurve, PpcModel, Product, Resources, SupplyCurve, SupplyDemandModel,
    Technology, TradeModel,
};
use polars::prelude::*;

fn economy(tech_wheat: f64) -> PpcModel {
    PpcModel::new(
        Product::new("Wheat", 2.0),
        Product::new("Cloth", 2.0),
        Resources::from_amounts(5.0, 3, 2.0, 1.0),
        Technology::new(tech_wheat),
        Technology::new(1.0),
    )
}

#[test]
fn technology_improvements_are_recorded() {
    let mut model = economy(1.0);
    let ((), log) = instrument::capture(|| {
        model.improve_technology_a(0.5);
        model.improve_technology_b(2.0);
        model.improve_technology_a(0.5);
    });

    let table = log.table("technology").unwrap();
    assert_eq!(table.rows, 3);
    assert_eq!(table.strs("product").unwrap(), &["Wheat", "Cloth", "Wheat"]);
    assert_eq!(table.f64s("before").unwrap(), &[1.0, 1.0, 1.5]);
    assert_eq!(table.f64s("after").unwrap(), &[1.5, 3.0, 2.0]);
}

#[test]
fn resource_changes_record_totals() {
    let mut model = economy(1.0);
    let ((), log) = instrument::capture(|| model.change_available_resources(8.0));

    let table = log.table("resources").unwrap();
    assert_eq!(table.f64s("delta").unwrap(), &[8.0]);
    assert_eq!(table.f64s("total_before").unwrap(), &[10.0]);
    assert_eq!(table.f64s("total_after").unwrap(), &[48.0]);
}

#[test]
fn trade_verdicts_become_a_dataframe() {
    let trade = TradeModel::new(economy(2.0), economy(1.0)).unwrap();
    let wheat = Product::new("Wheat", 0.0);
    let cloth = Product::new("Cloth", 0.0);

    let (verdicts, log) = instrument::capture(|| {
        (
            trade.absolute_advantage(&wheat),
            trade.absolute_advantage(&cloth),
            trade.comparative_advantage(&wheat).unwrap(),
        )
    });
    assert_eq!(verdicts, (Some(Country::A), None, Some(Country::A)));

    let df = log.table("trade").unwrap().to_dataframe().unwrap();
    assert_eq!(df.height(), 3);

    let comparative = df
        .lazy()
        .filter(col("kind").eq(lit("comparative")))
        .collect()
        .unwrap();
    assert_eq!(comparative.height(), 1);

    let winners: Vec<Option<&str>> = comparative
        .column("winner")
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(winners, vec![Some("A")]);
}

#[test]
fn curve_shifts_record_side_and_intercept() {
    let mut market = SupplyDemandModel::new(
        SupplyCurve::new(Product::new("Rice", 1.0), 0.0, 1.0),
        DemandCurve::new(Product::new("Rice", 1.0), 10.0, -1.0, true),
    )
    .unwrap();

    let ((), log) = instrument::capture(|| {
        market.supply_mut().adjust_for_government_tools(1.0, 3.0);
        market.demand_mut().increase_consumer_income(4.0);
    });

    let table = log.table("market_shift").unwrap();
    assert_eq!(table.strs("curve").unwrap(), &["supply", "demand"]);
    assert_eq!(table.f64s("delta").unwrap(), &[2.0, -4.0]);
    assert_eq!(table.f64s("intercept").unwrap(), &[2.0, 6.0]);
}

#[test]
fn read_only_queries_emit_nothing() {
    let model = economy(1.0);
    let ((), log) = instrument::capture(|| {
        let _ = model.amount_of_a(1);
        let _ = model.economic_state(1, 1);
        let _ = model.frontier(4);
    });
    assert!(log.tables.is_empty());
}
