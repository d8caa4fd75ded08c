//! End-to-end scenarios loaded from JSON, mirroring classroom exercises.

use econ_core::{Country, EconError, PpcState, Product, Scenario, SupplyDemandState};

/// Portugal makes both goods more cheaply than England, but its edge is
/// larger in wine.
const WINE_AND_CLOTH: &str = r#"{
    "countries": [
        {
            "name": "England",
            "resources": { "land": 100.0, "labor": 50, "capital": 50.0, "entrepreneurship": 1.0 },
            "product_a": { "name": "Wine", "base_cost": 120.0 },
            "product_b": { "name": "Cloth", "base_cost": 100.0 },
            "technology_a": 10.0,
            "technology_b": 10.0
        },
        {
            "name": "Portugal",
            "resources": { "land": 100.0, "labor": 50, "capital": 50.0, "entrepreneurship": 1.0 },
            "product_a": { "name": "Wine", "base_cost": 80.0 },
            "product_b": { "name": "Cloth", "base_cost": 90.0 },
            "technology_a": 10.0,
            "technology_b": 10.0
        }
    ],
    "market": {
        "product": { "name": "Wine", "base_cost": 8.0 },
        "supply": { "intercept": 2.0, "slope": 0.5 },
        "demand": { "intercept": 20.0, "slope": -1.0 },
        "inferior_good": false
    }
}"#;

fn wine() -> Product {
    Product::new("Wine", 0.0)
}

fn cloth() -> Product {
    Product::new("Cloth", 0.0)
}

#[test]
fn portugal_has_absolute_advantage_in_both_goods() {
    let scenario = Scenario::from_json(WINE_AND_CLOTH).unwrap();
    let trade = scenario.build_trade().unwrap();

    // England: 200 / 12 = 16 wine, 200 / 10 = 20 cloth
    // Portugal: 200 / 8 = 25 wine, 200 / 9 = 22 cloth
    assert_eq!(trade.country(Country::A).amount_of_a(0), 16);
    assert_eq!(trade.country(Country::B).amount_of_a(0), 25);
    assert_eq!(trade.absolute_advantage(&wine()), Some(Country::B));
    assert_eq!(trade.absolute_advantage(&cloth()), Some(Country::B));
}

#[test]
fn comparative_advantage_splits_wine_and_cloth() {
    let scenario = Scenario::from_json(WINE_AND_CLOTH).unwrap();
    let trade = scenario.build_trade().unwrap();

    // Wine costs England 1.2 cloth and Portugal 0.89 cloth
    assert_eq!(trade.comparative_advantage(&wine()).unwrap(), Some(Country::B));
    assert_eq!(trade.comparative_advantage(&cloth()).unwrap(), Some(Country::A));
}

#[test]
fn technology_catch_up_moves_advantage() {
    let scenario = Scenario::from_json(WINE_AND_CLOTH).unwrap();
    let mut trade = scenario.build_trade().unwrap();

    // England's wine cost drops from 12 to 6
    trade.country_mut(Country::A).improve_technology_a(10.0);

    assert_eq!(trade.country(Country::A).amount_of_a(0), 33);
    assert_eq!(trade.absolute_advantage(&wine()), Some(Country::A));
    assert_eq!(trade.comparative_advantage(&wine()).unwrap(), Some(Country::A));
    assert_eq!(trade.comparative_advantage(&cloth()).unwrap(), Some(Country::B));
}

#[test]
fn unknown_product_has_no_advantage() {
    let trade = Scenario::from_json(WINE_AND_CLOTH)
        .unwrap()
        .build_trade()
        .unwrap();
    let iron = Product::new("Iron", 1.0);

    assert_eq!(trade.absolute_advantage(&iron), None);
    assert!(matches!(
        trade.comparative_advantage(&iron),
        Err(EconError::UnknownProduct { .. })
    ));
}

#[test]
fn production_points_against_england_frontier() {
    let countries = Scenario::from_json(WINE_AND_CLOTH)
        .unwrap()
        .build_countries()
        .unwrap();
    let england = &countries[0];

    // 10 wine * 12 + 8 cloth * 10 = 200
    assert!(england.is_on_curve(10, 8));
    assert_eq!(england.economic_state(10, 8), PpcState::FullCapacity);
    assert_eq!(england.economic_state(5, 5), PpcState::Impossible);
    assert_eq!(england.economic_state(20, 20), PpcState::Underproduction);
    assert_eq!(england.amount_of_b(10), 8);
}

#[test]
fn resource_growth_shifts_frontier_outward() {
    let mut countries = Scenario::from_json(WINE_AND_CLOTH)
        .unwrap()
        .build_countries()
        .unwrap();
    let portugal = &mut countries[1];

    // +1 to each factor: (101 + 51 + 51) * 2 = 406
    portugal.change_available_resources(4.0);

    assert_eq!(portugal.total_resources(), 406.0);
    assert_eq!(portugal.amount_of_a(0), 50);
    assert_eq!(portugal.amount_of_b(0), 45);
}

#[test]
fn scenario_market_reacts_to_shifts() {
    let scenario = Scenario::from_json(WINE_AND_CLOTH).unwrap();
    let mut market = scenario.build_market().unwrap().unwrap();

    // 2 + 0.5q = 20 - q
    let eq = market.equilibrium().unwrap();
    assert_eq!(eq.quantity, 12.0);
    assert_eq!(eq.price, 8.0);
    assert_eq!(
        market.economic_state_given_quantity(12),
        SupplyDemandState::Equilibrium
    );

    market.demand_mut().increase_consumer_income(3.0);
    let eq = market.equilibrium().unwrap();
    assert_eq!(eq.quantity, 14.0);
    assert_eq!(eq.price, 9.0);
    assert_eq!(
        market.economic_state_given_quantity(12),
        SupplyDemandState::Surplus
    );
}

#[test]
fn mismatched_country_products_fail_to_build() {
    let mut scenario = Scenario::from_json(WINE_AND_CLOTH).unwrap();
    scenario.countries[1].product_b.name = "Linen".to_string();
    assert!(matches!(
        scenario.build_trade(),
        Err(EconError::MismatchedProducts { .. })
    ));
}
